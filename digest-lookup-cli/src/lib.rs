pub mod error;
pub mod output;
pub mod repl;

pub use error::Error;
pub use output::{OutputFormat, render_digest, render_message, render_report};
pub use repl::{Command, run};
