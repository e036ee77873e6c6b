use std::time::Duration;

use clap::{Parser, Subcommand};
use digest_lookup::{LATENCY_ENV, LookupConfig, Session, parse_latency};
use digest_lookup_cli::{Error, OutputFormat, render_digest, render_report, run};
use tokio::io::{self, AsyncWriteExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "digest-lookup")]
#[command(about = "Analyze SHA-256 password hashes and generate test hashes")]
struct Args {
    /// Simulated lookup latency in milliseconds
    #[arg(
        long = "latency-ms",
        global = true,
        env = LATENCY_ENV,
        value_name = "MS",
        value_parser = parse_latency,
        default_value = "0"
    )]
    latency: Duration,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Option<Mode>,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Look up a hash, or a prefix of at least 10 characters
    Analyze { hash: String },
    /// Print the SHA-256 hash of a password
    Generate { password: String },
    /// Read commands interactively (the default)
    Repl,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = LookupConfig::with_latency(args.latency);
    info!(latency = ?config.simulated_latency, "starting session");

    let mut session = Session::seeded(config);
    let mut stdout = io::stdout();

    match args.command.unwrap_or(Mode::Repl) {
        Mode::Analyze { hash } => {
            let report = session.analyze_async(&hash).await;
            let rendered = render_report(&report, args.format)?;
            stdout.write_all(format!("{rendered}\n").as_bytes()).await?;
        }
        Mode::Generate { password } => {
            let digest = session.generate_async(&password).await;
            let rendered = render_digest(&digest, args.format)?;
            stdout.write_all(format!("{rendered}\n").as_bytes()).await?;
        }
        Mode::Repl => {
            run(&mut session, BufReader::new(io::stdin()), &mut stdout, args.format).await?;
        }
    }

    stdout.flush().await?;
    Ok(())
}
