use digest_lookup::{SAMPLE_DIGEST, Session};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::error::Error;
use crate::output::{OutputFormat, render_digest, render_message, render_report};

const PROMPT: &str = "digest> ";

const HELP: &str = "\
Commands:
  analyze <hash>       look up a SHA-256 hash or a prefix of at least 10 characters (alias: a)
  generate <password>  hash a password and remember it for later lookups (alias: g)
  sample               print a known hash to try
  help                 show this message
  quit                 leave (also: exit, Ctrl-D)";

/// One line of REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Analyze(&'a str),
    /// Everything after the separator following the command word, verbatim.
    Generate(&'a str),
    Sample,
    Help,
    Quit,
    Blank,
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    pub fn parse(line: &'a str) -> Self {
        let trimmed = line.trim_start();
        if trimmed.trim_end().is_empty() {
            return Command::Blank;
        }

        let (word, rest) = trimmed.split_once(char::is_whitespace).unwrap_or((trimmed, ""));
        match word {
            "analyze" | "a" => Command::Analyze(rest.trim()),
            "generate" | "g" => Command::Generate(rest),
            "sample" => Command::Sample,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => Command::Unknown(other),
        }
    }
}

/// Reads commands from `input` until `quit` or EOF, writing results to `out`.
///
/// Generated digests are registered in the session's store, so they can be
/// analyzed later in the same run.
pub async fn run<R, W>(
    session: &mut Session,
    input: R,
    out: &mut W,
    format: OutputFormat,
) -> Result<(), Error>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    // JSON output carries results only, one object per line.
    let interactive = format == OutputFormat::Text;

    if interactive {
        write_line(out, "Type 'help' for commands.").await?;
    }
    loop {
        if interactive {
            out.write_all(PROMPT.as_bytes()).await?;
            out.flush().await?;
        }

        let Some(line) = lines.next_line().await? else {
            debug!("input closed");
            break;
        };

        let response = match Command::parse(&line) {
            Command::Blank => continue,
            Command::Quit => break,
            Command::Help => render_message(HELP, format)?,
            Command::Sample => {
                render_message(&format!("Try this test hash: {SAMPLE_DIGEST}"), format)?
            }
            Command::Analyze("") => render_message("usage: analyze <hash>", format)?,
            Command::Analyze(candidate) => {
                render_report(&session.analyze_async(candidate).await, format)?
            }
            Command::Generate("") => render_message("usage: generate <password>", format)?,
            Command::Generate(password) => {
                render_digest(&session.generate_async(password).await, format)?
            }
            Command::Unknown(word) => {
                render_message(&format!("unknown command '{word}', type 'help'"), format)?
            }
        };
        write_line(out, &response).await?;
    }

    out.flush().await?;
    Ok(())
}

async fn write_line<W: AsyncWrite + Unpin>(out: &mut W, line: &str) -> Result<(), Error> {
    out.write_all(line.as_bytes()).await?;
    out.write_all(b"\n").await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use digest_lookup::LookupConfig;

    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("analyze ef92b778ba"), Command::Analyze("ef92b778ba"));
        assert_eq!(Command::parse("  a   ef92b778ba  "), Command::Analyze("ef92b778ba"));
        assert_eq!(Command::parse("analyze"), Command::Analyze(""));
        assert_eq!(Command::parse("sample"), Command::Sample);
        assert_eq!(Command::parse("help"), Command::Help);
        assert_eq!(Command::parse("exit"), Command::Quit);
        assert_eq!(Command::parse("   "), Command::Blank);
        assert_eq!(Command::parse(""), Command::Blank);
        assert_eq!(Command::parse("crack abc"), Command::Unknown("crack"));
    }

    #[test]
    fn test_parse_generate_keeps_password_spacing() {
        assert_eq!(Command::parse("generate two words"), Command::Generate("two words"));
        assert_eq!(Command::parse("g  lead"), Command::Generate(" lead"));
        assert_eq!(Command::parse("generate"), Command::Generate(""));
    }

    #[tokio::test]
    async fn test_unknown_command_keeps_running() {
        let mut session = Session::seeded(LookupConfig::default());
        let mut out = Vec::new();
        let input: &[u8] = b"bogus\nanalyze doesnotexist000000\n";

        run(&mut session, input, &mut out, OutputFormat::Text).await.unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("unknown command 'bogus'"));
        assert!(out.contains("Status: Password not found"));
    }

    #[tokio::test]
    async fn test_json_mode_writes_only_json_lines() {
        let mut session = Session::seeded(LookupConfig::default());
        let mut out = Vec::new();
        let input: &[u8] = b"analyze doesnotexist000000\n\ngenerate pw\n\
            help\nsample\nbogus\nanalyze\n";

        run(&mut session, input, &mut out, OutputFormat::Json).await.unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(!out.contains(PROMPT));
        assert_eq!(out.lines().count(), 6);
        for line in out.lines() {
            assert!(serde_json::from_str::<serde_json::Value>(line).is_ok(), "{line}");
        }
    }

    #[tokio::test]
    async fn test_quit_stops_reading() {
        let mut session = Session::seeded(LookupConfig::default());
        let mut out = Vec::new();
        let input: &[u8] = b"quit\ngenerate never\n";

        run(&mut session, input, &mut out, OutputFormat::Text).await.unwrap();

        assert_eq!(session.store().len(), 4);
        assert!(!String::from_utf8(out).unwrap().contains("Generated Hash"));
    }

    #[tokio::test]
    async fn test_usage_messages() {
        let mut session = Session::seeded(LookupConfig::default());
        let mut out = Vec::new();
        let input: &[u8] = b"analyze\ngenerate\n";

        run(&mut session, input, &mut out, OutputFormat::Text).await.unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("usage: analyze <hash>"));
        assert!(out.contains("usage: generate <password>"));
    }
}
