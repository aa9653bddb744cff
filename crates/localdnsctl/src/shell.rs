//! Interactive shell
//!
//! Keeps one [`Session`] for its whole lifetime so directory listings are
//! served from the session cache after the first fetch.

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use localdns_core::{DISCLAIMER_MESSAGE, LocalDnsConsole, Session};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::cli::{ShellCommand, ShellLine, split_words};
use crate::commands;

/// What the loop does after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Read commands from stdin until `quit` or end of input
pub async fn run(console: &LocalDnsConsole, session: &mut Session, json: bool) -> Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(stdout, "{}", DISCLAIMER_MESSAGE)?;
    writeln!(stdout, "Type 'help' for a list of commands.")?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        write!(stdout, "{}", prompt(session))?;
        stdout.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(stdout)?;
            break;
        };

        if handle_line(console, session, &line, json, &mut stdout).await? == Flow::Quit {
            break;
        }
    }

    debug!("Shell closed");
    Ok(())
}

fn prompt(session: &Session) -> String {
    match session.selected_organization() {
        Some(org_id) => format!("localdns [{}]> ", org_id),
        None => "localdns> ".to_string(),
    }
}

/// Execute one shell line
///
/// Command failures are written to `out` and the shell keeps going; only
/// failures to write output are returned.
pub async fn handle_line(
    console: &LocalDnsConsole,
    session: &mut Session,
    line: &str,
    json: bool,
    out: &mut dyn Write,
) -> Result<Flow> {
    let words = match split_words(line) {
        Ok(words) if words.is_empty() => return Ok(Flow::Continue),
        Ok(words) => words,
        Err(e) => {
            writeln!(out, "Error: {}", e)?;
            return Ok(Flow::Continue);
        }
    };

    let parsed = match ShellLine::try_parse_from(words) {
        Ok(parsed) => parsed,
        Err(e) => {
            // clap renders help and usage errors the same way
            write!(out, "{}", e.render())?;
            return Ok(Flow::Continue);
        }
    };

    match parsed.command {
        ShellCommand::Quit => return Ok(Flow::Quit),
        ShellCommand::Disclaimer => writeln!(out, "{}", DISCLAIMER_MESSAGE)?,
        ShellCommand::Use { org_id } => {
            let org_id = org_id.trim();
            if org_id.is_empty() {
                writeln!(out, "Error: organization ID cannot be empty")?;
            } else {
                session.set_organization(org_id).await;
                writeln!(out, "Organization ID set to: {}", org_id)?;
            }
        }
        ShellCommand::Console(command) => {
            if let Err(e) = commands::execute(console, session, command, json, out).await {
                writeln!(out, "{}", e)?;
            }
        }
    }

    Ok(Flow::Continue)
}
