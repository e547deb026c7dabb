//! Selection commands read from stdin stand in for clicks on the page.
use std::io::BufRead;
use std::sync::mpsc;
use std::thread;

use digest_core::{Msg, Tab, UnknownTab};
use viewer_logging::{viewer_debug, viewer_warn};

use super::app::AppEvent;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    #[error(transparent)]
    UnknownTab(#[from] UnknownTab),
    #[error("unknown command {0:?} (try `tab youtube|apps`, `date YYYY-MM-DD`, `quit`)")]
    UnknownCommand(String),
}

/// `Ok(None)` for blank lines.
pub fn parse_command(line: &str) -> Result<Option<AppEvent>, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (command, rest) = line
        .split_once(char::is_whitespace)
        .map(|(command, rest)| (command, rest.trim()))
        .unwrap_or((line, ""));

    match command {
        "tab" => {
            let tab: Tab = rest.parse()?;
            Ok(Some(AppEvent::Core(Msg::TabSelected(tab))))
        }
        "date" => Ok(Some(AppEvent::Core(Msg::DateSelected(rest.to_string())))),
        "quit" | "exit" | "q" => Ok(Some(AppEvent::Quit)),
        other => Err(InputError::UnknownCommand(other.to_string())),
    }
}

/// Forwards stdin commands until EOF or `quit`.
pub fn spawn_stdin_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match parse_command(&line) {
                Ok(Some(event)) => {
                    let quit = matches!(event, AppEvent::Quit);
                    if tx.send(event).is_err() || quit {
                        return;
                    }
                }
                Ok(None) => {}
                Err(err) => viewer_warn!("Ignoring input {:?}: {}", line, err),
            }
        }
        viewer_debug!("stdin closed");
        let _ = tx.send(AppEvent::Quit);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tab_and_date_commands() {
        assert_eq!(
            parse_command("tab apps"),
            Ok(Some(AppEvent::Core(Msg::TabSelected(Tab::Apps))))
        );
        assert_eq!(
            parse_command("  date   2024-01-01 "),
            Ok(Some(AppEvent::Core(Msg::DateSelected("2024-01-01".to_string()))))
        );
    }

    #[test]
    fn bare_date_selects_newest() {
        assert_eq!(
            parse_command("date"),
            Ok(Some(AppEvent::Core(Msg::DateSelected(String::new()))))
        );
    }

    #[test]
    fn unknown_tab_is_reported_not_dispatched() {
        assert_eq!(
            parse_command("tab podcasts"),
            Err(InputError::UnknownTab(UnknownTab("podcasts".to_string())))
        );
    }

    #[test]
    fn quit_and_blank_lines() {
        assert_eq!(parse_command("quit"), Ok(Some(AppEvent::Quit)));
        assert_eq!(parse_command("   "), Ok(None));
        assert!(matches!(
            parse_command("reload"),
            Err(InputError::UnknownCommand(_))
        ));
    }
}
