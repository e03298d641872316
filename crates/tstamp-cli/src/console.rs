//! Terminal stand-ins for the page host and the notification utility.

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use tracing::debug;
use tstamp_runtime::{Notifier, Page, Severity};

/// Prints status updates to stdout, one per line.
///
/// The action controls have no terminal counterpart and a reload simply ends
/// the run, so both are only logged.
#[derive(Debug)]
pub struct ConsolePage {
    color: bool,
}

impl ConsolePage {
    pub fn new() -> Self {
        Self {
            color: std::io::stdout().is_terminal(),
        }
    }
}

impl Default for ConsolePage {
    fn default() -> Self {
        Self::new()
    }
}

impl Page for ConsolePage {
    fn set_status(&self, text: &str) {
        if !self.color {
            println!("{}", text);
        } else if text.starts_with("Error") {
            println!("{}", text.red());
        } else if text.contains("(100%)") {
            println!("{}", text.green().bold());
        } else {
            println!("{}", text.dimmed());
        }
    }

    fn set_controls_enabled(&self, enabled: bool) {
        debug!(enabled, "action controls");
    }

    fn reload(&self) {
        debug!("reload requested");
    }
}

/// Prints notifications to stderr.
#[derive(Debug)]
pub struct ConsoleNotifier {
    color: bool,
}

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self {
            color: std::io::stderr().is_terminal(),
        }
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, title: &str, message: &str, severity: Severity) {
        let tag = format!("[{}]", severity);
        if !self.color {
            eprintln!("{} {}: {}", tag, title, message);
            return;
        }
        let tag = match severity {
            Severity::Danger => tag.red().bold().to_string(),
            Severity::Warning => tag.yellow().bold().to_string(),
            Severity::Success => tag.green().bold().to_string(),
            Severity::Info => tag.cyan().to_string(),
        };
        eprintln!("{} {}: {}", tag, title.bold(), message);
    }
}
