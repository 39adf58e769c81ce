//! Clipboard writing as an ordered chain of strategies.
//!
//! No single mechanism works everywhere, so candidates are tried in a
//! fixed order and the first success wins. Each strategy pipes the text to
//! a platform copy tool; a missing tool or failed pipe counts as that
//! strategy failing, not as an error.

use log::debug;
use std::io::Write;
use std::process::{Command, Stdio};

pub trait ClipboardStrategy {
    fn name(&self) -> &str;
    fn copy(&self, text: &str) -> bool;
}

/// Strategy that pipes the text into an external copy command.
struct CommandStrategy {
    name: &'static str,
    program: &'static str,
    args: &'static [&'static str],
}

impl ClipboardStrategy for CommandStrategy {
    fn name(&self) -> &str {
        self.name
    }

    fn copy(&self, text: &str) -> bool {
        let mut child = match Command::new(self.program)
            .args(self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => child,
            Err(_) => return false,
        };

        if let Some(mut stdin) = child.stdin.take() {
            if stdin.write_all(text.as_bytes()).is_err() {
                let _ = child.kill();
                let _ = child.wait();
                return false;
            }
        }

        matches!(child.wait(), Ok(status) if status.success())
    }
}

fn default_strategies() -> Vec<CommandStrategy> {
    vec![
        CommandStrategy {
            name: "pbcopy",
            program: "pbcopy",
            args: &[],
        },
        CommandStrategy {
            name: "wl-copy",
            program: "wl-copy",
            args: &[],
        },
        CommandStrategy {
            name: "xclip",
            program: "xclip",
            args: &["-selection", "clipboard"],
        },
        CommandStrategy {
            name: "xsel",
            program: "xsel",
            args: &["--clipboard", "--input"],
        },
        CommandStrategy {
            name: "clip",
            program: "clip",
            args: &[],
        },
    ]
}

/// Writes text to the system clipboard via the default strategy chain.
pub fn write_clipboard(text: &str) -> bool {
    let strategies = default_strategies();
    let refs: Vec<&dyn ClipboardStrategy> = strategies
        .iter()
        .map(|s| s as &dyn ClipboardStrategy)
        .collect();
    write_with_strategies(text, &refs)
}

/// Tries each strategy in order; the first success wins. Returns false when
/// every strategy fails.
pub fn write_with_strategies(text: &str, strategies: &[&dyn ClipboardStrategy]) -> bool {
    for strategy in strategies {
        if strategy.copy(text) {
            debug!("Clipboard strategy {} succeeded", strategy.name());
            return true;
        }
        debug!("Clipboard strategy {} failed, trying next", strategy.name());
    }
    false
}
