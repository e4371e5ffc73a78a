use colored::Colorize;

use crate::output;

/// Surface for short user-facing notices about a flow's outcome.
pub trait Notifier {
    fn success(&self, message: &str);
    fn failure(&self, message: &str);
}

/// Writes notices to the terminal.
///
/// Success notices are skipped under `--quiet` and in JSON mode, where the
/// command prints the response body instead. Failures always go to stderr.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn success(&self, message: &str) {
        if !output::is_quiet() && !output::is_json_output() {
            println!("{}", message.green());
        }
    }

    fn failure(&self, message: &str) {
        eprintln!("{}", message.red());
    }
}
