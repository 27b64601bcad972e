use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{GlobalFlags, OutputFormat};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub table_color: bool,
    pub progress: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let stdout_tty = std::io::stdout().is_terminal();
    let no_color = std::env::var_os("NO_COLOR").is_some();

    let term_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    let _ = UI_PREFS.set(UiPrefs {
        table_color: table_color_enabled(flags, stdout_tty, no_color),
        progress: progress_enabled(flags, stdout_tty),
        term_width,
    });
}

fn table_color_enabled(flags: &GlobalFlags, stdout_tty: bool, no_color: bool) -> bool {
    stdout_tty && flags.format == OutputFormat::Table && !flags.quiet && !no_color
}

/// Spinner only for interactive, non-JSON runs.
fn progress_enabled(flags: &GlobalFlags, stdout_tty: bool) -> bool {
    stdout_tty && !flags.quiet && flags.format != OutputFormat::Json
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        table_color: false,
        progress: false,
        term_width: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(format: OutputFormat, quiet: bool) -> GlobalFlags {
        GlobalFlags {
            format,
            quiet,
            config: None,
        }
    }

    #[test]
    fn progress_needs_tty_and_non_json_format() {
        assert!(progress_enabled(&flags(OutputFormat::Table, false), true));
        assert!(progress_enabled(&flags(OutputFormat::Raw, false), true));
        assert!(!progress_enabled(&flags(OutputFormat::Json, false), true));
        assert!(!progress_enabled(&flags(OutputFormat::Table, false), false));
        assert!(!progress_enabled(&flags(OutputFormat::Table, true), true));
    }

    #[test]
    fn table_color_respects_no_color() {
        assert!(table_color_enabled(&flags(OutputFormat::Table, false), true, false));
        assert!(!table_color_enabled(&flags(OutputFormat::Table, false), true, true));
        assert!(!table_color_enabled(&flags(OutputFormat::Json, false), true, false));
    }
}
