//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait applies ANSI styling via the `colored` crate. Only
//! the REPL styles its output; replies from the play handlers are returned
//! plain and colored when printed.

use colored::{ColoredString, Colorize};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn title_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
    fn reply_style(&self) -> ColoredString;
    fn help_style(&self) -> ColoredString;
    fn victory_style(&self) -> ColoredString;
    fn defeat_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn title_style(&self) -> ColoredString {
        self.bright_yellow().underline()
    }
    fn prompt_style(&self) -> ColoredString {
        self.truecolor(110, 220, 110)
    }
    fn reply_style(&self) -> ColoredString {
        self.truecolor(102, 208, 250)
    }
    fn help_style(&self) -> ColoredString {
        self.italic().truecolor(220, 180, 40)
    }
    fn victory_style(&self) -> ColoredString {
        self.bold().truecolor(230, 230, 30)
    }
    fn defeat_style(&self) -> ColoredString {
        self.bold().truecolor(200, 50, 50)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
}

impl GameStyle for String {
    fn title_style(&self) -> ColoredString {
        self.as_str().title_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn reply_style(&self) -> ColoredString {
        self.as_str().reply_style()
    }
    fn help_style(&self) -> ColoredString {
        self.as_str().help_style()
    }
    fn victory_style(&self) -> ColoredString {
        self.as_str().victory_style()
    }
    fn defeat_style(&self) -> ColoredString {
        self.as_str().defeat_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
}
