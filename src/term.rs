// ══════════════════════════════════════════════════════════════════════════════
// TERM MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Terminal helpers: a colorizer with an explicit on/off switch and the check
// that decides whether the console gets colors at all. The escape sequence is
// built from `colored::Color` directly so no global override is ever touched.

use std::env;
use std::io::{self, IsTerminal};
use colored::Color;

/// Wraps `text` in the foreground color, or returns it untouched when disabled.
pub fn colorize(text: &str, color: Color, enabled: bool) -> String {
	if !enabled {
		return text.to_string();
	}
	format!("\x1b[{}m{}\x1b[0m", color.to_fg_str(), text)
}

/// Stdout is a terminal and the user has not asked for NO_COLOR.
pub fn stdout_supports_color() -> bool {
	let no_color = env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
	!no_color && io::stdout().is_terminal()
}
