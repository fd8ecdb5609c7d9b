// ══════════════════════════════════════════════════════════════════════════════
// LEVEL MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// The severity model. `Level` is the threshold scale (debug=4 down to none=-1),
// `Kind` is what a message is: each of the seven kinds maps onto an ordinal,
// a bracketed tag and a console color. A message is shown when its ordinal is
// less than or equal to the configured threshold.

use std::fmt;
use std::str::FromStr;
use colored::Color;
use crate::error::LevelError;

/// Human-readable summary of the accepted level names.
pub const HELP: &str = "\
Available levels:
  debug - will show everything
  info  - drops debug messages
  warn  - drops info and debug messages
  error - drops warn, info and debug messages
  fatal - drops error, warn, info and debug messages
  none  - will show nothing";

/// Threshold scale, ordered from least to most verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(i8)]
pub enum Level {
	None = -1,
	Fatal = 0,
	Error = 1,
	Warn = 2,
	#[default]
	Info = 3,
	Debug = 4,
}

impl Level {
	pub const ALL: [Level; 6] = [
		Level::Debug,
		Level::Info,
		Level::Warn,
		Level::Error,
		Level::Fatal,
		Level::None,
	];

	pub fn ordinal(self) -> i8 {
		self as i8
	}

	/// Canonical lowercase name.
	pub fn as_str(self) -> &'static str {
		match self {
			Level::Debug => "debug",
			Level::Info => "info",
			Level::Warn => "warn",
			Level::Error => "error",
			Level::Fatal => "fatal",
			Level::None => "none",
		}
	}

	/// Returns true when a message of `ordinal` clears this threshold.
	pub fn passes(self, ordinal: i8) -> bool {
		ordinal <= self.ordinal()
	}
}

impl fmt::Display for Level {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Level {
	type Err = LevelError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let name = s.trim();
		Level::ALL
			.into_iter()
			.find(|level| level.as_str().eq_ignore_ascii_case(name))
			.ok_or_else(|| LevelError::Unknown(s.to_string()))
	}
}

/// The seven message kinds a caller can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
	Debug,
	Info,
	Warn,
	Error,
	Fatal,
	Success,
	System,
}

impl Kind {
	pub const ALL: [Kind; 7] = [
		Kind::Debug,
		Kind::Info,
		Kind::Warn,
		Kind::Error,
		Kind::Fatal,
		Kind::Success,
		Kind::System,
	];

	/// Fatal, Success and System share ordinal 0 and differ only by tag and color.
	pub fn ordinal(self) -> i8 {
		match self {
			Kind::Debug => Level::Debug.ordinal(),
			Kind::Info => Level::Info.ordinal(),
			Kind::Warn => Level::Warn.ordinal(),
			Kind::Error => Level::Error.ordinal(),
			Kind::Fatal | Kind::Success | Kind::System => Level::Fatal.ordinal(),
		}
	}

	pub fn tag(self) -> &'static str {
		match self {
			Kind::Debug => "DBG",
			Kind::Info => "INF",
			Kind::Warn => "WRN",
			Kind::Error => "ERR",
			Kind::Fatal => "FATAL",
			Kind::Success => "OK",
			Kind::System => "SYS",
		}
	}

	pub fn color(self) -> Color {
		match self {
			Kind::Debug => Color::Magenta,
			Kind::Info => Color::Cyan,
			Kind::Warn => Color::Yellow,
			Kind::Error | Kind::Fatal => Color::Red,
			Kind::Success => Color::Green,
			Kind::System => Color::White,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Kind::Debug => "debug",
			Kind::Info => "info",
			Kind::Warn => "warn",
			Kind::Error => "error",
			Kind::Fatal => "fatal",
			Kind::Success => "success",
			Kind::System => "system",
		}
	}
}

impl fmt::Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
