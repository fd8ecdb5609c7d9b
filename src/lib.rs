// ╔══════════════════════════════════════════════════════════════════════════════╗
// ║                                 LEVELOG                                      ║
// ║                    Leveled Terminal & Daily File Logging                     ║
// ╚══════════════════════════════════════════════════════════════════════════════╝
//
// 🎯 PROJECT GOAL
// ---------------
// A small leveled logger for command line tools. Each line is timestamped,
// tagged and colored on the terminal:
//
//   2024-03-09 12:00:00 [INF]   Server started on port 8080
//   2024-03-09 12:00:01 [WRN]   Cache directory missing, recreating
//
// 📦 HOW IT WORKS
// ---------------
// Messages have a severity ordinal (debug=4, info=3, warn=2, error=1, and 0 for
// fatal/success/system). The logger keeps a threshold and drops anything more
// verbose than it; "none" (-1) drops everything. Output goes to stdout until
// `redirect_to_file` switches it to an append-mode file, by default
// logs/<YYYY-MM-DD>.log, where tags are written without colors.
//
// ☠️ FATAL
// --------
// `fatal` is control flow, not just a line: it writes (if the threshold
// allows), flushes and closes any log file, then exits with status 1. The exit
// is never suppressed. Tests swap the exit for a hook with `with_exit`.
//
// 📜 LICENSE: MIT
//
// ══════════════════════════════════════════════════════════════════════════════

pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod level;
pub mod logger;
pub mod term;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::LogConfig;
pub use error::{LevelError, RedirectError};
pub use io::FileLayout;
pub use level::{Kind, Level};
pub use logger::Logger;

#[macro_export]
macro_rules! debug {
	($logger:expr, $($arg:tt)+) => {
		$logger.debug(format_args!($($arg)+))
	};
}

#[macro_export]
macro_rules! info {
	($logger:expr, $($arg:tt)+) => {
		$logger.info(format_args!($($arg)+))
	};
}

#[macro_export]
macro_rules! warn {
	($logger:expr, $($arg:tt)+) => {
		$logger.warn(format_args!($($arg)+))
	};
}

#[macro_export]
macro_rules! error {
	($logger:expr, $($arg:tt)+) => {
		$logger.error(format_args!($($arg)+))
	};
}

/// Logs (if allowed) and terminates the process with status 1.
#[macro_export]
macro_rules! fatal {
	($logger:expr, $($arg:tt)+) => {
		$logger.fatal(format_args!($($arg)+))
	};
}

#[macro_export]
macro_rules! success {
	($logger:expr, $($arg:tt)+) => {
		$logger.success(format_args!($($arg)+))
	};
}

#[macro_export]
macro_rules! system {
	($logger:expr, $($arg:tt)+) => {
		$logger.system(format_args!($($arg)+))
	};
}
