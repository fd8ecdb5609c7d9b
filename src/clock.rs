// ══════════════════════════════════════════════════════════════════════════════
// CLOCK MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Wall-clock time source. Line timestamps and default log file names both
// come from here, so a logger can be pinned to a fixed instant in tests.

use chrono::{DateTime, Local};
use crate::constants::{DATE_FORMAT, TIMESTAMP_FORMAT};

pub trait Clock {
	fn now(&self) -> DateTime<Local>;

	/// "YYYY-MM-DD HH:MM:SS" for the start of a log line.
	fn timestamp(&self) -> String {
		self.now().format(TIMESTAMP_FORMAT).to_string()
	}

	/// "YYYY-MM-DD" for daily file names.
	fn date(&self) -> String {
		self.now().format(DATE_FORMAT).to_string()
	}
}

/// Local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn now(&self) -> DateTime<Local> {
		Local::now()
	}
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
	fn now(&self) -> DateTime<Local> {
		self.0
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeZone;

	#[test]
	fn test_fixed_clock_formats() {
		let clock = FixedClock(Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap());
		assert_eq!(clock.timestamp(), "2024-03-09 14:05:07");
		assert_eq!(clock.date(), "2024-03-09");
	}

	#[test]
	fn test_system_clock_date_shape() {
		let date = SystemClock.date();
		assert_eq!(date.len(), 10);
		assert_eq!(date, Local::now().format("%Y-%m-%d").to_string());
	}
}
