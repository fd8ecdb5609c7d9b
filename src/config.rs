// ══════════════════════════════════════════════════════════════════════════════
// CONFIG MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Plain settings a front end (the CLI, an app's own config file) collects and
// hands to a logger: the threshold by name and an optional file redirect.

use crate::io::FileLayout;
use crate::level::Level;
use crate::logger::Logger;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
	/// Level name, resolved case-insensitively
	pub level: String,
	pub to_file: bool,
	/// Empty means "logs"
	pub dir: String,
	/// Empty means "<today>.log"
	pub file: String,
	pub layout: FileLayout,
}

impl Default for LogConfig {
	fn default() -> Self {
		LogConfig {
			level: Level::Info.to_string(),
			to_file: false,
			dir: String::new(),
			file: String::new(),
			layout: FileLayout::Flat,
		}
	}
}

impl LogConfig {
	/// Sets the threshold, then redirects when asked. Returns the effective level.
	pub fn apply(&self, logger: &mut Logger) -> Level {
		let level = logger.set_level(&self.level);
		if self.to_file {
			// Failure is already reported through the logger
			let _ = logger.redirect_with_layout(&self.dir, &self.file, self.layout);
		}
		level
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::sync::{Arc, Mutex};
	use tempfile::TempDir;

	#[test]
	fn test_default_config() {
		let config = LogConfig::default();
		assert_eq!(config.level, "info");
		assert!(!config.to_file);
		assert_eq!(config.layout, FileLayout::Flat);
	}

	#[test]
	fn test_apply_level_only() {
		let mut logger = Logger::with_console(std::io::sink());
		let config = LogConfig { level: "Debug".into(), ..Default::default() };

		assert_eq!(config.apply(&mut logger), Level::Debug);
		assert!(logger.log_path().is_none());
	}

	#[test]
	fn test_apply_with_redirect() {
		let temp_dir = TempDir::new().unwrap();
		let mut logger = Logger::with_console(std::io::sink());
		let config = LogConfig {
			level: "error".into(),
			to_file: true,
			dir: temp_dir.path().to_string_lossy().into_owned(),
			file: "app.log".into(),
			..Default::default()
		};

		assert_eq!(config.apply(&mut logger), Level::Error);
		assert_eq!(logger.log_path(), Some(temp_dir.path().join("app.log").as_path()));
	}

	#[test]
	fn test_apply_unknown_level_still_redirects() {
		let temp_dir = TempDir::new().unwrap();
		let exits = Arc::new(Mutex::new(0));
		let seen = Arc::clone(&exits);
		let mut logger = Logger::with_console(std::io::sink())
			.with_exit(move |_| *seen.lock().unwrap() += 1);
		let config = LogConfig {
			level: "loud".into(),
			to_file: true,
			dir: temp_dir.path().to_string_lossy().into_owned(),
			..Default::default()
		};

		assert_eq!(config.apply(&mut logger), Level::Info);
		assert!(logger.log_path().is_some());
		assert_eq!(*exits.lock().unwrap(), 0);
	}
}
