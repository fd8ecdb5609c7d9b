// ══════════════════════════════════════════════════════════════════════════════
// ERROR MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Error types for the two operations that can go wrong: parsing a level name
// and redirecting output into a file. Neither ever escapes the logging calls
// as a panic; they are returned for callers that want to branch on them.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A level name outside debug/info/warn/error/fatal/none.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
	#[error("unknown log level '{0}'")]
	Unknown(String),
}

/// Why a redirect left the sink where it was.
#[derive(Error, Debug)]
pub enum RedirectError {
	/// The log directory could not be created
	#[error("cannot create log directory '{}': {source}", .path.display())]
	CreateDir {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// The log file could not be opened for appending
	#[error("cannot open log file '{}': {source}", .path.display())]
	OpenFile {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

impl RedirectError {
	/// The path that failed, directory or file.
	pub fn path(&self) -> &std::path::Path {
		match self {
			RedirectError::CreateDir { path, .. } => path,
			RedirectError::OpenFile { path, .. } => path,
		}
	}
}
