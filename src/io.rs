// ══════════════════════════════════════════════════════════════════════════════
// I/O MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Output sinks and the filesystem work behind a redirect. A sink is either the
// console (stdout, or any writer handed in) or an append-mode log file. Path
// resolution turns the user's (dir, file) pair into the final file location,
// filling in the "logs" folder and a dated file name when they are empty.

use std::fs::{self, File, OpenOptions};
use std::io::{self, LineWriter, Write};
use std::path::{Path, PathBuf};
use chrono::{DateTime, Local};
use crate::constants::{DATE_FORMAT, DEFAULT_DIR, LOG_EXTENSION};
use crate::error::RedirectError;

/// Where the daily file lands under the log directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileLayout {
	/// dir/YYYY-MM-DD.log
	#[default]
	Flat,
	/// dir/YYYY/MM/YYYY-MM-DD.log
	YearMonth,
}

/// Computes the log file path from the redirect arguments and the current time.
pub fn resolve_log_path(dir: &str, file: &str, layout: FileLayout, now: DateTime<Local>) -> PathBuf {
	let mut path = PathBuf::from(if dir.is_empty() { DEFAULT_DIR } else { dir });

	if layout == FileLayout::YearMonth {
		path.push(now.format("%Y").to_string());
		path.push(now.format("%m").to_string());
	}

	if file.is_empty() {
		path.push(format!("{}.{}", now.format(DATE_FORMAT), LOG_EXTENSION));
	} else {
		path.push(file);
	}
	path
}

/// Creates the directory and any missing parents.
pub fn ensure_dir(dir: &Path) -> Result<(), RedirectError> {
	if dir.as_os_str().is_empty() || dir.is_dir() {
		return Ok(());
	}
	fs::create_dir_all(dir).map_err(|source| RedirectError::CreateDir {
		path: dir.to_path_buf(),
		source,
	})
}

/// Opens a file for appending, creating it if missing. Never truncates.
pub fn open_append(path: &Path) -> Result<File, RedirectError> {
	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.map_err(|source| RedirectError::OpenFile {
			path: path.to_path_buf(),
			source,
		})
}

/// Current destination for formatted lines.
pub enum Sink {
	Console(Box<dyn Write + Send>),
	File {
		path: PathBuf,
		writer: LineWriter<File>,
	},
}

impl Sink {
	pub fn stdout() -> Self {
		Sink::Console(Box::new(io::stdout()))
	}

	/// Resolves, creates and opens a log file sink.
	pub fn open_file(path: PathBuf) -> Result<Self, RedirectError> {
		if let Some(parent) = path.parent() {
			ensure_dir(parent)?;
		}
		let file = open_append(&path)?;
		Ok(Sink::File { path, writer: LineWriter::new(file) })
	}

	pub fn is_file(&self) -> bool {
		matches!(self, Sink::File { .. })
	}

	pub fn path(&self) -> Option<&Path> {
		match self {
			Sink::Console(_) => None,
			Sink::File { path, .. } => Some(path),
		}
	}

	/// Writes one line plus the trailing newline in a single call.
	pub fn write_line(&mut self, line: &str) -> io::Result<()> {
		let mut row = String::with_capacity(line.len() + 1);
		row.push_str(line);
		row.push('\n');
		match self {
			Sink::Console(writer) => {
				writer.write_all(row.as_bytes())?;
				writer.flush()
			}
			Sink::File { writer, .. } => writer.write_all(row.as_bytes()),
		}
	}

	pub fn flush(&mut self) -> io::Result<()> {
		match self {
			Sink::Console(writer) => writer.flush(),
			Sink::File { writer, .. } => {
				writer.flush()?;
				writer.get_ref().sync_all()
			}
		}
	}
}
