// ══════════════════════════════════════════════════════════════════════════════
// LOGGER MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// The routing engine. A `Logger` owns the threshold, the current sink, the
// color switch, a clock and the exit strategy used by Fatal. Every entry point
// renders its message, asks the threshold whether it passes and, if so, writes
// one "<timestamp> [<TAG>]   <message>" line. Failures never propagate: write
// errors go to stderr, redirect errors are logged and the console stays active.

use std::fmt::{self, Write as _};
use std::io::Write;
use std::path::{Path, PathBuf};
use colored::Color;
use crate::clock::{Clock, SystemClock};
use crate::constants::{FATAL_EXIT_CODE, FORMAT_ERROR_MARKER, TAG_GAP};
use crate::error::RedirectError;
use crate::io::{resolve_log_path, FileLayout, Sink};
use crate::level::{Kind, Level};
use crate::term;

/// Called by Fatal with the exit code once output is closed.
pub type ExitHook = Box<dyn Fn(i32) + Send>;

fn exit_process(code: i32) {
	std::process::exit(code)
}

/// Renders format arguments without panicking on a failing `Display` impl.
fn render(args: fmt::Arguments<'_>) -> String {
	let mut message = String::new();
	if message.write_fmt(args).is_err() {
		let kept = message.trim_end().len();
		message.truncate(kept);
		if !message.is_empty() {
			message.push(' ');
		}
		message.push_str(FORMAT_ERROR_MARKER);
	}
	message
}

pub struct Logger {
	threshold: Level,
	sink: Sink,
	colors: bool,
	clock: Box<dyn Clock + Send>,
	exit: ExitHook,
}

impl Default for Logger {
	fn default() -> Self {
		Logger::new()
	}
}

impl Logger {
	/// Stdout sink, `info` threshold, colors when stdout is a terminal.
	pub fn new() -> Self {
		Logger::from_sink(Sink::stdout()).with_colors(term::stdout_supports_color())
	}

	/// Console logger writing to `writer` instead of stdout. Colors start off.
	pub fn with_console(writer: impl Write + Send + 'static) -> Self {
		Logger::from_sink(Sink::Console(Box::new(writer)))
	}

	fn from_sink(sink: Sink) -> Self {
		Logger {
			threshold: Level::default(),
			sink,
			colors: false,
			clock: Box::new(SystemClock),
			exit: Box::new(exit_process),
		}
	}

	pub fn with_clock(mut self, clock: impl Clock + Send + 'static) -> Self {
		self.clock = Box::new(clock);
		self
	}

	/// Replaces the real process exit used by Fatal.
	pub fn with_exit(mut self, exit: impl Fn(i32) + Send + 'static) -> Self {
		self.exit = Box::new(exit);
		self
	}

	/// Colors apply to the console only; file output is always plain.
	pub fn with_colors(mut self, enabled: bool) -> Self {
		self.colors = enabled;
		self
	}

	// ══════════════════════════════════════════════════════════════════════════
	// SEVERITY FILTER
	// ══════════════════════════════════════════════════════════════════════════

	pub fn threshold(&self) -> Level {
		self.threshold
	}

	pub fn set_threshold(&mut self, level: Level) {
		self.threshold = level;
	}

	/// Sets the threshold by name, case-insensitively. An unknown name falls back
	/// to `info` and is reported with one System message.
	pub fn set_level(&mut self, name: &str) -> Level {
		match name.parse::<Level>() {
			Ok(level) => {
				self.threshold = level;
				level
			}
			Err(e) => {
				self.threshold = Level::Info;
				self.system(format_args!("{}, falling back to '{}'", e, Level::Info));
				Level::Info
			}
		}
	}

	pub fn passes(&self, ordinal: i8) -> bool {
		self.threshold.passes(ordinal)
	}

	// ══════════════════════════════════════════════════════════════════════════
	// OUTPUT ROUTER
	// ══════════════════════════════════════════════════════════════════════════

	/// Path of the open log file, `None` while on the console.
	pub fn log_path(&self) -> Option<&Path> {
		self.sink.path()
	}

	/// Formats and writes one line to the current sink. Never fails.
	pub fn write_line(&mut self, tag: &str, color: Color, message: &str) {
		let use_color = self.colors && !self.sink.is_file();
		let tag = term::colorize(&format!("[{}]", tag), color, use_color);
		let line = format!("{} {}{}{}", self.clock.timestamp(), tag, TAG_GAP, message);

		if let Err(e) = self.sink.write_line(&line) {
			eprintln!("Error writing log line: {}", e);
		}
	}

	/// Sends output to `dir/file` in append mode. Empty `dir` means "logs",
	/// empty `file` means "<today>.log". On failure the sink is left unchanged.
	pub fn redirect_to_file(&mut self, dir: &str, file: &str) -> Result<PathBuf, RedirectError> {
		self.redirect_with_layout(dir, file, FileLayout::Flat)
	}

	/// Like `redirect_to_file`, with a choice of folder layout under `dir`.
	pub fn redirect_with_layout(
		&mut self,
		dir: &str,
		file: &str,
		layout: FileLayout,
	) -> Result<PathBuf, RedirectError> {
		let path = resolve_log_path(dir, file, layout, self.clock.now());

		match Sink::open_file(path.clone()) {
			Ok(sink) => {
				// Announce through the sink being replaced
				self.system(format_args!("Logging to file: {}", path.display()));
				let mut previous = std::mem::replace(&mut self.sink, sink);
				if let Err(e) = previous.flush() {
					eprintln!("Error flushing previous log output: {}", e);
				}
				Ok(path)
			}
			Err(e) => {
				self.error(format_args!("Log redirect failed, staying on current output: {}", e));
				Err(e)
			}
		}
	}

	/// Flushes and releases a file sink, returning output to stdout.
	pub fn close(&mut self) {
		if let Err(e) = self.sink.flush() {
			eprintln!("Error flushing log output: {}", e);
		}
		if self.sink.is_file() {
			self.sink = Sink::stdout();
		}
	}

	// ══════════════════════════════════════════════════════════════════════════
	// ENTRY POINTS
	// ══════════════════════════════════════════════════════════════════════════

	/// Emits a message of any kind. `Kind::Fatal` terminates like `fatal`.
	pub fn log(&mut self, kind: Kind, args: fmt::Arguments<'_>) {
		if kind == Kind::Fatal {
			self.fatal(args);
			return;
		}
		let message = render(args);
		if self.passes(kind.ordinal()) {
			self.write_line(kind.tag(), kind.color(), &message);
		}
	}

	pub fn debug(&mut self, args: fmt::Arguments<'_>) {
		self.log(Kind::Debug, args);
	}

	pub fn info(&mut self, args: fmt::Arguments<'_>) {
		self.log(Kind::Info, args);
	}

	pub fn warn(&mut self, args: fmt::Arguments<'_>) {
		self.log(Kind::Warn, args);
	}

	pub fn error(&mut self, args: fmt::Arguments<'_>) {
		self.log(Kind::Error, args);
	}

	pub fn success(&mut self, args: fmt::Arguments<'_>) {
		self.log(Kind::Success, args);
	}

	pub fn system(&mut self, args: fmt::Arguments<'_>) {
		self.log(Kind::System, args);
	}

	/// Writes the message if the threshold allows, then always closes output and
	/// exits with code 1. The exit happens even when the line is suppressed.
	pub fn fatal(&mut self, args: fmt::Arguments<'_>) {
		let message = render(args);
		if self.passes(Kind::Fatal.ordinal()) {
			self.write_line(Kind::Fatal.tag(), Kind::Fatal.color(), &message);
		}
		self.close();
		(self.exit)(FATAL_EXIT_CODE);
	}
}

impl fmt::Debug for Logger {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Logger")
			.field("threshold", &self.threshold)
			.field("log_path", &self.sink.path())
			.field("colors", &self.colors)
			.finish()
	}
}
