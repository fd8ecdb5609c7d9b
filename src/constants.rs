// ══════════════════════════════════════════════════════════════════════════════
// CONSTANTS MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Defines crate-wide constants shared by the logger and its file sink.
// - DEFAULT_DIR: folder used when a redirect names no directory
// - TIMESTAMP_FORMAT / DATE_FORMAT: chrono formats for lines and file names
// - TAG_GAP: fixed spacing between "[TAG]" and the message body

pub const DEFAULT_DIR: &str = "logs";

pub const LOG_EXTENSION: &str = "log";

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Three spaces. Log parsers split on this.
pub const TAG_GAP: &str = "   ";

pub const FATAL_EXIT_CODE: i32 = 1;

pub const FORMAT_ERROR_MARKER: &str = "[formatting error]";
