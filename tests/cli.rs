use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use chrono::Local;
use tempfile::TempDir;

fn levelog(cwd: &Path, args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_levelog"))
		.current_dir(cwd)
		.env_remove("LEVELOG_LEVEL")
		.env_remove("LEVELOG_DIR")
		.env_remove("LEVELOG_FILE")
		.args(args)
		.output()
		.unwrap()
}

fn stdout(output: &Output) -> String {
	String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_fatal_exits_with_status_one() {
	let temp_dir = TempDir::new().unwrap();
	let output = levelog(temp_dir.path(), &["emit", "fatal", "disk", "gone"]);

	assert_eq!(output.status.code(), Some(1));
	assert!(stdout(&output).contains("[FATAL]   disk gone"));
}

#[test]
fn test_fatal_exits_even_when_silenced() {
	let temp_dir = TempDir::new().unwrap();
	let output = levelog(temp_dir.path(), &["--level", "none", "emit", "fatal", "quiet"]);

	assert_eq!(output.status.code(), Some(1));
	assert!(stdout(&output).is_empty());
}

#[test]
fn test_threshold_suppresses_verbose_kinds() {
	let temp_dir = TempDir::new().unwrap();
	let output = levelog(temp_dir.path(), &["--level", "error", "emit", "info", "hidden"]);
	assert!(output.status.success());
	assert!(stdout(&output).is_empty());

	let output = levelog(temp_dir.path(), &["--level", "ERROR", "emit", "success", "shown"]);
	assert!(output.status.success());
	assert!(stdout(&output).contains("[OK]   shown"));
}

#[test]
fn test_unknown_level_reports_and_falls_back() {
	let temp_dir = TempDir::new().unwrap();
	let output = levelog(temp_dir.path(), &["--level", "bogus", "emit", "info", "hello"]);
	let text = stdout(&output);

	assert!(output.status.success());
	assert_eq!(text.lines().filter(|l| l.contains("[SYS]")).count(), 1);
	assert!(text.contains("[INF]   hello"));
}

#[test]
fn test_default_file_redirect_appends() {
	let temp_dir = TempDir::new().unwrap();
	let today = Local::now().format("%Y-%m-%d").to_string();

	let first = levelog(temp_dir.path(), &["--to-file", "emit", "error", "first"]);
	let second = levelog(temp_dir.path(), &["--to-file", "emit", "error", "second"]);
	assert!(first.status.success());
	assert!(second.status.success());
	assert!(stdout(&first).contains("[SYS]"));

	let path = temp_dir.path().join("logs").join(format!("{}.log", today));
	let written = fs::read_to_string(path).unwrap();
	let lines: Vec<&str> = written.lines().collect();
	assert_eq!(lines.len(), 2);
	assert!(lines[0].ends_with("[ERR]   first"));
	assert!(lines[1].ends_with("[ERR]   second"));
	assert!(!written.contains('\x1b'));
}

#[test]
fn test_monthly_layout() {
	let temp_dir = TempDir::new().unwrap();
	let now = Local::now();
	let output = levelog(temp_dir.path(), &["--monthly", "--file", "app.log", "emit", "warn", "x"]);
	assert!(output.status.success());

	let path = temp_dir
		.path()
		.join("logs")
		.join(now.format("%Y").to_string())
		.join(now.format("%m").to_string())
		.join("app.log");
	assert!(fs::read_to_string(path).unwrap().contains("[WRN]   x"));
}

#[test]
fn test_levels_help() {
	let temp_dir = TempDir::new().unwrap();
	let output = levelog(temp_dir.path(), &["levels"]);
	let text = stdout(&output);

	assert!(output.status.success());
	for name in ["debug", "info", "warn", "error", "fatal", "none"] {
		assert!(text.contains(name));
	}
}
