// ══════════════════════════════════════════════════════════════════════════════
// LEVELOG CLI
// ══════════════════════════════════════════════════════════════════════════════
//
// Command line front end over the library: configure a logger from flags (or
// LEVELOG_* environment variables) and emit one message, or print the level
// help. Useful from shell scripts that want the same log format as the apps.

use clap::{Parser, Subcommand, ValueEnum};
use levelog::level::HELP;
use levelog::{FileLayout, Kind, LogConfig, Logger};
use levelog::term::stdout_supports_color;

/// Leveled, colorized logging to the terminal or a daily log file
#[derive(Parser)]
#[command(name = "levelog")]
#[command(version)]
#[command(about = "Leveled, colorized logging to the terminal or a daily log file", long_about = None)]
struct Cli {
	/// Threshold level: debug, info, warn, error, fatal, none
	#[arg(short, long, env = "LEVELOG_LEVEL", default_value = "info", global = true)]
	level: String,

	/// Write to a log file instead of stdout
	#[arg(long, global = true)]
	to_file: bool,

	/// Log directory (default: logs). Implies --to-file
	#[arg(long, env = "LEVELOG_DIR", global = true)]
	dir: Option<String>,

	/// Log file name (default: <today>.log). Implies --to-file
	#[arg(long, env = "LEVELOG_FILE", global = true)]
	file: Option<String>,

	/// Place the file under <dir>/<year>/<month>/
	#[arg(long, global = true)]
	monthly: bool,

	/// Never color the terminal output
	#[arg(long, global = true)]
	no_color: bool,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Emit one message of the given kind
	Emit {
		/// Message kind
		#[arg(value_enum)]
		kind: KindArg,

		/// Message text (joined with spaces)
		#[arg(required = true)]
		message: Vec<String>,
	},

	/// Describe the available levels
	Levels,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
	Debug,
	Info,
	Warn,
	Error,
	Fatal,
	Success,
	System,
}

impl From<KindArg> for Kind {
	fn from(arg: KindArg) -> Self {
		match arg {
			KindArg::Debug => Kind::Debug,
			KindArg::Info => Kind::Info,
			KindArg::Warn => Kind::Warn,
			KindArg::Error => Kind::Error,
			KindArg::Fatal => Kind::Fatal,
			KindArg::Success => Kind::Success,
			KindArg::System => Kind::System,
		}
	}
}

impl Cli {
	fn log_config(&self) -> LogConfig {
		LogConfig {
			level: self.level.clone(),
			to_file: self.to_file || self.dir.is_some() || self.file.is_some(),
			dir: self.dir.clone().unwrap_or_default(),
			file: self.file.clone().unwrap_or_default(),
			layout: if self.monthly { FileLayout::YearMonth } else { FileLayout::Flat },
		}
	}
}

fn main() {
	let cli = Cli::parse();
	let config = cli.log_config();

	match cli.command {
		Commands::Levels => {
			println!("{}", HELP);
		}

		Commands::Emit { kind, message } => {
			let mut logger = Logger::new().with_colors(!cli.no_color && stdout_supports_color());
			config.apply(&mut logger);
			logger.log(kind.into(), format_args!("{}", message.join(" ")));
		}
	}
}
