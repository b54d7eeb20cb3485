// crates.io
use clap::{
	Parser, Subcommand,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};

// std
use std::{path::PathBuf, process::ExitCode};

// self
use crate::{
	lint::{self, RunSummary},
	prelude::*,
};

/// Command-line interface for the import layout checker.
#[derive(Debug, Parser)]
#[command(
	version = concat!(
		env!("CARGO_PKG_VERSION"),
		"-",
		env!("VERGEN_GIT_SHA"),
		"-",
		env!("VERGEN_CARGO_TARGET_TRIPLE"),
	),
	rename_all = "kebab",
	styles = styles(),
)]
pub(crate) struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
	/// Check declaration dumps and report layout violations.
	Check {
		/// Lint dump files produced by the host parser.
		dumps: Vec<PathBuf>,
		/// Optional policy configuration file (JSON).
		#[arg(short, long)]
		config: Option<PathBuf>,
	},
	/// Apply all available fixes to the dumped sources, then report.
	Fix {
		/// Lint dump files produced by the host parser.
		dumps: Vec<PathBuf>,
		/// Optional policy configuration file (JSON).
		#[arg(short, long)]
		config: Option<PathBuf>,
	},
	/// Print implemented message identifiers.
	Messages,
}

impl Cli {
	pub(crate) fn run(&self) -> Result<ExitCode> {
		match &self.command {
			Command::Check { dumps, config } => {
				let policy = lint::load_policy(config.as_deref())?;
				let summary = lint::run_check(dumps, &policy)?;

				print_summary(&summary, false);

				if summary.violation_count > 0 {
					eprintln!("\nFound {} layout violation(s).", summary.violation_count);

					return Ok(ExitCode::FAILURE);
				}
			},
			Command::Fix { dumps, config } => {
				let policy = lint::load_policy(config.as_deref())?;
				let summary = lint::run_fix(dumps, &policy)?;

				print_summary(&summary, true);

				if summary.violation_count > 0 {
					eprintln!(
						"\nFound {} remaining layout violation(s) after fix.",
						summary.violation_count
					);

					return Ok(ExitCode::FAILURE);
				}
			},
			Command::Messages => lint::print_messages(),
		}

		Ok(ExitCode::SUCCESS)
	}
}

fn print_summary(summary: &RunSummary, fix_mode: bool) {
	for line in &summary.output_lines {
		println!("{line}");
	}

	if fix_mode {
		println!(
			"\nChecked {} declaration(s) in {} dump(s). Applied {} fix(es).",
			summary.declaration_count, summary.dump_count, summary.applied_fix_count
		);
	} else {
		println!(
			"\nChecked {} declaration(s) in {} dump(s).",
			summary.declaration_count, summary.dump_count
		);
	}
}

fn styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Red.on_default() | Effects::BOLD)
		.usage(AnsiColor::Red.on_default() | Effects::BOLD)
		.literal(AnsiColor::Blue.on_default() | Effects::BOLD)
		.placeholder(AnsiColor::Green.on_default())
}
