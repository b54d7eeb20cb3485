mod ast;
mod fixes;
mod policy;
mod rewrite;
mod rule;
mod shared;

// std
use std::{
	fs,
	path::{Path, PathBuf},
};

// self
use crate::prelude::*;
use ast::LintDump;
use policy::Policy;
pub(crate) use shared::RunSummary;
use shared::{Edit, Violation};

pub(crate) fn load_policy(config: Option<&Path>) -> Result<Policy> {
	let Some(path) = config else {
		return Ok(Policy::default());
	};
	let text = fs::read_to_string(path)
		.map_err(|err| eyre::eyre!("Failed to read configuration {}: {err}.", path.display()))?;

	policy::parse_policy(&text)
}

pub(crate) fn run_check(dumps: &[PathBuf], policy: &Policy) -> Result<RunSummary> {
	let mut violations = Vec::new();
	let mut declaration_count = 0;

	for dump_path in dumps {
		let dump = read_dump(dump_path)?;

		declaration_count += dump.declarations.len();

		let (mut found, _edits) = collect_violations(&dump, policy);

		violations.append(&mut found);
	}

	violations.sort_by(|a, b| {
		a.file.cmp(&b.file).then(a.line.cmp(&b.line)).then(a.message_id.cmp(b.message_id))
	});

	let output_lines = violations.into_iter().map(|v| v.format()).collect::<Vec<_>>();
	let violation_count = output_lines.len();

	Ok(RunSummary {
		dump_count: dumps.len(),
		declaration_count,
		violation_count,
		applied_fix_count: 0,
		output_lines,
	})
}

pub(crate) fn run_fix(dumps: &[PathBuf], policy: &Policy) -> Result<RunSummary> {
	let mut declaration_count = 0;
	let mut output_lines = Vec::new();
	let mut total_found = 0_usize;
	let mut total_applied = 0_usize;

	for dump_path in dumps {
		let dump = read_dump(dump_path)?;

		declaration_count += dump.declarations.len();

		let (found, edits) = collect_violations(&dump, policy);

		total_found += found.len();
		output_lines.extend(found.into_iter().map(|v| v.format()));

		if edits.is_empty() {
			continue;
		}

		// Declaration spans are disjoint, so one pass suffices; the fixes are
		// idempotent under re-evaluation by the host.
		let mut text = dump.text.clone();
		let applied = fixes::apply_edits(&mut text, edits)?;

		if applied > 0 {
			fs::write(&dump.path, text).map_err(|err| {
				eyre::eyre!("Failed to write fixed source {}: {err}.", dump.path.display())
			})?;

			total_applied += applied;
		}
	}

	Ok(RunSummary {
		dump_count: dumps.len(),
		declaration_count,
		violation_count: total_found.saturating_sub(total_applied),
		applied_fix_count: total_applied,
		output_lines,
	})
}

pub(crate) fn print_messages() {
	for id in shared::MESSAGE_IDS {
		println!("{id}\timplemented");
	}
}

fn read_dump(path: &Path) -> Result<LintDump> {
	let text = fs::read_to_string(path)
		.map_err(|err| eyre::eyre!("Failed to read dump {}: {err}.", path.display()))?;

	serde_json::from_str(&text)
		.map_err(|err| eyre::eyre!("Invalid lint dump {}: {err}.", path.display()))
}

fn collect_violations(dump: &LintDump, policy: &Policy) -> (Vec<Violation>, Vec<Edit>) {
	let mut violations = Vec::new();
	let mut edits = Vec::new();

	for declaration in &dump.declarations {
		let Some(declaration_text) = dump.declaration_text(declaration) else {
			continue;
		};
		let Some(finding) = rule::check_declaration(declaration, declaration_text, policy) else {
			continue;
		};
		let message_id = finding.violation.message_id();

		violations.push(Violation {
			file: dump.path.clone(),
			line: declaration.span.start.line,
			column: declaration.span.start.column + 1,
			message_id,
			message: finding.violation.message(),
			fixable: finding.fix.is_some(),
		});

		if let Some(replacement) = finding.fix {
			edits.push(Edit {
				start: declaration.span.start.offset,
				end: declaration.span.end.offset,
				replacement,
				message_id,
			});
		}
	}

	(violations, edits)
}
