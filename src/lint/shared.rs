// std
use std::path::PathBuf;

pub(crate) const DEFAULT_MAX_ITEMS: i64 = 4;
pub(crate) const MIN_ITEMS: i64 = 0;
pub(crate) const MIN_MAX_LENGTH: i64 = 17;

pub(crate) const MESSAGE_IDS: [&str; 5] = [
	"limitLineCount",
	"mustNotSplit",
	"mustSplitLong",
	"mustSplitMany",
	"noBlankBetween",
];

#[derive(Debug, Clone)]
pub(crate) struct Violation {
	pub(crate) file: PathBuf,
	pub(crate) line: usize,
	pub(crate) column: usize,
	pub(crate) message_id: &'static str,
	pub(crate) message: String,
	pub(crate) fixable: bool,
}
impl Violation {
	pub(crate) fn format(&self) -> String {
		format!(
			"{}:{}:{}: [{}] {}{}",
			self.file.display(),
			self.line,
			self.column,
			self.message_id,
			self.message,
			if self.fixable { " (fixable)" } else { "" }
		)
	}
}

#[derive(Debug, Clone)]
pub(crate) struct Edit {
	pub(crate) start: usize,
	pub(crate) end: usize,
	pub(crate) replacement: String,
	pub(crate) message_id: &'static str,
}

#[derive(Debug, Clone)]
pub(crate) struct RunSummary {
	pub(crate) dump_count: usize,
	pub(crate) declaration_count: usize,
	pub(crate) violation_count: usize,
	pub(crate) applied_fix_count: usize,
	pub(crate) output_lines: Vec<String>,
}
