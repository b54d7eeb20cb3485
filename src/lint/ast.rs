//! Host-provided declaration descriptions.
//!
//! The host analysis engine parses source files and serializes, per file, the
//! source text plus every import declaration it found. This module is the
//! whole interface the checker has to a parser: any binding that can populate
//! these shapes can drive the rule.
//!
//! Offsets are byte offsets into `text`; lines are 1-based, columns 0-based.

// crates.io
use serde::Deserialize;

// std
use std::path::PathBuf;

/// One file's worth of parsed import declarations.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LintDump {
	pub(crate) path: PathBuf,
	pub(crate) text: String,
	pub(crate) declarations: Vec<ImportDeclaration>,
}
impl LintDump {
	pub(crate) fn declaration_text(&self, declaration: &ImportDeclaration) -> Option<&str> {
		self.text.get(declaration.span.start.offset..declaration.span.end.offset)
	}
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ImportDeclaration {
	pub(crate) span: Span,
	#[serde(default)]
	pub(crate) import_kind: ImportKind,
	/// The module source literal exactly as written, quotes included.
	pub(crate) source_raw: String,
	pub(crate) specifiers: Vec<Specifier>,
	#[serde(default)]
	pub(crate) comments: Vec<Comment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ImportKind {
	#[default]
	Value,
	Type,
}

/// One imported binding. A default specifier binds the module's default
/// export; a named specifier carries both names, equal when unaliased.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub(crate) enum Specifier {
	Default { local: String, span: Span },
	Named { local: String, imported: String, span: Span },
}
impl Specifier {
	pub(crate) fn span(&self) -> &Span {
		match self {
			Self::Default { span, .. } | Self::Named { span, .. } => span,
		}
	}

	pub(crate) fn is_named(&self) -> bool {
		matches!(self, Self::Named { .. })
	}
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Comment {
	pub(crate) text: String,
	pub(crate) span: Span,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Span {
	pub(crate) start: Position,
	pub(crate) end: Position,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Position {
	pub(crate) line: usize,
	pub(crate) column: usize,
	pub(crate) offset: usize,
}
