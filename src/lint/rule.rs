//! The layout decision core.
//!
//! One declaration in, at most one finding out. Categories are mutually
//! exclusive and checked in a fixed priority order: blank gaps first, then
//! the single-line checks (length before item count), then the multi-line
//! shape checks.

// std
use std::collections::BTreeMap;

// self
use super::{
	ast::ImportDeclaration,
	policy::{CommentMode, Policy},
	rewrite::{self, FixOptions, Spacer},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LayoutViolation {
	MustSplitMany { max_items: usize },
	MustSplitLong { max_line_length: usize, line_length: usize },
	MustNotSplit { max_items: usize },
	NoBlankBetween,
	LimitLineCount { expected_line_count: usize, import_line_count: usize },
}
impl LayoutViolation {
	pub(crate) fn message_id(&self) -> &'static str {
		match self {
			Self::MustSplitMany { .. } => "mustSplitMany",
			Self::MustSplitLong { .. } => "mustSplitLong",
			Self::MustNotSplit { .. } => "mustNotSplit",
			Self::NoBlankBetween => "noBlankBetween",
			Self::LimitLineCount { .. } => "limitLineCount",
		}
	}

	pub(crate) fn message(&self) -> String {
		match self {
			Self::MustSplitMany { max_items } => format!(
				"Imports must be broken into multiple lines if there are more than {max_items} elements."
			),
			Self::MustSplitLong { max_line_length, line_length } => format!(
				"Imports must be broken into multiple lines if the line length exceeds {max_line_length} characters, saw {line_length}."
			),
			Self::MustNotSplit { max_items } => format!(
				"Imports must not be broken into multiple lines if there are {max_items} or less elements."
			),
			Self::NoBlankBetween =>
				"Import lines cannot have more than one blank line between them.".to_owned(),
			Self::LimitLineCount { expected_line_count, import_line_count } => format!(
				"Import lines must have one element per line. (Expected import to span {expected_line_count} lines, saw {import_line_count})"
			),
		}
	}
}

#[derive(Debug, Clone)]
pub(crate) struct Finding {
	pub(crate) violation: LayoutViolation,
	pub(crate) fix: Option<String>,
}

pub(crate) fn check_declaration(
	declaration: &ImportDeclaration,
	declaration_text: &str,
	policy: &Policy,
) -> Option<Finding> {
	let import_line_count =
		1 + declaration.span.end.line.saturating_sub(declaration.span.start.line);
	let imported_items = declaration.specifiers.iter().filter(|s| s.is_named()).count();
	let fix_options = FixOptions {
		include_semi: policy.include_semi,
		comments: comment_map(declaration, policy),
	};

	// Blank gaps outrank every layout check; one report per declaration no
	// matter how many gaps exist.
	for pair in declaration.specifiers.windows(2) {
		let gap = pair[1].span().start.line.saturating_sub(pair[0].span().end.line);

		if gap > 1 {
			return Some(Finding {
				violation: LayoutViolation::NoBlankBetween,
				fix: Some(rewrite::synthesize(declaration, &fix_options, Spacer::Newline)),
			});
		}
	}

	if import_line_count == 1 {
		let line_length = declaration_text.chars().count();

		// Length outranks the item count when both are exceeded.
		if let Some(max_line_length) =
			policy.max_line_length.filter(|max| line_length > *max)
		{
			return Some(Finding {
				violation: LayoutViolation::MustSplitLong { max_line_length, line_length },
				fix: Some(rewrite::synthesize(declaration, &fix_options, Spacer::Newline)),
			});
		}
		if imported_items > policy.max_items {
			return Some(Finding {
				violation: LayoutViolation::MustSplitMany { max_items: policy.max_items },
				fix: Some(rewrite::synthesize(declaration, &fix_options, Spacer::Newline)),
			});
		}

		return None;
	}

	// One line per named item, plus the opening and closing lines.
	let expected_line_count = imported_items + 2;

	if import_line_count != expected_line_count {
		return Some(Finding {
			violation: LayoutViolation::LimitLineCount { expected_line_count, import_line_count },
			fix: Some(rewrite::synthesize(declaration, &fix_options, Spacer::Newline)),
		});
	}
	if imported_items <= policy.max_items {
		let collapsed = rewrite::synthesize(declaration, &fix_options, Spacer::Space);
		let within =
			policy.max_line_length.is_none_or(|max| collapsed.chars().count() <= max);

		// The collapse is only enforced when it would not itself overflow the
		// line length limit.
		if within {
			return Some(Finding {
				violation: LayoutViolation::MustNotSplit { max_items: policy.max_items },
				fix: Some(collapsed),
			});
		}
	}

	None
}

fn comment_map(declaration: &ImportDeclaration, policy: &Policy) -> BTreeMap<usize, String> {
	if policy.comments != CommentMode::Preserve {
		return BTreeMap::new();
	}

	declaration
		.comments
		.iter()
		.map(|comment| (comment.span.start.offset, comment.text.clone()))
		.collect()
}
