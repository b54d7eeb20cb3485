//! Whole-declaration replacement application.

// self
use super::shared::Edit;
use crate::prelude::*;

/// Applies edits to the dumped source text. Edits are sorted, overlapping
/// ranges are dropped after the first, and the survivors are spliced
/// back-to-front so earlier offsets stay valid.
pub(crate) fn apply_edits(text: &mut String, mut edits: Vec<Edit>) -> Result<usize> {
	if edits.is_empty() {
		return Ok(0);
	}

	edits.sort_by(|a, b| {
		a.start.cmp(&b.start).then(a.end.cmp(&b.end)).then(a.message_id.cmp(b.message_id))
	});

	let mut filtered = Vec::new();
	let mut last_end = 0_usize;

	for edit in edits {
		if edit.start < last_end {
			continue;
		}

		last_end = edit.end;

		filtered.push(edit);
	}

	let applied = filtered.len();

	for edit in filtered.iter().rev() {
		if edit.end > text.len() || edit.start > edit.end {
			return Err(eyre::eyre!(
				"Invalid edit range {}..{} for text length {}.",
				edit.start,
				edit.end,
				text.len()
			));
		}
		if !text.is_char_boundary(edit.start) || !text.is_char_boundary(edit.end) {
			return Err(eyre::eyre!(
				"Edit range {}..{} does not fall on character boundaries.",
				edit.start,
				edit.end
			));
		}

		text.replace_range(edit.start..edit.end, &edit.replacement);
	}

	Ok(applied)
}
