//! Policy configuration.
//!
//! Two configuration shapes are accepted, an options object and a legacy
//! positional array, normalized into one [`Policy`] at load time. The floors
//! are enforced here so a bad configuration aborts the run before any
//! declaration is evaluated.

// crates.io
use serde::Deserialize;

// self
use super::shared::{DEFAULT_MAX_ITEMS, MIN_ITEMS, MIN_MAX_LENGTH};
use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum CommentMode {
	Preserve,
	#[default]
	Strip,
}

#[derive(Debug, Clone)]
pub(crate) struct Policy {
	pub(crate) max_items: usize,
	/// `None` means unbounded.
	pub(crate) max_line_length: Option<usize>,
	pub(crate) include_semi: bool,
	pub(crate) comments: CommentMode,
}
impl Default for Policy {
	fn default() -> Self {
		Self {
			max_items: DEFAULT_MAX_ITEMS as usize,
			max_line_length: None,
			include_semi: true,
			comments: CommentMode::Strip,
		}
	}
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawOptions {
	Object(ObjectOptions),
	Positional(Vec<i64>),
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ObjectOptions {
	items: Option<i64>,
	#[serde(rename = "max-len")]
	max_len: Option<i64>,
	semi: Option<bool>,
	comments: Option<CommentMode>,
}

pub(crate) fn parse_policy(text: &str) -> Result<Policy> {
	let raw = serde_json::from_str::<RawOptions>(text)
		.map_err(|err| eyre::eyre!("Invalid policy configuration: {err}."))?;

	normalize(raw)
}

fn normalize(raw: RawOptions) -> Result<Policy> {
	let (items, max_len, semi, comments) = match raw {
		RawOptions::Object(object) => (object.items, object.max_len, object.semi, object.comments),
		RawOptions::Positional(values) => {
			if values.len() > 2 {
				return Err(eyre::eyre!(
					"Positional configuration takes at most two values, saw {}.",
					values.len()
				));
			}

			(values.first().copied(), values.get(1).copied(), None, None)
		},
	};
	let items = items.unwrap_or(DEFAULT_MAX_ITEMS);

	if items < MIN_ITEMS {
		return Err(eyre::eyre!("Item threshold must be at least {MIN_ITEMS}."));
	}
	if max_len.is_some_and(|value| value < MIN_MAX_LENGTH) {
		return Err(eyre::eyre!("Maximum line length must be at least {MIN_MAX_LENGTH}."));
	}

	Ok(Policy {
		max_items: items as usize,
		max_line_length: max_len.map(|value| value as usize),
		include_semi: semi.unwrap_or(true),
		comments: comments.unwrap_or_default(),
	})
}
