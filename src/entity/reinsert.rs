//! Reinsertion of canonical entity forms into preprocessed text

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::core::EntityRecord;

/// How person names are rendered when reinserted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameStyle {
    /// Names are not reinserted at all
    Skip,
    /// Only the first word of each recorded name
    FirstOnly,
    /// Only the last word of each recorded name
    LastOnly,
    /// The whole name with spaces replaced by underscores, so it survives
    /// later tokenization as a single unit
    #[default]
    FullUnderscored,
}

/// What [`reinsert`] appends to the text
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ReinsertOptions {
    /// Rendering of recorded person names
    pub names: NameStyle,
    /// Whether recorded locations are appended
    pub locations: bool,
}

impl Default for ReinsertOptions {
    fn default() -> Self {
        Self {
            names: NameStyle::FullUnderscored,
            locations: true,
        }
    }
}

/// Append the record's entities to the text
///
/// The output is always the text, a single space, then the selected entity
/// tokens joined by spaces: names first, locations after, each category in
/// record order. Multi-word locations are underscored like full names, so
/// they also survive later tokenization intact. An empty selection still
/// yields the trailing space.
pub fn reinsert(text: &str, record: &EntityRecord, options: &ReinsertOptions) -> String {
    let names = record.names.iter().filter_map(|name| match options.names {
        NameStyle::Skip => None,
        NameStyle::FirstOnly => name.split_whitespace().next().map(str::to_string),
        NameStyle::LastOnly => name.split_whitespace().next_back().map(str::to_string),
        NameStyle::FullUnderscored => Some(name.split_whitespace().join("_")),
    });
    let locations = record
        .locations
        .iter()
        .filter(|_| options.locations)
        .map(|location| location.split_whitespace().join("_"));

    let appended: String = names.chain(locations).join(" ");
    let mut out = String::with_capacity(text.len() + 1 + appended.len());
    out.push_str(text);
    out.push(' ');
    out.push_str(&appended);
    out
}

/// Flag-based wrapper over [`reinsert`] matching the historical interface
///
/// The flag combinations map onto [`NameStyle`] as the original behavior
/// did, including the quirk that disabling `add_names` appends full
/// underscored names rather than none; callers that want no names pass
/// `add_names` with neither sub-flag set.
pub fn reinsert_legacy(
    text: &str,
    record: &EntityRecord,
    add_names: bool,
    add_only_first_names: bool,
    add_only_last_names: bool,
    add_locations: bool,
) -> String {
    let names = if add_names {
        if add_only_first_names {
            NameStyle::FirstOnly
        } else if add_only_last_names {
            NameStyle::LastOnly
        } else {
            NameStyle::Skip
        }
    } else {
        NameStyle::FullUnderscored
    };
    reinsert(
        text,
        record,
        &ReinsertOptions {
            names,
            locations: add_locations,
        },
    )
}
