//! Name suggestion records and the line-marker reply format.
//!
//! The model is told to answer with three five-line blocks:
//!
//! ```text
//! NAME1: ...
//! ORIGINAL_SCRIPT1: ...
//! ORIGIN1: ...
//! MEANING1: ...
//! EXPLANATION1: ...
//! ```
//!
//! Parsing is lenient. A block whose `NAME{i}:` line is missing is dropped, and a
//! missing sibling field becomes an empty string. Nothing here ever fails.

use serde::{Deserialize, Serialize};

/// Number of candidates the prompt asks for.
pub const SUGGESTION_COUNT: usize = 3;

/// One parsed candidate. Empty strings mean the model left the field out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameSuggestion {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub original_script: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub meaning: String,
    #[serde(default)]
    pub explanation: String,
}

impl NameSuggestion {
    /// `original_script` as an option; the model writes nothing for Latin-script names.
    pub fn original_script(&self) -> Option<&str> {
        if self.original_script.is_empty() {
            None
        } else {
            Some(&self.original_script)
        }
    }
}

/// Marker prefixes for ordinal `i` (1-based).
struct Markers {
    name: String,
    original_script: String,
    origin: String,
    meaning: String,
    explanation: String,
}

impl Markers {
    fn for_ordinal(i: usize) -> Self {
        Self {
            name: format!("NAME{}:", i),
            original_script: format!("ORIGINAL_SCRIPT{}:", i),
            origin: format!("ORIGIN{}:", i),
            meaning: format!("MEANING{}:", i),
            explanation: format!("EXPLANATION{}:", i),
        }
    }
}

/// Parse up to three records out of a free-text reply.
pub fn parse_suggestions(reply: &str) -> Vec<NameSuggestion> {
    let lines: Vec<&str> = reply
        .lines()
        .map(str::trim_start)
        .filter(|l| !l.is_empty())
        .collect();

    let mut names = Vec::with_capacity(SUGGESTION_COUNT);
    for i in 1..=SUGGESTION_COUNT {
        let markers = Markers::for_ordinal(i);
        let Some(start) = lines.iter().position(|l| l.starts_with(&markers.name)) else {
            continue;
        };

        let end = if i < SUGGESTION_COUNT {
            let next = format!("NAME{}:", i + 1);
            lines[start + 1..]
                .iter()
                .position(|l| l.starts_with(&next))
                .map(|offset| start + 1 + offset)
                .unwrap_or(lines.len())
        } else {
            lines.len()
        };
        let section = &lines[start..end];

        names.push(NameSuggestion {
            name: field(section, &markers.name),
            original_script: field(section, &markers.original_script),
            origin: field(section, &markers.origin),
            meaning: field(section, &markers.meaning),
            explanation: field(section, &markers.explanation),
        });
    }
    names
}

fn field(section: &[&str], prefix: &str) -> String {
    section
        .iter()
        .find_map(|l| l.strip_prefix(prefix))
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}
