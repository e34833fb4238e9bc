//! Registry of recognized DEP-5 fields.
//!
//! Field labels are matched case-insensitively anywhere in a line, so a label
//! that occurs inside another line can match too. When several labels match
//! the same line, the one declared first in [`FIELDS`] wins. The declaration
//! order is therefore part of the parsing behaviour and must not be changed.

use super::types::{FieldId, ValueKind};

/// A recognized field label and the encoding of its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub id: FieldId,
    pub label: &'static str,
    pub kind: ValueKind,
}

/// All recognized fields, in match-priority order.
pub static FIELDS: [Field; 9] = [
    Field {
        id: FieldId::Comment,
        label: "Comment",
        kind: ValueKind::FormattedText,
    },
    Field {
        id: FieldId::Copyright,
        label: "Copyright",
        kind: ValueKind::FormattedText,
    },
    Field {
        id: FieldId::Disclaimer,
        label: "Disclaimer",
        kind: ValueKind::FormattedText,
    },
    Field {
        id: FieldId::Files,
        label: "Files",
        kind: ValueKind::WhitespaceList,
    },
    Field {
        id: FieldId::Format,
        label: "Format",
        kind: ValueKind::SingleLine,
    },
    Field {
        id: FieldId::License,
        label: "License",
        kind: ValueKind::FormattedText,
    },
    Field {
        id: FieldId::Source,
        label: "Source",
        kind: ValueKind::FormattedText,
    },
    Field {
        id: FieldId::UpstreamName,
        label: "Upstream-Name",
        kind: ValueKind::SingleLine,
    },
    Field {
        id: FieldId::UpstreamContact,
        label: "Upstream-Contact",
        kind: ValueKind::LineList,
    },
];

/// Result of a successful [`lookup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMatch {
    pub field: &'static Field,
    /// Byte offset of the first `:` in the line. The value starts right after it.
    pub colon: usize,
}

/// Finds the first registry field whose `Label:` occurs in `line`.
///
/// The returned colon offset is the first colon of the line, which is not
/// necessarily the colon that completed the label match.
pub fn lookup(line: &str) -> Option<FieldMatch> {
    let field = FIELDS
        .iter()
        .find(|field| contains_label(line, field.label))?;
    let colon = line.find(':')?;

    Some(FieldMatch { field, colon })
}

/// Case-insensitive (ASCII) search for `label` immediately followed by `:`.
fn contains_label(line: &str, label: &str) -> bool {
    let label = label.as_bytes();
    line.as_bytes().windows(label.len() + 1).any(|window| {
        window[label.len()] == b':' && window[..label.len()].eq_ignore_ascii_case(label)
    })
}
