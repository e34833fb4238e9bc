//! Core types for DEP-5 documents.
//!
//! This module defines:
//! - The document records ([`Header`], [`FileStanza`])
//! - The field identifiers and value encodings used by the registry ([`FieldId`], [`ValueKind`])
//! - The [`Token`] produced by the paragraph tokenizer and its [`FieldValue`]

use serde::{Deserialize, Serialize};

/// URI of the DEP-5 1.0 format specification.
pub const DEP5_FORMAT_URI: &str =
    "https://www.debian.org/doc/packaging-manuals/copyright-format/1.0/";

/// The header paragraph of a copyright file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// URI of the format specification.
    pub format: String,
    /// The name upstream uses for the software.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upstream_name: Option<String>,
    /// The preferred address(es) to reach the upstream project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upstream_contact: Option<Vec<String>>,
    /// Where the upstream source came from. Usually a URL, may be free-form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disclaimer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

/// A `Files` paragraph associating file patterns with copyright and license.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStanza {
    /// File patterns, possibly containing `*` wildcards.
    pub files: Vec<String>,
    pub copyright: String,
    pub license: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Identifier of a recognized DEP-5 field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Comment,
    Copyright,
    Disclaimer,
    Files,
    Format,
    License,
    Source,
    UpstreamName,
    UpstreamContact,
}

/// How a field's value is encoded across lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Value fits on the label line; continuation lines are never consumed.
    SingleLine,
    /// Free text; continuation lines are trimmed and joined with `\n`.
    FormattedText,
    /// One entry per line; blank lines are skipped.
    LineList,
    /// Entries separated by spaces, possibly over several lines.
    WhitespaceList,
}

/// The value carried by a [`Token`].
///
/// `SingleLine` and `FormattedText` fields produce [`FieldValue::Text`];
/// `LineList` and `WhitespaceList` fields produce [`FieldValue::List`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

/// A parsed field: which field it was and what value it carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub field: FieldId,
    pub value: FieldValue,
}
