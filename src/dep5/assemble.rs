//! Builds document records from tokenized paragraphs.
//!
//! Each token is routed to the attribute for its field. Tokens for fields the
//! record does not have, and tokens whose value shape does not fit the
//! attribute, are dropped without a trace.

use std::sync::LazyLock;

use regex::Regex;

use super::tokenizer::tokenize_paragraph;
use super::types::{FieldId, FieldValue, FileStanza, Header};

/// Two or more newlines separate paragraphs.
static PARAGRAPH_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").unwrap());

/// Splits document text into its non-blank paragraphs, in order.
pub fn split_paragraphs(content: &str) -> Vec<&str> {
    PARAGRAPH_SEPARATOR
        .split(content)
        .filter(|paragraph| !paragraph.trim().is_empty())
        .collect()
}

impl Header {
    /// Builds a header from the first paragraph of a document.
    pub fn from_paragraph(paragraph: &str) -> Self {
        let mut header = Header::default();

        for token in tokenize_paragraph(paragraph) {
            match (token.field, token.value) {
                (FieldId::Format, FieldValue::Text(value)) => header.format = value,
                (FieldId::UpstreamName, FieldValue::Text(value)) => {
                    header.upstream_name = Some(value)
                }
                (FieldId::UpstreamContact, FieldValue::List(values)) => {
                    header.upstream_contact = Some(values)
                }
                (FieldId::Source, FieldValue::Text(value)) => header.source = Some(value),
                (FieldId::Disclaimer, FieldValue::Text(value)) => header.disclaimer = Some(value),
                (FieldId::Comment, FieldValue::Text(value)) => header.comment = Some(value),
                (FieldId::License, FieldValue::Text(value)) => header.license = Some(value),
                (FieldId::Copyright, FieldValue::Text(value)) => header.copyright = Some(value),
                _ => {}
            }
        }

        header
    }
}

impl FileStanza {
    /// Builds a file stanza from a paragraph following the header.
    pub fn from_paragraph(paragraph: &str) -> Self {
        let mut stanza = FileStanza::default();

        for token in tokenize_paragraph(paragraph) {
            match (token.field, token.value) {
                (FieldId::Files, FieldValue::List(patterns)) => stanza.files = patterns,
                (FieldId::Copyright, FieldValue::Text(value)) => stanza.copyright = value,
                (FieldId::License, FieldValue::Text(value)) => stanza.license = value,
                (FieldId::Comment, FieldValue::Text(value)) => stanza.comment = Some(value),
                _ => {}
            }
        }

        stanza
    }
}
