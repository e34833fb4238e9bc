//! Parser for Debian machine-readable copyright files (DEP-5).
//!
//! A copyright file is a sequence of paragraphs separated by blank lines. The
//! first paragraph is the [`Header`]; every following paragraph is a
//! [`FileStanza`] that associates file patterns with copyright and license
//! information.
//!
//! # Pipeline
//! 1. Split the text into paragraphs ([`assemble::split_paragraphs`])
//! 2. Tokenize each paragraph into fields ([`tokenizer::tokenize_paragraph`])
//! 3. Assemble the tokens into a header or a file stanza
//!
//! # Implementation Notes
//! - Parsing never fails. Unknown or malformed fields are dropped.
//! - Reading from disk is the only fallible step ([`DebianCopyright::from_file`]).
//! - Stanza lookup returns the first stanza in document order with a matching
//!   pattern, not the most specific one.

pub mod assemble;
pub mod fields;
pub mod tokenizer;
pub mod types;


use std::path::Path;

use anyhow::Result;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::utils::file::read_file_to_string;
use crate::wildcard::is_wildcard_match;

pub use types::{DEP5_FORMAT_URI, FieldId, FieldValue, FileStanza, Header, Token, ValueKind};

/// A parsed `debian/copyright` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebianCopyright {
    pub header: Header,
    /// File stanzas in document order.
    pub files: Vec<FileStanza>,
}

impl Default for DebianCopyright {
    fn default() -> Self {
        DebianCopyright {
            header: Header {
                format: DEP5_FORMAT_URI.to_string(),
                ..Default::default()
            },
            files: Vec::new(),
        }
    }
}

impl DebianCopyright {
    /// Parses a copyright document from its text.
    ///
    /// The first non-blank paragraph is the header. Text without any
    /// paragraph yields an empty header and no stanzas.
    pub fn parse(content: &str) -> Self {
        let content = content.replace("\r\n", "\n");
        let paragraphs = assemble::split_paragraphs(&content);

        let Some((first, rest)) = paragraphs.split_first() else {
            debug!("Copyright document has no paragraphs");
            return DebianCopyright {
                header: Header::default(),
                files: Vec::new(),
            };
        };

        let header = Header::from_paragraph(first);
        let files: Vec<FileStanza> = rest
            .iter()
            .map(|paragraph| FileStanza::from_paragraph(paragraph))
            .collect();

        debug!(
            "Parsed copyright document (format {:?}) with {} file stanzas",
            header.format,
            files.len()
        );

        DebianCopyright { header, files }
    }

    /// Reads and parses a copyright file.
    ///
    /// Fails only if the file cannot be read as UTF-8 text.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = read_file_to_string(path)?;
        Ok(Self::parse(&content))
    }

    /// Returns the first stanza, in document order, with a pattern matching `path`.
    pub fn find_stanza(&self, path: &str) -> Option<&FileStanza> {
        self.files.iter().find(|stanza| {
            stanza
                .files
                .iter()
                .any(|pattern| is_wildcard_match(path, pattern))
        })
    }
}
