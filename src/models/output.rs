use serde::Serialize;

use crate::dep5::{DebianCopyright, FileStanza};

pub const OUTPUT_FORMAT_VERSION: &str = "1.0.0";

#[derive(Serialize, Debug)]
pub struct Output {
    pub headers: Vec<RunHeader>,
    pub document: DebianCopyright,
    pub lookups: Vec<Lookup>,
}

#[derive(Serialize, Debug)]
pub struct RunHeader {
    pub tool_name: String,
    pub tool_version: String,
    pub start_timestamp: String,
    pub end_timestamp: String,
    pub duration: f64,
    pub copyright_file: String,
    pub output_format_version: String,
}

/// The stanza governing one looked-up path.
#[derive(Serialize, Debug, PartialEq)]
pub struct Lookup {
    pub path: String,
    /// Position of the matching stanza among the document's file stanzas.
    pub stanza_index: Option<usize>,
    pub stanza: Option<FileStanza>,
}

impl Lookup {
    /// Resolves every path against the document, keeping the input order.
    pub fn resolve_all(document: &DebianCopyright, paths: &[String]) -> Vec<Lookup> {
        paths
            .iter()
            .map(|path| Lookup::resolve(document, path))
            .collect()
    }

    pub fn resolve(document: &DebianCopyright, path: &str) -> Lookup {
        let stanza = document.find_stanza(path);
        let stanza_index = stanza.and_then(|found| {
            document
                .files
                .iter()
                .position(|candidate| std::ptr::eq(candidate, found))
        });

        Lookup {
            path: path.to_string(),
            stanza_index,
            stanza: stanza.cloned(),
        }
    }
}
