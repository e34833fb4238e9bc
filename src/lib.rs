pub mod cli;
pub mod dep5;
pub mod models;
pub mod utils;
pub mod wildcard;

#[cfg(test)]
mod test_utils;

pub use dep5::{DebianCopyright, FileStanza, Header};
pub use models::{Lookup, Output, RunHeader};
pub use wildcard::is_wildcard_match;
