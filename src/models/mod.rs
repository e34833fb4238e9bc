mod output;

pub use output::{Lookup, OUTPUT_FORMAT_VERSION, Output, RunHeader};
