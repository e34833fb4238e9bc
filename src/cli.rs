use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the debian/copyright file
    pub copyright_file: String,

    /// Paths to look up; each is reported with the file stanza governing it
    pub paths: Vec<String>,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    pub output_file: Option<String>,

    /// Write single-line JSON instead of pretty-printed JSON
    #[arg(long)]
    pub compact: bool,
}
