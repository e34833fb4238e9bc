use chrono::Utc;
use clap::Parser;
use log::{debug, info, warn};
use serde_json::{to_string, to_string_pretty};
use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use debian_copyright::cli::Cli;
use debian_copyright::models::{Lookup, OUTPUT_FORMAT_VERSION, Output, RunHeader};
use debian_copyright::DebianCopyright;

fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let start_time = Utc::now();

    let document = match DebianCopyright::from_file(Path::new(&cli.copyright_file)) {
        Ok(document) => document,
        Err(e) => {
            warn!("Failed to read copyright file {:?}: {}", cli.copyright_file, e);
            return Err(e.into());
        }
    };
    info!(
        "Parsed {} with {} file stanzas",
        cli.copyright_file,
        document.files.len()
    );

    let lookups = Lookup::resolve_all(&document, &cli.paths);
    for lookup in lookups.iter().filter(|lookup| lookup.stanza.is_none()) {
        debug!("No file stanza matches {}", lookup.path);
    }

    let end_time = Utc::now();
    let output = create_output(start_time, end_time, &cli.copyright_file, document, lookups);
    write_output(cli.output_file.as_deref(), &output, cli.compact)?;

    if let Some(output_file) = &cli.output_file {
        info!("JSON output written to {}", output_file);
    }
    Ok(())
}

fn create_output(
    start_time: chrono::DateTime<Utc>,
    end_time: chrono::DateTime<Utc>,
    copyright_file: &str,
    document: DebianCopyright,
    lookups: Vec<Lookup>,
) -> Output {
    let duration = (end_time - start_time).num_nanoseconds().unwrap_or(0) as f64 / 1_000_000_000.0;

    Output {
        headers: vec![RunHeader {
            tool_name: env!("CARGO_PKG_NAME").to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            start_timestamp: start_time.to_rfc3339(),
            end_timestamp: end_time.to_rfc3339(),
            duration,
            copyright_file: copyright_file.to_string(),
            output_format_version: OUTPUT_FORMAT_VERSION.to_string(),
        }],
        document,
        lookups,
    }
}

fn write_output(output_file: Option<&str>, output: &Output, compact: bool) -> std::io::Result<()> {
    let serialized = if compact {
        to_string(output)
    } else {
        to_string_pretty(output)
    };
    let json_output = match serialized {
        Ok(json) => json,
        Err(err) => return Err(std::io::Error::other(err)),
    };

    match output_file {
        Some(path) => {
            let mut file = File::create(path)?;
            file.write_all(json_output.as_bytes())?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json_output.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
