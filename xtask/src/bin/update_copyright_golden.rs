//! Regenerates `<name>.dep5.expected.json` golden files from `.dep5` fixtures.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use debian_copyright::DebianCopyright;

#[derive(Parser, Debug)]
#[command(about = "Regenerate DEP-5 golden files")]
struct Args {
    /// Directory holding the .dep5 fixtures
    #[arg(default_value = "testdata/dep5")]
    dir: PathBuf,

    /// Only report which golden files are out of date
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let fixtures = collect_fixtures(&args.dir)?;
    let mut stale = 0;

    for fixture in &fixtures {
        let expected_path = expected_path_for(fixture);
        let rendered = render_expected(fixture)?;
        let current = fs::read_to_string(&expected_path).unwrap_or_default();

        if current == rendered {
            continue;
        }

        stale += 1;
        if args.check {
            println!("out of date: {}", expected_path.display());
        } else {
            fs::write(&expected_path, rendered)
                .with_context(|| format!("Failed to write {}", expected_path.display()))?;
            println!("updated: {}", expected_path.display());
        }
    }

    println!("{} fixtures, {} out of date", fixtures.len(), stale);

    if args.check && stale > 0 {
        anyhow::bail!("{} golden files are out of date", stale);
    }
    Ok(())
}

fn collect_fixtures(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut fixtures: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("Failed to list {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "dep5"))
        .collect();
    fixtures.sort();
    Ok(fixtures)
}

fn expected_path_for(fixture: &Path) -> PathBuf {
    let mut name = fixture.as_os_str().to_owned();
    name.push(".expected.json");
    PathBuf::from(name)
}

fn render_expected(fixture: &Path) -> Result<String> {
    let document = DebianCopyright::from_file(fixture)?;
    let mut json = serde_json::to_string_pretty(&document)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_path_for() {
        assert_eq!(
            expected_path_for(Path::new("testdata/dep5/basic.dep5")),
            PathBuf::from("testdata/dep5/basic.dep5.expected.json")
        );
    }

    #[test]
    fn test_collect_fixtures_only_dep5() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.dep5"), "Format: x\n").unwrap();
        fs::write(dir.path().join("a.dep5"), "Format: x\n").unwrap();
        fs::write(dir.path().join("a.dep5.expected.json"), "{}").unwrap();

        let fixtures = collect_fixtures(dir.path()).unwrap();
        assert_eq!(
            fixtures,
            vec![dir.path().join("a.dep5"), dir.path().join("b.dep5")]
        );
    }

    #[test]
    fn test_render_expected() {
        let dir = tempfile::tempdir().unwrap();
        let fixture = dir.path().join("one.dep5");
        fs::write(&fixture, "Format: x\n\nFiles: *\nLicense: MIT\n").unwrap();

        let rendered = render_expected(&fixture).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["header"]["format"], "x");
        assert_eq!(value["files"][0]["license"], "MIT");
    }
}
