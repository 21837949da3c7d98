use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use ignore_fetch::{parse_names, write_patterns_file};
use ignore_fetch_github::Getter;

/// Retrieve the named pattern files, combine them, and write the result to
/// `output_file` (stdout when absent). Nothing is written unless every
/// file was retrieved.
pub async fn run(
    getter: &Getter,
    mut names: Vec<String>,
    names_file: Option<&Path>,
    output_file: Option<&Path>,
) -> Result<()> {
    if let Some(path) = names_file {
        let file = File::open(path)
            .with_context(|| format!("failed to open names file {}", path.display()))?;
        names.extend(
            parse_names(BufReader::new(file))
                .with_context(|| format!("failed to read names file {}", path.display()))?,
        );
    }

    let contents = getter.get(&names).await?;

    match output_file {
        Some(path) => {
            eprintln!("Writing contents to {}", path.display());
            let file = File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?;
            write_patterns_file(BufWriter::new(file), &contents)?;
        }
        None => {
            eprintln!("Writing contents to STDOUT");
            write_patterns_file(io::stdout().lock(), &contents)?;
        }
    }
    Ok(())
}
