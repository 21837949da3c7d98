use std::io::{self, Write};

use crate::contents::NamedContents;

/// Writes contents to an ignore file.
///
/// Each entry gets a `#` banner built from its display name, followed by
/// its contents stripped of surrounding whitespace and ending in a single
/// newline. Entries are separated by a blank-line gap.
pub fn write_patterns_file<W: Write>(
    mut out: W,
    all_contents: &[NamedContents],
) -> io::Result<()> {
    for (i, named) in all_contents.iter().enumerate() {
        if i > 0 {
            out.write_all(b"\n\n")?;
        }
        write_banner(&mut out, named.display_name())?;
        let contents = named.contents.trim();
        if !contents.is_empty() {
            writeln!(out, "{contents}")?;
        }
    }
    out.flush()
}

fn write_banner<W: Write>(out: &mut W, name: &str) -> io::Result<()> {
    let rule = "#".repeat(name.len() + 4);
    writeln!(out, "{rule}")?;
    writeln!(out, "# {name} #")?;
    writeln!(out, "{rule}")
}
