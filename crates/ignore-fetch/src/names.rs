use std::io::{self, BufRead};

/// Appends `suffix` to `name` unless the name already carries an extension.
///
/// A name has an extension when its final path segment contains a dot, so
/// `Foo.bar` and `Vim.gitignore` pass through unchanged.
pub fn ensure_suffix(name: &str, suffix: &str) -> String {
    let base = name.rsplit('/').next().unwrap_or(name);
    if base.contains('.') {
        name.to_owned()
    } else {
        format!("{name}{suffix}")
    }
}

/// Resolves every requested name to a fetchable path.
pub fn ensure_suffixes(names: &[String], suffix: &str) -> Vec<String> {
    names
        .iter()
        .map(|name| ensure_suffix(name, suffix))
        .collect()
}

/// Reads a file containing one name of an ignore patterns file per line.
/// Surrounding whitespace is stripped and blank lines are skipped.
pub fn parse_names<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let name = line.trim();
        if !name.is_empty() {
            names.push(name.to_owned());
        }
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_suffix_appends_when_name_has_no_extension() {
        assert_eq!(ensure_suffix("Vim", ".gitignore"), "Vim.gitignore");
    }

    #[test]
    fn ensure_suffix_leaves_suffixed_names_alone() {
        assert_eq!(ensure_suffix("Vim.gitignore", ".gitignore"), "Vim.gitignore");
    }

    #[test]
    fn ensure_suffix_leaves_other_extensions_alone() {
        assert_eq!(ensure_suffix("Foo.bar", ".gitignore"), "Foo.bar");
    }

    #[test]
    fn ensure_suffix_is_idempotent() {
        let once = ensure_suffix("Vim", ".gitignore");
        assert_eq!(ensure_suffix(&once, ".gitignore"), once);
    }

    #[test]
    fn ensure_suffix_checks_only_the_final_segment() {
        assert_eq!(
            ensure_suffix("Global.d/Vim", ".gitignore"),
            "Global.d/Vim.gitignore"
        );
    }

    #[test]
    fn parse_names_splits_lines_and_trims() {
        let input = "Go\n  Python  \n\nGlobal/Vim.gitignore\n";
        let names = parse_names(input.as_bytes()).unwrap();
        assert_eq!(names, vec!["Go", "Python", "Global/Vim.gitignore"]);
    }

    #[test]
    fn parse_names_handles_empty_input() {
        let names = parse_names("".as_bytes()).unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn parse_names_skips_whitespace_only_lines() {
        let names = parse_names("   \n\t\nGo\n".as_bytes()).unwrap();
        assert_eq!(names, vec!["Go"]);
    }
}
