/// The retrieved contents (patterns and comments) of a single ignore file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedContents {
    /// The path the file was requested as, e.g. `Global/Vim.gitignore`.
    pub name: String,
    /// Raw text of the file.
    pub contents: String,
}

impl NamedContents {
    pub fn new(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }

    /// The decorated name, suitable for a section header in an ignore file:
    /// the base name with any extension stripped.
    pub fn display_name(&self) -> &str {
        let base = self
            .name
            .rsplit('/')
            .next()
            .unwrap_or(self.name.as_str());
        match base.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_returns_the_name() {
        let nc = NamedContents::new("Vim", "");
        assert_eq!(nc.display_name(), "Vim");
    }

    #[test]
    fn display_name_takes_only_the_base_name() {
        let nc = NamedContents::new("Global/Vim", "");
        assert_eq!(nc.display_name(), "Vim");
    }

    #[test]
    fn display_name_strips_the_extension() {
        let nc = NamedContents::new("Vim.gitignore", "");
        assert_eq!(nc.display_name(), "Vim");
    }

    #[test]
    fn display_name_strips_any_extension() {
        let nc = NamedContents::new("Vim.patterns", "");
        assert_eq!(nc.display_name(), "Vim");
    }

    #[test]
    fn display_name_takes_base_name_and_strips_extension() {
        let nc = NamedContents::new("Global/Vim.gitignore", "");
        assert_eq!(nc.display_name(), "Vim");
    }
}
