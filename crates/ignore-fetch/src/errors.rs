use std::error::Error as StdError;

/// An ignore file that could not be retrieved or processed.
#[derive(Debug, thiserror::Error)]
#[error("failed to get {name}: {message}")]
pub struct FailedFile {
    pub name: String,
    pub message: String,
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl FailedFile {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        name: impl Into<String>,
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Every file that failed during one operation, in arrival order.
#[derive(Debug, Default, thiserror::Error)]
#[error("{}", summarize(.0))]
pub struct FailedFiles(pub Vec<FailedFile>);

impl FailedFiles {
    pub fn push(&mut self, failed: FailedFile) {
        self.0.push(failed);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FailedFile> {
        self.0.iter()
    }
}

impl From<Vec<FailedFile>> for FailedFiles {
    fn from(failures: Vec<FailedFile>) -> Self {
        Self(failures)
    }
}

fn summarize(failures: &[FailedFile]) -> String {
    let names: Vec<&str> = failures.iter().map(|f| f.name.as_str()).collect();
    let reasons: Vec<String> = failures
        .iter()
        .map(|f| format!("{}: {}", f.name, f.message))
        .collect();
    format!(
        "failed to get the following files: {}\n{}\n",
        names.join(", "),
        reasons.join("\n")
    )
}

/// A completed download whose name was never recorded in the ordering
/// index. Indicates a wiring bug in the fetch pipeline.
#[derive(Debug, thiserror::Error)]
#[error("no requested position recorded for {0}")]
pub struct UnknownName(pub String);
