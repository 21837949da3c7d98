use ignore_fetch::{FailedFiles, NamedContents, UnknownName};

/// Failure to resolve a branch to its file tree.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error("unable to get branch information")]
    BranchLookup(#[source] reqwest::Error),

    #[error("no branch information received")]
    EmptyBranchInfo,

    #[error("unable to get tree information")]
    TreeLookup(#[source] reqwest::Error),
}

/// Error from a `list` operation.
#[derive(Debug, thiserror::Error)]
#[error("error listing contents of {owner}/{repository} at {branch}: {source}")]
pub struct ListError {
    pub owner: String,
    pub repository: String,
    pub branch: String,
    #[source]
    pub source: TreeError,
}

/// Error from a `get` operation.
#[derive(Debug, thiserror::Error)]
#[error("error getting files from {owner}/{repository} at {branch}: {source}")]
pub struct GetError {
    pub owner: String,
    pub repository: String,
    pub branch: String,
    #[source]
    pub source: GetErrorKind,
}

/// Why a `get` operation failed.
#[derive(Debug, thiserror::Error)]
pub enum GetErrorKind {
    /// The branch or tree could not be resolved; nothing was fetched.
    #[error(transparent)]
    Tree(#[from] TreeError),

    /// Some files could not be retrieved. The files that did succeed are
    /// kept, in request order, for callers that want to inspect them.
    #[error("{failures}")]
    Failed {
        failures: FailedFiles,
        partial: Vec<NamedContents>,
    },

    /// The pipeline produced a result for a path it was never asked for.
    #[error(transparent)]
    Ordering(#[from] UnknownName),
}
