use serde::Deserialize;

/// Response from GitHub's branch-info API.
/// `GET /repos/{owner}/{repo}/branches/{branch}`
///
/// Every level is optional so that a degenerate body still decodes; a
/// missing tree SHA is reported by the caller, not the decoder.
#[derive(Debug, Deserialize)]
pub struct BranchResponse {
    #[serde(default)]
    pub commit: Option<BranchCommit>,
}

#[derive(Debug, Deserialize)]
pub struct BranchCommit {
    #[serde(default)]
    pub commit: Option<CommitDetail>,
}

#[derive(Debug, Deserialize)]
pub struct CommitDetail {
    #[serde(default)]
    pub tree: Option<TreeRef>,
}

#[derive(Debug, Deserialize)]
pub struct TreeRef {
    #[serde(default)]
    pub sha: Option<String>,
}

impl BranchResponse {
    /// The root tree SHA of the branch head, when the response carried one.
    pub fn tree_sha(&self) -> Option<&str> {
        self.commit
            .as_ref()
            .and_then(|commit| commit.commit.as_ref())
            .and_then(|detail| detail.tree.as_ref())
            .and_then(|tree| tree.sha.as_deref())
            .filter(|sha| !sha.is_empty())
    }
}

/// Response from GitHub's Git Trees API.
/// `GET /repos/{owner}/{repo}/git/trees/{sha}?recursive=1`
#[derive(Debug, Deserialize)]
pub struct TreeResponse {
    #[serde(default)]
    pub tree: Vec<TreeEntry>,
    #[serde(default)]
    pub truncated: bool,
}

/// A single entry in the tree.
#[derive(Debug, Deserialize)]
pub struct TreeEntry {
    pub path: String,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub sha: String,
}

impl TreeEntry {
    pub fn is_blob(&self) -> bool {
        self.entry_type == "blob"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_sha_reads_the_nested_field() {
        let body = r#"{
            "name": "master",
            "commit": {
                "sha": "b0012e4930d0a8c350254a3caeedf7441ea286a3",
                "commit": {
                    "tree": {"sha": "5adf061bdde4dd26889be1e74028b2f54aabc346"}
                }
            }
        }"#;
        let response: BranchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            response.tree_sha(),
            Some("5adf061bdde4dd26889be1e74028b2f54aabc346")
        );
    }

    #[test]
    fn tree_sha_is_none_for_an_empty_body() {
        let response: BranchResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.tree_sha(), None);
    }

    #[test]
    fn tree_sha_is_none_for_an_empty_string() {
        let body = r#"{"commit": {"commit": {"tree": {"sha": ""}}}}"#;
        let response: BranchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.tree_sha(), None);
    }

    #[test]
    fn an_empty_tree_body_decodes_to_no_entries() {
        let response: TreeResponse = serde_json::from_str("{}").unwrap();
        assert!(response.tree.is_empty());
        assert!(!response.truncated);
    }
}
