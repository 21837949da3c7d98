use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::thread;

use ignore_fetch::{
    ContentFetcher, FailedFile, NamedContents, NamesOrdering, collect_outcomes, ensure_suffixes,
    fetch_all,
};

use crate::error::{GetError, GetErrorKind, ListError, TreeError};
use crate::tree::{BranchResponse, TreeResponse};

/// Default owner of the patterns repository.
pub const DEFAULT_OWNER: &str = "github";
/// Default patterns repository name.
pub const DEFAULT_REPOSITORY: &str = "gitignore";
/// Default branch to inspect.
pub const DEFAULT_BRANCH: &str = "master";
/// Default suffix identifying ignore files.
pub const DEFAULT_SUFFIX: &str = ".gitignore";

const ACCEPT_JSON: &str = "application/vnd.github.v3+json";
const ACCEPT_RAW: &str = "application/vnd.github.v3.raw";

/// The default cap on concurrent requests: available processing units
/// minus one, floor of one.
pub fn default_max_requests() -> usize {
    thread::available_parallelism()
        .map(|n| n.get().saturating_sub(1))
        .unwrap_or(1)
        .max(1)
}

/// Configuration for a [`Getter`].
#[derive(Debug, Clone)]
pub struct GetterConfig {
    /// Base URL for a GitHub REST API v3 compatible server. `None` means
    /// api.github.com.
    pub base_url: Option<String>,
    pub owner: String,
    pub repository: String,
    pub branch: String,
    pub suffix: String,
    /// Cap on concurrent blob requests.
    pub max_requests: usize,
}

impl Default for GetterConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            owner: DEFAULT_OWNER.to_owned(),
            repository: DEFAULT_REPOSITORY.to_owned(),
            branch: DEFAULT_BRANCH.to_owned(),
            suffix: DEFAULT_SUFFIX.to_owned(),
            max_requests: default_max_requests(),
        }
    }
}

/// Lists and gets ignore files using the GitHub tree API.
pub struct Getter {
    config: GetterConfig,
    client: reqwest::Client,
    user_agent: String,
}

impl Getter {
    pub fn new(config: GetterConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            user_agent: format!("ignore-fetch/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    fn api_base(&self) -> &str {
        self.config
            .base_url
            .as_deref()
            .unwrap_or("https://api.github.com")
    }

    fn get_json(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", ACCEPT_JSON)
    }

    /// Returns the paths of the available ignore files, in tree order.
    pub async fn list(&self) -> Result<Vec<String>, ListError> {
        let tree = self.fetch_tree().await.map_err(|source| ListError {
            owner: self.config.owner.clone(),
            repository: self.config.repository.clone(),
            branch: self.config.branch.clone(),
            source,
        })?;
        Ok(tree
            .tree
            .iter()
            .filter(|entry| entry.is_blob() && entry.path.ends_with(&self.config.suffix))
            .map(|entry| entry.path.clone())
            .collect())
    }

    /// Downloads the named ignore files, returning their contents in the
    /// order the names were given.
    ///
    /// Names without an extension get the configured suffix appended, and
    /// repeated names are fetched once, keeping their first position.
    pub async fn get(&self, names: &[String]) -> Result<Vec<NamedContents>, GetError> {
        let tree = self
            .fetch_tree()
            .await
            .map_err(|e| self.get_error(e.into()))?;
        let shas = paths_to_shas(tree);

        let paths = dedupe(ensure_suffixes(names, &self.config.suffix));
        let ordering = NamesOrdering::new(&paths);

        let fetcher = Arc::new(BlobFetcher {
            client: self.client.clone(),
            user_agent: self.user_agent.clone(),
            blobs_url: format!(
                "{}/repos/{}/{}/git/blobs",
                self.api_base(),
                self.config.owner,
                self.config.repository,
            ),
            shas,
        });
        let outcomes = fetch_all(fetcher, paths, self.config.max_requests).await;

        let (contents, failures) =
            collect_outcomes(&ordering, outcomes).map_err(|e| self.get_error(e.into()))?;
        if failures.is_empty() {
            Ok(contents)
        } else {
            Err(self.get_error(GetErrorKind::Failed {
                failures,
                partial: contents,
            }))
        }
    }

    fn get_error(&self, source: GetErrorKind) -> GetError {
        GetError {
            owner: self.config.owner.clone(),
            repository: self.config.repository.clone(),
            branch: self.config.branch.clone(),
            source,
        }
    }

    /// Resolves the configured branch to its full recursive tree. Called
    /// once per operation.
    async fn fetch_tree(&self) -> Result<TreeResponse, TreeError> {
        let url = format!(
            "{}/repos/{}/{}/branches/{}",
            self.api_base(),
            self.config.owner,
            self.config.repository,
            self.config.branch,
        );
        let branch: BranchResponse = self
            .get_json(&url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(TreeError::BranchLookup)?
            .json()
            .await
            .map_err(TreeError::BranchLookup)?;
        let sha = branch.tree_sha().ok_or(TreeError::EmptyBranchInfo)?;

        let url = format!(
            "{}/repos/{}/{}/git/trees/{}?recursive=1",
            self.api_base(),
            self.config.owner,
            self.config.repository,
            sha,
        );
        let tree: TreeResponse = self
            .get_json(&url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(TreeError::TreeLookup)?
            .json()
            .await
            .map_err(TreeError::TreeLookup)?;

        if tree.truncated {
            eprintln!(
                "warning: tree response for {}/{} was truncated; results may be incomplete",
                self.config.owner, self.config.repository
            );
        }

        Ok(tree)
    }
}

/// Per-operation blob retriever handed to the fetch pool. Holds the
/// read-only path-to-SHA map built from the tree.
struct BlobFetcher {
    client: reqwest::Client,
    user_agent: String,
    blobs_url: String,
    shas: HashMap<String, String>,
}

#[async_trait::async_trait]
impl ContentFetcher for BlobFetcher {
    async fn fetch(&self, path: &str) -> Result<String, FailedFile> {
        let Some(sha) = self.shas.get(path) else {
            return Err(FailedFile::new(path, "not present in file tree"));
        };
        let url = format!("{}/{sha}", self.blobs_url);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", ACCEPT_RAW)
            .send()
            .await
            .map_err(|e| FailedFile::with_source(path, "failed to download", e))?;
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(FailedFile::new(
                path,
                format!("got status code {}", status.as_u16()),
            ));
        }
        response
            .text()
            .await
            .map_err(|e| FailedFile::with_source(path, "failed to download", e))
    }
}

fn paths_to_shas(tree: TreeResponse) -> HashMap<String, String> {
    tree.tree
        .into_iter()
        .filter(|entry| entry.is_blob() && !entry.path.is_empty())
        .map(|entry| (entry.path, entry.sha))
        .collect()
}

fn dedupe(paths: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(paths.len());
    paths
        .into_iter()
        .filter(|path| seen.insert(path.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_the_canonical_repository() {
        let config = GetterConfig::default();
        assert_eq!(config.owner, "github");
        assert_eq!(config.repository, "gitignore");
        assert_eq!(config.branch, "master");
        assert_eq!(config.suffix, ".gitignore");
        assert!(config.base_url.is_none());
        assert!(config.max_requests >= 1);
    }

    #[test]
    fn dedupe_keeps_first_occurrences_in_order() {
        let paths = vec![
            "Go.gitignore".to_owned(),
            "Python.gitignore".to_owned(),
            "Go.gitignore".to_owned(),
        ];
        assert_eq!(dedupe(paths), vec!["Go.gitignore", "Python.gitignore"]);
    }
}
