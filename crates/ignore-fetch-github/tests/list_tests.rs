use ignore_fetch_github::{Getter, GetterConfig};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TREE_SHA: &str = "5adf061bdde4dd26889be1e74028b2f54aabc346";

fn user_agent() -> String {
    format!("ignore-fetch/{}", env!("CARGO_PKG_VERSION"))
}

fn getter_for(server: &MockServer) -> Getter {
    Getter::new(GetterConfig {
        base_url: Some(server.uri()),
        max_requests: 2,
        ..GetterConfig::default()
    })
}

async fn mount_branch(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/repos/github/gitignore/branches/master"))
        .and(header("User-Agent", user_agent()))
        .and(header("Accept", "application/vnd.github.v3+json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(include_str!("fixtures/branch_response.json"), "application/json"),
        )
        .mount(server)
        .await;
}

async fn mount_tree_body(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/repos/github/gitignore/git/trees/{TREE_SHA}")))
        .and(query_param("recursive", "1"))
        .and(header("User-Agent", user_agent()))
        .and(header("Accept", "application/vnd.github.v3+json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body.to_owned(), "application/json"))
        .mount(server)
        .await;
}

#[tokio::test]
async fn list_returns_ignore_files_in_tree_order() {
    let server = MockServer::start().await;
    mount_branch(&server).await;
    mount_tree_body(&server, include_str!("fixtures/tree_response.json")).await;

    let files = getter_for(&server).list().await.unwrap();

    assert_eq!(
        files,
        vec![
            "Actionscript.gitignore",
            "Global/Anjuta.gitignore",
            "Go.gitignore",
            "community/AWS/SAM.gitignore",
        ],
        "non-blob entries and other suffixes should be filtered out"
    );
}

#[tokio::test]
async fn list_returns_empty_for_an_empty_tree() {
    let server = MockServer::start().await;
    mount_branch(&server).await;
    mount_tree_body(&server, "{}").await;

    let files = getter_for(&server).list().await.unwrap();
    assert!(files.is_empty());
}

#[tokio::test]
async fn list_warns_but_succeeds_on_a_truncated_tree() {
    let server = MockServer::start().await;
    mount_branch(&server).await;
    let body = serde_json::json!({
        "sha": TREE_SHA,
        "tree": [
            {"path": "Go.gitignore", "type": "blob", "sha": "66fd13c903cac02eb9657cd53fb227823484401d"}
        ],
        "truncated": true
    });
    mount_tree_body(&server, &body.to_string()).await;

    let files = getter_for(&server).list().await.unwrap();
    assert_eq!(files, vec!["Go.gitignore"]);
}

#[tokio::test]
async fn list_fails_when_the_branch_lookup_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/github/gitignore/branches/master"))
        .respond_with(
            ResponseTemplate::new(500).set_body_string(r#"{"message": "something went wrong"}"#),
        )
        .mount(&server)
        .await;

    let err = getter_for(&server).list().await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "error listing contents of github/gitignore at master: unable to get branch information"
    );
}

#[tokio::test]
async fn list_fails_when_the_branch_info_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/github/gitignore/branches/master"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
        .mount(&server)
        .await;

    let err = getter_for(&server).list().await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "error listing contents of github/gitignore at master: no branch information received"
    );
}

#[tokio::test]
async fn list_fails_when_the_tree_lookup_fails() {
    let server = MockServer::start().await;
    mount_branch(&server).await;
    Mock::given(method("GET"))
        .and(path(format!("/repos/github/gitignore/git/trees/{TREE_SHA}")))
        .respond_with(
            ResponseTemplate::new(500).set_body_string(r#"{"message": "something went wrong"}"#),
        )
        .mount(&server)
        .await;

    let err = getter_for(&server).list().await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "error listing contents of github/gitignore at master: unable to get tree information"
    );
}

#[tokio::test]
async fn list_fails_on_a_network_error() {
    let getter = Getter::new(GetterConfig {
        base_url: Some("http://127.0.0.1:1".into()),
        ..GetterConfig::default()
    });
    assert!(getter.list().await.is_err());
}
