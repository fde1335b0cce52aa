use std::path::PathBuf;

use gh_trending::{
    FetchError, OutputMode, Period, Runner, RunnerConfig, RunnerError, TrendingQuery,
};
use mockito::{Matcher, Server};

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    std::fs::read_to_string(path).unwrap()
}

fn runner(origin: &str, query: TrendingQuery) -> Runner {
    let config = RunnerConfig::new(query, OutputMode::Json).with_origin(format!("{origin}/"));
    Runner::new(config).unwrap()
}

#[tokio::test]
async fn fetches_and_extracts_trending_page() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/trending/rust")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("since".into(), "weekly".into()),
            Matcher::UrlEncoded("spoken_language_code".into(), "en".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(fixture("trending.html"))
        .create_async()
        .await;

    let query = TrendingQuery::new(Period::Weekly)
        .with_language("Rust")
        .with_spoken_language("en");
    let repos = runner(&server.url(), query)
        .fetch_repositories()
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(repos.len(), 3);
    assert_eq!(repos[1].name, "octocat/Hello-World");
    // Links always point at github.com, wherever the page came from
    assert_eq!(repos[1].href, "https://github.com/octocat/Hello-World");
}

#[tokio::test]
async fn empty_listing_is_not_an_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/trending")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(fixture("empty.html"))
        .create_async()
        .await;

    let repos = runner(&server.url(), TrendingQuery::default())
        .fetch_repositories()
        .await
        .unwrap();

    assert!(repos.is_empty());
}

#[tokio::test]
async fn error_status_is_reported() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/trending")
        .match_query(Matcher::Any)
        .with_status(429)
        .create_async()
        .await;

    let result = runner(&server.url(), TrendingQuery::default())
        .fetch_repositories()
        .await;

    match result {
        Err(RunnerError::Fetch(FetchError::Status { status, .. })) => assert_eq!(status, 429),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_body_is_a_parse_failure() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/trending")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("")
        .create_async()
        .await;

    let result = runner(&server.url(), TrendingQuery::default())
        .fetch_repositories()
        .await;

    assert!(matches!(
        result,
        Err(RunnerError::Extract(gh_trending::ExtractError::EmptyDocument))
    ));
}
