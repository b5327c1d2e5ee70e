//! Integration tests for devfinder
//!
//! These tests run the search session, the worker and the one-shot commands
//! against a local mock HTTP server and check the complete request flows.

use devfinder::api::{ApiClient, ApiError};
use devfinder::cli::{Cli, Commands};
use devfinder::commands::{developers, home};
use devfinder::search::{ApplyOutcome, SearchResponse, SearchSession, SearchWorker};
use clap::Parser;
use mockito::{Matcher, Mock, Server};
use std::time::Duration;

const DEFAULT_LISTING: &str = r#"{"result":{"hits":[
    {"id":1,"login":"ada"},{"id":2,"login":"grace"},{"id":3,"login":"linus"}
],"nbHits":45,"limit":20}}"#;

const FILTERED_LISTING: &str = r#"{"result":{"hits":[
    {"id":"7","login":"ferris","name":"Ferris","languages":["rust","go"]}
],"nbHits":1,"limit":20}}"#;

/// Helper function to build a client for the mock server
fn client_for(server: &Server) -> ApiClient {
    ApiClient::new(&server.url(), Duration::from_secs(5)).unwrap()
}

/// Helper function to mock the unfiltered developer listing
fn mock_default_listing(server: &mut Server) -> Mock {
    server
        .mock("GET", "/developers/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("ossFilter".into(), "false".into()),
        ]))
        .with_header("content-type", "application/json")
        .with_body(DEFAULT_LISTING)
        .create()
}

/// Helper function to mock the "Backend / go rust / OSS" search
fn mock_filtered_listing(server: &mut Server) -> Mock {
    server
        .mock("GET", "/developers/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("title".into(), "Backend".into()),
            Matcher::UrlEncoded("tools".into(), "go rust".into()),
            Matcher::UrlEncoded("ossFilter".into(), "true".into()),
            Matcher::UrlEncoded("page".into(), "1".into()),
        ]))
        .with_header("content-type", "application/json")
        .with_body(FILTERED_LISTING)
        .create()
}

/// Helper function to wait for the next worker response
fn next_response(worker: &SearchWorker) -> SearchResponse {
    worker
        .recv_timeout(Duration::from_secs(10))
        .unwrap()
        .expect("search worker did not answer in time")
}

fn backend_session() -> SearchSession {
    let mut session = SearchSession::new();
    let filter = session.filter_mut();
    filter.set_title("Backend");
    filter.set_tools(["go", "rust"]);
    filter.toggle_oss();
    session
}

#[test]
fn test_mount_then_submit() {
    let mut server = Server::new();
    let default_mock = mock_default_listing(&mut server);
    let filtered_mock = mock_filtered_listing(&mut server);

    let worker = SearchWorker::spawn(client_for(&server));
    let mut session = backend_session();

    let request = session.mount().unwrap();
    assert!(session.mount().is_none());
    worker.submit(request).unwrap();
    assert_eq!(session.apply(next_response(&worker)), ApplyOutcome::Applied);
    assert_eq!(session.results().unwrap().nb_hits, 45);
    assert!(!session.filter().search_mode_active);

    worker.submit(session.submit()).unwrap();
    assert_eq!(session.apply(next_response(&worker)), ApplyOutcome::Applied);

    let results = session.results().unwrap();
    assert_eq!(results.hits.len(), 1);
    assert_eq!(results.hits[0].login, "ferris");
    assert!(session.filter().search_mode_active);
    assert!(!session.is_loading());

    default_mock.assert();
    filtered_mock.assert();
    worker.shutdown();
}

#[test]
fn test_reset_discards_in_flight_search() {
    let mut server = Server::new();
    let _default_mock = mock_default_listing(&mut server);
    let _filtered_mock = mock_filtered_listing(&mut server);

    let worker = SearchWorker::spawn(client_for(&server));
    let mut session = backend_session();

    worker.submit(session.submit()).unwrap();
    let reset = session.reset();
    assert_eq!(reset.query.page, 1);
    assert!(reset.query.title.is_empty());
    worker.submit(reset).unwrap();

    let outcomes = [
        session.apply(next_response(&worker)),
        session.apply(next_response(&worker)),
    ];
    assert!(outcomes.contains(&ApplyOutcome::Stale));
    assert!(outcomes.contains(&ApplyOutcome::Applied));

    let results = session.results().unwrap();
    assert_eq!(results.hits.len(), 3);
    assert!(!session.filter().search_mode_active);
    assert!(session.filter().title.is_empty());
    assert!(session.filter().tools.is_empty());

    worker.shutdown();
}

#[test]
fn test_failed_page_keeps_previous_results() {
    let mut server = Server::new();
    let _default_mock = mock_default_listing(&mut server);
    let _failing_mock = server
        .mock("GET", "/developers/search")
        .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
        .with_status(503)
        .with_body("maintenance")
        .create();

    let worker = SearchWorker::spawn(client_for(&server));
    let mut session = SearchSession::new();

    worker.submit(session.mount().unwrap()).unwrap();
    session.apply(next_response(&worker));

    worker.submit(session.change_page(2).unwrap()).unwrap();
    let outcome = session.apply(next_response(&worker));

    assert!(matches!(outcome, ApplyOutcome::Failed(_)));
    assert_eq!(session.results().unwrap().hits.len(), 3);
    assert!(session.last_error().unwrap().contains("503"));

    worker.shutdown();
}

#[test]
fn test_cli_filters_drive_developers_command() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/developers/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("title".into(), "Backend".into()),
            Matcher::UrlEncoded("tools".into(), "go rust".into()),
            Matcher::UrlEncoded("sortType".into(), "popularity".into()),
            Matcher::UrlEncoded("page".into(), "3".into()),
        ]))
        .with_header("content-type", "application/json")
        .with_body(FILTERED_LISTING)
        .create();

    let cli = Cli::parse_from([
        "devfinder", "developers", "-t", "Backend", "-T", "go", "-T", "rust", "-s", "popularity",
        "-p", "3",
    ]);
    let Commands::Developers { filter, page, .. } = cli.get_command() else {
        panic!("Expected Developers command");
    };

    let (query, result) = developers::search(&client_for(&server), filter.to_filter_state(), page).unwrap();
    assert_eq!(query.page, 3);
    assert!(!query.oss_filter);
    assert_eq!(result.hits[0].display_name(), "Ferris");
    mock.assert();
}

#[test]
fn test_home_top_projects() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/projects/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("count".into(), "6".into()),
            Matcher::UrlEncoded("sortMethod".into(), "popularity".into()),
        ]))
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"result":{"hits":[
                {"name":"ripgrep","language":"Rust","stargazers_count":40000},
                {"name":"fzf","description":"fuzzy finder","stargazers_count":60000}
            ],"nbHits":2,"limit":6}}"#,
        )
        .create();

    let projects = home::top_projects(&client_for(&server), 6).unwrap();
    assert_eq!(projects.hits.len(), 2);
    assert_eq!(projects.hits[0].name, "ripgrep");
    assert_eq!(projects.hits[1].description.as_deref(), Some("fuzzy finder"));
    mock.assert();
}

#[test]
fn test_malformed_body_is_decode_error() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/projects/search")
        .match_query(Matcher::Any)
        .with_body("<html>not json</html>")
        .create();

    let err = home::top_projects(&client_for(&server), 6).unwrap_err();
    assert!(matches!(err, devfinder::DevfinderError::Api(ApiError::Decode(_))));
}
