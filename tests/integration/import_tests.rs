use crate::helpers::{
    config_for, html_response, listing_html, mount_listing, mount_pages, scenario_pages,
};
use fightstats::config::load_config;
use fightstats::crawler::{import_concurrent, import_sequential};
use fightstats::output::{render_report, summary_line};
use fightstats::{FightStatsError, FighterRecord, PageId, ResultTable};
use indicatif::ProgressBar;
use std::io::Write;
use std::time::Duration;
use wiremock::{MockServer, ResponseTemplate};

fn page(letter: char) -> PageId {
    PageId::new(letter).expect("valid letter")
}

fn sorted(table: &ResultTable) -> Vec<FighterRecord> {
    let mut rows = table.rows().to_vec();
    rows.sort();
    rows
}

/// Runs the blocking import off the async test runtime
async fn run_sequential(config: fightstats::Config) -> Result<ResultTable, FightStatsError> {
    tokio::task::spawn_blocking(move || import_sequential(&config))
        .await
        .expect("sequential import panicked")
}

#[tokio::test]
async fn test_sequential_import_scenario() {
    let server = MockServer::start().await;
    mount_pages(&server, scenario_pages()).await;

    let table = run_sequential(config_for(&server))
        .await
        .expect("import failed");

    assert_eq!(table.len(), 27);
    assert_eq!(summary_line(table.len()), "27 Fighters retrieved!");

    let order: Vec<PageId> = table.pages().iter().map(|(p, _)| *p).collect();
    assert_eq!(order, PageId::all().collect::<Vec<_>>());
    assert_eq!(table.pages()[1], (page('b'), 0));

    let first = &table.rows()[0];
    assert_eq!(first.first_name, "Tom");
    assert_eq!(first.last_name, "Aaron");
    assert_eq!(first.nickname, None);
    assert_eq!(first.height.as_deref(), Some("5' 10\""));
    assert_eq!(first.reach, None);
    assert_eq!(first.wins, 5);

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 26);
}

#[tokio::test]
async fn test_concurrent_import_matches_sequential() {
    let server = MockServer::start().await;
    mount_pages(&server, scenario_pages()).await;
    let config = config_for(&server);

    let sequential = run_sequential(config.clone()).await.expect("import failed");

    let progress = ProgressBar::hidden();
    let concurrent = import_concurrent(&config, &progress)
        .await
        .expect("import failed");

    assert_eq!(concurrent.len(), 27);
    assert_eq!(concurrent.pages().len(), 26);
    assert_eq!(sorted(&sequential), sorted(&concurrent));
    assert_eq!(progress.position(), 26);

    let report = render_report(&concurrent, Duration::from_millis(250));
    assert!(report.contains("27 Fighters retrieved!"));
    assert!(report.ends_with("Process took: 0.25 seconds"));
}

#[tokio::test]
async fn test_concurrent_import_completes_out_of_order() {
    let server = MockServer::start().await;
    for (id, body) in scenario_pages() {
        let delay = if id == page('a') { 400 } else { 0 };
        mount_listing(
            &server,
            id,
            html_response(body).set_delay(Duration::from_millis(delay)),
        )
        .await;
    }

    let table = import_concurrent(&config_for(&server), &ProgressBar::hidden())
        .await
        .expect("import failed");

    assert_eq!(table.len(), 27);
    assert_ne!(table.pages()[0].0, page('a'));
    assert_eq!(table.pages().last().map(|(p, _)| *p), Some(page('a')));
}

#[tokio::test]
async fn test_malformed_wins_aborts_both_modes() {
    let server = MockServer::start().await;
    let pages = scenario_pages()
        .into_iter()
        .map(|(id, body)| {
            if id == page('q') {
                (id, listing_html(&[("Quinn", "Bad", "N/A")]))
            } else {
                (id, body)
            }
        })
        .collect();
    mount_pages(&server, pages).await;
    let config = config_for(&server);

    let err = run_sequential(config.clone()).await.unwrap_err();
    match err {
        FightStatsError::HtmlParse { url, .. } => assert!(url.contains("char=q")),
        other => panic!("unexpected error: {other}"),
    }

    let err = import_concurrent(&config, &ProgressBar::hidden())
        .await
        .unwrap_err();
    assert!(matches!(err, FightStatsError::HtmlParse { .. }));
}

#[tokio::test]
async fn test_http_error_aborts_import() {
    let server = MockServer::start().await;
    let pages = scenario_pages()
        .into_iter()
        .filter(|(id, _)| *id != page('m'))
        .collect();
    mount_pages(&server, pages).await;
    mount_listing(&server, page('m'), ResponseTemplate::new(500)).await;
    let config = config_for(&server);

    let err = import_concurrent(&config, &ProgressBar::hidden())
        .await
        .unwrap_err();
    assert!(matches!(err, FightStatsError::Status { status: 500, .. }));

    let err = run_sequential(config).await.unwrap_err();
    match err {
        FightStatsError::Status { url, status } => {
            assert_eq!(status, 500);
            assert!(url.ends_with("char=m&page=all"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_import_with_config_file() {
    let server = MockServer::start().await;
    mount_pages(&server, scenario_pages()).await;

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        "[source]\nbase-url = \"{}\"\n\n[scheduler]\nmax-concurrent-requests = 2\n",
        server.uri()
    )
    .expect("write config");
    file.flush().expect("flush config");

    let config = load_config(file.path()).expect("valid config");
    assert_eq!(config.scheduler.max_concurrent_requests, 2);

    let table = import_concurrent(&config, &ProgressBar::hidden())
        .await
        .expect("import failed");
    assert_eq!(table.len(), 27);
}
