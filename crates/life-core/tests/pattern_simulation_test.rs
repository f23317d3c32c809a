use life_core::{
    BoardSize, Cell, LifeError, LivingSet, PatternOffset, PatternSource, PatternSourceConfig,
    RecordingTerminal, RunConfig, Simulation, StopReason,
};
use std::future::pending;
use std::time::Duration;

const GLIDER_CELLS: &str = "!Name: Glider\n!Author: Richard K. Guy\n!\n.O\n..O\nOOO\n";

fn living(coords: &[(i64, i64)]) -> LivingSet {
    coords.iter().map(|&c| Cell::from(c)).collect()
}

fn source_for(server: &mockito::ServerGuard) -> PatternSource {
    PatternSource::new(PatternSourceConfig {
        base_url: server.url(),
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}

#[tokio::test]
async fn test_fetch_lowercases_name_and_parses_cells() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/glider.cells")
        .with_status(200)
        .with_header("content-type", "text/plain")
        .with_body(GLIDER_CELLS)
        .create_async()
        .await;

    let cells = source_for(&server).fetch("Glider").await.unwrap();

    mock.assert_async().await;
    assert_eq!(cells, living(&[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]));
}

#[tokio::test]
async fn test_unknown_pattern_is_none() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/nosuchthing.cells")
        .with_status(404)
        .expect(1)
        .create_async()
        .await;

    let source = source_for(&server);
    assert_eq!(source.fetch("NoSuchThing").await, None);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_try_fetch_reports_not_found() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/missing.cells")
        .with_status(404)
        .create_async()
        .await;

    let err = source_for(&server).try_fetch("missing").await.unwrap_err();
    assert!(matches!(err, LifeError::PatternNotFound(ref msg) if msg.contains("missing")));
}

#[tokio::test]
async fn test_transport_failure_is_none() {
    // Nothing listens on the discard port.
    let source = PatternSource::new(PatternSourceConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        timeout: Duration::from_secs(2),
    })
    .unwrap();

    let err = source.try_fetch("block").await.unwrap_err();
    assert!(matches!(err, LifeError::TransportError(_)));
    assert_eq!(source.fetch("block").await, None);
}

#[tokio::test]
async fn test_empty_pattern_is_distinct_from_missing() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/empty.cells")
        .with_status(200)
        .with_body("!Name: Empty\n....\n")
        .create_async()
        .await;

    let cells = source_for(&server).fetch("empty").await;
    assert_eq!(cells, Some(LivingSet::new()));
}

#[tokio::test]
async fn test_fetched_glider_runs_until_limit() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/glider.cells")
        .with_status(200)
        .with_body(GLIDER_CELLS)
        .create_async()
        .await;

    let pattern = source_for(&server).fetch("glider").await.unwrap();
    let cells = PatternOffset::new(2, 3).apply(pattern).unwrap();
    assert!(cells.contains(&Cell::new(2, 4)));

    let config = RunConfig::default()
        .with_period(Duration::ZERO)
        .with_generations(Some(5));
    let mut terminal = RecordingTerminal::default();
    let summary = Simulation::new(config, cells.clone())
        .run(&mut terminal, pending())
        .await
        .unwrap();

    assert_eq!(summary.reason, StopReason::GenerationLimitReached);
    assert_eq!(summary.frames, 5);
    // Five steps: one full glider period plus one more generation.
    assert_eq!(summary.living.len(), 5);
}

#[tokio::test]
async fn test_glider_leaves_small_board() {
    let glider = living(&[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);
    let config = RunConfig::default()
        .with_size(BoardSize::new(4, 4))
        .with_period(Duration::ZERO);
    let mut terminal = RecordingTerminal::default();
    let summary = Simulation::new(config, glider)
        .run(&mut terminal, pending())
        .await
        .unwrap();

    // The glider drifts one cell diagonally every four steps and has fully
    // left the 4x4 board after ten.
    assert_eq!(summary.reason, StopReason::EmptyViewport);
    assert_eq!(summary.steps, 10);
    assert_eq!(summary.frames, 11);
    assert_eq!(terminal.frames.len(), 11);
    assert!(terminal.frames[9].lines().iter().any(|line| line.contains('+')));
    assert!(terminal.frames[10].lines().iter().all(|line| line.trim().is_empty()));
    assert_eq!(
        summary.living,
        living(&[(3, 4), (4, 2), (4, 4), (5, 3), (5, 4)])
    );
}
