//! Integration tests for background file reads

use std::time::Duration;

use lottie_scrub::loader::FileLoader;
use lottie_scrub::{FrameClockFactory, LoadOutcome, PlaybackController};

use crate::helpers::{fixture, temp_fixture};

const WAIT: Duration = Duration::from_secs(5);

#[test]
fn reads_fixture_in_background() {
    let loader = FileLoader::spawn();
    let mut c = PlaybackController::new(FrameClockFactory);

    let ticket = c.begin_load();
    loader.request(ticket, fixture("three_segments.json"));
    let result = loader.recv_timeout(WAIT).expect("load finished");

    assert_eq!(result.ticket, ticket);
    let outcome = c
        .finish_load(result.ticket, result.result, Some(result.path))
        .unwrap();
    assert_eq!(outcome, LoadOutcome::Loaded);
    assert_eq!(c.session().unwrap().table().len(), 3);
}

#[test]
fn only_latest_of_two_requests_is_applied() {
    let loader = FileLoader::spawn();
    let mut c = PlaybackController::new(FrameClockFactory);

    let a = c.begin_load();
    loader.request(a, fixture("three_segments.json"));
    let b = c.begin_load();
    loader.request(b, fixture("single_segment.json"));

    let mut outcomes = Vec::new();
    for _ in 0..2 {
        let result = loader.recv_timeout(WAIT).expect("load finished");
        let outcome = c
            .finish_load(result.ticket, result.result, Some(result.path))
            .unwrap();
        outcomes.push((result.ticket, outcome));
    }

    assert!(outcomes.contains(&(a, LoadOutcome::Stale)));
    assert!(outcomes.contains(&(b, LoadOutcome::Loaded)));
    assert_eq!(c.session().unwrap().meta().name.as_deref(), Some("blink"));
}

#[test]
fn reload_picks_up_file_changes() {
    let (_dir, path) = temp_fixture("no_markers.json");
    let loader = FileLoader::spawn();
    let mut c = PlaybackController::new(FrameClockFactory);

    let ticket = c.begin_load();
    loader.request(ticket, path.clone());
    let result = loader.recv_timeout(WAIT).unwrap();
    c.finish_load(result.ticket, result.result, Some(result.path))
        .unwrap();
    assert!(!c.session().unwrap().has_segments());

    std::fs::copy(fixture("three_segments.json"), &path).unwrap();
    let ticket = c.begin_load();
    loader.request(ticket, path);
    let result = loader.recv_timeout(WAIT).unwrap();
    c.finish_load(result.ticket, result.result, Some(result.path))
        .unwrap();
    assert!(c.session().unwrap().has_segments());
}

#[test]
fn missing_file_is_reported() {
    let loader = FileLoader::spawn();
    let mut c = PlaybackController::new(FrameClockFactory);

    let ticket = c.begin_load();
    loader.request(ticket, fixture("does_not_exist.json"));
    let result = loader.recv_timeout(WAIT).unwrap();
    assert!(c
        .finish_load(result.ticket, result.result, Some(result.path))
        .is_err());
    assert!(!c.is_loaded());
}
