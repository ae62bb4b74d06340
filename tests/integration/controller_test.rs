//! Integration tests for the playback controller against real fixture files

use std::path::PathBuf;

use lottie_scrub::{
    AnimationDescription, FrameClockFactory, FrameRange, LoadOutcome, PlaybackController,
    PlaybackEngine, ScrubError,
};

use crate::helpers::fixture;

fn controller() -> PlaybackController<FrameClockFactory> {
    PlaybackController::new(FrameClockFactory)
}

fn parse(name: &str) -> lottie_scrub::Result<AnimationDescription> {
    AnimationDescription::parse(fixture(name))
}

fn active_range(c: &PlaybackController<FrameClockFactory>) -> FrameRange {
    c.session().expect("loaded").engine().active_range()
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn load_plays_idle_segment() {
    let mut c = controller();
    c.load_animation(parse("three_segments.json").unwrap())
        .unwrap();

    let session = c.session().unwrap();
    assert_eq!(session.table().len(), 3);
    assert_eq!(session.meta().name.as_deref(), Some("wave"));
    assert_eq!(session.slider().current_segment, 0);
    assert_eq!(session.slider().position, 0.0);
    assert_eq!(active_range(&c), FrameRange::new(0, 10));
    assert!(!session.engine().is_paused());
}

#[test]
fn load_without_markers_plays_everything() {
    let mut c = controller();
    c.load_animation(parse("no_markers.json").unwrap()).unwrap();

    assert_eq!(active_range(&c), FrameRange::new(0, 50));
    let range = c.session().unwrap().slider_range();
    assert_eq!((range.min, range.max), (0.0, 50.0));
}

#[test]
fn fractional_marker_times_are_rounded() {
    let mut c = controller();
    c.load_animation(parse("single_segment.json").unwrap())
        .unwrap();
    assert_eq!(active_range(&c), FrameRange::new(0, 48));
}

#[test]
fn unreadable_file_reports_path() {
    match parse("not_json.txt") {
        Err(ScrubError::UnreadableFile { path, .. }) => {
            assert!(path.ends_with("not_json.txt"));
        }
        other => panic!("expected UnreadableFile, got {:?}", other),
    }
}

#[test]
fn malformed_markers_keep_previous_session() {
    let mut c = controller();
    c.load_animation(parse("three_segments.json").unwrap())
        .unwrap();
    c.select_segment(2).unwrap();

    let err = c
        .load_animation(parse("odd_markers.json").unwrap())
        .unwrap_err();
    assert!(err.is_malformed_markers());

    let session = c.session().expect("previous session survives");
    assert_eq!(session.meta().name.as_deref(), Some("wave"));
    assert_eq!(session.slider().current_segment, 2);
    assert_eq!(active_range(&c), FrameRange::new(20, 40));
}

// ============================================================================
// Stale loads
// ============================================================================

#[test]
fn older_load_finishing_last_is_discarded() {
    let mut c = controller();
    let a = c.begin_load();
    let b = c.begin_load();

    let outcome = c
        .finish_load(
            b,
            parse("no_markers.json"),
            Some(PathBuf::from("no_markers.json")),
        )
        .unwrap();
    assert_eq!(outcome, LoadOutcome::Loaded);

    let outcome = c
        .finish_load(
            a,
            parse("three_segments.json"),
            Some(PathBuf::from("three_segments.json")),
        )
        .unwrap();
    assert_eq!(outcome, LoadOutcome::Stale);

    let session = c.session().unwrap();
    assert_eq!(session.meta().name.as_deref(), Some("plain"));
    assert_eq!(
        session.source(),
        Some(PathBuf::from("no_markers.json").as_path())
    );
}

#[test]
fn stale_failure_is_not_reported() {
    let mut c = controller();
    let a = c.begin_load();
    let _b = c.begin_load();

    let outcome = c.finish_load(a, parse("not_json.txt"), None).unwrap();
    assert_eq!(outcome, LoadOutcome::Stale);
    assert!(!c.is_loaded());
}

// ============================================================================
// Slider
// ============================================================================

#[test]
fn scrub_and_commit_select_nearest_segment() {
    let mut c = controller();
    c.load_animation(parse("three_segments.json").unwrap())
        .unwrap();

    // Span is the end of segment 1; segment 1 sits at 0, segment 2 at 20
    let range = c.session().unwrap().slider_range();
    assert_eq!((range.min, range.max), (0.0, 20.0));

    c.scrub_to(15.0);
    let session = c.session().unwrap();
    assert_eq!(session.slider().position, 15.0);
    assert_eq!(session.pending_segment(), Some(2));
    assert_eq!(session.slider().current_segment, 0);
    assert!(session.engine().is_paused());

    c.commit_current().unwrap();
    let session = c.session().unwrap();
    assert_eq!(session.slider().current_segment, 2);
    assert_eq!(session.slider().position, 20.0);
    assert_eq!(active_range(&c), FrameRange::new(20, 40));
    assert!(!c.session().unwrap().engine().is_paused());
}

#[test]
fn commit_below_midpoint_selects_reference_segment() {
    let mut c = controller();
    c.load_animation(parse("three_segments.json").unwrap())
        .unwrap();
    c.select_segment(2).unwrap();

    c.commit(3.0).unwrap();
    assert_eq!(c.session().unwrap().slider().current_segment, 1);
    assert_eq!(active_range(&c), FrameRange::new(10, 20));
}

#[test]
fn operations_before_load_are_ignored() {
    let mut c = controller();
    c.scrub_to(5.0);
    c.commit(5.0).unwrap();
    c.select_segment(1).unwrap();
    c.select_next().unwrap();
    assert!(!c.is_loaded());
}

#[test]
fn next_and_previous_stay_in_selectable_range() {
    let mut c = controller();
    c.load_animation(parse("three_segments.json").unwrap())
        .unwrap();

    c.select_next().unwrap();
    c.select_next().unwrap();
    c.select_next().unwrap();
    assert_eq!(c.session().unwrap().slider().current_segment, 2);

    c.select_previous().unwrap();
    c.select_previous().unwrap();
    c.select_previous().unwrap();
    assert_eq!(c.session().unwrap().slider().current_segment, 1);
}

#[test]
fn selecting_out_of_range_fails_without_changing_playback() {
    let mut c = controller();
    c.load_animation(parse("three_segments.json").unwrap())
        .unwrap();

    let err = c.select_segment(3).unwrap_err();
    assert!(matches!(err, ScrubError::IndexOutOfRange { index: 3, len: 3 }));
    assert_eq!(active_range(&c), FrameRange::new(0, 10));
}

#[test]
fn playhead_loops_inside_selected_segment() {
    let mut c = controller();
    c.load_animation(parse("three_segments.json").unwrap())
        .unwrap();
    c.select_segment(1).unwrap();

    // 30 fps: half a second is 15 frames, past the 10 frame segment
    c.tick(std::time::Duration::from_millis(500));
    let frame = c.session().unwrap().engine().current_frame();
    assert!((10.0..=20.0).contains(&frame), "frame {} left segment", frame);
}

#[test]
fn scrub_preview_parks_on_segment_past_out_point() {
    let description = AnimationDescription::parse_str(
        r#"{"fr":30,"op":30,"w":8,"h":8,"markers":[
            {"tm":0},{"tm":10},{"tm":10},{"tm":20},{"tm":40},{"tm":50}]}"#,
    )
    .unwrap();
    let mut c = controller();
    c.load_animation(description).unwrap();

    c.scrub_to(20.0);
    let session = c.session().unwrap();
    assert_eq!(session.pending_segment(), Some(2));
    assert_eq!(session.engine().current_frame(), 40.0);

    c.commit_current().unwrap();
    assert_eq!(active_range(&c), FrameRange::new(40, 50));
    assert_eq!(c.session().unwrap().engine().current_frame(), 40.0);
}
