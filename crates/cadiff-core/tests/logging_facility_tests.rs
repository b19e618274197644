#![allow(clippy::unwrap_used, clippy::expect_used)]

use cadiff_core::core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_DURATION_MS, FIELD_ERR_CODE, FIELD_ERR_KIND,
};
use cadiff_core::errors::{CadiffError, ExError, ExErrorKind};
use cadiff_core::logging_facility::test_capture::init_test_capture;
use cadiff_core::{log_op_end, log_op_error, log_op_start};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    let start_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_START))
        .collect();
    assert!(
        !start_events.is_empty(),
        "Should have captured at least one start event"
    );
}

#[test]
fn test_log_op_end_macro_records_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .collect();
    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(
        end_events[0].fields.get(FIELD_DURATION_MS),
        Some(&"42".to_string())
    );
}

#[test]
fn test_log_op_error_includes_kind_and_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = CadiffError::SourceCount {
        count: 1,
        paths: vec!["a.json".to_string()],
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let events = capture.events_for_op(op_name);
    let error_event = events
        .iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .expect("Should have error event");
    assert_eq!(
        error_event.fields.get(FIELD_ERR_CODE),
        Some(&"ERR_SOURCE_COUNT".to_string())
    );
    assert_eq!(
        error_event.fields.get(FIELD_ERR_KIND),
        Some(&format!("{:?}", ExErrorKind::SourceCount))
    );
}

#[test]
fn test_single_start_and_end_per_operation() {
    let capture = init_test_capture();
    let op_name = "test_boundary_unique_4";

    log_op_start!(op_name, source_count = 2);
    log_op_end!(op_name, duration_ms = 7, pairwise_changes = 3);

    let events = capture.events_for_op(op_name);
    let starts = events.iter().filter(|e| e.is(op_name, EVENT_START)).count();
    let ends = events.iter().filter(|e| e.is(op_name, EVENT_END)).count();
    assert_eq!(starts, 1);
    assert_eq!(ends, 1);
    assert_eq!(
        events[1].fields.get("pairwise_changes"),
        Some(&"3".to_string())
    );
}

#[test]
fn test_log_macros_with_string_fields() {
    let capture = init_test_capture();
    let op_name = "test_log_macros_fields_unique_5";

    log_op_start!(op_name, old_path = "a.json", new_path = "b.json");

    let start_event = capture
        .events_for_op(op_name)
        .into_iter()
        .next()
        .expect("Should have start event");
    assert_eq!(start_event.fields.get("old_path"), Some(&"a.json".to_string()));
    assert_eq!(start_event.fields.get("new_path"), Some(&"b.json".to_string()));
}

#[test]
fn test_error_event_from_ex_error() {
    let capture = init_test_capture();
    let op_name = "test_error_event_unique_6";

    let err = ExError::new(ExErrorKind::InvalidDocument).with_path("bad.json");
    log_op_error!(op_name, err, duration_ms = 1);

    capture.assert_event_exists(op_name, EVENT_END_ERROR);
}

#[test]
#[should_panic(expected = "Expected event")]
fn test_capture_assert_event_exists_fails() {
    let capture = init_test_capture();
    capture.assert_event_exists("nonexistent_op_truly_unique_999", EVENT_START);
}

#[test]
fn test_capture_count_events() {
    let capture = init_test_capture();
    let op1_name = "test_count_events_op1_unique_7";
    let op2_name = "test_count_events_op2_unique_7";

    log_op_start!(op1_name);
    log_op_start!(op2_name);
    log_op_end!(op1_name, duration_ms = 10);

    let mine = |e: &cadiff_core::logging_facility::CapturedEvent| {
        e.op.as_deref() == Some(op1_name) || e.op.as_deref() == Some(op2_name)
    };
    let start_count = capture.count_events(|e| mine(e) && e.event.as_deref() == Some(EVENT_START));
    let end_count = capture.count_events(|e| mine(e) && e.event.as_deref() == Some(EVENT_END));
    assert_eq!(start_count, 2);
    assert_eq!(end_count, 1);
}
