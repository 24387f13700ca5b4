use super::*;

static LOCAL_COUNT: Local<i32> = Local::with_default("Count", || 7);
static LOCAL_LABEL: Local<String> = Local::required("Label");

#[test]
fn default_is_returned_outside_any_provider() {
    assert_eq!(LOCAL_COUNT.current(), 7);
    assert!(!LOCAL_COUNT.is_provided());
}

#[test]
fn required_local_fails_with_its_name() {
    let err = LOCAL_LABEL.try_current().unwrap_err();
    assert_eq!(err, LocalError::NotProvided { name: "Label" });
    assert_eq!(err.to_string(), "Label not provided");
}

#[test]
#[should_panic(expected = "Label not provided")]
fn current_panics_on_missing_required_local() {
    let _ = LOCAL_LABEL.current();
}

#[test]
fn innermost_provider_wins_and_scope_ends_with_closure() {
    LocalProvider([LOCAL_COUNT.provides(1)], || {
        assert_eq!(LOCAL_COUNT.current(), 1);
        LocalProvider([LOCAL_COUNT.provides(2)], || {
            assert_eq!(LOCAL_COUNT.current(), 2);
        });
        assert_eq!(LOCAL_COUNT.current(), 1);
    });
    assert_eq!(LOCAL_COUNT.current(), 7);
}

#[test]
fn nested_provider_keeps_unrelated_outer_values() {
    LocalProvider(
        [LOCAL_COUNT.provides(3), LOCAL_LABEL.provides("outer".into())],
        || {
            LocalProvider([LOCAL_COUNT.provides(4)], || {
                assert_eq!(LOCAL_LABEL.current(), "outer");
                assert_eq!(LOCAL_COUNT.current(), 4);
            });
        },
    );
}

#[test]
fn provider_returns_content_result() {
    let doubled = LocalProvider([LOCAL_COUNT.provides(21)], || LOCAL_COUNT.current() * 2);
    assert_eq!(doubled, 42);
}

#[test]
fn frame_is_popped_when_content_panics() {
    let result = std::panic::catch_unwind(|| {
        LocalProvider([LOCAL_COUNT.provides(99)], || panic!("boom"));
    });
    assert!(result.is_err());
    assert_eq!(LOCAL_COUNT.current(), 7);
}

#[test]
fn empty_provider_runs_content_without_a_frame() {
    let empty: Vec<ProvidedValue> = Vec::new();
    LocalProvider(empty, || assert_eq!(LOCAL_COUNT.current(), 7));
}
