//! Chain matching across native and augmented wrapping.

use std::sync::LazyLock;
use xerror::{NativeError, XError, chain, errorf, xerrorf};

static NATIVE_ERROR: LazyLock<NativeError> =
    LazyLock::new(|| NativeError::new("native error type"));
static CUSTOM_ERROR: LazyLock<XError> = LazyLock::new(|| XError::new("custom error type"));
static DEEP_CHILD_ERROR: LazyLock<XError> = LazyLock::new(|| XError::new("deep error type"));

#[test]
fn native_error_wrapped_by_native_error() {
    let parent = errorf!("parent error: %w", &*NATIVE_ERROR);
    assert!(chain::is(&parent, &*NATIVE_ERROR));
}

#[test]
fn custom_error_wrapped_by_native_error() {
    let parent = errorf!("parent error: %w", &*CUSTOM_ERROR);
    assert!(chain::is(&parent, &*CUSTOM_ERROR));
}

#[test]
fn custom_error_with_params_wrapped_by_native_error() {
    let custom = XError::new("custom error with params");
    let parent = errorf!("parent error: %w", custom.with_param("music", "heavy-metal"));
    assert!(chain::is(&parent, &custom));
}

#[test]
fn custom_error_with_stack_trace_wrapped_by_native_error() {
    let custom = XError::new("custom error with trace");
    let parent = errorf!("parent error: %w", custom.with_stack_trace());
    assert!(chain::is(&parent, &custom));
}

#[test]
fn deeply_buried_error_wrapped_by_native_error() {
    let parent = errorf!(
        "parent error: %w",
        xerrorf!(
            "sub-1 parent error: %w",
            xerrorf!("sub-2 parent error: %w", &*DEEP_CHILD_ERROR)
        )
    );
    assert!(chain::is(&parent, &*DEEP_CHILD_ERROR));
}

#[test]
fn custom_error_with_params_wrapped_in_custom_error() {
    let custom = XError::new("custom");
    let parent = xerrorf!("parent error: %w", custom.with_param("music", "heavy-metal"));
    assert!(chain::is(&parent, &custom));
    assert!(parent.is(&custom));
}

#[test]
fn custom_error_wrapped_in_custom_error_with_params() {
    let parent = xerrorf!("parent error: %w", &*CUSTOM_ERROR).with_param("holiday", "spain");
    assert!(chain::is(&parent, &*CUSTOM_ERROR));
    assert!(parent.is(&*CUSTOM_ERROR));
}

#[test]
fn custom_error_wrapped_in_custom_error_with_stack_trace() {
    let parent = xerrorf!("parent error: %w", &*CUSTOM_ERROR).with_stack_trace();
    assert!(chain::is(&parent, &*CUSTOM_ERROR));
}

#[test]
fn deeply_buried_error_wrapped_in_custom_errors() {
    let parent = xerrorf!(
        "parent error: %w",
        xerrorf!(
            "sub-1 parent error: %w",
            xerrorf!("sub-2 parent error: %w", &*DEEP_CHILD_ERROR)
        )
    );
    assert!(chain::is(&parent, &*DEEP_CHILD_ERROR));
    assert!(parent.is(&*DEEP_CHILD_ERROR));
}

#[test]
fn native_error_wrapped_in_custom_error() {
    let parent = xerrorf!("native error right?: %w", &*NATIVE_ERROR);
    assert!(parent.is(&*NATIVE_ERROR));
    assert!(parent.wrapped().is_none());
}

#[test]
fn custom_error_with_no_wrapped_error_does_not_match() {
    let parent = xerrorf!("no wrapped errors here");
    assert!(!chain::is(&parent, &*CUSTOM_ERROR));
    assert!(!parent.is(&*CUSTOM_ERROR));
}

#[test]
fn custom_error_with_different_wrapped_error_does_not_match() {
    let parent = xerrorf!("native error right?: %w", &*NATIVE_ERROR);
    assert!(!chain::is(&parent, &*CUSTOM_ERROR));
    assert!(!parent.is(&*CUSTOM_ERROR));
}

#[test]
fn equal_text_is_not_identity() {
    let parent = xerrorf!("parent error: %w", XError::new("custom error type"));
    assert!(!chain::is(&parent, &*CUSTOM_ERROR));
}

#[test]
fn arbitrary_std_error_is_linked_as_source() {
    let parent = xerrorf!(
        "reading config: %w",
        xerror::Arg::error(std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"))
    );
    let io = chain::find::<std::io::Error>(&parent);
    assert_eq!(io.map(std::io::Error::kind), Some(std::io::ErrorKind::NotFound));
    assert_eq!(parent.to_string(), "reading config: no such file");
}

#[test]
fn mutation_after_wrapping_is_visible_through_the_chain() {
    let custom = XError::new("shared");
    let parent = errorf!("parent error: %w", &custom);
    custom.as_kind("late");

    let found = chain::find::<XError>(&parent).map(XError::kind);
    assert_eq!(found.as_ref().map(|k| k.as_str()), Some("late"));
}
