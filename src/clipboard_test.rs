use super::*;

#[test]
fn feedback_starts_idle_with_original_label() {
    let feedback = CopyFeedback::default();
    assert_eq!(feedback.state(), CopyState::Idle);
    assert_eq!(feedback.label("Copied!", "Copy failed"), None);
}

#[test]
fn successful_copy_shows_copied_until_reset() {
    let mut feedback = CopyFeedback::default();
    let generation = feedback.finish(true);
    assert_eq!(feedback.label("Copied!", "Copy failed"), Some("Copied!"));
    assert!(feedback.reset(generation));
    assert_eq!(feedback.state(), CopyState::Idle);
}

#[test]
fn failed_copy_shows_failure_label() {
    let mut feedback = CopyFeedback::default();
    feedback.finish(false);
    assert_eq!(feedback.label("Copied!", "Copy failed"), Some("Copy failed"));
}

#[test]
fn stale_timer_does_not_reset_newer_copy() {
    let mut feedback = CopyFeedback::default();
    let first = feedback.finish(true);
    let second = feedback.finish(true);
    assert!(!feedback.reset(first));
    assert_eq!(feedback.state(), CopyState::Copied);
    assert!(feedback.reset(second));
}

#[test]
fn reset_when_idle_is_noop() {
    let mut feedback = CopyFeedback::default();
    let generation = feedback.finish(true);
    assert!(feedback.reset(generation));
    assert!(!feedback.reset(generation));
}

// =============================================================
// Copy source
// =============================================================

#[test]
fn copy_text_prefers_literal_value() {
    let text = copy_text(Some("cargo add site-client".into()), || panic!("target queried"), || None);
    assert_eq!(text.as_deref(), Some("cargo add site-client"));
}

#[test]
fn copy_text_falls_back_to_target_element() {
    let text = copy_text(Some(String::new()), || Some("fn main() {}".into()), || panic!("canonical queried"));
    assert_eq!(text.as_deref(), Some("fn main() {}"));
}

#[test]
fn copy_text_falls_back_to_canonical_url() {
    let text = copy_text(None, || None, || Some("https://example.com/en/post/".into()));
    assert_eq!(text.as_deref(), Some("https://example.com/en/post/"));
}

#[test]
fn copy_text_without_any_source_is_none() {
    assert_eq!(copy_text(None, || Some("  ".into()), || None), None);
}
