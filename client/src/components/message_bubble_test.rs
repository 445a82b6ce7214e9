use super::*;

#[test]
fn row_and_bubble_align_by_sender() {
    assert_eq!(row_class(Sender::User), "message-row message-row--user");
    assert_eq!(row_class(Sender::Bot), "message-row message-row--bot");
    assert!(bubble_class(Sender::User).ends_with("--user"));
    assert!(bubble_class(Sender::Bot).ends_with("--bot"));
}

#[test]
fn status_glyph_distinguishes_sent_from_delivered() {
    assert_eq!(status_glyph(MessageStatus::Sent), "✓");
    assert_eq!(status_glyph(MessageStatus::Delivered), "✓✓");
    assert_eq!(status_glyph(MessageStatus::Read), "✓✓");
}

#[test]
fn status_class_highlights_read() {
    assert!(status_class(MessageStatus::Read).ends_with("--read"));
    assert_ne!(status_class(MessageStatus::Delivered), status_class(MessageStatus::Read));
}
