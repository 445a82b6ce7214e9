use super::*;
use crate::net::transport::TransportError;

// =============================================================
// Helpers
// =============================================================

fn state_with_draft(draft: &str) -> ChatState {
    ChatState { draft: draft.to_owned(), ..ChatState::default() }
}

fn reply(message: Option<&str>, response: Option<&str>) -> WebhookReply {
    WebhookReply { message: message.map(str::to_owned), response: response.map(str::to_owned), error: None }
}

fn status_of(state: &ChatState, id: &str) -> Option<MessageStatus> {
    state.message(id).and_then(|m| m.status)
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn chat_state_default_is_idle_and_empty() {
    let state = ChatState::default();
    assert!(state.messages().is_empty());
    assert!(!state.is_sending());
    assert!(state.error().is_none());
}

#[test]
fn with_greeting_starts_with_one_bot_message() {
    let state = ChatState::with_greeting(GREETING);
    assert_eq!(state.messages().len(), 1);
    let greeting = &state.messages()[0];
    assert_eq!(greeting.sender, Sender::Bot);
    assert_eq!(greeting.text, GREETING);
    assert!(greeting.status.is_none());
}

#[test]
fn message_status_orders_by_progress() {
    assert!(MessageStatus::Sent < MessageStatus::Delivered);
    assert!(MessageStatus::Delivered < MessageStatus::Read);
}

// =============================================================
// begin_send
// =============================================================

#[test]
fn begin_send_appends_trimmed_user_message_and_clears_draft() {
    let mut state = state_with_draft("  hello bot \n");
    let pending = state.begin_send().unwrap();

    assert_eq!(pending.text, "hello bot");
    assert_eq!(state.messages().len(), 1);
    let message = &state.messages()[0];
    assert_eq!(message.id, pending.message_id);
    assert_eq!(message.text, "hello bot");
    assert_eq!(message.sender, Sender::User);
    assert_eq!(message.status, Some(MessageStatus::Sent));
    assert!(state.draft.is_empty());
    assert!(state.is_sending());
}

#[test]
fn begin_send_ignores_empty_and_whitespace_drafts() {
    for draft in ["", "   ", "\n\t "] {
        let mut state = state_with_draft(draft);
        assert!(state.begin_send().is_none());
        assert!(state.messages().is_empty());
        assert!(!state.is_sending());
        assert_eq!(state.draft, draft);
    }
}

#[test]
fn begin_send_refuses_overlapping_sends() {
    let mut state = state_with_draft("first");
    state.begin_send().unwrap();
    state.draft = "second".to_owned();

    assert!(!state.can_submit());
    assert!(state.begin_send().is_none());
    assert_eq!(state.messages().len(), 1);
    assert_eq!(state.draft, "second");
}

#[test]
fn begin_send_clears_previous_error() {
    let mut state = state_with_draft("one");
    let pending = state.begin_send().unwrap();
    state.complete_send(&pending, Err(WebhookError::Status(500)));
    assert!(state.error().is_some());

    state.draft = "two".to_owned();
    state.begin_send().unwrap();
    assert!(state.error().is_none());
}

// =============================================================
// complete_send
// =============================================================

#[test]
fn complete_send_success_delivers_and_appends_reply() {
    let mut state = state_with_draft("hello");
    let pending = state.begin_send().unwrap();

    assert!(state.complete_send(&pending, Ok(reply(Some("Hi there"), None))));
    assert!(!state.is_sending());
    assert_eq!(status_of(&state, &pending.message_id), Some(MessageStatus::Delivered));
    assert_eq!(state.messages().len(), 2);
    let bot = &state.messages()[1];
    assert_eq!(bot.sender, Sender::Bot);
    assert_eq!(bot.text, "Hi there");
    assert!(bot.status.is_none());
}

#[test]
fn complete_send_falls_back_to_response_then_literal() {
    let mut state = state_with_draft("a");
    let pending = state.begin_send().unwrap();
    state.complete_send(&pending, Ok(reply(None, Some("from response"))));
    assert_eq!(state.messages().last().unwrap().text, "from response");

    state.draft = "b".to_owned();
    let pending = state.begin_send().unwrap();
    state.complete_send(&pending, Ok(WebhookReply::default()));
    assert_eq!(state.messages().last().unwrap().text, "Message processed successfully!");
}

#[test]
fn complete_send_failure_appends_apology_and_keeps_sent() {
    let mut state = state_with_draft("hello");
    let pending = state.begin_send().unwrap();

    let err = WebhookError::Transport(TransportError::Network("Failed to fetch".into()));
    assert!(!state.complete_send(&pending, Err(err)));

    assert!(!state.is_sending());
    assert_eq!(status_of(&state, &pending.message_id), Some(MessageStatus::Sent));
    assert_eq!(state.messages().len(), 2);
    assert_eq!(state.messages()[1].text, APOLOGY);
    assert_eq!(state.messages()[1].sender, Sender::Bot);
    assert_eq!(state.error(), Some("Failed to fetch"));
}

#[test]
fn complete_send_status_error_text_is_kept() {
    let mut state = state_with_draft("hello");
    let pending = state.begin_send().unwrap();
    state.complete_send(&pending, Err(WebhookError::Status(502)));
    assert_eq!(state.error(), Some("HTTP error! status: 502"));
}

// =============================================================
// mark_read / status monotonicity
// =============================================================

#[test]
fn mark_read_advances_delivered_message() {
    let mut state = state_with_draft("hello");
    let pending = state.begin_send().unwrap();
    state.complete_send(&pending, Ok(WebhookReply::default()));

    assert!(state.mark_read(&pending.message_id));
    assert_eq!(status_of(&state, &pending.message_id), Some(MessageStatus::Read));
}

#[test]
fn status_never_regresses() {
    let mut state = state_with_draft("hello");
    let pending = state.begin_send().unwrap();
    state.complete_send(&pending, Ok(WebhookReply::default()));
    state.mark_read(&pending.message_id);

    assert!(state.advance_status(&pending.message_id, MessageStatus::Delivered));
    assert!(state.advance_status(&pending.message_id, MessageStatus::Sent));
    assert_eq!(status_of(&state, &pending.message_id), Some(MessageStatus::Read));
}

#[test]
fn mark_read_unknown_or_bot_message_is_noop() {
    let mut state = ChatState::with_greeting(GREETING);
    let before = state.clone();
    let greeting_id = state.messages()[0].id.clone();

    assert!(!state.mark_read("missing"));
    assert!(!state.mark_read(&greeting_id));
    assert_eq!(state, before);
}

// =============================================================
// Append-only thread
// =============================================================

#[test]
fn thread_is_append_only_across_mixed_outcomes() {
    let mut state = ChatState::with_greeting(GREETING);
    let mut seen: Vec<String> = state.messages().iter().map(|m| m.id.clone()).collect();

    let outcomes: Vec<Result<WebhookReply, WebhookError>> = vec![
        Ok(reply(Some("one"), None)),
        Err(WebhookError::Status(500)),
        Ok(WebhookReply::default()),
        Err(WebhookError::Parse("eof".into())),
    ];
    for (i, outcome) in outcomes.into_iter().enumerate() {
        state.draft = format!("msg {i}");
        let pending = state.begin_send().unwrap();
        state.complete_send(&pending, outcome);
        state.mark_read(&pending.message_id);

        let ids: Vec<String> = state.messages().iter().map(|m| m.id.clone()).collect();
        assert_eq!(&ids[..seen.len()], &seen[..]);
        assert_eq!(ids.len(), seen.len() + 2);
        seen = ids;
    }
    assert_eq!(state.messages().len(), 9);
}
