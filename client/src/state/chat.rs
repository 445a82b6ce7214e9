//! Conversation state and the send lifecycle transitions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The thread is append-only. After creation the only mutable part of a
//! message is its delivery status, which only ever moves forward
//! (`Sent < Delivered < Read`). Bot messages carry no status.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use time::OffsetDateTime;

use crate::net::types::WebhookReply;
use crate::net::webhook::WebhookError;
use crate::util::{ids, time as clock};

/// Opening bot message shown before the first exchange.
pub const GREETING: &str =
    "Hello! I'm your webhook bot. Send me a message and I'll process it through the webhook!";

/// Bot text when a successful reply carries neither `message` nor `response`.
pub const FALLBACK_REPLY: &str = "Message processed successfully!";

/// Bot text appended when a send fails.
pub const APOLOGY: &str = "Sorry, I couldn't process your message. Please check your connection and try again.";

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// Delivery status of a user message, ordered by progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MessageStatus {
    Sent,
    Delivered,
    Read,
}

/// A single chat message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: OffsetDateTime,
    /// `Some` for user messages only.
    pub status: Option<MessageStatus>,
}

impl ChatMessage {
    /// New user message in the `Sent` state.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: ids::generate_message_id(),
            text: text.into(),
            sender: Sender::User,
            timestamp: clock::now(),
            status: Some(MessageStatus::Sent),
        }
    }

    /// New bot message.
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            id: ids::generate_message_id(),
            text: text.into(),
            sender: Sender::Bot,
            timestamp: clock::now(),
            status: None,
        }
    }
}

/// A user message that has been appended and is awaiting its round trip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSend {
    pub message_id: String,
    /// Trimmed text to post.
    pub text: String,
}

/// State for the chat window.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatState {
    messages: Vec<ChatMessage>,
    /// Current contents of the input box.
    pub draft: String,
    sending: bool,
    error: Option<String>,
}

impl ChatState {
    /// Empty conversation opened by a single bot greeting.
    pub fn with_greeting(text: impl Into<String>) -> Self {
        Self { messages: vec![ChatMessage::bot(text)], ..Self::default() }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn message(&self, id: &str) -> Option<&ChatMessage> {
        self.messages.iter().find(|m| m.id == id)
    }

    /// True while a round trip is outstanding.
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Error text of the most recent failed send, cleared when the next starts.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Guard shared by the submit button and the Enter key.
    pub fn can_submit(&self) -> bool {
        !self.sending && !self.draft.trim().is_empty()
    }

    /// Start a send from the current draft.
    ///
    /// Appends the user message as `Sent`, clears the draft and raises the
    /// busy flag. Returns `None`, changing nothing, when the trimmed draft is
    /// empty or another send is still in flight.
    pub fn begin_send(&mut self) -> Option<PendingSend> {
        if !self.can_submit() {
            return None;
        }
        let text = self.draft.trim().to_owned();
        let message = ChatMessage::user(text.clone());
        let pending = PendingSend { message_id: message.id.clone(), text };

        self.messages.push(message);
        self.draft.clear();
        self.sending = true;
        self.error = None;
        Some(pending)
    }

    /// Apply the outcome of a round trip started by [`Self::begin_send`].
    ///
    /// On success the user message becomes `Delivered` and the reply text is
    /// appended; on failure the apology is appended, the user message stays
    /// `Sent` and the error text is kept for display. Returns `true` when the
    /// message was delivered and should later be marked read.
    pub fn complete_send(&mut self, pending: &PendingSend, result: Result<WebhookReply, WebhookError>) -> bool {
        self.sending = false;
        match result {
            Ok(reply) => {
                let delivered = self.advance_status(&pending.message_id, MessageStatus::Delivered);
                self.messages.push(ChatMessage::bot(reply.text_or(FALLBACK_REPLY)));
                delivered
            }
            Err(err) => {
                self.error = Some(err.to_string());
                self.messages.push(ChatMessage::bot(APOLOGY));
                false
            }
        }
    }

    /// Mark a delivered message as read. Returns `false` if it is gone.
    pub fn mark_read(&mut self, message_id: &str) -> bool {
        self.advance_status(message_id, MessageStatus::Read)
    }

    /// Move a user message's status forward; never backwards.
    fn advance_status(&mut self, message_id: &str, next: MessageStatus) -> bool {
        let Some(message) = self.messages.iter_mut().find(|m| m.id == message_id) else {
            return false;
        };
        match message.status {
            Some(current) if current < next => {
                message.status = Some(next);
                true
            }
            Some(_) => true,
            None => false,
        }
    }
}
