//! A single message bubble: text, `HH:MM` time and delivery ticks.

#[cfg(test)]
#[path = "message_bubble_test.rs"]
mod message_bubble_test;

use leptos::prelude::*;

use crate::state::chat::{ChatMessage, MessageStatus, Sender};
use crate::util::time::{format_clock, local_offset};

/// Bubble aligned right for the user and left for the bot.
#[component]
pub fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let time_label = format_clock(message.timestamp, local_offset());
    let status = message.status;

    view! {
        <div class=row_class(message.sender)>
            <div class=bubble_class(message.sender)>
                <p class="message-bubble__text">{message.text}</p>
                <div class="message-bubble__meta">
                    <span class="message-bubble__time">{time_label}</span>
                    {status.map(|status| view! { <span class=status_class(status)>{status_glyph(status)}</span> })}
                </div>
            </div>
        </div>
    }
}

fn row_class(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "message-row message-row--user",
        Sender::Bot => "message-row message-row--bot",
    }
}

fn bubble_class(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "message-bubble message-bubble--user",
        Sender::Bot => "message-bubble message-bubble--bot",
    }
}

/// Single tick once sent, double tick once delivered or read.
fn status_glyph(status: MessageStatus) -> &'static str {
    match status {
        MessageStatus::Sent => "✓",
        MessageStatus::Delivered | MessageStatus::Read => "✓✓",
    }
}

fn status_class(status: MessageStatus) -> &'static str {
    match status {
        MessageStatus::Sent => "message-bubble__status message-bubble__status--sent",
        MessageStatus::Delivered => "message-bubble__status message-bubble__status--delivered",
        MessageStatus::Read => "message-bubble__status message-bubble__status--read",
    }
}
