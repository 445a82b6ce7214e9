//! "Bot is typing" placeholder shown while a send is in flight.

use leptos::prelude::*;

#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="message-row message-row--bot">
            <div class="message-bubble message-bubble--bot typing-indicator">
                <span class="typing-indicator__label">"Bot is typing"</span>
                <span class="typing-indicator__dot"></span>
                <span class="typing-indicator__dot"></span>
                <span class="typing-indicator__dot"></span>
            </div>
        </div>
    }
}
