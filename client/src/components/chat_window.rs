//! Chat window: header, message thread, typing indicator and input row.
//!
//! SYSTEM CONTEXT
//! ==============
//! Drives the send lifecycle. `begin_send` runs synchronously in the event
//! handler so the user bubble appears and the input clears before any
//! network work starts; the round trip and read receipt run in a spawned
//! task.

#[cfg(test)]
#[path = "chat_window_test.rs"]
mod chat_window_test;

use leptos::prelude::*;

use crate::components::message_bubble::MessageBubble;
use crate::components::typing_indicator::TypingIndicator;
use crate::config::WidgetConfig;
use crate::state::chat::ChatState;
#[cfg(feature = "hydrate")]
use crate::{net::transport::BrowserTransport, net::webhook::WebhookClient, session};

/// Conversation thread with the message input.
#[component]
pub fn ChatWindow() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let config = expect_context::<WidgetConfig>();
    let webhook_url = StoredValue::new(config.webhook_url.clone());
    let read_delay = config.read_receipt_delay;

    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let messages = Memo::new(move |_| chat.with(|c| c.messages().to_vec()));
    let sending = Memo::new(move |_| chat.with(ChatState::is_sending));
    let error = Memo::new(move |_| chat.with(|c| c.error().map(str::to_owned)));

    Effect::new(move || {
        messages.track();
        sending.track();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let Some(pending) = chat.try_update(ChatState::begin_send).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let client = WebhookClient::new(BrowserTransport, webhook_url.get_value());
                let outcome = session::deliver(&client, &chat, pending).await;
                // Let the view drop `disabled` before focusing.
                gloo_timers::future::sleep(std::time::Duration::ZERO).await;
                if let Some(input_el) = input_ref.get_untracked() {
                    let _ = input_el.focus();
                }
                if outcome.delivered {
                    session::mark_read_after(&chat, &outcome.message_id, read_delay, gloo_timers::future::sleep)
                        .await;
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (pending, webhook_url, read_delay);
        }
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_commit_key(&ev.key(), ev.shift_key()) {
            ev.prevent_default();
            do_send();
        }
    };

    let can_submit = move || chat.with(ChatState::can_submit);

    view! {
        <div class="chat-window">
            <header class="chat-window__header">
                <div class="chat-window__avatar">"🤖"</div>
                <div class="chat-window__title">
                    <h1>"Webhook Bot"</h1>
                    <p>"Online • Connected to your webhook"</p>
                </div>
            </header>

            <div class="chat-window__messages" node_ref=messages_ref>
                <For
                    each=move || messages.get()
                    key=|message| (message.id.clone(), message.status)
                    children=|message| view! { <MessageBubble message=message/> }
                />
                <Show when=move || sending.get()>
                    <TypingIndicator/>
                </Show>
            </div>

            <div class="chat-window__input-row">
                <input
                    class="chat-window__input"
                    type="text"
                    placeholder="Type a message..."
                    node_ref=input_ref
                    disabled=move || sending.get()
                    prop:value=move || chat.with(|c| c.draft.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        chat.update(|c| c.draft = value);
                    }
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary chat-window__send" on:click=on_click disabled=move || !can_submit()>
                    "Send"
                </button>
            </div>

            {move || error.get().map(|text| view! { <p class="chat-window__error">{text}</p> })}
        </div>
    }
}

/// Enter submits; Shift+Enter does not.
fn is_commit_key(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}
