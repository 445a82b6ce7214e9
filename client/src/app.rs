//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::{chat_window::ChatWindow, connection_banner::ConnectionBanner};
use crate::config::WidgetConfig;
use crate::state::chat::{ChatState, GREETING};
use crate::state::connection::ConnectionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the conversation, connectivity and configuration contexts.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let chat = RwSignal::new(ChatState::with_greeting(GREETING));
    let connection = RwSignal::new(ConnectionState::default());

    provide_context(chat);
    provide_context(connection);
    provide_context(WidgetConfig::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/chat-widget.css"/>
        <Title text="Webhook Chat"/>

        <main class="chat-app">
            <ConnectionBanner/>
            <ChatWindow/>
        </main>
    }
}
