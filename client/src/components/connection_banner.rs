//! Webhook connectivity banner with a manual "Test" trigger.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the recurring probe schedule: it starts when the banner mounts and
//! stops scheduling new probes when it unmounts.

#[cfg(test)]
#[path = "connection_banner_test.rs"]
mod connection_banner_test;

use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::state::connection::{ConnectionState, Connectivity};
#[cfg(feature = "hydrate")]
use crate::{net::probe::ConnectivityProber, net::transport::BrowserTransport, session};

/// Banner above the chat window reporting webhook reachability.
#[component]
pub fn ConnectionBanner() -> impl IntoView {
    let connection = expect_context::<RwSignal<ConnectionState>>();
    let config = expect_context::<WidgetConfig>();
    let webhook_url = StoredValue::new(config.webhook_url.clone());

    #[cfg(feature = "hydrate")]
    {
        use std::rc::Rc;
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        let interval = config.probe_interval;
        leptos::task::spawn_local(async move {
            let prober = Rc::new(ConnectivityProber::new(BrowserTransport, webhook_url.get_value()));
            session::run_connectivity_schedule(
                prober,
                connection,
                interval,
                gloo_timers::future::sleep,
                |task| leptos::task::spawn_local(task),
                &alive_task,
            )
            .await;
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    let on_test = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let prober = ConnectivityProber::new(BrowserTransport, webhook_url.get_value());
                session::manual_check(&prober, &connection).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = webhook_url;
        }
    };

    let connectivity = move || connection.with(ConnectionState::connectivity);
    let checking = move || connection.with(ConnectionState::is_checking);

    view! {
        <div class=move || banner_class(connectivity())>
            <span class="connection-banner__text">{move || banner_text(connectivity())}</span>
            <Show when=move || connectivity() != Connectivity::Unknown>
                <button class="connection-banner__test" on:click=on_test disabled=checking>
                    {move || test_button_label(checking())}
                </button>
            </Show>
        </div>
    }
}

fn banner_class(connectivity: Connectivity) -> &'static str {
    match connectivity {
        Connectivity::Unknown => "connection-banner connection-banner--checking",
        Connectivity::Connected => "connection-banner connection-banner--connected",
        Connectivity::Disconnected => "connection-banner connection-banner--disconnected",
    }
}

fn banner_text(connectivity: Connectivity) -> &'static str {
    match connectivity {
        Connectivity::Unknown => "Checking webhook connection...",
        Connectivity::Connected => "Webhook Connected",
        Connectivity::Disconnected => "Webhook Disconnected",
    }
}

fn test_button_label(checking: bool) -> &'static str {
    if checking { "Checking..." } else { "Test" }
}
