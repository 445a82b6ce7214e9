//! Async orchestration of the send lifecycle and the connectivity schedule.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components start these futures with `spawn_local`; everything runs on
//! the single browser thread, so state is only touched between awaits.
//! Delays are injected (`gloo_timers` in the browser, tokio's paused clock
//! in tests) so schedules are testable without real time passing.
//!
//! The lifecycle of one user message is:
//!
//! 1. `ChatState::begin_send` (synchronous, called by the component) appends
//!    it as `Sent` and clears the input.
//! 2. [`deliver`] posts it and applies the outcome (`Delivered` + reply, or
//!    apology).
//! 3. [`mark_read_after`] flips a delivered message to `Read` after the
//!    receipt delay.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::net::probe::ConnectivityProber;
use crate::net::transport::WebhookTransport;
use crate::net::webhook::WebhookClient;
use crate::state::chat::{ChatState, PendingSend};
use crate::state::connection::{ConnectionState, Connectivity};
use crate::state::store::StateStore;

/// Result of [`deliver`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SendOutcome {
    pub message_id: String,
    /// True when the webhook accepted the message.
    pub delivered: bool,
}

/// Post a pending message and record the outcome in the chat store.
pub async fn deliver<T, S>(client: &WebhookClient<T>, chat: &S, pending: PendingSend) -> SendOutcome
where
    T: WebhookTransport,
    S: StateStore<ChatState>,
{
    log::debug!("webhook send started: id={}", pending.message_id);
    let result = client.send(&pending.text).await;
    match &result {
        Ok(_) => log::debug!("webhook send delivered: id={}", pending.message_id),
        Err(err) => log::warn!("webhook send failed: id={} error={err}", pending.message_id),
    }

    let delivered = chat
        .modify(|c| c.complete_send(&pending, result))
        .unwrap_or(false);
    SendOutcome { message_id: pending.message_id, delivered }
}

/// Wait `delay`, then mark the message read.
///
/// Returns `false` if the message or the store no longer exists by then.
pub async fn mark_read_after<S, D, F>(chat: &S, message_id: &str, delay: Duration, sleep: D) -> bool
where
    S: StateStore<ChatState>,
    D: FnOnce(Duration) -> F,
    F: Future<Output = ()>,
{
    sleep(delay).await;
    chat.modify(|c| c.mark_read(message_id)).unwrap_or(false)
}

/// Run one probe and record it. Returns `None` if the store is gone.
pub async fn check_connectivity<T, S>(prober: &ConnectivityProber<T>, connection: &S) -> Option<Connectivity>
where
    T: WebhookTransport,
    S: StateStore<ConnectionState>,
{
    connection.modify(ConnectionState::begin_check)?;
    let result = prober.probe().await;
    log::debug!("webhook probe: {result:?}");
    connection.modify(|s| s.finish_check(result))?;
    Some(result)
}

/// Manual "Test" trigger: ignored while another probe is outstanding.
pub async fn manual_check<T, S>(prober: &ConnectivityProber<T>, connection: &S) -> Option<Connectivity>
where
    T: WebhookTransport,
    S: StateStore<ConnectionState>,
{
    if connection.inspect(ConnectionState::is_checking)? {
        return None;
    }
    check_connectivity(prober, connection).await
}

/// A detached probe, handed to the caller's local executor.
pub type ProbeTask = Pin<Box<dyn Future<Output = ()>>>;

/// Start a probe immediately, then once per `interval`, until `alive` is
/// cleared or the store is disposed.
///
/// Each probe runs as its own task through `spawn`, so a slow or stalled
/// request never delays the next tick. In-flight probes are not aborted when
/// the schedule stops.
pub async fn run_connectivity_schedule<T, S, D, F, P>(
    prober: Rc<ConnectivityProber<T>>,
    connection: S,
    interval: Duration,
    sleep: D,
    spawn: P,
    alive: &AtomicBool,
) where
    T: WebhookTransport + 'static,
    S: StateStore<ConnectionState> + Clone + 'static,
    D: Fn(Duration) -> F,
    F: Future<Output = ()>,
    P: Fn(ProbeTask),
{
    while alive.load(Ordering::Relaxed) && connection.inspect(|_| ()).is_some() {
        let prober = Rc::clone(&prober);
        let connection = connection.clone();
        spawn(Box::pin(async move {
            check_connectivity(&prober, &connection).await;
        }));
        sleep(interval).await;
    }
    log::debug!("webhook probe schedule stopped");
}
