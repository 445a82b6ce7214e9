//! Webhook connectivity as seen by the prober.

#[cfg(test)]
#[path = "connection_test.rs"]
mod connection_test;

/// Reachability of the webhook endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Connectivity {
    /// No probe has resolved yet.
    #[default]
    Unknown,
    Connected,
    Disconnected,
}

/// Connectivity banner state.
///
/// Probes may overlap (a scheduled tick can land while a manual check is
/// still out), so outstanding checks are counted rather than flagged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConnectionState {
    connectivity: Connectivity,
    in_flight: u32,
}

impl ConnectionState {
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// True while at least one probe is outstanding.
    pub fn is_checking(&self) -> bool {
        self.in_flight > 0
    }

    pub fn begin_check(&mut self) {
        self.in_flight += 1;
    }

    /// Record a probe result. Once known, connectivity never returns to `Unknown`.
    pub fn finish_check(&mut self, result: Connectivity) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if result != Connectivity::Unknown {
            self.connectivity = result;
        }
    }
}
