//! Lifecycle events
//!
//! Events are explicit and typed. Per-request activity is logged by the
//! service and the HTTP trace layer, not here.

use std::fmt;

/// Observable lifecycle events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration loaded
    ConfigLoaded,
    /// Store preloaded with seed books
    StoreSeeded,
    /// Server is about to bind
    ServerStarting,
    /// Listener bound, accepting requests
    ServerListening,
    /// Graceful shutdown finished
    ServerStopped,
    /// Server could not start or crashed
    ServerFailed,
}

impl Event {
    /// Returns the event name
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::StoreSeeded => "STORE_SEEDED",
            Event::ServerStarting => "SERVER_STARTING",
            Event::ServerListening => "SERVER_LISTENING",
            Event::ServerStopped => "SERVER_STOPPED",
            Event::ServerFailed => "SERVER_FAILED",
        }
    }

    /// Whether the event ends the process
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::ServerFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
