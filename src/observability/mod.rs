//! Observability subsystem for bookshelf
//!
//! - Lifecycle events, emitted through `tracing` with an `event` field
//! - Subscriber installation for the binary
//!
//! # Usage
//!
//! ```ignore
//! use bookshelf::observability::{log_event, Event, Tracer};
//!
//! Tracer::install("info")?;
//! log_event(Event::ServerStopped);
//! tracing::info!(event = %Event::ServerListening, addr = "0.0.0.0:9000");
//! ```
//!
//! Events that carry data are logged at the call site so each datum stays
//! a named field.

mod events;
mod tracer;

pub use events::Event;
pub use tracer::Tracer;

/// Log a lifecycle event that carries no fields
pub fn log_event(event: Event) {
    if event.is_fatal() {
        tracing::error!(event = %event);
    } else {
        tracing::info!(event = %event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event() {
        // No subscriber installed; must not panic
        log_event(Event::ServerStopped);
        log_event(Event::ServerFailed);
    }
}
