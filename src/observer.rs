//! Skip-event observation.
//!
//! Registration drops keys that normalize to empty or reserved identifiers.
//! Each drop is reported to a [`SkipObserver`] as a structured [`SkipEvent`]
//! so callers can surface or assert on them without parsing rendered output.
//! Observation never influences generation.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::warn;

use crate::types::SkipEvent;

/// Receives one event per key dropped during registration.
pub trait SkipObserver {
    fn key_skipped(&mut self, event: &SkipEvent);
}

/// Forwards skip events to `tracing` at warn level. The default observer.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl SkipObserver for LogObserver {
    fn key_skipped(&mut self, event: &SkipEvent) {
        warn!(
            raw_key = %event.raw_key,
            transformed_key = %event.transformed_key,
            "{}",
            event
        );
    }
}

/// Records skip events in a shared buffer, for inspection after
/// registration.
///
/// Clones share the same buffer, so a clone can be handed to
/// [`crate::ResourcesBuilder::with_observer`] while the original stays
/// available for assertions.
#[derive(Debug, Clone, Default)]
pub struct MemoryObserver {
    events: Arc<Mutex<Vec<SkipEvent>>>,
}

impl MemoryObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded events, in registration order.
    pub fn events(&self) -> Vec<SkipEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_empty(&self) -> bool {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl SkipObserver for MemoryObserver {
    fn key_skipped(&mut self, event: &SkipEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}
