// tests/support/mocks/events.rs
use inkpot::application::ports::observability::{EventSink, ServiceEvent};
use std::sync::Mutex;

/// Records every emitted event for later assertions.
#[derive(Default)]
pub struct CapturingEvents {
    events: Mutex<Vec<ServiceEvent>>,
}

impl CapturingEvents {
    pub fn events(&self) -> Vec<ServiceEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn liked_lookup_failures(&self) -> usize {
        self.events()
            .iter()
            .filter(|event| matches!(event, ServiceEvent::LikedLookupFailed { .. }))
            .count()
    }
}

impl EventSink for CapturingEvents {
    fn emit(&self, event: ServiceEvent) {
        self.events.lock().unwrap().push(event);
    }
}
