use xr_stage::{HoverEdge, InstanceId};

/// A hover edge reported against an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverEvent {
    pub instance: InstanceId,
    pub edge: HoverEdge,
}

/// Pending hover events.
/// The viewer side pushes events; the runner drains them each tick.
pub struct HoverQueue {
    events: Vec<HoverEvent>,
}

impl HoverQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: HoverEvent) {
        self.events.push(event);
    }

    /// Drain all pending events in arrival order.
    pub fn drain(&mut self) -> Vec<HoverEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for HoverQueue {
    fn default() -> Self {
        Self::new()
    }
}
