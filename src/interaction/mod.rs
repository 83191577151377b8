use serde::{Deserialize, Serialize};

/// Pending drag gesture flags for one chart instance.
///
/// The pointer dispatcher raises a flag when a gesture completes over this
/// chart; the drag handler consumes it. Consuming always clears the flag, so a
/// rejected or failed gesture can never leave the session stuck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DragSession {
    drag_end_requested: bool,
    drop_requested: bool,
}

impl DragSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A shape owned by this chart was released outside of it.
    pub fn request_drag_end(&mut self) {
        self.drag_end_requested = true;
    }

    /// A shape was released on top of this chart.
    pub fn request_drop(&mut self) {
        self.drop_requested = true;
    }

    #[must_use]
    pub fn drag_end_requested(self) -> bool {
        self.drag_end_requested
    }

    #[must_use]
    pub fn drop_requested(self) -> bool {
        self.drop_requested
    }

    /// Returns whether a drag end was pending and clears it.
    pub fn take_drag_end(&mut self) -> bool {
        std::mem::take(&mut self.drag_end_requested)
    }

    /// Returns whether a drop was pending and clears it.
    pub fn take_drop(&mut self) -> bool {
        std::mem::take(&mut self.drop_requested)
    }

    #[must_use]
    pub fn is_idle(self) -> bool {
        !self.drag_end_requested && !self.drop_requested
    }
}

/// Outcome flags shared with the dispatcher across all charts handling one gesture.
///
/// Handlers only ever raise flags, never lower them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DragStatus {
    pub drag_out: bool,
    pub drag_in: bool,
    pub need_refresh: bool,
}
