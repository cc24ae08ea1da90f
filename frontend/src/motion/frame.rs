//! Coalesces raw scroll, resize and pointer events into at most one pending
//! animation frame.

#[derive(Debug, Default, Clone)]
pub struct FrameGate {
    pending: bool,
    coalesced: u64,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for a frame. Returns `true` only when the caller should actually
    /// schedule one; while a frame is pending further requests fold into it.
    pub fn request(&mut self) -> bool {
        if self.pending {
            self.coalesced += 1;
            false
        } else {
            self.pending = true;
            true
        }
    }

    /// The scheduled frame is running; the next request schedules anew.
    pub fn begin_frame(&mut self) {
        self.pending = false;
    }

    /// A scheduled frame was cancelled before it ran.
    pub fn cancel(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Requests absorbed by an already pending frame.
    pub fn coalesced(&self) -> u64 {
        self.coalesced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_of_events_schedules_one_frame() {
        let mut gate = FrameGate::new();
        let scheduled = (0..50).filter(|_| gate.request()).count();
        assert_eq!(scheduled, 1);
        assert_eq!(gate.coalesced(), 49);
        assert!(gate.is_pending());
    }

    #[test]
    fn next_event_after_frame_schedules_again() {
        let mut gate = FrameGate::new();
        assert!(gate.request());
        gate.begin_frame();
        assert!(!gate.is_pending());
        assert!(gate.request());
        gate.cancel();
        assert!(gate.request());
    }
}
