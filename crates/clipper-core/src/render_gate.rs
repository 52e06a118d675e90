//! Render coalescing
//!
//! One page render runs at a time. Requests arriving while busy overwrite a
//! single pending slot, so only the latest one runs after the current render,
//! whether that render succeeded or failed.

/// Outcome of asking the gate for a render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTicket {
    /// Caller owns the render and must report back via `complete`
    Start(u32),
    /// Another render is in flight; the page was parked in the pending slot
    Deferred,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenderGate {
    busy: bool,
    pending: Option<u32>,
}

impl RenderGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn pending(&self) -> Option<u32> {
        self.pending
    }

    pub fn request(&mut self, page: u32) -> RenderTicket {
        if self.busy {
            if let Some(previous) = self.pending.replace(page) {
                tracing::debug!(previous, page, "pending render replaced");
            }
            return RenderTicket::Deferred;
        }

        self.busy = true;
        RenderTicket::Start(page)
    }

    /// Finish the in-flight render, successful or not. Returns the pending
    /// page, which the caller now owns; the gate stays busy in that case.
    pub fn complete(&mut self) -> Option<u32> {
        match self.pending.take() {
            Some(page) => Some(page),
            None => {
                self.busy = false;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_gate_starts_immediately() {
        let mut gate = RenderGate::new();
        assert_eq!(gate.request(4), RenderTicket::Start(4));
        assert!(gate.is_busy());
        assert_eq!(gate.complete(), None);
        assert!(!gate.is_busy());
    }

    #[test]
    fn test_latest_request_wins() {
        let mut gate = RenderGate::new();
        assert_eq!(gate.request(1), RenderTicket::Start(1));
        assert_eq!(gate.request(2), RenderTicket::Deferred);
        assert_eq!(gate.request(3), RenderTicket::Deferred);
        assert_eq!(gate.request(9), RenderTicket::Deferred);
        assert_eq!(gate.pending(), Some(9));

        assert_eq!(gate.complete(), Some(9));
        assert!(gate.is_busy());
        assert_eq!(gate.pending(), None);

        assert_eq!(gate.complete(), None);
        assert!(!gate.is_busy());
    }

    #[test]
    fn test_request_during_pending_render() {
        let mut gate = RenderGate::new();
        gate.request(1);
        gate.request(2);
        assert_eq!(gate.complete(), Some(2));

        // page 2 is rendering now
        assert_eq!(gate.request(5), RenderTicket::Deferred);
        assert_eq!(gate.complete(), Some(5));
        assert_eq!(gate.complete(), None);
    }

    #[test]
    fn test_pending_page_outlives_in_flight_render() {
        let mut gate = RenderGate::new();
        gate.request(1);
        gate.request(2);

        // whatever happened to page 1, page 2 is handed over next
        assert_eq!(gate.complete(), Some(2));
        assert!(gate.is_busy());
        assert_eq!(gate.request(3), RenderTicket::Deferred);
        assert_eq!(gate.complete(), Some(3));
        assert_eq!(gate.complete(), None);
        assert_eq!(gate.request(4), RenderTicket::Start(4));
    }
}
