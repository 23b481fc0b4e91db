//! Scheduling seams between the page logic and whatever drives it.
//!
//! The browser shell implements these over `setTimeout` and
//! `requestAnimationFrame`. The manual hosts below implement them over a
//! virtual clock so lifecycle behaviour (cancellation in particular) can be
//! exercised on the host without a browser.

use std::fmt::Debug;
use std::time::Duration;

/// One-shot deferred callbacks (`setTimeout` / `clearTimeout`).
pub trait TimerHost {
    type Handle: Copy + Eq + Debug;

    /// Schedule a callback `delay` from now. `None` means the host could not
    /// schedule anything and no callback will arrive.
    fn set_timeout(&mut self, delay: Duration) -> Option<Self::Handle>;

    /// Guarantee the callback for `handle` never arrives. Unknown or already
    /// fired handles are ignored.
    fn clear_timeout(&mut self, handle: Self::Handle);
}

/// Display-refresh callbacks (`requestAnimationFrame` / `cancelAnimationFrame`).
pub trait FrameHost {
    type Handle: Copy + Eq + Debug;

    fn request_frame(&mut self) -> Option<Self::Handle>;

    fn cancel_frame(&mut self, handle: Self::Handle);
}

/// Deterministic timer host driven by an explicit millisecond clock.
#[derive(Debug, Default)]
pub struct ManualTimers {
    now_ms: u64,
    next_id: u32,
    pending: Vec<(u64, u32)>,
    refuse: bool,
}

impl ManualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// A host whose `set_timeout` always fails.
    pub fn refusing() -> Self {
        Self {
            refuse: true,
            ..Self::default()
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Move the clock forward to `ms` and return the handles that came due, in
    /// due order (ties broken by scheduling order). Moving backwards is a no-op.
    pub fn advance_to(&mut self, ms: u64) -> Vec<u32> {
        if ms < self.now_ms {
            return Vec::new();
        }
        self.now_ms = ms;
        let mut due: Vec<(u64, u32)> = self
            .pending
            .iter()
            .copied()
            .filter(|(at, _)| *at <= ms)
            .collect();
        self.pending.retain(|(at, _)| *at > ms);
        due.sort_unstable();
        due.into_iter().map(|(_, id)| id).collect()
    }

    pub fn advance_by(&mut self, ms: u64) -> Vec<u32> {
        self.advance_to(self.now_ms + ms)
    }
}

impl TimerHost for ManualTimers {
    type Handle = u32;

    fn set_timeout(&mut self, delay: Duration) -> Option<u32> {
        if self.refuse {
            return None;
        }
        self.next_id += 1;
        let id = self.next_id;
        self.pending.push((self.now_ms + delay.as_millis() as u64, id));
        Some(id)
    }

    fn clear_timeout(&mut self, handle: u32) {
        self.pending.retain(|(_, id)| *id != handle);
    }
}

/// Deterministic frame host. Frames are delivered by calling `take_pending`.
#[derive(Debug, Default)]
pub struct ManualFrames {
    next_id: u32,
    pending: Vec<u32>,
    requested: u64,
    cancelled: u64,
    refuse: bool,
}

impl ManualFrames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refusing() -> Self {
        Self {
            refuse: true,
            ..Self::default()
        }
    }

    /// Simulate the next display refresh: hand out the oldest outstanding
    /// request, if any.
    pub fn take_pending(&mut self) -> Option<u32> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn requested(&self) -> u64 {
        self.requested
    }

    pub fn cancelled(&self) -> u64 {
        self.cancelled
    }
}

impl FrameHost for ManualFrames {
    type Handle = u32;

    fn request_frame(&mut self) -> Option<u32> {
        if self.refuse {
            return None;
        }
        self.next_id += 1;
        self.requested += 1;
        self.pending.push(self.next_id);
        Some(self.next_id)
    }

    fn cancel_frame(&mut self, handle: u32) {
        let before = self.pending.len();
        self.pending.retain(|id| *id != handle);
        if self.pending.len() != before {
            self.cancelled += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_timers_fire_in_due_order_and_respect_clear() {
        let mut t = ManualTimers::new();
        let a = t.set_timeout(Duration::from_millis(300)).unwrap();
        let b = t.set_timeout(Duration::from_millis(100)).unwrap();
        let c = t.set_timeout(Duration::from_millis(200)).unwrap();
        t.clear_timeout(c);
        assert_eq!(t.advance_to(250), vec![b]);
        assert_eq!(t.advance_to(1000), vec![a]);
        assert_eq!(t.pending_count(), 0);
    }

    #[test]
    fn manual_frames_count_requests_and_cancellations() {
        let mut f = ManualFrames::new();
        let h = f.request_frame().unwrap();
        assert_eq!(f.pending_count(), 1);
        f.cancel_frame(h);
        f.cancel_frame(h);
        assert_eq!(f.cancelled(), 1);
        assert_eq!(f.take_pending(), None);
        assert_eq!(f.requested(), 1);
    }

    #[test]
    fn refusing_hosts_schedule_nothing() {
        assert!(ManualTimers::refusing()
            .set_timeout(Duration::from_millis(1))
            .is_none());
        assert!(ManualFrames::refusing().request_frame().is_none());
    }
}
