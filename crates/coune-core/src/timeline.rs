//! One-shot reveal of the navigation bar and background after mount.

use crate::constants::REVEAL_DELAY_MS;
use crate::host::TimerHost;
use std::fmt::Debug;
use std::time::Duration;

/// Downstream visibility. Both flags change in the same assignment, so no
/// observer can see one without the other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    pub navigation_visible: bool,
    pub background_visible: bool,
}

impl RevealState {
    pub const HIDDEN: Self = Self {
        navigation_visible: false,
        background_visible: false,
    };
    pub const REVEALED: Self = Self {
        navigation_visible: true,
        background_visible: true,
    };
}

pub struct Orchestrator<H> {
    delay: Duration,
    pending: Option<H>,
    reveal: RevealState,
}

impl<H: Copy + Eq + Debug> Default for Orchestrator<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Copy + Eq + Debug> Orchestrator<H> {
    pub fn new() -> Self {
        Self::with_delay(Duration::from_millis(REVEAL_DELAY_MS as u64))
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            reveal: RevealState::HIDDEN,
        }
    }

    pub fn reveal(&self) -> RevealState {
        self.reveal
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Arm the reveal timer. At most one timer is ever pending and nothing is
    /// armed once the reveal has happened.
    pub fn start<T>(&mut self, timers: &mut T)
    where
        T: TimerHost<Handle = H>,
    {
        if self.pending.is_some() || self.reveal == RevealState::REVEALED {
            return;
        }
        self.pending = timers.set_timeout(self.delay);
        match self.pending {
            Some(h) => log::debug!("[timeline] reveal armed ({:?}) in {:?}", h, self.delay),
            None => log::warn!("[timeline] could not arm reveal timer"),
        }
    }

    /// Disarm the reveal. Safe to call repeatedly and after firing.
    pub fn cancel<T>(&mut self, timers: &mut T)
    where
        T: TimerHost<Handle = H>,
    {
        if let Some(h) = self.pending.take() {
            timers.clear_timeout(h);
            log::debug!("[timeline] reveal cancelled ({:?})", h);
        }
    }

    /// Timer callback. Only the currently armed handle reveals; anything else
    /// (a stale or cleared timer) is ignored.
    pub fn on_timer(&mut self, handle: H) -> Option<RevealState> {
        if self.pending != Some(handle) {
            log::debug!("[timeline] ignoring stale timer {:?}", handle);
            return None;
        }
        self.pending = None;
        self.reveal = RevealState::REVEALED;
        log::info!("[timeline] reveal: navigation + background visible");
        Some(self.reveal)
    }
}
