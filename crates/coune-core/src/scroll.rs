//! Scroll-driven page state: whether the page is scrolled at all, whether a
//! scroll is in progress (debounced), and the glitch intensity it drives.

use crate::constants::{GLITCH_FULL_SCROLL_PX, SCROLL_STOP_DELAY_MS};
use crate::host::TimerHost;
use std::fmt::Debug;
use std::time::Duration;

/// `scroll_y` mapped onto `[0, 1]` over the first 100 px.
#[inline]
pub fn glitch_intensity(scroll_y: f32) -> f32 {
    (scroll_y / GLITCH_FULL_SCROLL_PX).clamp(0.0, 1.0)
}

pub struct ScrollState<H> {
    scrolled: bool,
    scrolling: bool,
    scroll_y: f32,
    stop_timer: Option<H>,
}

impl<H: Copy + Eq + Debug> Default for ScrollState<H> {
    fn default() -> Self {
        Self {
            scrolled: false,
            scrolling: false,
            scroll_y: 0.0,
            stop_timer: None,
        }
    }
}

impl<H: Copy + Eq + Debug> ScrollState<H> {
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_scrolling(&self) -> bool {
        self.scrolling
    }

    pub fn glitch_intensity(&self) -> f32 {
        glitch_intensity(self.scroll_y)
    }

    /// Scroll event. Restarts the stop-detection timer.
    pub fn on_scroll<T>(&mut self, scroll_y: f32, timers: &mut T)
    where
        T: TimerHost<Handle = H>,
    {
        self.scroll_y = scroll_y.max(0.0);
        self.scrolled = scroll_y > 0.0;
        self.scrolling = true;
        if let Some(h) = self.stop_timer.take() {
            timers.clear_timeout(h);
        }
        self.stop_timer = timers.set_timeout(Duration::from_millis(SCROLL_STOP_DELAY_MS as u64));
    }

    /// Stop-detection timer callback; returns true when scrolling ended.
    pub fn on_timer(&mut self, handle: H) -> bool {
        if self.stop_timer != Some(handle) {
            return false;
        }
        self.stop_timer = None;
        self.scrolling = false;
        true
    }

    pub fn teardown<T>(&mut self, timers: &mut T)
    where
        T: TimerHost<Handle = H>,
    {
        if let Some(h) = self.stop_timer.take() {
            timers.clear_timeout(h);
        }
        self.scrolling = false;
    }
}
