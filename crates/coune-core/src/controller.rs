//! Single owner of all page animation state.
//!
//! The browser shell forwards lifecycle events, timer callbacks and frame
//! callbacks here; nothing in the page lives in globals. Two frame loops run
//! side by side: the UI loop (entrance tweens, cursor) for the whole mount,
//! and the background loop owned by the dot-field renderer once revealed.

use crate::cursor::{CursorMode, SpringCursor};
use crate::field::{DrawCommand, FieldConfig, Viewport};
use crate::host::{FrameHost, TimerHost};
use crate::renderer::{BackgroundRenderer, RendererState};
use crate::rolling;
use crate::scroll::ScrollState;
use crate::timeline::{Orchestrator, RevealState};
use crate::transition::{Element, EntranceTimeline, VisualProps};
use glam::Vec2;
use rand::Rng;
use std::fmt::Debug;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimerEvent {
    Revealed(RevealState),
    ScrollStopped,
    Ignored,
}

/// Everything the shell needs to style the page for one UI frame.
#[derive(Clone, Debug, PartialEq)]
pub struct UiFrame {
    pub elapsed: f32,
    pub hero: VisualProps,
    pub navigation: VisualProps,
    pub background: VisualProps,
    pub cursor_position: Vec2,
    pub cursor: VisualProps,
    pub navigation_scrolled: bool,
    pub glitch_intensity: f32,
    pub phrase: &'static str,
}

pub struct PageController<T, F, R> {
    config: FieldConfig,
    orchestrator: Orchestrator<T>,
    scroll: ScrollState<T>,
    renderer: BackgroundRenderer<F>,
    timeline: EntranceTimeline,
    cursor: SpringCursor,
    rng: R,
    ui_frame: Option<F>,
    mounted: bool,
    elapsed: f32,
}

impl<T, F, R> PageController<T, F, R>
where
    T: Copy + Eq + Debug,
    F: Copy + Eq + Debug,
    R: Rng,
{
    pub fn new(config: FieldConfig, rng: R) -> Self {
        Self {
            orchestrator: Orchestrator::new(),
            scroll: ScrollState::default(),
            renderer: BackgroundRenderer::new(config.clone()),
            config,
            timeline: EntranceTimeline::new(),
            cursor: SpringCursor::default(),
            rng,
            ui_frame: None,
            mounted: false,
            elapsed: 0.0,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn reveal(&self) -> RevealState {
        self.orchestrator.reveal()
    }

    pub fn renderer(&self) -> &BackgroundRenderer<F> {
        &self.renderer
    }

    pub fn timeline(&self) -> &EntranceTimeline {
        &self.timeline
    }

    pub fn cursor(&self) -> &SpringCursor {
        &self.cursor
    }

    pub fn scroll(&self) -> &ScrollState<T> {
        &self.scroll
    }

    pub fn mount<TH, FH>(&mut self, timers: &mut TH, ui_frames: &mut FH)
    where
        TH: TimerHost<Handle = T>,
        FH: FrameHost<Handle = F>,
    {
        if self.mounted {
            return;
        }
        // only an unmount stops the renderer
        if self.renderer.state() == RendererState::Stopped {
            self.reset();
        }
        self.mounted = true;
        self.elapsed = 0.0;
        self.orchestrator.start(timers);
        self.ui_frame = ui_frames.request_frame();
        log::info!("[page] mounted");
    }

    /// Timer callback dispatch. A reveal turns on the background renderer in
    /// the same step that flips the flags.
    pub fn on_timer<FH>(&mut self, handle: T, bg_frames: &mut FH) -> TimerEvent
    where
        FH: FrameHost<Handle = F>,
    {
        if !self.mounted {
            return TimerEvent::Ignored;
        }
        if let Some(reveal) = self.orchestrator.on_timer(handle) {
            self.timeline.mark_revealed(self.elapsed);
            self.renderer
                .set_visible(reveal.background_visible, bg_frames, &mut self.rng);
            return TimerEvent::Revealed(reveal);
        }
        if self.scroll.on_timer(handle) {
            return TimerEvent::ScrollStopped;
        }
        TimerEvent::Ignored
    }

    pub fn on_ui_frame<FH>(&mut self, dt_sec: f32, ui_frames: &mut FH) -> Option<UiFrame>
    where
        FH: FrameHost<Handle = F>,
    {
        self.ui_frame = None;
        if !self.mounted {
            return None;
        }
        let dt = dt_sec.max(0.0);
        self.elapsed += dt;
        self.cursor.step(dt);
        self.ui_frame = ui_frames.request_frame();
        Some(self.sample_ui())
    }

    pub fn on_background_frame<FH>(&mut self, bg_frames: &mut FH, out: &mut Vec<DrawCommand>) -> bool
    where
        FH: FrameHost<Handle = F>,
    {
        if !self.mounted {
            return false;
        }
        self.renderer.tick(bg_frames, out)
    }

    pub fn on_resize<FH>(&mut self, viewport: Option<Viewport>, bg_frames: &mut FH)
    where
        FH: FrameHost<Handle = F>,
    {
        if !self.mounted {
            return;
        }
        self.renderer.resize(viewport, bg_frames, &mut self.rng);
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.cursor.set_pointer(x, y);
    }

    pub fn set_touch_device(&mut self, touch: bool) {
        self.cursor.set_touch_device(touch);
    }

    pub fn on_scroll<TH>(&mut self, scroll_y: f32, timers: &mut TH)
    where
        TH: TimerHost<Handle = T>,
    {
        if self.mounted {
            self.scroll.on_scroll(scroll_y, timers);
        }
    }

    /// Cancel every pending timer and frame. After this no callback can
    /// change state.
    pub fn unmount<TH, FUi, FBg>(&mut self, timers: &mut TH, ui_frames: &mut FUi, bg_frames: &mut FBg)
    where
        TH: TimerHost<Handle = T>,
        FUi: FrameHost<Handle = F>,
        FBg: FrameHost<Handle = F>,
    {
        self.orchestrator.cancel(timers);
        self.scroll.teardown(timers);
        self.renderer.teardown(bg_frames);
        if let Some(h) = self.ui_frame.take() {
            ui_frames.cancel_frame(h);
        }
        if self.mounted {
            log::info!("[page] unmounted after {:.2}s", self.elapsed);
        }
        self.mounted = false;
    }

    /// Fresh per-mount state after an unmount. The touch/system cursor mode
    /// is a device property and carries over.
    fn reset(&mut self) {
        let touch = self.cursor.mode() == CursorMode::System;
        self.orchestrator = Orchestrator::new();
        self.scroll = ScrollState::default();
        self.renderer = BackgroundRenderer::new(self.config.clone());
        self.timeline = EntranceTimeline::new();
        self.cursor = SpringCursor::default();
        self.cursor.set_touch_device(touch);
        log::debug!("[page] state reset for remount");
    }

    fn sample_ui(&self) -> UiFrame {
        let now = self.elapsed;
        UiFrame {
            elapsed: now,
            hero: self.timeline.sample(Element::Hero, now),
            navigation: self.timeline.sample(Element::Navigation, now),
            background: self.timeline.sample(Element::Background, now),
            cursor_position: self.cursor.position(),
            cursor: self.cursor.appearance(now),
            navigation_scrolled: self.scroll.is_scrolled(),
            glitch_intensity: if self.scroll.is_scrolling() {
                self.scroll.glitch_intensity()
            } else {
                0.0
            },
            phrase: rolling::phrase_at(Duration::from_secs_f32(now)),
        }
    }
}
