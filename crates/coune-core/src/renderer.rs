//! Lifecycle wrapper around the dot field: when to build the grid, when to
//! draw, and making sure no frame request outlives the renderer.

use crate::clock::AnimationClock;
use crate::field::{render_frame_into, DrawCommand, FieldConfig, ParticleField, Viewport};
use crate::host::FrameHost;
use rand::Rng;
use std::fmt::Debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RendererState {
    Uninitialized,
    Running,
    /// Terminal for this renderer; a fresh mount builds a new one.
    Stopped,
}

pub struct BackgroundRenderer<H> {
    field: ParticleField,
    clock: AnimationClock,
    state: RendererState,
    visible: bool,
    viewport: Option<Viewport>,
    pending_frame: Option<H>,
    frames_rendered: u64,
}

impl<H: Copy + Eq + Debug> BackgroundRenderer<H> {
    pub fn new(config: FieldConfig) -> Self {
        Self {
            field: ParticleField::new(config),
            clock: AnimationClock::default(),
            state: RendererState::Uninitialized,
            visible: false,
            viewport: None,
            pending_frame: None,
            frames_rendered: 0,
        }
    }

    pub fn state(&self) -> RendererState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn time(&self) -> f32 {
        self.clock.time()
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn has_pending_frame(&self) -> bool {
        self.pending_frame.is_some()
    }

    pub fn set_visible<F, R>(&mut self, visible: bool, frames: &mut F, rng: &mut R)
    where
        F: FrameHost<Handle = H>,
        R: Rng + ?Sized,
    {
        self.visible = visible;
        match (visible, self.state) {
            (true, RendererState::Uninitialized) => self.try_start(frames, rng),
            (false, RendererState::Running) => {
                self.cancel_pending(frames);
                self.state = RendererState::Stopped;
                log::info!(
                    "[renderer] hidden; stopped after {} frames",
                    self.frames_rendered
                );
            }
            (true, RendererState::Stopped) => {
                log::debug!("[renderer] stopped renderer ignores visibility");
            }
            _ => {}
        }
    }

    /// Record a new surface size. `None` means the surface is not attached.
    /// A running renderer rebuilds its grid; the clock keeps going.
    pub fn resize<F, R>(&mut self, viewport: Option<Viewport>, frames: &mut F, rng: &mut R)
    where
        F: FrameHost<Handle = H>,
        R: Rng + ?Sized,
    {
        let Some(viewport) = viewport else {
            log::debug!("[renderer] resize without a surface; ignored");
            return;
        };
        self.viewport = Some(viewport);
        match self.state {
            RendererState::Running => self.field.configure(viewport, rng),
            RendererState::Uninitialized if self.visible => self.try_start(frames, rng),
            _ => {}
        }
    }

    /// Handle a delivered frame. Writes the frame's draw commands to `out`
    /// and requests the next one; returns `false` (and schedules nothing)
    /// once the renderer is hidden or stopped.
    pub fn tick<F>(&mut self, frames: &mut F, out: &mut Vec<DrawCommand>) -> bool
    where
        F: FrameHost<Handle = H>,
    {
        self.pending_frame = None;
        if !self.visible || self.state != RendererState::Running {
            return false;
        }
        render_frame_into(&self.field, self.clock.time(), out);
        self.clock.advance();
        self.frames_rendered += 1;
        self.schedule(frames);
        true
    }

    pub fn teardown<F>(&mut self, frames: &mut F)
    where
        F: FrameHost<Handle = H>,
    {
        self.cancel_pending(frames);
        if self.state != RendererState::Stopped {
            log::debug!("[renderer] torn down in {:?}", self.state);
        }
        self.state = RendererState::Stopped;
    }

    fn try_start<F, R>(&mut self, frames: &mut F, rng: &mut R)
    where
        F: FrameHost<Handle = H>,
        R: Rng + ?Sized,
    {
        let Some(viewport) = self.viewport else {
            log::debug!("[renderer] no surface yet; start deferred to next resize");
            return;
        };
        self.field.configure(viewport, rng);
        self.clock.reset();
        self.state = RendererState::Running;
        self.schedule(frames);
        log::info!("[renderer] running with {} dots", self.field.len());
    }

    fn schedule<F>(&mut self, frames: &mut F)
    where
        F: FrameHost<Handle = H>,
    {
        if self.pending_frame.is_some() {
            return;
        }
        self.pending_frame = frames.request_frame();
        if self.pending_frame.is_none() {
            log::warn!("[renderer] frame request failed; animation paused");
        }
    }

    fn cancel_pending<F>(&mut self, frames: &mut F)
    where
        F: FrameHost<Handle = H>,
    {
        if let Some(h) = self.pending_frame.take() {
            frames.cancel_frame(h);
        }
    }
}
