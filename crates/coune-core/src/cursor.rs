//! Custom cursor ring that trails the pointer on a damped spring.

use crate::constants::*;
use crate::transition::{Easing, Tween, VisualProps};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorMode {
    Custom,
    /// Touch devices keep the system cursor; the ring is never shown.
    System,
}

pub const APPEAR_TWEEN: Tween = Tween {
    from: VisualProps {
        opacity: 0.0,
        translate_y: 0.0,
        scale: 0.0,
    },
    to: VisualProps::IDENTITY,
    delay: 0.0,
    duration: 0.3,
    easing: Easing::EaseOut,
};

#[derive(Clone, Debug)]
pub struct SpringCursor {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    position: Vec2,
    velocity: Vec2,
    target: Vec2,
    mode: CursorMode,
}

impl Default for SpringCursor {
    fn default() -> Self {
        Self {
            stiffness: CURSOR_STIFFNESS,
            damping: CURSOR_DAMPING,
            mass: CURSOR_MASS,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            target: Vec2::ZERO,
            mode: CursorMode::Custom,
        }
    }
}

impl SpringCursor {
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn mode(&self) -> CursorMode {
        self.mode
    }

    pub fn set_touch_device(&mut self, touch: bool) {
        let mode = if touch {
            CursorMode::System
        } else {
            CursorMode::Custom
        };
        if mode != self.mode {
            log::debug!("[cursor] mode {:?}", mode);
            self.mode = mode;
        }
    }

    /// Pointer position in client px; the ring centres itself on it.
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.target = Vec2::new(x, y) - Vec2::splat(CURSOR_SIZE_PX * 0.5);
    }

    /// Advance the spring by `dt_sec`, clamped and split into small sub-steps.
    pub fn step(&mut self, dt_sec: f32) {
        let mut remaining = dt_sec.clamp(0.0, CURSOR_MAX_DT_SEC);
        while remaining > 0.0 {
            let h = remaining.min(CURSOR_SUBSTEP_SEC);
            let force = (self.target - self.position) * self.stiffness - self.velocity * self.damping;
            self.velocity += force / self.mass * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
    }

    /// Ring opacity/scale `since_shown` seconds after it first appeared.
    pub fn appearance(&self, since_shown: f32) -> VisualProps {
        match self.mode {
            CursorMode::Custom => APPEAR_TWEEN.sample(since_shown),
            CursorMode::System => APPEAR_TWEEN.from,
        }
    }
}
