//! Ambient dot-field background.
//!
//! A regular grid of small dots, each with its own fixed opacity, size,
//! shimmer speed and phase. The grid is rebuilt from scratch whenever the
//! drawing surface changes size; dots have no identity across rebuilds.
//! Rendering is a pure function from `(field, time)` to draw commands.

use crate::constants::*;
use rand::Rng;
use std::f32::consts::TAU;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ViewportError {
    #[error("viewport size must be finite and non-negative, got {width}x{height}")]
    InvalidSize { width: f32, height: f32 },
    #[error("device pixel ratio must be finite and positive, got {0}")]
    InvalidPixelRatio(f32),
    #[error("backing store of {width}x{height} px exceeds {} px per side", MAX_SURFACE_PX)]
    TooLarge { width: f32, height: f32 },
}

/// Drawable area in device-independent pixels plus the device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
    device_pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Result<Self, ViewportError> {
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(ViewportError::InvalidSize { width, height });
        }
        if !device_pixel_ratio.is_finite() || device_pixel_ratio <= 0.0 {
            return Err(ViewportError::InvalidPixelRatio(device_pixel_ratio));
        }
        let (w_px, h_px) = (width * device_pixel_ratio, height * device_pixel_ratio);
        if w_px > MAX_SURFACE_PX || h_px > MAX_SURFACE_PX {
            return Err(ViewportError::TooLarge {
                width: w_px,
                height: h_px,
            });
        }
        Ok(Self {
            width,
            height,
            device_pixel_ratio,
        })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn device_pixel_ratio(&self) -> f32 {
        self.device_pixel_ratio
    }

    /// Physical pixel size of the backing store.
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.width * self.device_pixel_ratio) as u32,
            (self.height * self.device_pixel_ratio) as u32,
        )
    }
}

/// Tunables for grid generation. `Default` matches the shipped look.
#[derive(Clone, Debug)]
pub struct FieldConfig {
    pub spacing: f32,
    pub base_opacity_max: f32,
    pub speed_min: f32,
    pub speed_max: f32,
    pub size_min: f32,
    pub size_max: f32,
    pub tint_probability: f64,
    pub tint_offset_max: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            spacing: DOT_SPACING,
            base_opacity_max: BASE_OPACITY_MAX,
            speed_min: SPEED_MIN,
            speed_max: SPEED_MAX,
            size_min: SIZE_MIN,
            size_max: SIZE_MAX,
            tint_probability: TINT_PROBABILITY,
            tint_offset_max: TINT_OFFSET_MAX,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HueClass {
    Neutral,
    /// Lightness offset applied to the grey base, in `[-20, 20)`.
    Tinted(f32),
}

/// Colour with 0..=255 channels and 0..=1 alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// CSS `rgba()` string suitable for `fillStyle`.
    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({:.2}, {:.2}, {:.2}, {:.4})",
            self.r, self.g, self.b, self.a
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dot {
    pub x: f32,
    pub y: f32,
    pub base_opacity: f32,
    pub speed: f32,
    pub phase: f32,
    pub size: f32,
    pub hue: HueClass,
}

/// Brightness modulation in `[0.7, 1.0]`.
#[inline]
pub fn shimmer(time: f32, speed: f32, phase: f32) -> f32 {
    (time * speed + phase).sin() * SHIMMER_AMPLITUDE + SHIMMER_CENTER
}

impl Dot {
    #[inline]
    pub fn opacity_at(&self, time: f32) -> f32 {
        self.base_opacity * shimmer(time, self.speed, self.phase)
    }

    pub fn color_at(&self, time: f32) -> Rgba {
        let a = self.opacity_at(time);
        match self.hue {
            HueClass::Neutral => Rgba {
                r: 255.0,
                g: 255.0,
                b: 255.0,
                a,
            },
            HueClass::Tinted(offset) => {
                let l = TINT_BASE_LIGHTNESS + offset;
                Rgba {
                    r: l,
                    g: l,
                    b: l + TINT_BLUE_LIFT,
                    a,
                }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Wipe the whole logical surface.
    Clear { width: f32, height: f32 },
    Circle {
        x: f32,
        y: f32,
        radius: f32,
        color: Rgba,
    },
}

#[derive(Debug, Default)]
pub struct ParticleField {
    pub config: FieldConfig,
    dots: Vec<Dot>,
    viewport: Option<Viewport>,
}

impl ParticleField {
    pub fn new(config: FieldConfig) -> Self {
        Self {
            config,
            dots: Vec::new(),
            viewport: None,
        }
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// `(cols, rows)` the grid uses for `viewport`.
    pub fn grid_dims(&self, viewport: &Viewport) -> (usize, usize) {
        let s = self.config.spacing;
        (
            (viewport.width() / s).ceil() as usize,
            (viewport.height() / s).ceil() as usize,
        )
    }

    /// Discard every dot and lay out a fresh grid for `viewport`. A grid
    /// whose dot count does not fit in `usize` leaves the field empty.
    pub fn configure<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) {
        let (cols, rows) = self.grid_dims(&viewport);
        let s = self.config.spacing;
        let c = &self.config;
        self.dots.clear();
        let Some(count) = cols.checked_mul(rows) else {
            log::warn!("[field] {}x{} grid is too large, leaving field empty", cols, rows);
            self.viewport = None;
            return;
        };
        self.dots.reserve(count);
        for i in 0..cols {
            for j in 0..rows {
                let base_opacity = rng.gen_range(0.0..c.base_opacity_max);
                let speed = rng.gen_range(c.speed_min..c.speed_max);
                let phase = rng.gen_range(0.0..TAU);
                let size = rng.gen_range(c.size_min..c.size_max);
                let hue = if rng.gen_bool(c.tint_probability) {
                    HueClass::Tinted(rng.gen_range(-c.tint_offset_max..c.tint_offset_max))
                } else {
                    HueClass::Neutral
                };
                self.dots.push(Dot {
                    x: i as f32 * s + s / 2.0,
                    y: j as f32 * s + s / 2.0,
                    base_opacity,
                    speed,
                    phase,
                    size,
                    hue,
                });
            }
        }
        self.viewport = Some(viewport);
        log::debug!(
            "[field] configured {}x{} grid ({} dots) for {:.0}x{:.0}@{}",
            cols,
            rows,
            self.dots.len(),
            viewport.width(),
            viewport.height(),
            viewport.device_pixel_ratio()
        );
    }
}

/// Draw commands for one frame: a full clear followed by one circle per dot.
pub fn render_frame(field: &ParticleField, time: f32) -> Vec<DrawCommand> {
    let mut out = Vec::with_capacity(field.len() + 1);
    render_frame_into(field, time, &mut out);
    out
}

/// Same as [`render_frame`] but reuses `out`'s allocation.
pub fn render_frame_into(field: &ParticleField, time: f32, out: &mut Vec<DrawCommand>) {
    out.clear();
    let (width, height) = field
        .viewport
        .map(|v| (v.width(), v.height()))
        .unwrap_or((0.0, 0.0));
    out.push(DrawCommand::Clear { width, height });
    out.extend(field.dots.iter().map(|d| DrawCommand::Circle {
        x: d.x,
        y: d.y,
        radius: d.size,
        color: d.color_at(time),
    }));
}
