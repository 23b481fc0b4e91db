// Shared timing and appearance constants for the landing page.

// Entrance sequence
pub const REVEAL_DELAY_MS: u32 = 1300; // nav + background reveal after mount

// Dot field layout
pub const DOT_SPACING: f32 = 8.0; // logical px between dot centres
pub const MAX_SURFACE_PX: f32 = 32_767.0; // per backing-store side
pub const BASE_OPACITY_MAX: f32 = 0.3;
pub const SPEED_MIN: f32 = 0.8;
pub const SPEED_MAX: f32 = 2.0;
pub const SIZE_MIN: f32 = 1.2;
pub const SIZE_MAX: f32 = 2.0;

// Dot colour
pub const TINT_PROBABILITY: f64 = 0.15;
pub const TINT_OFFSET_MAX: f32 = 20.0; // symmetric, [-20, 20)
pub const TINT_BASE_LIGHTNESS: f32 = 180.0;
pub const TINT_BLUE_LIFT: f32 = 15.0;

// Shimmer: sin(..) * AMPLITUDE + CENTER, so the range is [0.7, 1.0]
pub const SHIMMER_AMPLITUDE: f32 = 0.15;
pub const SHIMMER_CENTER: f32 = 0.85;

// Animation clock
pub const CLOCK_STEP: f32 = 0.015; // per rendered frame

// Custom cursor
pub const CURSOR_STIFFNESS: f32 = 150.0;
pub const CURSOR_DAMPING: f32 = 15.0;
pub const CURSOR_MASS: f32 = 1.0;
pub const CURSOR_SIZE_PX: f32 = 24.0;
pub const CURSOR_MAX_DT_SEC: f32 = 0.1; // clamp after tab switches
pub const CURSOR_SUBSTEP_SEC: f32 = 1.0 / 120.0;

// Scroll
pub const SCROLL_STOP_DELAY_MS: u32 = 150;
pub const GLITCH_FULL_SCROLL_PX: f32 = 100.0;

// Rolling phrase ticker
pub const ROLLING_INTERVAL_MS: u64 = 2000;
