// DOM hooks the page markup provides. Anything missing is skipped with a
// warning rather than failing the mount.

pub const CANVAS_ID: &str = "pixel-bg"; // dot-field canvas
pub const BACKGROUND_LAYER_ID: &str = "pixel-bg-layer"; // fading wrapper around the canvas
pub const HERO_ID: &str = "hero";
pub const HERO_WORD_SELECTOR: &str = ".hero-word";
pub const HERO_LETTER_SELECTOR: &str = ".hero-letter"; // queried inside each word
pub const NAV_ID: &str = "site-nav";
pub const NAV_SCROLLED_CLASS: &str = "is-scrolled";
pub const CURSOR_ID: &str = "custom-cursor";
pub const ROLLING_TEXT_ID: &str = "rolling-text";
pub const SUB_HEADER_ID: &str = "sub-header";

// CSS custom property the sub-header's glitch styling reads
pub const GLITCH_CSS_VAR: &str = "--glitch";
