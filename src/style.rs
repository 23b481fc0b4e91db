use coune_core::VisualProps;
use glam::Vec2;

// Inline style values for sampled animation props.

#[inline]
pub fn opacity(props: &VisualProps) -> String {
    format!("{:.4}", props.opacity.clamp(0.0, 1.0))
}

#[inline]
pub fn transform(props: &VisualProps) -> String {
    format!(
        "translateY({:.2}px) scale({:.4})",
        props.translate_y, props.scale
    )
}

/// Cursor ring: positioned by its spring, scaled by its appearance tween.
#[inline]
pub fn cursor_transform(position: Vec2, props: &VisualProps) -> String {
    format!(
        "translate3d({:.2}px, {:.2}px, 0) scale({:.4})",
        position.x, position.y, props.scale
    )
}

#[inline]
pub fn glitch(intensity: f32) -> String {
    format!("{:.3}", intensity.clamp(0.0, 1.0))
}
