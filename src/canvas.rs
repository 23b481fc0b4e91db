use crate::dom;
use coune_core::{DrawCommand, Viewport};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The dot-field canvas and its 2D context.
pub struct CanvasTarget {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasTarget {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { canvas, ctx })
    }

    /// Resync the backing store with the CSS size and reset the DPR scale.
    /// Returns the new logical viewport, or `None` if the canvas is detached.
    pub fn resize(&self) -> Option<Viewport> {
        let vp = dom::canvas_viewport(&self.canvas)?;
        dom::sync_canvas_backing_size(&self.canvas, &vp);
        // resizing the backing store resets the context transform
        let dpr = vp.device_pixel_ratio() as f64;
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        Some(vp)
    }

    pub fn draw(&self, commands: &[DrawCommand]) {
        for cmd in commands {
            match cmd {
                DrawCommand::Clear { width, height } => {
                    self.ctx.clear_rect(0.0, 0.0, *width as f64, *height as f64);
                }
                DrawCommand::Circle {
                    x,
                    y,
                    radius,
                    color,
                } => {
                    self.ctx.set_fill_style_str(&color.css());
                    self.ctx.begin_path();
                    _ = self
                        .ctx
                        .arc(*x as f64, *y as f64, *radius as f64, 0.0, TAU);
                    self.ctx.fill();
                }
            }
        }
    }
}
