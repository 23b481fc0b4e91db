use crate::canvas::CanvasTarget;
use crate::dom;
use crate::elements::PageElements;
use crate::hosts::{AnimationFrames, WindowTimers};
use coune_core::{DrawCommand, FieldConfig, PageController, TimerEvent};
use instant::Instant;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use web_sys as web;

pub type Page = PageController<u32, i32, StdRng>;

/// Browser-side state for one mounted page: the controller plus the hosts
/// and DOM handles it drives.
pub struct FrameContext {
    pub window: web::Window,
    pub page: Page,
    pub timers: WindowTimers,
    pub ui_frames: AnimationFrames,
    pub bg_frames: AnimationFrames,
    pub canvas: Option<CanvasTarget>,
    pub elements: PageElements,
    pub draw_buf: Vec<DrawCommand>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(
        window: web::Window,
        canvas: Option<CanvasTarget>,
        elements: PageElements,
        rng: StdRng,
    ) -> Self {
        Self {
            timers: WindowTimers::new(window.clone()),
            ui_frames: AnimationFrames::new(window.clone(), "ui"),
            bg_frames: AnimationFrames::new(window.clone(), "background"),
            window,
            page: Page::new(FieldConfig::default(), rng),
            canvas,
            elements,
            draw_buf: Vec::new(),
            last_instant: Instant::now(),
        }
    }

    pub fn mount(&mut self) {
        self.last_instant = Instant::now();
        self.page
            .set_touch_device(dom::is_touch_device(&self.window));
        self.page.mount(&mut self.timers, &mut self.ui_frames);
        self.resize();
    }

    pub fn unmount(&mut self) {
        self.page
            .unmount(&mut self.timers, &mut self.ui_frames, &mut self.bg_frames);
    }

    pub fn on_timer(&mut self, token: u32) {
        self.timers.forget(token);
        match self.page.on_timer(token, &mut self.bg_frames) {
            TimerEvent::Revealed(r) => log::info!(
                "[page] reveal at {:.2}s (nav={}, background={})",
                self.page.elapsed(),
                r.navigation_visible,
                r.background_visible
            ),
            TimerEvent::ScrollStopped => {}
            TimerEvent::Ignored => log::debug!("[page] timer {} ignored", token),
        }
    }

    pub fn ui_frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        if let Some(ui) = self.page.on_ui_frame(dt_sec, &mut self.ui_frames) {
            self.elements.apply(&ui, self.page.timeline());
        }
    }

    pub fn background_frame(&mut self) {
        if self
            .page
            .on_background_frame(&mut self.bg_frames, &mut self.draw_buf)
        {
            if let Some(c) = &self.canvas {
                c.draw(&self.draw_buf);
            }
        }
    }

    pub fn resize(&mut self) {
        let viewport = self.canvas.as_ref().and_then(|c| c.resize());
        self.page
            .set_touch_device(dom::is_touch_device(&self.window));
        self.page.on_resize(viewport, &mut self.bg_frames);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.page.on_pointer_move(x, y);
    }

    pub fn scroll(&mut self) {
        let y = self.window.scroll_y().unwrap_or(0.0) as f32;
        self.page.on_scroll(y, &mut self.timers);
    }
}

// ---------------- Callbacks handed to the browser ----------------
// Each holds only a weak reference to the page context.

pub fn timer_callback(ctx: Weak<RefCell<FrameContext>>) -> Closure<dyn FnMut(JsValue)> {
    Closure::wrap(Box::new(move |token: JsValue| {
        let (Some(ctx), Some(token)) = (ctx.upgrade(), token.as_f64()) else {
            return;
        };
        ctx.borrow_mut().on_timer(token as u32);
    }) as Box<dyn FnMut(JsValue)>)
}

pub fn ui_frame_callback(ctx: Weak<RefCell<FrameContext>>) -> Closure<dyn FnMut()> {
    Closure::wrap(Box::new(move || {
        if let Some(ctx) = ctx.upgrade() {
            ctx.borrow_mut().ui_frame();
        }
    }) as Box<dyn FnMut()>)
}

pub fn background_frame_callback(ctx: Weak<RefCell<FrameContext>>) -> Closure<dyn FnMut()> {
    Closure::wrap(Box::new(move || {
        if let Some(ctx) = ctx.upgrade() {
            ctx.borrow_mut().background_frame();
        }
    }) as Box<dyn FnMut()>)
}
