use coune_core::{FrameHost, TimerHost};
use std::time::Duration;
use wasm_bindgen::JsValue;
use web_sys as web;

/// `setTimeout` host. Every timer calls the same bound function with its
/// token as the only argument, so the callback knows which timer fired.
pub struct WindowTimers {
    window: web::Window,
    callback: Option<js_sys::Function>,
    next_token: u32,
    live: Vec<(u32, i32)>,
}

impl WindowTimers {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            callback: None,
            next_token: 0,
            live: Vec::new(),
        }
    }

    pub fn bind(&mut self, callback: &js_sys::Function) {
        self.callback = Some(callback.clone());
    }

    /// Drop bookkeeping for a timer that has fired.
    pub fn forget(&mut self, token: u32) {
        self.live.retain(|(t, _)| *t != token);
    }
}

impl TimerHost for WindowTimers {
    type Handle = u32;

    fn set_timeout(&mut self, delay: Duration) -> Option<u32> {
        let Some(callback) = self.callback.as_ref() else {
            log::warn!("[timers] no callback bound");
            return None;
        };
        self.next_token = self.next_token.wrapping_add(1);
        let token = self.next_token;
        let ms = delay.as_millis().min(i32::MAX as u128) as i32;
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_1(
                callback,
                ms,
                &JsValue::from(token),
            ) {
            Ok(id) => {
                self.live.push((token, id));
                Some(token)
            }
            Err(e) => {
                log::warn!("[timers] setTimeout failed: {:?}", e);
                None
            }
        }
    }

    fn clear_timeout(&mut self, token: u32) {
        if let Some(pos) = self.live.iter().position(|(t, _)| *t == token) {
            let (_, id) = self.live.swap_remove(pos);
            self.window.clear_timeout_with_handle(id);
        }
    }
}

/// `requestAnimationFrame` host bound to one callback.
pub struct AnimationFrames {
    window: web::Window,
    callback: Option<js_sys::Function>,
    label: &'static str,
}

impl AnimationFrames {
    pub fn new(window: web::Window, label: &'static str) -> Self {
        Self {
            window,
            callback: None,
            label,
        }
    }

    pub fn bind(&mut self, callback: &js_sys::Function) {
        self.callback = Some(callback.clone());
    }
}

impl FrameHost for AnimationFrames {
    type Handle = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let callback = self.callback.as_ref()?;
        match self.window.request_animation_frame(callback) {
            Ok(id) => Some(id),
            Err(e) => {
                log::warn!("[{}] requestAnimationFrame failed: {:?}", self.label, e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: i32) {
        _ = self.window.cancel_animation_frame(handle);
    }
}
