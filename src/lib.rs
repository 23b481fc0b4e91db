#![cfg(target_arch = "wasm32")]
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod elements;
mod events;
mod frame;
mod hosts;
mod style;

use canvas::CanvasTarget;
use constants::CANVAS_ID;
use elements::PageElements;
use frame::FrameContext;

thread_local! {
    static PAGE: RefCell<Option<PageHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("coune-web starting");
    mount();
    Ok(())
}

/// Everything one mounted page keeps alive: the shared context, the
/// callbacks handed to the browser and the DOM listeners.
struct PageHandle {
    ctx: Rc<RefCell<FrameContext>>,
    timer_cb: Closure<dyn FnMut(JsValue)>,
    ui_cb: Closure<dyn FnMut()>,
    bg_cb: Closure<dyn FnMut()>,
    listeners: Vec<events::Listener>,
}

impl PageHandle {
    fn destroy(self) {
        self.ctx.borrow_mut().unmount();
        for l in self.listeners {
            l.remove();
        }
        // nothing can call these any more
        drop(self.timer_cb);
        drop(self.ui_cb);
        drop(self.bg_cb);
    }
}

/// Mount the page if it is not mounted. Called from `start`; hosts that
/// swap the view out call it again after `unmount`.
#[wasm_bindgen]
pub fn mount() {
    if PAGE.with(|p| p.borrow().is_some()) {
        log::debug!("[page] already mounted");
        return;
    }
    match mount_page() {
        Ok(handle) => PAGE.with(|p| *p.borrow_mut() = Some(handle)),
        Err(e) => log::error!("mount error: {:?}", e),
    }
}

/// Tear the page down: cancels the pending reveal, every animation frame and
/// all listeners.
#[wasm_bindgen]
pub fn unmount() {
    if let Some(handle) = PAGE.with(|p| p.borrow_mut().take()) {
        handle.destroy();
    }
}

fn mount_page() -> anyhow::Result<PageHandle> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let elements = PageElements::find(&document);
    // Without a canvas the page still animates; only the dot field is skipped.
    let canvas = dom::element_by_id::<web::HtmlCanvasElement>(&document, CANVAS_ID).and_then(
        |c| match CanvasTarget::new(c) {
            Ok(t) => Some(t),
            Err(e) => {
                log::warn!("[canvas] {:?}", e);
                None
            }
        },
    );

    let ctx = Rc::new(RefCell::new(FrameContext::new(
        window.clone(),
        canvas,
        elements,
        StdRng::from_entropy(),
    )));
    let timer_cb = frame::timer_callback(Rc::downgrade(&ctx));
    let ui_cb = frame::ui_frame_callback(Rc::downgrade(&ctx));
    let bg_cb = frame::background_frame_callback(Rc::downgrade(&ctx));
    {
        let mut c = ctx.borrow_mut();
        c.timers.bind(timer_cb.as_ref().unchecked_ref());
        c.ui_frames.bind(ui_cb.as_ref().unchecked_ref());
        c.bg_frames.bind(bg_cb.as_ref().unchecked_ref());
        c.mount();
    }
    let listeners = events::wire_page_listeners(&window, &ctx);

    Ok(PageHandle {
        ctx,
        timer_cb,
        ui_cb,
        bg_cb,
        listeners,
    })
}
