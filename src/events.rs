use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A registered DOM listener, removable on teardown.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn add(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        match target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                target: target.clone(),
                event,
                closure,
            }),
            Err(e) => {
                log::warn!("[events] could not listen for {}: {:?}", event, e);
                None
            }
        }
    }

    pub fn remove(self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

pub fn wire_page_listeners(window: &web::Window, ctx: &Rc<RefCell<FrameContext>>) -> Vec<Listener> {
    let mut listeners = Vec::with_capacity(3);

    let ctx_resize = Rc::downgrade(ctx);
    listeners.extend(Listener::add(window, "resize", move |_| {
        if let Some(c) = ctx_resize.upgrade() {
            c.borrow_mut().resize();
        }
    }));

    let ctx_move = Rc::downgrade(ctx);
    listeners.extend(Listener::add(window, "mousemove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        if let Some(c) = ctx_move.upgrade() {
            c.borrow_mut()
                .pointer_move(ev.client_x() as f32, ev.client_y() as f32);
        }
    }));

    let ctx_scroll = Rc::downgrade(ctx);
    listeners.extend(Listener::add(window, "scroll", move |_| {
        if let Some(c) = ctx_scroll.upgrade() {
            c.borrow_mut().scroll();
        }
    }));

    listeners
}
