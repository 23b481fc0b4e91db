use coune_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Look up `id` and cast it; logs and returns `None` when absent or of the
/// wrong element type.
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    let Some(el) = document.get_element_by_id(id) else {
        log::warn!("[dom] missing #{}", id);
        return None;
    };
    match el.dyn_into::<T>() {
        Ok(t) => Some(t),
        Err(_) => {
            log::warn!("[dom] #{} has an unexpected element type", id);
            None
        }
    }
}

pub fn elements_by_selector(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    document
        .query_selector_all(selector)
        .map(html_elements)
        .unwrap_or_default()
}

/// Descendants of `parent` matching `selector`, in document order.
pub fn descendants_by_selector(parent: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    parent
        .query_selector_all(selector)
        .map(html_elements)
        .unwrap_or_default()
}

fn html_elements(list: web::NodeList) -> Vec<web::HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// CSS size of the canvas plus the device pixel ratio. `None` when the canvas
/// is not attached to the document yet.
pub fn canvas_viewport(canvas: &web::HtmlCanvasElement) -> Option<Viewport> {
    if !canvas.is_connected() {
        return None;
    }
    let dpr = web::window()?.device_pixel_ratio() as f32;
    let rect = canvas.get_bounding_client_rect();
    match Viewport::new(rect.width() as f32, rect.height() as f32, dpr) {
        Ok(vp) => Some(vp),
        Err(e) => {
            log::warn!("[dom] unusable canvas size: {}", e);
            None
        }
    }
}

/// Match the canvas backing store to CSS size * devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, viewport: &Viewport) {
    let (w_px, h_px) = viewport.backing_size();
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
}

pub fn is_touch_device(window: &web::Window) -> bool {
    let has_touch_events = js_sys::Reflect::has(window, &"ontouchstart".into()).unwrap_or(false);
    has_touch_events || window.navigator().max_touch_points() > 0
}
