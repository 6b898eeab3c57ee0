use crate::constants::LOAD_EVENT;
use anyhow::{anyhow, Result};
use scroll_core::ViewportMetrics;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
pub fn window() -> Result<web::Window> {
    web::window().ok_or_else(|| anyhow!("no window"))
}

#[inline]
pub fn document(window: &web::Window) -> Result<web::Document> {
    window.document().ok_or_else(|| anyhow!("no document"))
}

#[inline]
pub fn body(document: &web::Document) -> Result<web::HtmlElement> {
    document.body().ok_or_else(|| anyhow!("no body"))
}

pub fn query_html(document: &web::Document, selector: &str) -> Result<web::HtmlElement> {
    document
        .query_selector(selector)
        .map_err(|e| anyhow!("invalid selector {}: {:?}", selector, e))?
        .ok_or_else(|| anyhow!("missing element: {}", selector))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!("{} is not an HTML element: {:?}", selector, e))
}

/// All HTML elements matching `selector`, in document order.
pub fn query_all_html(document: &web::Document, selector: &str) -> Result<Vec<web::HtmlElement>> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| anyhow!("invalid selector {}: {:?}", selector, e))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect())
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn viewport_metrics(window: &web::Window) -> ViewportMetrics {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    ViewportMetrics::new(read(window.inner_width()), read(window.inner_height()))
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn clear_style(el: &web::HtmlElement, property: &str) {
    _ = el.style().remove_property(property);
}

/// Resolves once the window `load` event fires.
pub async fn window_loaded(window: &web::Window) -> Result<()> {
    let target = window.clone();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let opts = web::AddEventListenerOptions::new();
        opts.set_once(true);
        _ = target.add_event_listener_with_callback_and_add_event_listener_options(
            LOAD_EVENT, &resolve, &opts,
        );
    });
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow!("waiting for load failed: {:?}", e))?;
    Ok(())
}

/// Passive event subscription that can be detached and re-attached.
///
/// The closure is created once so removal matches the registered callback.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut()>,
    attached: bool,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut() + 'static,
    ) -> Self {
        Self {
            target: target.clone(),
            event,
            closure: Closure::wrap(Box::new(handler) as Box<dyn FnMut()>),
            attached: false,
        }
    }

    pub fn attach(&mut self) {
        if self.attached {
            return;
        }
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(true);
        _ = self
            .target
            .add_event_listener_with_callback_and_add_event_listener_options(
                self.event,
                self.closure.as_ref().unchecked_ref(),
                &opts,
            );
        self.attached = true;
    }

    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
        self.attached = false;
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        self.detach();
    }
}
