use crate::constants::{
    HEIGHT_PROPERTY, RESIZE_EVENT, SCROLL_CONTENT_SELECTOR, SCROLL_EASE_ATTR, SCROLL_EVENT,
    SCROLL_VIEWPORT_SELECTOR, TRANSFORM_PROPERTY, VIEWPORT_STYLES,
};
use crate::dom::{self, Listener};
use crate::frame::AnimationLoop;
use scroll_core::css::body_height;
use scroll_core::{ScrollConfig, ScrollState, ViewportMetrics};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Inertial scrolling for the `[data-scroll]` / `[data-scroll-content]` pair.
///
/// The body is sized to the content so the native scrollbar keeps its full
/// range, while the content itself is moved by a per-frame transform.
pub struct ScrollSmoother {
    body: web::HtmlElement,
    viewport: web::HtmlElement,
    content: web::HtmlElement,
    state: Rc<RefCell<ScrollState>>,
    scroll_listener: Listener,
    resize_listener: Listener,
    frames: AnimationLoop,
}

impl ScrollSmoother {
    pub fn new(
        window: &web::Window,
        document: &web::Document,
        metrics: ViewportMetrics,
    ) -> anyhow::Result<Self> {
        let viewport = dom::query_html(document, SCROLL_VIEWPORT_SELECTOR)?;
        let content = dom::query_html(document, SCROLL_CONTENT_SELECTOR)?;
        let body = dom::body(document)?;
        let state = Rc::new(RefCell::new(ScrollState::new(read_config(&viewport))));

        let window_scroll = window.clone();
        let state_scroll = state.clone();
        let scroll_listener = Listener::new(window.as_ref(), SCROLL_EVENT, move || {
            state_scroll
                .borrow_mut()
                .on_scroll(dom::scroll_y(&window_scroll));
        });

        let body_resize = body.clone();
        let content_resize = content.clone();
        let state_resize = state.clone();
        let resize_listener = Listener::new(window.as_ref(), RESIZE_EVENT, move || {
            sync_body_height(&body_resize, &content_resize);
            state_resize.borrow_mut().resync();
        });

        let content_frame = content.clone();
        let state_frame = state.clone();
        let frames = AnimationLoop::new(window, move || {
            let transform = state_frame.borrow_mut().step(&metrics);
            dom::set_style(&content_frame, TRANSFORM_PROPERTY, &transform.to_string());
        });

        Ok(Self {
            body,
            viewport,
            content,
            state,
            scroll_listener,
            resize_listener,
            frames,
        })
    }

    pub fn start(&mut self) {
        if self.frames.is_running() {
            return;
        }
        for (property, value) in VIEWPORT_STYLES {
            dom::set_style(&self.viewport, property, value);
        }
        self.sync_height();
        self.resize_listener.attach();
        self.scroll_listener.attach();
        self.frames.start();
    }

    pub fn stop(&mut self) {
        self.frames.stop();
        self.resize_listener.detach();
        self.scroll_listener.detach();
    }

    /// Stops and removes the body height override; state is dropped with `self`.
    pub fn teardown(mut self) {
        self.stop();
        dom::clear_style(&self.body, HEIGHT_PROPERTY);
        log::info!(
            "[smoother] torn down after {} frames at {:.2}",
            self.frames.frames(),
            self.state.borrow().rounded()
        );
    }

    pub fn sync_height(&self) {
        sync_body_height(&self.body, &self.content);
    }

    pub fn ease(&self) -> f64 {
        self.state.borrow().config().ease()
    }
}

fn sync_body_height(body: &web::HtmlElement, content: &web::HtmlElement) {
    let height = content.get_bounding_client_rect().height();
    dom::set_style(body, HEIGHT_PROPERTY, &body_height(height));
}

fn read_config(viewport: &web::HtmlElement) -> ScrollConfig {
    match viewport.get_attribute(SCROLL_EASE_ATTR) {
        None => ScrollConfig::default(),
        Some(raw) => ScrollConfig::parse(&raw).unwrap_or_else(|e| {
            log::warn!("[smoother] ignoring {}: {}", SCROLL_EASE_ATTR, e);
            ScrollConfig::default()
        }),
    }
}
