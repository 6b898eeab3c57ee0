use crate::constants::{BACKGROUND_Y_PROPERTY, PARALLAX_SELECTOR, SCROLL_EVENT};
use crate::dom::{self, Listener};
use crate::frame::AnimationLoop;
use scroll_core::css::px;
use scroll_core::{ParallaxConfig, ParallaxState};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct ParallaxDriver {
    target_count: usize,
    scroll_listener: Listener,
    frames: AnimationLoop,
}

impl ParallaxDriver {
    /// Captures the `.parallax` layers present now; later additions are ignored.
    pub fn new(window: &web::Window, document: &web::Document) -> anyhow::Result<Self> {
        let targets = dom::query_all_html(document, PARALLAX_SELECTOR)?;
        let target_count = targets.len();
        let state = Rc::new(RefCell::new(ParallaxState::new(
            dom::scroll_y(window),
            ParallaxConfig::default(),
        )));

        let window_scroll = window.clone();
        let state_scroll = state.clone();
        let scroll_listener = Listener::new(window.as_ref(), SCROLL_EVENT, move || {
            state_scroll
                .borrow_mut()
                .on_scroll(dom::scroll_y(&window_scroll));
        });

        let frames = AnimationLoop::new(window, move || {
            let state = state.borrow();
            for (el, offset) in targets.iter().zip(state.offsets(targets.len())) {
                dom::set_style(el, BACKGROUND_Y_PROPERTY, &px(offset));
            }
        });

        Ok(Self {
            target_count,
            scroll_listener,
            frames,
        })
    }

    pub fn start(&mut self) {
        self.scroll_listener.attach();
        self.frames.start();
    }

    pub fn stop(&mut self) {
        self.frames.stop();
        self.scroll_listener.detach();
    }

    pub fn teardown(mut self) {
        self.stop();
        log::info!("[parallax] torn down after {} frames", self.frames.frames());
    }

    #[inline]
    pub fn target_count(&self) -> usize {
        self.target_count
    }
}
