use scroll_core::{FrameLoop, FrameScheduler};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` as a [`FrameScheduler`].
pub struct RafScheduler {
    window: web::Window,
    callback: FrameCallback,
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn schedule(&mut self) -> Option<i32> {
        let callback = self.callback.borrow();
        let closure = callback.as_ref()?;
        match self
            .window
            .request_animation_frame(closure.as_ref().unchecked_ref())
        {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::warn!("[frame] requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel(&mut self, handle: i32) {
        _ = self.window.cancel_animation_frame(handle);
    }
}

/// Runs `on_frame` once per display refresh between `start` and `stop`.
///
/// The closure only holds a weak reference to the loop, so dropping the
/// `AnimationLoop` releases everything; drop also cancels the pending frame.
pub struct AnimationLoop {
    frame_loop: Rc<RefCell<FrameLoop<RafScheduler>>>,
}

impl AnimationLoop {
    pub fn new(window: &web::Window, mut on_frame: impl FnMut() + 'static) -> Self {
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let frame_loop = Rc::new(RefCell::new(FrameLoop::new(RafScheduler {
            window: window.clone(),
            callback: callback.clone(),
        })));
        let frame_loop_tick = Rc::downgrade(&frame_loop);
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let Some(frame_loop) = frame_loop_tick.upgrade() else {
                return;
            };
            if !frame_loop.borrow_mut().begin_frame() {
                return;
            }
            on_frame();
            frame_loop.borrow_mut().end_frame();
        }) as Box<dyn FnMut()>));
        Self { frame_loop }
    }

    pub fn start(&self) {
        self.frame_loop.borrow_mut().start();
    }

    pub fn stop(&self) {
        self.frame_loop.borrow_mut().stop();
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.borrow().is_running()
    }

    pub fn frames(&self) -> u64 {
        self.frame_loop.borrow().frames()
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
