//! Cancellable repeating task driven by a one-shot frame scheduler.
//!
//! A frame callback only ever fires once; to keep animating it must request
//! the next one itself. `FrameLoop` tracks the single pending request so that
//! `stop` can cancel it and nothing reschedules afterwards.

/// One-shot frame request source, e.g. `requestAnimationFrame`.
pub trait FrameScheduler {
    type Handle;

    /// Requests one callback. `None` means the request could not be made.
    fn schedule(&mut self) -> Option<Self::Handle>;

    fn cancel(&mut self, handle: Self::Handle);
}

pub struct FrameLoop<S: FrameScheduler> {
    scheduler: S,
    pending: Option<S::Handle>,
    running: bool,
    frames: u64,
}

impl<S: FrameScheduler> FrameLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
            running: false,
            frames: 0,
        }
    }

    /// A loop whose last request failed counts as stopped, so calling
    /// `start` again retries.
    pub fn start(&mut self) {
        if self.running && self.pending.is_some() {
            return;
        }
        self.request();
    }

    /// Called at the top of the frame callback. The request that fired is
    /// consumed; returns whether the frame's work should run.
    pub fn begin_frame(&mut self) -> bool {
        self.pending = None;
        if self.running {
            self.frames += 1;
        }
        self.running
    }

    /// Called after the frame's work to request the next frame.
    pub fn end_frame(&mut self) {
        if self.running && self.pending.is_none() {
            self.request();
        }
    }

    fn request(&mut self) {
        self.pending = self.scheduler.schedule();
        self.running = self.pending.is_some();
    }

    pub fn stop(&mut self) {
        self.running = false;
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Frames whose work ran since construction.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[inline]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    #[inline]
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}
