#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

mod constants;
mod dom;
mod frame;
mod parallax;
mod smoother;

use parallax::ParallaxDriver;
use smoother::ScrollSmoother;

/// Handle to the running page effects, resolved by [`mount`].
#[wasm_bindgen]
pub struct PageEffects {
    parallax: ParallaxDriver,
    smoother: ScrollSmoother,
}

#[wasm_bindgen]
impl PageEffects {
    /// Cancels both frame loops and removes their listeners. Safe to repeat.
    pub fn stop(&mut self) {
        self.parallax.stop();
        self.smoother.stop();
    }

    pub fn resume(&mut self) {
        self.parallax.start();
        self.smoother.start();
    }

    pub fn teardown(self) {
        self.parallax.teardown();
        self.smoother.teardown();
    }

    #[wasm_bindgen(getter, js_name = parallaxTargets)]
    pub fn parallax_targets(&self) -> usize {
        self.parallax.target_count()
    }

    #[wasm_bindgen(getter)]
    pub fn ease(&self) -> f64 {
        self.smoother.ease()
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scroll-web loaded");
    Ok(())
}

/// Starts parallax and smooth scrolling; resolves with a [`PageEffects`]
/// once both are running and the page has finished loading.
#[wasm_bindgen]
pub fn mount() -> js_sys::Promise {
    future_to_promise(async move {
        match mount_effects().await {
            Ok(effects) => Ok(JsValue::from(effects)),
            Err(e) => {
                log::error!("mount error: {:?}", e);
                Err(JsValue::from_str(&format!("{:#}", e)))
            }
        }
    })
}

async fn mount_effects() -> anyhow::Result<PageEffects> {
    let window = dom::window()?;
    let document = dom::document(&window)?;
    let metrics = dom::viewport_metrics(&window);

    let mut parallax = ParallaxDriver::new(&window, &document)?;
    parallax.start();
    let mut smoother = ScrollSmoother::new(&window, &document, metrics)?;
    smoother.start();
    log::info!(
        "[mount] viewport={}x{} parallax_targets={} ease={}",
        metrics.width,
        metrics.height,
        parallax.target_count(),
        smoother.ease()
    );

    // Images finishing after mount change the content height
    if document.ready_state() != "complete" {
        dom::window_loaded(&window).await?;
        smoother.sync_height();
    }

    Ok(PageEffects { parallax, smoother })
}
