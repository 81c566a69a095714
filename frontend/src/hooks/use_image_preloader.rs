use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use shared::shared_preload::PreloadConfig;

use crate::preload::ImagePreloader;

// Keep the splash visible long enough to avoid a flash on fast loads
const MIN_SPLASH_MS: u32 = 800;

#[derive(Clone, PartialEq)]
pub struct PreloadInfo {
    pub loading: bool,
    pub progress: f64,
}

/// Preloads the given image urls in the background and reports when the page
/// can reveal itself. The coordinator is dropped in the effect cleanup, which
/// suppresses every in-flight callback before a new batch can start.
#[hook]
pub fn use_image_preloader(urls: Vec<String>) -> PreloadInfo {
    let loading = use_state(|| true);
    let progress = use_state(|| 0.0f64);

    {
        let loading = loading.clone();
        let progress = progress.clone();
        use_effect_with(urls, move |urls| {
            let on_progress = {
                let progress = progress.clone();
                Callback::from(move |fraction: f64| progress.set(fraction))
            };
            let on_complete = Callback::from(move |_| {
                let loading = loading.clone();
                spawn_local(async move {
                    TimeoutFuture::new(MIN_SPLASH_MS).await;
                    loading.set(false);
                });
            });
            let preloader = ImagePreloader::start(
                urls.clone(),
                PreloadConfig::default(),
                on_progress,
                on_complete,
            );
            move || drop(preloader)
        });
    }

    PreloadInfo {
        loading: *loading,
        progress: *progress,
    }
}
