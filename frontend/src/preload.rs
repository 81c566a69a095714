use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;
use yew::Callback;

use shared::shared_preload::{retry_identifier, FailureAction, PreloadBatch, PreloadConfig};

/// Drives one batch of image loads and reports progress and completion
/// through the two supplied callbacks.
///
/// Dropping the coordinator cancels every outstanding timer and detaches
/// every image handler before `drop` returns, so no callback fires after
/// teardown. Load results may arrive in any order; the batch state machine
/// keeps the aggregate bookkeeping order-insensitive.
pub struct ImagePreloader {
    inner: Rc<RefCell<PreloaderInner>>,
}

struct PreloaderInner {
    batch: PreloadBatch,
    on_progress: Callback<f64>,
    on_complete: Callback<()>,
    images: Vec<Option<HtmlImageElement>>,
    handlers: Vec<Closure<dyn FnMut()>>,
    retry_timers: Vec<Timeout>,
    safety_timer: Option<Timeout>,
    started_at: f64,
    cancelled: bool,
}

impl ImagePreloader {
    pub fn start(
        identifiers: Vec<String>,
        config: PreloadConfig,
        on_progress: Callback<f64>,
        on_complete: Callback<()>,
    ) -> Self {
        let total = identifiers.len();
        let batch = PreloadBatch::new(identifiers.clone(), config);
        let inner = Rc::new(RefCell::new(PreloaderInner {
            batch,
            on_progress: on_progress.clone(),
            on_complete: on_complete.clone(),
            images: (0..total).map(|_| None).collect(),
            handlers: Vec::new(),
            retry_timers: Vec::new(),
            safety_timer: None,
            started_at: js_sys::Date::now(),
            cancelled: false,
        }));

        if total == 0 {
            // nothing to fetch: report and claim completion right away
            inner.borrow_mut().batch.poll_completion();
            on_progress.emit(1.0);
            on_complete.emit(());
            return Self { inner };
        }

        for (index, identifier) in identifiers.into_iter().enumerate() {
            Self::issue_load(&inner, index, identifier, 0);
        }

        let weak = Rc::downgrade(&inner);
        let safety = Timeout::new(config.safety_timeout_ms, move || {
            Self::on_safety_timeout(&weak);
        });
        inner.borrow_mut().safety_timer = Some(safety);

        Self { inner }
    }

    pub fn progress(&self) -> f64 {
        self.inner.borrow().batch.progress()
    }

    fn issue_load(
        inner: &Rc<RefCell<PreloaderInner>>,
        index: usize,
        identifier: String,
        attempt: u32,
    ) {
        let image = match HtmlImageElement::new() {
            Ok(image) => image,
            Err(_) => {
                log::warn!("preload: could not create an image element for {}", identifier);
                return;
            }
        };

        let onload = {
            let weak = Rc::downgrade(inner);
            Closure::wrap(Box::new(move || Self::on_result(&weak, index, true)) as Box<dyn FnMut()>)
        };
        let onerror = {
            let weak = Rc::downgrade(inner);
            Closure::wrap(Box::new(move || Self::on_result(&weak, index, false)) as Box<dyn FnMut()>)
        };
        image.set_onload(Some(onload.as_ref().unchecked_ref()));
        image.set_onerror(Some(onerror.as_ref().unchecked_ref()));

        let src = if attempt == 0 {
            identifier
        } else {
            // the retry token keeps a poisoned cache entry from answering again
            retry_identifier(&identifier, attempt)
        };
        image.set_src(&src);

        let mut state = inner.borrow_mut();
        if let Some(slot) = state.images.get_mut(index) {
            if let Some(old) = slot.replace(image) {
                // a replaced element must never call back in
                old.set_onload(None);
                old.set_onerror(None);
            }
        }
        state.handlers.push(onload);
        state.handlers.push(onerror);
    }

    fn on_result(weak: &Weak<RefCell<PreloaderInner>>, index: usize, success: bool) {
        let inner = match weak.upgrade() {
            Some(inner) => inner,
            None => return,
        };

        let mut progress_update = None;
        let completed;
        {
            let mut state = inner.borrow_mut();
            if state.cancelled {
                return;
            }
            if success {
                progress_update = state.batch.record_loaded(index);
            } else {
                match state.batch.record_failure(index) {
                    Some(FailureAction::Retry) => {
                        let backoff = state.batch.config().retry_backoff_ms;
                        if let Some(task) = state.batch.task(index) {
                            log::debug!("preload: retrying {} in {} ms", task.identifier, backoff);
                        }
                        let weak = weak.clone();
                        let timer = Timeout::new(backoff, move || {
                            Self::on_retry_due(&weak, index);
                        });
                        state.retry_timers.push(timer);
                    }
                    Some(FailureAction::GiveUp { progress }) => {
                        progress_update = progress;
                    }
                    None => {}
                }
            }
            completed = state.batch.poll_completion();
        }

        let (on_progress, on_complete) = {
            let state = inner.borrow();
            (state.on_progress.clone(), state.on_complete.clone())
        };
        if let Some(progress) = progress_update {
            on_progress.emit(progress);
        }
        // the progress callback may have torn the coordinator down
        if completed && !inner.borrow().cancelled {
            let elapsed = js_sys::Date::now() - inner.borrow().started_at;
            log::info!("preload: batch complete in {:.0} ms", elapsed);
            on_complete.emit(());
        }
    }

    fn on_retry_due(weak: &Weak<RefCell<PreloaderInner>>, index: usize) {
        let inner = match weak.upgrade() {
            Some(inner) => inner,
            None => return,
        };
        let reissue = {
            let mut state = inner.borrow_mut();
            if state.cancelled {
                return;
            }
            state.batch.record_reissue(index).and_then(|attempt| {
                state
                    .batch
                    .task(index)
                    .map(|task| (task.identifier.clone(), attempt))
            })
        };
        if let Some((identifier, attempt)) = reissue {
            Self::issue_load(&inner, index, identifier, attempt);
        }
    }

    fn on_safety_timeout(weak: &Weak<RefCell<PreloaderInner>>) {
        let inner = match weak.upgrade() {
            Some(inner) => inner,
            None => return,
        };
        let fired = {
            let mut state = inner.borrow_mut();
            if state.cancelled {
                return;
            }
            let fired = state.batch.force_completion();
            if fired {
                log::warn!(
                    "preload: safety timeout hit with {}/{} images settled",
                    state.batch.completed_count(),
                    state.batch.total()
                );
            }
            fired
        };
        if fired {
            let on_complete = inner.borrow().on_complete.clone();
            on_complete.emit(());
        }
    }
}

impl Drop for ImagePreloader {
    fn drop(&mut self) {
        let mut state = self.inner.borrow_mut();
        state.cancelled = true;
        // dropping the timers cancels them
        state.retry_timers.clear();
        state.safety_timer = None;
        for image in state.images.iter().flatten() {
            image.set_onload(None);
            image.set_onerror(None);
        }
        state.handlers.clear();
    }
}
