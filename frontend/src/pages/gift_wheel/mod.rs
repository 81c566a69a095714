mod wheel_canvas;
mod wheel_utils;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::Link;

use shared::shared_gift_catalog::{gift_catalog, Gift};
use shared::shared_gift_wheel::{GiftWheel, SPIN_DURATION_MS};

use crate::base::{load_opened_gifts, save_opened_gifts, Base};
use crate::components::{Confetti, GiftReveal};
use crate::styles;
use crate::Route;

use wheel_canvas::{ease_out_cubic, WheelCanvas};
use wheel_utils::SpinButton;

const CONFETTI_DURATION_MS: u32 = 3000;

/// Eases the displayed rotation toward `final_rotation` over `duration_ms`,
/// storing each pending frame in `animation` so dropping the handle stops
/// the loop mid-flight.
fn animate_spin(
    animation: Rc<RefCell<Option<AnimationFrame>>>,
    rotation: UseStateHandle<f64>,
    start_rotation: f64,
    final_rotation: f64,
    duration_ms: f64,
) {
    fn schedule(
        animation: Rc<RefCell<Option<AnimationFrame>>>,
        rotation: UseStateHandle<f64>,
        start_time: Rc<RefCell<Option<f64>>>,
        start_rotation: f64,
        final_rotation: f64,
        duration_ms: f64,
    ) {
        let handle = {
            let animation = animation.clone();
            let rotation = rotation.clone();
            let start_time = start_time.clone();
            request_animation_frame(move |timestamp| {
                let started = *start_time.borrow_mut().get_or_insert(timestamp);
                let elapsed = timestamp - started;
                let progress = (elapsed / duration_ms).min(1.0);
                let eased = ease_out_cubic(progress);
                rotation.set(start_rotation + (final_rotation - start_rotation) * eased);
                if progress < 1.0 {
                    schedule(
                        animation,
                        rotation,
                        start_time,
                        start_rotation,
                        final_rotation,
                        duration_ms,
                    );
                } else {
                    animation.borrow_mut().take();
                }
            })
        };
        *animation.borrow_mut() = Some(handle);
    }

    let start_time = Rc::new(RefCell::new(None));
    schedule(
        animation,
        rotation,
        start_time,
        start_rotation,
        final_rotation,
        duration_ms,
    );
}

#[function_component(GiftWheelPage)]
pub fn gift_wheel_page() -> Html {
    let wheel = use_mut_ref(GiftWheel::new);
    let rotation = use_state(|| 0.0f64);
    let is_spinning = use_state(|| false);
    let opened = use_state(load_opened_gifts);
    let selected = use_state(|| None::<Gift>);
    let show_confetti = use_state(|| false);

    // handles for the in-flight spin; dropping them cancels everything
    let animation = use_mut_ref(|| None::<AnimationFrame>);
    let settle_timer = use_mut_ref(|| None::<Timeout>);
    let confetti_timer = use_mut_ref(|| None::<Timeout>);

    // no frame or timer callback may fire after the page unmounts
    {
        let animation = animation.clone();
        let settle_timer = settle_timer.clone();
        let confetti_timer = confetti_timer.clone();
        use_effect_with((), move |_| {
            move || {
                animation.borrow_mut().take();
                settle_timer.borrow_mut().take();
                confetti_timer.borrow_mut().take();
            }
        });
    }

    // gifts that were already opened never come back on the wheel
    let candidates: Vec<Gift> = gift_catalog()
        .iter()
        .filter(|gift| !opened.contains(&gift.id))
        .cloned()
        .collect();

    let on_spin = {
        let wheel = wheel.clone();
        let rotation = rotation.clone();
        let is_spinning = is_spinning.clone();
        let opened = opened.clone();
        let selected = selected.clone();
        let show_confetti = show_confetti.clone();
        let animation = animation.clone();
        let settle_timer = settle_timer.clone();
        let confetti_timer = confetti_timer.clone();
        let candidates = candidates.clone();

        Callback::from(move |_: MouseEvent| {
            let spin = match wheel
                .borrow_mut()
                .start_spin(candidates.len(), &mut rand::thread_rng())
            {
                Some(spin) => spin,
                // a second click mid-spin, or no gifts left
                None => return,
            };
            log::debug!(
                "wheel spinning to {:.1} degrees over {} candidates",
                spin.final_rotation,
                candidates.len()
            );
            is_spinning.set(true);

            let settle = {
                let wheel = wheel.clone();
                let is_spinning = is_spinning.clone();
                let opened = opened.clone();
                let selected = selected.clone();
                let show_confetti = show_confetti.clone();
                let confetti_timer = confetti_timer.clone();
                let candidates = candidates.clone();
                Timeout::new(SPIN_DURATION_MS, move || {
                    let target_index = match wheel.borrow_mut().settle() {
                        Some(index) => index,
                        None => return,
                    };
                    let gift = match candidates.get(target_index) {
                        Some(gift) => gift.clone(),
                        None => return,
                    };
                    log::info!("wheel settled on {}", gift.name);
                    is_spinning.set(false);
                    selected.set(Some(gift.clone()));
                    if !opened.contains(&gift.id) {
                        let mut ids = (*opened).clone();
                        ids.push(gift.id);
                        save_opened_gifts(&ids);
                        opened.set(ids);
                    }
                    show_confetti.set(true);
                    let show_confetti = show_confetti.clone();
                    *confetti_timer.borrow_mut() =
                        Some(Timeout::new(CONFETTI_DURATION_MS, move || {
                            show_confetti.set(false);
                        }));
                })
            };
            *settle_timer.borrow_mut() = Some(settle);

            animate_spin(
                animation.clone(),
                rotation.clone(),
                *rotation,
                spin.final_rotation,
                SPIN_DURATION_MS as f64,
            );
        })
    };

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    let all_open = candidates.is_empty();

    html! {
        <Base>
            if *show_confetti {
                <Confetti />
            }

            if let Some(gift) = (*selected).clone() {
                <GiftReveal gift={gift} onclose={on_close} />
            }

            <p class={classes!(styles::TAGLINE, "mb-8")}>
                {"Feeling lucky? Give the wheel a spin and let it pick your next surprise!"}
            </p>

            <div class="flex flex-col items-center justify-center w-full">
                <div class="relative mb-8">
                    <WheelCanvas
                        candidates={candidates.clone()}
                        rotation={*rotation}
                        is_spinning={*is_spinning}
                    />
                </div>

                <SpinButton
                    is_spinning={*is_spinning}
                    all_open={all_open}
                    onclick={on_spin}
                />

                if all_open {
                    <p class="mt-4 text-center text-purple-700">
                        {"You've discovered all your gifts! 🎉"}
                    </p>
                }
            </div>

            <div class="mt-10 text-center">
                <Link<Route> to={Route::Home} classes={styles::PAGE_LINK}>
                    {"Back to the gift boxes"}
                </Link<Route>>
            </div>
        </Base>
    }
}
