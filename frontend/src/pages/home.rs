use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::Link;

use shared::shared_gift_catalog::{gift_catalog, image_urls, Gift};

use crate::base::{load_opened_gifts, save_opened_gifts, Base};
use crate::components::{BackgroundEffects, Confetti, FloatingElements, GiftBox, GiftReveal};
use crate::hooks::use_image_preloader;
use crate::styles;
use crate::Route;

const CONFETTI_DURATION_MS: u32 = 3000;

#[function_component(Home)]
pub fn home() -> Html {
    let preload = use_image_preloader(image_urls());
    let opened = use_state(load_opened_gifts);
    let selected = use_state(|| None::<Gift>);
    let show_confetti = use_state(|| false);
    // replacing the timer on every open cancels the previous one; unmount
    // drops whatever is left
    let confetti_timer = use_mut_ref(|| None::<Timeout>);

    let on_open = {
        let opened = opened.clone();
        let selected = selected.clone();
        let show_confetti = show_confetti.clone();
        let confetti_timer = confetti_timer.clone();
        Callback::from(move |gift: Gift| {
            selected.set(Some(gift.clone()));
            if opened.contains(&gift.id) {
                return;
            }
            let mut ids = (*opened).clone();
            ids.push(gift.id);
            save_opened_gifts(&ids);
            opened.set(ids);

            show_confetti.set(true);
            let show_confetti = show_confetti.clone();
            *confetti_timer.borrow_mut() = Some(Timeout::new(CONFETTI_DURATION_MS, move || {
                show_confetti.set(false);
            }));
        })
    };

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    let total = gift_catalog().len();
    let discovered = opened.len();

    html! {
        <Base>
            if preload.loading {
                <div class="fixed inset-0 bg-white/80 flex items-center justify-center z-50">
                    <div class="text-center">
                        <div class={classes!(styles::LOADING_SPINNER, "mx-auto", "mb-4")}></div>
                        <p class="text-purple-600 font-medium">
                            { format!("Loading your gifts... {:.0}%", preload.progress * 100.0) }
                        </p>
                    </div>
                </div>
            }

            <BackgroundEffects />
            <FloatingElements />

            if *show_confetti {
                <Confetti />
            }

            if let Some(gift) = (*selected).clone() {
                <GiftReveal gift={gift} onclose={on_close} />
            }

            <p class={styles::TAGLINE}>
                {"Your gifts are on the way, but in the meantime, click on these boxes to see what's coming!"}
            </p>

            <div class="text-center mt-4 mb-8">
                <p class={styles::COUNTER_TEXT}>
                    { format!("Gifts Discovered: {} of {}", discovered, total) }
                    { if discovered == total { " 🎊" } else { "" } }
                </p>
            </div>

            <div class={styles::GIFT_GRID}>
                { for gift_catalog().iter().map(|gift| html! {
                    <GiftBox
                        key={gift.id}
                        gift={gift.clone()}
                        is_opened={opened.contains(&gift.id)}
                        onclick={on_open.clone()}
                    />
                }) }
            </div>

            <div class="mt-10 text-center">
                <Link<Route> to={Route::Wheel} classes={styles::PAGE_LINK}>
                    {"Can't decide? Let the wheel pick one"}
                </Link<Route>>
            </div>

            <div class={classes!("mt-10", "md:mt-16", "text-center", styles::FOOTNOTE)}>
                <p>{"Made with ❤️ for my awesome sister"}</p>
            </div>
        </Base>
    }
}
