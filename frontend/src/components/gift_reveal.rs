use yew::prelude::*;

use shared::shared_gift_catalog::Gift;

use crate::components::OptimizedImage;
use crate::config::get_asset_url;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct GiftRevealProps {
    pub gift: Gift,
    pub onclose: Callback<()>,
}

/// Modal shown after a gift is picked: name, photo, and the note that goes
/// with it. Clicking the backdrop or the button closes it.
#[function_component(GiftReveal)]
pub fn gift_reveal(props: &GiftRevealProps) -> Html {
    let image_error = use_state(|| false);

    let on_backdrop = {
        let onclose = props.onclose.clone();
        Callback::from(move |_: MouseEvent| onclose.emit(()))
    };
    let on_button = {
        let onclose = props.onclose.clone();
        Callback::from(move |_: MouseEvent| onclose.emit(()))
    };
    let stop_propagation = Callback::from(|event: MouseEvent| event.stop_propagation());
    let on_image_error = {
        let image_error = image_error.clone();
        Callback::from(move |_| image_error.set(true))
    };

    html! {
        <div class="fixed inset-0 flex items-center justify-center p-4 z-50" onclick={on_backdrop}>
            <div class="w-full max-w-md relative" onclick={stop_propagation}>
                <div class="absolute -top-4 -left-4 text-xl">{"✨"}</div>
                <div class="absolute -top-4 -right-4 text-xl">{"✨"}</div>
                <div class="absolute -bottom-4 -left-4 text-xl">{"✨"}</div>
                <div class="absolute -bottom-4 -right-4 text-xl">{"✨"}</div>

                <div class="bg-white/95 backdrop-blur-sm p-6 rounded-xl shadow-xl">
                    <h2 class="text-2xl font-bold text-transparent bg-clip-text bg-gradient-to-r from-purple-600 to-pink-600 mb-4 text-center">
                        { &props.gift.name }
                    </h2>

                    <div class="mb-4 overflow-hidden rounded-lg bg-gray-100 shadow-inner relative">
                        if *image_error {
                            <div class="w-full h-48 flex items-center justify-center bg-gradient-to-r from-purple-100 to-pink-100">
                                <p class="text-gray-500">{"Image will be added soon!"}</p>
                            </div>
                        } else {
                            <OptimizedImage
                                src={get_asset_url(&props.gift.image)}
                                alt={props.gift.name.clone()}
                                class={classes!("w-full", "h-48", "object-cover")}
                                onerror={Some(on_image_error)}
                            />
                        }
                    </div>

                    <p class="text-gray-700 mb-6 text-center">
                        { &props.gift.description }
                    </p>

                    <div class="flex justify-center">
                        <button class={styles::PRIMARY_BUTTON} onclick={on_button}>
                            {"Close"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
