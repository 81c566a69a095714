use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub all_open: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let disabled = props.is_spinning || props.all_open;

    let label = if props.all_open {
        "All gifts opened!"
    } else if props.is_spinning {
        "Spinning..."
    } else {
        "Spin for a Gift!"
    };

    let button_class = if disabled {
        "bg-gray-400 cursor-not-allowed text-white"
    } else {
        "bg-gradient-to-r from-purple-500 to-pink-500 text-white cursor-pointer hover:shadow-xl hover:-translate-y-0.5 active:translate-y-0"
    };

    html! {
        <button
            onclick={props.onclick.clone()}
            disabled={disabled}
            class={classes!(
                "px-8", "py-3", "rounded-full", "text-lg", "font-bold", "shadow-lg",
                "transition-all", "duration-300", button_class,
            )}
        >
            if props.is_spinning {
                <svg class="inline-block mr-2 animate-spin" xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <circle cx="12" cy="12" r="10" />
                    <path d="M12 6v6l4 2" />
                </svg>
            }
            <span>{ label }</span>
        </button>
    }
}
