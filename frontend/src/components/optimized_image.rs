use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct OptimizedImageProps {
    pub src: String,
    pub alt: String,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onerror: Option<Callback<()>>,
}

/// Image that fades in once the browser has decoded it.
#[function_component(OptimizedImage)]
pub fn optimized_image(props: &OptimizedImageProps) -> Html {
    let loaded = use_state(|| false);

    {
        let loaded = loaded.clone();
        use_effect_with(props.src.clone(), move |_| {
            // reset the fade when the source changes
            loaded.set(false);
            || ()
        });
    }

    let onload = {
        let loaded = loaded.clone();
        Callback::from(move |_: Event| loaded.set(true))
    };
    let onerror = {
        let callback = props.onerror.clone();
        Callback::from(move |_: Event| {
            if let Some(callback) = &callback {
                callback.emit(());
            }
        })
    };

    let opacity = if *loaded { "opacity-100" } else { "opacity-0" };

    html! {
        <img
            src={props.src.clone()}
            alt={props.alt.clone()}
            class={classes!(props.class.clone(), "transition-opacity", "duration-300", opacity)}
            loading="lazy"
            decoding="async"
            {onload}
            {onerror}
        />
    }
}
