use serde::{Serialize, Deserialize};
use web_sys::window;
use yew::prelude::*;

use crate::components::GradientBackground;
use crate::styles;

const OPENED_GIFTS_KEY: &str = "opened_gifts";

// Keyframes shared by every page; injected once per mounted shell
const CUSTOM_CSS: &str = r#"
.confetti {
    position: fixed;
    top: -10vh;
    z-index: 60;
    pointer-events: none;
    opacity: 0;
}
@keyframes confetti-fall {
    0% { transform: translateY(0) rotate(0deg); opacity: 1; }
    70% { opacity: 0.8; }
    100% { transform: translateY(115vh) rotate(var(--confetti-spin, 180deg)); opacity: 0; }
}
@keyframes float-y {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(-8px); }
}
@keyframes drift-up {
    from { transform: translateY(110vh); }
    to { transform: translateY(-20vh); }
}
@keyframes sparkle-fall {
    0% { transform: translateY(-10vh) rotate(0deg); opacity: 0; }
    10% { opacity: 0.15; }
    90% { opacity: 0.15; }
    100% { transform: translateY(110vh) rotate(360deg); opacity: 0; }
}
@keyframes twinkle {
    0%, 100% { opacity: 0.2; transform: scale(1); }
    50% { opacity: 0.8; transform: scale(1.2); }
}
"#;

#[derive(Serialize, Deserialize, Default)]
struct OpenedState {
    ids: Vec<u32>,
}

/// Opened-gift ids persisted across reloads. Corrupt or missing entries fall
/// back to nothing opened.
pub fn load_opened_gifts() -> Vec<u32> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(OPENED_GIFTS_KEY).ok().flatten())
        .and_then(|raw| serde_json::from_str::<OpenedState>(&raw).ok())
        .map(|state| state.ids)
        .unwrap_or_default()
}

pub fn save_opened_gifts(ids: &[u32]) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let state = OpenedState { ids: ids.to_vec() };
        if let Ok(raw) = serde_json::to_string(&state) {
            let _ = storage.set_item(OPENED_GIFTS_KEY, &raw);
        }
    }
}

/// Injects a page-scoped stylesheet; the caller removes the returned element
/// on cleanup.
pub fn inject_stylesheet(css: &str) -> Option<web_sys::Element> {
    let document = gloo_utils::document();
    let head = document.head()?;
    let style = document.create_element("style").ok()?;
    style.set_text_content(Some(css));
    head.append_child(&style).ok()?;
    Some(style)
}

/// Removes a stylesheet previously injected with `inject_stylesheet`.
pub fn remove_stylesheet(style: Option<web_sys::Element>) {
    if let Some(style) = style {
        if let Some(parent) = style.parent_node() {
            let _ = parent.remove_child(&style);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct BaseProps {
    pub children: Html,
}

/// Shared page shell: gradient backdrop, animated header, children slot.
#[function_component(Base)]
pub fn base(props: &BaseProps) -> Html {
    use_effect_with((), move |_| {
        let style = inject_stylesheet(CUSTOM_CSS);
        move || remove_stylesheet(style)
    });

    html! {
        <GradientBackground>
            <div class="max-w-7xl mx-auto relative z-10 p-4 sm:p-6 md:p-8">
                <header class="text-center mb-8 md:mb-12 relative">
                    <h1 class={styles::HEADER_TITLE}>
                        {"Happy Birthday, Sis!"}
                        <span class="inline-block ml-2">{"🎉"}</span>
                    </h1>
                    <div class={styles::HEADER_DIVIDER}></div>
                </header>
                { props.children.clone() }
            </div>
        </GradientBackground>
    }
}
