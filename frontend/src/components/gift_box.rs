use yew::prelude::*;

use shared::shared_gift_catalog::Gift;

#[derive(Properties, PartialEq)]
pub struct GiftBoxProps {
    pub gift: Gift,
    pub is_opened: bool,
    pub onclick: Callback<Gift>,
}

/// Deterministic per-gift stagger so the boxes don't bob in lockstep.
fn float_offset(id: u32) -> f64 {
    ((id as u64 * 9973) % 8) as f64 / 8.0 * 1.5
}

#[function_component(GiftBox)]
pub fn gift_box(props: &GiftBoxProps) -> Html {
    let gift = props.gift.clone();

    let onclick = {
        let onclick = props.onclick.clone();
        let gift = gift.clone();
        Callback::from(move |_: MouseEvent| onclick.emit(gift.clone()))
    };

    let offset = float_offset(gift.id);
    let float_style = format!(
        "animation: float-y {:.2}s ease-in-out {:.2}s infinite;",
        3.0 + offset,
        offset
    );

    html! {
        <div
            class={classes!(
                "relative", "overflow-visible", "h-36", "sm:h-40", "md:h-44",
                "w-full", "max-w-xs", "mx-auto", "rounded-md", "shadow-lg",
                "cursor-pointer", "bg-gradient-to-br", gift.colors.box_gradient.clone(),
                "hover:scale-105", "active:scale-95", "transition-transform", "duration-200",
            )}
            style={float_style}
            {onclick}
        >
            // Ribbons
            <div class={classes!("absolute", "w-6", "h-full", "top-0", "left-1/2", "-ml-3", "bg-gradient-to-br", gift.colors.ribbon_gradient.clone(), "z-10")}></div>
            <div class={classes!("absolute", "w-full", "h-6", "top-1/3", "-mt-3", "bg-gradient-to-br", gift.colors.ribbon_gradient.clone(), "z-20")}></div>

            // Bow
            <div class="absolute -top-3 sm:-top-4 left-1/2 -translate-x-1/2 w-10 sm:w-12 h-6 sm:h-8 z-30">
                <div class={classes!("absolute", "w-full", "h-6", "rounded-full", "bg-gradient-to-r", gift.colors.ribbon_gradient.clone(), "opacity-90")}></div>
                <div class={classes!("absolute", "w-5", "sm:w-6", "h-6", "sm:h-8", "left-1/4", "-top-1", "rotate-45", "rounded-full", "bg-gradient-to-r", gift.colors.ribbon_gradient.clone(), "opacity-90")}></div>
                <div class={classes!("absolute", "w-5", "sm:w-6", "h-6", "sm:h-8", "left-1/4", "-top-1", "-rotate-45", "rounded-full", "bg-gradient-to-r", gift.colors.ribbon_gradient.clone(), "opacity-90")}></div>
            </div>

            // Lid lifts away once the box has been opened
            <div class={classes!(
                "absolute", "w-full", "h-1/3", "top-0", "shadow-md",
                "bg-gradient-to-br", gift.colors.lid_gradient.clone(),
                "transition-all", "duration-300",
                props.is_opened.then_some("-translate-y-4 opacity-70"),
            )}></div>

            // Ground shadow
            <div class="absolute -bottom-2 left-1/2 -translate-x-1/2 w-4/5 h-2 bg-black/10 rounded-full blur-sm"></div>

            if !props.is_opened {
                <div class="absolute inset-0 bg-gradient-to-br from-white/20 to-transparent opacity-50 pointer-events-none"></div>
            }

            <div class="absolute bottom-3 left-0 right-0 flex items-center justify-center z-50" style="filter: drop-shadow(0px 2px 2px rgba(0,0,0,0.3));">
                <div class="bg-black/40 backdrop-blur-sm px-4 py-1.5 rounded-full">
                    <span class="text-sm sm:text-base text-white font-bold">
                        { if props.is_opened { "✓ Opened" } else { "Click to open!" } }
                    </span>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_offset_is_deterministic_and_bounded() {
        for id in 1..=16 {
            let offset = float_offset(id);
            assert_eq!(offset, float_offset(id));
            assert!((0.0..1.5).contains(&offset));
        }
    }
}
