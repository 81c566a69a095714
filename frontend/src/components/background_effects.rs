use rand::Rng;
use yew::prelude::*;

const SPARKLE_COUNT: usize = 12;
const BUBBLE_COUNT: usize = 10;
const STAR_COUNT: usize = 30;
const BUBBLE_COLORS: [&str; 6] = [
    "bg-pink-500",
    "bg-purple-500",
    "bg-indigo-500",
    "bg-blue-500",
    "bg-teal-500",
    "bg-rose-500",
];

#[derive(Clone, PartialEq)]
struct Sparkle {
    x: f64,
    scale: f64,
    duration: f64,
    delay: f64,
}

#[derive(Clone, PartialEq)]
struct Bubble {
    color: &'static str,
    size: f64,
    x: f64,
    duration: f64,
    delay: f64,
}

#[derive(Clone, PartialEq)]
struct Star {
    x: f64,
    y: f64,
    size: f64,
    duration: f64,
    delay: f64,
}

fn scatter() -> (Vec<Sparkle>, Vec<Bubble>, Vec<Star>) {
    let mut rng = rand::thread_rng();

    let sparkles = (0..SPARKLE_COUNT)
        .map(|_| Sparkle {
            x: rng.gen_range(0.0..100.0),
            scale: rng.gen_range(0.7..1.5),
            duration: rng.gen_range(20.0..60.0),
            delay: rng.gen_range(0.0..20.0),
        })
        .collect();

    let bubbles = (0..BUBBLE_COUNT)
        .map(|_| Bubble {
            color: BUBBLE_COLORS[rng.gen_range(0..BUBBLE_COLORS.len())],
            size: rng.gen_range(20.0..80.0),
            x: rng.gen_range(0.0..100.0),
            duration: rng.gen_range(30.0..90.0),
            delay: rng.gen_range(0.0..20.0),
        })
        .collect();

    let stars = (0..STAR_COUNT)
        .map(|_| Star {
            x: rng.gen_range(0.0..100.0),
            y: rng.gen_range(0.0..100.0),
            size: rng.gen_range(2.0..6.0),
            duration: rng.gen_range(1.0..4.0),
            delay: rng.gen_range(0.0..5.0),
        })
        .collect();

    (sparkles, bubbles, stars)
}

/// Subtle ambient layer behind everything: falling sparkles, rising blurred
/// bubbles, and twinkling stars.
#[function_component(BackgroundEffects)]
pub fn background_effects() -> Html {
    let layers = use_memo((), |_| scatter());
    let (sparkles, bubbles, stars) = &*layers;

    html! {
        <div class="fixed inset-0 overflow-hidden pointer-events-none" style="z-index: 1;">
            { for sparkles.iter().map(|sparkle| html! {
                <div
                    class="fixed text-lg sm:text-xl select-none"
                    style={format!(
                        "left: {:.1}%; top: 0; opacity: 0; transform: scale({:.2}); \
                         animation: sparkle-fall {:.1}s linear {:.1}s infinite;",
                        sparkle.x, sparkle.scale, sparkle.duration, sparkle.delay,
                    )}
                >
                    {"✨"}
                </div>
            }) }

            { for bubbles.iter().map(|bubble| html! {
                <div
                    class={classes!("fixed", "rounded-full", "opacity-10", "blur-md", bubble.color)}
                    style={format!(
                        "left: {:.1}%; width: {:.0}px; height: {:.0}px; transform: translateY(110vh); \
                         animation: drift-up {:.1}s ease-in-out {:.1}s infinite;",
                        bubble.x, bubble.size, bubble.size, bubble.duration, bubble.delay,
                    )}
                ></div>
            }) }

            { for stars.iter().map(|star| html! {
                <div
                    class="fixed bg-white rounded-full"
                    style={format!(
                        "left: {:.1}%; top: {:.1}%; width: {:.0}px; height: {:.0}px; opacity: 0.2; \
                         animation: twinkle {:.1}s ease-in-out {:.1}s infinite;",
                        star.x, star.y, star.size, star.size, star.duration, star.delay,
                    )}
                ></div>
            }) }
        </div>
    }
}
