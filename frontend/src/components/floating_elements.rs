use rand::Rng;
use yew::prelude::*;

const BALLOON_COUNT: usize = 5;
const GIFT_COUNT: usize = 6;
const HEART_EMOJIS: [&str; 6] = ["❤️", "💙", "💜", "💚", "🧡", "💛"];
const GIFT_EMOJIS: [&str; 8] = ["🎁", "🎀", "🎊", "🎉", "💝", "👑", "🎵", "💌"];

#[derive(Clone, PartialEq)]
struct Drifter {
    emoji: &'static str,
    x: f64,
    rotation: f64,
    duration: f64,
    delay: f64,
    scale: f64,
}

fn spawn_balloons() -> Vec<Drifter> {
    let mut rng = rand::thread_rng();
    (0..BALLOON_COUNT)
        .map(|i| Drifter {
            emoji: if rng.gen_bool(0.7) {
                "🎈"
            } else {
                HEART_EMOJIS[rng.gen_range(0..HEART_EMOJIS.len())]
            },
            x: 10.0 + i as f64 * (80.0 / BALLOON_COUNT as f64),
            rotation: rng.gen_range(-5.0..5.0),
            duration: rng.gen_range(40.0..110.0),
            delay: i as f64 * 5.0,
            scale: rng.gen_range(0.8..1.2),
        })
        .collect()
}

fn spawn_gifts() -> Vec<Drifter> {
    let mut rng = rand::thread_rng();
    (0..GIFT_COUNT)
        .map(|i| Drifter {
            emoji: GIFT_EMOJIS[rng.gen_range(0..GIFT_EMOJIS.len())],
            x: 5.0 + i as f64 * (90.0 / GIFT_COUNT as f64),
            rotation: rng.gen_range(-180.0..180.0),
            duration: rng.gen_range(30.0..70.0),
            delay: 10.0 + i as f64 * 4.0,
            scale: rng.gen_range(0.7..1.2),
        })
        .collect()
}

fn drifter_style(drifter: &Drifter) -> String {
    format!(
        "left: {:.1}%; transform: translateY(110vh); \
         animation: drift-up {:.1}s ease-in-out {:.1}s infinite;",
        drifter.x, drifter.duration, drifter.delay,
    )
}

/// Balloons and gift emojis drifting up behind the content. Purely
/// decorative; positions are scattered once per mount.
#[function_component(FloatingElements)]
pub fn floating_elements() -> Html {
    let balloons = use_memo((), |_| spawn_balloons());
    let gifts = use_memo((), |_| spawn_gifts());

    html! {
        <div class="fixed inset-0 overflow-hidden pointer-events-none" style="z-index: 5;">
            { for balloons.iter().map(|balloon| html! {
                <div class="fixed text-4xl sm:text-5xl md:text-6xl select-none" style={drifter_style(balloon)}>
                    <span
                        class="inline-block"
                        style={format!("transform: rotate({:.1}deg) scale({:.2}); filter: drop-shadow(0 2px 4px rgba(0,0,0,0.1));", balloon.rotation, balloon.scale)}
                    >
                        { balloon.emoji }
                    </span>
                    // Balloon string
                    <div class="absolute w-1 h-20 bg-gray-300/50 rounded-full left-1/2 -ml-0.5 top-full" style="transform-origin: top;"></div>
                </div>
            }) }

            { for gifts.iter().map(|gift| html! {
                <div class="fixed text-3xl sm:text-4xl select-none opacity-70" style={drifter_style(gift)}>
                    <span
                        class="inline-block"
                        style={format!("transform: rotate({:.1}deg) scale({:.2}); filter: drop-shadow(0 1px 3px rgba(0,0,0,0.1));", gift.rotation, gift.scale)}
                    >
                        { gift.emoji }
                    </span>
                </div>
            }) }
        </div>
    }
}
