use rand::Rng;
use yew::prelude::*;

const COLORS: [&str; 6] = [
    "bg-pink-500",
    "bg-blue-500",
    "bg-green-500",
    "bg-yellow-400",
    "bg-purple-500",
    "bg-red-500",
];
const PIECE_COUNT: usize = 60;

#[derive(Clone, PartialEq)]
struct ConfettiPiece {
    x: f64,
    delay: f64,
    size: f64,
    duration: f64,
    rotation: f64,
    round: bool,
    color: &'static str,
}

fn scatter_pieces() -> Vec<ConfettiPiece> {
    let mut rng = rand::thread_rng();
    (0..PIECE_COUNT)
        .map(|_| ConfettiPiece {
            x: rng.gen_range(0.0..100.0),
            delay: rng.gen_range(0.0..1.0),
            size: rng.gen_range(4.0..12.0),
            duration: rng.gen_range(2.0..4.0),
            rotation: if rng.gen_bool(0.5) { 180.0 } else { -180.0 },
            round: rng.gen_bool(0.8),
            color: COLORS[rng.gen_range(0..COLORS.len())],
        })
        .collect()
}

/// A burst of falling confetti; the pieces are scattered once per mount.
#[function_component(Confetti)]
pub fn confetti() -> Html {
    let pieces = use_memo((), |_| scatter_pieces());

    html! {
        <>
            { for pieces.iter().map(|piece| {
                let style = format!(
                    "left: {:.1}vw; width: {:.0}px; height: {:.0}px; border-radius: {}; \
                     --confetti-spin: {:.0}deg; animation: confetti-fall {:.2}s ease-out {:.2}s forwards;",
                    piece.x,
                    piece.size,
                    piece.size,
                    if piece.round { "50%" } else { "2px" },
                    piece.rotation,
                    piece.duration,
                    piece.delay,
                );
                html! {
                    <div class={classes!("confetti", piece.color)} style={style}></div>
                }
            }) }
        </>
    }
}
