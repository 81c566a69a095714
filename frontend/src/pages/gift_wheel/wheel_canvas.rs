use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use shared::shared_gift_catalog::Gift;
use shared::shared_gift_wheel::segment_angle;

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub candidates: Vec<Gift>,
    pub rotation: f64,
    pub is_spinning: bool,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let candidates = props.candidates.clone();
        let rotation = props.rotation;
        let is_spinning = props.is_spinning;

        use_effect_with(
            (candidates, rotation, is_spinning),
            move |(candidates, rotation, is_spinning)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    draw_wheel(&canvas, candidates, *rotation, *is_spinning);
                }
                || ()
            },
        );
    }

    html! {
        <div class="relative">
            <canvas
                ref={canvas_ref}
                width="450"
                height="450"
                class="w-full max-w-[450px] h-auto rounded-full transition-all duration-300"
                style={if props.is_spinning {
                    "filter: drop-shadow(0px 5px 20px rgba(168, 85, 247, 0.4));"
                } else {
                    "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.2));"
                }}
            />
        </div>
    }
}

fn draw_wheel(canvas: &HtmlCanvasElement, candidates: &[Gift], rotation: f64, is_spinning: bool) {
    let context = match canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
    {
        Some(context) => context,
        None => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = width.min(height) / 2.0 - 20.0;

    context.clear_rect(0.0, 0.0, width, height);

    // backing disc
    context.begin_path();
    context.set_fill_style_str("#f5f3ff");
    let _ = context.arc(center_x, center_y, radius, 0.0, 2.0 * PI);
    context.fill();

    if !candidates.is_empty() {
        let segment = segment_angle(candidates.len());

        context.save();
        let _ = context.translate(center_x, center_y);
        let _ = context.rotate(rotation * PI / 180.0);

        for (index, gift) in candidates.iter().enumerate() {
            // segment 0 starts under the pointer (12 o'clock) and runs clockwise
            let start = (index as f64 * segment - 90.0) * PI / 180.0;
            let end = ((index as f64 + 1.0) * segment - 90.0) * PI / 180.0;

            context.begin_path();
            context.set_fill_style_str(&gift.colors.wheel);
            context.move_to(0.0, 0.0);
            let _ = context.arc(0.0, 0.0, radius, start, end);
            context.fill();

            context.begin_path();
            context.set_stroke_style_str("rgba(255, 255, 255, 0.8)");
            context.set_line_width(2.5);
            context.move_to(0.0, 0.0);
            context.line_to(radius * start.cos(), radius * start.sin());
            context.stroke();
        }

        // labels run outward along each segment's center line
        context.set_text_align("center");
        context.set_text_baseline("middle");
        context.set_fill_style_str("#ffffff");
        context.set_shadow_color("rgba(0, 0, 0, 0.5)");
        context.set_shadow_blur(3.0);
        context.set_shadow_offset_x(1.0);
        context.set_shadow_offset_y(1.0);
        context.set_font(if candidates.len() > 6 {
            "bold 14px 'Segoe UI', Roboto, system-ui, sans-serif"
        } else {
            "bold 17px 'Segoe UI', Roboto, system-ui, sans-serif"
        });

        for (index, gift) in candidates.iter().enumerate() {
            let center_angle = ((index as f64 + 0.5) * segment - 90.0) * PI / 180.0;
            context.save();
            let _ = context.rotate(center_angle);
            let _ = context.translate(radius * 0.62, 0.0);
            let _ = context.fill_text(&gift.name, 0.0, 0.0);
            context.restore();
        }

        context.set_shadow_color("rgba(0, 0, 0, 0)");
        context.set_shadow_blur(0.0);
        context.set_shadow_offset_x(0.0);
        context.set_shadow_offset_y(0.0);

        context.restore();
    }

    // hub
    context.begin_path();
    context.set_fill_style_str("#ffffff");
    let _ = context.arc(center_x, center_y, radius * 0.16, 0.0, 2.0 * PI);
    context.fill();
    context.begin_path();
    context.set_stroke_style_str("rgba(139, 92, 246, 0.6)");
    context.set_line_width(3.0);
    let _ = context.arc(center_x, center_y, radius * 0.16, 0.0, 2.0 * PI);
    context.stroke();

    // outer ring
    context.begin_path();
    context.set_stroke_style_str(if is_spinning {
        "rgba(168, 85, 247, 0.7)"
    } else {
        "rgba(168, 85, 247, 0.45)"
    });
    context.set_line_width(4.0);
    let _ = context.arc(center_x, center_y, radius - 2.0, 0.0, 2.0 * PI);
    context.stroke();

    draw_pointer(&context, center_x, center_y, radius, is_spinning);
}

fn draw_pointer(
    context: &CanvasRenderingContext2d,
    center_x: f64,
    center_y: f64,
    radius: f64,
    is_spinning: bool,
) {
    context.set_shadow_color("rgba(236, 72, 153, 0.6)");
    context.set_shadow_blur(if is_spinning { 10.0 } else { 4.0 });

    let pointer_width = 16.0;
    let pointer_height = 26.0;
    context.begin_path();
    context.move_to(center_x, center_y - radius + 6.0);
    context.line_to(center_x - pointer_width, center_y - radius - pointer_height);
    context.line_to(center_x + pointer_width, center_y - radius - pointer_height);
    context.close_path();
    context.set_fill_style_str(if is_spinning { "#f472b6" } else { "#ec4899" });
    context.fill();
    context.set_stroke_style_str("#be185d");
    context.set_line_width(1.5);
    context.stroke();

    context.set_shadow_color("rgba(0, 0, 0, 0)");
    context.set_shadow_blur(0.0);
}

/// Easing function for smooth deceleration.
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}
