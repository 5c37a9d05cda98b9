use std::f64::consts::PI;

use engine::roulette::Item;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

// Wedge palette, cycled when there are more items than colors.
const COLORS: [&str; 10] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40", "#8AC926", "#1982C4",
    "#6A4C93", "#F15BB5",
];

const CANVAS_SIZE: u32 = 400;
const FALLBACK_TRANSITION_MS: u32 = 3000;

fn channel(hex: &str, at: usize) -> f64 {
    u8::from_str_radix(hex.get(at..at + 2).unwrap_or("00"), 16).unwrap_or(0) as f64
}

// Perceived brightness, weighted for the human eye.
fn color_brightness(hex: &str) -> f64 {
    (channel(hex, 1) * 299.0 + channel(hex, 3) * 587.0 + channel(hex, 5) * 114.0) / 1000.0
}

fn lighten_color(hex: &str, percent: f64) -> String {
    let lift = |c: f64| (c + (255.0 - c) * (percent / 100.0)).round().min(255.0) as u8;
    format!(
        "#{:02x}{:02x}{:02x}",
        lift(channel(hex, 1)),
        lift(channel(hex, 3)),
        lift(channel(hex, 5))
    )
}

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub items: Vec<Item>,
    /// Cumulative rotation in degrees, applied clockwise as a CSS
    /// transform. The canvas itself is always drawn unrotated.
    pub angle: f64,
    pub spinning: bool,
    /// Transition length for the current spin, when one is in flight.
    pub duration_ms: Option<u32>,
    pub winner: Option<Item>,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let items = props.items.clone();
        let winner = props.winner.clone();
        let spinning = props.spinning;

        use_effect_with((items, winner, spinning), move |(items, winner, spinning)| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                let context = canvas
                    .get_context("2d")
                    .unwrap()
                    .unwrap()
                    .dyn_into::<CanvasRenderingContext2d>()
                    .unwrap();
                draw_wheel(&context, canvas.width() as f64, items, winner, *spinning);
            }
            || ()
        });
    }

    // The wheel rotates via a CSS transform so the browser's compositor
    // handles the easing; the transition length tracks the settle delay so
    // the animation stops exactly when the result is announced.
    let duration = props.duration_ms.unwrap_or(FALLBACK_TRANSITION_MS);
    let style = if props.spinning {
        format!(
            "transform: rotate({}deg); transition: transform {}ms cubic-bezier(0.15, 0.85, 0.25, 1);",
            props.angle, duration
        )
    } else {
        format!(
            "transform: rotate({}deg); transition: transform 500ms cubic-bezier(0, 0, 0.2, 1);",
            props.angle
        )
    };

    html! {
        <div class="relative h-full w-full">
            // Fixed pointer at 12 o'clock; the wheel turns underneath it.
            <div class="pointer-events-none absolute top-0 left-1/2 z-20 -translate-x-1/2">
                <div class="flex flex-col items-center">
                    <div class="h-0 w-0 border-t-[40px] border-r-[25px] border-l-[25px] border-t-red-600 border-r-transparent border-l-transparent drop-shadow-xl"></div>
                    <div class="rounded-full border-2 border-yellow-300 bg-gradient-to-r from-red-600 to-red-700 px-5 py-1 text-sm font-bold text-white shadow-lg">
                        {"WINNER"}
                    </div>
                </div>
            </div>

            <canvas
                ref={canvas_ref}
                width={CANVAS_SIZE.to_string()}
                height={CANVAS_SIZE.to_string()}
                class="w-full max-w-[400px] h-auto mx-auto block"
                {style}
            />
        </div>
    }
}

fn draw_wheel(
    context: &CanvasRenderingContext2d,
    size: f64,
    items: &[Item],
    winner: &Option<Item>,
    spinning: bool,
) {
    let center = size / 2.0;
    let radius = center * 0.85;

    context.clear_rect(0.0, 0.0, size, size);

    // Outer rim
    context.begin_path();
    let _ = context.arc(center, center, radius + 10.0, 0.0, 2.0 * PI);
    context.set_fill_style_str("#f8f9fa");
    context.fill();
    context.set_line_width(3.0);
    context.set_stroke_style_str("#343a40");
    context.stroke();

    if items.is_empty() {
        context.set_fill_style_str("#adb5bd");
        context.set_font("bold 16px 'Segoe UI', Roboto, system-ui, sans-serif");
        context.set_text_align("center");
        context.set_text_baseline("middle");
        let _ = context.fill_text("Add items to spin", center, center);
        return;
    }

    // Wedge i spans [i*arc, (i+1)*arc) clockwise from 12 o'clock, the same
    // layout the angle mapper assumes. Canvas zero is at 3 o'clock, hence
    // the -PI/2 shift.
    let arc = 2.0 * PI / items.len() as f64;

    for (index, item) in items.iter().enumerate() {
        let start = -PI / 2.0 + index as f64 * arc;
        let end = start + arc;
        let color = COLORS[index % COLORS.len()];
        let highlighted = !spinning && winner.as_ref().is_some_and(|w| w.id == item.id);

        context.begin_path();
        context.move_to(center, center);
        let _ = context.arc(center, center, radius, start, end);
        context.close_path();

        if highlighted {
            context.save();
            context.set_shadow_color("rgba(255, 215, 0, 0.9)");
            context.set_shadow_blur(25.0);
            context.set_fill_style_str(&lighten_color(color, 20.0));
        } else {
            context.set_fill_style_str(color);
        }
        context.fill();
        if highlighted {
            context.restore();
            context.set_stroke_style_str("#FFD700");
            context.set_line_width(4.0);
        } else {
            context.set_stroke_style_str("#FFFFFF");
            context.set_line_width(2.0);
        }
        context.stroke();

        draw_label(context, center, radius, start + arc / 2.0, color, item, highlighted);
    }

    // Hub
    context.begin_path();
    let _ = context.arc(center, center, radius * 0.15, 0.0, 2.0 * PI);
    context.set_fill_style_str("#FFFFFF");
    context.fill();
    context.set_line_width(2.0);
    context.set_stroke_style_str("#343a40");
    context.stroke();

    context.set_fill_style_str("#343a40");
    context.set_font("bold 16px 'Segoe UI', Roboto, system-ui, sans-serif");
    context.set_text_align("center");
    context.set_text_baseline("middle");
    let _ = context.fill_text("SpinWheel", center, center);
}

fn draw_label(
    context: &CanvasRenderingContext2d,
    center: f64,
    radius: f64,
    mid_angle: f64,
    wedge_color: &str,
    item: &Item,
    highlighted: bool,
) {
    context.save();
    let _ = context.translate(center, center);
    let _ = context.rotate(mid_angle);
    context.set_text_align("right");
    context.set_text_baseline("middle");

    context.set_fill_style_str(if color_brightness(wedge_color) < 128.0 {
        "#FFFFFF"
    } else {
        "#000000"
    });
    context.set_font(if highlighted {
        "bold 14px Arial"
    } else {
        "bold 13px Arial"
    });

    let max_width = radius * 0.6;
    let mut label = item.label.clone();
    let full_width = context
        .measure_text(&label)
        .map(|m| m.width())
        .unwrap_or(0.0);
    if full_width > max_width {
        let keep = (label.chars().count() as f64 * max_width / full_width) as usize;
        label = label.chars().take(keep.max(1)).collect::<String>() + "...";
    }

    let _ = context.fill_text(&label, radius * 0.75, 0.0);
    context.restore();
}
