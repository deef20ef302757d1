//! Rendering: replays a [`Scene`] onto a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a scene built by [`crate::scene::build`] and produces pixels;
//! it does not mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::scene::{self, PathCmd, Primitive, Scene, Stroke, TextAlign};

/// Draw `scene` over a canvas of `size` (width, height) pixels.
///
/// `plan` is drawn for [`Primitive::Plan`] when present.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn paint(
    ctx: &CanvasRenderingContext2d,
    scene: &Scene,
    plan: Option<&HtmlImageElement>,
    size: (f64, f64),
) -> Result<(), JsValue> {
    let (width, height) = size;
    ctx.clear_rect(0.0, 0.0, width, height);

    for primitive in &scene.primitives {
        match primitive {
            Primitive::Plan => {
                if let Some(img) = plan {
                    ctx.draw_image_with_html_image_element_and_dw_and_dh(img, 0.0, 0.0, width, height)?;
                }
            }
            Primitive::Grid { step, color } => draw_grid(ctx, *step, color, width, height),
            Primitive::Path { cmds, stroke } => draw_path(ctx, cmds, stroke)?,
            Primitive::Rect { rect, stroke, fill } => {
                ctx.save();
                if let Some(fill) = fill {
                    ctx.set_fill_style_str(fill);
                    ctx.fill_rect(rect.x, rect.y, rect.w, rect.h);
                }
                if let Some(stroke) = stroke {
                    apply_stroke(ctx, stroke)?;
                    ctx.stroke_rect(rect.x, rect.y, rect.w, rect.h);
                }
                ctx.restore();
            }
            Primitive::Circle { center, radius, fill } => {
                ctx.set_fill_style_str(fill);
                ctx.begin_path();
                ctx.arc(center.x, center.y, *radius, 0.0, 2.0 * PI)?;
                ctx.fill();
            }
            Primitive::Text { at, text, font, color, align } => {
                ctx.save();
                ctx.set_fill_style_str(color);
                ctx.set_font(font);
                match align {
                    TextAlign::Left => ctx.set_text_align("left"),
                    TextAlign::Center => {
                        ctx.set_text_align("center");
                        ctx.set_text_baseline("middle");
                    }
                }
                ctx.fill_text(text, at.x, at.y)?;
                ctx.restore();
            }
        }
    }

    Ok(())
}

fn apply_stroke(ctx: &CanvasRenderingContext2d, stroke: &Stroke) -> Result<(), JsValue> {
    ctx.set_stroke_style_str(&stroke.color);
    ctx.set_line_width(stroke.width);
    let dash_array = js_sys::Array::new();
    if stroke.dashed {
        for len in scene::dash_pattern() {
            dash_array.push(&len.into());
        }
    }
    ctx.set_line_dash(&dash_array)
}

fn draw_path(ctx: &CanvasRenderingContext2d, cmds: &[PathCmd], stroke: &Stroke) -> Result<(), JsValue> {
    ctx.save();
    apply_stroke(ctx, stroke)?;
    ctx.set_line_cap("round");
    ctx.set_line_join("round");

    ctx.begin_path();
    for cmd in cmds {
        match *cmd {
            PathCmd::MoveTo(p) => ctx.move_to(p.x, p.y),
            PathCmd::LineTo(p) => ctx.line_to(p.x, p.y),
            PathCmd::ArcTo { ctrl, to, radius } => ctx.arc_to(ctrl.x, ctrl.y, to.x, to.y, radius)?,
        }
    }
    ctx.stroke();
    ctx.restore();
    Ok(())
}

fn draw_grid(ctx: &CanvasRenderingContext2d, step: f64, color: &str, width: f64, height: f64) {
    if step <= 0.0 {
        return;
    }
    ctx.save();
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(0.5);
    ctx.begin_path();
    let mut x = 0.0;
    while x <= width {
        ctx.move_to(x, 0.0);
        ctx.line_to(x, height);
        x += step;
    }
    let mut y = 0.0;
    while y <= height {
        ctx.move_to(0.0, y);
        ctx.line_to(width, y);
        y += step;
    }
    ctx.stroke();
    ctx.restore();
}
