//! Canvas 2D drawing of the playfield

#![allow(deprecated)] // web-sys fill/stroke style setters

use std::f64::consts::PI;

use game_core::{Arena, Side, Snapshot};
use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const DIVIDER_DASH: [f64; 2] = [20.0, 12.0];
const DIVIDER_COLOR: &str = "#555";
const FOREGROUND: &str = "#fff";

/// Draws paddles, ball and the center divider onto a 2D canvas
pub struct CanvasRenderer {
    context: CanvasRenderingContext2d,
    dash: JsValue,
    no_dash: JsValue,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Failed to get 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let dash: js_sys::Array = DIVIDER_DASH.iter().map(|&d| JsValue::from_f64(d)).collect();

        Ok(Self {
            context,
            dash: dash.into(),
            no_dash: js_sys::Array::new().into(),
        })
    }

    fn draw_divider(&self, arena: &Arena) {
        let ctx = &self.context;
        let x = f64::from(arena.divider_x());

        let _ = ctx.set_line_dash(&self.dash);
        ctx.set_stroke_style(&JsValue::from_str(DIVIDER_COLOR));
        ctx.begin_path();
        ctx.move_to(x, 0.0);
        ctx.line_to(x, f64::from(arena.height));
        ctx.stroke();
        let _ = ctx.set_line_dash(&self.no_dash);
    }

    fn draw_paddle(&self, arena: &Arena, side: Side, y: f32) {
        let rect = arena.paddle_rect(side, y);
        self.context.fill_rect(
            f64::from(rect.min.x),
            f64::from(rect.min.y),
            f64::from(rect.width()),
            f64::from(rect.height()),
        );
    }

    fn draw_ball(&self, arena: &Arena, x: f32, y: f32) {
        let ctx = &self.context;
        let center = arena.ball_rect(Vec2::new(x, y)).center();

        ctx.begin_path();
        let _ = ctx.arc(
            f64::from(center.x),
            f64::from(center.y),
            f64::from(arena.ball_radius()),
            0.0,
            2.0 * PI,
        );
        ctx.fill();
    }
}

impl game_core::Renderer for CanvasRenderer {
    fn draw(&mut self, arena: &Arena, snapshot: &Snapshot) {
        self.context.clear_rect(
            0.0,
            0.0,
            f64::from(arena.width),
            f64::from(arena.height),
        );

        self.draw_divider(arena);

        self.context.set_fill_style(&JsValue::from_str(FOREGROUND));
        self.draw_paddle(arena, Side::Left, snapshot.left_y);
        self.draw_paddle(arena, Side::Right, snapshot.right_y);
        self.draw_ball(arena, snapshot.ball_x, snapshot.ball_y);
    }
}
