//! HTML canvas 2D backend

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::surface::{Color, Surface, css_color};
use crate::sim::Rect;

/// A [`Surface`] that draws on a `<canvas>` through its 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Grab the canvas' 2D context. None if the browser refuses one.
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, region: Rect) {
        self.ctx.clear_rect(
            region.x as f64,
            region.y as f64,
            region.w as f64,
            region.h as f64,
        );
    }

    fn fill_oval(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        let (rx, ry) = (w as f64 / 2.0, h as f64 / 2.0);
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx.begin_path();
        if self
            .ctx
            .ellipse(
                x as f64 + rx,
                y as f64 + ry,
                rx,
                ry,
                0.0,
                0.0,
                std::f64::consts::TAU,
            )
            .is_ok()
        {
            self.ctx.fill();
        }
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: Color, font_size: f32) {
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx.set_font(&format!("{}px sans-serif", font_size));
        let _ = self.ctx.fill_text(text, x as f64, y as f64);
    }
}
