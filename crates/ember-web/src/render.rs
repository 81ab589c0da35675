//! Canvas 2D implementation of [`Painter`].

use ember_core::{BlendMode, Hsba, Painter, Stroke};
use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
    size: Vec2,
    font_family: String,
}

impl CanvasPainter {
    pub fn new(ctx: web::CanvasRenderingContext2d, width: u32, height: u32, font_family: &str) -> Self {
        ctx.set_line_cap("round");
        Self {
            ctx,
            size: Vec2::new(width as f32, height as f32),
            font_family: font_family.to_string(),
        }
    }

    /// Backing store changed; resizing a canvas wipes it and resets context state.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.size = Vec2::new(width as f32, height as f32);
        self.ctx.set_line_cap("round");
        self.clear();
    }

    fn set_stroke(&self, stroke: Stroke) {
        self.ctx.set_stroke_style_str(&stroke.color.to_css());
        self.ctx.set_line_width(stroke.weight as f64);
    }
}

impl Painter for CanvasPainter {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn set_blend(&mut self, mode: BlendMode) {
        let op = match mode {
            BlendMode::Normal => "source-over",
            BlendMode::Additive => "lighter",
        };
        let _ = self.ctx.set_global_composite_operation(op);
    }

    fn fade(&mut self, alpha: f32) {
        self.ctx.set_fill_style_str(&Hsba::BLACK.with_alpha(alpha).to_css());
        self.ctx
            .fill_rect(0.0, 0.0, self.size.x as f64, self.size.y as f64);
    }

    fn clear(&mut self) {
        let _ = self.ctx.set_global_composite_operation("source-over");
        self.ctx.set_fill_style_str("rgb(0,0,0)");
        self.ctx
            .fill_rect(0.0, 0.0, self.size.x as f64, self.size.y as f64);
    }

    fn line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        self.set_stroke(stroke);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    // a point is a dot as wide as the stroke
    fn point(&mut self, at: Vec2, stroke: Stroke) {
        self.ctx.set_fill_style_str(&stroke.color.to_css());
        self.ctx.begin_path();
        let r = (stroke.weight as f64 / 2.0).max(0.5);
        if self.ctx.arc(at.x as f64, at.y as f64, r, 0.0, TAU).is_ok() {
            self.ctx.fill();
        }
    }

    fn circle(&mut self, center: Vec2, diameter: f32, stroke: Stroke) {
        self.set_stroke(stroke);
        self.ctx.begin_path();
        let r = (diameter as f64 / 2.0).max(0.0);
        if self.ctx.arc(center.x as f64, center.y as f64, r, 0.0, TAU).is_ok() {
            self.ctx.stroke();
        }
    }

    fn text(&mut self, at: Vec2, text: &str, size: f32, color: Hsba) {
        self.ctx
            .set_font(&format!("{}px {}", size, self.font_family));
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx.set_fill_style_str(&color.to_css());
        let _ = self.ctx.fill_text(text, at.x as f64, at.y as f64);
    }
}
