//! Glyph outlines from the browser's own font stack.
//!
//! The string is rasterized into an offscreen canvas, read back as a
//! coverage mask, and traced with [`ember_core::trace_outline`].

use ember_core::{trace_outline, CoverageMask, GlyphOutlineSource, TextBounds};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

const PAD_PX: f64 = 4.0;

pub struct CanvasGlyphSource {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    font_family: String,
}

impl CanvasGlyphSource {
    pub fn new(document: &web::Document, font_family: &str) -> anyhow::Result<Self> {
        let canvas = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        let ctx = crate::dom::context_2d(&canvas)?;
        Ok(Self {
            canvas,
            ctx,
            font_family: font_family.to_string(),
        })
    }

    fn set_font(&self, font_size: f32) {
        self.ctx
            .set_font(&format!("bold {}px {}", font_size, self.font_family));
    }

    fn metrics(&self, text: &str, font_size: f32) -> Option<(f64, f64, f64)> {
        self.set_font(font_size);
        let m = self.ctx.measure_text(text).ok()?;
        let ascent = m.actual_bounding_box_ascent();
        let descent = m.actual_bounding_box_descent();
        // older engines report zero ascent
        let ascent = if ascent > 0.0 { ascent } else { font_size as f64 * 0.8 };
        Some((m.width(), ascent, descent.max(0.0)))
    }

    fn rasterize(&self, text: &str, font_size: f32) -> Option<(CoverageMask, f64)> {
        let (width, ascent, descent) = self.metrics(text, font_size)?;
        let w = (width + PAD_PX * 2.0).ceil() as u32;
        let h = (ascent + descent + PAD_PX * 2.0).ceil() as u32;
        self.canvas.set_width(w.max(1));
        self.canvas.set_height(h.max(1));

        // resizing reset the context
        self.set_font(font_size);
        self.ctx.set_text_baseline("alphabetic");
        self.ctx.set_text_align("left");
        self.ctx.set_fill_style_str("rgb(255,255,255)");
        let baseline = PAD_PX + ascent;
        self.ctx.fill_text(text, PAD_PX, baseline).ok()?;

        let image = self
            .ctx
            .get_image_data(0.0, 0.0, w as f64, h as f64)
            .map_err(|e| log::warn!("[glyphs] getImageData failed: {:?}", e))
            .ok()?;
        let mask = CoverageMask::from_rgba(w as usize, h as usize, &image.data().0)?;
        Some((mask, baseline))
    }
}

impl GlyphOutlineSource for CanvasGlyphSource {
    fn text_bounds(&self, text: &str, font_size: f32) -> TextBounds {
        match self.metrics(text, font_size) {
            Some((width, ascent, _)) => TextBounds {
                width: width as f32,
                height: ascent as f32,
            },
            None => TextBounds::default(),
        }
    }

    fn text_to_points(&self, text: &str, origin: Vec2, font_size: f32, density: f32) -> Vec<Vec2> {
        let Some((mask, baseline)) = self.rasterize(text, font_size) else {
            log::warn!("[glyphs] could not rasterize '{}'", text);
            return Vec::new();
        };
        let mask_origin = origin - Vec2::new(PAD_PX as f32, baseline as f32);
        trace_outline(&mask, mask_origin, density)
    }
}
