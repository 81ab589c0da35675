//! Shared handle the event handlers, the frame loop and the exported API act through.

use crate::audio::WebAudioBackend;
use crate::glyphs::CanvasGlyphSource;
use crate::{overlay, ui};
use ember_core::{AmbientType, Engine, MoodHandle, RenderMode};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub type WebEngine = Engine<WebAudioBackend>;

#[derive(Clone)]
pub struct App {
    pub engine: Rc<RefCell<WebEngine>>,
    pub glyphs: Rc<CanvasGlyphSource>,
    pub mood: MoodHandle,
    pub document: web::Document,
}

impl App {
    pub fn pointer_pressed(&self, pos: Vec2) {
        if let Err(e) = self.engine.borrow_mut().pointer_pressed(pos) {
            log::warn!("[audio] {}", e);
        }
    }

    pub fn pointer_dragged(&self, pos: Vec2) {
        if let Err(e) = self.engine.borrow_mut().pointer_dragged(pos) {
            log::warn!("[audio] {}", e);
        }
    }

    pub fn select_ambient(&self, kind: AmbientType) -> AmbientType {
        let result = self.engine.borrow_mut().select_ambient(kind);
        let active = match result {
            Ok(active) => active,
            Err(e) => {
                log::warn!("[audio] could not start {}: {}", kind.name(), e);
                AmbientType::Off
            }
        };
        ui::sync_ambient_buttons(&self.document, active);
        active
    }

    pub fn toggle_mode(&self) -> RenderMode {
        let mode = self.engine.borrow_mut().toggle_mode();
        ui::sync_mode_button(&self.document, mode);
        mode
    }

    pub fn burn(&self, text: &str) -> usize {
        self.engine.borrow_mut().burn_text(text, self.glyphs.as_ref())
    }

    /// Burn whatever is in the modal's text field and close it.
    pub fn submit_burn(&self) -> usize {
        let text = overlay::take_text(&self.document);
        overlay::hide(&self.document);
        self.burn(&text)
    }

    pub fn particle_count(&self) -> usize {
        self.engine.borrow().particles().len()
    }
}
