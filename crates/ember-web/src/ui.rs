use ember_core::{AmbientType, RenderMode};
use web_sys as web;

/// Mark the `[data-ambient]` button for `active` with the `active` class.
pub fn sync_ambient_buttons(document: &web::Document, active: AmbientType) {
    for el in crate::dom::query_all(document, "[data-ambient]") {
        let is_active = el
            .get_attribute("data-ambient")
            .and_then(|name| AmbientType::from_name(&name))
            .map(|kind| kind == active && kind != AmbientType::Off)
            .unwrap_or(false);
        let _ = el.class_list().toggle_with_force("active", is_active);
    }
}

pub fn sync_mode_button(document: &web::Document, mode: RenderMode) {
    if let Some(el) = document.get_element_by_id("mode-toggle") {
        let label = match mode {
            RenderMode::Flow => "breathe",
            RenderMode::Breathe => "flow",
        };
        el.set_text_content(Some(label));
    }
}
