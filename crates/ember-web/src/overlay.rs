//! The "burn a thought" modal: a text field plus submit/cancel buttons.

use wasm_bindgen::JsCast;
use web_sys as web;

pub const MODAL_ID: &str = "burn-modal";
pub const INPUT_ID: &str = "burn-input";

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(MODAL_ID) {
        let _ = el.set_attribute("style", "");
    }
    if let Some(input) = input(document) {
        let _ = input.focus();
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(MODAL_ID) {
        let _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_open(document: &web::Document) -> bool {
    document
        .get_element_by_id(MODAL_ID)
        .map(|el| {
            !el.get_attribute("style")
                .map(|s| s.contains("display:none"))
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

fn input(document: &web::Document) -> Option<web::HtmlInputElement> {
    document
        .get_element_by_id(INPUT_ID)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
}

/// Read and clear the text field.
pub fn take_text(document: &web::Document) -> String {
    match input(document) {
        Some(input) => {
            let text = input.value();
            input.set_value("");
            text
        }
        None => String::new(),
    }
}
