use crate::app::App;
use crate::overlay;
use ember_core::AmbientType;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn ambient_for_key(key: &str) -> Option<AmbientType> {
    match key {
        "1" => Some(AmbientType::Brown),
        "2" => Some(AmbientType::Pink),
        "3" => Some(AmbientType::White),
        "4" => Some(AmbientType::Tone432),
        "0" | "m" | "M" => Some(AmbientType::Off),
        _ => None,
    }
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, app: &App) {
    let key = ev.key();
    // the modal's text field gets every other key
    if overlay::is_open(&app.document) {
        match key.as_str() {
            "Escape" => {
                overlay::hide(&app.document);
                ev.prevent_default();
            }
            "Enter" => {
                app.submit_burn();
                ev.prevent_default();
            }
            _ => {}
        }
        return;
    }
    if let Some(kind) = ambient_for_key(&key) {
        app.select_ambient(kind);
        return;
    }
    if key.eq_ignore_ascii_case("b") {
        app.toggle_mode();
    }
}

pub fn wire_global_keydown(app: App) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_global_keydown(&ev, &app);
        }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
