use crate::app::App;
use crate::dom;
use crate::overlay;
use ember_core::AmbientType;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

pub fn wire_buttons(app: &App) {
    let document = &app.document;
    {
        let app = app.clone();
        dom::add_click_listener(document, "mode-toggle", move || {
            app.toggle_mode();
        });
    }
    {
        let doc = document.clone();
        dom::add_click_listener(document, "burn-open", move || overlay::show(&doc));
    }
    {
        let app = app.clone();
        dom::add_click_listener(document, "burn-submit", move || {
            app.submit_burn();
        });
    }
    {
        let doc = document.clone();
        dom::add_click_listener(document, "burn-cancel", move || overlay::hide(&doc));
    }

    for el in dom::query_all(document, "[data-ambient]") {
        let Some(kind) = el
            .get_attribute("data-ambient")
            .and_then(|name| AmbientType::from_name(&name))
        else {
            log::warn!("[ui] unknown data-ambient on {}", el.id());
            continue;
        };
        let app = app.clone();
        let closure = Closure::wrap(Box::new(move || {
            app.select_ambient(kind);
        }) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
