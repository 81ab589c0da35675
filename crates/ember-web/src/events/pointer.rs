use crate::app::App;
use crate::dom;
use crate::input::{self, PointerState};
use crate::render::CanvasPainter;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn listen(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(web::PointerEvent) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_pointer_handlers(canvas: &web::HtmlCanvasElement, app: &App) {
    let state = Rc::new(RefCell::new(PointerState::default()));

    // pointerdown
    {
        let app = app.clone();
        let state = state.clone();
        let canvas_m = canvas.clone();
        listen(canvas, "pointerdown", move |ev| {
            let pos = input::pointer_canvas_px(&ev, &canvas_m);
            {
                let mut s = state.borrow_mut();
                s.down = true;
                s.id = ev.pointer_id();
            }
            let _ = canvas_m.set_pointer_capture(ev.pointer_id());
            app.pointer_pressed(pos);
            ev.prevent_default();
        });
    }

    // pointermove: only a held pointer draws
    {
        let app = app.clone();
        let state = state.clone();
        let canvas_m = canvas.clone();
        listen(canvas, "pointermove", move |ev| {
            let s = *state.borrow();
            if !s.down || s.id != ev.pointer_id() {
                return;
            }
            app.pointer_dragged(input::pointer_canvas_px(&ev, &canvas_m));
        });
    }

    for event in ["pointerup", "pointercancel"] {
        let state = state.clone();
        let canvas_m = canvas.clone();
        listen(canvas, event, move |ev| {
            let mut s = state.borrow_mut();
            if s.id == ev.pointer_id() {
                s.down = false;
                let _ = canvas_m.release_pointer_capture(ev.pointer_id());
            }
        });
    }
}

/// Keep the backing store, the painter and the engine grid in step with the window.
pub fn wire_resize(canvas: &web::HtmlCanvasElement, app: &App, painter: Rc<RefCell<CanvasPainter>>) {
    let Some(window) = web::window() else {
        return;
    };
    let canvas = canvas.clone();
    let engine = app.engine.clone();
    let closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::sync_canvas_backing_size(&canvas);
        painter.borrow_mut().resize(w, h);
        engine.borrow_mut().resize(w as f32, h as f32);
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
