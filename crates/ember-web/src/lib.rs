#![cfg(target_arch = "wasm32")]
//! Browser front-end: Canvas 2D rendering, WebAudio ambient sound, DOM wiring
//! and the small API the host page drives mood and burns through.

mod app;
mod audio;
mod dom;
mod events;
mod frame;
mod glyphs;
mod input;
mod overlay;
mod render;
mod ui;

use app::App;
use audio::WebAudioBackend;
use ember_core::{AmbientType, Engine, EngineConfig, MoodHandle, Painter};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

const CANVAS_ID: &str = "ember-canvas";

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn with_app<T>(f: impl FnOnce(&App) -> T) -> Option<T> {
    APP.with(|slot| slot.borrow().as_ref().map(f))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ember-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let (width, height) = dom::sync_canvas_backing_size(&canvas);
    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let config = EngineConfig::default().with_seed(seed);

    let mut painter = render::CanvasPainter::new(
        dom::context_2d(&canvas)?,
        width,
        height,
        &config.font_family,
    );
    painter.clear();
    let glyphs = glyphs::CanvasGlyphSource::new(&document, &config.font_family)?;

    let mood = MoodHandle::default();
    let engine = Engine::new(
        config,
        width as f32,
        height as f32,
        mood.clone(),
        Box::new(WebAudioBackend::connect),
    )?;

    let app = App {
        engine: Rc::new(RefCell::new(engine)),
        glyphs: Rc::new(glyphs),
        mood,
        document: document.clone(),
    };
    let painter = Rc::new(RefCell::new(painter));

    events::wire_pointer_handlers(&canvas, &app);
    events::wire_resize(&canvas, &app, painter.clone());
    events::wire_global_keydown(app.clone());
    events::wire_buttons(&app);
    overlay::hide(&document);
    ui::sync_mode_button(&document, app.engine.borrow().mode());

    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
        engine: app.engine.clone(),
        painter,
        started: Instant::now(),
    })));

    APP.with(|slot| *slot.borrow_mut() = Some(app));
    log::info!("[init] {}x{} canvas ready", width, height);
    Ok(())
}

/// Valence and energy in `0..=1`; out-of-range values are clamped.
#[wasm_bindgen]
pub fn set_mood(valence: f32, energy: f32) {
    if with_app(|app| app.mood.set(valence, energy)).is_none() {
        log::warn!("set_mood called before init");
    }
}

/// Returns the number of particles the text produced.
#[wasm_bindgen]
pub fn burn_text(text: &str) -> usize {
    with_app(|app| app.burn(text)).unwrap_or(0)
}

/// `"off"`, `"brown"`, `"white"`, `"pink"` or `"432"`. Returns the active type's name.
#[wasm_bindgen]
pub fn select_ambient(name: &str) -> String {
    let Some(kind) = AmbientType::from_name(name) else {
        log::warn!("unknown ambient type '{}'", name);
        return AmbientType::Off.name().to_string();
    };
    with_app(|app| app.select_ambient(kind))
        .unwrap_or(AmbientType::Off)
        .name()
        .to_string()
}

/// Returns true when the breathing guide is now showing.
#[wasm_bindgen]
pub fn toggle_mode() -> bool {
    with_app(|app| app.toggle_mode() == ember_core::RenderMode::Breathe).unwrap_or(false)
}

#[wasm_bindgen]
pub fn particle_count() -> usize {
    with_app(|app| app.particle_count()).unwrap_or(0)
}
