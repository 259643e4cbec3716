// ============================================================================
// CDL · CMMS - Cuadro de mando de mantenimiento (cliente WASM)
// ============================================================================
// Arquitectura MVVM:
// - views: renderizado DOM y cableado de eventos
// - services: SOLO comunicación con el backend GET/POST
// - state: estado de aplicación con Rc<RefCell>
// - models: estructuras compartidas con el backend
// - domain: lógica pura (normalización, matcher de planificación)
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod domain;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod utils;
pub mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;

// Instancia viva de la aplicación durante toda la sesión de página
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if config::CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("CDL · CMMS arrancando");

    let app = App::new()?;
    app.boot();

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    Ok(())
}
