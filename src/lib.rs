// ============================================================================
// HELP DESK PWA - FRONTEND MVVM (RUST PURO)
// ============================================================================
// Arquitectura MVVM:
// - Views: funciones que renderizan DOM (sin lógica)
// - ViewModels: lógica de pantalla (sesión, lista, detalle)
// - Services: SOLO comunicación con el backend + storage de sesión
// - State: state management con Rc<RefCell>
// - Models: estructuras compartidas con el backend + decode tipado
// ============================================================================

mod app;
mod dom;
mod models;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;

// Instancia global de la app (un solo hilo lógico en wasm)
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Panic hook para mejor debugging en la consola del navegador
    console_error_panic_hook::set_once();

    wasm_logger::init(Config::default());
    log::info!("🚀 Help Desk PWA iniciando...");

    let mut app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Re-renderizar la aplicación completa
pub fn rerender_app() {
    APP.with(|app_cell| {
        if let Some(ref mut app) = *app_cell.borrow_mut() {
            if let Err(e) = app.render() {
                log::error!("❌ [APP] Error re-renderizando: {:?}", e);
            }
        }
    });
}
