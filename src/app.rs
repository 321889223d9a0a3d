// ============================================================================
// APP - Aplicación principal
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::services::SessionService;
use crate::state::AppState;
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Option<Element>,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();

        // Restaurar la identidad desde storage: un reload no cierra sesión
        if let Some(identity) = SessionService::new().load_identity() {
            log::info!("💾 [APP] Identidad encontrada en storage: {}", identity.email);
            state.auth.set_identity(Some(identity));
            state.orders.mark_stale();
        }

        // Re-render automático al cambiar el estado, batcheado con un
        // Timeout(0) para agrupar varios updates del mismo tick
        state.subscribe_to_changes(move || {
            use gloo_timers::callback::Timeout;
            Timeout::new(0, move || {
                crate::rerender_app();
            })
            .forget();
        });

        Ok(Self {
            state,
            root: Some(root),
        })
    }

    /// Renderizar aplicación
    pub fn render(&mut self) -> Result<(), JsValue> {
        if let Some(root) = &self.root {
            // Limpiar contenido anterior
            set_inner_html(root, "");

            let view = render_app(&self.state)?;
            append_child(root, &view)?;
        }
        Ok(())
    }
}
