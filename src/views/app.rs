// ============================================================================
// APP VIEW - Despacho de pantallas
// ============================================================================
// La pantalla activa es una derivación pura del estado: sin identidad se
// muestra el login; con una solicitación seleccionada, el detalle; si no,
// la lista.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::state::AppState;
use crate::views::{render_details, render_home, render_sign_in};

/// Renderizar la pantalla activa
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    if !state.auth.is_logged_in() {
        return render_sign_in(state);
    }

    if let Some(order_id) = state.get_selected_order_id() {
        return render_details(state, &order_id);
    }

    render_home(state)
}
