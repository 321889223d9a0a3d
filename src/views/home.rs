// ============================================================================
// HOME VIEW - Lista de solicitações con filtro por estado
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::order::OrderStatus;
use crate::state::AppState;
use crate::viewmodels::{AuthViewModel, OrdersViewModel};
use crate::views::{render_loading, render_order_card};

/// Renderizar la lista de solicitações
pub fn render_home(state: &AppState) -> Result<Element, JsValue> {
    // Recargar solo cuando la lista está marcada como stale (one-shot reads)
    maybe_reload(state);

    let screen = ElementBuilder::new("div")?.class("home-screen").build();

    append_child(&screen, &create_header(state)?)?;

    let content = ElementBuilder::new("div")?.class("home-content").build();

    // Título + contador de solicitações proyectadas
    let heading_row = ElementBuilder::new("div")?.class("heading-row").build();
    let heading = ElementBuilder::new("h2")?.text("Meus chamados").build();
    let counter = ElementBuilder::new("span")?
        .class("order-count")
        .text(&state.orders.count().to_string())
        .build();
    append_child(&heading_row, &heading)?;
    append_child(&heading_row, &counter)?;
    append_child(&content, &heading_row)?;

    // Filtros: el backend filtra, los chips solo cambian la partición pedida
    let filter_row = ElementBuilder::new("div")?.class("filter-row").build();
    append_child(
        &filter_row,
        &create_filter_chip(state, OrderStatus::Open, "Em andamento")?,
    )?;
    append_child(
        &filter_row,
        &create_filter_chip(state, OrderStatus::Closed, "Finalizados")?,
    )?;
    append_child(&content, &filter_row)?;

    // Tres estados de display distintos: cargando, error y vacío
    if state.orders.is_loading() {
        append_child(&content, &render_loading()?)?;
    } else if let Some(message) = state.orders.get_error() {
        append_child(&content, &create_error_state(state, &message)?)?;
    } else if state.orders.count() == 0 {
        append_child(&content, &create_empty_state(state.orders.get_filter())?)?;
    } else {
        let list = ElementBuilder::new("div")?.class("order-list").build();
        for order in state.orders.get_orders() {
            append_child(&list, &render_order_card(state, &order)?)?;
        }
        append_child(&content, &list)?;
    }

    append_child(&screen, &content)?;

    Ok(screen)
}

/// Disparar la recarga de la lista si está stale y no hay otra en vuelo
fn maybe_reload(state: &AppState) {
    let identity = match state.auth.get_identity() {
        Some(identity) => identity,
        None => return,
    };

    if state.orders.is_loading() {
        return;
    }
    if !state.orders.take_stale() {
        return;
    }

    state.orders.set_loading(true);
    let requested_filter = state.orders.get_filter();
    let state = state.clone();

    spawn_local(async move {
        let vm = OrdersViewModel::new();
        let result = vm.load_orders(&identity, requested_filter).await;

        // Respuestas tardías: si el usuario cambió el filtro o salió de la
        // sesión mientras la request estaba en vuelo, se descartan
        if !state.auth.is_logged_in() {
            log::info!("ℹ️ [HOME] Respuesta descartada: sesión terminada");
            return;
        }
        if state.orders.get_filter() != requested_filter {
            log::info!("ℹ️ [HOME] Respuesta descartada: el filtro cambió");
            state.orders.set_loading(false);
            state.notify_change();
            return;
        }

        match result {
            Ok(summaries) => {
                log::info!("✅ [HOME] {} solicitações en la lista", summaries.len());
                state.orders.set_orders(summaries);
            }
            Err(e) => {
                state.orders.set_error(Some(e.user_message().to_string()));
            }
        }
        state.notify_change();
    });
}

fn create_header(state: &AppState) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("header")?.class("app-header").build();

    let title = ElementBuilder::new("h1")?.text("Help Desk").build();

    let logout_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .attr("title", "Sair")?
        .class("btn-icon-header btn-logout")
        .text("🚪")
        .build();

    {
        let state = state.clone();
        on_click(&logout_btn, move |_| {
            AuthViewModel::new().sign_out();
            state.reset_session();
        })?;
    }

    append_child(&header, &title)?;
    append_child(&header, &logout_btn)?;

    Ok(header)
}

fn create_filter_chip(
    state: &AppState,
    status: OrderStatus,
    title: &str,
) -> Result<Element, JsValue> {
    let active = state.orders.get_filter() == status;

    let chip = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class(if active {
            "filter-chip active"
        } else {
            "filter-chip"
        })
        .text(title)
        .build();

    {
        let state = state.clone();
        on_click(&chip, move |_| {
            if state.orders.get_filter() != status {
                state.orders.set_filter(status);
                state.notify_change();
            }
        })?;
    }

    Ok(chip)
}

fn create_empty_state(filter: OrderStatus) -> Result<Element, JsValue> {
    let empty = ElementBuilder::new("div")?.class("empty-state").build();

    let icon = ElementBuilder::new("div")?
        .class("empty-icon")
        .text("💬")
        .build();

    let message = match filter {
        OrderStatus::Open => "Você ainda não possui\nsolicitações em andamento",
        OrderStatus::Closed => "Você ainda não possui\nsolicitações finalizadas",
    };

    let text = ElementBuilder::new("p")?
        .class("empty-text")
        .text(message)
        .build();

    append_child(&empty, &icon)?;
    append_child(&empty, &text)?;

    Ok(empty)
}

fn create_error_state(state: &AppState, message: &str) -> Result<Element, JsValue> {
    let error = ElementBuilder::new("div")?.class("list-error").build();

    let icon = ElementBuilder::new("div")?
        .class("error-icon")
        .text("⚠️")
        .build();

    let text = ElementBuilder::new("p")?
        .class("error-text")
        .text(message)
        .build();

    let retry_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-retry")
        .text("Tentar novamente")
        .build();

    {
        let state = state.clone();
        on_click(&retry_btn, move |_| {
            state.orders.set_error(None);
            state.orders.mark_stale();
            state.notify_change();
        })?;
    }

    append_child(&error, &icon)?;
    append_child(&error, &text)?;
    append_child(&error, &retry_btn)?;

    Ok(error)
}
