// ============================================================================
// DETAILS VIEW - Pantalla de detalle de una solicitación
// ============================================================================
// Carga one-shot del documento + cierre con solución. Cuando la
// solicitación ya está cerrada la pantalla pasa a solo lectura: el campo
// de solución no es editable y el botón de cierre no se renderiza.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlTextAreaElement};

use crate::dom::{
    append_child, create_element, on_click, on_input, set_attribute, set_class_name,
    set_text_content, show_notice, ElementBuilder,
};
use crate::models::order::{OrderDetails, OrderStatus};
use crate::state::AppState;
use crate::viewmodels::details_viewmodel::validate_solution;
use crate::viewmodels::DetailsViewModel;
use crate::views::render_loading;

/// Renderizar la pantalla de detalle
pub fn render_details(state: &AppState, order_id: &str) -> Result<Element, JsValue> {
    maybe_load(state, order_id);

    let screen = ElementBuilder::new("div")?.class("details-screen").build();

    append_child(&screen, &create_header(state)?)?;

    if state.details.is_loading() {
        append_child(&screen, &render_loading()?)?;
        return Ok(screen);
    }

    if let Some(message) = state.details.get_error() {
        let error = ElementBuilder::new("div")?.class("details-error").build();
        let icon = ElementBuilder::new("div")?
            .class("error-icon")
            .text("⚠️")
            .build();
        let text = ElementBuilder::new("p")?
            .class("error-text")
            .text(&message)
            .build();
        append_child(&error, &icon)?;
        append_child(&error, &text)?;
        append_child(&screen, &error)?;
        return Ok(screen);
    }

    if let Some(order) = state.details.get_order() {
        append_child(&screen, &create_status_banner(&order)?)?;
        append_child(&screen, &create_body(state, order_id, &order)?)?;
    }

    Ok(screen)
}

/// Disparar la carga one-shot si esta vista todavía no tiene datos
fn maybe_load(state: &AppState, order_id: &str) {
    let details = &state.details;
    if details.is_loading() || details.get_order().is_some() || details.get_error().is_some() {
        return;
    }

    let identity = match state.auth.get_identity() {
        Some(identity) => identity,
        None => return,
    };

    details.begin_load();
    let state = state.clone();
    let requested = order_id.to_string();

    spawn_local(async move {
        let vm = DetailsViewModel::new();
        let result = vm.load_order(&identity, &requested).await;

        // El usuario puede haber vuelto a la lista mientras la request
        // estaba en vuelo: la respuesta tardía se descarta
        if state.get_selected_order_id().as_deref() != Some(requested.as_str()) {
            log::info!("ℹ️ [DETAILS] Respuesta tardía ignorada: {}", requested);
            return;
        }

        match result {
            Ok(order) => state.details.set_order(order),
            Err(e) => {
                log::warn!("⚠️ [DETAILS] No se pudo cargar {}: {}", requested, e);
                state.details.set_load_error(e.user_message().to_string());
            }
        }
        state.notify_change();
    });
}

fn create_header(state: &AppState) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("header")?.class("app-header").build();

    let back_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .attr("title", "Voltar")?
        .class("btn-icon-header btn-back")
        .text("←")
        .build();

    {
        let state = state.clone();
        on_click(&back_btn, move |_| {
            state.go_back();
        })?;
    }

    let title = ElementBuilder::new("h1")?.text("Solicitação").build();

    append_child(&header, &back_btn)?;
    append_child(&header, &title)?;

    Ok(header)
}

fn create_status_banner(order: &OrderDetails) -> Result<Element, JsValue> {
    let banner = match order.status {
        OrderStatus::Open => ElementBuilder::new("div")?
            .class("status-banner open")
            .text("⏳ em andamento")
            .build(),
        OrderStatus::Closed => ElementBuilder::new("div")?
            .class("status-banner closed")
            .text("✅ finalizado")
            .build(),
    };
    Ok(banner)
}

fn create_body(state: &AppState, order_id: &str, order: &OrderDetails) -> Result<Element, JsValue> {
    let body = ElementBuilder::new("div")?.class("details-body").build();

    append_child(
        &body,
        &create_card(
            "🖥️",
            "Equipamento",
            Some(&format!("Patrimônio {}", order.patrimony)),
            Some(&order.when),
        )?,
    )?;

    append_child(
        &body,
        &create_card("📋", "Descrição do problema", Some(&order.description), None)?,
    )?;

    append_child(&body, &create_solution_card(state, order)?)?;

    if !state.details.is_read_only() {
        append_child(&body, &create_close_button(state, order_id)?)?;
    }

    Ok(body)
}

/// Helper para las cards de detalle
fn create_card(
    icon: &str,
    title: &str,
    description: Option<&str>,
    footer: Option<&str>,
) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?.class("detail-card").build();

    let title_row = ElementBuilder::new("div")?.class("card-title").build();
    let icon_span = ElementBuilder::new("span")?
        .class("card-icon")
        .text(icon)
        .build();
    let title_el = ElementBuilder::new("h3")?.text(title).build();
    append_child(&title_row, &icon_span)?;
    append_child(&title_row, &title_el)?;
    append_child(&card, &title_row)?;

    if let Some(description) = description {
        let description_el = ElementBuilder::new("p")?
            .class("card-description")
            .text(description)
            .build();
        append_child(&card, &description_el)?;
    }

    if let Some(footer) = footer {
        let footer_el = ElementBuilder::new("div")?
            .class("card-footer")
            .text(footer)
            .build();
        append_child(&card, &footer_el)?;
    }

    Ok(card)
}

/// Card de solución: textarea editable mientras la solicitación está
/// abierta, solo lectura cuando ya está cerrada
fn create_solution_card(state: &AppState, order: &OrderDetails) -> Result<Element, JsValue> {
    let card = create_card("✅", "Solução", None, None)?;

    let textarea = create_element("textarea")?;
    set_attribute(&textarea, "id", "solution-input")?;
    set_attribute(&textarea, "placeholder", "Descrição da solução")?;
    set_attribute(&textarea, "rows", "6")?;
    set_class_name(&textarea, "solution-input");

    if let Some(input) = textarea.dyn_ref::<HtmlTextAreaElement>() {
        input.set_value(&state.details.get_solution_draft());
    }

    if order.is_read_only() {
        set_attribute(&textarea, "readonly", "true")?;
        set_class_name(&textarea, "solution-input readonly");
    } else {
        // Actualización puramente local del borrador: sin notify, para no
        // re-renderizar en cada tecla
        let details = state.details.clone();
        on_input(&textarea, move |e: web_sys::InputEvent| {
            if let Some(target) = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok())
            {
                details.set_solution_draft(&target.value());
            }
        })?;
    }

    append_child(&card, &textarea)?;

    if let Some(closed_when) = &order.closed_when {
        let footer = ElementBuilder::new("div")?
            .class("card-footer")
            .text(&format!("Encerrado em {}", closed_when))
            .build();
        append_child(&card, &footer)?;
    }

    Ok(card)
}

fn create_close_button(state: &AppState, order_id: &str) -> Result<Element, JsValue> {
    let closing = state.details.is_closing();

    let button = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-close-order")
        .text(if closing {
            "Encerrando..."
        } else {
            "Encerrar solicitação"
        })
        .build();

    if closing {
        set_attribute(&button, "disabled", "true")?;
    }

    {
        let state = state.clone();
        let order_id = order_id.to_string();
        let button = button.clone();
        let button_for_handler = button.clone();

        on_click(&button, move |_| {
            // El flag busy evita un segundo cierre concurrente
            if state.details.is_closing() {
                return;
            }

            let draft = state.details.get_solution_draft();

            // Precondición local: sin solución no se emite escritura remota
            if let Err(e) = validate_solution(&draft) {
                show_notice(e.user_message());
                return;
            }

            let identity = match state.auth.get_identity() {
                Some(identity) => identity,
                None => return,
            };

            state.details.begin_close();
            let _ = set_attribute(&button_for_handler, "disabled", "true");
            set_text_content(&button_for_handler, "Encerrando...");

            let state = state.clone();
            let order_id = order_id.clone();

            spawn_local(async move {
                let vm = DetailsViewModel::new();
                let result = vm.close_order(&identity, &order_id, &draft).await;

                let still_here =
                    state.get_selected_order_id().as_deref() == Some(order_id.as_str());

                match result {
                    Ok(()) => {
                        log::info!("✅ [DETAILS] Solicitación {} encerrada", order_id);
                        if still_here {
                            state.details.finish_close();
                            show_notice("Solicitação encerrada.");
                            state.go_back();
                        } else {
                            // El usuario ya salió: solo refrescar la lista
                            state.orders.mark_stale();
                            state.notify_change();
                        }
                    }
                    Err(e) => {
                        // La solicitación sigue abierta y el borrador se
                        // conserva para reintentar
                        if still_here {
                            show_notice(e.user_message());
                            state.details.fail_close();
                            state.notify_change();
                        }
                    }
                }
            });
        })?;
    }

    Ok(button)
}
