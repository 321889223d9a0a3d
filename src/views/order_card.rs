use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::order::{OrderStatus, OrderSummary};
use crate::state::AppState;

/// Card de una solicitación en la lista. El click navega al detalle
/// pasando solo el id (opaco).
pub fn render_order_card(state: &AppState, order: &OrderSummary) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?.class("order-card").build();

    let info = ElementBuilder::new("div")?.class("order-info").build();

    let patrimony = ElementBuilder::new("h3")?
        .class("order-patrimony")
        .text(&format!("Patrimônio {}", order.patrimony))
        .build();

    let when = ElementBuilder::new("div")?
        .class("order-when")
        .text(&format!("🕒 {}", order.when))
        .build();

    append_child(&info, &patrimony)?;
    append_child(&info, &when)?;

    let badge = match order.status {
        OrderStatus::Open => ElementBuilder::new("div")?
            .class("order-status open")
            .text("⏳ Em andamento")
            .build(),
        OrderStatus::Closed => ElementBuilder::new("div")?
            .class("order-status closed")
            .text("✅ Finalizado")
            .build(),
    };

    append_child(&card, &info)?;
    append_child(&card, &badge)?;

    {
        let state = state.clone();
        let order_id = order.id.clone();
        on_click(&card, move |_| {
            state.select_order(&order_id);
        })?;
    }

    Ok(card)
}
