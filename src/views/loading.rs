use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};

/// Indicador de carga compartido por las pantallas
pub fn render_loading() -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("loading").build();

    let spinner = ElementBuilder::new("div")?.class("spinner").build();
    let text = ElementBuilder::new("p")?
        .class("loading-text")
        .text("Carregando...")
        .build();

    append_child(&container, &spinner)?;
    append_child(&container, &text)?;

    Ok(container)
}
