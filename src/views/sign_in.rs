// ============================================================================
// SIGN IN VIEW - Pantalla de acceso
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{
    append_child, create_element, on_input, on_submit, remove_attribute, set_attribute,
    set_class_name, set_text_content, show_notice, ElementBuilder,
};
use crate::models::auth::AuthError;
use crate::services::SessionService;
use crate::state::AppState;
use crate::viewmodels::AuthViewModel;

/// Renderizar pantalla de login
pub fn render_sign_in(state: &AppState) -> Result<Element, JsValue> {
    // Estado local del formulario (en closures)
    let email = Rc::new(RefCell::new(String::new()));
    let password = Rc::new(RefCell::new(String::new()));
    let loading = Rc::new(RefCell::new(false));

    let screen = ElementBuilder::new("div")?.class("login-screen").build();

    let container = ElementBuilder::new("div")?
        .class("login-container")
        .build();

    // Header
    let header = ElementBuilder::new("div")?.class("login-header").build();

    let logo = ElementBuilder::new("div")?
        .class("login-logo")
        .text("🛠️")
        .build();

    let title = ElementBuilder::new("h1")?.text("Help Desk").build();

    let subtitle = ElementBuilder::new("p")?.text("Acesse sua conta").build();

    append_child(&header, &logo)?;
    append_child(&header, &title)?;
    append_child(&header, &subtitle)?;

    // Formulario
    let form = create_element("form")?;
    set_class_name(&form, "login-form");

    let email_group = create_input_group("email", "E-mail", "email", "E-mail", email.clone())?;
    let password_group =
        create_input_group("password", "Senha", "password", "Senha", password.clone())?;

    // Submit button
    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-login")
        .build();

    let btn_text = ElementBuilder::new("span")?
        .class("btn-text")
        .text("Entrar")
        .build();

    append_child(&submit_btn, &btn_text)?;

    // Event listener para submit
    {
        let email = email.clone();
        let password = password.clone();
        let loading = loading.clone();
        let state = state.clone();
        let submit_btn = submit_btn.clone();
        let btn_text = btn_text.clone();

        on_submit(&form, move |e: web_sys::Event| {
            e.prevent_default();

            // Un intento a la vez: el flag busy bloquea reenvíos
            if *loading.borrow() {
                return;
            }

            let email_val = email.borrow().clone();
            let password_val = password.borrow().clone();

            if email_val.is_empty() || password_val.is_empty() {
                show_notice(AuthError::MissingCredentials.user_message());
                return;
            }

            *loading.borrow_mut() = true;
            let _ = set_attribute(&submit_btn, "disabled", "true");
            set_text_content(&btn_text, "Entrando...");

            let state = state.clone();
            let loading = loading.clone();
            let submit_btn = submit_btn.clone();
            let btn_text = btn_text.clone();

            spawn_local(async move {
                let vm = AuthViewModel::new();

                match vm.sign_in(&email_val, &password_val).await {
                    Ok(identity) => {
                        if let Err(e) = SessionService::new().save_identity(&identity) {
                            log::warn!("⚠️ [SIGNIN] Error guardando identidad: {}", e);
                        }

                        state.auth.set_identity(Some(identity));
                        state.orders.mark_stale();
                        state.notify_change();
                    }
                    Err(e) => {
                        log::warn!("⚠️ [SIGNIN] Login fallido: {}", e);
                        show_notice(e.user_message());

                        // Sin cambio de estado no hay re-render: restaurar
                        // el botón a mano
                        *loading.borrow_mut() = false;
                        let _ = remove_attribute(&submit_btn, "disabled");
                        set_text_content(&btn_text, "Entrar");
                    }
                }
            });
        })?;
    }

    append_child(&form, &email_group)?;
    append_child(&form, &password_group)?;
    append_child(&form, &submit_btn)?;

    append_child(&container, &header)?;
    append_child(&container, &form)?;
    append_child(&screen, &container)?;

    Ok(screen)
}

/// Helper para crear form group
fn create_input_group(
    id: &str,
    label_text: &str,
    input_type: &str,
    placeholder: &str,
    value: Rc<RefCell<String>>,
) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group").build();

    let label = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label_text)
        .build();

    let input = create_element("input")?;
    set_attribute(&input, "type", input_type)?;
    set_attribute(&input, "id", id)?;
    set_attribute(&input, "name", id)?;
    set_attribute(&input, "placeholder", placeholder)?;
    set_class_name(&input, "form-input");

    on_input(&input, move |e: web_sys::InputEvent| {
        if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
            *value.borrow_mut() = target.value();
        }
    })?;

    append_child(&group, &label)?;
    append_child(&group, &input)?;

    Ok(group)
}
