// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::{AuthState, DetailsState, OrdersState};

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,
    pub orders: OrdersState,
    pub details: DetailsState,

    // Navegación: Some(id) = pantalla de detalle, None = lista
    pub selected_order_id: Rc<RefCell<Option<String>>>,

    // Reactivity: callbacks para notificar cambios
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            auth: AuthState::new(),
            orders: OrdersState::new(),
            details: DetailsState::new(),
            selected_order_id: Rc::new(RefCell::new(None)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Navegar al detalle de una solicitación
    pub fn select_order(&self, order_id: &str) {
        *self.selected_order_id.borrow_mut() = Some(order_id.to_string());
        self.details.clear();
        self.notify_change();
    }

    pub fn get_selected_order_id(&self) -> Option<String> {
        self.selected_order_id.borrow().clone()
    }

    /// Volver a la lista. Se marca la lista como stale para que la
    /// próxima renderización recargue (una solicitación cerrada cambia
    /// de partición).
    pub fn go_back(&self) {
        *self.selected_order_id.borrow_mut() = None;
        self.details.clear();
        self.orders.mark_stale();
        self.notify_change();
    }

    /// Logout completo
    pub fn reset_session(&self) {
        self.auth.clear();
        self.orders.clear();
        self.details.clear();
        *self.selected_order_id.borrow_mut() = None;
        self.notify_change();
    }

    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    pub fn notify_change(&self) {
        let subscribers = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn select_and_go_back_drive_navigation() {
        let state = AppState::new();
        assert_eq!(state.get_selected_order_id(), None);

        state.select_order("id123");
        assert_eq!(state.get_selected_order_id().as_deref(), Some("id123"));

        state.orders.take_stale();
        state.go_back();
        assert_eq!(state.get_selected_order_id(), None);
        // volver de un detalle fuerza recarga de la lista
        assert!(state.orders.take_stale());
    }

    #[test]
    fn notify_change_reaches_subscribers() {
        let state = AppState::new();
        let fired = Rc::new(Cell::new(0));
        {
            let fired = fired.clone();
            state.subscribe_to_changes(move || fired.set(fired.get() + 1));
        }
        state.notify_change();
        state.notify_change();
        assert_eq!(fired.get(), 2);
    }
}
