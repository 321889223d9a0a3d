// ============================================================================
// ORDERS STATE - Estado de la lista de solicitações
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::order::{OrderStatus, OrderSummary};

/// Estado de la lista. La vista distingue tres estados de display:
/// cargando, vacío y error (además de la lista con datos).
#[derive(Clone)]
pub struct OrdersState {
    pub orders: Rc<RefCell<Vec<OrderSummary>>>,
    pub loading: Rc<RefCell<bool>>,
    pub error: Rc<RefCell<Option<String>>>,
    pub status_filter: Rc<RefCell<OrderStatus>>,
    // La lista se recarga solo cuando está marcada como stale (one-shot
    // reads: no hay listeners en tiempo real)
    pub stale: Rc<RefCell<bool>>,
}

impl OrdersState {
    pub fn new() -> Self {
        Self {
            orders: Rc::new(RefCell::new(Vec::new())),
            loading: Rc::new(RefCell::new(false)),
            error: Rc::new(RefCell::new(None)),
            status_filter: Rc::new(RefCell::new(OrderStatus::Open)),
            stale: Rc::new(RefCell::new(true)),
        }
    }

    pub fn set_orders(&self, orders: Vec<OrderSummary>) {
        *self.orders.borrow_mut() = orders;
        *self.loading.borrow_mut() = false;
        *self.error.borrow_mut() = None;
    }

    pub fn get_orders(&self) -> Vec<OrderSummary> {
        self.orders.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.orders.borrow().len()
    }

    pub fn set_loading(&self, loading: bool) {
        *self.loading.borrow_mut() = loading;
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub fn set_error(&self, message: Option<String>) {
        *self.error.borrow_mut() = message;
        *self.loading.borrow_mut() = false;
    }

    pub fn get_error(&self) -> Option<String> {
        self.error.borrow().clone()
    }

    pub fn get_filter(&self) -> OrderStatus {
        *self.status_filter.borrow()
    }

    /// Cambiar el filtro marca la lista como stale para forzar una recarga
    pub fn set_filter(&self, status: OrderStatus) {
        *self.status_filter.borrow_mut() = status;
        *self.error.borrow_mut() = None;
        *self.stale.borrow_mut() = true;
    }

    pub fn mark_stale(&self) {
        *self.stale.borrow_mut() = true;
    }

    /// Consumir el flag stale (devuelve true una sola vez por marca)
    pub fn take_stale(&self) -> bool {
        let mut stale = self.stale.borrow_mut();
        let was_stale = *stale;
        *stale = false;
        was_stale
    }

    /// Reset completo (logout)
    pub fn clear(&self) {
        *self.orders.borrow_mut() = Vec::new();
        *self.loading.borrow_mut() = false;
        *self.error.borrow_mut() = None;
        *self.status_filter.borrow_mut() = OrderStatus::Open;
        *self.stale.borrow_mut() = true;
    }
}

impl Default for OrdersState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str, status: OrderStatus) -> OrderSummary {
        OrderSummary {
            id: id.to_string(),
            patrimony: "123456".to_string(),
            status,
            when: "12/08/2022 às 14:00".to_string(),
        }
    }

    #[test]
    fn starts_stale_with_open_filter() {
        let state = OrdersState::new();
        assert_eq!(state.get_filter(), OrderStatus::Open);
        assert!(state.take_stale());
        assert!(!state.take_stale());
    }

    #[test]
    fn set_filter_marks_stale_again() {
        let state = OrdersState::new();
        state.take_stale();
        state.set_filter(OrderStatus::Closed);
        assert_eq!(state.get_filter(), OrderStatus::Closed);
        assert!(state.take_stale());
    }

    #[test]
    fn set_orders_clears_loading_and_error() {
        let state = OrdersState::new();
        state.set_loading(true);
        state.set_error(Some("falhou".to_string()));
        state.set_orders(vec![summary("a", OrderStatus::Open)]);
        assert!(!state.is_loading());
        assert_eq!(state.get_error(), None);
        assert_eq!(state.count(), 1);
    }

    #[test]
    fn clear_resets_everything() {
        let state = OrdersState::new();
        state.set_orders(vec![summary("a", OrderStatus::Open)]);
        state.set_filter(OrderStatus::Closed);
        state.clear();
        assert_eq!(state.count(), 0);
        assert_eq!(state.get_filter(), OrderStatus::Open);
        assert!(state.take_stale());
    }
}
