// ============================================================================
// DETAILS STATE - Estado de la pantalla de detalle de una solicitación
// ============================================================================
// Máquina de estados por vista:
//   Loading -> { Loaded(open), Loaded(closed), LoadError }
//   Loaded(open) -> Closing -> { Loaded(closed), Loaded(open) + draft intacto }
//   Loaded(closed) es terminal.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::order::{OrderDetails, OrderStatus};

#[derive(Clone)]
pub struct DetailsState {
    pub order: Rc<RefCell<Option<OrderDetails>>>,
    pub loading: Rc<RefCell<bool>>,
    pub closing: Rc<RefCell<bool>>,
    pub solution_draft: Rc<RefCell<String>>,
    pub error: Rc<RefCell<Option<String>>>,
}

impl DetailsState {
    pub fn new() -> Self {
        Self {
            order: Rc::new(RefCell::new(None)),
            loading: Rc::new(RefCell::new(false)),
            closing: Rc::new(RefCell::new(false)),
            solution_draft: Rc::new(RefCell::new(String::new())),
            error: Rc::new(RefCell::new(None)),
        }
    }

    pub fn begin_load(&self) {
        *self.loading.borrow_mut() = true;
        *self.closing.borrow_mut() = false;
        *self.order.borrow_mut() = None;
        *self.solution_draft.borrow_mut() = String::new();
        *self.error.borrow_mut() = None;
    }

    /// Cargar el detalle recibido. Una solución ya existente siembra el
    /// borrador editable; si no hay, el borrador empieza vacío.
    pub fn set_order(&self, order: OrderDetails) {
        if let Some(solution) = &order.solution {
            *self.solution_draft.borrow_mut() = solution.clone();
        }
        *self.order.borrow_mut() = Some(order);
        *self.loading.borrow_mut() = false;
    }

    pub fn get_order(&self) -> Option<OrderDetails> {
        self.order.borrow().clone()
    }

    pub fn set_load_error(&self, message: String) {
        *self.error.borrow_mut() = Some(message);
        *self.loading.borrow_mut() = false;
    }

    pub fn get_error(&self) -> Option<String> {
        self.error.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    /// Reemplazo puro del borrador; sin validación (se escribe letra a letra)
    pub fn set_solution_draft(&self, text: &str) {
        *self.solution_draft.borrow_mut() = text.to_string();
    }

    pub fn get_solution_draft(&self) -> String {
        self.solution_draft.borrow().clone()
    }

    pub fn begin_close(&self) {
        *self.closing.borrow_mut() = true;
    }

    pub fn is_closing(&self) -> bool {
        *self.closing.borrow()
    }

    /// Cierre confirmado por el backend: la vista pasa a Loaded(closed).
    /// `closed_when` queda pendiente hasta la próxima carga (lo asigna el
    /// reloj del servidor).
    pub fn finish_close(&self) {
        *self.closing.borrow_mut() = false;
        if let Some(order) = self.order.borrow_mut().as_mut() {
            order.status = OrderStatus::Closed;
            let draft = self.solution_draft.borrow().clone();
            if !draft.trim().is_empty() {
                order.solution = Some(draft);
            }
        }
    }

    /// Cierre fallido: la solicitación sigue abierta y el borrador se
    /// conserva para reintentar
    pub fn fail_close(&self) {
        *self.closing.borrow_mut() = false;
    }

    /// Solo lectura cuando la solicitación cargada ya está cerrada
    pub fn is_read_only(&self) -> bool {
        self.order
            .borrow()
            .as_ref()
            .map(|order| order.is_read_only())
            .unwrap_or(false)
    }

    /// Reset al salir de la pantalla
    pub fn clear(&self) {
        *self.order.borrow_mut() = None;
        *self.loading.borrow_mut() = false;
        *self.closing.borrow_mut() = false;
        *self.solution_draft.borrow_mut() = String::new();
        *self.error.borrow_mut() = None;
    }
}

impl Default for DetailsState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order::{OrderDetails, OrderRecord};

    fn open_order() -> OrderDetails {
        OrderDetails::decode(
            "id123",
            OrderRecord {
                patrimony: Some("123456".to_string()),
                description: Some("Impressora travada".to_string()),
                status: Some("open".to_string()),
                created_at: Some("2022-08-12T14:00:00Z".to_string()),
                closed_at: None,
                solution: None,
            },
        )
        .unwrap()
    }

    fn closed_order() -> OrderDetails {
        OrderDetails::decode(
            "id123",
            OrderRecord {
                patrimony: Some("123456".to_string()),
                description: Some("Impressora travada".to_string()),
                status: Some("closed".to_string()),
                created_at: Some("2022-08-12T14:00:00Z".to_string()),
                closed_at: Some("2022-08-13T10:00:00Z".to_string()),
                solution: Some("Reinício do spooler".to_string()),
            },
        )
        .unwrap()
    }

    #[test]
    fn existing_solution_seeds_the_draft() {
        let state = DetailsState::new();
        state.begin_load();
        state.set_order(closed_order());
        assert_eq!(state.get_solution_draft(), "Reinício do spooler");
        assert!(state.is_read_only());
    }

    #[test]
    fn draft_starts_empty_for_open_order() {
        let state = DetailsState::new();
        state.begin_load();
        state.set_order(open_order());
        assert_eq!(state.get_solution_draft(), "");
        assert!(!state.is_read_only());
    }

    #[test]
    fn set_solution_draft_is_idempotent() {
        let state = DetailsState::new();
        state.set_order(open_order());
        state.set_solution_draft("Cabo trocado");
        state.set_solution_draft("Cabo trocado");
        state.set_solution_draft("Cabo trocado");
        assert_eq!(state.get_solution_draft(), "Cabo trocado");
    }

    #[test]
    fn failed_close_keeps_order_open_and_draft_intact() {
        let state = DetailsState::new();
        state.set_order(open_order());
        state.set_solution_draft("Fixed");
        state.begin_close();
        state.fail_close();
        assert!(!state.is_closing());
        assert_eq!(state.get_solution_draft(), "Fixed");
        assert_eq!(state.get_order().unwrap().status, OrderStatus::Open);
        assert!(!state.is_read_only());
    }

    #[test]
    fn successful_close_transitions_to_closed() {
        let state = DetailsState::new();
        state.set_order(open_order());
        state.set_solution_draft("Fixed");
        state.begin_close();
        state.finish_close();
        let order = state.get_order().unwrap();
        assert_eq!(order.status, OrderStatus::Closed);
        assert_eq!(order.solution.as_deref(), Some("Fixed"));
        assert!(state.is_read_only());
    }

    #[test]
    fn begin_load_resets_previous_view() {
        let state = DetailsState::new();
        state.set_order(closed_order());
        state.begin_load();
        assert!(state.is_loading());
        assert!(state.get_order().is_none());
        assert_eq!(state.get_solution_draft(), "");
    }
}
