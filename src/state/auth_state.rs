// ============================================================================
// AUTH STATE - Estado de autenticación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::auth::Identity;

/// Estado de autenticación
#[derive(Clone)]
pub struct AuthState {
    pub identity: Rc<RefCell<Option<Identity>>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            identity: Rc::new(RefCell::new(None)),
        }
    }

    pub fn set_identity(&self, identity: Option<Identity>) {
        *self.identity.borrow_mut() = identity;
    }

    pub fn get_identity(&self) -> Option<Identity> {
        self.identity.borrow().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.identity.borrow().is_some()
    }

    /// Logout - limpiar la identidad
    pub fn clear(&self) {
        *self.identity.borrow_mut() = None;
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}
