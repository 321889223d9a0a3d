// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod app_state;
pub mod auth_state;
pub mod details_state;
pub mod orders_state;

pub use app_state::*;
pub use auth_state::*;
pub use details_state::*;
pub use orders_state::*;
