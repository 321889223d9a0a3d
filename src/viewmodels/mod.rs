pub mod auth_viewmodel;
pub mod details_viewmodel;
pub mod orders_viewmodel;

pub use auth_viewmodel::AuthViewModel;
pub use details_viewmodel::DetailsViewModel;
pub use orders_viewmodel::OrdersViewModel;
