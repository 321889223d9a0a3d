pub mod auth;
pub mod order;

pub use auth::{AuthError, ErrorInfo, Identity, SessionUser, SignInRequest, SignInResponse};
pub use order::{
    CloseError, DecodeError, FetchError, OrderDetails, OrderRecord, OrderStatus, OrderSummary,
};
