// Utils compartidos

pub mod constants;
pub mod date_format;
pub mod storage;

pub use constants::*;
pub use date_format::*;
pub use storage::*;
