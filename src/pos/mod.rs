//! POS lifecycle: service and HTTP handlers

pub mod handlers;
pub mod service;

pub use handlers::AppState;
pub use service::PosService;
