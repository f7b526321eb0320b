//! HTTP server wiring

pub mod router;

pub use router::build_pos_routes;
