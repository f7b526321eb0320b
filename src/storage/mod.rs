//! Storage backends for the POS repository contract

pub mod in_memory;

pub use in_memory::InMemoryPosRepository;
