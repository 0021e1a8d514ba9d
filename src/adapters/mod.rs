// Adapters layer: concrete implementations for external systems.

pub mod courts_api;
