//! Service layer for the item API.
//! - Owns the in-memory item store and its state transitions.
//! - Validates request payloads before any store mutation.
//! - Provides clear error types consumed by the HTTP layer.

pub mod errors;
pub mod items;
