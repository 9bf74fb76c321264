//! Shared types and the decision engine for BlanketWise
//!
//! This crate contains the blanket recommendation engine and the types
//! shared between the backend and the frontend (via WASM).

pub mod engine;
pub mod models;
pub mod types;
pub mod validation;

pub use engine::*;
pub use models::*;
pub use types::*;
pub use validation::*;
