//! HTTP request handlers for the BlanketWise API

pub mod blankets;
pub mod health;
pub mod horses;
pub mod liners;
pub mod recommendation;
pub mod settings;
pub mod weather;

pub use blankets::*;
pub use health::*;
pub use horses::*;
pub use liners::*;
pub use recommendation::*;
pub use settings::*;
pub use weather::*;
