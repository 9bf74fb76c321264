//! Domain models for BlanketWise

mod blanket;
mod horse;
mod liner;
mod recommendation;
mod settings;
mod weather;

pub use blanket::*;
pub use horse::*;
pub use liner::*;
pub use recommendation::*;
pub use settings::*;
pub use weather::*;
