//! The blanketing decision engine
//!
//! Pure, synchronous functions from weather, horse profile, settings, and
//! inventory to a recommendation. No I/O and no shared state: identical
//! inputs always produce identical output, so calls may run concurrently
//! without coordination.

mod confidence;
mod matching;
mod reasoning;
mod recommend;
mod schedule;
mod thresholds;

pub use confidence::*;
pub use matching::*;
pub use reasoning::*;
pub use recommend::*;
pub use schedule::*;
pub use thresholds::*;
