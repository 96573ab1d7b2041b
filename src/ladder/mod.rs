//! Cumulative per-player statistics.
//!
//! The [`Ladder`] owns one [`Stats`] per distinct (case-sensitive) name and
//! renders sorted [`Standing`] views on demand.
mod ladder;
mod sort;
mod standing;
mod stats;

pub use ladder::*;
pub use sort::*;
pub use standing::*;
pub use stats::*;
