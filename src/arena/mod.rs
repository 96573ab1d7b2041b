//! Match state and game resolution.
//!
//! An [`Arena`] owns the two [`Seats`], the [`Ladder`](crate::ladder::Ladder)
//! they report into, and the [`Source`] that throws shapes for both players.
//! Once the first game is played, Player 1 is locked: only a game result can
//! move it, and the winner always stays on.
mod arena;
mod error;
mod opening;
mod report;
mod seats;
mod source;

pub use arena::*;
pub use error::*;
pub use opening::*;
pub use report::*;
pub use seats::*;
pub use source::*;
