//! HTTP surface over a single shared [`Arena`](crate::arena::Arena).
//!
//! - `POST /api/start` seats two players
//! - `POST /api/play` plays one 10-round game
//! - `GET /api/leaderboard?sort=name|score` lists cumulative stats
//! - `GET /health` liveness probe
mod config;
mod parlor;
mod request;
mod server;

pub mod handlers;

pub use config::*;
pub use parlor::*;
pub use request::*;
pub use server::*;
