//! Board model and reveal rules for a single-player mine-clearing puzzle.
//!
//! [`Board`] owns the grid and mine layout, [`GameSession`] sequences moves on top of it
//! and decides wins and losses. Rendering and input handling live with the caller.

#![no_std]

extern crate alloc;

pub use board::*;
pub use config::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use types::*;
pub use view::*;

mod board;
mod config;
mod error;
mod generator;
mod session;
mod types;
mod view;
