//! Board boundary for the strategy.
//!
//! The strategy never owns board or resource state; it consumes the
//! [`GameView`] contract implemented by the engine-facing board service.
//! This module provides:
//! - board geometry shared across the boundary (coordinates, arena bounds,
//!   home edges)
//! - the [`GameView`] trait itself
//! - [`Board`], an in-memory board service used by local skirmishes and
//!   tests

mod board;
mod geometry;
mod view;

pub use board::Board;
pub use geometry::{ARENA_SIZE, BoardSide, Coord, HALF_ARENA, in_arena, on_home_edge};
pub use view::{GameView, Pool};
