//! Human vs. computer naval combat on a fixed 10×10 grid.
//!
//! The engine (`board`, `placement`, `game`, `strategy`) is pure state
//! manipulation: operations take explicit arguments, return explicit
//! outcomes or errors, and never touch I/O. The `console` and `stats`
//! modules are the thin terminal and persistence wrappers around it.

mod board;
mod common;
mod config;
pub mod console;
mod game;
mod grid;
mod logging;
mod placement;
mod ship;
pub mod stats;
mod strategy;

pub use board::Board;
pub use common::{PlacementError, ShotError, ShotOutcome};
pub use config::{kind_by_name, kind_index, BOARD_SIZE, FLEET, NUM_SHIPS, TOTAL_SHIP_CELLS};
pub use game::{Game, Phase, Side};
pub use grid::{CellSet, Cells, Coord};
pub use logging::init_logging;
pub use placement::{place_manual, place_random_fleet, place_random_ship};
pub use ship::{Orientation, Ship, ShipKind};
pub use strategy::{Gunner, RandomGunner};
