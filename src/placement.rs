//! Fleet placement: the manual entry point the UI drives and the randomized
//! setup used for the computer side.

use rand::Rng;

use crate::board::Board;
use crate::common::PlacementError;
use crate::config::FLEET;
use crate::grid::Coord;
use crate::ship::{Orientation, Ship, ShipKind};

/// Commit one human-chosen placement. Thin pass-through to [`Board::place`];
/// this is the seam the front-end calls once per ship, in any order.
pub fn place_manual(
    board: &mut Board,
    kind: ShipKind,
    origin: Coord,
    orientation: Orientation,
) -> Result<Ship, PlacementError> {
    board.place(kind, origin, orientation)
}

/// Place one ship of `kind` at a uniformly random legal position.
///
/// Rejection sampling over the full grid: draw an origin and orientation,
/// retry until the board accepts. The loop is deliberately uncapped — with
/// the standard catalog at most 14 of 100 cells are occupied before the last
/// ship commits, so a legal position always exists and the expected number of
/// attempts stays small. A denser catalog must re-verify that argument.
pub fn place_random_ship<R: Rng + ?Sized>(
    board: &mut Board,
    kind: ShipKind,
    rng: &mut R,
) -> Result<Ship, PlacementError> {
    if board.has_kind(kind) {
        return Err(PlacementError::DuplicateKind);
    }
    loop {
        let origin = Coord::random(rng);
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        if board.can_place(origin, kind.length(), orientation) {
            return board.place(kind, origin, orientation);
        }
    }
}

/// Fill every still-missing catalog kind at a random position. Kinds already
/// on the board are left where they are.
pub fn place_random_fleet<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) {
    for kind in FLEET {
        if board.has_kind(kind) {
            continue;
        }
        // has_kind was just checked, so the only sampling outcomes are
        // acceptance or another draw
        let _ = place_random_ship(board, kind, rng);
    }
}
