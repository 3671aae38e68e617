//! Target selection for the computer side.

use rand::rngs::SmallRng;

use crate::grid::{CellSet, Coord};

/// Chooses where the computer fires next.
///
/// The single-method contract keeps strategies swappable without touching the
/// turn controller; `fired` is every cell already shot at the target board.
pub trait Gunner {
    fn choose_shot(&mut self, fired: &CellSet, rng: &mut SmallRng) -> Coord;
}

/// Baseline gunner: uniform over unfired cells, with no follow-up targeting
/// around earlier hits.
pub struct RandomGunner;

impl RandomGunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomGunner {
    fn default() -> Self {
        Self::new()
    }
}

impl Gunner for RandomGunner {
    fn choose_shot(&mut self, fired: &CellSet, rng: &mut SmallRng) -> Coord {
        // Rejection sampling; terminates whenever at least one unfired cell
        // remains, which the turn controller guarantees by ending the game
        // long before the grid fills.
        loop {
            let coord = Coord::random(rng);
            if !fired.contains(coord) {
                return coord;
            }
        }
    }
}
