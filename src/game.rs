//! Turn sequencing for a human vs. computer match.

use core::fmt;

use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::common::{PlacementError, ShotError, ShotOutcome};
use crate::grid::Coord;
use crate::placement::place_random_fleet;
use crate::ship::{Orientation, Ship, ShipKind};
use crate::strategy::Gunner;

/// One side of the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Computer => write!(f, "Computer"),
        }
    }
}

/// Lifecycle of a match. `Finished` is terminal; a rematch is a fresh
/// [`Game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The player is still placing ships. The computer fleet is already down.
    Placement,
    /// Alternating fire; the carried side shoots next.
    Battle(Side),
    /// All of one side's ships are sunk; the carried side won.
    Finished(Side),
}

/// A complete match: both boards and the phase machine that sequences
/// placement, alternating fire, and the end of the game.
///
/// Each board is owned outright — the computer's record of its own shots is
/// read back from the player board's fired-upon set, never duplicated.
#[derive(Debug)]
pub struct Game {
    player_board: Board,
    computer_board: Board,
    phase: Phase,
}

impl Game {
    /// Start a match. The computer fleet is placed randomly and silently; the
    /// player's board is empty and the game sits in `Placement` until all
    /// four ships are down.
    pub fn new(rng: &mut SmallRng) -> Self {
        let mut computer_board = Board::new();
        place_random_fleet(&mut computer_board, rng);
        Game {
            player_board: Board::new(),
            computer_board,
            phase: Phase::Placement,
        }
    }

    /// Place one of the player's ships. Once the last catalog kind commits,
    /// the game moves to `Battle` with the player to fire first.
    ///
    /// Invalid attempts leave the board unchanged so the front-end can
    /// re-prompt; after battle begins every kind is already placed, so
    /// further calls fail with `DuplicateKind`.
    pub fn place_ship(
        &mut self,
        kind: ShipKind,
        origin: Coord,
        orientation: Orientation,
    ) -> Result<Ship, PlacementError> {
        let ship = self.player_board.place(kind, origin, orientation)?;
        if self.phase == Phase::Placement && self.player_board.fleet_complete() {
            self.phase = Phase::Battle(Side::Player);
        }
        Ok(ship)
    }

    /// Resolve the player's shot against the computer board.
    ///
    /// Every resolved shot passes the turn — a hit does not grant an extra
    /// one. A rejected shot (`AlreadyFired`, wrong phase, wrong turn)
    /// consumes nothing.
    pub fn fire_shot(&mut self, coord: Coord) -> Result<ShotOutcome, ShotError> {
        self.ensure_turn(Side::Player)?;
        let outcome = self.computer_board.receive_shot(coord)?;
        self.advance(Side::Player, outcome);
        Ok(outcome)
    }

    /// Let `gunner` pick and resolve the computer's shot against the player
    /// board. Returns the chosen coordinate together with the outcome.
    pub fn computer_turn(
        &mut self,
        gunner: &mut dyn Gunner,
        rng: &mut SmallRng,
    ) -> Result<(Coord, ShotOutcome), ShotError> {
        self.ensure_turn(Side::Computer)?;
        let coord = gunner.choose_shot(&self.player_board.fired(), rng);
        let outcome = self.player_board.receive_shot(coord)?;
        self.advance(Side::Computer, outcome);
        Ok((coord, outcome))
    }

    fn ensure_turn(&self, side: Side) -> Result<(), ShotError> {
        match self.phase {
            Phase::Battle(turn) if turn == side => Ok(()),
            Phase::Battle(_) => Err(ShotError::OutOfTurn),
            Phase::Placement | Phase::Finished(_) => Err(ShotError::NotInBattle),
        }
    }

    /// Finish detection happens in the same step as the shot that emptied the
    /// defender's fleet; otherwise the turn passes.
    fn advance(&mut self, shooter: Side, outcome: ShotOutcome) {
        if matches!(outcome, ShotOutcome::FleetDestroyed(_)) {
            self.phase = Phase::Finished(shooter);
        } else {
            self.phase = Phase::Battle(shooter.opponent());
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The side to fire next, while the battle is on.
    pub fn turn(&self) -> Option<Side> {
        match self.phase {
            Phase::Battle(side) => Some(side),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished(_))
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            Phase::Finished(side) => Some(side),
            _ => None,
        }
    }

    /// Catalog kinds the player has not placed yet.
    pub fn remaining_kinds(&self) -> Vec<ShipKind> {
        self.player_board.remaining_kinds()
    }

    /// Ships of `side` still afloat.
    pub fn remaining_ship_count(&self, side: Side) -> usize {
        self.board(side).remaining_ship_count()
    }

    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Player => &self.player_board,
            Side::Computer => &self.computer_board,
        }
    }

    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    pub fn computer_board(&self) -> &Board {
        &self.computer_board
    }
}
