//! One side's board: placed ships, occupancy cache, and shot resolution.

use core::fmt;

use crate::common::{PlacementError, ShotError, ShotOutcome};
use crate::config::{kind_index, FLEET, NUM_SHIPS};
use crate::grid::{CellSet, Coord};
use crate::ship::{span_cells, Orientation, Ship, ShipKind};

/// A 10×10 board owning the ships placed on it and the record of every shot
/// fired against it.
///
/// `ship_map` is the union of the placed ships' masks, kept alongside them so
/// placement collision checks stay O(1). The fired-upon set is the union of
/// `hits` and `misses`.
pub struct Board {
    ships: [Option<Ship>; NUM_SHIPS],
    ship_map: CellSet,
    hits: CellSet,
    misses: CellSet,
}

impl Board {
    /// An empty board with no ships placed and no shots received.
    pub fn new() -> Self {
        Board {
            ships: [None; NUM_SHIPS],
            ship_map: CellSet::new(),
            hits: CellSet::new(),
            misses: CellSet::new(),
        }
    }

    /// Whether a ship of `length` starting at `origin` would lie fully on the
    /// grid without touching an occupied cell. No side effects.
    pub fn can_place(&self, origin: Coord, length: usize, orientation: Orientation) -> bool {
        match span_cells(origin, length, orientation) {
            Some(cells) => (self.ship_map & cells).is_empty(),
            None => false,
        }
    }

    /// Place a ship of `kind` at `origin`. Fails exactly when [`can_place`]
    /// would return `false` (`OutOfBounds` / `Overlap`), when the kind's slot
    /// is already filled (`DuplicateKind`), or when the kind is not in the
    /// catalog (`UnknownKind`). On failure the board is unchanged.
    ///
    /// [`can_place`]: Board::can_place
    pub fn place(
        &mut self,
        kind: ShipKind,
        origin: Coord,
        orientation: Orientation,
    ) -> Result<Ship, PlacementError> {
        let slot = kind_index(kind).ok_or(PlacementError::UnknownKind)?;
        if self.ships[slot].is_some() {
            return Err(PlacementError::DuplicateKind);
        }
        let ship = Ship::new(kind, origin, orientation)?;
        if !(self.ship_map & ship.cells()).is_empty() {
            return Err(PlacementError::Overlap);
        }
        self.ship_map |= ship.cells();
        self.ships[slot] = Some(ship);
        Ok(ship)
    }

    /// Resolve a shot at `coord`. A repeat of an earlier shot is rejected
    /// with `AlreadyFired` and mutates nothing; otherwise the shot is
    /// recorded and classified.
    pub fn receive_shot(&mut self, coord: Coord) -> Result<ShotOutcome, ShotError> {
        if self.hits.contains(coord) || self.misses.contains(coord) {
            return Err(ShotError::AlreadyFired);
        }

        let mut struck = None;
        for ship in self.ships.iter_mut().flatten() {
            if ship.register_hit(coord) {
                struck = Some((ship.kind(), ship.is_sunk()));
                break;
            }
        }

        match struck {
            None => {
                self.misses.insert(coord);
                Ok(ShotOutcome::Miss)
            }
            Some((kind, sunk)) => {
                self.hits.insert(coord);
                if !sunk {
                    Ok(ShotOutcome::Hit(kind))
                } else if self.remaining_ship_count() == 0 {
                    Ok(ShotOutcome::FleetDestroyed(kind))
                } else {
                    Ok(ShotOutcome::Sunk(kind))
                }
            }
        }
    }

    /// Ships placed but not yet fully sunk.
    pub fn remaining_ship_count(&self) -> usize {
        self.ships
            .iter()
            .flatten()
            .filter(|ship| !ship.is_sunk())
            .count()
    }

    /// Whether every catalog kind has been placed.
    pub fn fleet_complete(&self) -> bool {
        self.ships.iter().all(Option::is_some)
    }

    /// Whether a ship of `kind` is on the board.
    pub fn has_kind(&self, kind: ShipKind) -> bool {
        kind_index(kind).is_some_and(|slot| self.ships[slot].is_some())
    }

    /// Catalog kinds not yet placed, in catalog order.
    pub fn remaining_kinds(&self) -> Vec<ShipKind> {
        FLEET
            .iter()
            .zip(&self.ships)
            .filter(|(_, slot)| slot.is_none())
            .map(|(kind, _)| *kind)
            .collect()
    }

    /// The placed ships, in catalog order.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().flatten()
    }

    /// Occupancy mask of all placed ships.
    pub fn ship_map(&self) -> CellSet {
        self.ship_map
    }

    /// Cells where a shot struck a ship.
    pub fn hits(&self) -> CellSet {
        self.hits
    }

    /// Cells where a shot landed on open water.
    pub fn misses(&self) -> CellSet {
        self.misses
    }

    /// Every cell fired upon so far.
    pub fn fired(&self) -> CellSet {
        self.hits | self.misses
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{ ships: {:?}, remaining: {} }}",
            self.ships,
            self.remaining_ship_count()
        )?;
        writeln!(f, "ship_map: {:?}", self.ship_map)?;
        writeln!(f, "hits: {:?}", self.hits)?;
        write!(f, "misses: {:?}", self.misses)
    }
}
