//! Ship catalog entries and placed ships.

use core::fmt;

use crate::common::PlacementError;
use crate::grid::{CellSet, Cells, Coord};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A catalog entry: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipKind {
    name: &'static str,
    length: usize,
}

impl ShipKind {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} cells)", self.name, self.length)
    }
}

/// The cells a ship of `length` would occupy from `origin`, or `None` if any
/// of them fall off the grid.
pub(crate) fn span_cells(
    origin: Coord,
    length: usize,
    orientation: Orientation,
) -> Option<CellSet> {
    let mut cells = CellSet::new();
    for i in 0..length {
        let step = u8::try_from(i).ok()?;
        let (row, col) = match orientation {
            Orientation::Horizontal => (origin.row(), origin.col().checked_add(step)?),
            Orientation::Vertical => (origin.row().checked_add(step)?, origin.col()),
        };
        cells.insert(Coord::new(row, col)?);
    }
    Some(cells)
}

/// A ship placed on a board. Occupied cells lie in a single row or column,
/// contiguous from the origin; the hit set is always a subset of them.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    kind: ShipKind,
    origin: Coord,
    orientation: Orientation,
    cells: CellSet,
    hits: CellSet,
}

impl Ship {
    /// Place a ship of `kind` at `origin`. Fails with `OutOfBounds` when the
    /// span does not fit on the grid.
    pub fn new(
        kind: ShipKind,
        origin: Coord,
        orientation: Orientation,
    ) -> Result<Self, PlacementError> {
        let cells = span_cells(origin, kind.length(), orientation)
            .ok_or(PlacementError::OutOfBounds)?;
        Ok(Ship {
            kind,
            origin,
            orientation,
            cells,
            hits: CellSet::new(),
        })
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupancy mask of the ship.
    pub fn cells(&self) -> CellSet {
        self.cells
    }

    /// Occupied coordinates in order, bow to stern.
    pub fn coords(&self) -> Cells {
        self.cells.iter()
    }

    /// Cells of this ship that have been hit.
    pub fn hits(&self) -> CellSet {
        self.hits
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(coord)
    }

    /// Record a hit at `coord`. Returns `true` if the ship occupies the cell.
    pub fn register_hit(&mut self, coord: Coord) -> bool {
        if self.cells.contains(coord) {
            self.hits.insert(coord);
            true
        } else {
            false
        }
    }

    /// A ship is sunk once every occupied cell has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hits == self.cells
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: {}, orientation: {:?}, hits: {}/{} }}",
            self.kind.name(),
            self.origin,
            self.orientation,
            self.hits.len(),
            self.kind.length(),
        )
    }
}
