use crate::ship::ShipKind;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 4;
pub const FLEET: [ShipKind; NUM_SHIPS] = [
    ShipKind::new("Carrier", 5),
    ShipKind::new("Battleship", 4),
    ShipKind::new("Cruiser", 3),
    ShipKind::new("Destroyer", 2),
];

/// Total number of ship cells in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 2;

/// Position of `kind` in the fleet catalog, or `None` for a kind that is not
/// part of it.
pub fn kind_index(kind: ShipKind) -> Option<usize> {
    FLEET.iter().position(|k| *k == kind)
}

/// Look up a catalog entry by name, case-insensitively.
pub fn kind_by_name(name: &str) -> Option<ShipKind> {
    FLEET
        .iter()
        .copied()
        .find(|k| k.name().eq_ignore_ascii_case(name))
}
