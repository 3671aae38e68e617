//! Terminal input grammar and board rendering for the front-end.
//!
//! Everything here returns values instead of printing, so the binary decides
//! where output goes and tests can assert on it.

use crate::board::Board;
use crate::config::BOARD_SIZE;
use crate::grid::Coord;
use crate::ship::Orientation;

/// Render a coordinate in the grammar [`parse_coord`] accepts, e.g. `A5`.
pub fn coord_label(coord: Coord) -> String {
    let col = (b'A' + coord.col()) as char;
    format!("{}{}", col, coord.row() + 1)
}

/// Parse a coordinate like `A5` or `j10`: column letter first, then a
/// 1-based row number.
pub fn parse_coord(input: &str) -> Result<Coord, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-J", col_ch));
    }
    let col = (col_ch as u8).wrapping_sub(b'A');
    if col >= BOARD_SIZE {
        return Err(format!("Column '{}' out of bounds - must be A-J", col_ch));
    }
    let row_str: String = chars.collect();
    let row: u8 = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-10", row_str))?;
    if row == 0 {
        return Err("Row cannot be 0 - must be 1-10".to_string());
    }
    if row > BOARD_SIZE {
        return Err(format!("Row {} out of bounds - must be 1-10", row));
    }
    Coord::new(row - 1, col).ok_or_else(|| "Coordinate out of bounds".to_string())
}

/// Parse an orientation: `h`/`horizontal` or `v`/`vertical`.
pub fn parse_orientation(input: &str) -> Result<Orientation, String> {
    match input.trim().to_ascii_lowercase().as_str() {
        "h" | "horizontal" => Ok(Orientation::Horizontal),
        "v" | "vertical" => Ok(Orientation::Vertical),
        other => Err(format!("Invalid orientation '{}' - use h or v", other)),
    }
}

/// Render a board as a framed grid. With `reveal` the side's own ships show
/// as `S`; without it only the shot record is visible, the way the enemy
/// waters look to the shooter.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let mut out = String::new();
    out.push_str("    ╔════════════════════════╗\n");
    out.push_str("    ║   ");
    for c in 0..BOARD_SIZE {
        out.push(' ');
        out.push((b'A' + c) as char);
    }
    out.push_str(" ║\n");
    out.push_str("    ╠════════════════════════╣\n");
    for r in 0..BOARD_SIZE {
        out.push_str(&format!("    ║ {:2}", r + 1));
        for c in 0..BOARD_SIZE {
            let coord = match Coord::new(r, c) {
                Some(coord) => coord,
                None => continue,
            };
            let ch = if board.hits().contains(coord) {
                'X'
            } else if board.misses().contains(coord) {
                'o'
            } else if reveal && board.ship_map().contains(coord) {
                'S'
            } else {
                '.'
            };
            out.push(' ');
            out.push(ch);
        }
        out.push_str(" ║\n");
    }
    out.push_str("    ╚════════════════════════╝\n");
    if reveal {
        out.push_str("    Legend: S=Ship  X=Hit  o=Miss  .=Water\n");
    } else {
        out.push_str("    Legend: X=Hit  o=Miss  .=Unknown\n");
    }
    out
}
