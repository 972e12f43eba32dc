use alloc::vec::Vec;

use super::flank_length;
use crate::*;

/// Coordinates recolored by a single placement, grouped by direction in
/// [`DIRECTIONS`] order and nearest to the placed disc first.
pub type CaptureSet = Vec<Coord2>;

/// Discs that placing `color` at `coords` would flip, without touching the board.
pub fn captures_for(board: &Board, coords: Coord2, color: Color) -> CaptureSet {
    let mut captured = CaptureSet::new();
    for direction in DIRECTIONS {
        let run = flank_length(board, coords, direction, color);
        captured.extend(board.iter_ray(coords, direction).take(run));
    }
    captured
}

/// Places `color` at `coords` and flips every bracketed run.
///
/// The move must already be known to be legal; an unchecked placement that
/// brackets nothing still lands on the board but flips nothing.
pub fn apply_move(board: &mut Board, coords: Coord2, color: Color) -> CaptureSet {
    let captured = captures_for(board, coords, color);
    if captured.is_empty() {
        log::warn!("Move {:?} by {} captured nothing", coords, color);
    }

    board.set(coords, color);
    for &pos in &captured {
        board.set(pos, color);
    }

    log::debug!("{} played {:?}, flipped {}", color, coords, captured.len());
    captured
}
