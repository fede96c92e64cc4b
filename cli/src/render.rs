use std::fmt::Write;

use kindling_core::{Board, CellCount, Coord, Coord2, Move};
use serde::Serialize;

/// Text view of the board: the origin as a flame, other burning tiles as
/// ` _ `, everything else as its distance from the centre.
pub fn render_board(board: &Board) -> String {
    let origin = board.origin();
    let mut out = String::new();
    for row in board.rows() {
        for tile in row {
            match (tile.is_activated(), tile.distance()) {
                (true, _) if Some(tile.position()) == origin => out.push('🔥'),
                (true, _) => out.push_str(" _ "),
                (false, distance) => {
                    let _ = write!(out, "{distance:>2}  ");
                }
            }
        }
        out.push('\n');
    }
    out
}

/// Visitation log, one `(x, y), activated` line per examined tile.
pub fn render_moves(board: &Board) -> String {
    let mut out = String::new();
    for mv in board.moves() {
        let (x, y) = mv.position;
        let _ = writeln!(out, "({x}, {y}), {}", mv.activated);
    }
    out
}

pub fn render_summary(board: &Board) -> String {
    let activated = board.activated_count();
    let total = board.total_cells();
    let percent = f64::from(activated) / f64::from(total) * 100.0;
    format!("{activated}/{total} ({percent:.2}%) tiles on fire!")
}

/// Machine-readable result of one round.
#[derive(Debug, Serialize)]
pub struct RoundReport<'a> {
    pub length: Coord,
    pub probability: f64,
    pub seed: u64,
    pub origin: Option<Coord2>,
    pub activated: CellCount,
    pub visited: usize,
    pub total: CellCount,
    pub moves: &'a [Move],
}

impl<'a> RoundReport<'a> {
    pub fn new(board: &'a Board, seed: u64) -> Self {
        Self {
            length: board.length(),
            probability: board.probability(),
            seed,
            origin: board.origin(),
            activated: board.activated_count(),
            visited: board.visited_count(),
            total: board.total_cells(),
            moves: board.moves(),
        }
    }
}
