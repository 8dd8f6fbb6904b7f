use go_rules::{Board, Stone};

use crate::command::coord_to_label;

/// Text board with row and column labels, `X` for Black and `O` for White.
pub fn render(board: &Board) -> String {
    let size = board.size();
    let mut out = String::from("  ");
    for col in 0..size {
        out.push(' ');
        out.push(coord_to_label(col));
    }
    out.push('\n');

    for row in 0..size {
        out.push(coord_to_label(row));
        out.push(' ');
        for col in 0..size {
            out.push(' ');
            out.push(board.stone_at((row, col)).map_or('.', Stone::symbol));
        }
        out.push('\n');
    }
    out
}
