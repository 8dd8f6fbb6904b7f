use serde::Serialize;

use crate::Point;
use crate::board::Board;
use crate::group_manager::Captures;
use crate::stone::Stone;

/// Final per-color scores. Negative values are possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Scores {
    pub black: i64,
    pub white: i64,
}

impl Scores {
    pub fn get(&self, stone: Stone) -> i64 {
        match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
        }
    }

    /// `None` on a tie.
    pub fn winner(&self) -> Option<Stone> {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => Some(Stone::Black),
            std::cmp::Ordering::Less => Some(Stone::White),
            std::cmp::Ordering::Equal => None,
        }
    }

    fn add(&mut self, stone: Stone, points: i64) {
        match stone {
            Stone::Black => self.black += points,
            Stone::White => self.white += points,
        }
    }
}

/// One maximal 4-connected region of empty points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub points: Vec<Point>,
    /// The single color bordering the region, or `None` when it touches both colors or none.
    pub owner: Option<Stone>,
}

/// Partition the empty points of `board` into regions and find who owns each.
pub fn regions(board: &Board) -> Vec<Region> {
    let size = board.size();
    let mut visited = vec![false; board.cells().len()];
    let mut result = Vec::new();

    for row in 0..size {
        for col in 0..size {
            let start = (row, col);
            if visited[board.idx(start)] || board.stone_at(start).is_some() {
                continue;
            }
            result.push(flood_region(board, start, &mut visited));
        }
    }
    result
}

fn flood_region(board: &Board, start: Point, visited: &mut [bool]) -> Region {
    let mut points = Vec::new();
    let mut border: Option<Stone> = None;
    let mut neutral = false;
    let mut stack = vec![start];
    visited[board.idx(start)] = true;

    while let Some(p) = stack.pop() {
        points.push(p);
        for n in board.get_liberty_coords(p) {
            match board.stone_at(n) {
                Some(stone) => match border {
                    None => border = Some(stone),
                    Some(seen) if seen != stone => neutral = true,
                    Some(_) => {}
                },
                None => {
                    let ni = board.idx(n);
                    if !visited[ni] {
                        visited[ni] = true;
                        stack.push(n);
                    }
                }
            }
        }
    }

    Region {
        points,
        owner: if neutral { None } else { border },
    }
}

/// Area score: each color's territory minus the number of that color's own stones that were
/// captured.
pub fn score(board: &Board, captures: &Captures) -> Scores {
    let mut scores = Scores::default();
    for region in regions(board) {
        if let Some(owner) = region.owner {
            scores.add(owner, region.points.len() as i64);
        }
    }

    scores.black -= i64::from(captures.black);
    scores.white -= i64::from(captures.white);
    scores
}
