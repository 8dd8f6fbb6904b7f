use crate::Point;
use crate::board::Board;
use crate::stone::Stone;

/// A maximal 4-connected chain of same-colored stones together with its liberties.
///
/// A group is a snapshot: it describes the board it was computed from and is not updated when
/// that board changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    stone: Stone,
    stones: Vec<Point>,
    liberties: Vec<Point>,
}

impl Group {
    /// Flood-fill the group containing `point`. Returns `None` for an empty or off-board point.
    pub fn at(board: &Board, point: Point) -> Option<Group> {
        let mut visited = vec![false; board.cells().len()];
        Self::collect(board, point, &mut visited)
    }

    /// Flood fill sharing a visited bitset, so that several groups can be collected without
    /// walking the same chain twice.
    pub(crate) fn collect(board: &Board, point: Point, visited: &mut [bool]) -> Option<Group> {
        let stone = board.stone_at(point)?;
        if visited[board.idx(point)] {
            return None;
        }

        let mut stones = Vec::new();
        let mut stack = vec![point];
        while let Some(p) = stack.pop() {
            let vi = board.idx(p);
            if visited[vi] {
                continue;
            }
            visited[vi] = true;
            stones.push(p);
            for n in board.get_liberty_coords(p) {
                if board.stone_at(n) == Some(stone) && !visited[board.idx(n)] {
                    stack.push(n);
                }
            }
        }

        let liberties = Self::liberties_of(board, &stones);
        Some(Group {
            stone,
            stones,
            liberties,
        })
    }

    fn liberties_of(board: &Board, stones: &[Point]) -> Vec<Point> {
        let mut seen = vec![false; board.cells().len()];
        let mut libs = Vec::new();
        for &p in stones {
            for n in board.get_liberty_coords(p) {
                let ni = board.idx(n);
                if !seen[ni] && board.stone_at(n).is_none() {
                    seen[ni] = true;
                    libs.push(n);
                }
            }
        }
        libs
    }

    pub fn stone(&self) -> Stone {
        self.stone
    }

    pub fn stones(&self) -> &[Point] {
        &self.stones
    }

    pub fn liberties(&self) -> &[Point] {
        &self.liberties
    }

    pub fn len(&self) -> usize {
        self.stones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.stones.contains(&point)
    }

    pub fn is_captured(&self) -> bool {
        self.liberties.is_empty()
    }
}

/// Every group currently on the board, in row-major order of their first stone.
pub fn all_groups(board: &Board) -> Vec<Group> {
    let size = board.size();
    let mut visited = vec![false; board.cells().len()];
    let mut groups = Vec::new();
    for row in 0..size {
        for col in 0..size {
            if visited[board.idx((row, col))] {
                continue;
            }
            if let Some(group) = Group::collect(board, (row, col), &mut visited) {
                groups.push(group);
            }
        }
    }
    groups
}
