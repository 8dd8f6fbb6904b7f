use std::fmt;
use std::ops::Index;

use arrayvec::ArrayVec;

use crate::Point;
use crate::error::GoError;
use crate::stone::Stone;

/// A square Go board stored as a flat row-major array.
///
/// The board only knows geometry. It does not check Go legality; that is done by
/// [`GroupManager`](crate::group_manager::GroupManager) and [`Game`](crate::game::Game).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Option<Stone>>,
    size: usize,
}

impl Board {
    /// Create an empty `size` x `size` board.
    pub fn new(size: usize) -> Result<Self, GoError> {
        if size == 0 {
            return Err(GoError::InvalidInput("board size must be at least 1".into()));
        }
        let len = size
            .checked_mul(size)
            .ok_or_else(|| GoError::InvalidInput(format!("board size {size} is too large")))?;
        Ok(Board {
            cells: vec![None; len],
            size,
        })
    }

    /// Build a board from an ASCII layout. `B` = Black, `W` = White, anything else is empty.
    pub fn from_layout(layout: &[&str]) -> Result<Self, GoError> {
        let size = layout.len();
        if layout.iter().any(|row| row.chars().count() != size) {
            return Err(GoError::InvalidInput("layout must be square".into()));
        }

        let mut board = Board::new(size)?;
        for (row, line) in layout.iter().enumerate() {
            for (col, c) in line.chars().enumerate() {
                match c {
                    'B' => board.place_stone(Stone::Black, (row, col)),
                    'W' => board.place_stone(Stone::White, (row, col)),
                    _ => {}
                }
            }
        }
        Ok(board)
    }

    // -- Accessors --

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[Option<Stone>] {
        &self.cells
    }

    pub fn is_within_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        if self.is_within_bounds(point.0, point.1) {
            self.cells[self.idx(point)]
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    pub fn count(&self, stone: Stone) -> usize {
        self.cells.iter().filter(|&&c| c == Some(stone)).count()
    }

    // -- Mutation --

    /// Write `stone` at `point`. Out-of-bounds points are ignored; occupancy is the caller's
    /// concern.
    pub fn place_stone(&mut self, stone: Stone, point: Point) {
        if self.is_within_bounds(point.0, point.1) {
            let i = self.idx(point);
            self.cells[i] = Some(stone);
        }
    }

    pub fn remove_stone(&mut self, point: Point) {
        if self.is_within_bounds(point.0, point.1) {
            let i = self.idx(point);
            self.cells[i] = None;
        }
    }

    // -- Geometry --

    /// The up-to-4 orthogonal neighbors of `point` that lie on the board.
    pub fn get_liberty_coords(&self, (row, col): Point) -> ArrayVec<Point, 4> {
        let mut result = ArrayVec::new();
        if row > 0 {
            result.push((row - 1, col));
        }
        if row + 1 < self.size {
            result.push((row + 1, col));
        }
        if col > 0 {
            result.push((row, col - 1));
        }
        if col + 1 < self.size {
            result.push((row, col + 1));
        }
        result
    }

    /// Find the empty point closest to `center` by Manhattan distance.
    ///
    /// Each ring is scanned top row first and, within a row, from right to left.
    pub fn next_best_position(&self, center: Point) -> Result<Point, GoError> {
        let max_ring = 2 * (self.size - 1);
        for ring in 0..=max_ring {
            if let Some(point) = self
                .ring(center, ring)
                .into_iter()
                .find(|&p| self.stone_at(p).is_none())
            {
                return Ok(point);
            }
        }
        Err(GoError::BoardFull)
    }

    /// On-board points at exactly `offset` Manhattan distance from `center`.
    fn ring(&self, (row, col): Point, offset: usize) -> Vec<Point> {
        let offset = offset as isize;
        let (row, col) = (row as isize, col as isize);
        let mut points = Vec::new();

        for dy in -offset..=offset {
            let dx = offset - dy.abs();
            let candidates = if dx == 0 { vec![0] } else { vec![dx, -dx] };
            for dx in candidates {
                let (r, c) = (row + dy, col + dx);
                if r >= 0 && c >= 0 && self.is_within_bounds(r as usize, c as usize) {
                    points.push((r as usize, c as usize));
                }
            }
        }
        points
    }

    // -- Internal helpers --

    #[inline]
    pub(crate) fn idx(&self, (row, col): Point) -> usize {
        row * self.size + col
    }
}

impl Index<Point> for Board {
    type Output = Option<Stone>;

    fn index(&self, point: Point) -> &Self::Output {
        assert!(
            self.is_within_bounds(point.0, point.1),
            "point {point:?} is outside a {0}x{0} board",
            self.size
        );
        &self.cells[self.idx(point)]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            let line: Vec<String> = row
                .iter()
                .map(|c| c.map_or('.', Stone::symbol).to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
