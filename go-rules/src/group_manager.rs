use serde::{Deserialize, Serialize};

use crate::Point;
use crate::board::Board;
use crate::error::GoError;
use crate::group::Group;
use crate::ko::Ko;
use crate::stone::Stone;

/// Number of stones of each color that have been removed from the board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Captures {
    pub black: u32,
    pub white: u32,
}

impl Captures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
        }
    }

    fn add(&mut self, stone: Stone, count: u32) {
        match stone {
            Stone::Black => self.black += count,
            Stone::White => self.white += count,
        }
    }
}

/// What a successful resolution removed from the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Opponent stones captured by the move.
    pub captured: Vec<Point>,
    /// The mover's own stones removed by a permitted self-destruct.
    pub self_destructed: Vec<Point>,
}

/// Resolves captures, suicide and ko for each placement, and keeps the capture counters.
#[derive(Debug, Clone)]
pub struct GroupManager {
    captures: Captures,
    ko: Option<Ko>,
    pending_ko: Option<Ko>,
    enable_self_destruct: bool,
}

impl GroupManager {
    pub fn new(enable_self_destruct: bool) -> Self {
        GroupManager {
            captures: Captures::new(),
            ko: None,
            pending_ko: None,
            enable_self_destruct,
        }
    }

    pub fn captures(&self) -> &Captures {
        &self.captures
    }

    pub fn ko(&self) -> Option<&Ko> {
        self.ko.as_ref()
    }

    pub fn enable_self_destruct(&self) -> bool {
        self.enable_self_destruct
    }

    /// Resolve the stone that was just placed at `point`.
    ///
    /// The move is classified before anything is written. On error neither `board` nor the
    /// counters have been touched, so the caller only has to discard its tentative stone.
    pub fn resolve_board(
        &mut self,
        board: &mut Board,
        point: Point,
    ) -> Result<Resolution, GoError> {
        let stone = board.stone_at(point).ok_or_else(|| {
            GoError::InvalidInput(format!("no stone to resolve at {point:?}"))
        })?;
        let opponent = stone.opp();

        let dead = Self::dead_neighbors(board, point, opponent);
        let captured: Vec<Point> = dead.iter().flat_map(|g| g.stones().to_vec()).collect();

        // A capture always frees a point next to the new stone, so only a move that captures
        // nothing can leave its own group without liberties.
        let own = Group::at(board, point).ok_or_else(|| {
            GoError::InvalidInput(format!("no stone to resolve at {point:?}"))
        })?;
        let self_destruct = captured.is_empty() && own.is_captured();
        if self_destruct && !self.enable_self_destruct {
            tracing::debug!(?point, %stone, "rejected self-destruct");
            return Err(GoError::SelfDestruct);
        }

        if captured.len() == 1 && self.ko.is_some_and(|ko| ko.forbids(point, stone)) {
            tracing::debug!(?point, %stone, "rejected ko recapture");
            return Err(GoError::Ko);
        }

        // The move is legal from here on.
        for &p in &captured {
            board.remove_stone(p);
        }
        self.captures.add(opponent, captured.len() as u32);
        if !captured.is_empty() {
            tracing::debug!(?point, %stone, count = captured.len(), "captured stones");
        }

        let mut resolution = Resolution {
            captured,
            self_destructed: Vec::new(),
        };

        if self_destruct {
            for &p in own.stones() {
                board.remove_stone(p);
            }
            self.captures.add(stone, own.len() as u32);
            tracing::debug!(?point, %stone, count = own.len(), "self-destructed group");
            resolution.self_destructed = own.stones().to_vec();
        }

        self.pending_ko = match resolution.captured.as_slice() {
            [single] => Some(Ko {
                pos: *single,
                illegal: opponent,
            }),
            _ => None,
        };

        Ok(resolution)
    }

    /// Commit the ko bookkeeping of the last successful resolution.
    pub fn update_state(&mut self) {
        self.ko = self.pending_ko.take();
        if let Some(ko) = &self.ko {
            tracing::debug!(pos = ?ko.pos, illegal = %ko.illegal, "ko guard set");
        }
    }

    /// A pass lifts any ko guard.
    pub fn clear_ko(&mut self) {
        self.ko = None;
        self.pending_ko = None;
    }

    /// Opponent groups adjacent to `point` that have no liberties left, each listed once.
    fn dead_neighbors(board: &Board, point: Point, opponent: Stone) -> Vec<Group> {
        let mut visited = vec![false; board.cells().len()];
        let mut dead = Vec::new();
        for n in board.get_liberty_coords(point) {
            if board.stone_at(n) != Some(opponent) {
                continue;
            }
            if let Some(group) = Group::collect(board, n, &mut visited)
                && group.is_captured()
            {
                dead.push(group);
            }
        }
        dead
    }
}
