use crate::Point;
use crate::board::Board;
use crate::config::GameConfig;
use crate::error::GoError;
use crate::group_manager::{Captures, GroupManager, Resolution};
use crate::ko::Ko;
use crate::score::{self, Scores};
use crate::stone::Stone;

/// Two passes in a row end the game.
const PASSES_TO_END: u32 = 2;

/// One game session. Owns the board and the capture bookkeeping for its whole lifetime.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    board: Board,
    groups: GroupManager,
    consecutive_passes: u32,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, GoError> {
        config.validate()?;
        let board = Board::new(config.board_size)?;
        let groups = GroupManager::new(config.enable_self_destruct);
        tracing::debug!(
            size = config.board_size,
            self_destruct = config.enable_self_destruct,
            "new game"
        );

        Ok(Game {
            config,
            board,
            groups,
            consecutive_passes: 0,
        })
    }

    // -- Accessors --

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        self.board.stone_at(point)
    }

    pub fn is_within_bounds(&self, row: usize, col: usize) -> bool {
        self.board.is_within_bounds(row, col)
    }

    pub fn captures(&self) -> &Captures {
        self.groups.captures()
    }

    pub fn num_black_captured(&self) -> u32 {
        self.groups.captures().black
    }

    pub fn num_white_captured(&self) -> u32 {
        self.groups.captures().white
    }

    pub fn ko(&self) -> Option<&Ko> {
        self.groups.ko()
    }

    pub fn consecutive_passes(&self) -> u32 {
        self.consecutive_passes
    }

    pub fn is_over(&self) -> bool {
        self.consecutive_passes >= PASSES_TO_END
    }

    // -- Game actions --

    pub fn place_black(&mut self, point: Point) -> Result<Resolution, GoError> {
        self.place(Stone::Black, point)
    }

    pub fn place_white(&mut self, point: Point) -> Result<Resolution, GoError> {
        self.place(Stone::White, point)
    }

    /// Play `stone` at `point`.
    ///
    /// The move is resolved on a copy of the board, which replaces the live board only when
    /// the move is legal. Any error leaves the game exactly as it was.
    pub fn place(&mut self, stone: Stone, point: Point) -> Result<Resolution, GoError> {
        if self.is_over() {
            return Err(GoError::GameOver);
        }
        if !self.board.is_within_bounds(point.0, point.1) {
            return Err(GoError::OutOfBounds);
        }
        if self.board.stone_at(point).is_some() {
            return Err(GoError::Occupied);
        }

        let mut scratch = self.board.clone();
        scratch.place_stone(stone, point);
        let resolution = self.groups.resolve_board(&mut scratch, point)?;

        self.board = scratch;
        self.groups.update_state();
        self.consecutive_passes = 0;
        tracing::debug!(?point, %stone, "placed stone");

        Ok(resolution)
    }

    pub fn pass_turn(&mut self) -> Result<(), GoError> {
        if self.is_over() {
            return Err(GoError::GameOver);
        }
        self.consecutive_passes += 1;
        self.groups.clear_ko();
        tracing::debug!(passes = self.consecutive_passes, "pass");
        Ok(())
    }

    /// Final scores. Only available once the game is over.
    pub fn get_scores(&self) -> Result<Scores, GoError> {
        if !self.is_over() {
            return Err(GoError::GameInProgress);
        }
        Ok(score::score(&self.board, self.groups.captures()))
    }

    /// The empty point closest to the center of the board.
    pub fn suggest(&self) -> Result<Point, GoError> {
        let center = self.size() / 2;
        self.board.next_best_position((center, center))
    }
}
