use serde::{Deserialize, Serialize};

use crate::Point;
use crate::stone::Stone;

/// Ko guard. After a move captures exactly one stone, the emptied point is locked for the color
/// of the captured stone until the next committed move or pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ko {
    pub pos: Point,
    pub illegal: Stone,
}

impl Ko {
    pub fn forbids(&self, point: Point, stone: Stone) -> bool {
        self.pos == point && self.illegal == stone
    }
}
