use crate::Coord2;
use serde::{Deserialize, Serialize};

/// What an uncovered cell shows once its cover is gone.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Uncovered {
    Mine,
    /// A safe cell with its adjacent-mine count (0-8).
    Clear(u8),
}

/// One observable effect of a `reveal` or `toggle_flag` call.
///
/// Each call returns a batch of these for the rendering layer: exactly one
/// event per cell mutation, in discovery order (parent before children during
/// flood-fill). A terminal `GameWon`/`GameLost` is always the last event of
/// its batch.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridEvent {
    CellUncovered { pos: Coord2, shows: Uncovered },
    CellFlagged { pos: Coord2 },
    CellUnflagged { pos: Coord2 },
    GameWon,
    GameLost,
}

impl GridEvent {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::GameWon | Self::GameLost)
    }
}
