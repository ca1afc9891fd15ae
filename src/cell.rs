use serde::{Deserialize, Serialize};

/// State of a single grid position. Stored inline in the engine's board
/// array; the array index is the cell's position, so the cell itself carries
/// no coordinates and no reference back to the grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    is_mine: bool,
    revealed: bool,
    flagged: bool,
    adjacent_mines: u8,
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        self.is_mine
    }

    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    pub const fn is_flagged(self) -> bool {
        self.flagged
    }

    /// Number of mines among this cell's neighbors. Unspecified for mine
    /// cells.
    pub const fn adjacent_mines(self) -> u8 {
        self.adjacent_mines
    }

    pub const fn is_hidden(self) -> bool {
        !self.revealed && !self.flagged
    }

    /// Marks the cell as a mine. Set once during placement, never cleared.
    pub(crate) fn arm(&mut self) {
        self.is_mine = true;
    }

    pub(crate) fn set_adjacent_mines(&mut self, count: u8) {
        debug_assert!(count <= 8);
        self.adjacent_mines = count;
    }

    /// Monotonic: once revealed, a cell stays revealed. Revealing drops any
    /// flag, so `revealed && flagged` can never be observed.
    pub(crate) fn mark_revealed(&mut self) {
        self.revealed = true;
        self.flagged = false;
    }

    /// Flips the flag and reports the new value. No-op on revealed cells.
    pub(crate) fn toggle_flag(&mut self) -> Option<bool> {
        if self.revealed {
            return None;
        }
        self.flagged = !self.flagged;
        Some(self.flagged)
    }
}
