#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use event::*;
pub use placement::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod event;
mod placement;
mod types;

/// Board dimensions plus the number of mines to bury in it.
///
/// `new` is the only way to obtain a validated config; the presets are
/// known-good and skip the check.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GridConfig {
    /// 9x9 board with 10 mines.
    pub const BEGINNER: Self = Self::new_unchecked((9, 9), 10);
    /// 16x16 board with 40 mines.
    pub const INTERMEDIATE: Self = Self::new_unchecked((16, 16), 40);
    /// 30x16 board with 99 mines.
    pub const EXPERT: Self = Self::new_unchecked((30, 16), 99);

    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Validates that the mine count leaves room for the first-click safe
    /// zone: `0 < mines < width * height - 9`.
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        let (width, height) = size;
        let total = area(width, height);

        if mines == 0 || total < 9 || mines >= total - 9 {
            return Err(GridError::MineCountOutOfRange {
                width,
                height,
                mines,
            });
        }

        Ok(Self::new_unchecked(size, mines))
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.size.0, self.size.1)
    }

    /// Number of cells that are not mines, i.e. the reveal target for a win.
    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        coords.0 < self.size.0 && coords.1 < self.size.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_mines() {
        assert_eq!(
            GridConfig::new((9, 9), 0),
            Err(GridError::MineCountOutOfRange {
                width: 9,
                height: 9,
                mines: 0,
            })
        );
    }

    #[test]
    fn rejects_mine_count_that_crowds_the_safe_zone() {
        // 4x4 = 16 cells, safe zone takes 9, so at most 6 mines fit
        assert!(GridConfig::new((4, 4), 7).is_err());
        assert!(GridConfig::new((4, 4), 6).is_ok());
    }

    #[test]
    fn rejects_boards_smaller_than_the_safe_zone() {
        assert!(GridConfig::new((2, 2), 1).is_err());
    }

    #[test]
    fn presets_pass_validation() {
        for preset in [
            GridConfig::BEGINNER,
            GridConfig::INTERMEDIATE,
            GridConfig::EXPERT,
        ] {
            assert_eq!(GridConfig::new(preset.size, preset.mines), Ok(preset));
        }
    }

    #[test]
    fn safe_cells_is_total_minus_mines() {
        assert_eq!(GridConfig::EXPERT.total_cells(), 480);
        assert_eq!(GridConfig::EXPERT.safe_cells(), 381);
    }
}
