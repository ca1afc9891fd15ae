use crate::{CellCount, Coord};
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("{mines} mines do not fit a {width}x{height} board with a safe opening")]
    MineCountOutOfRange {
        width: Coord,
        height: Coord,
        mines: CellCount,
    },
    #[error("coordinates outside the board")]
    OutOfBounds,
}

pub type Result<T> = core::result::Result<T, GridError>;
