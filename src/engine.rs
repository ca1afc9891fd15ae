use alloc::collections::VecDeque;
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Overall game state. Advances monotonically: `Unstarted` → `InProgress` →
/// `Won`/`Lost`, and never moves again once terminal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Unstarted,
    InProgress,
    Won,
    Lost,
}

impl Phase {
    pub const fn is_unstarted(self) -> bool {
        matches!(self, Self::Unstarted)
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// The grid state machine: owns every cell, defers mine placement to the
/// first reveal, and turns `reveal`/`toggle_flag` commands into batches of
/// [`GridEvent`]s for a rendering layer to consume.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridEngine {
    config: GridConfig,
    board: Array2<Cell>,
    phase: Phase,
    safe_remaining: CellCount,
    flags_placed: CellCount,
    mines_placed: bool,
    seed: u64,
}

impl GridEngine {
    /// New game with deferred placement: mines are buried on the first
    /// `reveal`, with a safe zone around the clicked cell.
    pub fn new(config: GridConfig, seed: u64) -> Self {
        Self {
            config,
            board: Array2::default(config.size.to_nd_index()),
            phase: Phase::Unstarted,
            safe_remaining: config.safe_cells(),
            flags_placed: 0,
            mines_placed: false,
            seed,
        }
    }

    /// Game with an explicit mine layout, for tests and replays. Placement
    /// is already done, so no safe zone applies and the mine count is simply
    /// the number of distinct coordinates given.
    pub fn with_mines(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut board: Array2<Cell> = Array2::default(size.to_nd_index());

        let mut mines: CellCount = 0;
        for &pos in mine_coords {
            if pos.0 >= size.0 || pos.1 >= size.1 {
                return Err(GridError::OutOfBounds);
            }
            let cell = &mut board[pos.to_nd_index()];
            if !cell.is_mine() {
                cell.arm();
                mines += 1;
            }
        }

        let config = GridConfig::new_unchecked(size, mines);
        let mut engine = Self {
            config,
            board,
            phase: Phase::Unstarted,
            safe_remaining: config.safe_cells(),
            flags_placed: 0,
            mines_placed: true,
            seed: 0,
        };
        engine.compute_adjacency();
        Ok(engine)
    }

    pub fn config(&self) -> GridConfig {
        self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn total_mines(&self) -> CellCount {
        self.config.mines
    }

    /// Advisory flag budget: mines minus flags placed. Goes negative when
    /// the player over-flags; deliberately unclamped.
    pub fn flags_left(&self) -> isize {
        (self.config.mines as isize) - (self.flags_placed as isize)
    }

    /// Safe cells still covered; the game is won when this reaches zero.
    pub fn safe_remaining(&self) -> CellCount {
        self.safe_remaining
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.board[coords.to_nd_index()]
    }

    /// Reveals a cell, or chords on an already-revealed one.
    ///
    /// Out-of-bounds coordinates are rejected without mutating anything.
    /// After the game has ended the board is frozen and the call is a silent
    /// no-op, as is revealing a flagged cell.
    pub fn reveal(&mut self, coords: Coord2) -> Result<Vec<GridEvent>> {
        let coords = self.validate(coords)?;
        let mut events = Vec::new();

        if self.phase.is_terminal() {
            return Ok(events);
        }

        let cell = self.board[coords.to_nd_index()];
        if cell.is_flagged() {
            return Ok(events);
        }

        if cell.is_revealed() {
            self.chord(coords, &mut events);
        } else {
            if !self.mines_placed {
                self.place_mines(coords);
            }
            self.begin();
            self.reveal_walk(coords, &mut events);
        }

        Ok(events)
    }

    /// Flags or unflags a covered cell. Revealed cells are ignored, and the
    /// budget never blocks flagging.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<Vec<GridEvent>> {
        let coords = self.validate(coords)?;
        let mut events = Vec::new();

        if self.phase.is_terminal() {
            return Ok(events);
        }

        match self.board[coords.to_nd_index()].toggle_flag() {
            Some(true) => {
                self.flags_placed += 1;
                events.push(GridEvent::CellFlagged { pos: coords });
            }
            Some(false) => {
                self.flags_placed -= 1;
                events.push(GridEvent::CellUnflagged { pos: coords });
            }
            None => {}
        }

        Ok(events)
    }

    fn validate(&self, coords: Coord2) -> Result<Coord2> {
        if self.config.contains(coords) {
            Ok(coords)
        } else {
            Err(GridError::OutOfBounds)
        }
    }

    fn begin(&mut self) {
        if self.phase.is_unstarted() {
            self.phase = Phase::InProgress;
        }
    }

    fn place_mines(&mut self, first_click: Coord2) {
        let mask = RandomPlacer::new(self.seed).place(self.config, first_click);
        for (idx, &is_mine) in mask.indexed_iter() {
            if is_mine {
                self.board[idx].arm();
            }
        }
        self.compute_adjacency();
        self.mines_placed = true;
    }

    /// One pass over the board, immediately after placement; counts are
    /// never recomputed afterwards.
    fn compute_adjacency(&mut self) {
        let (width, height) = self.config.size;
        for x in 0..width {
            for y in 0..height {
                let pos = (x, y);
                let count = self
                    .board
                    .iter_neighbors(pos)
                    .filter(|&n| self.board[n.to_nd_index()].is_mine())
                    .count();
                self.board[pos.to_nd_index()].set_adjacent_mines(count as u8);
            }
        }
    }

    /// Iterative flood-fill reveal starting at `origin`. The worklist walks
    /// the cyclic grid graph; the monotonic `revealed` flag is the visited
    /// set, so revisits through different neighbor paths terminate.
    ///
    /// Every popped cell runs the full three-way branch, mine check
    /// included, even though a mine can never border a zero-count cell.
    fn reveal_walk(&mut self, origin: Coord2, events: &mut Vec<GridEvent>) {
        let mut worklist = VecDeque::from([origin]);

        while let Some(pos) = worklist.pop_front() {
            let idx = pos.to_nd_index();
            if !self.board[idx].is_hidden() {
                continue;
            }
            self.board[idx].mark_revealed();

            if self.board[idx].is_mine() {
                events.push(GridEvent::CellUncovered {
                    pos,
                    shows: Uncovered::Mine,
                });
                self.finish(false, events);
                return;
            }

            self.safe_remaining -= 1;
            let count = self.board[idx].adjacent_mines();
            events.push(GridEvent::CellUncovered {
                pos,
                shows: Uncovered::Clear(count),
            });

            if count == 0 {
                let frontier: Vec<Coord2> = self
                    .board
                    .iter_neighbors(pos)
                    .filter(|&n| self.board[n.to_nd_index()].is_hidden())
                    .collect();
                worklist.extend(frontier);
            }
        }

        if self.safe_remaining == 0 {
            self.finish(true, events);
        }
    }

    /// Chord: when the flags around a revealed cell account for its number,
    /// reveal its remaining covered neighbors. Each neighbor gets a plain
    /// reveal walk, never a nested chord. A wrongly placed flag can make
    /// this hit a mine, which loses the game like any other mine reveal.
    fn chord(&mut self, coords: Coord2, events: &mut Vec<GridEvent>) {
        let target = self.board[coords.to_nd_index()];
        if self.count_flagged_neighbors(coords) != target.adjacent_mines() {
            return;
        }

        let neighbors: Vec<Coord2> = self.board.iter_neighbors(coords).collect();
        for pos in neighbors {
            if self.phase.is_terminal() {
                break;
            }
            if self.board[pos.to_nd_index()].is_hidden() {
                self.reveal_walk(pos, events);
            }
        }
    }

    fn count_flagged_neighbors(&self, coords: Coord2) -> u8 {
        self.board
            .iter_neighbors(coords)
            .filter(|&pos| self.board[pos.to_nd_index()].is_flagged())
            .count()
            .try_into()
            .unwrap()
    }

    fn finish(&mut self, won: bool, events: &mut Vec<GridEvent>) {
        if self.phase.is_terminal() {
            return;
        }
        self.phase = if won { Phase::Won } else { Phase::Lost };
        self.expose_board(events);
        events.push(if won {
            GridEvent::GameWon
        } else {
            GridEvent::GameLost
        });
    }

    /// Terminal side effect: uncover every still-covered, unflagged cell so
    /// the final board is fully visible. Flags stay put, and the reveal
    /// counters are left alone; this is presentation only.
    fn expose_board(&mut self, events: &mut Vec<GridEvent>) {
        let (width, height) = self.config.size;
        for x in 0..width {
            for y in 0..height {
                let pos = (x, y);
                let cell = &mut self.board[pos.to_nd_index()];
                if !cell.is_hidden() {
                    continue;
                }
                cell.mark_revealed();
                let shows = if cell.is_mine() {
                    Uncovered::Mine
                } else {
                    Uncovered::Clear(cell.adjacent_mines())
                };
                events.push(GridEvent::CellUncovered { pos, shows });
            }
        }
    }
}
