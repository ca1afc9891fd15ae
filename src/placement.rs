use alloc::vec::Vec;
use ndarray::Array2;
use rand::prelude::*;

use crate::*;

/// Produces the mine mask for a board, given the first-clicked position.
///
/// Placement runs exactly once per game, at the moment of the first reveal,
/// so the first click can be guaranteed safe.
pub trait MinePlacer {
    fn place(self, config: GridConfig, first_click: Coord2) -> Array2<bool>;
}

/// Uniform random placement that excludes the safe zone: the first-clicked
/// cell and its Moore neighbors are never mined, so the opening click always
/// lands on a zero-count cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomPlacer {
    seed: u64,
}

impl RandomPlacer {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinePlacer for RandomPlacer {
    fn place(self, config: GridConfig, first_click: Coord2) -> Array2<bool> {
        let (width, height) = config.size;
        let mut mask: Array2<bool> = Array2::default(config.size.to_nd_index());

        let mut safe_zone: Vec<Coord2> = moore_neighbors(first_click, config.size).collect();
        safe_zone.push(first_click);

        let mut candidates: Vec<Coord2> = Vec::with_capacity(usize::from(config.total_cells()));
        for x in 0..width {
            for y in 0..height {
                let pos = (x, y);
                if !safe_zone.contains(&pos) {
                    candidates.push(pos);
                }
            }
        }

        // config validation guarantees mines < candidates.len()
        let wanted = usize::from(config.mines);
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let (chosen, _) = candidates.partial_shuffle(&mut rng, wanted);
        for &pos in chosen.iter() {
            mask[pos.to_nd_index()] = true;
        }

        let placed = mask.iter().filter(|&&is_mine| is_mine).count();
        if placed != wanted {
            log::warn!("mine placement mismatch: placed {placed}, wanted {wanted}");
        }
        log::debug!(
            "placed {placed} mines on {width}x{height} board, safe zone around {first_click:?}"
        );

        mask
    }
}
