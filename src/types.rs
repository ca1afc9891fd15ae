use ndarray::Array2;

/// Single coordinate axis, also used for board width and height.
pub type Coord = u8;

/// Area-scale count, used for mine totals and cell totals.
pub type CellCount = u16;

/// Grid position `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn area(w: Coord, h: Coord) -> CellCount {
    let w = w as CellCount;
    let h = h as CellCount;
    w.saturating_mul(h)
}

/// The 8 unit offsets of the Moore neighborhood. Fixed order: row by row,
/// top-left to bottom-right. Event emission order depends on it.
const OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// In-bounds Moore neighbors of `center`, in [`OFFSETS`] order.
///
/// Positions outside `[0, bounds)` on either axis are silently skipped. This
/// is the single adjacency definition used everywhere: mine counting,
/// flood-fill, chord matching, and safe-zone exclusion.
pub fn moore_neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    OFFSETS
        .iter()
        .filter_map(move |&delta| shifted(center, delta, bounds))
}

fn shifted((x, y): Coord2, (dx, dy): (i8, i8), (max_x, max_y): Coord2) -> Option<Coord2> {
    let next_x = x.checked_add_signed(dx)?;
    let next_y = y.checked_add_signed(dy)?;
    (next_x < max_x && next_y < max_y).then_some((next_x, next_y))
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, center: Coord2) -> impl Iterator<Item = Coord2>;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, center: Coord2) -> impl Iterator<Item = Coord2> {
        let dim = self.dim();
        let bounds = (
            dim.0.try_into().expect("axis fits Coord"),
            dim.1.try_into().expect("axis fits Coord"),
        );
        moore_neighbors(center, bounds)
    }
}
