/// Position on one axis, also used for board width and height.
pub type Coord = u8;

/// Number of cells, wide enough for a full 255x255 board.
pub type CellCount = u16;

/// Cell position as `(x, y)`, or board size as `(width, height)`.
pub type Coord2 = (Coord, Coord);

/// Index into the backing `Array2`, which is laid out `[x, y]`.
pub(crate) fn nd_index((x, y): Coord2) -> [usize; 2] {
    [x.into(), y.into()]
}

pub const fn cell_count(width: Coord, height: Coord) -> CellCount {
    width as CellCount * height as CellCount
}

/// Walks the 3x3 window around a cell in row-major order, clipped to the board and skipping
/// the cell itself.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    x_range: (Coord, Coord),
    y_max: Coord,
    next: Option<Coord2>,
}

impl NeighborIter {
    /// `center` must lie inside a board of `size`.
    pub fn new(center: Coord2, size: Coord2) -> Self {
        let clip = |at: Coord, len: Coord| (at.saturating_sub(1), at.saturating_add(1).min(len - 1));
        let (x_min, x_max) = clip(center.0, size.0);
        let (y_min, y_max) = clip(center.1, size.1);
        Self {
            center,
            x_range: (x_min, x_max),
            y_max,
            next: Some((x_min, y_min)),
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let current = self.next?;
            let (x, y) = current;
            let (x_min, x_max) = self.x_range;
            self.next = if x < x_max {
                Some((x + 1, y))
            } else if y < self.y_max {
                Some((x_min, y + 1))
            } else {
                None
            };

            if current != self.center {
                return Some(current);
            }
        }
    }
}
