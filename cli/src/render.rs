use core::fmt;

use sapper_core::{BoardSnapshot, CellView, Coord2};

const MARGIN: &str = "      ";
const EXPLODED: char = '*';

/// Boxed text rendering of a snapshot, row indices on the left and column indices below.
pub(crate) struct BoardText<'a> {
    snapshot: &'a BoardSnapshot,
    exploded: Option<Coord2>,
}

impl<'a> BoardText<'a> {
    pub fn new(snapshot: &'a BoardSnapshot) -> Self {
        Self {
            snapshot,
            exploded: None,
        }
    }

    /// Marks the mine that ended the game.
    pub fn with_exploded(mut self, exploded: Option<Coord2>) -> Self {
        self.exploded = exploded;
        self
    }

    fn glyph_at(&self, coords: Coord2) -> char {
        match self.snapshot.cell_at(coords) {
            CellView::Mine if self.exploded == Some(coords) => EXPLODED,
            cell => glyph(cell),
        }
    }
}

fn glyph(cell: CellView) -> char {
    match cell {
        CellView::Hidden => ' ',
        CellView::Mine => '#',
        CellView::Clear(0) => '·',
        CellView::Clear(count) => char::from(b'0' + count),
    }
}

impl fmt::Display for BoardText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, height) = self.snapshot.size();

        let ruler = |f: &mut fmt::Formatter<'_>, segment: &str, end: &str| -> fmt::Result {
            write!(f, "{MARGIN}")?;
            for _ in 0..width {
                write!(f, "{segment}")?;
            }
            writeln!(f, "{end}")
        };

        ruler(f, " _____", " ")?;
        for y in 0..height {
            ruler(f, "|     ", "|")?;
            write!(f, "{y:>4}  ")?;
            for x in 0..width {
                write!(f, "|  {}  ", self.glyph_at((x, y)))?;
            }
            writeln!(f, "|")?;
            ruler(f, "|_____", "|")?;
        }

        write!(f, "{MARGIN}")?;
        for x in 0..width {
            write!(f, "   {x:<3}")?;
        }
        writeln!(f)
    }
}
