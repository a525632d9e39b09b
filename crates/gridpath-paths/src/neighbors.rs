use crate::node::Pos;

/// An axis-aligned step on the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Down,
    Up,
    Right,
    Left,
}

impl Direction {
    /// Neighbour priority order. Earlier directions are pushed to the open
    /// set first and so win equal-score ties.
    pub const ORDER: [Direction; 4] = [Self::Down, Self::Up, Self::Right, Self::Left];

    /// The cell one step away from `pos`, or `None` if it leaves a square
    /// grid of side `rows`.
    #[inline]
    pub fn step(self, pos: Pos, rows: usize) -> Option<Pos> {
        match self {
            Self::Down if pos.row + 1 < rows => Some(Pos::new(pos.row + 1, pos.col)),
            Self::Up if pos.row > 0 => Some(Pos::new(pos.row - 1, pos.col)),
            Self::Right if pos.col + 1 < rows => Some(Pos::new(pos.row, pos.col + 1)),
            Self::Left if pos.col > 0 => Some(Pos::new(pos.row, pos.col - 1)),
            _ => None,
        }
    }
}

/// In-bounds cardinal neighbours of `pos`, in [`Direction::ORDER`].
pub fn cardinal(pos: Pos, rows: usize) -> impl Iterator<Item = Pos> {
    Direction::ORDER
        .into_iter()
        .filter_map(move |d| d.step(pos, rows))
}
