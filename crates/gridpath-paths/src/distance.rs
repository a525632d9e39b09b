use crate::node::Pos;

/// Manhattan (L1) distance between two cells.
#[inline]
pub fn manhattan(a: Pos, b: Pos) -> u32 {
    (a.row.abs_diff(b.row) + a.col.abs_diff(b.col)) as u32
}

/// The A* estimate of the remaining cost from `from` to `to`.
#[inline]
pub fn heuristic(from: Pos, to: Pos) -> f32 {
    manhattan(from, to) as f32
}
