//! Per-cell state: [`Pos`], [`Status`] and [`Node`].
//!
//! The state machine is permissive: every `make_*` command moves a node to
//! the named status from any status. Keeping a single start and a single end
//! is the job of whoever issues the commands.

use std::fmt;

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// A cell coordinate. `row` grows downward, `col` grows rightward.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Linear arena index in a square grid of side `rows`.
    #[inline]
    pub const fn index(self, rows: usize) -> usize {
        self.row * rows + self.col
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub const fn from_index(idx: usize, rows: usize) -> Self {
        Self {
            row: idx / rows,
            col: idx % rows,
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// What a cell currently is, as far as the user and the search are concerned.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    #[default]
    Default,
    /// Discovered, waiting in the open set.
    Open,
    /// Fully expanded.
    Closed,
    Barrier,
    Start,
    End,
    Path,
}

impl Status {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Barrier => "barrier",
            Self::Start => "start",
            Self::End => "end",
            Self::Path => "path",
        }
    }

    /// Marks left behind by a search run.
    #[inline]
    pub const fn is_search_mark(self) -> bool {
        matches!(self, Self::Open | Self::Closed | Self::Path)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// One grid cell: status, search scores and adjacency.
#[derive(Clone, Debug)]
pub struct Node {
    pos: Pos,
    status: Status,
    pub(crate) g_score: f32,
    pub(crate) f_score: f32,
    /// Arena indices of passable neighbours, in down, up, right, left order.
    pub(crate) neighbors: Vec<usize>,
}

impl Node {
    pub fn new(pos: Pos) -> Self {
        Self {
            pos,
            status: Status::Default,
            g_score: f32::INFINITY,
            f_score: f32::INFINITY,
            neighbors: Vec::with_capacity(4),
        }
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Best known distance from the start of the last run.
    #[inline]
    pub fn g_score(&self) -> f32 {
        self.g_score
    }

    /// `g_score` plus the heuristic estimate to the end.
    #[inline]
    pub fn f_score(&self) -> f32 {
        self.f_score
    }

    /// Neighbour arena indices as of the last
    /// [`recompute_neighbors`](crate::Grid::recompute_neighbors).
    #[inline]
    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }

    pub(crate) fn reset_scores(&mut self) {
        self.g_score = f32::INFINITY;
        self.f_score = f32::INFINITY;
    }

    // --- commands ---

    pub fn reset(&mut self) {
        self.status = Status::Default;
    }

    pub fn make_start(&mut self) {
        self.status = Status::Start;
    }

    pub fn make_end(&mut self) {
        self.status = Status::End;
    }

    pub fn make_barrier(&mut self) {
        self.status = Status::Barrier;
    }

    pub fn make_open(&mut self) {
        self.status = Status::Open;
    }

    pub fn make_closed(&mut self) {
        self.status = Status::Closed;
    }

    pub fn make_path(&mut self) {
        self.status = Status::Path;
    }

    // --- queries ---

    #[inline]
    pub fn is_open(&self) -> bool {
        self.status == Status::Open
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.status == Status::Closed
    }

    #[inline]
    pub fn is_barrier(&self) -> bool {
        self.status == Status::Barrier
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.status == Status::Start
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.status == Status::End
    }

    #[inline]
    pub fn is_path(&self) -> bool {
        self.status == Status::Path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_is_default_with_infinite_scores() {
        let n = Node::new(Pos::new(2, 3));
        assert_eq!(n.pos(), Pos::new(2, 3));
        assert_eq!(n.status(), Status::Default);
        assert!(n.g_score().is_infinite());
        assert!(n.f_score().is_infinite());
        assert!(n.neighbors().is_empty());
    }

    #[test]
    fn every_command_is_accepted_from_any_state() {
        let commands: [(fn(&mut Node), Status); 7] = [
            (Node::reset, Status::Default),
            (Node::make_start, Status::Start),
            (Node::make_end, Status::End),
            (Node::make_barrier, Status::Barrier),
            (Node::make_open, Status::Open),
            (Node::make_closed, Status::Closed),
            (Node::make_path, Status::Path),
        ];
        for (from, _) in &commands {
            for (to, expected) in &commands {
                let mut n = Node::new(Pos::new(0, 0));
                from(&mut n);
                to(&mut n);
                assert_eq!(n.status(), *expected);
            }
        }
    }

    #[test]
    fn predicates_read_status() {
        let mut n = Node::new(Pos::new(0, 0));
        n.make_barrier();
        assert!(n.is_barrier());
        assert!(!n.is_open() && !n.is_closed() && !n.is_start() && !n.is_end());
        n.make_open();
        assert!(n.is_open());
        n.make_closed();
        assert!(n.is_closed());
        n.make_start();
        assert!(n.is_start());
        n.make_end();
        assert!(n.is_end());
        n.make_path();
        assert!(n.is_path());
        n.reset();
        assert_eq!(n.status(), Status::Default);
    }

    #[test]
    fn search_marks() {
        assert!(Status::Open.is_search_mark());
        assert!(Status::Closed.is_search_mark());
        assert!(Status::Path.is_search_mark());
        assert!(!Status::Barrier.is_search_mark());
        assert!(!Status::Start.is_search_mark());
        assert!(!Status::End.is_search_mark());
        assert!(!Status::Default.is_search_mark());
    }

    #[test]
    fn pos_index_round_trip() {
        let rows = 7;
        for idx in 0..rows * rows {
            assert_eq!(Pos::from_index(idx, rows).index(rows), idx);
        }
        assert_eq!(Pos::new(1, 2).index(7), 9);
    }
}
