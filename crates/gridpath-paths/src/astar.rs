//! Step-wise A* over a [`Grid`].
//!
//! [`Search`] advances one checkpoint at a time: each call to
//! [`Search::step`] either expands one cell, marks one cell of the
//! reconstructed path, or reports the final [`Outcome`]. The caller renders
//! and polls for cancellation between steps; [`run`] packages that loop
//! behind two callbacks.

use crate::distance::heuristic;
use crate::grid::Grid;
use crate::node::Pos;
use crate::open_set::OpenSet;

/// How a search run ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The end was reached and the path is marked.
    Found,
    /// The open set emptied without reaching the end.
    Exhausted,
    /// Stopped on request before an expansion.
    Cancelled,
}

impl Outcome {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Found => "found",
            Self::Exhausted => "exhausted",
            Self::Cancelled => "cancelled",
        }
    }
}

/// What one [`Search::step`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Progress {
    /// A cell was popped and its neighbours relaxed.
    Expanded(Pos),
    /// A cell on the way back from the end was marked `path`.
    Traced(Pos),
    /// The run is over. Repeated calls keep returning this.
    Done(Outcome),
}

impl Progress {
    /// Whether the caller should render after this step.
    #[inline]
    pub fn is_checkpoint(self) -> bool {
        !matches!(self, Self::Done(_))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Phase {
    Searching,
    /// Walking `came_from` back toward the start; `cursor` was marked last.
    Tracing {
        cursor: usize,
    },
    Finished(Outcome),
}

/// State of one search run.
#[derive(Debug)]
pub struct Search {
    rows: usize,
    start: usize,
    end: usize,
    open: OpenSet,
    came_from: Vec<Option<usize>>,
    phase: Phase,
    /// Expanded on the previous step. It is closed at the start of the next
    /// step so the checkpoint in between still shows it as the frontier.
    pending_close: Option<usize>,
    expanded: usize,
    traced: usize,
}

impl Search {
    /// Reset all scores and seed the open set with `start`.
    ///
    /// Neighbour lists must be current (see
    /// [`Grid::recompute_neighbors`]). `start` and `end` must be inside the
    /// grid.
    pub fn new(grid: &mut Grid, start: Pos, end: Pos) -> Self {
        let rows = grid.rows();
        let si = grid.index(start);
        let ei = grid.index(end);

        grid.reset_scores();
        let h = heuristic(start, end);
        let node = &mut grid.nodes[si];
        node.g_score = 0.0;
        node.f_score = h;

        let mut open = OpenSet::new(grid.len());
        open.push(si, h);

        log::debug!("search {start} -> {end} on a {rows}x{rows} grid");

        Self {
            rows,
            start: si,
            end: ei,
            open,
            came_from: vec![None; grid.len()],
            phase: Phase::Searching,
            pending_close: None,
            expanded: 0,
            traced: 0,
        }
    }

    /// Advance by one checkpoint.
    pub fn step(&mut self, grid: &mut Grid) -> Progress {
        self.close_pending(grid);
        match self.phase {
            Phase::Searching => self.expand(grid),
            Phase::Tracing { cursor } => self.trace(grid, cursor),
            Phase::Finished(outcome) => Progress::Done(outcome),
        }
    }

    /// Stop before the next expansion, leaving the grid as it is.
    ///
    /// Returns `false` without effect once the end has been reached: the
    /// path reveal always runs to completion.
    pub fn cancel(&mut self, grid: &mut Grid) -> bool {
        if self.phase != Phase::Searching {
            return false;
        }
        self.close_pending(grid);
        self.finish(Outcome::Cancelled);
        true
    }

    /// Whether the next step pops from a non-empty open set. Cancellation
    /// is only observed at these points.
    #[inline]
    pub fn awaiting_expansion(&self) -> bool {
        self.phase == Phase::Searching && !self.open.is_empty()
    }

    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Cells popped and expanded so far. Popping the end is not counted.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Cells marked `path` so far.
    #[inline]
    pub fn traced(&self) -> usize {
        self.traced
    }

    /// Cells currently in the open set.
    #[inline]
    pub fn frontier(&self) -> usize {
        self.open.len()
    }

    /// The recorded predecessor of `pos`.
    pub fn came_from(&self, pos: Pos) -> Option<Pos> {
        self.came_from
            .get(pos.index(self.rows))
            .copied()
            .flatten()
            .map(|i| Pos::from_index(i, self.rows))
    }

    /// The full path from start to end, both included, once the run has
    /// ended with [`Outcome::Found`].
    pub fn path(&self) -> Option<Vec<Pos>> {
        if self.outcome() != Some(Outcome::Found) {
            return None;
        }
        let mut path = vec![self.end];
        let mut ci = self.end;
        while ci != self.start {
            ci = self.came_from[ci]?;
            path.push(ci);
        }
        path.reverse();
        Some(
            path.into_iter()
                .map(|i| Pos::from_index(i, self.rows))
                .collect(),
        )
    }

    fn close_pending(&mut self, grid: &mut Grid) {
        if let Some(ci) = self.pending_close.take() {
            grid.nodes[ci].make_closed();
        }
    }

    fn expand(&mut self, grid: &mut Grid) -> Progress {
        let Some((ci, _)) = self.open.pop() else {
            return self.finish(Outcome::Exhausted);
        };

        if ci == self.end {
            self.phase = Phase::Tracing { cursor: ci };
            return self.trace(grid, ci);
        }

        let end_pos = grid.pos(self.end);
        let tentative_g = grid.nodes[ci].g_score + 1.0;

        let neighbors = std::mem::take(&mut grid.nodes[ci].neighbors);
        for &ni in &neighbors {
            let n = &mut grid.nodes[ni];
            if tentative_g < n.g_score {
                self.came_from[ni] = Some(ci);
                n.g_score = tentative_g;
                n.f_score = tentative_g + heuristic(n.pos(), end_pos);
                if !self.open.contains(ni) {
                    self.open.push(ni, n.f_score);
                    n.make_open();
                }
            }
        }
        grid.nodes[ci].neighbors = neighbors;

        self.expanded += 1;
        if ci != self.start {
            self.pending_close = Some(ci);
        }

        let pos = grid.pos(ci);
        log::trace!(
            "expanded {pos} g={} frontier={}",
            grid.nodes[ci].g_score,
            self.open.len()
        );
        Progress::Expanded(pos)
    }

    fn trace(&mut self, grid: &mut Grid, cursor: usize) -> Progress {
        match self.came_from[cursor] {
            Some(prev) if prev != self.start => {
                grid.nodes[prev].make_path();
                self.traced += 1;
                self.phase = Phase::Tracing { cursor: prev };
                Progress::Traced(grid.pos(prev))
            }
            _ => {
                grid.nodes[self.end].make_end();
                grid.nodes[self.start].make_start();
                self.finish(Outcome::Found)
            }
        }
    }

    fn finish(&mut self, outcome: Outcome) -> Progress {
        self.phase = Phase::Finished(outcome);
        log::debug!(
            "search {} after {} expansions, {} path cells",
            outcome.name(),
            self.expanded,
            self.traced
        );
        Progress::Done(outcome)
    }
}

/// Run a whole search.
///
/// `cancel_check` is polled before every expansion; `checkpoint` is called
/// once after every expansion and once per path cell marked.
pub fn run<C, K>(
    grid: &mut Grid,
    start: Pos,
    end: Pos,
    mut checkpoint: C,
    mut cancel_check: K,
) -> Outcome
where
    C: FnMut(&Grid),
    K: FnMut() -> bool,
{
    let mut search = Search::new(grid, start, end);
    loop {
        if search.awaiting_expansion() && cancel_check() {
            search.cancel(grid);
            return Outcome::Cancelled;
        }
        let progress = search.step(grid);
        if progress.is_checkpoint() {
            checkpoint(grid);
        } else if let Progress::Done(outcome) = progress {
            return outcome;
        }
    }
}
