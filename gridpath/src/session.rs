//! Editing and run control over one grid.
//!
//! A [`Session`] owns the grid, the remembered start and end cells and at
//! most one active [`Search`]. Pointer commands keep the single-start,
//! single-end invariant; the cell state machine itself does not.

use gridpath_paths::{Grid, Outcome, Pos, Progress, Search};

#[derive(Debug)]
pub struct Session {
    grid: Grid,
    start: Option<Pos>,
    end: Option<Pos>,
    search: Option<Search>,
    last_outcome: Option<Outcome>,
}

impl Session {
    /// A session over a fresh `rows` x `rows` grid drawn `pixel_width` wide.
    pub fn new(rows: usize, pixel_width: i32) -> Self {
        Self {
            grid: Grid::new(rows, pixel_width),
            start: None,
            end: None,
            search: None,
            last_outcome: None,
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn start(&self) -> Option<Pos> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Pos> {
        self.end
    }

    /// Whether a search is in progress.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.search.is_some()
    }

    /// How the most recent run ended.
    #[inline]
    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    /// Place start, then end, then barriers. Returns whether the grid changed.
    pub fn primary(&mut self, pos: Pos) -> bool {
        if self.is_running() || !self.grid.contains(pos) {
            return false;
        }
        let here = Some(pos);
        if self.start.is_none() && self.end != here {
            self.grid.node_mut(pos).make_start();
            self.start = here;
            log::debug!("start at {pos}");
        } else if self.end.is_none() && self.start != here {
            self.grid.node_mut(pos).make_end();
            self.end = here;
            log::debug!("end at {pos}");
        } else if self.start != here && self.end != here {
            if self.grid.node(pos).is_barrier() {
                return false;
            }
            self.grid.node_mut(pos).make_barrier();
        } else {
            return false;
        }
        true
    }

    /// Reset a cell to default, forgetting it as start or end.
    pub fn secondary(&mut self, pos: Pos) -> bool {
        if self.is_running() || !self.grid.contains(pos) {
            return false;
        }
        let here = Some(pos);
        if self.start == here {
            self.start = None;
            log::debug!("start cleared");
        } else if self.end == here {
            self.end = None;
            log::debug!("end cleared");
        }
        self.grid.node_mut(pos).reset();
        true
    }

    /// Begin a search. Refused while one is active or without both
    /// endpoints.
    ///
    /// Marks left by a previous run are cleared first and neighbour lists
    /// rebuilt from the current barriers.
    pub fn start_run(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        let (Some(start), Some(end)) = (self.start, self.end) else {
            log::debug!("run refused: start and end must both be set");
            return false;
        };

        self.grid.clear_search();
        self.grid.node_mut(start).make_start();
        self.grid.node_mut(end).make_end();
        self.grid.recompute_neighbors();

        log::info!("run {start} -> {end}");
        self.search = Some(Search::new(&mut self.grid, start, end));
        self.last_outcome = None;
        true
    }

    /// Advance the active search by one checkpoint.
    pub fn step(&mut self) -> Option<Progress> {
        let search = self.search.as_mut()?;
        let progress = search.step(&mut self.grid);
        if let Progress::Done(outcome) = progress {
            self.finish(outcome);
        }
        Some(progress)
    }

    /// Cancel the active search before its next expansion. The grid keeps
    /// its interrupted marks. Returns `false` when nothing was cancelled,
    /// which includes a run already revealing its path.
    pub fn cancel(&mut self) -> bool {
        let cancelled = self
            .search
            .as_mut()
            .is_some_and(|s| s.cancel(&mut self.grid));
        if cancelled {
            self.finish(Outcome::Cancelled);
        }
        cancelled
    }

    /// Rebuild the grid with every cell default and no endpoints, discarding
    /// any active run.
    pub fn reset(&mut self) {
        if self.search.take().is_some() {
            log::debug!("active run discarded");
        }
        self.grid = Grid::new(self.grid.rows(), self.grid.pixel_width());
        self.start = None;
        self.end = None;
        self.last_outcome = None;
        log::info!("grid reset");
    }

    fn finish(&mut self, outcome: Outcome) {
        if let Some(search) = self.search.take() {
            log::info!(
                "run {}: {} expanded, {} path cells, {} left open",
                outcome.name(),
                search.expanded(),
                search.traced(),
                search.frontier()
            );
        }
        self.last_outcome = Some(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_paths::Status;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn run_to_end(s: &mut Session) -> (Outcome, usize) {
        let mut checkpoints = 0;
        loop {
            match s.step() {
                Some(Progress::Done(outcome)) => return (outcome, checkpoints),
                Some(_) => checkpoints += 1,
                None => panic!("no active run"),
            }
        }
    }

    #[test]
    fn clicks_place_start_end_then_barriers() {
        let mut s = Session::new(5, 5);
        assert!(s.primary(Pos::new(0, 0)));
        assert!(s.primary(Pos::new(4, 4)));
        assert!(s.primary(Pos::new(2, 2)));
        assert_eq!(s.start(), Some(Pos::new(0, 0)));
        assert_eq!(s.end(), Some(Pos::new(4, 4)));
        assert!(s.grid().node(Pos::new(2, 2)).is_barrier());
    }

    #[test]
    fn second_click_on_start_does_not_make_end() {
        let mut s = Session::new(5, 5);
        s.primary(Pos::new(1, 1));
        assert!(!s.primary(Pos::new(1, 1)));
        assert_eq!(s.end(), None);
        assert!(s.grid().node(Pos::new(1, 1)).is_start());
    }

    #[test]
    fn start_is_not_placed_on_the_end() {
        let mut s = Session::new(5, 5);
        s.primary(Pos::new(0, 0));
        s.primary(Pos::new(3, 3));
        s.secondary(Pos::new(0, 0));
        assert!(!s.primary(Pos::new(3, 3)));
        assert_eq!(s.start(), None);
        assert!(s.primary(Pos::new(2, 0)));
        assert_eq!(s.start(), Some(Pos::new(2, 0)));
    }

    #[test]
    fn secondary_click_forgets_endpoints() {
        let mut s = Session::new(5, 5);
        s.primary(Pos::new(0, 0));
        s.primary(Pos::new(4, 4));
        s.primary(Pos::new(1, 1));
        s.secondary(Pos::new(4, 4));
        s.secondary(Pos::new(1, 1));
        assert_eq!(s.end(), None);
        assert_eq!(s.grid().node(Pos::new(1, 1)).status(), Status::Default);
        // The next primary click places the end again.
        s.primary(Pos::new(3, 3));
        assert_eq!(s.end(), Some(Pos::new(3, 3)));
    }

    #[test]
    fn run_is_refused_without_both_endpoints() {
        let mut s = Session::new(5, 5);
        assert!(!s.start_run());
        s.primary(Pos::new(0, 0));
        assert!(!s.start_run());
        assert!(!s.is_running());
    }

    #[test]
    fn run_finds_the_path() {
        let mut s = Session::new(5, 5);
        s.primary(Pos::new(0, 0));
        s.primary(Pos::new(4, 4));
        assert!(s.start_run());
        assert!(!s.start_run());
        let (outcome, checkpoints) = run_to_end(&mut s);
        assert_eq!(outcome, Outcome::Found);
        assert_eq!(s.last_outcome(), Some(Outcome::Found));
        assert!(!s.is_running());
        assert_eq!(s.grid().count(Status::Path), 7);
        assert!(checkpoints > 7);
        assert!(s.grid().node(Pos::new(4, 4)).is_end());
    }

    #[test]
    fn editing_is_disabled_while_running() {
        let mut s = Session::new(5, 5);
        s.primary(Pos::new(0, 0));
        s.primary(Pos::new(4, 4));
        s.start_run();
        assert!(!s.primary(Pos::new(2, 2)));
        assert!(!s.secondary(Pos::new(0, 0)));
        assert_eq!(s.start(), Some(Pos::new(0, 0)));
    }

    #[test]
    fn barriers_placed_after_a_run_are_honoured() {
        let mut s = Session::new(5, 5);
        s.primary(Pos::new(0, 0));
        s.primary(Pos::new(4, 0));
        s.start_run();
        run_to_end(&mut s);
        assert_eq!(s.grid().count(Status::Path), 3);

        for c in 0..4 {
            s.primary(Pos::new(2, c));
        }
        assert!(s.start_run());
        let (outcome, _) = run_to_end(&mut s);
        assert_eq!(outcome, Outcome::Found);
        assert_eq!(s.grid().count(Status::Path), 11);
        assert!(s.grid().node(Pos::new(2, 4)).is_path());
    }

    #[test]
    fn rerun_clears_previous_marks() {
        let mut s = Session::new(6, 6);
        s.primary(Pos::new(0, 0));
        s.primary(Pos::new(5, 5));
        s.start_run();
        run_to_end(&mut s);
        s.start_run();
        assert_eq!(s.grid().count(Status::Path), 0);
        assert_eq!(s.grid().count(Status::Closed), 0);
        run_to_end(&mut s);
        assert_eq!(s.grid().count(Status::Path), 9);
    }

    #[test]
    fn cancel_leaves_marks_in_place() {
        let mut s = Session::new(8, 8);
        s.primary(Pos::new(0, 0));
        s.primary(Pos::new(7, 7));
        s.start_run();
        for _ in 0..4 {
            s.step();
        }
        assert!(s.cancel());
        assert!(!s.is_running());
        assert_eq!(s.last_outcome(), Some(Outcome::Cancelled));
        assert!(s.grid().count(Status::Closed) > 0);
        assert_eq!(s.grid().count(Status::Path), 0);
        assert!(!s.cancel());
    }

    #[test]
    fn cancel_is_refused_during_reveal() {
        let mut s = Session::new(3, 3);
        s.primary(Pos::new(0, 0));
        s.primary(Pos::new(0, 2));
        s.start_run();
        while !matches!(s.step(), Some(Progress::Traced(_))) {}
        assert!(!s.cancel());
        assert!(s.is_running());
        assert_eq!(run_to_end(&mut s).0, Outcome::Found);
    }

    #[test]
    fn reset_discards_everything() {
        let mut s = Session::new(5, 5);
        s.primary(Pos::new(0, 0));
        s.primary(Pos::new(4, 4));
        s.primary(Pos::new(2, 2));
        s.start_run();
        s.step();
        s.reset();
        assert!(!s.is_running());
        assert_eq!(s.start(), None);
        assert_eq!(s.end(), None);
        assert_eq!(s.grid().count(Status::Default), 25);
    }

    #[test]
    fn random_clicks_keep_single_start_and_end() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut s = Session::new(6, 6);
        for _ in 0..2000 {
            let pos = Pos::new(rng.random_range(0..6), rng.random_range(0..6));
            if rng.random_bool(0.6) {
                s.primary(pos);
            } else {
                s.secondary(pos);
            }

            let starts = s.grid().count(Status::Start);
            let ends = s.grid().count(Status::End);
            assert!(starts <= 1 && ends <= 1);
            assert_eq!(starts == 1, s.start().is_some());
            assert_eq!(ends == 1, s.end().is_some());
            if let (Some(a), Some(b)) = (s.start(), s.end()) {
                assert_ne!(a, b);
                assert!(s.grid().node(a).is_start());
                assert!(s.grid().node(b).is_end());
            }
        }
    }
}
