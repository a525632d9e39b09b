//! Elm-architecture Model implementation.

use gridpath_core::{
    Painter, Point,
    app::{Effect, Model},
    messages::{Key, MouseAction, Msg},
};
use gridpath_paths::Pos;

use crate::render::{self, RenderOptions};
use crate::session::Session;

/// What a held pointer button does to the cells it crosses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stroke {
    Paint,
    Erase,
}

/// The visualizer model.
pub struct Visualizer {
    session: Session,
    opts: RenderOptions,
    stroke: Option<Stroke>,
    /// Last cell a stroke touched, so motion within one cell is a no-op.
    last_cell: Option<Pos>,
}

impl Visualizer {
    pub fn new(session: Session, opts: RenderOptions) -> Self {
        Self {
            session,
            opts,
            stroke: None,
            last_cell: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    // -------------------------------------------------------------------
    // Update
    // -------------------------------------------------------------------

    fn handle_key(&mut self, key: Key) -> Option<Effect> {
        match key {
            Key::Escape => self.handle_quit(),
            Key::Space => {
                self.session.start_run();
                None
            }
            Key::Char('r') if !self.session.is_running() => {
                self.session.reset();
                None
            }
            _ => None,
        }
    }

    /// During a run a quit request only cancels it.
    fn handle_quit(&mut self) -> Option<Effect> {
        if self.session.is_running() {
            self.session.cancel();
            None
        } else {
            Some(Effect::End)
        }
    }

    fn handle_mouse(&mut self, action: MouseAction, pos: Point) {
        match action {
            // A button released off-screen is only noticed as hover.
            MouseAction::Release | MouseAction::Hover => {
                self.stroke = None;
                self.last_cell = None;
            }
            MouseAction::Main => self.begin_stroke(Stroke::Paint, pos),
            MouseAction::Secondary => self.begin_stroke(Stroke::Erase, pos),
            MouseAction::Move => {
                if let Some(stroke) = self.stroke {
                    self.apply(stroke, pos);
                }
            }
            MouseAction::Auxiliary => {}
        }
    }

    fn begin_stroke(&mut self, stroke: Stroke, pos: Point) {
        if self.session.is_running() {
            return;
        }
        self.stroke = Some(stroke);
        self.last_cell = None;
        self.apply(stroke, pos);
    }

    fn apply(&mut self, stroke: Stroke, pos: Point) {
        let Some(cell) = self.session.grid().cell_at_pixel(pos) else {
            return;
        };
        if self.last_cell == Some(cell) {
            return;
        }
        self.last_cell = Some(cell);
        match stroke {
            Stroke::Paint => self.session.primary(cell),
            Stroke::Erase => self.session.secondary(cell),
        };
    }
}

impl Model for Visualizer {
    fn update(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::Init => {
                log::debug!(
                    "{}x{} grid, {}px cells",
                    self.session.grid().rows(),
                    self.session.grid().rows(),
                    self.session.grid().side()
                );
                None
            }
            Msg::Quit => self.handle_quit(),
            Msg::KeyDown { key } => self.handle_key(key),
            Msg::Mouse { action, pos } => {
                self.handle_mouse(action, pos);
                None
            }
            Msg::Tick => {
                self.session.step();
                None
            }
            Msg::Screen { width, height } => {
                log::debug!("screen resized to {width}x{height}; grid left as is");
                None
            }
        }
    }

    fn draw(&self, painter: &mut dyn Painter) {
        render::draw(self.session.grid(), painter, &self.opts);
    }

    fn animating(&self) -> bool {
        self.session.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::Canvas;
    use gridpath_paths::{Outcome, Status};

    fn model(rows: usize, width: i32) -> Visualizer {
        Visualizer::new(Session::new(rows, width), RenderOptions::default())
    }

    fn click(m: &mut Visualizer, action: MouseAction, x: i32, y: i32) {
        m.update(Msg::mouse(action, x, y));
        m.update(Msg::mouse(MouseAction::Release, x, y));
    }

    fn run_until_idle(m: &mut Visualizer) -> usize {
        let mut ticks = 0;
        while m.animating() {
            m.update(Msg::Tick);
            ticks += 1;
        }
        ticks
    }

    #[test]
    fn clicks_map_pixels_to_cells() {
        // 4 rows over 8 pixels: 2 pixels per cell, x is the column.
        let mut m = model(4, 8);
        click(&mut m, MouseAction::Main, 5, 1);
        assert_eq!(m.session().start(), Some(Pos::new(0, 2)));
        click(&mut m, MouseAction::Main, 0, 7);
        assert_eq!(m.session().end(), Some(Pos::new(3, 0)));
    }

    #[test]
    fn off_canvas_input_is_ignored() {
        // 3 rows over 10 pixels leaves a 1 pixel band that belongs to no cell.
        let mut m = model(3, 10);
        click(&mut m, MouseAction::Main, 9, 0);
        click(&mut m, MouseAction::Main, -1, 2);
        click(&mut m, MouseAction::Main, 4, 40);
        assert_eq!(m.session().start(), None);
        assert_eq!(m.session().grid().count(Status::Default), 9);
    }

    #[test]
    fn dragging_paints_barriers() {
        let mut m = model(5, 5);
        click(&mut m, MouseAction::Main, 0, 0);
        click(&mut m, MouseAction::Main, 4, 4);

        m.update(Msg::mouse(MouseAction::Main, 0, 2));
        for x in 1..4 {
            m.update(Msg::mouse(MouseAction::Move, x, 2));
        }
        m.update(Msg::mouse(MouseAction::Release, 3, 2));
        m.update(Msg::mouse(MouseAction::Move, 4, 2));

        let g = m.session().grid();
        assert_eq!(g.count(Status::Barrier), 4);
        assert!(!g.node(Pos::new(2, 4)).is_barrier());
    }

    #[test]
    fn dragging_with_secondary_erases() {
        let mut m = model(5, 5);
        click(&mut m, MouseAction::Main, 0, 0);
        click(&mut m, MouseAction::Main, 4, 4);
        m.update(Msg::mouse(MouseAction::Main, 0, 1));
        m.update(Msg::mouse(MouseAction::Move, 4, 1));
        m.update(Msg::mouse(MouseAction::Move, 1, 1));
        m.update(Msg::mouse(MouseAction::Release, 1, 1));
        assert_eq!(m.session().grid().count(Status::Barrier), 3);

        m.update(Msg::mouse(MouseAction::Secondary, 1, 1));
        m.update(Msg::mouse(MouseAction::Move, 0, 0));
        m.update(Msg::mouse(MouseAction::Release, 0, 0));
        assert_eq!(m.session().grid().count(Status::Barrier), 2);
        assert_eq!(m.session().start(), None);
    }

    #[test]
    fn moving_without_a_button_does_nothing() {
        let mut m = model(5, 5);
        m.update(Msg::mouse(MouseAction::Move, 2, 2));
        m.update(Msg::mouse(MouseAction::Hover, 3, 3));
        assert_eq!(m.session().start(), None);
    }

    #[test]
    fn hover_ends_a_stroke_without_release() {
        let mut m = model(5, 5);
        click(&mut m, MouseAction::Main, 0, 0);
        click(&mut m, MouseAction::Main, 4, 4);

        // Press, then the button comes up outside the terminal.
        m.update(Msg::mouse(MouseAction::Main, 1, 1));
        for x in 0..5 {
            m.update(Msg::mouse(MouseAction::Hover, x, 2));
        }
        m.update(Msg::mouse(MouseAction::Move, 3, 3));

        assert_eq!(m.session().grid().count(Status::Barrier), 1);
        assert!(m.session().grid().node(Pos::new(1, 1)).is_barrier());
    }

    #[test]
    fn space_runs_and_ticks_advance_the_search() {
        let mut m = model(5, 5);
        click(&mut m, MouseAction::Main, 0, 0);
        click(&mut m, MouseAction::Main, 4, 4);
        m.update(Msg::key(Key::Space));
        assert!(m.animating());
        let ticks = run_until_idle(&mut m);
        assert!(ticks > 8);
        assert_eq!(m.session().last_outcome(), Some(Outcome::Found));
        assert_eq!(m.session().grid().count(Status::Path), 7);
    }

    #[test]
    fn escape_cancels_a_run_then_exits() {
        let mut m = model(8, 8);
        click(&mut m, MouseAction::Main, 0, 0);
        click(&mut m, MouseAction::Main, 7, 7);
        m.update(Msg::key(Key::Space));
        m.update(Msg::Tick);
        m.update(Msg::Tick);

        assert_eq!(m.update(Msg::key(Key::Escape)), None);
        assert!(!m.animating());
        assert_eq!(m.session().last_outcome(), Some(Outcome::Cancelled));
        assert_eq!(m.update(Msg::key(Key::Escape)), Some(Effect::End));
    }

    #[test]
    fn quit_while_idle_ends_the_app() {
        let mut m = model(4, 4);
        assert_eq!(m.update(Msg::Quit), Some(Effect::End));
    }

    #[test]
    fn input_is_ignored_while_running() {
        let mut m = model(6, 6);
        click(&mut m, MouseAction::Main, 0, 0);
        click(&mut m, MouseAction::Main, 5, 5);
        m.update(Msg::key(Key::Space));
        m.update(Msg::key(Key::Char('r')));
        click(&mut m, MouseAction::Main, 3, 3);
        assert!(m.animating());
        assert_eq!(m.session().start(), Some(Pos::new(0, 0)));
        assert!(!m.session().grid().node(Pos::new(3, 3)).is_barrier());
    }

    #[test]
    fn reset_key_clears_the_grid() {
        let mut m = model(4, 4);
        click(&mut m, MouseAction::Main, 0, 0);
        click(&mut m, MouseAction::Main, 3, 3);
        click(&mut m, MouseAction::Main, 1, 1);
        m.update(Msg::key(Key::Char('r')));
        assert_eq!(m.session().start(), None);
        assert_eq!(m.session().grid().count(Status::Default), 16);
    }

    #[test]
    fn resize_leaves_the_grid_alone() {
        let mut m = model(4, 8);
        click(&mut m, MouseAction::Main, 7, 7);
        m.update(Msg::Screen {
            width: 200,
            height: 100,
        });
        assert_eq!(m.session().grid().side(), 2);
        assert_eq!(m.session().start(), Some(Pos::new(3, 3)));
        click(&mut m, MouseAction::Main, 20, 20);
        assert_eq!(m.session().end(), None);
    }

    #[test]
    fn draw_paints_every_cell() {
        let mut m = model(2, 2);
        click(&mut m, MouseAction::Main, 1, 0);
        let mut canvas = Canvas::new(2, 2);
        m.draw(&mut canvas);
        assert_eq!(canvas.presented(Point::new(1, 0)), Some(render::START));
        assert_eq!(canvas.presented(Point::new(0, 1)), Some(render::DEFAULT));
    }
}
