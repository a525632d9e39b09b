//! Painting a grid through a [`Painter`].

use gridpath_core::{Color, Painter, Point};
use gridpath_paths::{Grid, Status};

// -- Cell colours --

pub const DEFAULT: Color = Color::WHITE;
pub const OPEN: Color = Color::from_rgb(0, 255, 0);
pub const CLOSED: Color = Color::from_rgb(255, 0, 0);
pub const BARRIER: Color = Color::BLACK;
pub const START: Color = Color::from_rgb(255, 255, 0);
pub const END: Color = Color::from_rgb(0, 255, 255);
pub const PATH: Color = Color::from_rgb(255, 0, 255);

/// Grid line colour.
pub const GRID_LINE: Color = Color::from_rgb(100, 100, 100);

/// The fill colour for a cell in `status`.
pub fn status_color(status: Status) -> Color {
    match status {
        Status::Default => DEFAULT,
        Status::Open => OPEN,
        Status::Closed => CLOSED,
        Status::Barrier => BARRIER,
        Status::Start => START,
        Status::End => END,
        Status::Path => PATH,
    }
}

/// Drawing options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Draw a line along every cell boundary. Off by default because a
    /// terminal cell is a single pixel and lines would cover it.
    pub grid_lines: bool,
    /// Colour the canvas is cleared to, visible in the remainder band.
    pub background: Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            grid_lines: false,
            background: DEFAULT,
        }
    }
}

/// Paint one full frame: clear, every cell in row-major order, grid lines
/// when enabled, present.
pub fn draw(grid: &Grid, painter: &mut dyn Painter, opts: &RenderOptions) {
    painter.clear(opts.background);
    for node in grid.iter() {
        painter.fill_rect(grid.cell_rect(node.pos()), status_color(node.status()));
    }
    if opts.grid_lines {
        draw_grid_lines(painter, grid.rows(), grid.pixel_width());
    }
    painter.present();
}

/// One horizontal and one vertical line per row, spanning the canvas.
pub fn draw_grid_lines(painter: &mut dyn Painter, rows: usize, pixel_width: i32) {
    let Ok(n) = i32::try_from(rows) else {
        return;
    };
    if n == 0 {
        return;
    }
    let side = pixel_width / n;
    for i in 0..n {
        let at = i * side;
        painter.draw_line(Point::new(0, at), Point::new(pixel_width, at), GRID_LINE);
        painter.draw_line(Point::new(at, 0), Point::new(at, pixel_width), GRID_LINE);
    }
}
