//! gridpath: paint barriers on a square grid, pick a start and an end, and
//! watch A* search it one expansion per frame.
//!
//! Controls: primary click or drag places start, end, then barriers;
//! secondary click or drag erases; space runs; `r` resets; escape cancels a
//! run or quits.

pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod session;

use gridpath_core::app::{App, AppConfig};
use gridpath_crossterm::CrosstermDriver;

pub use config::Config;
pub use error::{Error, Result};
pub use model::Visualizer;
pub use render::RenderOptions;
pub use session::Session;

/// Run the visualizer in the terminal until the user quits.
pub fn run(config: &Config) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let session = Session::new(config.rows, config.width);
    let opts = RenderOptions {
        grid_lines: config.grid_lines,
        ..RenderOptions::default()
    };
    let model = Visualizer::new(session, opts);
    let driver = CrosstermDriver::new().with_canvas_size(config.width, config.width);

    let mut app = App::new(AppConfig {
        model,
        driver,
        width: config.width,
        height: config.width,
        frame_interval: config.frame_interval(),
    });
    app.run()
}
