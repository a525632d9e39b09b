use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::error::{Error, Result};

/// Highest accepted `--fps`; above it the idle poll interval rounds to zero.
pub const MAX_FPS: u32 = 1000;

/// Command-line options.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Cells per side of the square grid.
    #[arg(long, default_value_t = 40)]
    pub rows: usize,

    /// Canvas side in pixels. One pixel is two terminal columns wide.
    #[arg(long, default_value_t = 40)]
    pub width: i32,

    /// Draw grid lines between cells (off by default: at one pixel per cell
    /// the lines would paint over the cells)
    #[arg(long, default_value_t = false)]
    pub grid_lines: bool,

    /// Write logs to this file. Without it logging is off unless RUST_LOG is set.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Idle input polls per second, 1 to 1000.
    #[arg(long, default_value_t = 30)]
    pub fps: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: 40,
            width: 40,
            grid_lines: false,
            log_file: None,
            fps: 30,
        }
    }
}

impl Config {
    /// Check that the geometry gives every cell at least one pixel.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 {
            return Err(Error::InvalidRows);
        }
        if self.width < 0 || (self.width as usize) < self.rows {
            return Err(Error::WidthTooSmall {
                width: self.width,
                rows: self.rows,
            });
        }
        if self.fps == 0 || self.fps > MAX_FPS {
            return Err(Error::InvalidFps);
        }
        Ok(())
    }

    /// How long an idle poll may block.
    pub fn frame_interval(&self) -> Duration {
        let fps = u64::from(self.fps.clamp(1, MAX_FPS));
        Duration::from_millis(1000 / fps)
    }
}
