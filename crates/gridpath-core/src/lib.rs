//! **gridpath-core**: core types for the grid pathfinding visualizer.
//!
//! This crate provides the pieces shared by the engine, the drivers and the
//! application: pixel geometry, colours, input messages, the [`Painter`]
//! render seam with an in-memory [`Canvas`], and the single-threaded
//! Elm-architecture application loop.

pub mod app;
pub mod canvas;
pub mod geom;
pub mod messages;
pub mod style;

pub use app::{App, AppConfig, Context, Driver, Effect, Model};
pub use canvas::{Canvas, Frame, FramePixel, Painter};
pub use geom::{Point, Rect};
pub use messages::*;
pub use style::Color;
