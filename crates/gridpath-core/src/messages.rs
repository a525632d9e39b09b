//! Input events: [`Msg`], [`Key`], [`MouseAction`].

use crate::geom::Point;

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// A keyboard key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Space,
    /// A printable character.
    Char(char),
}

// ---------------------------------------------------------------------------
// MouseAction
// ---------------------------------------------------------------------------

/// A pointer action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MouseAction {
    /// Primary (left) button pressed.
    Main,
    /// Middle button pressed.
    Auxiliary,
    /// Secondary (right) button pressed.
    Secondary,
    /// Button released.
    Release,
    /// Pointer moved with a button held.
    Move,
    /// Pointer moved with no button held.
    Hover,
}

// ---------------------------------------------------------------------------
// Msg
// ---------------------------------------------------------------------------

/// A message delivered to the application model.
#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    /// A key was pressed.
    KeyDown { key: Key },
    /// A pointer event. `pos` is in canvas pixels.
    Mouse { action: MouseAction, pos: Point },
    /// The screen / terminal was resized.
    Screen { width: i32, height: i32 },
    /// Sent by the loop once per iteration while the model is animating.
    Tick,
    /// Sent once when the application starts.
    Init,
    /// Request to quit (window close, Ctrl-C).
    Quit,
}

impl Msg {
    /// Convenience: create a `KeyDown`.
    pub fn key(key: Key) -> Self {
        Self::KeyDown { key }
    }

    /// Convenience: create a `Mouse` message.
    pub fn mouse(action: MouseAction, x: i32, y: i32) -> Self {
        Self::Mouse {
            action,
            pos: Point::new(x, y),
        }
    }
}
