//! The [`Painter`] render seam and [`Canvas`], an in-memory pixel buffer
//! that implements it.
//!
//! A `Canvas` is double-buffered: drawing calls write to the back buffer and
//! [`present`](Painter::present) diffs it against the last presented buffer,
//! queueing only the changed pixels as a [`Frame`] for a driver to flush.

use crate::geom::{Point, Rect};
use crate::style::Color;

// ---------------------------------------------------------------------------
// Painter
// ---------------------------------------------------------------------------

/// Drawing primitives consumed by the renderer.
///
/// One checkpoint is the sequence `clear`, any number of `fill_rect` /
/// `draw_line`, then `present`.
pub trait Painter {
    /// Fill the whole surface with `color`.
    fn clear(&mut self, color: Color);

    /// Fill `rect`, clipped to the surface.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a one-pixel line from `from` to `to`, both inclusive.
    fn draw_line(&mut self, from: Point, to: Point, color: Color);

    /// Publish everything drawn since the previous `present`.
    fn present(&mut self);
}

// ---------------------------------------------------------------------------
// Frame / FramePixel
// ---------------------------------------------------------------------------

/// A single pixel that changed between presents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FramePixel {
    pub pos: Point,
    pub color: Color,
}

/// A set of pixel changes (a diff frame), in the order they must be applied.
#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub pixels: Vec<FramePixel>,
    pub width: i32,
    pub height: i32,
}

// ---------------------------------------------------------------------------
// Canvas
// ---------------------------------------------------------------------------

/// A `width × height` pixel surface.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: i32,
    height: i32,
    back: Vec<Color>,
    front: Vec<Color>,
    pending: Vec<FramePixel>,
    presents: u64,
    invalid: bool,
}

impl Canvas {
    /// Create a canvas filled with black. The first present emits every pixel.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        let len = (w as usize) * (h as usize);
        Self {
            width: w,
            height: h,
            back: vec![Color::BLACK; len],
            front: vec![Color::BLACK; len],
            pending: Vec::new(),
            presents: 0,
            invalid: true,
        }
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The bounding rectangle of the surface.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Number of `present` calls so far.
    #[inline]
    pub fn presents(&self) -> u64 {
        self.presents
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.bounds().contains(p) {
            Some((p.y as usize) * (self.width as usize) + (p.x as usize))
        } else {
            None
        }
    }

    /// The colour drawn at `p` since the last clear, or `None` outside bounds.
    pub fn pixel(&self, p: Point) -> Option<Color> {
        self.index(p).map(|i| self.back[i])
    }

    /// The colour at `p` as of the last `present`.
    pub fn presented(&self, p: Point) -> Option<Color> {
        self.index(p).map(|i| self.front[i])
    }

    /// Set a single pixel. No-op outside bounds.
    #[inline]
    pub fn set(&mut self, p: Point, color: Color) {
        if let Some(i) = self.index(p) {
            self.back[i] = color;
        }
    }

    /// Force the next present to emit every pixel, e.g. after the output
    /// surface was cleared behind our back.
    pub fn invalidate(&mut self) {
        self.invalid = true;
    }

    /// Take the changes queued by presents since the last call.
    pub fn take_frame(&mut self) -> Option<Frame> {
        if self.pending.is_empty() {
            return None;
        }
        Some(Frame {
            pixels: std::mem::take(&mut self.pending),
            width: self.width,
            height: self.height,
        })
    }
}

impl Painter for Canvas {
    fn clear(&mut self, color: Color) {
        self.back.fill(color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        for p in rect.intersect(self.bounds()) {
            self.set(p, color);
        }
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        // Bresenham, all octants.
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };
        let mut err = dx + dy;
        let mut p = from;
        loop {
            self.set(p, color);
            if p == to {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                p.x += sx;
            }
            if e2 <= dx {
                err += dx;
                p.y += sy;
            }
        }
    }

    fn present(&mut self) {
        for p in self.bounds() {
            let i = (p.y as usize) * (self.width as usize) + (p.x as usize);
            let c = self.back[i];
            if self.invalid || self.front[i] != c {
                self.pending.push(FramePixel { pos: p, color: c });
                self.front[i] = c;
            }
        }
        self.invalid = false;
        self.presents += 1;
    }
}
