//! The [`Grid`] model: a square arena of [`Node`]s plus pixel geometry.
//!
//! Nodes live in one flat `Vec`, indexed row-major. Neighbour lists and the
//! search's predecessor map refer to nodes by arena index.

use gridpath_core::{Point, Rect};

use crate::neighbors;
use crate::node::{Node, Pos, Status};

/// Map a canvas pixel to the cell under it.
///
/// Performs no clamping: callers make sure `(x, y)` lies on the rendered
/// canvas first (see [`Grid::canvas_contains`]). `pixel_width / rows` must be
/// non-zero.
#[inline]
pub fn pixel_to_cell(x: i32, y: i32, rows: usize, pixel_width: i32) -> Pos {
    let side = pixel_width / rows as i32;
    Pos::new((y / side) as usize, (x / side) as usize)
}

/// A `rows × rows` grid of cells.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    pixel_width: i32,
    side: i32,
    pub(crate) nodes: Vec<Node>,
}

impl Grid {
    /// Allocate `rows × rows` default cells. Each cell is
    /// `pixel_width / rows` pixels wide; remainder pixels are left unrendered.
    pub fn new(rows: usize, pixel_width: i32) -> Self {
        let nodes = (0..rows * rows)
            .map(|i| Node::new(Pos::from_index(i, rows)))
            .collect();
        Self {
            rows,
            pixel_width,
            side: pixel_width / rows.max(1) as i32,
            nodes,
        }
    }

    /// Side of the grid, in cells.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Canvas width the grid was laid out for.
    #[inline]
    pub fn pixel_width(&self) -> i32 {
        self.pixel_width
    }

    /// Side length of one cell, in pixels.
    #[inline]
    pub fn side(&self) -> i32 {
        self.side
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.rows && pos.col < self.rows
    }

    #[inline]
    pub fn index(&self, pos: Pos) -> usize {
        pos.index(self.rows)
    }

    #[inline]
    pub fn pos(&self, idx: usize) -> Pos {
        Pos::from_index(idx, self.rows)
    }

    /// The cell at `pos`.
    ///
    /// # Panics
    ///
    /// If `pos` is outside the grid. Positions come from
    /// [`cell_at_pixel`](Self::cell_at_pixel) or from the grid itself.
    #[inline]
    pub fn node(&self, pos: Pos) -> &Node {
        &self.nodes[self.index(pos)]
    }

    /// Mutable access to the cell at `pos`. Same bounds contract as
    /// [`node`](Self::node).
    #[inline]
    pub fn node_mut(&mut self, pos: Pos) -> &mut Node {
        let i = self.index(pos);
        &mut self.nodes[i]
    }

    /// Checked access.
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<&Node> {
        if self.contains(pos) {
            self.nodes.get(self.index(pos))
        } else {
            None
        }
    }

    /// The cell behind arena index `idx`.
    #[inline]
    pub fn node_at(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    /// Row-major iterator over every cell.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// How many cells currently have `status`.
    pub fn count(&self, status: Status) -> usize {
        self.nodes.iter().filter(|n| n.status() == status).count()
    }

    // -----------------------------------------------------------------------
    // Pixel geometry
    // -----------------------------------------------------------------------

    /// The pixels covered by the cell at `pos`.
    #[inline]
    pub fn cell_rect(&self, pos: Pos) -> Rect {
        let origin = Point::new(pos.col as i32 * self.side, pos.row as i32 * self.side);
        Rect::square(origin, self.side)
    }

    /// The pixel area covered by cells. Excludes the remainder band when
    /// `pixel_width` is not a multiple of `rows`.
    #[inline]
    pub fn canvas(&self) -> Rect {
        let extent = self.side * self.rows as i32;
        Rect::new(0, 0, extent, extent)
    }

    /// Whether pixel `p` lies on some cell.
    #[inline]
    pub fn canvas_contains(&self, p: Point) -> bool {
        self.canvas().contains(p)
    }

    /// The cell under pixel `p`, or `None` when `p` is off the canvas.
    pub fn cell_at_pixel(&self, p: Point) -> Option<Pos> {
        if self.side == 0 || !self.canvas_contains(p) {
            return None;
        }
        Some(pixel_to_cell(p.x, p.y, self.rows, self.pixel_width))
    }

    // -----------------------------------------------------------------------
    // Maintenance
    // -----------------------------------------------------------------------

    /// Rebuild every cell's neighbour list from grid bounds and current
    /// barrier status.
    pub fn recompute_neighbors(&mut self) {
        let rows = self.rows;
        for i in 0..self.nodes.len() {
            let mut buf = std::mem::take(&mut self.nodes[i].neighbors);
            buf.clear();
            buf.extend(
                neighbors::cardinal(Pos::from_index(i, rows), rows)
                    .map(|p| p.index(rows))
                    .filter(|&ni| !self.nodes[ni].is_barrier()),
            );
            self.nodes[i].neighbors = buf;
        }
    }

    /// Set every cell's scores back to +∞.
    pub(crate) fn reset_scores(&mut self) {
        for n in &mut self.nodes {
            n.reset_scores();
        }
    }

    /// Relabel `open`, `closed` and `path` cells as `default`. Barriers,
    /// start and end are left alone.
    pub fn clear_search(&mut self) {
        for n in &mut self.nodes {
            if n.status().is_search_mark() {
                n.reset();
            }
        }
    }
}
