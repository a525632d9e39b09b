use std::collections::VecDeque;

use crate::grid::Grid;
use crate::node::Pos;

/// Breadth-first distance from `from` to every cell, following the current
/// neighbour lists. Indexed by arena index; `None` means unreachable.
pub fn distance_map(grid: &Grid, from: Pos) -> Vec<Option<u32>> {
    let mut dist = vec![None; grid.len()];
    if !grid.contains(from) {
        return dist;
    }

    let si = grid.index(from);
    dist[si] = Some(0);
    let mut queue = VecDeque::from([si]);

    while let Some(ci) = queue.pop_front() {
        let Some(d) = dist[ci] else {
            continue;
        };
        for &ni in grid.node_at(ci).neighbors() {
            if dist[ni].is_none() {
                dist[ni] = Some(d + 1);
                queue.push_back(ni);
            }
        }
    }

    dist
}

/// Length in edges of the shortest 4-directional path, if any.
pub fn shortest_distance(grid: &Grid, from: Pos, to: Pos) -> Option<u32> {
    if !grid.contains(to) {
        return None;
    }
    distance_map(grid, from)[grid.index(to)]
}
