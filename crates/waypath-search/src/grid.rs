//! Depth-first backtracking search over a walkability grid.

use waypath_core::{Grid, Point};

use crate::SearchError;

/// Fixed neighbor probe order: right, down, left, up.
const DIRS: [Point; 4] = [
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(-1, 0),
    Point::new(0, -1),
];

/// One step of the in-progress candidate path: a cell and the index of the
/// next direction to probe from it.
struct Frame {
    cell: Point,
    dir: usize,
}

/// Find the first path from `start` to `target` found by depth-first
/// flood fill, probing neighbors in right/down/left/up order.
///
/// The returned path runs start→target inclusive. It is deterministic but
/// not necessarily the shortest: at every branch the right/down/left/up
/// priority decides which candidate is committed first. Cells are marked
/// visited before descending, so no coordinate appears twice.
///
/// The search runs on an explicit frame stack rather than host recursion,
/// so its depth is bounded by the grid size, not the thread stack. As in
/// classic maze backtracking, the start cell is entered unconditionally;
/// only steps out of a cell are validated against blocked cells.
pub fn grid_path(grid: &Grid, start: Point, target: Point) -> Result<Vec<Point>, SearchError> {
    if grid.is_empty() {
        return Err(SearchError::EmptyGrid);
    }
    if !grid.contains(start) {
        return Err(SearchError::OutOfBounds(start));
    }
    if !grid.contains(target) {
        return Err(SearchError::OutOfBounds(target));
    }

    let width = grid.width() as usize;
    let mut visited = vec![false; width * grid.height() as usize];
    // In-bounds points only (guaranteed by the walkability check below).
    let at = |p: Point| p.y as usize * width + p.x as usize;

    visited[at(start)] = true;
    log::debug!("checking coordinates [{}, {}]", start.x, start.y);

    if start == target {
        return Ok(vec![start]);
    }

    // The live frame stack is the current candidate path; when the target
    // is pushed, reading it front-to-back yields the start→target order
    // the recursive version built by front-insertion during unwind.
    let mut stack = vec![Frame {
        cell: start,
        dir: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let Some(&dir) = DIRS.get(frame.dir) else {
            // Dead end: this frame contributes nothing to the path.
            stack.pop();
            continue;
        };
        frame.dir += 1;

        let next = frame.cell + dir;
        if !grid.is_walkable(next) || visited[at(next)] {
            continue;
        }

        visited[at(next)] = true;
        log::debug!("checking coordinates [{}, {}]", next.x, next.y);
        stack.push(Frame { cell: next, dir: 0 });

        if next == target {
            return Ok(stack.iter().map(|f| f.cell).collect());
        }
    }

    Err(SearchError::NoPath)
}
