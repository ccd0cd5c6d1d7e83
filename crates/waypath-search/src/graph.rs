//! Depth-first backtracking search over a named-vertex graph.

use std::collections::HashSet;

use waypath_core::Graph;

use crate::SearchError;

/// The in-progress path, with O(1) membership tests.
///
/// "Visited" is defined as membership in the current path: entries are
/// removed again when a branch dead-ends, so a vertex abandoned on one
/// branch may be re-explored on another. Within-branch cycles remain
/// impossible because the path never holds the same vertex twice.
struct PathStack {
    stack: Vec<usize>,
    members: HashSet<usize>,
}

impl PathStack {
    fn new() -> Self {
        Self {
            stack: Vec::new(),
            members: HashSet::new(),
        }
    }

    fn push(&mut self, vertex: usize) {
        self.stack.push(vertex);
        self.members.insert(vertex);
    }

    fn pop(&mut self) {
        if let Some(vertex) = self.stack.pop() {
            self.members.remove(&vertex);
        }
    }

    fn contains(&self, vertex: usize) -> bool {
        self.members.contains(&vertex)
    }
}

/// One step of the candidate path: a vertex and the index of its next
/// untried outgoing edge.
struct Frame {
    vertex: usize,
    edge: usize,
}

/// Find the first path from `start` to `target` found by depth-first
/// backtracking over the graph's edges, in edge insertion order.
///
/// The returned path is the sequence of vertex identifiers, start→target
/// inclusive. It is deterministic but not necessarily the lightest; edge
/// weights are ignored. Runs on an explicit frame stack, so depth is
/// bounded by the vertex count rather than the thread stack.
pub fn graph_path(graph: &Graph, start: &str, target: &str) -> Result<Vec<String>, SearchError> {
    if graph.is_empty() {
        return Err(SearchError::EmptyGraph);
    }
    let start_i = graph
        .index_of(start)
        .ok_or_else(|| SearchError::UnknownVertex(start.to_owned()))?;
    let target_i = graph
        .index_of(target)
        .ok_or_else(|| SearchError::UnknownVertex(target.to_owned()))?;

    log::debug!("checking {}", graph.vertex(start_i).id());

    if start_i == target_i {
        return Ok(vec![graph.vertex(start_i).id().to_owned()]);
    }

    let mut path = PathStack::new();
    path.push(start_i);
    let mut frames = vec![Frame {
        vertex: start_i,
        edge: 0,
    }];

    while let Some(frame) = frames.last_mut() {
        let Some(edge) = graph.vertex(frame.vertex).edges().get(frame.edge) else {
            // Every edge exhausted: backtrack out of this vertex.
            frames.pop();
            path.pop();
            continue;
        };
        frame.edge += 1;

        let dest = edge.dest();
        if path.contains(dest) {
            continue;
        }

        log::debug!("checking {}", graph.vertex(dest).id());
        path.push(dest);
        frames.push(Frame {
            vertex: dest,
            edge: 0,
        });

        if dest == target_i {
            return Ok(frames
                .iter()
                .map(|f| graph.vertex(f.vertex).id().to_owned())
                .collect());
        }
    }

    Err(SearchError::NoPath)
}
