//! A* search guided by Euclidean distance to the target.

use waypath_core::Graph;

use crate::SearchError;
use crate::distance::euclidean;
use crate::frontier::Frontier;

/// Compute a path from `start` to `target` using A* with a
/// Euclidean-distance heuristic.
///
/// The machinery is Dijkstra's, except that frontier ordering adds each
/// vertex's straight-line distance to the target on top of its cumulative
/// weight, steering settlement toward the target. Every vertex must carry
/// coordinates.
///
/// The result is only guaranteed minimal when the heuristic never
/// overestimates the true remaining cost, i.e. when edge weights are at
/// least the straight-line distance between their endpoints. With lighter
/// edges the returned path may be suboptimal and no error is raised;
/// ensuring admissibility is the caller's responsibility.
pub fn astar_path(graph: &Graph, start: &str, target: &str) -> Result<Vec<String>, SearchError> {
    if graph.is_empty() {
        return Err(SearchError::EmptyGraph);
    }
    let start_i = graph
        .index_of(start)
        .ok_or_else(|| SearchError::UnknownVertex(start.to_owned()))?;
    let target_i = graph
        .index_of(target)
        .ok_or_else(|| SearchError::UnknownVertex(target.to_owned()))?;

    // Precompute every vertex's estimate toward the target up front, so a
    // vertex without coordinates fails the call before any searching.
    let target_v = graph.vertex(target_i);
    let mut estimates = Vec::with_capacity(graph.len());
    for v in graph.vertices() {
        estimates.push(euclidean(v, target_v)?);
    }

    let mut frontier = Frontier::new(graph, start_i, |i| estimates[i]);

    loop {
        let Some(head) = frontier.head() else {
            return Err(SearchError::NoPath);
        };
        if head.cumulative.is_none() {
            // The remaining records are unreachable.
            return Err(SearchError::NoPath);
        }

        log::debug!(
            "checking {}, distance to {} is {}",
            graph.vertex(head.vertex).id(),
            target,
            head.heuristic
        );

        if head.vertex == target_i {
            return frontier.reconstruct(graph);
        }
        frontier.settle_head(graph);
    }
}
