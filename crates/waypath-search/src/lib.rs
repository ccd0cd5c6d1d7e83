//! Pathfinding over walkability grids and named-vertex graphs.
//!
//! This crate provides four search strategies over the containers from
//! [`waypath_core`]:
//!
//! - **Grid backtracking** ([`grid_path`]): depth-first flood fill over a
//!   [`Grid`](waypath_core::Grid), probing right/down/left/up; returns the
//!   first path found, deterministically.
//! - **Graph backtracking** ([`graph_path`]): depth-first search over a
//!   [`Graph`](waypath_core::Graph), treating the in-progress path as the
//!   visited set.
//! - **Dijkstra** ([`dijkstra_path`]): uniform-cost search on an
//!   array-based priority queue; minimal total edge weight guaranteed.
//! - **A\*** ([`astar_path`]): the same machinery ordered by cumulative
//!   weight plus Euclidean distance to the target ([`euclidean`]); optimal
//!   only under an admissible heuristic.
//!
//! Every search call owns its working state exclusively and drops it on all
//! exit paths. Failures are explicit [`SearchError`] kinds: invalid input
//! is distinguished from a genuine [`SearchError::NoPath`] result.

mod astar;
mod dijkstra;
mod distance;
mod error;
mod frontier;
mod graph;
mod grid;

pub use astar::astar_path;
pub use dijkstra::dijkstra_path;
pub use distance::euclidean;
pub use error::SearchError;
pub use graph::graph_path;
pub use grid::grid_path;

#[cfg(test)]
pub(crate) mod testutil {
    use waypath_core::Graph;

    /// Total weight of a returned path, summing the cheapest edge for each
    /// consecutive pair.
    pub(crate) fn path_weight(graph: &Graph, path: &[String]) -> u64 {
        path.windows(2)
            .map(|w| {
                let from = graph.index_of(&w[0]).unwrap();
                let to = graph.index_of(&w[1]).unwrap();
                graph
                    .vertex(from)
                    .edges()
                    .iter()
                    .filter(|e| e.dest() == to)
                    .map(|e| u64::from(e.weight()))
                    .min()
                    .unwrap()
            })
            .sum()
    }
}
