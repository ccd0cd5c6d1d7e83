//! Dijkstra's uniform-cost shortest-path search.

use waypath_core::Graph;

use crate::SearchError;
use crate::frontier::Frontier;

/// Compute the minimum-total-weight path from `start` to `target`.
///
/// Returns the vertex identifiers start→target inclusive. When a path
/// exists its total edge weight is minimal over all simple paths; ties are
/// broken deterministically by vertex insertion order.
pub fn dijkstra_path(graph: &Graph, start: &str, target: &str) -> Result<Vec<String>, SearchError> {
    if graph.is_empty() {
        return Err(SearchError::EmptyGraph);
    }
    let start_i = graph
        .index_of(start)
        .ok_or_else(|| SearchError::UnknownVertex(start.to_owned()))?;
    let target_i = graph
        .index_of(target)
        .ok_or_else(|| SearchError::UnknownVertex(target.to_owned()))?;

    let mut frontier = Frontier::new(graph, start_i, |_| 0);

    loop {
        let Some(head) = frontier.head() else {
            // Every vertex settled without reaching the target.
            return Err(SearchError::NoPath);
        };
        let Some(g) = head.cumulative else {
            // The remaining records are unreachable.
            return Err(SearchError::NoPath);
        };

        log::debug!(
            "checking {}, distance from {} is {}",
            graph.vertex(head.vertex).id(),
            start,
            g
        );

        if head.vertex == target_i {
            return frontier.reconstruct(graph);
        }
        frontier.settle_head(graph);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::path_weight;

    fn diamond() -> Graph {
        let mut g = Graph::new();
        for id in ["A", "B", "C", "D"] {
            g.add_vertex(id).unwrap();
        }
        g.add_edge_symmetric("A", "B", 1).unwrap();
        g.add_edge_symmetric("B", "D", 5).unwrap();
        g.add_edge_symmetric("A", "C", 2).unwrap();
        g.add_edge_symmetric("C", "D", 2).unwrap();
        g
    }

    #[test]
    fn picks_the_lighter_route() {
        let g = diamond();
        // A→B→D weighs 6; A→C→D weighs 4 and must win.
        let path = dijkstra_path(&g, "A", "D").unwrap();
        assert_eq!(path, vec!["A".to_owned(), "C".into(), "D".into()]);
        assert_eq!(path_weight(&g, &path), 4);
    }

    #[test]
    fn start_equals_target() {
        let g = diamond();
        assert_eq!(dijkstra_path(&g, "C", "C"), Ok(vec!["C".into()]));
    }

    #[test]
    fn longer_detour_beats_heavy_direct_edge() {
        let mut g = Graph::new();
        for id in ["s", "a", "b", "t"] {
            g.add_vertex(id).unwrap();
        }
        g.add_edge("s", "t", 10).unwrap();
        g.add_edge("s", "a", 1).unwrap();
        g.add_edge("a", "b", 1).unwrap();
        g.add_edge("b", "t", 1).unwrap();
        let path = dijkstra_path(&g, "s", "t").unwrap();
        assert_eq!(
            path,
            vec!["s".to_owned(), "a".into(), "b".into(), "t".into()]
        );
        assert_eq!(path_weight(&g, &path), 3);
    }

    #[test]
    fn equal_weight_routes_resolve_by_insertion_order() {
        let mut g = Graph::new();
        for id in ["s", "x", "y", "t"] {
            g.add_vertex(id).unwrap();
        }
        g.add_edge("s", "x", 1).unwrap();
        g.add_edge("s", "y", 1).unwrap();
        g.add_edge("x", "t", 1).unwrap();
        g.add_edge("y", "t", 1).unwrap();
        // Both routes weigh 2; x was inserted before y.
        assert_eq!(
            dijkstra_path(&g, "s", "t"),
            Ok(vec!["s".into(), "x".into(), "t".into()])
        );
    }

    #[test]
    fn zero_weight_edges_are_valid() {
        let mut g = Graph::new();
        for id in ["s", "m", "t"] {
            g.add_vertex(id).unwrap();
        }
        g.add_edge("s", "m", 0).unwrap();
        g.add_edge("m", "t", 0).unwrap();
        g.add_edge("s", "t", 1).unwrap();
        let path = dijkstra_path(&g, "s", "t").unwrap();
        assert_eq!(path_weight(&g, &path), 0);
    }

    #[test]
    fn disconnected_target_has_no_path() {
        let mut g = Graph::new();
        g.add_vertex("A").unwrap();
        g.add_vertex("B").unwrap();
        g.add_vertex("Z").unwrap();
        g.add_edge_symmetric("A", "B", 1).unwrap();
        assert_eq!(dijkstra_path(&g, "A", "Z"), Err(SearchError::NoPath));
    }

    #[test]
    fn directed_edges_are_not_traversed_backward() {
        let mut g = Graph::new();
        g.add_vertex("A").unwrap();
        g.add_vertex("B").unwrap();
        g.add_edge("B", "A", 1).unwrap();
        assert_eq!(dijkstra_path(&g, "A", "B"), Err(SearchError::NoPath));
    }

    #[test]
    fn invalid_input_is_rejected_before_searching() {
        let empty = Graph::new();
        assert_eq!(dijkstra_path(&empty, "A", "B"), Err(SearchError::EmptyGraph));

        let g = diamond();
        assert_eq!(
            dijkstra_path(&g, "Q", "D"),
            Err(SearchError::UnknownVertex("Q".into()))
        );
        assert_eq!(
            dijkstra_path(&g, "A", "Q"),
            Err(SearchError::UnknownVertex("Q".into()))
        );
    }
}
