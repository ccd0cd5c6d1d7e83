//! A graph of named vertices with weighted directed edges.
//!
//! [`Graph`] owns its vertices; searches in `waypath-search` borrow it
//! read-only and refer to vertices by index. Vertex identifiers are unique
//! strings; coordinates are optional and only required by heuristic-guided
//! search. Edge lists keep insertion order, which makes search results
//! deterministic.

use std::collections::HashMap;

use crate::geom::Point;

/// Errors from graph construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A vertex with this identifier already exists.
    #[error("duplicate vertex {0:?}")]
    DuplicateVertex(String),
    /// An edge endpoint names a vertex that does not exist.
    #[error("unknown vertex {0:?}")]
    UnknownVertex(String),
}

/// A weighted directed edge. Owned by its source vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    dest: usize,
    weight: u32,
}

impl Edge {
    /// Index of the destination vertex in the owning [`Graph`].
    #[inline]
    pub fn dest(&self) -> usize {
        self.dest
    }

    /// Non-negative edge weight.
    #[inline]
    pub fn weight(&self) -> u32 {
        self.weight
    }
}

/// A named vertex with optional coordinates and outgoing edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    id: String,
    coords: Option<Point>,
    edges: Vec<Edge>,
}

impl Vertex {
    /// The unique string identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Coordinates, if the vertex has any.
    #[inline]
    pub fn coords(&self) -> Option<Point> {
        self.coords
    }

    /// Outgoing edges in insertion order.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// A collection of vertices addressed by index or by identifier.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    index: HashMap<String, usize>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Add a vertex without coordinates. Returns its index.
    pub fn add_vertex(&mut self, id: impl Into<String>) -> Result<usize, GraphError> {
        self.insert(id.into(), None)
    }

    /// Add a vertex at coordinates (x, y). Returns its index.
    pub fn add_vertex_at(
        &mut self,
        id: impl Into<String>,
        x: i32,
        y: i32,
    ) -> Result<usize, GraphError> {
        self.insert(id.into(), Some(Point::new(x, y)))
    }

    fn insert(&mut self, id: String, coords: Option<Point>) -> Result<usize, GraphError> {
        if self.index.contains_key(&id) {
            return Err(GraphError::DuplicateVertex(id));
        }
        let idx = self.vertices.len();
        self.index.insert(id.clone(), idx);
        self.vertices.push(Vertex {
            id,
            coords,
            edges: Vec::new(),
        });
        Ok(idx)
    }

    /// Add a directed edge from `from` to `to` with the given weight.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: u32) -> Result<(), GraphError> {
        let fi = self.require(from)?;
        let ti = self.require(to)?;
        self.vertices[fi].edges.push(Edge { dest: ti, weight });
        Ok(())
    }

    /// Add edges in both directions with the same weight.
    pub fn add_edge_symmetric(
        &mut self,
        a: &str,
        b: &str,
        weight: u32,
    ) -> Result<(), GraphError> {
        self.add_edge(a, b, weight)?;
        self.add_edge(b, a, weight)
    }

    fn require(&self, id: &str) -> Result<usize, GraphError> {
        self.index_of(id)
            .ok_or_else(|| GraphError::UnknownVertex(id.to_owned()))
    }

    /// Index of the vertex with the given identifier, if any.
    #[inline]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// The vertex at `idx`. Panics if out of range.
    #[inline]
    pub fn vertex(&self, idx: usize) -> &Vertex {
        &self.vertices[idx]
    }

    /// Iterate over all vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_vertices_and_edges() {
        let mut g = Graph::new();
        let a = g.add_vertex("A").unwrap();
        let b = g.add_vertex_at("B", 3, 4).unwrap();
        g.add_edge("A", "B", 7).unwrap();

        assert_eq!(g.len(), 2);
        assert_eq!(g.index_of("A"), Some(a));
        assert_eq!(g.vertex(a).id(), "A");
        assert_eq!(g.vertex(a).coords(), None);
        assert_eq!(g.vertex(b).coords(), Some(Point::new(3, 4)));

        let edges = g.vertex(a).edges();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].dest(), b);
        assert_eq!(edges[0].weight(), 7);
        assert!(g.vertex(b).edges().is_empty());
    }

    #[test]
    fn duplicate_vertex_is_rejected() {
        let mut g = Graph::new();
        g.add_vertex("A").unwrap();
        assert_eq!(
            g.add_vertex_at("A", 0, 0),
            Err(GraphError::DuplicateVertex("A".into()))
        );
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn edge_with_unknown_endpoint_is_rejected() {
        let mut g = Graph::new();
        g.add_vertex("A").unwrap();
        assert_eq!(
            g.add_edge("A", "Z", 1),
            Err(GraphError::UnknownVertex("Z".into()))
        );
        assert_eq!(
            g.add_edge("Z", "A", 1),
            Err(GraphError::UnknownVertex("Z".into()))
        );
        assert!(g.vertex(0).edges().is_empty());
    }

    #[test]
    fn symmetric_edge_inserts_both_directions() {
        let mut g = Graph::new();
        g.add_vertex("A").unwrap();
        g.add_vertex("B").unwrap();
        g.add_edge_symmetric("A", "B", 2).unwrap();
        assert_eq!(g.vertex(0).edges()[0].dest(), 1);
        assert_eq!(g.vertex(1).edges()[0].dest(), 0);
    }

    #[test]
    fn edge_order_follows_insertion() {
        let mut g = Graph::new();
        for id in ["A", "B", "C", "D"] {
            g.add_vertex(id).unwrap();
        }
        g.add_edge("A", "C", 1).unwrap();
        g.add_edge("A", "B", 1).unwrap();
        g.add_edge("A", "D", 1).unwrap();
        let dests: Vec<usize> = g.vertex(0).edges().iter().map(Edge::dest).collect();
        assert_eq!(dests, vec![2, 1, 3]);
    }
}
