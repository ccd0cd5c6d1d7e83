//! **waypath-core** — Traversable-space containers for the waypath engine.
//!
//! This crate provides the types searched by `waypath-search`: geometry
//! primitives, a rectangular walkability [`Grid`], and a [`Graph`] of named
//! vertices with weighted directed edges.

pub mod geom;
pub mod graph;
pub mod grid;

pub use geom::Point;
pub use graph::{Edge, Graph, GraphError, Vertex};
pub use grid::{Cell, Grid, GridError};
