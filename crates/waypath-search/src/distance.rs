//! Straight-line distance between coordinate-bearing vertices.

use waypath_core::Vertex;

use crate::SearchError;

/// Euclidean distance between two vertices, floored to an integer.
///
/// Coordinate differences are widened to `i64` before subtracting, so
/// points in opposite quadrants cannot overflow, and the hypotenuse is
/// taken with [`f64::hypot`].
///
/// Fails with [`SearchError::MissingCoordinates`] if either vertex lacks
/// coordinates, or [`SearchError::NonFiniteDistance`] if the result is not
/// a finite number.
pub fn euclidean(vertex: &Vertex, target: &Vertex) -> Result<u64, SearchError> {
    let a = vertex
        .coords()
        .ok_or_else(|| SearchError::MissingCoordinates(vertex.id().to_owned()))?;
    let b = target
        .coords()
        .ok_or_else(|| SearchError::MissingCoordinates(target.id().to_owned()))?;

    let dx = (i64::from(a.x) - i64::from(b.x)) as f64;
    let dy = (i64::from(a.y) - i64::from(b.y)) as f64;

    let hyp = dx.hypot(dy);
    if !hyp.is_finite() {
        return Err(SearchError::NonFiniteDistance);
    }
    Ok(hyp as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypath_core::Graph;

    fn two_vertex_graph(ax: i32, ay: i32, bx: i32, by: i32) -> Graph {
        let mut g = Graph::new();
        g.add_vertex_at("a", ax, ay).unwrap();
        g.add_vertex_at("b", bx, by).unwrap();
        g
    }

    #[test]
    fn pythagorean_triple() {
        let g = two_vertex_graph(0, 0, 3, 4);
        assert_eq!(euclidean(g.vertex(0), g.vertex(1)), Ok(5));
    }

    #[test]
    fn diagonal_floors_down() {
        // sqrt(2) ≈ 1.414
        let g = two_vertex_graph(1, 1, 2, 2);
        assert_eq!(euclidean(g.vertex(0), g.vertex(1)), Ok(1));
    }

    #[test]
    fn quadrant_crossing_is_exact() {
        // dx = 6, dy = 8 across the origin.
        let g = two_vertex_graph(-3, -4, 3, 4);
        assert_eq!(euclidean(g.vertex(0), g.vertex(1)), Ok(10));
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let g = two_vertex_graph(i32::MIN, 0, i32::MAX, 0);
        assert_eq!(euclidean(g.vertex(0), g.vertex(1)), Ok(u32::MAX as u64));
    }

    #[test]
    fn missing_coordinates_fail() {
        let mut g = Graph::new();
        g.add_vertex("a").unwrap();
        g.add_vertex_at("b", 0, 0).unwrap();
        assert_eq!(
            euclidean(g.vertex(0), g.vertex(1)),
            Err(SearchError::MissingCoordinates("a".into()))
        );
        assert_eq!(
            euclidean(g.vertex(1), g.vertex(0)),
            Err(SearchError::MissingCoordinates("a".into()))
        );
    }

    #[test]
    fn zero_distance_for_same_point() {
        let g = two_vertex_graph(7, -2, 7, -2);
        assert_eq!(euclidean(g.vertex(0), g.vertex(1)), Ok(0));
    }
}
