//! Collider classification
//!
//! A vertex is a collider on a path when both of its path neighbours have an
//! edge leading into it. Undirected edges lead the way their key reads, so in
//! a Markov network `A-B` leads into `B` and `B-C` does not.

use crate::features::graph::LabeledGraph;
use crate::features::path_enumeration::Path;
use crate::shared::models::VertexLabel;

/// Whether `vertex` is a collider on `path`
///
/// # Panics
/// Panics if `vertex` is not an interior vertex of `path`.
pub fn is_collider(graph: &LabeledGraph, path: &Path, vertex: VertexLabel) -> bool {
    let Some((left, right)) = path.neighbors_of(vertex) else {
        panic!("is_collider: '{vertex}' is not an interior vertex of path {path}");
    };
    graph.has_directed_edge(left, vertex) && graph.has_directed_edge(right, vertex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::Directionality;

    fn v(c: char) -> VertexLabel {
        VertexLabel::from(c)
    }

    fn path(s: &str) -> Path {
        Path::from_vertices(s.chars().map(VertexLabel::from).collect())
    }

    fn three(directionality: Directionality, edges: &[(&str, &str)]) -> LabeledGraph {
        let mut g = LabeledGraph::new(directionality);
        for raw in ["A", "B", "C"] {
            g.add_vertex(raw).unwrap();
        }
        for (s, t) in edges {
            g.add_edge_str(s, t).unwrap();
        }
        g
    }

    #[test]
    fn test_v_structure_is_collider() {
        let g = three(Directionality::Directed, &[("A", "B"), ("C", "B")]);
        assert!(is_collider(&g, &path("ABC"), v('B')));
    }

    #[test]
    fn test_chain_and_fork_are_not_colliders() {
        let chain = three(Directionality::Directed, &[("A", "B"), ("B", "C")]);
        assert!(!is_collider(&chain, &path("ABC"), v('B')));

        let fork = three(Directionality::Directed, &[("B", "A"), ("B", "C")]);
        assert!(!is_collider(&fork, &path("ABC"), v('B')));
    }

    #[test]
    fn test_flipping_one_edge_flips_result() {
        let collider = three(Directionality::Directed, &[("A", "B"), ("C", "B")]);
        let flipped_left = three(Directionality::Directed, &[("B", "A"), ("C", "B")]);
        let flipped_right = three(Directionality::Directed, &[("A", "B"), ("B", "C")]);
        assert!(is_collider(&collider, &path("ABC"), v('B')));
        assert!(!is_collider(&flipped_left, &path("ABC"), v('B')));
        assert!(!is_collider(&flipped_right, &path("ABC"), v('B')));
    }

    #[test]
    fn test_undirected_chain_is_not_collider() {
        let g = three(Directionality::Undirected, &[("A", "B"), ("B", "C")]);
        assert!(!is_collider(&g, &path("ABC"), v('B')));
        assert!(!is_collider(&g, &path("CBA"), v('B')));
    }

    #[test]
    fn test_undirected_collider_follows_key_orientation() {
        let g = three(Directionality::Undirected, &[("A", "B"), ("C", "B")]);
        assert!(is_collider(&g, &path("ABC"), v('B')));
        assert!(is_collider(&g, &path("CBA"), v('B')));

        let fork = three(Directionality::Undirected, &[("B", "A"), ("B", "C")]);
        assert!(!is_collider(&fork, &path("ABC"), v('B')));
    }

    #[test]
    #[should_panic(expected = "not an interior vertex")]
    fn test_endpoint_panics() {
        let g = three(Directionality::Directed, &[("A", "B"), ("C", "B")]);
        is_collider(&g, &path("ABC"), v('A'));
    }

    #[test]
    #[should_panic(expected = "not an interior vertex")]
    fn test_vertex_off_path_panics() {
        let g = three(Directionality::Directed, &[("A", "B"), ("C", "B")]);
        is_collider(&g, &path("AB"), v('C'));
    }
}
