//! Simple path enumeration
//!
//! Explicit-stack DFS over partial paths, seeded with `[start]`. A partial
//! path ending at `end` is emitted and not extended further; otherwise it is
//! extended by every neighbour not already on it. Paths never repeat a
//! vertex, so the search is bounded by the vertex count.
//!
//! Output order follows the stack (LIFO) and is not part of the contract.

use tracing::trace;

use crate::features::graph::LabeledGraph;
use crate::features::path_enumeration::domain::Path;
use crate::shared::models::VertexLabel;

/// Every simple path from `start` to `end`, direction ignored
///
/// `start == end` yields the single one-vertex path. A missing vertex or an
/// unreachable `end` yields no paths.
pub fn enumerate_paths(graph: &LabeledGraph, start: VertexLabel, end: VertexLabel) -> Vec<Path> {
    let mut paths = Vec::new();
    if !graph.contains_vertex(start) {
        return paths;
    }

    let mut stack = vec![Path::single(start)];
    while let Some(path) = stack.pop() {
        let Some(last) = path.end() else { continue };
        if last == end {
            trace!(path = %path, "path enumerated");
            paths.push(path);
            continue;
        }
        for neighbor in graph.neighbors(last) {
            if !path.contains(neighbor) {
                stack.push(path.extended(neighbor));
            }
        }
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::Directionality;
    use std::collections::BTreeSet;

    fn v(c: char) -> VertexLabel {
        VertexLabel::from(c)
    }

    fn graph(directionality: Directionality, edges: &[(char, char)]) -> LabeledGraph {
        let mut g = LabeledGraph::new(directionality);
        let labels: BTreeSet<char> = edges.iter().flat_map(|&(a, b)| [a, b]).collect();
        for c in labels {
            g.add_vertex_label(v(c)).unwrap();
        }
        for &(a, b) in edges {
            g.add_edge(v(a), v(b)).unwrap();
        }
        g
    }

    fn rendered(paths: &[Path]) -> BTreeSet<String> {
        paths.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_chain_single_path() {
        let g = graph(Directionality::Directed, &[('A', 'B'), ('B', 'C')]);
        let paths = enumerate_paths(&g, v('A'), v('C'));
        assert_eq!(rendered(&paths), BTreeSet::from(["ABC".to_string()]));
    }

    #[test]
    fn test_ignores_edge_direction() {
        let g = graph(Directionality::Directed, &[('A', 'B'), ('C', 'B')]);
        let paths = enumerate_paths(&g, v('A'), v('C'));
        assert_eq!(rendered(&paths), BTreeSet::from(["ABC".to_string()]));
    }

    #[test]
    fn test_diamond_all_paths() {
        let g = graph(
            Directionality::Directed,
            &[('A', 'B'), ('A', 'C'), ('B', 'D'), ('C', 'D'), ('B', 'C')],
        );
        let paths = enumerate_paths(&g, v('A'), v('D'));
        let expected: BTreeSet<String> = ["ABD", "ACD", "ABCD", "ACBD"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(rendered(&paths), expected);
        assert_eq!(paths.len(), 4);
    }

    #[test]
    fn test_start_equals_end() {
        let g = graph(Directionality::Undirected, &[('A', 'B')]);
        let paths = enumerate_paths(&g, v('A'), v('A'));
        assert_eq!(paths, vec![Path::single(v('A'))]);
    }

    #[test]
    fn test_no_path() {
        let mut g = graph(Directionality::Directed, &[('A', 'B')]);
        g.add_vertex("C").unwrap();
        assert!(enumerate_paths(&g, v('A'), v('C')).is_empty());
        assert!(enumerate_paths(&g, v('Z'), v('A')).is_empty());
    }

    #[test]
    fn test_paths_are_simple() {
        let g = graph(
            Directionality::Undirected,
            &[('A', 'B'), ('B', 'C'), ('C', 'A'), ('C', 'D'), ('B', 'D')],
        );
        for path in enumerate_paths(&g, v('A'), v('D')) {
            let distinct: BTreeSet<_> = path.vertices().iter().collect();
            assert_eq!(distinct.len(), path.len(), "repeated vertex in {path}");
            assert_eq!(path.start(), Some(v('A')));
            assert_eq!(path.end(), Some(v('D')));
        }
    }
}
