//! Property tests for the adjacency invariants of `DirectedGraph`.

use std::collections::BTreeSet;

use cerebro::graph::{dependencies, depth_first, DirectedGraph};
use cerebro::types::*;
use proptest::prelude::*;

type Graph = DirectedGraph<Node, Edge>;

fn build(edges: &[(u8, u8, f64)]) -> Graph {
    let mut g = Graph::new(1.0);
    for &(from, to, w) in edges {
        if from != to {
            g.set_edge(Edge::new(from.to_string(), to.to_string(), w));
        }
    }
    g
}

fn edge_list() -> impl Strategy<Value = Vec<(u8, u8, f64)>> {
    prop::collection::vec((0u8..12, 0u8..12, -10.0f64..10.0), 0..40)
}

proptest! {
    #[test]
    fn test_successors_and_predecessors_mirror(edges in edge_list()) {
        let g = build(&edges);
        for a in g.nodes() {
            for b in g.successors(a) {
                prop_assert!(g.predecessors(b).iter().any(|p| p.id() == a.id()));
                prop_assert!(g.has_edge_from_to(a, b));
            }
            for b in g.predecessors(a) {
                prop_assert!(g.successors(b).iter().any(|s| s.id() == a.id()));
            }
        }
    }

    #[test]
    fn test_edge_lookup_matches_last_write(edges in edge_list()) {
        let g = build(&edges);
        let pairs: BTreeSet<(u8, u8)> = edges
            .iter()
            .filter(|(f, t, _)| f != t)
            .map(|&(f, t, _)| (f, t))
            .collect();

        for (from, to) in pairs {
            let (a, b) = (Node::from(from.to_string()), Node::from(to.to_string()));
            let last = edges
                .iter()
                .rev()
                .find(|&&(f, t, _)| f == from && t == to)
                .map(|&(_, _, w)| w);
            prop_assert!(last.is_some());
            prop_assert_eq!(g.weight(&a, &b), (last.unwrap(), true));
            prop_assert!(g.has_edge_between(&b, &a));
        }
        prop_assert_eq!(g.edge_count(), g.edges().len());
    }

    #[test]
    fn test_removing_a_node_drops_its_degree(edges in edge_list(), victim in 0u8..12) {
        let mut g = build(&edges);
        let victim = Node::from(victim.to_string());
        let before = g.edges().len();
        let degree = g.degree(&victim);

        g.remove_node(&victim);

        prop_assert_eq!(g.edges().len(), before - degree);
        prop_assert!(!g.has(&victim));
        for e in g.edges() {
            prop_assert!(e.source.id() != victim.id() && e.target.id() != victim.id());
        }
        for n in g.nodes() {
            prop_assert!(!g.successors(n).iter().any(|s| s.id() == victim.id()));
            prop_assert!(!g.predecessors(n).iter().any(|p| p.id() == victim.id()));
        }
    }

    #[test]
    fn test_add_node_is_idempotent(edges in edge_list(), repeats in 1usize..5) {
        let mut g = build(&edges);
        let count = g.node_count();
        let edge_count = g.edge_count();
        for _ in 0..repeats {
            g.add_node(Node::from("0"));
        }
        let expected = if edges.iter().any(|(f, t, _)| f != t && (*f == 0 || *t == 0)) {
            count
        } else {
            count + 1
        };
        prop_assert_eq!(g.node_count(), expected);
        prop_assert_eq!(g.edge_count(), edge_count);
    }

    #[test]
    fn test_traversals_visit_each_node_once(edges in edge_list(), start in 0u8..12) {
        let g = build(&edges);
        let start = Node::from(start.to_string());

        let deps = dependencies(&g, &start);
        let mut ids: Vec<&str> = deps.iter().map(Node::as_str).collect();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), deps.len());
        prop_assert_eq!(deps.last(), Some(&start));

        let dfs = depth_first(&g, &start, None);
        let mut ids: Vec<&str> = dfs.iter().map(Node::as_str).collect();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), dfs.len());
        prop_assert_eq!(dfs.first(), Some(&start));
        prop_assert!(dfs.len() >= deps.len());
    }
}
