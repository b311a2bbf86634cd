use std::collections::HashSet;

use crate::graph::DirectedGraph;
use crate::types::{Identifiable, WeightedEdge};

/// Returns `start` and every node it reaches through outgoing edges, each
/// emitted after everything it depends on.
///
/// For an edge `a -> b`, `b` comes before `a` unless `b` was already reached
/// through another path. Cycles are cut at the first revisited node without
/// an error. The order among siblings is unspecified.
pub fn dependencies<N, E>(g: &DirectedGraph<N, E>, start: &N) -> Vec<N>
where
    N: Identifiable + Clone,
    E: WeightedEdge<Node = N> + Clone,
{
    let mut visited = HashSet::new();
    let mut deps = Vec::new();
    topological_sort(g, start, &mut visited, &mut deps);
    tracing::debug!(start = %start.id(), count = deps.len(), "resolved dependencies");
    deps
}

/// Depth-first post-order walk over outgoing edges.
///
/// Appends `vertex` to `out` once every unvisited successor has been
/// appended. `visited` is shared across the whole recursion and may be
/// reused between calls to skip nodes that were already emitted.
pub fn topological_sort<N, E>(
    g: &DirectedGraph<N, E>,
    vertex: &N,
    visited: &mut HashSet<String>,
    out: &mut Vec<N>,
) where
    N: Identifiable + Clone,
    E: WeightedEdge<Node = N> + Clone,
{
    visited.insert(vertex.id().to_string());

    for next in g.successors(vertex) {
        if !visited.contains(next.id()) {
            topological_sort(g, next, visited, out);
        }
    }
    out.push(vertex.clone());
}

/// Pre-order depth-first walk treating every edge as undirected.
///
/// `start` is always first, followed by every node in its weakly-connected
/// component exactly once. Pass `None` for a fresh visited set; pass a
/// shared set to skip nodes covered by earlier calls.
pub fn depth_first<N, E>(
    g: &DirectedGraph<N, E>,
    start: &N,
    visited: Option<&mut HashSet<String>>,
) -> Vec<N>
where
    N: Identifiable + Clone,
    E: WeightedEdge<Node = N> + Clone,
{
    let mut fresh = HashSet::new();
    let visited = match visited {
        Some(visited) => visited,
        None => &mut fresh,
    };

    let mut order = vec![start.clone()];
    visited.insert(start.id().to_string());

    for next in neighbors(g, start) {
        if !visited.contains(next.id()) {
            order.extend(depth_first(g, next, Some(&mut *visited)));
        }
    }
    order
}

/// Successors followed by predecessors, de-duplicated by id.
fn neighbors<'g, N, E>(g: &'g DirectedGraph<N, E>, n: &N) -> Vec<&'g N>
where
    N: Identifiable + Clone,
    E: WeightedEdge<Node = N> + Clone,
{
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::new();
    for m in g.successors(n).into_iter().chain(g.predecessors(n)) {
        if seen.insert(m.id()) {
            out.push(m);
        }
    }
    out
}
