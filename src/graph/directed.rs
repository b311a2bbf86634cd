use std::collections::HashMap;

use crate::config::GraphConfig;
use crate::errors::{CerebroError, Result};
use crate::types::{Identifiable, WeightedEdge};

/// A generalized directed graph keyed by node id.
///
/// Successors and predecessors are kept in two mirrored indices: for every
/// `from[a][b] = e` there is exactly one `to[b][a] = e`. All structural changes
/// go through the methods below, which update both indices together.
#[derive(Debug, Clone)]
pub struct DirectedGraph<N, E> {
    nodes: HashMap<String, N>,
    from: HashMap<String, HashMap<String, E>>,
    to: HashMap<String, HashMap<String, E>>,
    config: GraphConfig,
}

impl<N, E> Default for DirectedGraph<N, E> {
    fn default() -> Self {
        Self::with_config(GraphConfig::default())
    }
}

impl<N, E> DirectedGraph<N, E> {
    /// Creates an empty graph reporting `default_weight` for self-comparisons.
    pub fn new(default_weight: f64) -> Self {
        Self::with_config(GraphConfig::with_default_weight(default_weight))
    }

    /// Creates an empty graph using the weights in `config`.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            nodes: HashMap::new(),
            from: HashMap::new(),
            to: HashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.from.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Mutation
// ---------------------------------------------------------------------------

impl<N, E> DirectedGraph<N, E>
where
    N: Identifiable + Clone,
    E: WeightedEdge<Node = N> + Clone,
{
    /// Adds `n` to the graph. Adding a node whose id is already present is a no-op.
    pub fn add_node(&mut self, n: N) {
        let id = n.id();
        if self.nodes.contains_key(id) {
            return;
        }
        let id = id.to_string();
        self.from.insert(id.clone(), HashMap::new());
        self.to.insert(id.clone(), HashMap::new());
        self.nodes.insert(id, n);
    }

    /// Removes `n` and every edge touching it, in either direction.
    pub fn remove_node(&mut self, n: &N) {
        let id = n.id();
        if self.nodes.remove(id).is_none() {
            return;
        }

        let outgoing = self.from.remove(id).unwrap_or_default();
        for target in outgoing.keys() {
            if let Some(incoming) = self.to.get_mut(target) {
                incoming.remove(id);
            }
        }

        let incoming = self.to.remove(id).unwrap_or_default();
        for source in incoming.keys() {
            if let Some(outgoing) = self.from.get_mut(source) {
                outgoing.remove(id);
            }
        }

        tracing::debug!(
            node = %id,
            dropped_edges = outgoing.len() + incoming.len(),
            "removed node"
        );
    }

    /// Adds `e`, creating either endpoint if it is missing.
    ///
    /// An existing edge between the same ordered pair is replaced.
    ///
    /// # Panics
    ///
    /// Panics if the edge's source and target share an id. Use
    /// [`try_set_edge`](Self::try_set_edge) to get an error instead.
    pub fn set_edge(&mut self, e: E) {
        if e.source().id() == e.target().id() {
            panic!("adding edge to self: {}", e.source().id());
        }
        self.insert_edge(e);
    }

    /// Like [`set_edge`](Self::set_edge), but rejects a self-loop with
    /// [`CerebroError::SelfLoop`] and leaves the graph untouched.
    pub fn try_set_edge(&mut self, e: E) -> Result<()> {
        let id = e.source().id();
        if id == e.target().id() {
            tracing::warn!(node = %id, "rejected self-loop edge");
            return Err(CerebroError::SelfLoop { id: id.to_string() });
        }
        self.insert_edge(e);
        Ok(())
    }

    fn insert_edge(&mut self, e: E) {
        let source = e.source().clone();
        let target = e.target().clone();
        let sid = source.id().to_string();
        let tid = target.id().to_string();

        self.add_node(source);
        self.add_node(target);

        self.to
            .entry(tid.clone())
            .or_default()
            .insert(sid.clone(), e.clone());
        let replaced = self
            .from
            .entry(sid.clone())
            .or_default()
            .insert(tid.clone(), e)
            .is_some();

        if replaced {
            tracing::trace!(source = %sid, target = %tid, "replaced existing edge");
        } else {
            tracing::trace!(source = %sid, target = %tid, "added edge");
        }
    }

    /// Removes the edge from `e.source()` to `e.target()`, if present.
    pub fn remove_edge(&mut self, e: &E) {
        let sid = e.source().id();
        let tid = e.target().id();
        if !self.nodes.contains_key(sid) || !self.nodes.contains_key(tid) {
            return;
        }

        if let Some(outgoing) = self.from.get_mut(sid) {
            outgoing.remove(tid);
        }
        if let Some(incoming) = self.to.get_mut(tid) {
            incoming.remove(sid);
        }
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

impl<N, E> DirectedGraph<N, E>
where
    N: Identifiable + Clone,
    E: WeightedEdge<Node = N> + Clone,
{
    /// Returns `true` if a node with the same id as `n` is in the graph.
    pub fn has(&self, n: &N) -> bool {
        self.nodes.contains_key(n.id())
    }

    /// Returns the node with the given id.
    pub fn node(&self, id: &str) -> Option<&N> {
        self.nodes.get(id)
    }

    /// Returns every node, in no particular order.
    pub fn nodes(&self) -> Vec<&N> {
        self.nodes.values().collect()
    }

    /// Returns every edge exactly once, in no particular order.
    pub fn edges(&self) -> Vec<&E> {
        self.nodes
            .keys()
            .filter_map(|id| self.from.get(id))
            .flat_map(HashMap::values)
            .collect()
    }

    /// Returns the nodes reachable from `n` by a single outgoing edge.
    ///
    /// Empty when `n` is not in the graph.
    pub fn successors(&self, n: &N) -> Vec<&N> {
        self.resolve(self.from.get(n.id()))
    }

    /// Returns the nodes that reach `n` by a single edge.
    ///
    /// Empty when `n` is not in the graph.
    pub fn predecessors(&self, n: &N) -> Vec<&N> {
        self.resolve(self.to.get(n.id()))
    }

    fn resolve(&self, adjacent: Option<&HashMap<String, E>>) -> Vec<&N> {
        adjacent
            .map(|edges| {
                edges
                    .keys()
                    .filter_map(|id| self.nodes.get(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns whether an edge exists between `x` and `y`, in either direction.
    pub fn has_edge_between(&self, x: &N, y: &N) -> bool {
        self.has_edge_from_to(x, y) || self.has_edge_from_to(y, x)
    }

    /// Returns the edge from `u` to `v`. The reverse edge is not considered.
    pub fn edge(&self, u: &N, v: &N) -> Option<&E> {
        if !self.has(u) || !self.has(v) {
            return None;
        }
        self.from.get(u.id()).and_then(|outgoing| outgoing.get(v.id()))
    }

    /// Returns whether a directed edge from `u` to `v` exists.
    pub fn has_edge_from_to(&self, u: &N, v: &N) -> bool {
        self.edge(u, v).is_some()
    }

    /// Returns the weight of the edge from `x` to `y` and whether it exists.
    ///
    /// Comparing a node with itself yields the configured default weight and
    /// `true`. When no `x -> y` edge exists the configured absent weight is
    /// returned with `false`; the flag is authoritative. The lookup is
    /// direction-sensitive: `weight(y, x)` may disagree.
    pub fn weight(&self, x: &N, y: &N) -> (f64, bool) {
        if x.id() == y.id() {
            return (self.config.default_weight, true);
        }
        match self.from.get(x.id()).and_then(|outgoing| outgoing.get(y.id())) {
            Some(e) => (e.weight(), true),
            None => (self.config.absent_weight, false),
        }
    }

    /// Returns the in+out degree of `n`, or 0 when `n` is not in the graph.
    ///
    /// A bidirectional pair counts once in each direction.
    pub fn degree(&self, n: &N) -> usize {
        if !self.has(n) {
            return 0;
        }
        let out = self.from.get(n.id()).map_or(0, HashMap::len);
        let inc = self.to.get(n.id()).map_or(0, HashMap::len);
        out + inc
    }
}
