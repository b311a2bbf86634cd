use std::fmt;

use serde::{Deserialize, Serialize};

/// A value usable as a graph vertex.
///
/// Two values are the same vertex iff their ids are equal.
pub trait Identifiable {
    /// Stable, unique identifier of this vertex.
    fn id(&self) -> &str;
}

/// A directed, weighted connection between two vertices.
pub trait WeightedEdge {
    type Node: Identifiable;

    /// The node this edge starts at.
    fn source(&self) -> &Self::Node;
    /// The node this edge points to.
    fn target(&self) -> &Self::Node;
    fn weight(&self) -> f64;
}

/// A vertex identified by its string value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Node(String);

impl Node {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Identifiable for Node {
    fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Node {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for Node {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// An edge between two `Node`s carrying a weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: Node,
    pub target: Node,
    pub weight: f64,
}

impl Edge {
    /// Creates an edge from `source` to `target`.
    pub fn new(source: impl Into<Node>, target: impl Into<Node>, weight: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }
}

impl WeightedEdge for Edge {
    type Node = Node;

    fn source(&self) -> &Node {
        &self.source
    }

    fn target(&self) -> &Node {
        &self.target
    }

    fn weight(&self) -> f64 {
        self.weight
    }
}
