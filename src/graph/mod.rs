/// The directed graph container and its adjacency queries.
pub mod directed;

/// Dependency ordering and weakly-connected depth-first traversal.
pub mod traversal;

pub use directed::DirectedGraph;
pub use traversal::{dependencies, depth_first, topological_sort};
