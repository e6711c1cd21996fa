mod builder;
mod csr;
mod edge_source;
mod engine;
mod error;
mod id_map;
mod stats;
mod traversal;

use std::path::Path;

pub use builder::*;
pub use csr::*;
pub use edge_source::*;
pub use engine::*;
pub use error::*;
pub use id_map::*;
pub use stats::*;
pub use traversal::*;

/// A node identifier as it appears in the input.
pub type ExternalId = i64;

/// The query surface of a loaded graph, independent of its representation.
///
/// Unknown ids are not errors: `bfs` returns an empty sequence and `degree`
/// returns `0`.
pub trait GraphEngine {
    /// Load the edge list at `path`.
    fn load(&mut self, path: &Path) -> Result<(), GraphError>;

    /// Depth-bounded BFS, see [`bfs_with_depth`].
    fn bfs(&self, start: ExternalId, max_depth: usize) -> Vec<ExternalId>;

    fn degree(&self, node: ExternalId) -> usize;

    /// `None` when the graph has no nodes.
    fn max_degree_node(&self) -> Option<ExternalId>;

    fn num_nodes(&self) -> usize;

    fn num_edges(&self) -> usize;
}

/// Build a CSR graph from the edge list at `path`.
pub fn load_graph(path: impl AsRef<Path>) -> Result<CsrGraph, GraphError> {
    build_csr(&EdgeListFile::new(path))
}
