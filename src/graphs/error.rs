use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced while loading a graph.
///
/// Malformed lines are not errors: they are skipped while scanning.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("could not open edge list {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not read {origin} at line {line}")]
    Read {
        origin: String,
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("graph is already loaded ({num_nodes} nodes, {num_edges} edges)")]
    AlreadyLoaded { num_nodes: usize, num_edges: usize },

    #[error("{origin} changed between the two passes: {detail}")]
    SourceChanged { origin: String, detail: String },
}
