use std::path::Path;

use super::{
    bfs, bfs_with_depth, build_csr, induced_edges, CsrGraph, EdgeListFile, EdgeSource,
    ExternalId, GraphEngine, GraphError,
};

/// Whether a [`SparseGraph`] has been populated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// No load has been attempted.
    #[default]
    Unloaded,
    /// The last load could not read its source; the graph is empty.
    Failed,
    /// The graph holds a CSR structure, possibly with zero nodes.
    Loaded,
}

/// A graph that transitions from empty to populated exactly once.
///
/// Until it is loaded every query answers as on an empty graph.
#[derive(Debug, Default)]
pub struct SparseGraph {
    status: LoadStatus,
    csr: Option<CsrGraph>,
}

impl SparseGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn is_loaded(&self) -> bool {
        self.status == LoadStatus::Loaded
    }

    pub fn csr(&self) -> Option<&CsrGraph> {
        self.csr.as_ref()
    }

    /// Populate the graph from any [`EdgeSource`].
    ///
    /// Rejected with [`GraphError::AlreadyLoaded`] once a load has succeeded;
    /// the existing structure is left untouched. A failed load leaves the
    /// graph empty and may be retried.
    pub fn load_from<S: EdgeSource + ?Sized>(&mut self, source: &S) -> Result<(), GraphError> {
        if let Some(csr) = &self.csr {
            return Err(GraphError::AlreadyLoaded {
                num_nodes: csr.num_nodes(),
                num_edges: csr.num_edges(),
            });
        }
        log::info!("Loading graph from {}", source.name());
        match build_csr(source) {
            Ok(csr) => {
                self.csr = Some(csr);
                self.status = LoadStatus::Loaded;
                Ok(())
            }
            Err(err) => {
                log::error!("Could not load {}: {}", source.name(), err);
                self.status = LoadStatus::Failed;
                Err(err)
            }
        }
    }

    /// Whether `node` is a known external id, which tells apart an unknown
    /// node from one without successors.
    pub fn contains(&self, node: ExternalId) -> bool {
        self.csr.as_ref().is_some_and(|csr| csr.contains(node))
    }

    pub fn neighbors(&self, node: ExternalId) -> Vec<ExternalId> {
        self.csr
            .as_ref()
            .map_or_else(Vec::new, |csr| csr.neighbors(node))
    }

    pub fn to_internal(&self, node: ExternalId) -> Option<usize> {
        self.csr.as_ref()?.to_internal(node)
    }

    pub fn to_external(&self, node: usize) -> Option<ExternalId> {
        self.csr.as_ref()?.to_external(node)
    }

    pub fn bfs_with_depth(&self, start: ExternalId, max_depth: usize) -> Vec<(ExternalId, usize)> {
        self.csr
            .as_ref()
            .map_or_else(Vec::new, |csr| bfs_with_depth(csr, start, max_depth))
    }

    pub fn induced_edges(&self, nodes: &[ExternalId]) -> Vec<(ExternalId, ExternalId)> {
        self.csr
            .as_ref()
            .map_or_else(Vec::new, |csr| induced_edges(csr, nodes))
    }
}

impl GraphEngine for SparseGraph {
    fn load(&mut self, path: &Path) -> Result<(), GraphError> {
        self.load_from(&EdgeListFile::new(path))
    }

    fn bfs(&self, start: ExternalId, max_depth: usize) -> Vec<ExternalId> {
        self.csr
            .as_ref()
            .map_or_else(Vec::new, |csr| bfs(csr, start, max_depth))
    }

    fn degree(&self, node: ExternalId) -> usize {
        self.csr.as_ref().map_or(0, |csr| csr.degree(node))
    }

    fn max_degree_node(&self) -> Option<ExternalId> {
        self.csr.as_ref()?.max_degree_node()
    }

    fn num_nodes(&self) -> usize {
        self.csr.as_ref().map_or(0, CsrGraph::num_nodes)
    }

    fn num_edges(&self) -> usize {
        self.csr.as_ref().map_or(0, CsrGraph::num_edges)
    }
}
