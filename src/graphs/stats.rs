use anyhow::{bail, ensure, Result};

use super::CsrGraph;

/// Summary of the out-degree distribution of a graph.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DegreeStats {
    pub num_nodes: usize,
    pub num_edges: usize,
    pub min_degree: usize,
    pub max_degree: usize,
    pub mean_degree: f64,
    /// Nodes without outgoing edges.
    pub sinks: usize,
}

pub fn degree_stats(graph: &CsrGraph) -> DegreeStats {
    let num_nodes = graph.num_nodes();
    if num_nodes == 0 {
        return DegreeStats::default();
    }

    let mut stats = DegreeStats {
        num_nodes,
        num_edges: graph.num_edges(),
        min_degree: usize::MAX,
        ..Default::default()
    };
    for node in 0..num_nodes {
        let degree = graph.out_degree(node);
        stats.min_degree = stats.min_degree.min(degree);
        stats.max_degree = stats.max_degree.max(degree);
        if degree == 0 {
            stats.sinks += 1;
        }
    }
    stats.mean_degree = stats.num_edges as f64 / num_nodes as f64;
    stats
}

/// Check the structural invariants of a CSR graph and of its id mapping.
pub fn validate_csr(graph: &CsrGraph) -> Result<()> {
    let offsets = graph.row_offsets();
    let cols = graph.col_indices();
    let n = graph.num_nodes();
    let m = graph.num_edges();

    ensure!(offsets.len() == n + 1, "offsets length must be n+1");
    ensure!(offsets[0] == 0, "offsets[0] must be 0");
    ensure!(
        offsets[n] == m,
        "offsets[n] = {}, but there are {} edges",
        offsets[n],
        m
    );
    for i in 0..n {
        ensure!(
            offsets[i] <= offsets[i + 1],
            "offsets not non-decreasing at i={}",
            i
        );
        let succ = graph.successors(i);
        ensure!(
            succ.windows(2).all(|w| w[0] <= w[1]),
            "successors of node {} are not sorted",
            i
        );
    }
    ensure!(cols.len() == m, "col_indices len {} != edges {}", cols.len(), m);
    if let Some((node, succ)) = graph.arcs().find(|&(_, succ)| succ >= n) {
        bail!("arc {} -> {} out of range for {} nodes", node, succ, n);
    }
    ensure!(
        graph.values().len() == m,
        "values len {} != edges {}",
        graph.values().len(),
        m
    );

    let ids = graph.id_map();
    ensure!(ids.len() == n, "id map has {} entries for {} nodes", ids.len(), n);
    for (internal, &external) in ids.externals().iter().enumerate() {
        ensure!(
            ids.to_internal(external) == Some(internal),
            "external id {} does not map back to {}",
            external,
            internal
        );
    }
    Ok(())
}
