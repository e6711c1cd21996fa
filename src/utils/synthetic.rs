use std::collections::HashSet;
use std::io::Write;

use anyhow::{ensure, Result};
use rand::prelude::*;
use rand::rngs::SmallRng;
use rand_distr::Zipf;

use crate::graphs::ExternalId;

/// Shape of a synthetic edge list.
#[derive(Debug, Clone)]
pub struct SyntheticParameters {
    pub num_nodes: usize,
    pub num_edges: usize,
    /// External ids are drawn uniformly from `[0, id_space)`.
    pub id_space: ExternalId,
    /// Exponent of the Zipf distribution used to pick sources.
    pub exponent: f64,
    pub seed: u64,
}

impl Default for SyntheticParameters {
    fn default() -> Self {
        Self {
            num_nodes: 1000,
            num_edges: 10_000,
            id_space: 1_000_000_000,
            exponent: 1.5,
            seed: 0,
        }
    }
}

/// Write a random edge list with sparse external ids and a skewed
/// out-degree distribution, one `u v` pair per line.
///
/// Only ids that end up as an endpoint become nodes of a loaded graph.
/// Returns the number of edges written.
pub fn write_synthetic_edge_list(
    parameters: &SyntheticParameters,
    mut writer: impl Write,
) -> Result<usize> {
    ensure!(parameters.num_nodes > 0, "at least one node is needed");
    ensure!(
        parameters.id_space > 0 && parameters.num_nodes as u64 <= parameters.id_space as u64,
        "cannot draw {} distinct ids from [0, {})",
        parameters.num_nodes,
        parameters.id_space
    );

    let mut rng = SmallRng::seed_from_u64(parameters.seed);
    let mut seen = HashSet::with_capacity(parameters.num_nodes);
    let mut ids = Vec::with_capacity(parameters.num_nodes);
    while ids.len() < parameters.num_nodes {
        let id = rng.random_range(0..parameters.id_space);
        if seen.insert(id) {
            ids.push(id);
        }
    }

    let zipf = Zipf::new(parameters.num_nodes as f64, parameters.exponent)?;
    writeln!(
        writer,
        "# synthetic graph: {} nodes, {} edges, seed {}",
        parameters.num_nodes, parameters.num_edges, parameters.seed
    )?;
    for _ in 0..parameters.num_edges {
        let rank = rng.sample(zipf) as usize;
        let u = ids[rank.clamp(1, ids.len()) - 1];
        let v = ids[rng.random_range(0..ids.len())];
        writeln!(writer, "{} {}", u, v)?;
    }
    writer.flush()?;
    Ok(parameters.num_edges)
}
