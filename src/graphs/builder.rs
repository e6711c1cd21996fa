use dsi_progress_logger::prelude::*;

use super::{CsrGraph, EdgeSource, GraphError, IdMap, IdMapBuilder};

/// Build a [`CsrGraph`] with two scans of `source`.
///
/// The first scan counts edges and assigns internal ids without keeping
/// edges in memory. The second scan translates every edge, sorts them by
/// `(source, target)` internal id and assembles the CSR arrays.
pub fn build_csr<S: EdgeSource + ?Sized>(source: &S) -> Result<CsrGraph, GraphError> {
    let mut pl = ProgressLogger::default();
    pl.item_name("edge");

    let (ids, num_edges) = discover_ids(source, &mut pl)?;
    let num_nodes = ids.len();
    log::info!(
        "Counted {} edges and {} nodes in {}",
        num_edges,
        num_nodes,
        source.name()
    );

    let edges = translate_edges(source, &ids, num_edges, &mut pl)?;

    pl.start("Assembling the CSR arrays...");
    let (row_offsets, col_indices, values) = assemble(num_nodes, edges);
    pl.done();

    Ok(CsrGraph::from_parts(row_offsets, col_indices, values, ids))
}

fn discover_ids<S: EdgeSource + ?Sized>(
    source: &S,
    pl: &mut ProgressLogger,
) -> Result<(IdMap, usize), GraphError> {
    let mut ids = IdMapBuilder::new();
    let mut num_edges = 0;

    pl.expected_updates(None);
    pl.start(format!("Scanning {} for node identifiers...", source.name()));
    for edge in source.edges()? {
        let (u, v) = edge?;
        ids.assign(u);
        ids.assign(v);
        num_edges += 1;
        pl.light_update();
    }
    pl.done();

    Ok((ids.build(), num_edges))
}

fn translate_edges<S: EdgeSource + ?Sized>(
    source: &S,
    ids: &IdMap,
    num_edges: usize,
    pl: &mut ProgressLogger,
) -> Result<Vec<(usize, usize)>, GraphError> {
    let changed = |detail: String| GraphError::SourceChanged {
        origin: source.name().into_owned(),
        detail,
    };

    let mut edges = Vec::with_capacity(num_edges);
    pl.expected_updates(Some(num_edges));
    pl.start("Translating edges to internal ids...");
    for edge in source.edges()? {
        let (u, v) = edge?;
        let (Some(iu), Some(iv)) = (ids.to_internal(u), ids.to_internal(v)) else {
            return Err(changed(format!("edge {} {} was not seen in the first pass", u, v)));
        };
        if edges.len() == num_edges {
            return Err(changed(format!("more than {} edges", num_edges)));
        }
        edges.push((iu, iv));
        pl.light_update();
    }
    pl.done();

    if edges.len() != num_edges {
        return Err(changed(format!(
            "expected {} edges, found {}",
            num_edges,
            edges.len()
        )));
    }

    edges.sort_unstable();
    Ok(edges)
}

/// Lay out sorted `(source, target)` pairs as CSR arrays.
fn assemble(
    num_nodes: usize,
    edges: Vec<(usize, usize)>,
) -> (Box<[usize]>, Box<[usize]>, Box<[u32]>) {
    let num_edges = edges.len();
    let mut row_offsets = vec![0; num_nodes + 1];
    let mut col_indices = Vec::with_capacity(num_edges);

    let mut current_row = 0;
    for (i, (u, v)) in edges.into_iter().enumerate() {
        // rows without successors share the offset of the next non-empty row
        while current_row < u {
            current_row += 1;
            row_offsets[current_row] = i;
        }
        col_indices.push(v);
    }
    while current_row < num_nodes {
        current_row += 1;
        row_offsets[current_row] = num_edges;
    }

    (
        row_offsets.into_boxed_slice(),
        col_indices.into_boxed_slice(),
        vec![1; num_edges].into_boxed_slice(),
    )
}
