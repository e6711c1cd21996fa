use std::collections::VecDeque;

use sux::bits::BitVec;

use super::{CsrGraph, ExternalId};

/// Depth-bounded breadth-first search from `start`.
///
/// Returns external ids in discovery order, each paired with its distance
/// from `start`. The start node always comes first at depth 0. Nodes found
/// at `max_depth` are reported but not expanded. The successors of a node
/// are visited in ascending internal id order, which follows first
/// appearance in the source rather than the numeric order of external ids.
///
/// An unknown `start` yields an empty result.
pub fn bfs_with_depth(
    graph: &CsrGraph,
    start: ExternalId,
    max_depth: usize,
) -> Vec<(ExternalId, usize)> {
    let Some(root) = graph.to_internal(start) else {
        log::warn!("Start node {} not found", start);
        return Vec::new();
    };

    let num_nodes = graph.num_nodes();
    let externals = graph.id_map().externals();
    let mut seen = BitVec::new(num_nodes);
    // every node is enqueued at most once
    let mut queue = VecDeque::with_capacity(num_nodes);
    let mut order = vec![(start, 0)];

    seen.set(root, true);
    queue.push_back((root, 0));

    while let Some((node, depth)) = queue.pop_front() {
        if depth >= max_depth {
            continue;
        }
        for &succ in graph.successors(node) {
            if !seen.get(succ) {
                seen.set(succ, true);
                order.push((externals[succ], depth + 1));
                queue.push_back((succ, depth + 1));
            }
        }
    }

    order
}

/// Like [`bfs_with_depth`], without the distances.
pub fn bfs(graph: &CsrGraph, start: ExternalId, max_depth: usize) -> Vec<ExternalId> {
    bfs_with_depth(graph, start, max_depth)
        .into_iter()
        .map(|(node, _)| node)
        .collect()
}

/// The arcs whose endpoints both belong to `nodes`.
///
/// Sources are taken in the order they appear in `nodes` (repeats and
/// unknown ids are ignored), targets in CSR order.
pub fn induced_edges(graph: &CsrGraph, nodes: &[ExternalId]) -> Vec<(ExternalId, ExternalId)> {
    let mut members = BitVec::new(graph.num_nodes());
    let mut sources = Vec::with_capacity(nodes.len());
    for &external in nodes {
        if let Some(node) = graph.to_internal(external) {
            if !members.get(node) {
                members.set(node, true);
                sources.push(node);
            }
        }
    }

    let externals = graph.id_map().externals();
    let mut edges = Vec::new();
    for node in sources {
        for &succ in graph.successors(node) {
            if members.get(succ) {
                edges.push((externals[node], externals[succ]));
            }
        }
    }
    edges
}
