use super::{ExternalId, IdMap};

/// A directed, unweighted graph in compressed sparse row form.
///
/// The successors of internal node `i` are
/// `col_indices[row_offsets[i]..row_offsets[i + 1]]`, sorted by internal id.
/// `values` is aligned with `col_indices` and always holds `1`.
/// Nothing is mutated after construction.
#[derive(Debug, Clone)]
pub struct CsrGraph {
    row_offsets: Box<[usize]>,
    col_indices: Box<[usize]>,
    values: Box<[u32]>,
    ids: IdMap,
}

impl CsrGraph {
    pub(crate) fn from_parts(
        row_offsets: Box<[usize]>,
        col_indices: Box<[usize]>,
        values: Box<[u32]>,
        ids: IdMap,
    ) -> Self {
        debug_assert_eq!(row_offsets.len(), ids.len() + 1);
        debug_assert_eq!(col_indices.len(), values.len());
        Self {
            row_offsets,
            col_indices,
            values,
            ids,
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.row_offsets.len() - 1
    }

    pub fn num_edges(&self) -> usize {
        self.col_indices.len()
    }

    pub fn row_offsets(&self) -> &[usize] {
        &self.row_offsets
    }

    pub fn col_indices(&self) -> &[usize] {
        &self.col_indices
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn id_map(&self) -> &IdMap {
        &self.ids
    }

    /// Successors of an internal node, in ascending internal order.
    ///
    /// # Panics
    ///
    /// If `node >= num_nodes()`.
    pub fn successors(&self, node: usize) -> &[usize] {
        &self.col_indices[self.row_offsets[node]..self.row_offsets[node + 1]]
    }

    /// # Panics
    ///
    /// If `node >= num_nodes()`.
    pub fn out_degree(&self, node: usize) -> usize {
        self.row_offsets[node + 1] - self.row_offsets[node]
    }

    /// All arcs as `(source, target)` internal pairs, in CSR order.
    pub fn arcs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.num_nodes())
            .flat_map(move |node| self.successors(node).iter().map(move |&succ| (node, succ)))
    }

    pub fn to_internal(&self, external: ExternalId) -> Option<usize> {
        self.ids.to_internal(external)
    }

    pub fn to_external(&self, internal: usize) -> Option<ExternalId> {
        self.ids.to_external(internal)
    }

    pub fn contains(&self, external: ExternalId) -> bool {
        self.ids.to_internal(external).is_some()
    }

    /// Out-degree of an external node, `0` if the node is unknown.
    pub fn degree(&self, external: ExternalId) -> usize {
        self.to_internal(external).map_or(0, |node| self.out_degree(node))
    }

    /// External ids of the successors of `external`, in ascending internal
    /// order. Empty if the node is unknown.
    pub fn neighbors(&self, external: ExternalId) -> Vec<ExternalId> {
        let Some(node) = self.to_internal(external) else {
            return Vec::new();
        };
        let externals = self.ids.externals();
        self.successors(node)
            .iter()
            .map(|&succ| externals[succ])
            .collect()
    }

    /// The node with the largest out-degree together with its degree.
    /// Ties go to the node that appeared first in the source.
    pub fn max_degree(&self) -> Option<(ExternalId, usize)> {
        let mut best: Option<(usize, usize)> = None;
        for node in 0..self.num_nodes() {
            let degree = self.out_degree(node);
            if best.map_or(true, |(_, max)| degree > max) {
                best = Some((node, degree));
            }
        }
        best.map(|(node, degree)| (self.ids.externals()[node], degree))
    }

    /// `None` when the graph has no nodes.
    pub fn max_degree_node(&self) -> Option<ExternalId> {
        self.max_degree().map(|(node, _)| node)
    }
}
