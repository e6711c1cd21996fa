use std::collections::HashMap;

use super::ExternalId;

/// Assigns dense internal ids to external ids in order of first appearance.
///
/// Used only while scanning a source; [`build`](IdMapBuilder::build) freezes
/// it into an [`IdMap`].
#[derive(Debug, Default)]
pub struct IdMapBuilder {
    forward: HashMap<ExternalId, usize>,
    reverse: Vec<ExternalId>,
}

impl IdMapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the internal id of `external`, assigning the next free one if
    /// it has never been seen.
    pub fn assign(&mut self, external: ExternalId) -> usize {
        if let Some(&internal) = self.forward.get(&external) {
            return internal;
        }
        let internal = self.reverse.len();
        self.forward.insert(external, internal);
        self.reverse.push(external);
        internal
    }

    pub fn len(&self) -> usize {
        self.reverse.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reverse.is_empty()
    }

    pub fn build(mut self) -> IdMap {
        self.forward.shrink_to_fit();
        IdMap {
            forward: self.forward,
            reverse: self.reverse.into_boxed_slice(),
        }
    }
}

/// Read-only bidirectional mapping between external ids and `[0, N)`.
#[derive(Debug, Clone, Default)]
pub struct IdMap {
    forward: HashMap<ExternalId, usize>,
    reverse: Box<[ExternalId]>,
}

impl IdMap {
    pub fn to_internal(&self, external: ExternalId) -> Option<usize> {
        self.forward.get(&external).copied()
    }

    /// `None` when `internal` is not in `[0, N)`.
    pub fn to_external(&self, internal: usize) -> Option<ExternalId> {
        self.reverse.get(internal).copied()
    }

    /// External ids indexed by internal id.
    pub fn externals(&self) -> &[ExternalId] {
        &self.reverse
    }

    pub fn len(&self) -> usize {
        self.reverse.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reverse.is_empty()
    }
}
