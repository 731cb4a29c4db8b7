//! The ordered, duplicate-free node kind registry.

use crate::error::InvalidRegistry;
use crate::kinds::BUILTIN_KINDS;
use crate::name::{is_identifier, NodeKindName};
use indexmap::IndexSet;

/// An ordered, non-empty sequence of unique node kind names.
///
/// Order is significant: forward declarations, variant alternatives and
/// visitor parameters are all emitted in registry order. The first entry
/// is the root kind.
#[derive(Debug, Clone)]
pub struct NodeKindRegistry {
    kinds: IndexSet<NodeKindName>,
}

impl NodeKindRegistry {
    /// Build a registry, failing on the first violated invariant.
    pub fn new<I, S>(names: I) -> Result<Self, InvalidRegistry>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut kinds = IndexSet::new();
        for (index, name) in names.into_iter().enumerate() {
            let name = name.into();
            if !is_identifier(&name) {
                return Err(InvalidRegistry::InvalidIdentifier { name, index });
            }
            let kind = NodeKindName(name);
            let (first, inserted) = kinds.insert_full(kind);
            if !inserted {
                let name = kinds[first].to_string();
                return Err(InvalidRegistry::DuplicateKind {
                    name,
                    first,
                    second: index,
                });
            }
        }

        if kinds.is_empty() {
            return Err(InvalidRegistry::Empty);
        }

        tracing::debug!(
            "node kind registry with {} kinds, root `{}`",
            kinds.len(),
            kinds[0]
        );
        Ok(Self { kinds })
    }

    /// The registry compiled into the generator.
    pub fn builtin() -> Self {
        let kinds = BUILTIN_KINDS
            .iter()
            .map(|name| NodeKindName(name.to_string()))
            .collect();
        Self { kinds }
    }

    /// The root kind: the common fallback every other kind specializes.
    pub fn root(&self) -> &NodeKindName {
        &self.kinds[0]
    }

    /// Kinds after the root, in registry order.
    pub fn specialized(&self) -> impl Iterator<Item = &NodeKindName> {
        self.kinds.iter().skip(1)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NodeKindName> {
        self.kinds.iter()
    }

    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.kinds.iter().map(NodeKindName::as_str)
    }

    pub fn get(&self, index: usize) -> Option<&NodeKindName> {
        self.kinds.get_index(index)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.kinds.iter().position(|kind| kind == name)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Never true for a constructed registry.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

// `IndexSet` equality ignores order; registries compare in order.
impl PartialEq for NodeKindRegistry {
    fn eq(&self, other: &Self) -> bool {
        self.kinds.iter().eq(other.kinds.iter())
    }
}

impl Eq for NodeKindRegistry {}

impl<'r> IntoIterator for &'r NodeKindRegistry {
    type Item = &'r NodeKindName;
    type IntoIter = indexmap::set::Iter<'r, NodeKindName>;

    fn into_iter(self) -> Self::IntoIter {
        self.kinds.iter()
    }
}
