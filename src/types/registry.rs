use std::collections::HashMap;

use super::arena::Arena;
use super::condition::Condition;
use super::error::BuildError;
use super::node::NodeId;

/// Name registry consulted while parsing configuration lines.
///
/// An explicit, passed-in lookup context rather than ambient global state:
/// the tree builder is a function of (tokens, registry), which keeps parsing
/// testable without process-wide setup. Nodes registered here are owned by
/// the registry's configuration store and are never removed by tree
/// teardown.
#[derive(Debug, Default)]
pub struct Registry {
    by_name: HashMap<String, NodeId>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named leaf condition, creating its node in `arena`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::DuplicateAcl`] if the name is taken.
    pub fn register(
        &mut self,
        arena: &mut Arena,
        name: &str,
        condition: Box<dyn Condition>,
    ) -> Result<NodeId, BuildError> {
        if self.by_name.contains_key(name) {
            return Err(BuildError::DuplicateAcl {
                name: name.to_owned(),
            });
        }
        let id = arena.leaf(name, condition);
        let _ = self.by_name.insert(name.to_owned(), id);
        Ok(id)
    }

    /// Register an existing node (e.g. a named combinator) under `name`,
    /// transferring its ownership to the registry.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::DuplicateAcl`] if the name is taken.
    ///
    /// # Panics
    ///
    /// Panics if `id` is a negation wrapper; wrappers are always anonymous.
    pub fn register_node(
        &mut self,
        arena: &mut Arena,
        name: &str,
        id: NodeId,
    ) -> Result<(), BuildError> {
        if self.by_name.contains_key(name) {
            return Err(BuildError::DuplicateAcl {
                name: name.to_owned(),
            });
        }
        arena.mark_registered(id);
        let _ = self.by_name.insert(name.to_owned(), id);
        Ok(())
    }

    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
