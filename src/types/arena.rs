use super::answer::Answer;
use super::checklist::Checklist;
use super::condition::Condition;
use super::node::{Combinator, Node, NodeId, NodeKind, Ownership};
use super::registry::Registry;
use crate::TurnstileError;

/// Storage for all condition nodes, addressed by stable [`NodeId`] handles.
///
/// Trees are built during configuration parsing, frozen with
/// [`finalize()`](Arena::finalize), then shared read-only across any number
/// of concurrent evaluations (e.g. behind `Arc`). All per-request mutable
/// state lives in the [`Checklist`].
#[derive(Debug, Default)]
pub struct Arena {
    nodes: Vec<Option<Node>>,
    free: Vec<u32>,
}

impl Arena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, node: Node) -> NodeId {
        if let Some(slot) = self.free.pop() {
            self.nodes[slot as usize] = Some(node);
            NodeId(slot)
        } else {
            let id = u32::try_from(self.nodes.len()).expect("arena capacity exceeded");
            self.nodes.push(Some(node));
            NodeId(id)
        }
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        self.nodes
            .get(id.0 as usize)
            .and_then(Option::as_ref)
            .expect("vacant node handle")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes
            .get_mut(id.0 as usize)
            .and_then(Option::as_mut)
            .expect("vacant node handle")
    }

    /// Create an anonymous AND-all combinator: matches iff every child
    /// matches, short-circuiting on the first `NotMatched` child.
    pub fn all_of(&mut self, name: &str) -> NodeId {
        self.combinator(name, Answer::NotMatched)
    }

    /// Create an anonymous OR-any combinator: matches iff any child matches,
    /// short-circuiting on the first `Matched` child.
    pub fn any_of(&mut self, name: &str) -> NodeId {
        self.combinator(name, Answer::Matched)
    }

    fn combinator(&mut self, name: &str, stop: Answer) -> NodeId {
        debug_assert!(stop.is_decisive());
        self.insert(Node {
            name: name.to_owned(),
            ownership: Ownership::Anonymous,
            kind: NodeKind::Combinator(Combinator {
                children: Vec::new(),
                stop,
            }),
        })
    }

    /// Wrap `child` in an anonymous negation node named `!<child name>`.
    pub fn negate(&mut self, child: NodeId) -> NodeId {
        let name = format!("!{}", self.node(child).name);
        self.insert(Node {
            name,
            ownership: Ownership::Anonymous,
            kind: NodeKind::Negation(child),
        })
    }

    pub(crate) fn leaf(&mut self, name: &str, condition: Box<dyn Condition>) -> NodeId {
        self.insert(Node {
            name: name.to_owned(),
            ownership: Ownership::Registered,
            kind: NodeKind::Leaf(condition),
        })
    }

    pub(crate) fn mark_registered(&mut self, id: NodeId) {
        let node = self.node_mut(id);
        assert!(
            !matches!(node.kind, NodeKind::Negation(_)),
            "negation wrappers stay anonymous"
        );
        node.ownership = Ownership::Registered;
    }

    /// Append a child to a combinator. Children are evaluated in append
    /// order; duplicates and self-references are the caller's responsibility.
    ///
    /// # Panics
    ///
    /// Panics if `child` is vacant or `comb` is not a combinator; both are
    /// build-time defects, not runtime conditions.
    pub fn append(&mut self, comb: NodeId, child: NodeId) {
        assert!(self.contains(child), "append of a vacant node handle");
        match &mut self.node_mut(comb).kind {
            NodeKind::Combinator(c) => c.children.push(child),
            _ => panic!("append target is not a combinator"),
        }
    }

    /// Parse one configuration line (`[!]name [[!]name ...]`), resolve each
    /// name against `registry` and append the entries to `comb` in order.
    /// Negated entries are wrapped in anonymous negation nodes.
    ///
    /// May be called repeatedly for statements spanning multiple lines; each
    /// call appends to the existing sequence.
    ///
    /// # Errors
    ///
    /// Returns [`TurnstileError::Parse`] for malformed lines and
    /// [`TurnstileError::Build`] when a name does not resolve. Resolution
    /// failure is fatal to the statement: entries before the failing one have
    /// already been appended, nothing after it is.
    pub fn parse_line(
        &mut self,
        registry: &Registry,
        comb: NodeId,
        line: &str,
    ) -> Result<(), TurnstileError> {
        let terms = crate::parse::parse_line(line)?;
        crate::build::append_terms(self, registry, comb, &terms)?;
        Ok(())
    }

    /// Propagate `prepare_for_use` to every leaf reachable from `root`.
    /// Called once after all configuration is parsed; does not alter tree
    /// shape.
    pub fn finalize(&mut self, root: NodeId) {
        let children: Vec<NodeId> = match &mut self.node_mut(root).kind {
            NodeKind::Leaf(condition) => {
                condition.prepare_for_use();
                return;
            }
            NodeKind::Negation(child) => vec![*child],
            NodeKind::Combinator(c) => c.children.clone(),
        };
        for child in children {
            self.finalize(child);
        }
    }

    /// True iff the combinator has no children. Callers use this to reject
    /// vacuous rules before evaluation.
    #[must_use]
    pub fn is_empty(&self, comb: NodeId) -> bool {
        match &self.node(comb).kind {
            NodeKind::Combinator(c) => c.children.is_empty(),
            _ => panic!("is_empty on a non-combinator node"),
        }
    }

    /// The combinator's children in evaluation order.
    #[must_use]
    pub fn children(&self, comb: NodeId) -> &[NodeId] {
        match &self.node(comb).kind {
            NodeKind::Combinator(c) => &c.children,
            _ => panic!("children of a non-combinator node"),
        }
    }

    /// Child display names in configuration order. Negated entries keep
    /// their `!` marker, so re-parsing a dumped line rebuilds the same tree.
    #[must_use]
    pub fn dump(&self, comb: NodeId) -> Vec<String> {
        self.children(comb)
            .iter()
            .map(|&child| self.node(child).name.clone())
            .collect()
    }

    #[must_use]
    pub fn name(&self, id: NodeId) -> &str {
        &self.node(id).name
    }

    #[must_use]
    pub fn ownership(&self, id: NodeId) -> Ownership {
        self.node(id).ownership
    }

    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes
            .get(id.0 as usize)
            .is_some_and(|slot| slot.is_some())
    }

    /// Evaluate the tree rooted at `root` against `checklist`.
    ///
    /// Returns `Pending` when a leaf signalled an out-of-band lookup; the
    /// checklist is then primed with the resumption path and the driver
    /// re-enters through [`resume()`](Arena::resume) once the result is
    /// available.
    pub fn evaluate(&self, root: NodeId, checklist: &mut Checklist) -> Answer {
        crate::evaluate::match_node(self, root, checklist)
    }

    /// Re-enter a suspended walk at the recorded resumption path,
    /// re-evaluating only the child that was pending and the siblings after
    /// it. Already-decided branches are not revisited.
    ///
    /// # Panics
    ///
    /// Panics if the checklist holds no suspension, which indicates a driver
    /// defect.
    pub fn resume(&self, checklist: &mut Checklist) -> Answer {
        crate::evaluate::resume(self, checklist)
    }

    /// Remove the tree rooted at `root`: the root itself plus, recursively,
    /// every `Anonymous` descendant. `Registered` descendants are left
    /// untouched and stay resolvable through the registry.
    pub fn remove_tree(&mut self, root: NodeId) {
        let Some(node) = self
            .nodes
            .get_mut(root.0 as usize)
            .and_then(|slot| slot.take())
        else {
            return;
        };
        self.free.push(root.0);
        let children: Vec<NodeId> = match node.kind {
            NodeKind::Leaf(_) => Vec::new(),
            NodeKind::Negation(child) => vec![child],
            NodeKind::Combinator(c) => c.children,
        };
        for child in children {
            if self.contains(child) && self.ownership(child) == Ownership::Anonymous {
                self.remove_tree(child);
            }
        }
    }
}
