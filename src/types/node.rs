use std::fmt;

use super::answer::Answer;
use super::condition::Condition;

/// Stable handle to a node in an [`Arena`](super::Arena).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

/// Who destroys a node.
///
/// `Registered` nodes are owned by the [`Registry`](super::Registry) and are
/// never removed by tree teardown. `Anonymous` nodes (negation wrappers,
/// unnamed combinators) are owned by their unique containing tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    Registered,
    Anonymous,
}

pub(crate) struct Node {
    pub(crate) name: String,
    pub(crate) ownership: Ownership,
    pub(crate) kind: NodeKind,
}

pub(crate) enum NodeKind {
    Leaf(Box<dyn Condition>),
    Combinator(Combinator),
    Negation(NodeId),
}

/// Ordered children plus the short-circuit policy: the first child answering
/// `stop` terminates the walk with that answer. `stop` is `NotMatched` for
/// AND-all nodes and `Matched` for OR-any nodes, never `Pending`.
pub(crate) struct Combinator {
    pub(crate) children: Vec<NodeId>,
    pub(crate) stop: Answer,
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.name)
            .field("ownership", &self.ownership)
            .field("kind", &self.kind)
            .finish()
    }
}

impl fmt::Debug for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Leaf(_) => f.write_str("Leaf"),
            NodeKind::Combinator(c) => f
                .debug_struct("Combinator")
                .field("children", &c.children)
                .field("stop", &c.stop)
                .finish(),
            NodeKind::Negation(child) => f.debug_tuple("Negation").field(child).finish(),
        }
    }
}
