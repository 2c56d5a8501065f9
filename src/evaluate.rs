use log::{debug, trace};

use crate::types::node::{Combinator, NodeKind};
use crate::types::{Answer, Arena, Checklist, NodeId, ResumePoint};

/// Depth-first, left-to-right evaluation of the tree rooted at `id`.
///
/// Composite nodes on a suspension path each record a [`ResumePoint`] on the
/// checklist, deepest frame first, so [`resume()`] can re-enter the walk
/// exactly where it halted.
pub(crate) fn match_node(arena: &Arena, id: NodeId, checklist: &mut Checklist) -> Answer {
    let node = arena.node(id);
    match &node.kind {
        NodeKind::Leaf(condition) => condition.evaluate(checklist),
        NodeKind::Negation(child) => {
            let answer = match_node(arena, *child, checklist);
            if answer == Answer::Pending {
                checklist.suspend(ResumePoint { node: id, child: 0 });
                return Answer::Pending;
            }
            !answer
        }
        NodeKind::Combinator(comb) => walk(arena, id, comb, 0, None, checklist),
    }
}

/// Walk `comb`'s children from `start`. `known` is the already-decided
/// answer of the child at `start` when re-entering after a suspension; when
/// absent, the child at `start` is evaluated like any other.
fn walk(
    arena: &Arena,
    id: NodeId,
    comb: &Combinator,
    start: usize,
    mut known: Option<Answer>,
    checklist: &mut Checklist,
) -> Answer {
    for pos in start..comb.children.len() {
        let child = comb.children[pos];
        let answer = match known.take() {
            Some(a) => a,
            None => match_node(arena, child, checklist),
        };
        trace!(
            "checked {} at {pos}: {} = {answer}",
            arena.name(id),
            arena.name(child)
        );
        if answer == comb.stop {
            return comb.stop;
        }
        if answer == Answer::Pending {
            checklist.suspend(ResumePoint { node: id, child: pos });
            return Answer::Pending;
        }
    }
    // The loop ran out without a decisive stop, so the complement decides.
    // This also covers the vacuous cases: all-of nothing is Matched, any-of
    // nothing is NotMatched.
    !comb.stop
}

/// Re-enter a suspended walk using the continuation stored in the checklist.
///
/// Frames are replayed deepest-first. The child at each recorded position is
/// re-evaluated (its out-of-band result is now presumably available); each
/// completed frame's decisive answer then feeds the next outer frame as the
/// already-known result of the child at its recorded position, so earlier
/// siblings are never revisited.
pub(crate) fn resume(arena: &Arena, checklist: &mut Checklist) -> Answer {
    let frames = checklist.take_path();
    assert!(!frames.is_empty(), "resume without a suspended walk");

    let mut known: Option<Answer> = None;
    for (depth, frame) in frames.iter().enumerate() {
        let node = arena.node(frame.node);
        debug!("resuming {} at {}", node.name, frame.child);
        let answer = match &node.kind {
            NodeKind::Combinator(comb) => walk(
                arena,
                frame.node,
                comb,
                frame.child,
                known.take(),
                checklist,
            ),
            NodeKind::Negation(child) => {
                let inner = match known.take() {
                    Some(a) => a,
                    None => match_node(arena, *child, checklist),
                };
                if inner == Answer::Pending {
                    checklist.suspend(ResumePoint {
                        node: frame.node,
                        child: 0,
                    });
                }
                !inner
            }
            NodeKind::Leaf(_) => unreachable!("leaf recorded as a resume point"),
        };
        if answer == Answer::Pending {
            // The partial walk re-recorded its own frames; the outer frames
            // not yet replayed are still valid continuation state.
            checklist.extend_path(frames[depth + 1..].iter().copied());
            return Answer::Pending;
        }
        known = Some(answer);
    }
    known.expect("suspended walk produced no answer")
}
