use log::debug;

use crate::parse::Term;
use crate::types::{Arena, BuildError, NodeId, Registry};

/// Resolve one configuration line's terms against the registry and append
/// them to `comb` in order, wrapping negated entries in anonymous negation
/// nodes.
///
/// Resolution failure aborts the statement: terms before the failing one are
/// already appended, nothing after it is. Callers treat the error as fatal
/// to configuration loading, so the partially built node is never evaluated.
pub(crate) fn append_terms(
    arena: &mut Arena,
    registry: &Registry,
    comb: NodeId,
    terms: &[Term],
) -> Result<(), BuildError> {
    for term in terms {
        debug!("looking for ACL {}", term.name);
        let Some(target) = registry.resolve(&term.name) else {
            return Err(BuildError::UnknownAcl {
                name: term.name.clone(),
            });
        };
        let child = if term.negated {
            arena.negate(target)
        } else {
            target
        };
        arena.append(comb, child);
    }
    Ok(())
}
