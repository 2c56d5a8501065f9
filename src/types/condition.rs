use super::answer::Answer;
use super::checklist::Checklist;

/// The leaf contract: evaluate against a checklist, report a tri-state answer.
///
/// Implementations live outside this crate (IP ranges, header checks,
/// helper-process lookups). A leaf that needs an out-of-band round trip
/// returns [`Answer::Pending`]; the driver re-enters the walk through
/// [`Arena::resume()`](super::Arena::resume) once the result is known.
///
/// Implementations must keep all per-request state in the [`Checklist`]: the
/// tree is shared read-only across concurrent evaluations.
pub trait Condition: Send + Sync {
    fn evaluate(&self, checklist: &mut Checklist) -> Answer;

    /// Called once per tree after configuration load, before any evaluation.
    /// Leaves that precompute lookup structures hook in here.
    fn prepare_for_use(&mut self) {}
}
