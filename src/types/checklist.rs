use super::context::Context;
use super::node::NodeId;

/// Where a suspended walk re-enters: the composite node and the child
/// position whose answer was pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResumePoint {
    pub node: NodeId,
    pub child: usize,
}

/// Per-request evaluation state.
///
/// Carries the request [`Context`] read by leaf conditions and, while a walk
/// is suspended, the continuation: one [`ResumePoint`] per composite node on
/// the suspension path, deepest frame first. A checklist is exclusively
/// owned by one evaluation; the tree itself holds no per-request state, so
/// abandoning a suspended checklist (never resuming) needs no cleanup.
#[derive(Debug, Default)]
pub struct Checklist {
    context: Context,
    path: Vec<ResumePoint>,
}

impl Checklist {
    #[must_use]
    pub fn new(context: Context) -> Self {
        Self {
            context,
            path: Vec::new(),
        }
    }

    #[must_use]
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Mutable access for the driver, e.g. to stash a resolved lookup result
    /// before resuming.
    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.context
    }

    /// True while a walk is suspended on an out-of-band lookup.
    #[must_use]
    pub fn is_async_pending(&self) -> bool {
        !self.path.is_empty()
    }

    /// The deepest recorded suspension frame, i.e. the combinator position
    /// whose child was pending.
    #[must_use]
    pub fn resume_point(&self) -> Option<ResumePoint> {
        self.path.first().copied()
    }

    pub(crate) fn suspend(&mut self, point: ResumePoint) {
        self.path.push(point);
    }

    pub(crate) fn take_path(&mut self) -> Vec<ResumePoint> {
        std::mem::take(&mut self.path)
    }

    pub(crate) fn extend_path(&mut self, rest: impl IntoIterator<Item = ResumePoint>) {
        self.path.extend(rest);
    }
}
