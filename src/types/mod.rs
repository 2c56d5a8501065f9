mod answer;
mod arena;
mod checklist;
mod condition;
mod context;
mod error;
pub(crate) mod node;
mod registry;

pub use answer::Answer;
pub use arena::Arena;
pub use checklist::{Checklist, ResumePoint};
pub use condition::Condition;
pub use context::{Context, Value};
pub use error::BuildError;
pub use node::{NodeId, Ownership};
pub use registry::Registry;
