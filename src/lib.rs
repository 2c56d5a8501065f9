mod build;
mod error;
mod evaluate;
mod parse;
mod types;

pub use error::TurnstileError;
pub use parse::{ParseError, Term, parse_line};
pub use types::{
    Answer, Arena, BuildError, Checklist, Condition, Context, NodeId, Ownership, Registry,
    ResumePoint, Value,
};
