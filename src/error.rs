use thiserror::Error;

use crate::BuildError;
use crate::parse::ParseError;

/// Unified error covering line parsing and tree building.
///
/// Returned by [`Arena::parse_line()`](crate::Arena::parse_line). Either
/// variant is fatal to the configuration statement being parsed.
#[derive(Debug, Error)]
pub enum TurnstileError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Build(#[from] BuildError),
}
