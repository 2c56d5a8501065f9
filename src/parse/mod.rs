mod error;
mod grammar;

pub use error::ParseError;
pub use grammar::Term;

/// Parse one configuration line into its `[!]name` terms.
///
/// An empty or comment-only line yields no terms.
///
/// # Errors
///
/// Returns [`ParseError`] if the line is not a whitespace-separated list of
/// optionally negated ACL names.
pub fn parse_line(input: &str) -> Result<Vec<Term>, ParseError> {
    use winnow::Parser;
    grammar::line
        .parse(input)
        .map_err(|e| ParseError::new(e.to_string()))
}
