use winnow::ascii::till_line_ending;
use winnow::combinator::{alt, opt, repeat};
use winnow::error::{ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::take_while;

/// One `[!]name` entry from a configuration line. The negation marker is
/// prefixed directly to the name with no separating space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub negated: bool,
    pub name: String,
}

// -- Whitespace & comments --------------------------------------------------

fn ws(input: &mut &str) -> ModalResult<()> {
    let _: () = repeat(
        0..,
        alt((
            take_while(1.., |c: char| c.is_ascii_whitespace()).void(),
            ('#', till_line_ending).void(),
        )),
    )
    .parse_next(input)?;
    Ok(())
}

// -- Names ------------------------------------------------------------------

fn name<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (
        take_while(1.., |c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(0.., |c: char| {
            c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.'
        }),
    )
        .take()
        .parse_next(input)
}

fn term(input: &mut &str) -> ModalResult<Term> {
    ws.parse_next(input)?;
    let negated = opt('!').parse_next(input)?.is_some();
    let name = name
        .context(StrContext::Expected(StrContextValue::Description(
            "ACL name",
        )))
        .parse_next(input)?;
    Ok(Term {
        negated,
        name: name.to_owned(),
    })
}

pub(crate) fn line(input: &mut &str) -> ModalResult<Vec<Term>> {
    let terms: Vec<Term> = repeat(0.., term).parse_next(input)?;
    ws.parse_next(input)?;
    Ok(terms)
}
