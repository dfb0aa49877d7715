//! Parser combinators over a borrowed text cursor.
//!
//! Every combinator is a plain closure taking the remaining input and
//! returning either the new remainder plus an extracted value, or a
//! [`ParseError`]. Nothing here allocates beyond the error path and the
//! vectors built by [`many_n`].
//!
//! ```
//! use authfile::core::combinator::{all, map, tag, take_while_n};
//!
//! let keyword = map(
//!     all((tag("login"), take_while_n(char::is_whitespace, 1, "whitespace"))),
//!     |(kw, _)| kw,
//! );
//! assert_eq!(keyword("login  batman").unwrap(), ("batman", "login"));
//! ```

use crate::error::ParseError;

/// Outcome of running a combinator: the unconsumed input and the extracted value.
pub type Parsed<'a, T> = std::result::Result<(&'a str, T), ParseError>;

/// Match `literal` at the start of the input.
pub fn tag<'a>(literal: &'static str) -> impl Fn(&'a str) -> Parsed<'a, &'a str> {
    move |input: &'a str| match input.strip_prefix(literal) {
        Some(rest) => Ok((rest, &input[..literal.len()])),
        None => Err(ParseError::Tag {
            expected: literal.to_string(),
        }),
    }
}

/// Consume the longest run of characters satisfying `predicate`.
///
/// Never fails; the extracted slice may be empty.
pub fn take_while<'a, P>(predicate: P) -> impl Fn(&'a str) -> Parsed<'a, &'a str>
where
    P: Fn(char) -> bool,
{
    move |input: &'a str| {
        let end = input
            .find(|c: char| !predicate(c))
            .unwrap_or(input.len());
        Ok((&input[end..], &input[..end]))
    }
}

/// Like [`take_while`], but fails unless at least `min` characters match.
pub fn take_while_n<'a, P>(
    predicate: P,
    min: usize,
    what: &'static str,
) -> impl Fn(&'a str) -> Parsed<'a, &'a str>
where
    P: Fn(char) -> bool,
{
    let inner = take_while(predicate);
    move |input: &'a str| {
        let (rest, taken) = inner(input)?;
        if taken.chars().count() < min {
            return Err(ParseError::Expected { expected: what });
        }
        Ok((rest, taken))
    }
}

/// Consume the longest run of characters not contained in `charset`.
///
/// Fails when the very first character is in `charset` or the input is empty,
/// so a successful match always yields a non-empty token.
pub fn none_of<'a>(charset: &'static str) -> impl Fn(&'a str) -> Parsed<'a, &'a str> {
    move |input: &'a str| {
        let end = input
            .find(|c: char| charset.contains(c))
            .unwrap_or(input.len());
        if end == 0 {
            return Err(ParseError::Expected {
                expected: "a value",
            });
        }
        Ok((&input[end..], &input[..end]))
    }
}

/// Match a single `\n` or `\r\n`.
pub fn line_ending<'a>() -> impl Fn(&'a str) -> Parsed<'a, &'a str> {
    move |input: &'a str| {
        let len = if input.starts_with("\r\n") {
            2
        } else if input.starts_with('\n') {
            1
        } else {
            return Err(ParseError::Expected {
                expected: "a line ending",
            });
        };
        Ok((&input[len..], &input[..len]))
    }
}

/// Run `parser`, succeeding with `None` and consuming nothing if it fails.
pub fn opt<'a, T, P>(parser: P) -> impl Fn(&'a str) -> Parsed<'a, Option<T>>
where
    P: Fn(&'a str) -> Parsed<'a, T>,
{
    move |input: &'a str| match parser(input) {
        Ok((rest, value)) => Ok((rest, Some(value))),
        Err(_) => Ok((input, None)),
    }
}

/// A fixed sequence of combinators, run left to right.
///
/// Implemented for tuples of two to six combinators; the output is the tuple
/// of each combinator's output.
pub trait Sequence<'a> {
    type Output;

    fn parse_all(&self, input: &'a str) -> Parsed<'a, Self::Output>;
}

macro_rules! impl_sequence {
    ($(($parser:ident, $P:ident, $T:ident, $value:ident)),+) => {
        impl<'a, $($P, $T),+> Sequence<'a> for ($($P,)+)
        where
            $($P: Fn(&'a str) -> Parsed<'a, $T>,)+
        {
            type Output = ($($T,)+);

            fn parse_all(&self, input: &'a str) -> Parsed<'a, Self::Output> {
                let ($($parser,)+) = self;
                let rest = input;
                $(let (rest, $value) = $parser(rest)?;)+
                Ok((rest, ($($value,)+)))
            }
        }
    };
}

impl_sequence!((p1, P1, T1, v1), (p2, P2, T2, v2));
impl_sequence!((p1, P1, T1, v1), (p2, P2, T2, v2), (p3, P3, T3, v3));
impl_sequence!(
    (p1, P1, T1, v1),
    (p2, P2, T2, v2),
    (p3, P3, T3, v3),
    (p4, P4, T4, v4)
);
impl_sequence!(
    (p1, P1, T1, v1),
    (p2, P2, T2, v2),
    (p3, P3, T3, v3),
    (p4, P4, T4, v4),
    (p5, P5, T5, v5)
);
impl_sequence!(
    (p1, P1, T1, v1),
    (p2, P2, T2, v2),
    (p3, P3, T3, v3),
    (p4, P4, T4, v4),
    (p5, P5, T5, v5),
    (p6, P6, T6, v6)
);

/// Run every combinator in `parsers` in order.
///
/// Atomic: if any step fails the caller gets only the error, never a
/// partially advanced cursor.
pub fn all<'a, S>(parsers: S) -> impl Fn(&'a str) -> Parsed<'a, S::Output>
where
    S: Sequence<'a>,
{
    move |input: &'a str| parsers.parse_all(input)
}

/// Repeat `parser` until it fails or the input runs out.
///
/// Fails if fewer than `min` repetitions matched. When the shortfall was
/// caused by a failing repetition, that failure is returned since it says
/// more than a bare count.
pub fn many_n<'a, T, P>(parser: P, min: usize) -> impl Fn(&'a str) -> Parsed<'a, Vec<T>>
where
    P: Fn(&'a str) -> Parsed<'a, T>,
{
    move |input: &'a str| {
        let mut values = Vec::new();
        let mut rest = input;
        let mut last_failure = None;

        while !rest.is_empty() {
            match parser(rest) {
                // Stop on zero-width matches so the loop always terminates.
                Ok((next, _)) if next.len() == rest.len() => break,
                Ok((next, value)) => {
                    values.push(value);
                    rest = next;
                }
                Err(err) => {
                    last_failure = Some(err);
                    break;
                }
            }
        }

        if values.len() < min {
            return Err(last_failure.unwrap_or(ParseError::TooFew {
                what: "matches",
                min,
                matched: values.len(),
            }));
        }

        Ok((rest, values))
    }
}

/// Transform the value extracted by `parser` with `f`.
pub fn map<'a, T, U, P, F>(parser: P, f: F) -> impl Fn(&'a str) -> Parsed<'a, U>
where
    P: Fn(&'a str) -> Parsed<'a, T>,
    F: Fn(T) -> U,
{
    move |input: &'a str| parser(input).map(|(rest, value)| (rest, f(value)))
}
