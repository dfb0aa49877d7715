//! Auto-login grammar.
//!
//! Composes the primitives in [`combinator`](crate::core::combinator) into a
//! parser for `machine`/`login`/`password` entries. Both the single-line and
//! the three-line layout are accepted, with any amount of whitespace between
//! tokens and either `\n` or `\r\n` line endings.
//!
//! Parsing is strict: an entry with a missing, reordered or empty field fails
//! the whole document and no records are returned.

use crate::core::combinator::{
    all, line_ending, many_n, map, none_of, opt, tag, take_while, take_while_n, Parsed,
};
use crate::core::constants::{LOGIN_KEYWORD, MACHINE_KEYWORD, PASSWORD_KEYWORD};
use crate::core::domain::LoginRecord;
use crate::error::ParseError;

/// Keyword, separator, value, trailing whitespace and line ending.
type Field<'a> = (&'a str, &'a str, &'a str, Option<&'a str>, Option<&'a str>);

/// Characters that end a field value.
const VALUE_DELIMITERS: &str = " \t\r\n\u{0b}\u{0c}";

/// Match `keyword`, mandatory whitespace and a value token, then swallow any
/// trailing whitespace and line ending. Extracts only the value.
fn eat_field<'a>(keyword: &'static str) -> impl Fn(&'a str) -> Parsed<'a, &'a str> {
    map(
        all((
            tag(keyword),
            take_while_n(char::is_whitespace, 1, "whitespace after keyword"),
            none_of(VALUE_DELIMITERS),
            opt(take_while(char::is_whitespace)),
            opt(line_ending()),
        )),
        |(_, _, value, _, _): Field<'a>| value,
    )
}

/// One complete entry, fields strictly in machine, login, password order.
fn entry<'a>() -> impl Fn(&'a str) -> Parsed<'a, LoginRecord> {
    map(
        all((
            eat_field(MACHINE_KEYWORD),
            eat_field(LOGIN_KEYWORD),
            eat_field(PASSWORD_KEYWORD),
        )),
        |(machine, login, password): (&'a str, &'a str, &'a str)| {
            LoginRecord::new(machine, login, password)
        },
    )
}

/// Parse an auto-login document into its records, in document order.
///
/// At least one entry is required. Input left over after the last entry is
/// ignored unless it contains the word `machine` anywhere, since that means
/// an entry would be skipped. If the leftover starts with `machine`, that
/// entry's own failure is reported.
///
/// # Errors
///
/// Returns [`ParseError::Entry`] naming the failing entry and the line it
/// starts on, or [`ParseError::TooFew`] for a document without entries.
pub fn parse(text: &str) -> Result<Vec<LoginRecord>, ParseError> {
    let (body, _) = take_while(char::is_whitespace)(text)?;
    let document = many_n(entry(), 1);

    let (rest, records) = match document(body) {
        Ok(parsed) => parsed,
        Err(err @ ParseError::TooFew { .. }) => return Err(err),
        Err(err) => return Err(at_entry(text, body, 1, err)),
    };

    if starts_entry(rest) {
        if let Err(err) = entry()(rest) {
            return Err(at_entry(text, rest, records.len() + 1, err));
        }
    }

    if mentions_entry(rest) {
        let err = ParseError::Tag {
            expected: MACHINE_KEYWORD.to_string(),
        };
        return Err(at_entry(text, rest, records.len() + 1, err));
    }

    Ok(records)
}

/// Whether `input` begins with the `machine` keyword as a whole word.
fn starts_entry(input: &str) -> bool {
    input
        .strip_prefix(MACHINE_KEYWORD)
        .is_some_and(|after| after.chars().next().map_or(true, char::is_whitespace))
}

/// Whether the whole word `machine` appears anywhere in `input`.
fn mentions_entry(input: &str) -> bool {
    input
        .split(char::is_whitespace)
        .any(|word| word == MACHINE_KEYWORD)
}

/// Attach entry index and 1-based line number to a failure.
fn at_entry(text: &str, rest: &str, record: usize, source: ParseError) -> ParseError {
    let offset = text.len() - rest.len();
    let line = text[..offset].matches('\n').count() + 1;

    ParseError::Entry {
        record,
        line,
        source: Box::new(source),
    }
}
