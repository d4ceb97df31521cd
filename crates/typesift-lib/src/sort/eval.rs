//! `_eval(...)` payloads.
//!
//! Two forms are accepted:
//! - bare: `_eval(in_stock:true)`, the whole payload is one filter
//! - weighted: `_eval([(category:shoes):3, (category:socks):1])`
//!
//! Every embedded filter is validated against the collection being sorted.

use logos::{Lexer, Logos};
use tracing::debug;
use typesift_core::CollectionSchema;

use crate::balance::{Delimiters, check_balanced};
use crate::capture::{fraction_len, group_len};
use crate::validator::Validator;
use crate::{Error, Result, filter};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawKind {
    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token(":")]
    Colon,

    #[token(",")]
    Comma,

    #[regex(r"[0-9]+", number_fraction)]
    Number,

    /// `(`; the callback consumes the filter and reports whether it closed.
    #[token("(", filter_group)]
    Filter(bool),

    #[regex(r"[ \t\r\n]+")]
    Whitespace,
}

fn number_fraction(lexer: &mut Lexer<'_, RawKind>) -> bool {
    let len = fraction_len(lexer.remainder());
    lexer.bump(len);
    true
}

fn filter_group(lexer: &mut Lexer<'_, RawKind>) -> Option<bool> {
    let (len, closed) = group_len(lexer.remainder());
    lexer.bump(len);
    Some(closed)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalToken<'src> {
    BracketOpen,
    BracketClose,
    Colon,
    Comma,
    Number(&'src str),
    Filter { clause: &'src str, closed: bool },
}

impl EvalToken<'_> {
    fn is_filter(&self) -> bool {
        matches!(self, EvalToken::Filter { .. })
    }
}

const BRACKETS: Delimiters<char> = Delimiters {
    open: '[',
    close: ']',
};

pub fn tokenize(payload: &str) -> Result<Vec<EvalToken<'_>>> {
    let mut tokens = Vec::new();
    let mut lexer = RawKind::lexer(payload);

    while let Some(result) = lexer.next() {
        let Ok(raw) = result else {
            let ch = payload[lexer.span().start..]
                .chars()
                .next()
                .unwrap_or_default();
            return Err(Error::UnknownToken(ch));
        };
        let text = lexer.slice();

        let token = match raw {
            RawKind::Whitespace => continue,
            RawKind::BracketOpen => EvalToken::BracketOpen,
            RawKind::BracketClose => EvalToken::BracketClose,
            RawKind::Colon => EvalToken::Colon,
            RawKind::Comma => EvalToken::Comma,
            RawKind::Number => EvalToken::Number(text),
            RawKind::Filter(closed) => {
                let end = if closed { text.len() - 1 } else { text.len() };
                EvalToken::Filter {
                    clause: text.get(1..end).unwrap_or_default(),
                    closed,
                }
            }
        };
        tokens.push(token);
    }

    Ok(tokens)
}

pub(crate) fn validate(
    validator: &Validator<'_>,
    payload: &str,
    schema: &CollectionSchema,
    depth: u32,
) -> Result<()> {
    let depth = validator.enter(depth)?;
    debug!(collection = schema.name(), depth, "validating _eval payload");

    let payload = payload.trim();
    if payload.is_empty() {
        return Err(Error::EmptyEval);
    }

    if !payload.starts_with('[') {
        return validate_filter(validator, payload, schema, depth);
    }

    let tokens = tokenize(payload)?;

    // An unclosed filter swallows the rest of the payload, so it is reported
    // before the brackets it may have consumed.
    if tokens
        .iter()
        .any(|t| matches!(t, EvalToken::Filter { closed: false, .. }))
    {
        return Err(Error::UnbalancedParentheses);
    }

    let brackets = tokens.iter().filter_map(|t| match t {
        EvalToken::BracketOpen => Some('['),
        EvalToken::BracketClose => Some(']'),
        _ => None,
    });
    if !check_balanced(brackets, BRACKETS) {
        return Err(Error::UnbalancedSquareBrackets);
    }

    validate_sequence(validator, &tokens, schema, depth)
}

fn validate_sequence(
    validator: &Validator<'_>,
    tokens: &[EvalToken<'_>],
    schema: &CollectionSchema,
    depth: u32,
) -> Result<()> {
    for (i, current) in tokens.iter().enumerate() {
        let next = tokens.get(i + 1);

        let (after, expected, legal) = match current {
            EvalToken::BracketOpen => ("'['", "filter", next.is_some_and(EvalToken::is_filter)),
            EvalToken::Filter { clause, .. } => {
                if !matches!(next, Some(EvalToken::Colon)) {
                    return Err(unexpected("filter", "':'"));
                }
                validate_filter(validator, clause, schema, depth)?;
                continue;
            }
            EvalToken::Colon => (
                "':'",
                "number",
                matches!(next, Some(EvalToken::Number(_))),
            ),
            EvalToken::Number(_) => (
                "number",
                "',' or ']'",
                matches!(next, Some(EvalToken::Comma | EvalToken::BracketClose)),
            ),
            EvalToken::Comma => ("','", "filter", next.is_some_and(EvalToken::is_filter)),
            EvalToken::BracketClose => ("']'", "EOF", next.is_none()),
        };

        if !legal {
            return Err(unexpected(after, expected));
        }
    }

    Ok(())
}

fn validate_filter(
    validator: &Validator<'_>,
    clause: &str,
    schema: &CollectionSchema,
    depth: u32,
) -> Result<()> {
    filter::validate(validator, clause, schema, depth)
        .map_err(|inner| inner.nest(Error::EvalFilter))
}

fn unexpected(after: &'static str, expected: &'static str) -> Error {
    Error::EvalUnexpected { after, expected }
}
