//! Lexer for sort expressions.

use logos::{Lexer, Logos};

use crate::capture::group_len;
use crate::{Error, Result};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawKind {
    #[token(":")]
    Colon,

    #[token(",")]
    Comma,

    #[token("asc")]
    Asc,

    #[token("desc")]
    Desc,

    /// `_eval(`; the callback consumes the payload and reports whether it closed.
    #[token("_eval(", eval_payload)]
    Eval(bool),

    /// `(key: value)` attached to a field, e.g. `(missing_values: last)`.
    #[regex(r"\([^()]*\)")]
    Config,

    /// `asc` and `desc` outrank this on equal-length matches.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_\-]*")]
    Word,

    #[regex(r"[ \t\r\n]+")]
    Whitespace,
}

fn eval_payload(lexer: &mut Lexer<'_, RawKind>) -> Option<bool> {
    let (len, closed) = group_len(lexer.remainder());
    lexer.bump(len);
    Some(closed)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortToken<'src> {
    Identifier(&'src str),
    Colon,
    Asc,
    Desc,
    Comma,
    Eval { payload: &'src str, closed: bool },
    Config { key: &'src str, value: &'src str },
}

pub fn tokenize(input: &str) -> Result<Vec<SortToken<'_>>> {
    let mut tokens = Vec::new();
    let mut lexer = RawKind::lexer(input);

    while let Some(result) = lexer.next() {
        let Ok(raw) = result else {
            let ch = input[lexer.span().start..].chars().next().unwrap_or_default();
            return Err(Error::UnknownToken(ch));
        };
        let text = lexer.slice();

        let token = match raw {
            RawKind::Whitespace => continue,
            RawKind::Colon => SortToken::Colon,
            RawKind::Comma => SortToken::Comma,
            RawKind::Asc => SortToken::Asc,
            RawKind::Desc => SortToken::Desc,
            RawKind::Word => SortToken::Identifier(text),
            RawKind::Eval(closed) => eval(text, closed),
            RawKind::Config => config(&text[1..text.len() - 1]),
        };
        tokens.push(token);
    }

    Ok(tokens)
}

fn eval(text: &str, closed: bool) -> SortToken<'_> {
    let open = "_eval(".len();
    let end = if closed { text.len() - 1 } else { text.len() };
    SortToken::Eval {
        payload: text.get(open..end).unwrap_or_default(),
        closed,
    }
}

fn config(inner: &str) -> SortToken<'_> {
    let (key, value) = inner.split_once(':').unwrap_or((inner, ""));
    SortToken::Config {
        key: key.trim(),
        value: value.trim(),
    }
}
