//! Lexer for filter expressions.
//!
//! Logos recognizes raw kinds; [`tokenize`] turns them into [`Token`] values,
//! resolving bare words against the schema's field names.
//!
//! ## Error handling
//!
//! The first character no rule matches aborts tokenization with
//! `Unknown token: {char}`. There is no recovery.

use logos::{Lexer, Logos};
use typesift_core::CollectionSchema;

use super::token::{Token, TokenKind};
use crate::capture::{fraction_len, group_len};
use crate::{Error, Result};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawKind {
    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token(":[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token(":=")]
    Eq,

    #[token(":!=")]
    NotEq,

    #[token(":<")]
    Lt,

    #[token(":>")]
    Gt,

    #[token(":<=")]
    LtEq,

    #[token(":>=")]
    GtEq,

    #[token(":")]
    Colon,

    #[token(":!")]
    Bang,

    #[token("&&")]
    And,

    #[token("||")]
    Or,

    #[token("..")]
    Spread,

    #[token(",")]
    Comma,

    #[token("<")]
    AngleLt,

    #[token(">")]
    AngleGt,

    /// Backtick-escaped text. No escapes inside.
    #[regex(r"`[^`]*`")]
    Escaped,

    /// Integer part; the callback consumes an optional `.digits` fraction.
    #[regex(r"-?[0-9]+", number_fraction)]
    Number,

    /// A leading `-` must not be followed by a digit, that starts a number.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_\-]*")]
    #[regex(r"-[a-zA-Z_\-][a-zA-Z0-9_\-]*")]
    Word,

    /// `$name(`; the callback consumes the clause and reports whether it closed.
    #[regex(r"\$[a-zA-Z0-9_\-]+\(", reference_clause)]
    Reference(bool),

    #[regex(r"[ \t\r\n]+")]
    Whitespace,
}

fn number_fraction(lexer: &mut Lexer<'_, RawKind>) -> bool {
    let len = fraction_len(lexer.remainder());
    lexer.bump(len);
    true
}

fn reference_clause(lexer: &mut Lexer<'_, RawKind>) -> Option<bool> {
    let (len, closed) = group_len(lexer.remainder());
    lexer.bump(len);
    Some(closed)
}

/// Tokenizes a filter expression for `schema`.
///
/// Words naming a field become [`Token::Identifier`], any other word is a
/// [`Token::Literal`]. Whitespace is dropped.
pub fn tokenize<'src>(input: &'src str, schema: &CollectionSchema) -> Result<Vec<Token<'src>>> {
    let mut tokens = Vec::new();
    let mut lexer = RawKind::lexer(input);

    while let Some(result) = lexer.next() {
        let Ok(raw) = result else {
            return Err(unknown_token(input, lexer.span().start));
        };
        let text = lexer.slice();

        let token = match raw {
            RawKind::Whitespace => continue,
            RawKind::Escaped => Token::Literal(&text[1..text.len() - 1]),
            RawKind::Number => Token::Number(text),
            RawKind::Word => match schema.field(text) {
                Some(field) => Token::Identifier {
                    name: text,
                    field_type: field.field_type,
                },
                None => Token::Literal(text),
            },
            RawKind::Reference(closed) => reference(text, closed),
            RawKind::ParenOpen => Token::Punct(TokenKind::ParenOpen),
            RawKind::ParenClose => Token::Punct(TokenKind::ParenClose),
            RawKind::BracketOpen => Token::Punct(TokenKind::BracketOpen),
            RawKind::BracketClose => Token::Punct(TokenKind::BracketClose),
            RawKind::Eq => Token::Punct(TokenKind::Eq),
            RawKind::NotEq => Token::Punct(TokenKind::NotEq),
            RawKind::Lt => Token::Punct(TokenKind::Lt),
            RawKind::Gt => Token::Punct(TokenKind::Gt),
            RawKind::LtEq => Token::Punct(TokenKind::LtEq),
            RawKind::GtEq => Token::Punct(TokenKind::GtEq),
            RawKind::Colon => Token::Punct(TokenKind::Colon),
            RawKind::Bang => Token::Punct(TokenKind::Bang),
            RawKind::And => Token::Punct(TokenKind::And),
            RawKind::Or => Token::Punct(TokenKind::Or),
            RawKind::Spread => Token::Punct(TokenKind::Spread),
            RawKind::Comma => Token::Punct(TokenKind::Comma),
            RawKind::AngleLt => Token::Punct(TokenKind::AngleLt),
            RawKind::AngleGt => Token::Punct(TokenKind::AngleGt),
        };
        tokens.push(token);
    }

    Ok(tokens)
}

/// Splits `$name(clause)` (or the unclosed `$name(clause`) into its parts.
fn reference(text: &str, closed: bool) -> Token<'_> {
    let open = text.find('(').unwrap_or(text.len());
    let end = if closed { text.len() - 1 } else { text.len() };
    Token::Reference {
        collection: &text[1..open],
        clause: text.get(open + 1..end).unwrap_or_default(),
        closed,
    }
}

fn unknown_token(input: &str, offset: usize) -> Error {
    let ch = input[offset..].chars().next().unwrap_or_default();
    Error::UnknownToken(ch)
}
