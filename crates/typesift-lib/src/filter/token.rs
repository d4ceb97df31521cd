use std::fmt;

use typesift_core::FieldType;

use crate::balance::Delimiters;

/// Kind of a filter token, used as the key of the adjacency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    ParenOpen,
    ParenClose,
    /// `:[` opening a value list
    BracketOpen,
    BracketClose,
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    /// `:` contains-match
    Colon,
    /// `:!` negation prefix
    Bang,
    And,
    Or,
    /// `..` numeric range
    Spread,
    Comma,
    /// Bare `<` inside a value list
    AngleLt,
    /// Bare `>` inside a value list
    AngleGt,
    Literal,
    Number,
    Identifier,
    Reference,
}

impl TokenKind {
    /// Name used in error messages when this kind is the offending next token.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::ParenOpen => "(",
            TokenKind::ParenClose => ")",
            TokenKind::BracketOpen => ":[",
            TokenKind::BracketClose => "]",
            TokenKind::Eq => ":=",
            TokenKind::NotEq => ":!=",
            TokenKind::Lt => ":<",
            TokenKind::Gt => ":>",
            TokenKind::LtEq => ":<=",
            TokenKind::GtEq => ":>=",
            TokenKind::Colon => ":",
            TokenKind::Bang => ":!",
            TokenKind::And => "&&",
            TokenKind::Or => "||",
            TokenKind::Spread => "..",
            TokenKind::Comma => ",",
            TokenKind::AngleLt => "<",
            TokenKind::AngleGt => ">",
            TokenKind::Literal => "literal token",
            TokenKind::Number => "num token",
            TokenKind::Identifier => "identifier",
            TokenKind::Reference => "join to another collection",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub const PARENS: Delimiters<TokenKind> = Delimiters {
    open: TokenKind::ParenOpen,
    close: TokenKind::ParenClose,
};

pub const SQUARE_BRACKETS: Delimiters<TokenKind> = Delimiters {
    open: TokenKind::BracketOpen,
    close: TokenKind::BracketClose,
};

/// One lexical unit of a filter expression, borrowing from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'src> {
    /// Any punctuation or operator token.
    Punct(TokenKind),
    /// Bare word that is not a field name, or backtick-escaped text without the backticks.
    Literal(&'src str),
    Number(&'src str),
    /// Bare word naming a field of the collection being filtered.
    Identifier {
        name: &'src str,
        field_type: FieldType,
    },
    /// `$collection(clause)`. `closed` is false when input ended before the matching `)`.
    Reference {
        collection: &'src str,
        clause: &'src str,
        closed: bool,
    },
}

impl Token<'_> {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Punct(kind) => *kind,
            Token::Literal(_) => TokenKind::Literal,
            Token::Number(_) => TokenKind::Number,
            Token::Identifier { .. } => TokenKind::Identifier,
            Token::Reference { .. } => TokenKind::Reference,
        }
    }

    /// Kind as seen by the parenthesis balance check.
    ///
    /// An unclosed reference leaves its `(` open.
    pub fn paren_kind(&self) -> TokenKind {
        match self {
            Token::Reference { closed: false, .. } => TokenKind::ParenOpen,
            _ => self.kind(),
        }
    }

    /// Description used when this token is the current token of a rejected pair.
    pub fn describe(&self) -> String {
        match self {
            Token::Punct(kind) => kind.name().to_owned(),
            Token::Literal(value) => format!("Literal Token {value}"),
            Token::Number(value) => format!("Num Token {value}"),
            Token::Identifier { name, .. } => format!("identifier with name {name}"),
            Token::Reference { collection, .. } => format!("join to {collection}"),
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Punct(kind) => write!(f, "{kind:?} {:?}", kind.name()),
            Token::Literal(value) => write!(f, "Literal {value:?}"),
            Token::Number(value) => write!(f, "Number {value:?}"),
            Token::Identifier { name, field_type } => {
                write!(f, "Identifier {name:?} {field_type}")
            }
            Token::Reference {
                collection,
                clause,
                closed,
            } => {
                write!(f, "Reference {collection:?} {clause:?}")?;
                if !closed {
                    f.write_str(" unclosed")?;
                }
                Ok(())
            }
        }
    }
}
