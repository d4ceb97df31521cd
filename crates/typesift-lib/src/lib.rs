//! Typesift: validates Typesense filter and sort expressions against collection schemas.
//!
//! # Example
//!
//! ```
//! use typesift_core::{CollectionSchema, Field, FieldType, Registry};
//! use typesift_lib::Validator;
//!
//! let users = CollectionSchema::new(
//!     "users",
//!     [Field::new("id", FieldType::String), Field::new("age", FieldType::Int32)],
//! )
//! .unwrap();
//! let posts = CollectionSchema::new(
//!     "posts",
//!     [Field::new("author", FieldType::String).with_reference("users.id")],
//! )
//! .unwrap();
//! let registry: Registry = [users, posts].into_iter().collect();
//! let users = registry.get("users").unwrap();
//!
//! let validator = Validator::new(&registry);
//! assert!(validator.filter("age:>30 && $posts(author:=1)", users).is_ok());
//! assert_eq!(
//!     validator.filter("age != 20", users).unwrap_err().to_string(),
//!     "Unknown token: !"
//! );
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod balance;
pub mod filter;
pub mod sort;

mod capture;
mod validator;

#[cfg(test)]
pub mod test_utils;

pub use filter::{Token, TokenKind, tokenize};
pub use validator::{DEFAULT_RECURSION_LIMIT, Validator};

use typesift_core::{CollectionSchema, Registry};

/// Why an expression was rejected.
///
/// `Display` renders the exact user-facing message. Failures inside a join,
/// an `_eval` clause or an `_eval` filter wrap the inner error, so the rendered
/// message carries every prefix and [`std::error::Error::source`] walks the chain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Unknown token: {0}")]
    UnknownToken(char),

    #[error("Invalid start token: {0}")]
    InvalidStart(String),

    #[error("Invalid token sequence: {0} cannot be the only token")]
    OnlyToken(String),

    #[error("Invalid token sequence: {current} followed by {next}")]
    InvalidSequence { current: String, next: String },

    #[error("Invalid token sequence: {0} cannot be the next token after a join")]
    AfterJoin(String),

    #[error("Collection {0} not registered")]
    CollectionNotRegistered(String),

    #[error("Collection {collection} not referenced in {referencing}")]
    CollectionNotReferenced {
        collection: String,
        referencing: String,
    },

    #[error("[Error on filter for joined collection {collection}]: {inner}")]
    JoinedCollection {
        collection: String,
        #[source]
        inner: Box<Error>,
    },

    #[error("Parentheses are not balanced")]
    UnbalancedParentheses,

    #[error("Square brackets are not balanced")]
    UnbalancedSquareBrackets,

    /// Join, parenthesis and `_eval` nesting combined exceeded the configured limit.
    #[error("Expression too deeply nested (limit: {0})")]
    RecursionLimitExceeded(u32),

    #[error("Invalid token sequence: sort expression must start with an identifier or '_eval'.")]
    InvalidSortStart,

    #[error("Invalid identifier: {0} is not a sortable field.")]
    NotSortable(String),

    #[error("Invalid identifier: {field} is not a field of collection {collection}.")]
    UnknownSortField { field: String, collection: String },

    #[error(
        "Invalid token sequence: identifier {0} must be followed by ':' or a valid 'missing_values' config."
    )]
    MissingSortOrder(String),

    #[error("Invalid token sequence: configuration ({key}: {value}) isn't valid.")]
    InvalidSortConfig { key: String, value: String },

    #[error("Invalid token sequence: config token must be followed by ':'.")]
    ConfigWithoutColon,

    #[error("Invalid token sequence: ':' must be followed by 'asc' or 'desc'.")]
    MissingSortDirection,

    #[error("Invalid token sequence: sort direction must be followed by ',' or end of input.")]
    MisplacedSortDirection,

    #[error("Invalid token sequence: ',' must be followed by an identifier.")]
    DanglingComma,

    #[error("Invalid token sequence: '_eval' must be followed by ':'.")]
    EvalWithoutColon,

    #[error("[Error in _eval clause]: {0}")]
    EvalClause(#[source] Box<Error>),

    #[error("[Error on filter]: {0}")]
    EvalFilter(#[source] Box<Error>),

    #[error("Invalid token after {after}, expected {expected}")]
    EvalUnexpected {
        after: &'static str,
        expected: &'static str,
    },

    #[error("Invalid token: an _eval clause cannot be empty")]
    EmptyEval,
}

impl Error {
    /// Wraps `self` with `wrap` unless it is a nesting-limit failure,
    /// which always surfaces unwrapped.
    pub(crate) fn nest(self, wrap: impl FnOnce(Box<Error>) -> Error) -> Error {
        match self {
            Error::RecursionLimitExceeded(_) => self,
            inner => wrap(Box::new(inner)),
        }
    }
}

/// Result type for validation.
pub type Result<T> = std::result::Result<T, Error>;

/// Validate a filter expression for `schema` with the default configuration.
pub fn parse_filter(expression: &str, schema: &CollectionSchema, registry: &Registry) -> Result<()> {
    Validator::new(registry).filter(expression, schema)
}

/// Validate a sort expression for `schema` with the default configuration.
pub fn parse_sort(expression: &str, schema: &CollectionSchema, registry: &Registry) -> Result<()> {
    Validator::new(registry).sort(expression, schema)
}
