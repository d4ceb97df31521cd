//! Filter expressions: `age:>30 && name:[Alice, Bob] && $posts(title:=Rust)`.
//!
//! Validation runs in a fixed order and stops at the first failure:
//!
//! 1. tokenize (unknown characters)
//! 2. adjacency grammar, resolving joins recursively as they are reached
//! 3. parenthesis balance
//! 4. square-bracket balance
//!
//! So a grammar error always wins over a balance error, and an unbalanced `(`
//! is reported before an unbalanced `:[`.

mod grammar;
mod lexer;
mod reference;
mod token;

#[cfg(test)]
mod lexer_tests;
#[cfg(test)]
mod reference_tests;

pub use grammar::operators_for;
pub use lexer::tokenize;
pub use token::{PARENS, SQUARE_BRACKETS, Token, TokenKind};

use tracing::trace;
use typesift_core::CollectionSchema;

use crate::balance::check_balanced;
use crate::validator::Validator;
use crate::{Error, Result};

pub(crate) fn validate(
    validator: &Validator<'_>,
    input: &str,
    schema: &CollectionSchema,
    depth: u32,
) -> Result<()> {
    let tokens = tokenize(input, schema)?;
    trace!(collection = schema.name(), tokens = tokens.len(), "tokenized filter");

    grammar::validate_sequence(validator, &tokens, schema, depth)?;

    if !check_balanced(tokens.iter().map(Token::paren_kind), PARENS) {
        return Err(Error::UnbalancedParentheses);
    }
    if !check_balanced(tokens.iter().map(Token::kind), SQUARE_BRACKETS) {
        return Err(Error::UnbalancedSquareBrackets);
    }

    Ok(())
}
