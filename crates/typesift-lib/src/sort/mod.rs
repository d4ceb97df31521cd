//! Sort expressions: `age:desc, _text_match:asc, _eval(in_stock:true):desc`.
//!
//! A sort expression is a comma-separated list of `key:direction` pairs where
//! the key is a sortable field, a relevance pseudo-field, or an `_eval(...)`
//! payload. A field may carry a `(missing_values: first|last)` config before
//! its colon.

pub mod eval;
mod lexer;


pub use lexer::{SortToken, tokenize};

use tracing::trace;
use typesift_core::CollectionSchema;

use crate::validator::Validator;
use crate::{Error, Result};

/// Pseudo-fields that sort by relevance. Always sortable.
pub const RELEVANCE_FIELDS: &[&str] = &["_text_match", "_text_match_score"];

const MISSING_VALUES: &str = "missing_values";

pub(crate) fn validate(
    validator: &Validator<'_>,
    input: &str,
    schema: &CollectionSchema,
    depth: u32,
) -> Result<()> {
    let tokens = tokenize(input)?;
    trace!(collection = schema.name(), tokens = tokens.len(), "tokenized sort");

    validate_sequence(validator, &tokens, schema, depth)
}

fn validate_sequence(
    validator: &Validator<'_>,
    tokens: &[SortToken<'_>],
    schema: &CollectionSchema,
    depth: u32,
) -> Result<()> {
    let Some(first) = tokens.first() else {
        return Ok(());
    };
    if !is_key(first) {
        return Err(Error::InvalidSortStart);
    }

    for (i, current) in tokens.iter().enumerate() {
        let next = tokens.get(i + 1);

        match current {
            SortToken::Identifier(name) => check_identifier(name, next, schema)?,
            SortToken::Config { .. } => {
                if !matches!(next, Some(SortToken::Colon)) {
                    return Err(Error::ConfigWithoutColon);
                }
            }
            SortToken::Colon => {
                if !matches!(next, Some(SortToken::Asc | SortToken::Desc)) {
                    return Err(Error::MissingSortDirection);
                }
            }
            SortToken::Asc | SortToken::Desc => {
                if !matches!(next, None | Some(SortToken::Comma)) {
                    return Err(Error::MisplacedSortDirection);
                }
            }
            SortToken::Comma => {
                if !next.is_some_and(is_key) {
                    return Err(Error::DanglingComma);
                }
            }
            SortToken::Eval { closed: false, .. } => return Err(Error::UnbalancedParentheses),
            SortToken::Eval { payload, .. } => {
                if !matches!(next, Some(SortToken::Colon)) {
                    return Err(Error::EvalWithoutColon);
                }
                eval::validate(validator, payload, schema, depth)
                    .map_err(|inner| inner.nest(Error::EvalClause))?;
            }
        }
    }

    Ok(())
}

fn is_key(token: &SortToken<'_>) -> bool {
    matches!(token, SortToken::Identifier(_) | SortToken::Eval { .. })
}

fn check_identifier(
    name: &str,
    next: Option<&SortToken<'_>>,
    schema: &CollectionSchema,
) -> Result<()> {
    if !RELEVANCE_FIELDS.contains(&name) {
        match schema.field(name) {
            None => {
                return Err(Error::UnknownSortField {
                    field: name.to_owned(),
                    collection: schema.name().to_owned(),
                });
            }
            Some(field) if !field.is_sortable() => {
                return Err(Error::NotSortable(name.to_owned()));
            }
            Some(_) => {}
        }
    }

    match next {
        Some(SortToken::Colon) => Ok(()),
        Some(SortToken::Config { key, value }) => {
            if *key == MISSING_VALUES && matches!(*value, "first" | "last") {
                Ok(())
            } else {
                Err(Error::InvalidSortConfig {
                    key: (*key).to_owned(),
                    value: (*value).to_owned(),
                })
            }
        }
        _ => Err(Error::MissingSortOrder(name.to_owned())),
    }
}
