//! Adjacency validation for filter token sequences.
//!
//! Every token kind has a [`Rule`]: the kinds that may immediately follow it,
//! and whether the expression may end on it. Identifiers take their follow set
//! from the bound field's type via [`operators_for`].

use typesift_core::{CollectionSchema, FieldType};

use super::reference::validate_reference;
use super::token::{Token, TokenKind};
use crate::validator::Validator;
use crate::{Error, Result};

use TokenKind as K;

#[derive(Debug, Clone, Copy)]
struct Rule {
    follow: &'static [TokenKind],
    terminal: bool,
}

impl Rule {
    const fn new(follow: &'static [TokenKind], terminal: bool) -> Self {
        Self { follow, terminal }
    }
}

const START: &[TokenKind] = &[K::ParenOpen, K::Identifier, K::Number, K::Literal, K::Reference];

const VALUE: &[TokenKind] = &[K::Literal, K::Number];
const LIST_ITEM: &[TokenKind] = &[K::Number, K::AngleLt, K::AngleGt, K::Literal];
const CONNECTIVE: &[TokenKind] = &[K::ParenOpen, K::Identifier, K::Reference];

const STRING_OPS: &[TokenKind] = &[K::Eq, K::Colon, K::NotEq, K::BracketOpen];
const NUMERIC_OPS: &[TokenKind] = &[K::Lt, K::Gt, K::Eq, K::GtEq, K::LtEq, K::NotEq, K::BracketOpen];
const BOOL_OPS: &[TokenKind] = &[K::Eq, K::NotEq];
const NUMERIC_ARRAY_OPS: &[TokenKind] = &[K::Lt, K::Gt, K::Eq];
const BOOL_ARRAY_OPS: &[TokenKind] = &[K::Eq];

/// Comparison operators legal after an identifier of `field_type`.
///
/// Types without direct comparisons (objects, geopoints, images, ...) get an empty set.
pub fn operators_for(field_type: FieldType) -> &'static [TokenKind] {
    match field_type {
        FieldType::String => STRING_OPS,
        FieldType::Int32 | FieldType::Int64 | FieldType::Float => NUMERIC_OPS,
        FieldType::Bool => BOOL_OPS,
        FieldType::Int32Array | FieldType::Int64Array | FieldType::FloatArray => {
            NUMERIC_ARRAY_OPS
        }
        FieldType::BoolArray => BOOL_ARRAY_OPS,
        _ => &[],
    }
}

fn rule_for(token: &Token<'_>) -> Rule {
    match token {
        Token::Identifier { field_type, .. } => Rule::new(operators_for(*field_type), false),
        Token::Number(_) => Rule::new(
            &[K::ParenClose, K::And, K::Or, K::Comma, K::Spread, K::BracketClose],
            true,
        ),
        Token::Literal(_) => Rule::new(
            &[K::ParenClose, K::And, K::Or, K::Comma, K::BracketClose],
            true,
        ),
        Token::Reference { .. } => Rule::new(&[K::And, K::Or], true),
        Token::Punct(kind) => match kind {
            K::ParenOpen => Rule::new(&[K::ParenOpen, K::Identifier], false),
            K::ParenClose => Rule::new(&[K::ParenClose, K::And, K::Or], true),
            K::Eq | K::NotEq | K::Lt | K::Gt | K::LtEq | K::GtEq | K::Colon | K::Bang => {
                Rule::new(VALUE, false)
            }
            K::And | K::Or => Rule::new(CONNECTIVE, false),
            K::BracketOpen | K::Comma => Rule::new(LIST_ITEM, false),
            K::BracketClose => Rule::new(&[K::And, K::Or, K::ParenClose], true),
            K::AngleLt | K::AngleGt | K::Spread => Rule::new(&[K::Number], false),
            K::Literal | K::Number | K::Identifier | K::Reference => Rule::new(&[], false),
        },
    }
}

/// Checks every adjacent pair of `tokens` against the adjacency table.
///
/// References are resolved as they are reached, so an error inside a join
/// wins over any later sequence error. Balance is not checked here.
pub(crate) fn validate_sequence(
    validator: &Validator<'_>,
    tokens: &[Token<'_>],
    schema: &CollectionSchema,
    depth: u32,
) -> Result<()> {
    let Some(first) = tokens.first() else {
        return Ok(());
    };

    if !START.contains(&first.kind()) {
        return Err(Error::InvalidStart(first.kind().name().to_owned()));
    }

    if tokens.len() == 1 && !matches!(first, Token::Reference { .. }) {
        return Err(Error::OnlyToken(first.kind().name().to_owned()));
    }

    let mut nesting = 0u32;
    for (i, current) in tokens.iter().enumerate() {
        let next = tokens.get(i + 1);

        match current {
            Token::Reference {
                collection, clause, ..
            } => {
                validate_reference(validator, collection, clause, schema, depth)?;
                if let Some(next) = next
                    && !matches!(next.kind(), K::And | K::Or)
                {
                    return Err(Error::AfterJoin(next.kind().name().to_owned()));
                }
                continue;
            }
            Token::Punct(K::ParenOpen) => {
                nesting += 1;
                validator.enter(depth + nesting - 1)?;
            }
            Token::Punct(K::ParenClose) => nesting = nesting.saturating_sub(1),
            _ => {}
        }

        check_pair(current, next)?;
    }

    Ok(())
}

fn check_pair(current: &Token<'_>, next: Option<&Token<'_>>) -> Result<()> {
    let rule = rule_for(current);
    let legal = match next {
        Some(next) => rule.follow.contains(&next.kind()),
        None => rule.terminal,
    };
    if legal {
        return Ok(());
    }

    Err(Error::InvalidSequence {
        current: current.describe(),
        next: next.map_or("end of input", |t| t.kind().name()).to_owned(),
    })
}
