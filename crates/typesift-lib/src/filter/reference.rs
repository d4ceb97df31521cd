use tracing::debug;
use typesift_core::CollectionSchema;

use crate::validator::Validator;
use crate::{Error, Result};

/// Validates a `$target(clause)` join written in a filter on `source`.
///
/// `target` must be registered and must declare a reference into `source`.
/// The clause is then validated as a full filter against `target`'s schema;
/// its failure is wrapped with the joined collection's name.
pub(crate) fn validate_reference(
    validator: &Validator<'_>,
    target: &str,
    clause: &str,
    source: &CollectionSchema,
    depth: u32,
) -> Result<()> {
    let registry = validator.registry();

    let Some(referencing) = registry.referenced_by(source.name()) else {
        return Err(Error::CollectionNotRegistered(source.name().to_owned()));
    };

    let Some(joined) = registry.get(target) else {
        return Err(Error::CollectionNotRegistered(target.to_owned()));
    };

    if !referencing.contains(target) {
        return Err(Error::CollectionNotReferenced {
            collection: target.to_owned(),
            referencing: source.name().to_owned(),
        });
    }

    let depth = validator.enter(depth)?;
    debug!(from = source.name(), to = target, depth, "validating join clause");

    super::validate(validator, clause, joined, depth).map_err(|inner| {
        inner.nest(|inner| Error::JoinedCollection {
            collection: target.to_owned(),
            inner,
        })
    })
}
