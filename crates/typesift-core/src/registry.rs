use indexmap::{IndexMap, IndexSet};

use crate::{CollectionSchema, SchemaError, parse_collections};

/// All registered collections plus the reverse-reference index.
///
/// For every registered collection `C`, `referenced_by(C)` holds the names of
/// collections owning a field whose reference targets a declared field of `C`.
/// A filter on `C` may join into exactly those collections.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    collections: IndexMap<String, CollectionSchema>,
    referenced_by: IndexMap<String, IndexSet<String>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON document holding one collection or an array of them.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        Ok(parse_collections(json)?.into_iter().collect())
    }

    /// Insert or replace a collection and rebuild the reverse index.
    ///
    /// Returns the schema previously registered under the same name.
    pub fn register(&mut self, schema: CollectionSchema) -> Option<CollectionSchema> {
        let previous = self.collections.insert(schema.name().to_owned(), schema);
        self.rebuild_reverse_index();
        previous
    }

    pub fn extend(&mut self, schemas: impl IntoIterator<Item = CollectionSchema>) {
        for schema in schemas {
            self.collections.insert(schema.name().to_owned(), schema);
        }
        self.rebuild_reverse_index();
    }

    pub fn get(&self, name: &str) -> Option<&CollectionSchema> {
        self.collections.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.collections.contains_key(name)
    }

    /// Collections that may be joined from `name`. `None` when `name` is unregistered.
    pub fn referenced_by(&self, name: &str) -> Option<&IndexSet<String>> {
        self.referenced_by.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CollectionSchema> {
        self.collections.values()
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    fn rebuild_reverse_index(&mut self) {
        let mut index: IndexMap<String, IndexSet<String>> = self
            .collections
            .keys()
            .map(|name| (name.clone(), IndexSet::new()))
            .collect();

        for owner in self.collections.values() {
            for field in owner.fields() {
                let Some((target, target_field)) = field.reference_target() else {
                    continue;
                };
                let declared = self
                    .collections
                    .get(target)
                    .is_some_and(|t| t.has_field(target_field));
                if !declared {
                    continue;
                }
                if let Some(sources) = index.get_mut(target) {
                    sources.insert(owner.name().to_owned());
                }
            }
        }

        self.referenced_by = index;
    }
}

impl FromIterator<CollectionSchema> for Registry {
    fn from_iter<I: IntoIterator<Item = CollectionSchema>>(iter: I) -> Self {
        let mut registry = Registry::new();
        registry.extend(iter);
        registry
    }
}
