//! Variant-keyed resource tables

use crate::variant::ThemeVariant;
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use std::sync::{Arc, RwLock};
use tint_core::ResourceValue;

/// Named values for one theme variant, in declaration order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceTable {
    entries: IndexMap<String, ResourceValue>,
}

impl ResourceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ResourceValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a value, returning the previous one
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ResourceValue>,
    ) -> Option<ResourceValue> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<ResourceValue> {
        self.entries.shift_remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&ResourceValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResourceValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<K: Into<String>, V: Into<ResourceValue>> FromIterator<(K, V)> for ResourceTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Read-only source of resource tables
///
/// Tables are handed out as shared snapshots so resolution never holds a
/// store lock while applying values to elements.
pub trait ResourceStore: Send + Sync {
    fn table(&self, variant: ThemeVariant) -> Option<Arc<ResourceTable>>;
}

/// In-memory [`ResourceStore`] with copy-on-write edits
#[derive(Debug, Default)]
pub struct ResourceDictionary {
    tables: RwLock<FxHashMap<ThemeVariant, Arc<ResourceTable>>>,
}

impl ResourceDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style table registration
    pub fn with_table(self, variant: ThemeVariant, table: ResourceTable) -> Self {
        self.set_table(variant, table);
        self
    }

    /// Install or replace the table for `variant`
    pub fn set_table(&self, variant: ThemeVariant, table: ResourceTable) {
        tracing::debug!(%variant, entries = table.len(), "installing resource table");
        self.tables.write().unwrap().insert(variant, Arc::new(table));
    }

    pub fn remove_table(&self, variant: ThemeVariant) -> Option<Arc<ResourceTable>> {
        self.tables.write().unwrap().remove(&variant)
    }

    /// Set a single value, creating the variant table if needed
    ///
    /// Outstanding snapshots returned by [`ResourceStore::table`] keep the old
    /// contents.
    pub fn set_value(
        &self,
        variant: ThemeVariant,
        key: impl Into<String>,
        value: impl Into<ResourceValue>,
    ) {
        let mut tables = self.tables.write().unwrap();
        let table = tables.entry(variant).or_default();
        Arc::make_mut(table).insert(key, value);
    }

    pub fn variants(&self) -> Vec<ThemeVariant> {
        let mut variants: Vec<_> = self.tables.read().unwrap().keys().copied().collect();
        variants.sort_unstable();
        variants
    }
}

impl ResourceStore for ResourceDictionary {
    fn table(&self, variant: ThemeVariant) -> Option<Arc<ResourceTable>> {
        self.tables.read().unwrap().get(&variant).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tint_core::Color;

    #[test]
    fn table_preserves_declaration_order() {
        let table = ResourceTable::new()
            .with("Foreground", Color::WHITE)
            .with("Accent", Color::RED)
            .with("CornerRadius", 4.0);
        let keys: Vec<&str> = table.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["Foreground", "Accent", "CornerRadius"]);
    }

    #[test]
    fn snapshots_are_unaffected_by_later_edits() {
        let dictionary = ResourceDictionary::new().with_table(
            ThemeVariant::Default,
            ResourceTable::new().with("Accent", Color::RED),
        );
        let before = dictionary.table(ThemeVariant::Default).unwrap();

        dictionary.set_value(ThemeVariant::Default, "Accent", Color::BLUE);

        assert_eq!(before.get("Accent"), Some(&ResourceValue::Color(Color::RED)));
        assert_eq!(
            dictionary
                .table(ThemeVariant::Default)
                .unwrap()
                .get("Accent"),
            Some(&ResourceValue::Color(Color::BLUE))
        );
    }

    #[test]
    fn missing_variant_yields_none() {
        let dictionary = ResourceDictionary::new();
        assert!(dictionary.table(ThemeVariant::HighContrast).is_none());

        dictionary.set_value(ThemeVariant::HighContrast, "Accent", Color::YELLOW);
        assert_eq!(dictionary.variants(), vec![ThemeVariant::HighContrast]);
    }
}
