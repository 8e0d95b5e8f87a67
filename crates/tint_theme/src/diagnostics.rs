//! Read-only inspection of what an element's bindings resolve to

use crate::binder::ThemeBinder;
use crate::variant::ThemeVariant;
use tint_core::{AttributeSlot, Element, ResourceValue};

/// Current resolution of one binding
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedBinding {
    pub resource_key: String,
    pub slot: AttributeSlot,
    pub variant: ThemeVariant,
    /// `None` when the variant table or the key is missing
    pub value: Option<ResourceValue>,
}

impl ThemeBinder {
    /// Resolve every binding of `element` without applying anything, logging
    /// each result at debug level
    pub fn dump_resolved(&self, element: &dyn Element) -> Vec<ResolvedBinding> {
        let inner = self.inner();
        let variant = inner.variant_for(element);
        let table = inner.store.table(variant);
        let id = element.id();

        self.bindings(id)
            .into_iter()
            .map(|record| {
                let value = table
                    .as_ref()
                    .and_then(|table| table.get(record.resource_key()).cloned());
                match &value {
                    Some(value) => tracing::debug!(
                        %id,
                        %variant,
                        resource_key = record.resource_key(),
                        slot = %record.slot(),
                        %value,
                        "resolved binding"
                    ),
                    None => tracing::debug!(
                        %id,
                        %variant,
                        resource_key = record.resource_key(),
                        slot = %record.slot(),
                        "unresolved binding"
                    ),
                }
                ResolvedBinding {
                    resource_key: record.resource_key().to_string(),
                    slot: record.slot(),
                    variant,
                    value,
                }
            })
            .collect()
    }
}
