//! Data-source schema derivation.
//!
//! A data source mirrors the attribute tree of the resource it reads, but
//! every attribute becomes read-only: the provider computes all values, so
//! nothing is required of or accepted from the caller.

use super::types::{Attribute, AttributeMap, Element};

/// Copies a resource schema into a data-source schema.
///
/// The output has the same key set as the input. Every attribute, at every
/// nesting level, is forced to `computed = true`, `required = false`,
/// `optional = false`; type and description are preserved, and the set hash
/// handle passes through by identity. For a simple element only the element
/// type carries over.
///
/// The input is never mutated and no state is shared with the output.
pub fn data_source_schema_from_resource_schema(resource: &AttributeMap) -> AttributeMap {
    resource
        .iter()
        .map(|(name, attr)| (name.clone(), data_source_attribute(attr)))
        .collect()
}

fn data_source_attribute(attr: &Attribute) -> Attribute {
    Attribute {
        attr_type: attr.attr_type,
        description: attr.description.clone(),
        required: false,
        optional: false,
        computed: true,
        set_hash: attr.set_hash.clone(),
        elem: attr.elem.as_ref().map(|elem| match elem {
            Element::Complex(nested) => {
                Element::Complex(data_source_schema_from_resource_schema(nested))
            }
            // Only the element type carries over; a fresh descriptor drops
            // whatever flags the source element held.
            Element::Simple(inner) => Element::Simple(Box::new(Attribute::new(inner.attr_type))),
        }),
    }
}
