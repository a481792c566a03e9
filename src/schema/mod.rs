//! Attribute trees for resource and data-source schemas.
//!
//! # Design Principles
//!
//! - An attribute map is a tree: nesting is arbitrary, cycles cannot occur
//! - An element is simple, complex, or absent, never more than one of these
//! - The set hash handle is opaque pass-through data with identity semantics
//! - Derivation is pure: input maps are never mutated

mod derive;
mod types;

pub use derive::data_source_schema_from_resource_schema;
pub use types::{Attribute, AttributeMap, AttributeType, Element, SetHashFn};
