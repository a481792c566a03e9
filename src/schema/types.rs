//! Schema type definitions.
//!
//! An [`AttributeMap`] names the attributes of one resource or nested
//! object. Each [`Attribute`] carries a value kind, access-mode flags, and
//! for collection kinds an optional [`Element`] describing its contents.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Value kinds an attribute can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    /// Boolean
    Bool,
    /// 64-bit signed integer
    Int,
    /// 64-bit floating point
    Float,
    /// UTF-8 string
    String,
    /// Ordered collection of homogeneous elements
    List,
    /// String-keyed mapping
    Map,
    /// Unordered collection of unique elements
    Set,
}

impl AttributeType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            AttributeType::Bool => "bool",
            AttributeType::Int => "int",
            AttributeType::Float => "float",
            AttributeType::String => "string",
            AttributeType::List => "list",
            AttributeType::Map => "map",
            AttributeType::Set => "set",
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// Hash function handle for set-typed attributes.
///
/// Opaque pass-through data: this crate never invokes the function and never
/// compares two handles by behavior. Only presence and identity are
/// observable. Cloning copies the handle, not the function, so a clone is
/// identical to its source under [`SetHashFn::same`].
#[derive(Clone)]
pub struct SetHashFn(Arc<dyn Fn(&Value) -> i32 + Send + Sync>);

impl SetHashFn {
    /// Wraps a hash function in an identity-tracked handle.
    pub fn new(f: impl Fn(&Value) -> i32 + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// True when both handles refer to the same underlying function.
    pub fn same(&self, other: &SetHashFn) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Applies the underlying function. Exposed for the consuming framework;
    /// nothing in this crate calls it.
    pub fn hash(&self, value: &Value) -> i32 {
        (self.0)(value)
    }
}

impl fmt::Debug for SetHashFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SetHashFn(..)")
    }
}

/// Named attribute definitions; the schema of one resource or nested object.
pub type AttributeMap = HashMap<String, Attribute>;

/// Element description for collection-kind attributes.
///
/// Exactly one of the two shapes applies to a collection; an attribute with
/// no element description holds `None` in its `elem` field instead.
#[derive(Debug, Clone)]
pub enum Element {
    /// Homogeneous elements described by a single attribute
    Simple(Box<Attribute>),
    /// Nested object with its own attribute map
    Complex(AttributeMap),
}

/// A single schema attribute.
///
/// The three access-mode flags are independent; which combinations are legal
/// is the consuming framework's concern, not enforced here.
#[derive(Debug, Clone)]
pub struct Attribute {
    /// Value kind
    pub attr_type: AttributeType,
    /// Human-readable description, empty when undocumented
    pub description: String,
    /// Caller must supply a value
    pub required: bool,
    /// Caller may supply a value
    pub optional: bool,
    /// Provider computes the value
    pub computed: bool,
    /// Hash function for set-typed attributes
    pub set_hash: Option<SetHashFn>,
    /// Element description for collection kinds
    pub elem: Option<Element>,
}

impl Attribute {
    /// Creates an attribute of the given kind with every flag cleared.
    pub fn new(attr_type: AttributeType) -> Self {
        Self {
            attr_type,
            description: String::new(),
            required: false,
            optional: false,
            computed: false,
            set_hash: None,
            elem: None,
        }
    }

    /// Creates a required attribute
    pub fn required(attr_type: AttributeType) -> Self {
        Self {
            required: true,
            ..Self::new(attr_type)
        }
    }

    /// Creates an optional attribute
    pub fn optional(attr_type: AttributeType) -> Self {
        Self {
            optional: true,
            ..Self::new(attr_type)
        }
    }

    /// Creates a computed attribute
    pub fn computed(attr_type: AttributeType) -> Self {
        Self {
            computed: true,
            ..Self::new(attr_type)
        }
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the element description
    pub fn with_elem(mut self, elem: Element) -> Self {
        self.elem = Some(elem);
        self
    }

    /// Sets the set hash handle
    pub fn with_set_hash(mut self, set_hash: SetHashFn) -> Self {
        self.set_hash = Some(set_hash);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(AttributeType::Bool.type_name(), "bool");
        assert_eq!(AttributeType::Int.type_name(), "int");
        assert_eq!(AttributeType::Float.type_name(), "float");
        assert_eq!(AttributeType::String.type_name(), "string");
        assert_eq!(AttributeType::List.type_name(), "list");
        assert_eq!(AttributeType::Map.type_name(), "map");
        assert_eq!(AttributeType::Set.type_name(), "set");
    }

    #[test]
    fn test_constructors_set_single_flag() {
        let required = Attribute::required(AttributeType::String);
        assert!(required.required && !required.optional && !required.computed);

        let optional = Attribute::optional(AttributeType::Int);
        assert!(optional.optional && !optional.required && !optional.computed);

        let computed = Attribute::computed(AttributeType::Bool);
        assert!(computed.computed && !computed.required && !computed.optional);
    }

    #[test]
    fn test_set_hash_applies_wrapped_function() {
        // Consuming frameworks call the handle; this crate only carries it.
        let hash = SetHashFn::new(|v| v.as_i64().unwrap_or(0) as i32);
        assert_eq!(hash.hash(&serde_json::json!(41)), 41);
        assert_eq!(hash.hash(&Value::Null), 0);
    }

    #[test]
    fn test_set_hash_identity() {
        let a = SetHashFn::new(|_| 0);
        let b = SetHashFn::new(|_| 0);
        assert!(a.same(&a));
        assert!(a.same(&a.clone()));
        // Same behavior, different function: not identical.
        assert!(!a.same(&b));
    }

    #[test]
    fn test_set_hash_clone_survives_attribute_clone() {
        let hash = SetHashFn::new(|_| 7);
        let attr = Attribute::required(AttributeType::Set).with_set_hash(hash.clone());
        let copy = attr.clone();
        assert!(copy.set_hash.as_ref().unwrap().same(&hash));
    }
}
