//! Declarative field rules.
//!
//! A [`Schema`] is an ordered list of [`FieldRule`]s, built entirely in
//! `const` context so each domain type can declare its rules as a `static`:
//!
//! ```rust
//! use bigcommerce_api::validation::{FieldRule, Schema, TypeTag};
//!
//! static ITEM_SCHEMA: Schema = Schema::new(&[
//!     FieldRule::new("product_id", TypeTag::Integer).required(),
//!     FieldRule::new("variant_id", TypeTag::Integer),
//! ]);
//!
//! assert_eq!(ITEM_SCHEMA.fields().len(), 2);
//! assert!(ITEM_SCHEMA.field("product_id").unwrap().required);
//! ```

use std::fmt;

/// The declared type of a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// A string.
    String,
    /// An integer.
    Integer,
    /// A floating point number.
    Float,
    /// Any number, integer or float.
    Numeric,
    /// A boolean.
    Boolean,
    /// A sequence.
    Array,
    /// A JSON object.
    Hash,
    /// A timestamp.
    DateTime,
    /// A nested schema-governed object, named by its type name.
    Object(&'static str),
}

impl TypeTag {
    /// Returns the name used in validation messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Integer => "Integer",
            Self::Float => "Float",
            Self::Numeric => "Numeric",
            Self::Boolean => "Boolean",
            Self::Array => "Array",
            Self::Hash => "Hash",
            Self::DateTime => "DateTime",
            Self::Object(name) => *name,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rules for one field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldRule {
    /// The field name, as passed to [`Validate::field`](super::Validate::field).
    pub name: &'static str,
    /// The declared type.
    pub type_tag: TypeTag,
    /// Whether the field must be present.
    pub required: bool,
    /// Element type, for `Array` fields holding typed elements.
    pub elements: Option<TypeTag>,
}

impl FieldRule {
    /// Creates an optional, untyped-element rule.
    #[must_use]
    pub const fn new(name: &'static str, type_tag: TypeTag) -> Self {
        Self {
            name,
            type_tag,
            required: false,
            elements: None,
        }
    }

    /// Marks the field as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Declares the element type of an `Array` field.
    #[must_use]
    pub const fn elements(mut self, tag: TypeTag) -> Self {
        self.elements = Some(tag);
        self
    }
}

/// An ordered set of field rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Schema {
    fields: &'static [FieldRule],
}

impl Schema {
    /// Creates a schema from rules, evaluated in the given order.
    #[must_use]
    pub const fn new(fields: &'static [FieldRule]) -> Self {
        Self { fields }
    }

    /// Returns the rules in evaluation order.
    #[must_use]
    pub const fn fields(&self) -> &'static [FieldRule] {
        self.fields
    }

    /// Finds the rule for `name`.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldRule> {
        self.fields.iter().find(|rule| rule.name == name)
    }
}
