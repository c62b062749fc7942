//! The rule engine.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::rest::{json_type_name, ParameterError, Params};
use crate::validation::schema::{FieldRule, Schema, TypeTag};

/// A field's current value, as seen by the validator.
#[derive(Clone)]
pub enum FieldValue<'a> {
    /// Absent.
    Nil,
    /// An integer.
    Integer(i64),
    /// A float.
    Float(f64),
    /// A boolean.
    Boolean(bool),
    /// A string.
    String(&'a str),
    /// A sequence of values.
    Array(Vec<FieldValue<'a>>),
    /// A JSON object.
    Hash(&'a serde_json::Map<String, Value>),
    /// A timestamp.
    DateTime(DateTime<Utc>),
    /// A nested schema-governed object.
    Object(&'a dyn Validate),
}

impl<'a> FieldValue<'a> {
    /// Wraps an optional nested object.
    #[must_use]
    pub fn nested<T: Validate>(value: Option<&'a T>) -> Self {
        value.map_or(Self::Nil, |v| Self::Object(v))
    }

    /// Wraps an optional list of nested objects.
    #[must_use]
    pub fn list_of<T: Validate>(items: Option<&'a [T]>) -> Self {
        items.map_or(Self::Nil, |items| {
            Self::Array(items.iter().map(|item| Self::Object(item)).collect())
        })
    }

    /// Maps a JSON value.
    #[must_use]
    pub fn from_json(value: &'a Value) -> Self {
        match value {
            Value::Null => Self::Nil,
            Value::Bool(b) => Self::Boolean(*b),
            Value::Number(n) => n
                .as_i64()
                .map_or_else(|| Self::Float(n.as_f64().unwrap_or_default()), Self::Integer),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Array(items.iter().map(Self::from_json).collect()),
            Value::Object(map) => Self::Hash(map),
        }
    }

    /// Returns `true` for [`FieldValue::Nil`].
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Name of the value's runtime type, as used in messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "Nil",
            Self::Integer(_) => "Integer",
            Self::Float(_) => "Float",
            Self::Boolean(_) => "Boolean",
            Self::String(_) => "String",
            Self::Array(_) => "Array",
            Self::Hash(_) => "Hash",
            Self::DateTime(_) => "DateTime",
            Self::Object(object) => object.type_name(),
        }
    }

    fn matches(&self, tag: TypeTag) -> bool {
        match (tag, self) {
            (TypeTag::String, Self::String(_))
            | (TypeTag::Integer | TypeTag::Numeric, Self::Integer(_))
            | (TypeTag::Float | TypeTag::Numeric, Self::Float(_))
            | (TypeTag::Boolean, Self::Boolean(_))
            | (TypeTag::Array, Self::Array(_))
            | (TypeTag::Hash, Self::Hash(_))
            | (TypeTag::DateTime, Self::DateTime(_)) => true,
            (TypeTag::Object(name), Self::Object(object)) => object.type_name() == name,
            _ => false,
        }
    }
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("Nil"),
            Self::Integer(n) => write!(f, "Integer({n})"),
            Self::Float(n) => write!(f, "Float({n})"),
            Self::Boolean(b) => write!(f, "Boolean({b})"),
            Self::String(s) => write!(f, "String({s:?})"),
            Self::Array(items) => f.debug_tuple("Array").field(items).finish(),
            Self::Hash(map) => write!(f, "Hash({} keys)", map.len()),
            Self::DateTime(dt) => write!(f, "DateTime({dt})"),
            Self::Object(object) => write!(f, "Object({})", object.type_name()),
        }
    }
}

impl<'a> From<Option<&'a str>> for FieldValue<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(Self::Nil, Self::String)
    }
}

impl From<Option<i64>> for FieldValue<'_> {
    fn from(value: Option<i64>) -> Self {
        value.map_or(Self::Nil, Self::Integer)
    }
}

impl From<Option<u64>> for FieldValue<'_> {
    fn from(value: Option<u64>) -> Self {
        value.map_or(Self::Nil, |n| {
            Self::Integer(i64::try_from(n).unwrap_or(i64::MAX))
        })
    }
}

impl From<Option<f64>> for FieldValue<'_> {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Nil, Self::Float)
    }
}

impl From<Option<bool>> for FieldValue<'_> {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Self::Nil, Self::Boolean)
    }
}

impl From<Option<DateTime<Utc>>> for FieldValue<'_> {
    fn from(value: Option<DateTime<Utc>>) -> Self {
        value.map_or(Self::Nil, Self::DateTime)
    }
}

/// An object governed by a [`Schema`].
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::validation::{FieldRule, FieldValue, Schema, TypeTag, Validate};
///
/// struct Tag {
///     label: Option<String>,
/// }
///
/// static TAG_SCHEMA: Schema = Schema::new(&[FieldRule::new("label", TypeTag::String).required()]);
///
/// impl Validate for Tag {
///     fn type_name(&self) -> &'static str {
///         "Tag"
///     }
///
///     fn schema(&self) -> Option<&'static Schema> {
///         Some(&TAG_SCHEMA)
///     }
///
///     fn field(&self, name: &str) -> FieldValue<'_> {
///         match name {
///             "label" => self.label.as_deref().into(),
///             _ => FieldValue::Nil,
///         }
///     }
/// }
///
/// let tag = Tag { label: Some("  ".to_string()) };
/// assert!(!tag.is_valid());
/// assert_eq!(tag.validation_errors(), vec!["Attribute 'label' is required."]);
/// ```
pub trait Validate {
    /// Name of the type, used in messages and for `Object` type rules.
    fn type_name(&self) -> &'static str;

    /// Returns the schema, or `None` if the type declares none.
    fn schema(&self) -> Option<&'static Schema>;

    /// Returns the current value of `name`.
    fn field(&self, name: &str) -> FieldValue<'_>;

    /// Returns every rule violation, in schema order.
    fn validation_errors(&self) -> Vec<String> {
        validate(self)
    }

    /// Returns `true` if there are no violations.
    fn is_valid(&self) -> bool {
        self.validation_errors().is_empty()
    }
}

/// Validates `object` against its schema.
///
/// Errors accumulate per field (type rule, then required rule) and then
/// across fields in schema order. The object is never modified, so calling
/// this twice yields equal lists.
#[must_use]
pub fn validate<V: Validate + ?Sized>(object: &V) -> Vec<String> {
    let Some(schema) = object.schema() else {
        return vec![format!(
            "No validation schema defined for '{}'.",
            object.type_name()
        )];
    };

    let mut errors = Vec::new();
    for rule in schema.fields() {
        let value = object.field(rule.name);
        check_type(rule, &value, &mut errors);
        if rule.required {
            check_presence(rule, &value, &mut errors);
        }
    }
    errors
}

fn check_type(rule: &FieldRule, value: &FieldValue<'_>, errors: &mut Vec<String>) {
    if value.is_nil() {
        return;
    }

    if let (TypeTag::Array, Some(element_tag)) = (rule.type_tag, rule.elements) {
        if let FieldValue::Array(items) = value {
            for (index, item) in items.iter().enumerate() {
                check_element(&format!("{}[{index}]", rule.name), element_tag, item, errors);
            }
            return;
        }
    } else if value.matches(rule.type_tag) {
        return;
    }

    errors.push(type_error(rule.name, rule.type_tag, value));
}

fn check_element(path: &str, tag: TypeTag, item: &FieldValue<'_>, errors: &mut Vec<String>) {
    if !item.matches(tag) {
        errors.push(type_error(path, tag, item));
        return;
    }
    if let FieldValue::Object(nested) = item {
        errors.extend(
            nested
                .validation_errors()
                .into_iter()
                .map(|error| format!("{path} {error}")),
        );
    }
}

fn check_presence(rule: &FieldRule, value: &FieldValue<'_>, errors: &mut Vec<String>) {
    let present = match value {
        FieldValue::Nil => false,
        FieldValue::Integer(_) | FieldValue::Float(_) | FieldValue::Boolean(_) => true,
        FieldValue::String(s) => !s.trim().is_empty(),
        FieldValue::Array(items) => !items.is_empty(),
        FieldValue::Hash(map) => !map.is_empty(),
        FieldValue::Object(nested) => {
            if !nested.is_valid() {
                errors.push(format!(
                    "Nested attribute '{}' is present but not valid.",
                    rule.name
                ));
            }
            return;
        }
        FieldValue::DateTime(_) => {
            errors.push(format!(
                "No presence rule defined for type '{}' on attribute '{}'.",
                value.type_name(),
                rule.name
            ));
            return;
        }
    };

    if !present {
        errors.push(format!("Attribute '{}' is required.", rule.name));
    }
}

fn type_error(field: &str, declared: TypeTag, value: &FieldValue<'_>) -> String {
    format!(
        "Attribute '{field}' should be of type '{declared}', '{}' provided.",
        value.type_name()
    )
}

/// Validates `object` and serializes it into action parameters.
///
/// # Errors
///
/// Returns [`ParameterError::Invalid`] with every violation if the object
/// is not valid, [`ParameterError::Unserializable`] if serialization fails,
/// or [`ParameterError::InvalidParamsType`] if it does not serialize to a
/// JSON object.
pub fn to_params<T: Validate + Serialize>(object: &T) -> Result<Params, ParameterError> {
    let errors = object.validation_errors();
    if !errors.is_empty() {
        return Err(ParameterError::Invalid {
            object: object.type_name(),
            errors,
        });
    }

    let value = serde_json::to_value(object).map_err(|error| ParameterError::Unserializable {
        object: object.type_name(),
        message: error.to_string(),
    })?;

    match value {
        Value::Object(params) => Ok(params),
        other => Err(ParameterError::InvalidParamsType {
            name: object.type_name(),
            expected: "an object",
            found: json_type_name(&other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Default)]
    struct Leaf {
        code: Option<String>,
    }

    static LEAF_SCHEMA: Schema = Schema::new(&[FieldRule::new("code", TypeTag::String).required()]);

    impl Validate for Leaf {
        fn type_name(&self) -> &'static str {
            "Leaf"
        }

        fn schema(&self) -> Option<&'static Schema> {
            Some(&LEAF_SCHEMA)
        }

        fn field(&self, name: &str) -> FieldValue<'_> {
            match name {
                "code" => self.code.as_deref().into(),
                _ => FieldValue::Nil,
            }
        }
    }

    // Scalar fields come from a raw JSON object so tests can feed any shape.
    struct Loose {
        values: Value,
        leaves: Option<Vec<Leaf>>,
        leaf: Option<Leaf>,
        seen_at: Option<DateTime<Utc>>,
    }

    impl Loose {
        fn new(values: Value) -> Self {
            Self {
                values,
                leaves: None,
                leaf: None,
                seen_at: None,
            }
        }
    }

    static LOOSE_SCHEMA: Schema = Schema::new(&[
        FieldRule::new("name", TypeTag::String).required(),
        FieldRule::new("count", TypeTag::Integer),
        FieldRule::new("amount", TypeTag::Numeric),
        FieldRule::new("tags", TypeTag::Array).required(),
        FieldRule::new("meta", TypeTag::Hash),
        FieldRule::new("leaves", TypeTag::Array).elements(TypeTag::Object("Leaf")),
        FieldRule::new("leaf", TypeTag::Object("Leaf")).required(),
        FieldRule::new("seen_at", TypeTag::DateTime).required(),
    ]);

    impl Validate for Loose {
        fn type_name(&self) -> &'static str {
            "Loose"
        }

        fn schema(&self) -> Option<&'static Schema> {
            Some(&LOOSE_SCHEMA)
        }

        fn field(&self, name: &str) -> FieldValue<'_> {
            match name {
                "leaves" if self.leaves.is_some() => FieldValue::list_of(self.leaves.as_deref()),
                "leaf" => FieldValue::nested(self.leaf.as_ref()),
                "seen_at" => self.seen_at.into(),
                other => self
                    .values
                    .get(other)
                    .map_or(FieldValue::Nil, FieldValue::from_json),
            }
        }
    }

    struct Unschemed;

    impl Validate for Unschemed {
        fn type_name(&self) -> &'static str {
            "Unschemed"
        }

        fn schema(&self) -> Option<&'static Schema> {
            None
        }

        fn field(&self, _name: &str) -> FieldValue<'_> {
            FieldValue::Nil
        }
    }

    fn leaf(code: &str) -> Leaf {
        Leaf {
            code: Some(code.to_string()),
        }
    }

    /// A `Loose` that passes every rule except those a test breaks.
    fn complete(values: Value) -> Loose {
        let mut base = json!({"name": "n", "tags": ["a"]});
        if let (Some(base), Value::Object(extra)) = (base.as_object_mut(), values) {
            base.extend(extra);
        }
        let mut loose = Loose::new(base);
        loose.leaf = Some(leaf("x"));
        loose
    }

    #[test]
    fn test_missing_schema_is_never_valid() {
        assert_eq!(
            Unschemed.validation_errors(),
            vec!["No validation schema defined for 'Unschemed'."]
        );
        assert!(!Unschemed.is_valid());
    }

    #[test]
    fn test_blank_string_fails_presence() {
        let errors = Leaf {
            code: Some("   ".to_string()),
        }
        .validation_errors();
        assert_eq!(errors, vec!["Attribute 'code' is required."]);
        assert!(leaf("A1").is_valid());
        assert!(!Leaf::default().is_valid());
    }

    #[test]
    fn test_complete_object_only_lacks_the_timestamp() {
        assert_eq!(
            complete(json!({})).validation_errors(),
            vec!["Attribute 'seen_at' is required."]
        );
    }

    #[test]
    fn test_type_mismatch_message() {
        let errors = complete(json!({"name": 42})).validation_errors();
        assert!(errors.contains(
            &"Attribute 'name' should be of type 'String', 'Integer' provided.".to_string()
        ));
    }

    #[test]
    fn test_numeric_accepts_integers_and_floats() {
        let errors = complete(json!({"amount": 1})).validation_errors();
        assert!(!errors.iter().any(|e| e.contains("'amount'")));

        let errors = complete(json!({"amount": 1.5})).validation_errors();
        assert!(!errors.iter().any(|e| e.contains("'amount'")));

        let errors = complete(json!({"count": 1.5})).validation_errors();
        assert!(errors.contains(
            &"Attribute 'count' should be of type 'Integer', 'Float' provided.".to_string()
        ));
    }

    #[test]
    fn test_required_rules_by_kind() {
        let errors = Loose::new(json!({"name": "n", "tags": [], "meta": {}})).validation_errors();

        assert_eq!(
            errors,
            vec![
                "Attribute 'tags' is required.".to_string(),
                "Attribute 'leaf' is required.".to_string(),
                "Attribute 'seen_at' is required.".to_string(),
            ]
        );
    }

    #[test]
    fn test_date_time_has_no_presence_rule() {
        let mut loose = complete(json!({}));
        loose.seen_at = Some(Utc::now());

        assert_eq!(
            loose.validation_errors(),
            vec!["No presence rule defined for type 'DateTime' on attribute 'seen_at'."]
        );
    }

    #[test]
    fn test_invalid_nested_object_fails_presence() {
        let mut loose = complete(json!({}));
        loose.leaf = Some(Leaf::default());

        assert!(loose
            .validation_errors()
            .contains(&"Nested attribute 'leaf' is present but not valid.".to_string()));
    }

    #[test]
    fn test_nested_list_errors_are_prefixed() {
        let mut loose = complete(json!({}));
        loose.leaves = Some(vec![leaf("ok"), Leaf::default()]);

        assert_eq!(
            loose.validation_errors(),
            vec![
                "leaves[1] Attribute 'code' is required.",
                "Attribute 'seen_at' is required.",
            ]
        );
    }

    #[test]
    fn test_list_elements_are_type_checked() {
        let errors = complete(json!({"leaves": ["a", 2]})).validation_errors();

        assert!(errors.contains(
            &"Attribute 'leaves[0]' should be of type 'Leaf', 'String' provided.".to_string()
        ));
        assert!(errors.contains(
            &"Attribute 'leaves[1]' should be of type 'Leaf', 'Integer' provided.".to_string()
        ));
    }

    #[test]
    fn test_typed_list_field_rejects_non_arrays() {
        let errors = complete(json!({"leaves": "nope"})).validation_errors();
        assert!(errors.contains(
            &"Attribute 'leaves' should be of type 'Array', 'String' provided.".to_string()
        ));
    }

    struct Opaque;

    impl Validate for Opaque {
        fn type_name(&self) -> &'static str {
            "Opaque"
        }

        fn schema(&self) -> Option<&'static Schema> {
            Some(&LEAF_SCHEMA)
        }

        fn field(&self, _name: &str) -> FieldValue<'_> {
            FieldValue::String("set")
        }
    }

    impl Serialize for Opaque {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("opaque values cannot be serialized"))
        }
    }

    #[test]
    fn test_to_params_reports_serialization_failures() {
        assert!(Opaque.is_valid());

        let result = to_params(&Opaque);
        assert!(matches!(
            result,
            Err(ParameterError::Unserializable { object: "Opaque", ref message })
                if message.contains("opaque values cannot be serialized")
        ));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let loose = Loose::new(json!({"name": "", "count": "x"}));
        assert_eq!(loose.validation_errors(), loose.validation_errors());
    }
}
