//! Customer address parameters.

use serde::{Deserialize, Serialize};

use crate::validation::{FieldRule, FieldValue, Schema, TypeTag, Validate};

static ADDRESS_SCHEMA: Schema = Schema::new(&[
    FieldRule::new("first_name", TypeTag::String).required(),
    FieldRule::new("last_name", TypeTag::String).required(),
    FieldRule::new("company", TypeTag::String),
    FieldRule::new("address1", TypeTag::String).required(),
    FieldRule::new("address2", TypeTag::String),
    FieldRule::new("city", TypeTag::String).required(),
    FieldRule::new("state_or_province", TypeTag::String).required(),
    FieldRule::new("postal_code", TypeTag::String).required(),
    FieldRule::new("country_code", TypeTag::String).required(),
    FieldRule::new("phone", TypeTag::String),
    FieldRule::new("address_type", TypeTag::String),
]);

/// A customer address, as submitted with a customer.
///
/// All fields are optional in the struct so partial data can be built up;
/// [`Validate`] reports the ones the API requires.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::rest::resources::Address;
/// use bigcommerce_api::validation::Validate;
///
/// let address = Address {
///     first_name: Some("Jane".to_string()),
///     last_name: Some("Doe".to_string()),
///     address1: Some("1 Main St".to_string()),
///     city: Some("Austin".to_string()),
///     state_or_province: Some("Texas".to_string()),
///     postal_code: Some("78701".to_string()),
///     country_code: Some("US".to_string()),
///     ..Default::default()
/// };
/// assert!(address.is_valid());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Address {
    /// The first name of the addressee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// The last name of the addressee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// The company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// The street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,

    /// Apartment, suite, etc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,

    /// The city.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// The full state or province name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_or_province: Option<String>,

    /// The postal or ZIP code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// The two-letter country code (ISO 3166-1 alpha-2).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    /// The phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// `residential` or `commercial`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_type: Option<String>,
}

impl Validate for Address {
    fn type_name(&self) -> &'static str {
        "Address"
    }

    fn schema(&self) -> Option<&'static Schema> {
        Some(&ADDRESS_SCHEMA)
    }

    fn field(&self, name: &str) -> FieldValue<'_> {
        let value = match name {
            "first_name" => &self.first_name,
            "last_name" => &self.last_name,
            "company" => &self.company,
            "address1" => &self.address1,
            "address2" => &self.address2,
            "city" => &self.city,
            "state_or_province" => &self.state_or_province,
            "postal_code" => &self.postal_code,
            "country_code" => &self.country_code,
            "phone" => &self.phone,
            "address_type" => &self.address_type,
            _ => return FieldValue::Nil,
        };
        value.as_deref().into()
    }
}
