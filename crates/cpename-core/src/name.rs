//! The CPE name container
//!
//! A [`Name`] always holds all eleven attributes. It also remembers which
//! attributes were explicitly given by the source text; `len` and `at`
//! are defined over those, in canonical order.

use crate::attribute::{Attribute, AttributeValue};
use crate::binding::{self, Encoding};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A CPE 2.3 name: eleven attribute values in canonical order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name {
    values: [AttributeValue; 11],
    present: [bool; 11],
}

impl Name {
    pub(crate) fn from_parts(values: [AttributeValue; 11], present: [bool; 11]) -> Self {
        Self { values, present }
    }

    /// Create a name builder; every attribute starts as ANY
    pub fn builder() -> NameBuilder {
        NameBuilder::new()
    }

    /// Parse a name in the given encoding
    pub fn unbind(text: &str, encoding: Encoding) -> Result<Self> {
        binding::unbind(text, encoding)
    }

    /// Render the name in the given encoding
    pub fn bind(&self, encoding: Encoding) -> Result<String> {
        binding::bind(self, encoding)
    }

    /// Value of an attribute
    pub fn get(&self, attribute: Attribute) -> &AttributeValue {
        &self.values[attribute.ordinal()]
    }

    /// Raw WFN textual forms of an attribute's value
    ///
    /// A single name always yields exactly one entry, e.g. `"microsoft"`
    /// (with the quotes), `ANY` or `NA`.
    pub fn get_attribute_values(&self, attribute: Attribute) -> Vec<String> {
        vec![self.get(attribute).to_string()]
    }

    /// Whether the source text gave this attribute explicitly
    pub fn is_present(&self, attribute: Attribute) -> bool {
        self.present[attribute.ordinal()]
    }

    /// Number of explicitly present attributes
    pub fn len(&self) -> usize {
        self.present.iter().filter(|p| **p).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The `index`-th explicitly present attribute in canonical order
    pub fn at(&self, index: usize) -> Result<(Attribute, &AttributeValue)> {
        self.present_attributes()
            .nth(index)
            .ok_or(Error::IndexOutOfRange {
                index,
                length: self.len(),
            })
    }

    /// Explicitly present attributes in canonical order
    pub fn present_attributes(&self) -> impl Iterator<Item = (Attribute, &AttributeValue)> {
        self.iter().filter(move |(attr, _)| self.is_present(*attr))
    }

    /// All eleven attributes in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, &AttributeValue)> {
        Attribute::ALL.iter().map(move |attr| (*attr, self.get(*attr)))
    }
}

impl PartialEq for Name {
    /// Two names are equal when all eleven resolved values are equal
    fn eq(&self, other: &Self) -> bool {
        self.values
            .iter()
            .zip(other.values.iter())
            .all(|(a, b)| a.resolved() == b.resolved())
    }
}

impl Eq for Name {}

impl Hash for Name {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for value in &self.values {
            value.resolved().hash(state);
        }
    }
}

impl fmt::Display for Name {
    /// Formatted string (FS) binding
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&binding::fs::bind(self))
    }
}

impl FromStr for Name {
    type Err = Error;

    /// Parse any encoding, detected from the prefix
    fn from_str(s: &str) -> Result<Self> {
        let encoding = Encoding::detect(s)
            .ok_or_else(|| Error::malformed("unrecognised CPE name prefix"))?;
        binding::unbind(s, encoding)
    }
}

impl TryFrom<String> for Name {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.to_string()
    }
}

/// Builder for constructing a Name attribute by attribute
#[derive(Debug, Clone, Default)]
pub struct NameBuilder {
    values: [AttributeValue; 11],
    present: [bool; 11],
}

impl NameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute to an already-built value
    pub fn value(mut self, attribute: Attribute, value: AttributeValue) -> Self {
        self.values[attribute.ordinal()] = value;
        self.present[attribute.ordinal()] = true;
        self
    }

    /// Set an attribute from a WFN value body (no outer quotes)
    pub fn logical(self, attribute: Attribute, raw: &str) -> Result<Self> {
        let value = AttributeValue::logical(attribute, raw)?;
        Ok(self.value(attribute, value))
    }

    pub fn any(self, attribute: Attribute) -> Self {
        self.value(attribute, AttributeValue::Any)
    }

    pub fn not_applicable(self, attribute: Attribute) -> Self {
        self.value(attribute, AttributeValue::NotApplicable)
    }

    pub fn build(self) -> Name {
        Name::from_parts(self.values, self.present)
    }
}
