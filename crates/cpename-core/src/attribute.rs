//! Attribute keys and attribute values
//!
//! A CPE name is made of eleven attributes in a fixed order. Each attribute
//! carries one [`AttributeValue`]: one of the logical values ANY and NA, an
//! undefined marker for encodings that cannot tell "absent" from ANY, or a
//! literal [`LogicalValue`] held in canonical WFN quoting.

use crate::error::{Error, Result};
use crate::grammar;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the eleven CPE attribute keys, in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    /// 'a' (application), 'o' (operating system), 'h' (hardware)
    Part,
    Vendor,
    Product,
    Version,
    Update,
    Edition,
    Language,
    SwEdition,
    TargetSw,
    TargetHw,
    Other,
}

impl Attribute {
    /// All attributes in canonical order
    pub const ALL: [Attribute; 11] = [
        Attribute::Part,
        Attribute::Vendor,
        Attribute::Product,
        Attribute::Version,
        Attribute::Update,
        Attribute::Edition,
        Attribute::Language,
        Attribute::SwEdition,
        Attribute::TargetSw,
        Attribute::TargetHw,
        Attribute::Other,
    ];

    /// The attributes folded into the packed URI edition component
    pub const PACKED: [Attribute; 5] = [
        Attribute::Edition,
        Attribute::SwEdition,
        Attribute::TargetSw,
        Attribute::TargetHw,
        Attribute::Other,
    ];

    /// Position in canonical order
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Attribute key as written in a WFN
    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Part => "part",
            Attribute::Vendor => "vendor",
            Attribute::Product => "product",
            Attribute::Version => "version",
            Attribute::Update => "update",
            Attribute::Edition => "edition",
            Attribute::Language => "language",
            Attribute::SwEdition => "sw_edition",
            Attribute::TargetSw => "target_sw",
            Attribute::TargetHw => "target_hw",
            Attribute::Other => "other",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Attribute::ALL
            .iter()
            .copied()
            .find(|attr| attr.as_str() == s)
            .ok_or_else(|| Error::malformed(format!("invalid attribute name {:?}", s)))
    }
}

/// A single character position of a logical value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A literal character (quoted or not in the WFN form)
    Char(char),
    /// Unquoted `?`: one character or none
    AnyOne,
    /// Unquoted `*`: zero or more characters
    AnyRun,
}

/// A validated literal attribute value in canonical WFN quoting
///
/// The only way to build one is through the grammar validator, so the
/// stored text always satisfies the WFN value grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogicalValue(String);

impl LogicalValue {
    /// Validate `raw` (WFN quoting, outer quotes stripped) for `attribute`
    pub fn new(attribute: Attribute, raw: &str) -> Result<Self> {
        grammar::validate(attribute, raw).map(LogicalValue)
    }

    /// Canonical escaped text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decompose into literal characters and wildcards
    pub fn tokens(&self) -> Vec<Token> {
        let mut tokens = Vec::with_capacity(self.0.len());
        let mut chars = self.0.chars();
        while let Some(c) = chars.next() {
            match c {
                '\\' => {
                    if let Some(quoted) = chars.next() {
                        tokens.push(Token::Char(quoted));
                    }
                }
                '?' => tokens.push(Token::AnyOne),
                '*' => tokens.push(Token::AnyRun),
                other => tokens.push(Token::Char(other)),
            }
        }
        tokens
    }

    /// Whether the value contains unquoted `*` or `?`
    pub fn has_wildcards(&self) -> bool {
        self.tokens().iter().any(|t| !matches!(t, Token::Char(_)))
    }

    /// The value with quoting removed; wildcards are kept as `*`/`?`
    pub fn unquoted(&self) -> String {
        self.tokens()
            .into_iter()
            .map(|t| match t {
                Token::Char(c) => c,
                Token::AnyOne => '?',
                Token::AnyRun => '*',
            })
            .collect()
    }
}

impl fmt::Display for LogicalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

static ANY: AttributeValue = AttributeValue::Any;

/// The value of one attribute of a name
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum AttributeValue {
    /// Unconstrained
    #[default]
    Any,
    /// Not applicable to this name
    NotApplicable,
    /// Never specified by the source text; matches like `Any`
    Undefined,
    /// A literal, possibly with wildcards
    Logical(LogicalValue),
}

impl AttributeValue {
    /// Build a logical value, validating `raw` against the WFN grammar
    pub fn logical(attribute: Attribute, raw: &str) -> Result<Self> {
        LogicalValue::new(attribute, raw).map(AttributeValue::Logical)
    }

    /// `Undefined` resolved to `Any`
    pub fn resolved(&self) -> &AttributeValue {
        match self {
            AttributeValue::Undefined => &ANY,
            other => other,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self.resolved(), AttributeValue::Any)
    }

    pub fn as_logical(&self) -> Option<&LogicalValue> {
        match self {
            AttributeValue::Logical(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    /// WFN form: `ANY`, `NA` or a quoted literal
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Any | AttributeValue::Undefined => f.write_str("ANY"),
            AttributeValue::NotApplicable => f.write_str("NA"),
            AttributeValue::Logical(v) => write!(f, "\"{}\"", v),
        }
    }
}
