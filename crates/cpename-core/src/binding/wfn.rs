//! Well-formed name (WFN) binding
//!
//! Format: `wfn:[attr1=val1, attr2=val2, ...]` where each value is `ANY`,
//! `NA` or a double-quoted literal in WFN quoting. Attributes left out of
//! the list are ANY.

use crate::attribute::{Attribute, AttributeValue};
use crate::error::{Error, Result};
use crate::name::Name;

pub const PREFIX: &str = "wfn:[";
const SUFFIX: char = ']';

const TOKEN_ANY: &str = "ANY";
const TOKEN_NA: &str = "NA";

/// Parse a WFN
pub fn unbind(text: &str) -> Result<Name> {
    let body = text
        .trim()
        .strip_prefix(PREFIX)
        .ok_or_else(|| Error::malformed("WFN must start with 'wfn:['"))?
        .strip_suffix(SUFFIX)
        .ok_or_else(|| Error::malformed("WFN must end with ']'"))?;

    let mut values: [AttributeValue; 11] = Default::default();
    let mut present = [false; 11];

    if body.trim().is_empty() {
        return Ok(Name::from_parts(values, present));
    }

    for pair in split_pairs(body)? {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| Error::malformed(format!("expected key=value, found {:?}", pair)))?;
        let attribute: Attribute = key.trim().parse()?;

        let slot = attribute.ordinal();
        if present[slot] {
            return Err(Error::malformed(format!(
                "attribute {} given more than once",
                attribute
            )));
        }
        values[slot] = parse_value(attribute, value.trim())?;
        present[slot] = true;
    }

    Ok(Name::from_parts(values, present))
}

/// Render a name as a WFN listing every defined attribute
pub fn bind(name: &Name) -> String {
    let pairs: Vec<String> = name
        .iter()
        .filter(|(_, value)| **value != AttributeValue::Undefined)
        .map(|(attr, value)| format!("{}={}", attr, value))
        .collect();
    format!("{}{}{}", PREFIX, pairs.join(", "), SUFFIX)
}

fn parse_value(attribute: Attribute, raw: &str) -> Result<AttributeValue> {
    match raw {
        TOKEN_ANY => Ok(AttributeValue::Any),
        TOKEN_NA => Ok(AttributeValue::NotApplicable),
        _ => {
            let inner = raw
                .strip_prefix('"')
                .and_then(|r| r.strip_suffix('"'))
                .ok_or_else(|| Error::invalid_value(attribute, raw))?;
            AttributeValue::logical(attribute, inner)
        }
    }
}

/// Split the bracket body on commas outside quoted literals
fn split_pairs(body: &str) -> Result<Vec<&str>> {
    let mut pairs = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    let mut escaped = false;

    for (i, c) in body.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' if in_quotes => escaped = true,
            '"' => in_quotes = !in_quotes,
            '[' | ']' if !in_quotes => {
                return Err(Error::malformed("unbalanced bracket in WFN"));
            }
            ',' if !in_quotes => {
                pairs.push(checked_pair(&body[start..i])?);
                start = i + 1;
            }
            _ => {}
        }
    }

    if in_quotes {
        return Err(Error::malformed("unterminated quoted value"));
    }
    pairs.push(checked_pair(&body[start..])?);
    Ok(pairs)
}

fn checked_pair(pair: &str) -> Result<&str> {
    let pair = pair.trim();
    if pair.is_empty() {
        return Err(Error::malformed("empty attribute in WFN"));
    }
    Ok(pair)
}
