//! CPE 2.3 formatted string (FS) binding
//!
//! Format: `cpe:2.3:part:vendor:product:version:update:edition:language:sw_edition:target_sw:target_hw:other`
//!
//! `*` is ANY and `-` is NA. Inside a value, `.`, `-` and `_` appear
//! unquoted; other punctuation keeps the WFN backslash.

use crate::attribute::{Attribute, AttributeValue};
use crate::error::{Error, Result};
use crate::grammar::{is_quotable, is_unreserved};
use crate::name::Name;

pub const PREFIX: &str = "cpe:2.3:";

const TOKEN_ANY: &str = "*";
const TOKEN_NA: &str = "-";

/// Characters the FS writes without a backslash
const PLAIN_PUNCTUATION: [char; 3] = ['.', '-', '_'];

/// Parse a formatted string
pub fn unbind(text: &str) -> Result<Name> {
    let body = text
        .trim()
        .strip_prefix(PREFIX)
        .ok_or_else(|| Error::malformed("formatted string must start with 'cpe:2.3:'"))?;

    let fields = split_fields(body);
    if fields.len() != Attribute::ALL.len() {
        return Err(Error::malformed(format!(
            "formatted string needs {} attributes, found {}",
            Attribute::ALL.len(),
            fields.len()
        )));
    }

    let mut values: [AttributeValue; 11] = Default::default();
    for (attribute, field) in Attribute::ALL.iter().zip(fields) {
        values[attribute.ordinal()] = parse_value(*attribute, field)?;
    }

    Ok(Name::from_parts(values, [true; 11]))
}

/// Render a name as a formatted string
pub fn bind(name: &Name) -> String {
    let fields: Vec<String> = name.iter().map(|(_, value)| bind_value(value)).collect();
    format!("{}{}", PREFIX, fields.join(":"))
}

fn bind_value(value: &AttributeValue) -> String {
    let logical = match value {
        AttributeValue::Any | AttributeValue::Undefined => return TOKEN_ANY.to_string(),
        AttributeValue::NotApplicable => return TOKEN_NA.to_string(),
        AttributeValue::Logical(v) => v,
    };

    let mut out = String::with_capacity(logical.as_str().len());
    let mut chars = logical.as_str().chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        if let Some(quoted) = chars.next() {
            if !PLAIN_PUNCTUATION.contains(&quoted) {
                out.push('\\');
            }
            out.push(quoted);
        }
    }

    // A lone literal hyphen would read back as NA
    if out == TOKEN_NA {
        out.insert(0, '\\');
    }
    out
}

fn parse_value(attribute: Attribute, field: &str) -> Result<AttributeValue> {
    match field {
        TOKEN_ANY => return Ok(AttributeValue::Any),
        TOKEN_NA => return Ok(AttributeValue::NotApplicable),
        _ => {}
    }

    let invalid = || Error::invalid_value(attribute, field);

    let mut quoted = String::with_capacity(field.len() + 4);
    let mut chars = field.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                quoted.push('\\');
                quoted.push(chars.next().ok_or_else(invalid)?);
            }
            '*' | '?' => quoted.push(c),
            c if is_unreserved(c) => quoted.push(c),
            c if is_quotable(c) => {
                quoted.push('\\');
                quoted.push(c);
            }
            _ => return Err(invalid()),
        }
    }

    AttributeValue::logical(attribute, &quoted).map_err(|_| invalid())
}

/// Split on `:` separators that are not quoted
fn split_fields(body: &str) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut start = 0;
    let mut escaped = false;

    for (i, c) in body.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            ':' => {
                fields.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    fields.push(&body[start..]);
    fields
}
