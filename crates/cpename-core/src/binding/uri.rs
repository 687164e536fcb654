//! URI binding, CPE 2.3 and legacy 2.2
//!
//! Format: `cpe:/part:vendor:product:version:update:edition:language`
//!
//! An empty component is the encoding's default and `-` is NA. Quoted
//! characters are percent-encoded (`.` and `-` stay literal), an unquoted
//! `?` is `%01` and an unquoted `*` is `%02`. Trailing empty components
//! are dropped. The legacy 2.2 form uses the tilde as a reserved marker,
//! so a literal tilde can't be written in it.

use super::pack;
use super::Encoding;
use crate::attribute::{Attribute, AttributeValue};
use crate::error::{Error, Result};
use crate::grammar::{is_quotable, is_unreserved};
use crate::name::Name;

pub const PREFIX: &str = "cpe:/";

/// Attribute held by each URI component
const COMPONENTS: [Attribute; 7] = [
    Attribute::Part,
    Attribute::Vendor,
    Attribute::Product,
    Attribute::Version,
    Attribute::Update,
    Attribute::Edition,
    Attribute::Language,
];

const TOKEN_NA: &str = "-";
const WILDCARD_ONE: &str = "%01";
const WILDCARD_RUN: &str = "%02";

/// Render a name as a URI
pub fn bind(name: &Name, encoding: Encoding) -> Result<String> {
    let mut components = Vec::with_capacity(COMPONENTS.len());
    for attribute in COMPONENTS {
        let component = if attribute == Attribute::Edition && needs_packing(name) {
            let mut fields: [String; 5] = Default::default();
            for (field, packed) in fields.iter_mut().zip(Attribute::PACKED) {
                *field = bind_value(packed, name.get(packed), encoding)?;
            }
            pack::pack(&fields)
        } else {
            bind_value(attribute, name.get(attribute), encoding)?
        };
        components.push(component);
    }

    while components.last().is_some_and(|c| c.is_empty()) {
        components.pop();
    }
    Ok(format!("{}{}", PREFIX, components.join(":")))
}

/// Parse a URI; `encoding` selects the 2.3 or 2.2 rules
pub fn unbind(text: &str, encoding: Encoding) -> Result<Name> {
    let body = text
        .trim()
        .strip_prefix(PREFIX)
        .ok_or_else(|| Error::malformed("URI must start with 'cpe:/'"))?;

    let default = encoding.absent_default().unwrap_or_default();
    let mut values: [AttributeValue; 11] = std::array::from_fn(|_| default.clone());
    let mut present = [false; 11];

    let components: Vec<&str> = if body.is_empty() {
        Vec::new()
    } else {
        body.split(':').collect()
    };
    if components.len() > COMPONENTS.len() {
        return Err(Error::malformed(format!(
            "URI has {} components, at most {} allowed",
            components.len(),
            COMPONENTS.len()
        )));
    }

    for (attribute, component) in COMPONENTS.iter().copied().zip(components) {
        let fields = if attribute == Attribute::Edition && pack::is_packed(component) {
            pack::unpack(component)?
        } else {
            vec![(attribute, component)]
        };

        for (attribute, field) in fields {
            if let Some(value) = parse_value(attribute, field, encoding)? {
                values[attribute.ordinal()] = value;
                present[attribute.ordinal()] = true;
            }
        }
    }

    Ok(Name::from_parts(values, present))
}

fn needs_packing(name: &Name) -> bool {
    Attribute::PACKED[1..]
        .iter()
        .any(|attr| !name.get(*attr).is_any())
}

fn bind_value(attribute: Attribute, value: &AttributeValue, encoding: Encoding) -> Result<String> {
    let logical = match value {
        AttributeValue::Any | AttributeValue::Undefined => return Ok(String::new()),
        AttributeValue::NotApplicable => return Ok(TOKEN_NA.to_string()),
        AttributeValue::Logical(v) => v,
    };

    let mut out = String::with_capacity(logical.as_str().len() + 8);
    let mut chars = logical.as_str().chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let Some(quoted) = chars.next() else { break };
                if quoted == pack::SEPARATOR && encoding == Encoding::Uri22 {
                    return Err(Error::UnrepresentableValue {
                        attribute,
                        encoding,
                    });
                }
                out.push_str(&pct_encode(quoted));
            }
            '?' => out.push_str(WILDCARD_ONE),
            '*' => out.push_str(WILDCARD_RUN),
            other => out.push(other),
        }
    }

    // A lone literal hyphen would read back as NA
    if out == TOKEN_NA {
        out = pct_encode_always('-');
    }
    Ok(out)
}

fn pct_encode(c: char) -> String {
    match c {
        '.' | '-' | '_' => c.to_string(),
        _ => pct_encode_always(c),
    }
}

fn pct_encode_always(c: char) -> String {
    format!("%{:02x}", c as u32)
}

/// Decode one component; `None` means empty (the encoding default)
fn parse_value(
    attribute: Attribute,
    field: &str,
    encoding: Encoding,
) -> Result<Option<AttributeValue>> {
    match field {
        "" => return Ok(None),
        TOKEN_NA => return Ok(Some(AttributeValue::NotApplicable)),
        _ => {}
    }

    let invalid = || Error::invalid_value(attribute, field);
    let legacy = encoding == Encoding::Uri22;

    let mut quoted = String::with_capacity(field.len());
    let mut chars = field.chars();
    while let Some(c) = chars.next() {
        match c {
            '%' => {
                let hex: String = chars.by_ref().take(2).collect();
                if hex.len() != 2 || !hex.chars().all(|h| h.is_ascii_hexdigit()) {
                    return Err(invalid());
                }
                let code = u8::from_str_radix(&hex, 16).map_err(|_| invalid())?;
                match code {
                    0x01 => quoted.push('?'),
                    0x02 => quoted.push('*'),
                    _ => {
                        let decoded = char::from(code);
                        if !is_quotable(decoded) || (legacy && decoded == pack::SEPARATOR) {
                            return Err(invalid());
                        }
                        quoted.push('\\');
                        quoted.push(decoded);
                    }
                }
            }
            '.' | '-' => {
                quoted.push('\\');
                quoted.push(c);
            }
            '~' if !legacy => quoted.push_str("\\~"),
            c if is_unreserved(c) => quoted.push(c),
            _ => return Err(invalid()),
        }
    }

    AttributeValue::logical(attribute, &quoted)
        .map(Some)
        .map_err(|_| invalid())
}
