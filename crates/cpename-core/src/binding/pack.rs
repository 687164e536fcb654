//! Packed URI edition component
//!
//! The URI has a single edition slot. When any of sw_edition, target_sw,
//! target_hw or other carries information, the five attributes
//! (edition, sw_edition, target_sw, target_hw, other) are packed into that
//! slot as `~edition~sw_edition~target_sw~target_hw~other`, each field in
//! URI form. This module only deals with the already-encoded fields.

use crate::attribute::Attribute;
use crate::error::{Error, Result};

pub const SEPARATOR: char = '~';

/// Pack five encoded fields into one edition component
pub fn pack(fields: &[String; 5]) -> String {
    let mut out = String::new();
    for field in fields {
        out.push(SEPARATOR);
        out.push_str(field);
    }
    out
}

/// Whether an edition component is in packed form
pub fn is_packed(component: &str) -> bool {
    component.starts_with(SEPARATOR)
}

/// Split a packed edition component into its fields
///
/// Returns the fields paired with the attribute they belong to. Fewer than
/// five fields is allowed; the missing trailing attributes are simply not
/// returned. More than five is malformed.
pub fn unpack(component: &str) -> Result<Vec<(Attribute, &str)>> {
    let body = component
        .strip_prefix(SEPARATOR)
        .ok_or_else(|| Error::malformed("packed edition must start with '~'"))?;

    let fields: Vec<&str> = body.split(SEPARATOR).collect();
    if fields.len() > Attribute::PACKED.len() {
        return Err(Error::malformed(format!(
            "packed edition has {} fields, at most {} allowed",
            fields.len(),
            Attribute::PACKED.len()
        )));
    }

    Ok(Attribute::PACKED.iter().copied().zip(fields).collect())
}
