//! WFN attribute-value grammar
//!
//! A logical value body (outer quotes removed) is valid when:
//! - unquoted characters are ASCII alphanumerics, `_`, or the wildcards
//!   `*` and `?`
//! - every other printable ASCII character is quoted with `\`
//! - unquoted `?` only appears in one run at the start and/or one run at
//!   the end
//! - it is not empty and not made only of `*` (that is ANY)
//!
//! `validate` returns the canonical form, where `\_` is written as `_`.

use crate::attribute::Attribute;
use crate::error::{Error, Result};

const PART_VALUES: [&str; 3] = ["a", "o", "h"];

/// Characters allowed without quoting
pub fn is_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Characters that may follow a `\`
pub fn is_quotable(c: char) -> bool {
    c.is_ascii_graphic() && !c.is_ascii_alphanumeric()
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Slot {
    Literal,
    One,
    Run,
}

/// Validate a raw WFN value body and return it in canonical form
pub fn validate(attribute: Attribute, raw: &str) -> Result<String> {
    let invalid = || Error::invalid_value(attribute, raw);

    if raw.is_empty() {
        return Err(invalid());
    }

    let mut canonical = String::with_capacity(raw.len());
    let mut slots = Vec::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let quoted = chars.next().filter(|n| is_quotable(*n)).ok_or_else(invalid)?;
                if quoted != '_' {
                    canonical.push('\\');
                }
                canonical.push(quoted);
                slots.push(Slot::Literal);
            }
            '*' => {
                canonical.push(c);
                slots.push(Slot::Run);
            }
            '?' => {
                canonical.push(c);
                slots.push(Slot::One);
            }
            c if is_unreserved(c) => {
                canonical.push(c);
                slots.push(Slot::Literal);
            }
            _ => return Err(invalid()),
        }
    }

    if !question_marks_anchored(&slots) {
        return Err(invalid());
    }

    if slots.iter().all(|s| *s == Slot::Run) {
        return Err(invalid());
    }

    if attribute == Attribute::Part && !PART_VALUES.contains(&canonical.as_str()) {
        return Err(invalid());
    }

    Ok(canonical)
}

/// Whether `raw` is a valid value body for `attribute`
pub fn is_valid(attribute: Attribute, raw: &str) -> bool {
    validate(attribute, raw).is_ok()
}

fn question_marks_anchored(slots: &[Slot]) -> bool {
    let leading = slots.iter().take_while(|s| **s == Slot::One).count();
    let trailing = slots[leading..]
        .iter()
        .rev()
        .take_while(|s| **s == Slot::One)
        .count();
    let middle = &slots[leading..slots.len() - trailing];
    !middle.contains(&Slot::One)
}
