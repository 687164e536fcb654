//! Name comparison
//!
//! Compares a source name with a target name attribute by attribute and
//! folds the eleven pairwise relations into one relation for the names.

use crate::pattern;
use cpename_core::{Attribute, AttributeValue, LogicalValue, Name};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// Set relation of a source to a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    Equal,
    /// The source denotes fewer platforms than the target
    Subset,
    /// The source denotes more platforms than the target
    Superset,
    Disjoint,
    /// Both sides carry wildcards and neither contains the other
    Undefined,
}

impl Relation {
    /// The relation seen from the other side
    pub fn inverse(self) -> Relation {
        match self {
            Relation::Subset => Relation::Superset,
            Relation::Superset => Relation::Subset,
            other => other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::Equal => "equal",
            Relation::Subset => "subset",
            Relation::Superset => "superset",
            Relation::Disjoint => "disjoint",
            Relation::Undefined => "undefined",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparison options
///
/// Literal values are compared case-insensitively unless `ignore_case` is
/// turned off, so `Adobe` and `adobe` are equal by default. Set it to
/// false for strict character-for-character equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOptions {
    /// Compare letters case-insensitively (default: true)
    #[serde(default = "default_true")]
    pub ignore_case: bool,
}

fn default_true() -> bool {
    true
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self { ignore_case: true }
    }
}

/// Name matcher
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    options: MatchOptions,
}

impl Matcher {
    pub fn new(options: MatchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }

    /// Relation between two values of the same attribute
    pub fn compare_values(&self, source: &AttributeValue, target: &AttributeValue) -> Relation {
        use AttributeValue::{Any, Logical, NotApplicable, Undefined};

        // Undefined compares exactly like Any
        match (source, target) {
            (Any | Undefined, Any | Undefined) | (NotApplicable, NotApplicable) => Relation::Equal,
            (Any | Undefined, _) => Relation::Superset,
            (_, Any | Undefined) => Relation::Subset,
            (NotApplicable, _) | (_, NotApplicable) => Relation::Disjoint,
            (Logical(s), Logical(t)) => self.compare_logical(s, t),
        }
    }

    fn compare_logical(&self, source: &LogicalValue, target: &LogicalValue) -> Relation {
        let ignore_case = self.options.ignore_case;

        if pattern::equivalent(source, target, ignore_case) {
            return Relation::Equal;
        }

        match (source.has_wildcards(), target.has_wildcards()) {
            (true, false) if pattern::matches(source, target, ignore_case) => Relation::Superset,
            (false, true) if pattern::matches(target, source, ignore_case) => Relation::Subset,
            (true, true) => Relation::Undefined,
            _ => Relation::Disjoint,
        }
    }

    /// Pairwise relations for all eleven attributes, in canonical order
    pub fn compare_attributes(
        &self,
        source: &Name,
        target: &Name,
    ) -> [(Attribute, Relation); 11] {
        Attribute::ALL.map(|attr| {
            (
                attr,
                self.compare_values(source.get(attr), target.get(attr)),
            )
        })
    }

    /// Relation between two whole names
    ///
    /// Any disjoint attribute makes the names disjoint. Otherwise an
    /// undefined attribute makes the result undefined, and a mix of subset
    /// and superset attributes is disjoint.
    pub fn compare(&self, source: &Name, target: &Name) -> Relation {
        let mut subset = false;
        let mut superset = false;
        let mut undefined = false;

        for attr in Attribute::ALL {
            let relation = self.compare_values(source.get(attr), target.get(attr));
            trace!("Attribute {}: {}", attr, relation);
            match relation {
                Relation::Equal => {}
                Relation::Subset => subset = true,
                Relation::Superset => superset = true,
                Relation::Undefined => undefined = true,
                Relation::Disjoint => {
                    debug!("{} is disjoint from {} on {}", source, target, attr);
                    return Relation::Disjoint;
                }
            }
        }

        let relation = match (undefined, subset, superset) {
            (true, _, _) => Relation::Undefined,
            (false, false, false) => Relation::Equal,
            (false, true, false) => Relation::Subset,
            (false, false, true) => Relation::Superset,
            (false, true, true) => Relation::Disjoint,
        };
        debug!("Compared {} with {}: {}", source, target, relation);
        relation
    }

    /// True if any attribute is disjoint
    pub fn is_disjoint(&self, source: &Name, target: &Name) -> bool {
        Attribute::ALL.iter().any(|attr| {
            self.compare_values(source.get(*attr), target.get(*attr)) == Relation::Disjoint
        })
    }

    /// True if every attribute is equal
    pub fn is_equal(&self, source: &Name, target: &Name) -> bool {
        self.all_attributes(source, target, |r| r == Relation::Equal)
    }

    /// True if every attribute is a subset or equal
    pub fn is_subset(&self, source: &Name, target: &Name) -> bool {
        self.all_attributes(source, target, |r| {
            matches!(r, Relation::Subset | Relation::Equal)
        })
    }

    /// True if every attribute is a superset or equal
    pub fn is_superset(&self, source: &Name, target: &Name) -> bool {
        self.all_attributes(source, target, |r| {
            matches!(r, Relation::Superset | Relation::Equal)
        })
    }

    fn all_attributes(
        &self,
        source: &Name,
        target: &Name,
        accept: impl Fn(Relation) -> bool,
    ) -> bool {
        Attribute::ALL
            .iter()
            .all(|attr| accept(self.compare_values(source.get(*attr), target.get(*attr))))
    }
}

/// Compare two names with default options
pub fn compare(source: &Name, target: &Name) -> Relation {
    Matcher::default().compare(source, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cpename_core::Encoding;

    fn wfn(text: &str) -> Name {
        Name::unbind(text, Encoding::Wfn).unwrap()
    }

    fn logical(raw: &str) -> AttributeValue {
        AttributeValue::logical(Attribute::Product, raw).unwrap()
    }

    #[test]
    fn test_value_table() {
        let m = Matcher::default();
        let any = AttributeValue::Any;
        let na = AttributeValue::NotApplicable;
        let reader = logical("reader");

        assert_eq!(m.compare_values(&any, &any), Relation::Equal);
        assert_eq!(m.compare_values(&any, &na), Relation::Superset);
        assert_eq!(m.compare_values(&any, &reader), Relation::Superset);
        assert_eq!(m.compare_values(&na, &any), Relation::Subset);
        assert_eq!(m.compare_values(&na, &na), Relation::Equal);
        assert_eq!(m.compare_values(&na, &reader), Relation::Disjoint);
        assert_eq!(m.compare_values(&reader, &any), Relation::Subset);
        assert_eq!(m.compare_values(&reader, &na), Relation::Disjoint);
        assert_eq!(m.compare_values(&reader, &reader), Relation::Equal);
    }

    #[test]
    fn test_undefined_acts_as_any() {
        let m = Matcher::default();
        let reader = logical("reader");
        assert_eq!(
            m.compare_values(&AttributeValue::Undefined, &reader),
            Relation::Superset
        );
        assert_eq!(
            m.compare_values(&AttributeValue::Undefined, &AttributeValue::Any),
            Relation::Equal
        );
        assert_eq!(
            m.compare_values(&AttributeValue::NotApplicable, &AttributeValue::Undefined),
            Relation::Subset
        );
        assert_eq!(
            m.compare_values(&reader, &AttributeValue::Undefined),
            Relation::Subset
        );
    }

    #[test]
    fn test_logical_values() {
        let m = Matcher::default();
        assert_eq!(m.compare_values(&logical("a"), &logical("a")), Relation::Equal);
        assert_eq!(
            m.compare_values(&logical("Adobe"), &logical("adobe")),
            Relation::Equal
        );
        assert_eq!(
            m.compare_values(&logical("9\\.*"), &logical("9\\.3\\.2")),
            Relation::Superset
        );
        assert_eq!(
            m.compare_values(&logical("9\\.3\\.2"), &logical("9\\.*")),
            Relation::Subset
        );
        assert_eq!(
            m.compare_values(&logical("mac*"), &logical("not")),
            Relation::Disjoint
        );
        assert_eq!(
            m.compare_values(&logical("and"), &logical("not")),
            Relation::Disjoint
        );
        assert_eq!(
            m.compare_values(&logical("8\\.\\*"), &logical("8\\.\\*")),
            Relation::Equal
        );
        assert_eq!(
            m.compare_values(&logical("8\\.*"), &logical("8\\.1*")),
            Relation::Undefined
        );
    }

    #[test]
    fn test_case_sensitive_option() {
        assert!(Matcher::default().options().ignore_case);
        let m = Matcher::new(MatchOptions { ignore_case: false });
        assert!(!m.options().ignore_case);
        assert_eq!(
            m.compare_values(&logical("Adobe"), &logical("adobe")),
            Relation::Disjoint
        );
    }

    #[test]
    fn test_compare_names() {
        let general = wfn("wfn:[part=\"a\", vendor=\"microsoft\", product=\"internet_explorer\"]");
        let specific = wfn(
            "wfn:[part=\"a\", vendor=\"microsoft\", product=\"internet_explorer\", \
             version=\"8\\.0\\.6001\", update=\"beta\"]",
        );
        assert_eq!(compare(&general, &specific), Relation::Superset);
        assert_eq!(compare(&specific, &general), Relation::Subset);
        assert_eq!(compare(&specific, &specific), Relation::Equal);
    }

    #[test]
    fn test_mixed_relations_are_disjoint() {
        let a = wfn("wfn:[part=\"a\", vendor=\"hp\"]");
        let b = wfn("wfn:[part=\"a\", product=\"laserjet\"]");
        assert_eq!(compare(&a, &b), Relation::Disjoint);
    }

    #[test]
    fn test_disjoint_names() {
        let windows = wfn("wfn:[part=\"o\", vendor=\"microsoft\", product=\"windows\"]");
        let compaq = wfn("wfn:[part=\"h\", vendor=\"hp\", product=\"compaq\"]");
        assert_eq!(compare(&windows, &compaq), Relation::Disjoint);
        assert!(Matcher::default().is_disjoint(&windows, &compaq));
    }

    #[test]
    fn test_undefined_names() {
        let a = wfn("wfn:[part=\"a\", version=\"8\\.*\"]");
        let b = wfn("wfn:[part=\"a\", version=\"8\\.1*\"]");
        assert_eq!(compare(&a, &b), Relation::Undefined);
        let c = wfn("wfn:[part=\"o\", version=\"8\\.1*\"]");
        assert_eq!(compare(&a, &c), Relation::Disjoint);
    }

    #[test]
    fn test_predicates() {
        let m = Matcher::default();
        let general = wfn("wfn:[part=\"a\", vendor=\"adobe\"]");
        let specific = wfn("wfn:[part=\"a\", vendor=\"adobe\", product=\"reader\"]");

        assert!(m.is_superset(&general, &specific));
        assert!(!m.is_subset(&general, &specific));
        assert!(m.is_subset(&specific, &general));
        assert!(m.is_subset(&specific, &specific));
        assert!(m.is_superset(&specific, &specific));
        assert!(m.is_equal(&specific, &specific));
        assert!(!m.is_equal(&general, &specific));
        assert!(!m.is_disjoint(&general, &specific));
    }

    #[test]
    fn test_compare_attributes() {
        let m = Matcher::default();
        let a = wfn("wfn:[part=\"a\", vendor=\"adobe\", update=NA]");
        let b = wfn("wfn:[part=\"a\", product=\"reader\", update=NA]");
        let relations = m.compare_attributes(&a, &b);
        assert_eq!(relations[0], (Attribute::Part, Relation::Equal));
        assert_eq!(relations[1], (Attribute::Vendor, Relation::Subset));
        assert_eq!(relations[2], (Attribute::Product, Relation::Superset));
        assert_eq!(relations[4], (Attribute::Update, Relation::Equal));
        assert_eq!(relations[10], (Attribute::Other, Relation::Equal));
    }

    #[test]
    fn test_relation_inverse_and_display() {
        assert_eq!(Relation::Subset.inverse(), Relation::Superset);
        assert_eq!(Relation::Disjoint.inverse(), Relation::Disjoint);
        assert_eq!(Relation::Superset.to_string(), "superset");
    }
}
