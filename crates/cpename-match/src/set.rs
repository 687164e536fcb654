//! Sets of CPE names

use crate::matcher::Matcher;
use cpename_core::Name;
use std::fmt;
use tracing::debug;

/// An ordered set of names, without duplicates
#[derive(Debug, Clone, Default)]
pub struct NameSet {
    names: Vec<Name>,
    matcher: Matcher,
}

impl NameSet {
    /// Create an empty set using the default matcher
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty set that compares names with `matcher`
    pub fn with_matcher(matcher: Matcher) -> Self {
        Self {
            names: Vec::new(),
            matcher,
        }
    }

    /// Add a name unless an equal one is already in the set
    ///
    /// Returns false when the name was already present.
    pub fn append(&mut self, name: Name) -> bool {
        if self.names.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Name> {
        self.names.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Name> {
        self.names.iter()
    }

    /// True if `candidate` is a superset of (or equal to) any member
    pub fn name_match(&self, candidate: &Name) -> bool {
        let matched = self
            .names
            .iter()
            .any(|member| self.matcher.is_superset(candidate, member));
        debug!("Name {} matches set of {}: {}", candidate, self.len(), matched);
        matched
    }
}

impl fmt::Display for NameSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Set contains {} elements", self.len())?;
        if !self.is_empty() {
            f.write_str(":")?;
            for name in &self.names {
                write!(f, "\n    {}", name)?;
            }
        }
        Ok(())
    }
}

impl FromIterator<Name> for NameSet {
    fn from_iter<I: IntoIterator<Item = Name>>(iter: I) -> Self {
        let mut set = NameSet::new();
        for name in iter {
            set.append(name);
        }
        set
    }
}
