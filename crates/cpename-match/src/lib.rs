//! cpename Match - set relations between CPE names
//!
//! This crate provides the CPE 2.3 name matching algorithm:
//! - Pairwise attribute comparison with wildcard support
//! - Whole-name relation (equal, subset, superset, disjoint, undefined)
//! - `NameSet` for matching a candidate against known names

pub mod matcher;
pub mod pattern;
pub mod set;

pub use matcher::{compare, MatchOptions, Matcher, Relation};
pub use set::NameSet;
