//! cpename Core - CPE 2.3 names and their bindings
//!
//! This crate provides the naming half of the CPE 2.3 specification:
//! - `Attribute`, `AttributeValue`: the eleven attributes and their values
//! - `grammar`: the WFN attribute-value grammar validator
//! - `Name`: the fixed-arity name container
//! - `binding`: bind/unbind between `Name` and WFN, FS, URI 2.3 and URI 2.2

pub mod attribute;
pub mod binding;
pub mod error;
pub mod grammar;
pub mod name;

// Re-export commonly used types at crate root
pub use attribute::{Attribute, AttributeValue, LogicalValue, Token};
pub use binding::{bind, convert, unbind, Encoding};
pub use error::{Error, Result};
pub use name::{Name, NameBuilder};
