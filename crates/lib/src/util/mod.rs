//! Shared utilities.
//!
//! Argument normalisation for the declaration API and lexical path handling
//! used for module discovery.

pub mod listify;
pub mod paths;

pub use listify::{Listify, listify};
