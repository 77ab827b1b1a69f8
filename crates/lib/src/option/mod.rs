//! Typed, defaultable configuration options.
//!
//! Repositories and modules each own a flat [`OptionMap`] keyed by option name.
//! The resolvers read merged maps keyed by fully-qualified names instead; both
//! use the same map type.
//!
//! # Submodules
//!
//! - [`lua`] - Conversion of [`OptionValue`] to and from Lua values

pub mod lua;
mod types;

pub use types::*;
