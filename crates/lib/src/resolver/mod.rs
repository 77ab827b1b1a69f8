//! Option namespace resolution.
//!
//! A resolver answers lookups of qualified option keys on behalf of one
//! repository or one module. Empty leading segments of a key refer to the
//! resolver's own repository or module:
//!
//! - `[repo]:option` - repository option (one colon)
//! - `[repo]:[module]:option` - module option (two colons)
//!
//! Resolvers read fully-qualified option maps merged across every loaded
//! repository; see [`Namespace`] for assembling them.
//!
//! # Submodules
//!
//! - [`lua`] - Resolvers as Lua userdata for script-side consumers

pub mod lua;
mod namespace;
mod types;

pub use namespace::Namespace;
pub use types::*;
