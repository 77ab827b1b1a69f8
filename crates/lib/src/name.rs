//! Module names and qualified option keys.
//!
//! ```text
//! module-name       = ident ":" ident
//! repo-option-key   = [ident] ":" ident
//! module-option-key = [ident] ":" [ident] ":" ident
//! ```
//!
//! An `ident` is any text without `:`. The checks here are purely syntactic;
//! whether the named repository or module exists is decided later.

use crate::consts::KEY_SEPARATOR;
use crate::error::{ConfigError, Result};

/// Check that `name` has the form `repository:module`.
pub fn verify_module_name(name: &str) -> Result<()> {
  parse_module_name(name).map(|_| ())
}

/// Split a module name into its repository and module parts.
pub fn parse_module_name(name: &str) -> Result<(&str, &str)> {
  let mut parts = name.split(KEY_SEPARATOR);
  match (parts.next(), parts.next(), parts.next()) {
    (Some(repository), Some(module), None) => Ok((repository, module)),
    _ => Err(ConfigError::MalformedModuleName { name: name.to_string() }),
  }
}

/// Join segments into a qualified name.
pub fn qualify<S: AsRef<str>>(segments: &[S]) -> String {
  let mut joined = String::new();
  for (i, segment) in segments.iter().enumerate() {
    if i > 0 {
      joined.push(KEY_SEPARATOR);
    }
    joined.push_str(segment.as_ref());
  }
  joined
}

/// Split a qualified key on the separator.
pub fn split_key(key: &str) -> Vec<&str> {
  key.split(KEY_SEPARATOR).collect()
}
