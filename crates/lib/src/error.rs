//! Error types for declaration and option resolution.
//!
//! Every failure in this crate is fatal to the declaration step or lookup that
//! caused it. Nothing is caught or logged here; errors propagate to the caller,
//! which is expected to abort the enclosing build step and show the message.

use std::path::PathBuf;

use thiserror::Error;

use crate::option::OptionKind;

/// Errors raised while declaring repositories and modules or resolving options.
#[derive(Debug, Error)]
pub enum ConfigError {
  /// A qualified option key has the wrong number of colons for the resolver.
  #[error(
    "Invalid option format for '{key}'. Option must contain one (repository option) or two (module option) colons."
  )]
  OptionFormat { key: String },

  #[error("Option name '{name}' is already defined in {scope}")]
  DuplicateOption { scope: String, name: String },

  #[error("Unknown option name '{key}'")]
  UnknownOption { key: String },

  #[error("Module name '{name}' must contain exactly one ':' as separator between repository and module name")]
  MalformedModuleName { name: String },

  #[error("Option name '{name}' must not contain ':'")]
  InvalidOptionName { name: String },

  #[error("Invalid value '{value}' for {kind} option '{name}'")]
  InvalidValue {
    name: String,
    kind: OptionKind,
    value: String,
  },

  #[error("Module file not found '{}'", path.display())]
  ModuleFileNotFound { path: PathBuf },

  #[error("Module file '{}' is not registered in repository '{repository}'", path.display())]
  UnregisteredModuleFile { repository: String, path: PathBuf },

  #[error("Module '{name}' is already defined in repository '{repository}'")]
  DuplicateModule { repository: String, name: String },

  #[error("{scope} declaration has no name")]
  MissingName { scope: String },

  #[error("invalid glob pattern: {0}")]
  Pattern(#[from] glob::PatternError),

  #[error("glob error: {0}")]
  Glob(#[from] glob::GlobError),

  #[error("directory walk failed: {0}")]
  Walk(#[from] walkdir::Error),
}

impl ConfigError {
  /// Whether this is the option-key format error rather than a generic
  /// configuration error.
  pub fn is_format_error(&self) -> bool {
    matches!(self, ConfigError::OptionFormat { .. })
  }
}

/// Result type for declaration and resolution operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
