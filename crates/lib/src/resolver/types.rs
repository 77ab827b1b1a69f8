use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::trace;

use crate::error::{ConfigError, Result};
use crate::module::Module;
use crate::name::{qualify, split_key};
use crate::option::{OptionMap, OptionValue};
use crate::repository::Repository;

/// Lookup of option values by qualified key.
pub trait OptionResolver {
  /// Current value of the option addressed by `key`.
  fn lookup(&self, key: &str) -> Result<&OptionValue>;

  /// Number of options visible to this resolver.
  fn size(&self) -> usize;

  /// All visible options, for diagnostic display.
  fn describe(&self) -> OptionMap;

  /// Current values of [`describe`](OptionResolver::describe) as pretty JSON.
  fn describe_json(&self) -> serde_json::Result<String> {
    let values: BTreeMap<String, OptionValue> = self.describe().values();
    serde_json::to_string_pretty(&values)
  }
}

/// Look up an already split key.
///
/// `context` holds the resolver's own repository (and module) names; an empty
/// segment at the same position is replaced by it. The final segment is the
/// option name and is never substituted.
fn resolve<'m>(options: &'m OptionMap, segments: &[&str], context: &[&str]) -> Result<&'m OptionValue> {
  debug_assert_eq!(segments.len(), context.len() + 1);

  let filled: Vec<&str> = segments
    .iter()
    .enumerate()
    .map(|(i, segment)| match context.get(i) {
      Some(own) if segment.is_empty() => *own,
      _ => *segment,
    })
    .collect();
  let key = qualify(&filled);

  match options.get(&key) {
    Some(option) => {
      trace!(key = %key, value = %option.value(), "resolved option");
      Ok(option.value())
    }
    None => Err(ConfigError::UnknownOption { key }),
  }
}

/// Resolver for repository options (`[repo]:option`).
#[derive(Debug, Clone)]
pub struct RepositoryResolver {
  repository: String,
  options: Arc<OptionMap>,
}

impl RepositoryResolver {
  /// Create a resolver owned by `repository` over the merged repository
  /// option map.
  pub fn new(repository: &Repository, options: impl Into<Arc<OptionMap>>) -> Self {
    Self {
      repository: repository.name().to_string(),
      options: options.into(),
    }
  }

  /// Name substituted for an empty repository segment.
  pub fn repository_name(&self) -> &str {
    &self.repository
  }
}

impl OptionResolver for RepositoryResolver {
  fn lookup(&self, key: &str) -> Result<&OptionValue> {
    let segments = split_key(key);
    if segments.len() != 2 {
      return Err(ConfigError::OptionFormat { key: key.to_string() });
    }
    resolve(&self.options, &segments, &[self.repository.as_str()])
  }

  fn size(&self) -> usize {
    self.options.len()
  }

  fn describe(&self) -> OptionMap {
    self.options.as_ref().clone()
  }
}

/// Resolver for a module, seeing both repository options (`[repo]:option`)
/// and module options (`[repo]:[module]:option`).
#[derive(Debug, Clone)]
pub struct ModuleResolver {
  repository: String,
  module: String,
  repository_options: Arc<OptionMap>,
  module_options: Arc<OptionMap>,
}

impl ModuleResolver {
  /// Create a resolver owned by `module` of `repository` over the merged
  /// repository and module option maps.
  pub fn new(
    repository: &Repository,
    module: &Module,
    repository_options: impl Into<Arc<OptionMap>>,
    module_options: impl Into<Arc<OptionMap>>,
  ) -> Self {
    Self {
      repository: repository.name().to_string(),
      module: module.name().to_string(),
      repository_options: repository_options.into(),
      module_options: module_options.into(),
    }
  }

  pub fn repository_name(&self) -> &str {
    &self.repository
  }

  pub fn module_name(&self) -> &str {
    &self.module
  }
}

impl OptionResolver for ModuleResolver {
  fn lookup(&self, key: &str) -> Result<&OptionValue> {
    let segments = split_key(key);
    match segments.len() {
      2 => resolve(&self.repository_options, &segments, &[self.repository.as_str()]),
      3 => resolve(
        &self.module_options,
        &segments,
        &[self.repository.as_str(), self.module.as_str()],
      ),
      _ => Err(ConfigError::OptionFormat { key: key.to_string() }),
    }
  }

  /// Sum of both map sizes. A key present in both maps counts twice.
  fn size(&self) -> usize {
    self.module_options.len() + self.repository_options.len()
  }

  /// Module options overlaid with repository options.
  ///
  /// Repository entries replace module entries with the same key. This only
  /// affects the display; `lookup` picks the map by colon count.
  fn describe(&self) -> OptionMap {
    let mut merged = self.module_options.as_ref().clone();
    merged.overlay(&self.repository_options);
    merged
  }
}
