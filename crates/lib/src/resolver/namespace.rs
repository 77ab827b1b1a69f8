//! Assembly of the merged, fully-qualified option maps.

use std::sync::Arc;

use tracing::debug;

use super::{ModuleResolver, RepositoryResolver};
use crate::module::Module;
use crate::option::OptionMap;
use crate::repository::Repository;

/// The option namespace of every loaded repository and published module.
///
/// Built once after the declaration pass; the resolvers it hands out share
/// its maps and never modify them.
#[derive(Debug, Clone, Default)]
pub struct Namespace {
  repository_options: Arc<OptionMap>,
  module_options: Arc<OptionMap>,
}

impl Namespace {
  /// Collect `repo:option` and `repo:module:option` entries from the given
  /// repositories and their published modules.
  ///
  /// Option values are copied, so later overwrites on the repositories are
  /// not visible through this namespace.
  pub fn from_repositories<'a>(repositories: impl IntoIterator<Item = &'a Repository>) -> Self {
    let mut repository_options = OptionMap::new();
    let mut module_options = OptionMap::new();

    for repository in repositories {
      repository_options.extend(
        repository
          .qualified_options()
          .map(|(key, option)| (key, option.clone())),
      );
      module_options.extend(
        repository
          .modules()
          .flat_map(|module| module.qualified_options())
          .map(|(key, option)| (key, option.clone())),
      );
    }

    debug!(
      repository_options = repository_options.len(),
      module_options = module_options.len(),
      "assembled option namespace"
    );

    Self {
      repository_options: Arc::new(repository_options),
      module_options: Arc::new(module_options),
    }
  }

  pub fn repository_options(&self) -> &OptionMap {
    &self.repository_options
  }

  pub fn module_options(&self) -> &OptionMap {
    &self.module_options
  }

  /// Resolver owned by `repository`.
  pub fn repository_resolver(&self, repository: &Repository) -> RepositoryResolver {
    RepositoryResolver::new(repository, Arc::clone(&self.repository_options))
  }

  /// Resolver owned by `module` of `repository`.
  pub fn module_resolver(&self, repository: &Repository, module: &Module) -> ModuleResolver {
    ModuleResolver::new(
      repository,
      module,
      Arc::clone(&self.repository_options),
      Arc::clone(&self.module_options),
    )
  }
}
