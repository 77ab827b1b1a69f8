use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::module::Module;
use crate::name::qualify;
use crate::option::{ConfigOption, OptionKind, OptionMap, OptionValue};

/// Mutable repository declaration, filled in by the declaration executor.
#[derive(Debug, Clone)]
pub struct RepositoryBuilder {
  /// Base directory for relative paths in the declaration.
  pub(super) path: PathBuf,
  pub(super) name: Option<String>,
  pub(super) options: OptionMap,
  /// Registered module declaration files, not yet declared.
  pub(super) module_files: BTreeSet<PathBuf>,
}

impl RepositoryBuilder {
  /// Start a repository declaration rooted at `path`.
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self {
      path: path.into(),
      name: None,
      options: OptionMap::new(),
      module_files: BTreeSet::new(),
    }
  }

  pub fn set_name(&mut self, name: impl Into<String>) {
    let name = name.into();
    debug!(repository = %name, path = %self.path.display(), "set repository name");
    self.name = Some(name);
  }

  pub fn name(&self) -> Option<&str> {
    self.name.as_deref()
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  pub fn options(&self) -> &OptionMap {
    &self.options
  }

  /// Module declaration files registered so far.
  pub fn module_files(&self) -> impl Iterator<Item = &Path> {
    self.module_files.iter().map(PathBuf::as_path)
  }

  /// Declare a repository-wide option.
  ///
  /// These options can be used by modules to decide whether they are available
  /// and which options they provide.
  pub fn add_option(&mut self, name: &str, description: &str, default: impl Into<OptionValue>) -> Result<()> {
    self.declare(OptionKind::Generic, name, description, default.into())
  }

  pub fn add_boolean_option(&mut self, name: &str, description: &str, default: impl Into<OptionValue>) -> Result<()> {
    self.declare(OptionKind::Boolean, name, description, default.into())
  }

  pub fn add_numeric_option(&mut self, name: &str, description: &str, default: impl Into<OptionValue>) -> Result<()> {
    self.declare(OptionKind::Numeric, name, description, default.into())
  }

  fn declare(&mut self, kind: OptionKind, name: &str, description: &str, default: OptionValue) -> Result<()> {
    let scope = self.scope();
    self.options.declare(&scope, kind, name, description, default)
  }

  fn scope(&self) -> String {
    match &self.name {
      Some(name) => format!("repository '{}'", name),
      None => format!("repository at '{}'", self.path.display()),
    }
  }

  /// Freeze the declaration.
  ///
  /// Every registered module file becomes an empty slot in the finished
  /// repository, to be filled by [`Repository::publish_module`].
  pub fn finalize(self) -> Result<Repository> {
    let name = self.name.ok_or_else(|| ConfigError::MissingName {
      scope: format!("Repository at '{}'", self.path.display()),
    })?;

    debug!(
      repository = %name,
      options = self.options.len(),
      modules = self.module_files.len(),
      "finalized repository"
    );

    Ok(Repository {
      name,
      path: self.path,
      options: self.options,
      modules: self.module_files.into_iter().map(|file| (file, None)).collect(),
    })
  }
}

/// A finished repository declaration.
///
/// Only option values and the module slots can change after finalization.
#[derive(Debug, Clone)]
pub struct Repository {
  name: String,
  path: PathBuf,
  options: OptionMap,
  /// Declaration file -> module, `None` until the file has been declared.
  modules: BTreeMap<PathBuf, Option<Module>>,
}

impl Repository {
  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  pub fn options(&self) -> &OptionMap {
    &self.options
  }

  pub fn option(&self, name: &str) -> Option<&ConfigOption> {
    self.options.get(name)
  }

  /// Overwrite the value of a repository option.
  pub fn set_option_value(&mut self, name: &str, value: impl Into<OptionValue>) -> Result<()> {
    match self.options.get_mut(name) {
      Some(option) => option.set_value(value),
      None => Err(ConfigError::UnknownOption {
        key: qualify(&[self.name.as_str(), name]),
      }),
    }
  }

  /// Repository options keyed by `repo:option`.
  pub fn qualified_options(&self) -> impl Iterator<Item = (String, &ConfigOption)> {
    self
      .options
      .iter()
      .map(|(name, option)| (qualify(&[self.name.as_str(), name]), option))
  }

  /// All registered module declaration files.
  pub fn module_files(&self) -> impl Iterator<Item = &Path> {
    self.modules.keys().map(PathBuf::as_path)
  }

  /// Registered files that have no published module yet.
  pub fn pending_modules(&self) -> impl Iterator<Item = &Path> {
    self
      .modules
      .iter()
      .filter(|(_, module)| module.is_none())
      .map(|(file, _)| file.as_path())
  }

  /// Published modules, ordered by declaration file.
  pub fn modules(&self) -> impl Iterator<Item = &Module> {
    self.modules.values().flatten()
  }

  /// Look up a published module by its short name.
  pub fn module(&self, name: &str) -> Option<&Module> {
    self.modules().find(|module| module.name() == name)
  }

  pub fn module_mut(&mut self, name: &str) -> Option<&mut Module> {
    self.modules.values_mut().flatten().find(|module| module.name() == name)
  }

  /// Store a finished module in the slot of its declaration file.
  ///
  /// The file must have been registered while declaring the repository, and
  /// the module name must not be used by another module of this repository.
  pub fn publish_module(&mut self, module: Module) -> Result<()> {
    if !self.modules.contains_key(module.filename()) {
      return Err(ConfigError::UnregisteredModuleFile {
        repository: self.name.clone(),
        path: module.filename().to_path_buf(),
      });
    }

    let taken = self.modules.iter().any(|(file, existing)| {
      file != module.filename() && existing.as_ref().is_some_and(|m| m.name() == module.name())
    });
    if taken {
      return Err(ConfigError::DuplicateModule {
        repository: self.name.clone(),
        name: module.name().to_string(),
      });
    }

    debug!(module = %module.full_name(), file = %module.filename().display(), "published module");
    self.modules.insert(module.filename().to_path_buf(), Some(module));
    Ok(())
  }
}
