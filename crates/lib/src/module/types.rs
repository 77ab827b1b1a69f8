use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use mlua::Function;
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::name::{qualify, verify_module_name};
use crate::option::{ConfigOption, OptionKind, OptionMap, OptionValue};
use crate::repository::Repository;
use crate::util::{Listify, paths};

/// Mutable module declaration, filled in by the declaration executor.
#[derive(Debug, Clone)]
pub struct ModuleBuilder {
  /// Name of the owning repository. Only used to derive qualified names.
  repository: String,
  filename: PathBuf,
  path: PathBuf,
  name: Option<String>,
  description: String,
  functions: BTreeMap<String, Function>,
  dependencies: Vec<String>,
  options: OptionMap,
}

impl ModuleBuilder {
  /// Start declaring the module in `filename`.
  ///
  /// A relative `filename` is resolved against the repository directory, the
  /// same way registered module files are. Relative paths inside the
  /// declaration resolve against the directory of `filename`.
  pub fn new(repository: &Repository, filename: impl AsRef<Path>) -> Self {
    let filename = paths::relocate(repository.path(), filename);
    let path = filename
      .parent()
      .map(Path::to_path_buf)
      .unwrap_or_else(|| repository.path().to_path_buf());

    Self {
      repository: repository.name().to_string(),
      filename,
      path,
      name: None,
      description: String::new(),
      functions: BTreeMap::new(),
      dependencies: Vec::new(),
      options: OptionMap::new(),
    }
  }

  pub fn set_name(&mut self, name: impl Into<String>) {
    let name = name.into();
    debug!(repository = %self.repository, module = %name, "set module name");
    self.name = Some(name);
  }

  pub fn name(&self) -> Option<&str> {
    self.name.as_deref()
  }

  /// `repository:module`, once a name has been set.
  pub fn full_name(&self) -> Option<String> {
    self
      .name
      .as_deref()
      .map(|name| qualify(&[self.repository.as_str(), name]))
  }

  pub fn set_description(&mut self, description: impl Into<String>) {
    self.description = description.into();
  }

  pub fn filename(&self) -> &Path {
    &self.filename
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  pub fn dependencies(&self) -> &[String] {
    &self.dependencies
  }

  pub fn options(&self) -> &OptionMap {
    &self.options
  }

  /// Declare a module option.
  ///
  /// Module options only influence the build of the module, not the selection
  /// of modules or their dependencies.
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
    match self.full_name() {
      Some(full_name) => format!("module '{}'", full_name),
      None => format!("module at '{}'", self.filename.display()),
    }
  }

  /// Add one or more dependencies, each of the form `repository:module`.
  ///
  /// Dependencies are appended in argument order. Duplicates are kept; the
  /// names are not checked against the loaded repositories here. If any name
  /// is malformed none of them are added.
  pub fn depends(&mut self, dependencies: impl Listify<String>) -> Result<()> {
    let dependencies = dependencies.listify();
    for dependency in &dependencies {
      verify_module_name(dependency)?;
    }

    debug!(scope = %self.scope(), ?dependencies, "declared dependencies");
    self.dependencies.extend(dependencies);
    Ok(())
  }

  /// Attach an implementation for one of the functions the module
  /// declaration provides.
  pub fn set_function(&mut self, name: impl Into<String>, function: Function) {
    self.functions.insert(name.into(), function);
  }

  /// Freeze the declaration.
  pub fn finalize(self) -> Result<Module> {
    let name = self.name.ok_or_else(|| ConfigError::MissingName {
      scope: format!("Module at '{}'", self.filename.display()),
    })?;
    let full_name = qualify(&[self.repository.as_str(), name.as_str()]);

    debug!(
      module = %full_name,
      options = self.options.len(),
      dependencies = self.dependencies.len(),
      "finalized module"
    );

    Ok(Module {
      repository: self.repository,
      name,
      full_name,
      filename: self.filename,
      path: self.path,
      description: self.description,
      functions: self.functions,
      dependencies: self.dependencies,
      options: self.options,
    })
  }
}

/// A finished module declaration.
///
/// Only option values can change after finalization.
#[derive(Debug, Clone)]
pub struct Module {
  repository: String,
  name: String,
  full_name: String,
  filename: PathBuf,
  path: PathBuf,
  description: String,
  functions: BTreeMap<String, Function>,
  dependencies: Vec<String>,
  options: OptionMap,
}

impl Module {
  /// Name of the repository this module belongs to.
  pub fn repository_name(&self) -> &str {
    &self.repository
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn full_name(&self) -> &str {
    &self.full_name
  }

  pub fn filename(&self) -> &Path {
    &self.filename
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  pub fn description(&self) -> &str {
    &self.description
  }

  pub fn dependencies(&self) -> &[String] {
    &self.dependencies
  }

  pub fn function(&self, name: &str) -> Option<&Function> {
    self.functions.get(name)
  }

  pub fn function_names(&self) -> impl Iterator<Item = &str> {
    self.functions.keys().map(String::as_str)
  }

  pub fn options(&self) -> &OptionMap {
    &self.options
  }

  pub fn option(&self, name: &str) -> Option<&ConfigOption> {
    self.options.get(name)
  }

  /// Overwrite the value of a module option.
  pub fn set_option_value(&mut self, name: &str, value: impl Into<OptionValue>) -> Result<()> {
    match self.options.get_mut(name) {
      Some(option) => option.set_value(value),
      None => Err(ConfigError::UnknownOption {
        key: qualify(&[self.full_name.as_str(), name]),
      }),
    }
  }

  /// Module options keyed by `repo:module:option`.
  pub fn qualified_options(&self) -> impl Iterator<Item = (String, &ConfigOption)> {
    self
      .options
      .iter()
      .map(|(name, option)| (qualify(&[self.full_name.as_str(), name]), option))
  }
}
