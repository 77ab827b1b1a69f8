//! Registration of module declaration files.

use std::path::{Path, PathBuf};

use glob::MatchOptions;
use tracing::debug;
use walkdir::WalkDir;

use super::RepositoryBuilder;
use crate::consts::DEFAULT_MODULE_FILE;
use crate::error::{ConfigError, Result};
use crate::util::{Listify, paths};

impl RepositoryBuilder {
  /// Resolve `path` relative to the repository directory.
  pub fn relocate(&self, path: impl AsRef<Path>) -> PathBuf {
    paths::relocate(&self.path, path)
  }

  /// Paths matching a glob pattern relative to the repository directory.
  ///
  /// Wildcards do not match a leading `.`; hidden entries only match a
  /// pattern that names the dot literally.
  pub fn glob(&self, pattern: &str) -> Result<Vec<PathBuf>> {
    let pattern = self.relocate(pattern);
    let options = MatchOptions {
      require_literal_leading_dot: true,
      ..MatchOptions::default()
    };
    let mut matches = Vec::new();
    for entry in glob::glob_with(&pattern.to_string_lossy(), options)? {
      matches.push(entry?);
    }
    Ok(matches)
  }

  /// Register one or more module declaration files.
  ///
  /// All files must exist. If any is missing nothing is registered.
  pub fn add_modules(&mut self, modules: impl Listify<PathBuf>) -> Result<()> {
    let files: Vec<PathBuf> = modules.listify().into_iter().map(|f| self.relocate(f)).collect();

    if let Some(missing) = files.iter().find(|file| !file.is_file()) {
      return Err(ConfigError::ModuleFileNotFound { path: missing.clone() });
    }

    for file in files {
      debug!(file = %file.display(), "registered module file");
      self.module_files.insert(file);
    }
    Ok(())
  }

  /// Register every `module.lb` below `basepath`.
  pub fn find_modules(&mut self, basepath: impl AsRef<Path>) -> Result<usize> {
    self.find_modules_named(basepath, DEFAULT_MODULE_FILE)
  }

  /// Register every file called `modulefile` below `basepath`.
  ///
  /// Symlinks to files are registered; symlinked directories are not entered.
  /// A missing `basepath` registers nothing. Returns the number of files found.
  pub fn find_modules_named(&mut self, basepath: impl AsRef<Path>, modulefile: &str) -> Result<usize> {
    let basepath = self.relocate(basepath);
    if !basepath.is_dir() {
      debug!(basepath = %basepath.display(), "module search skipped, no such directory");
      return Ok(0);
    }

    let mut found = 0;
    for entry in WalkDir::new(&basepath).sort_by_file_name() {
      let entry = entry?;
      let is_file = entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file());
      if is_file && entry.file_name() == modulefile {
        let file = paths::normalize_path(entry.path());
        debug!(file = %file.display(), "found module file");
        self.module_files.insert(file);
        found += 1;
      }
    }

    debug!(basepath = %basepath.display(), modulefile, found, "module search finished");
    Ok(found)
  }
}
