//! Lexical path handling for repository-relative declarations.

use std::path::{Component, Path, PathBuf};

/// Resolve `path` against `base` unless it is already absolute, then normalise
/// the result.
///
/// ```
/// use modcfg_lib::util::paths::relocate;
/// use std::path::Path;
///
/// let path = relocate(Path::new("/repo/src"), "../ext/./module.lb");
/// assert_eq!(path, Path::new("/repo/ext/module.lb"));
/// ```
pub fn relocate(base: &Path, path: impl AsRef<Path>) -> PathBuf {
  let path = path.as_ref();
  if path.is_absolute() {
    normalize_path(path)
  } else {
    normalize_path(&base.join(path))
  }
}

/// Remove `.` and `..` components without touching the filesystem.
///
/// A `..` at the start of a relative path is kept, since there is nothing to
/// pop.
pub fn normalize_path(path: &Path) -> PathBuf {
  let mut components: Vec<Component<'_>> = Vec::new();

  for component in path.components() {
    match component {
      Component::CurDir => {}
      Component::ParentDir => match components.last() {
        Some(Component::Normal(_)) => {
          components.pop();
        }
        Some(Component::RootDir | Component::Prefix(_)) => {}
        _ => components.push(component),
      },
      other => components.push(other),
    }
  }

  if components.is_empty() {
    return PathBuf::from(".");
  }
  components.iter().collect()
}
