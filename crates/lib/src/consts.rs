/// Separator between the segments of module names and qualified option keys.
pub const KEY_SEPARATOR: char = ':';

/// File name searched for by [`RepositoryBuilder::find_modules`](crate::repository::RepositoryBuilder::find_modules)
/// when no other name is given.
pub const DEFAULT_MODULE_FILE: &str = "module.lb";
