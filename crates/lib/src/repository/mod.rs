//! Repository declaration.
//!
//! A repository groups modules and declares repository-wide options. It is
//! declared through a [`RepositoryBuilder`], which records options and module
//! declaration files, and is frozen with [`RepositoryBuilder::finalize`] into a
//! [`Repository`]. Modules are then built against the finished repository and
//! published back into it.
//!
//! # Submodules
//!
//! - `discover` - Registration of module declaration files (explicit, glob, directory walk)

mod discover;
mod types;

pub use types::*;
