//! modcfg-lib: Configuration core for modular code-generation libraries
//!
//! This crate provides the declaration model and the option namespace:
//! - `Repository`: a named collection of module files with repository-wide options
//! - `Module`: a named, dependency-carrying unit with its own options
//! - `ConfigOption`: a named, described, typed value with a default
//! - `RepositoryResolver`/`ModuleResolver`: qualified-key option lookup
//!
//! Declarations are built with [`RepositoryBuilder`] and [`ModuleBuilder`] and
//! frozen with `finalize()`. Once every module is published, a [`Namespace`]
//! merges the qualified options of all repositories and hands out resolvers.

pub mod consts;
pub mod error;
pub mod module;
pub mod name;
pub mod option;
pub mod repository;
pub mod resolver;
pub mod util;

pub use error::{ConfigError, Result};
pub use module::{Module, ModuleBuilder};
pub use option::{ConfigOption, OptionKind, OptionMap, OptionValue};
pub use repository::{Repository, RepositoryBuilder};
pub use resolver::{ModuleResolver, Namespace, OptionResolver, RepositoryResolver};
