//! Module declaration.
//!
//! Each module declaration file registered by a repository yields one
//! [`Module`], built through a [`ModuleBuilder`] against the finished
//! [`Repository`](crate::repository::Repository).

mod types;

pub use types::*;
