//! Normalisation of "one or many" declaration arguments.
//!
//! Declaration calls such as `depends` and `add_modules` accept either a single
//! item or a sequence of items. [`Listify`] turns both shapes into a `Vec`,
//! keeping the order of a sequence unchanged.

use std::path::{Path, PathBuf};

/// Conversion of a single item or a sequence into a list of `T`.
pub trait Listify<T> {
  fn listify(self) -> Vec<T>;
}

/// Return `[x]` for a single item, or the items of `x` unchanged.
pub fn listify<T>(x: impl Listify<T>) -> Vec<T> {
  x.listify()
}

impl<T, U: Into<T>> Listify<T> for Vec<U> {
  fn listify(self) -> Vec<T> {
    self.into_iter().map(Into::into).collect()
  }
}

impl<T, U: Into<T>, const N: usize> Listify<T> for [U; N] {
  fn listify(self) -> Vec<T> {
    self.into_iter().map(Into::into).collect()
  }
}

impl<T, U: Clone + Into<T>> Listify<T> for &[U] {
  fn listify(self) -> Vec<T> {
    self.iter().cloned().map(Into::into).collect()
  }
}

macro_rules! single_item {
  ($target:ty => $($item:ty),+ $(,)?) => {
    $(
      impl Listify<$target> for $item {
        fn listify(self) -> Vec<$target> {
          vec![self.into()]
        }
      }
    )+
  };
}

single_item!(String => &str, String, &String);
single_item!(PathBuf => &str, String, &Path, PathBuf, &PathBuf);
