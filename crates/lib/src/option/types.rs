use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::consts::KEY_SEPARATOR;
use crate::error::{ConfigError, Result};

/// How an option validates and coerces values assigned to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
  /// Any value is stored unchanged.
  #[default]
  Generic,
  /// `true`/`false`, `yes`/`no`, `on`/`off` or `1`/`0`.
  Boolean,
  /// Integers and floats, or strings that parse as one.
  Numeric,
}

impl OptionKind {
  pub fn as_str(&self) -> &'static str {
    match self {
      OptionKind::Generic => "generic",
      OptionKind::Boolean => "boolean",
      OptionKind::Numeric => "numeric",
    }
  }

  /// Validate `value` for an option of this kind and convert it to the kind's
  /// canonical representation.
  ///
  /// [`OptionValue::Unset`] is accepted by every kind.
  pub fn coerce(self, name: &str, value: OptionValue) -> Result<OptionValue> {
    let invalid = |value: &OptionValue| ConfigError::InvalidValue {
      name: name.to_string(),
      kind: self,
      value: value.to_string(),
    };

    match self {
      OptionKind::Generic => Ok(value),
      OptionKind::Boolean => match value {
        OptionValue::Unset | OptionValue::Boolean(_) => Ok(value),
        OptionValue::Integer(0) => Ok(OptionValue::Boolean(false)),
        OptionValue::Integer(1) => Ok(OptionValue::Boolean(true)),
        OptionValue::String(ref s) => match s.trim().to_ascii_lowercase().as_str() {
          "true" | "yes" | "on" | "1" => Ok(OptionValue::Boolean(true)),
          "false" | "no" | "off" | "0" => Ok(OptionValue::Boolean(false)),
          _ => Err(invalid(&value)),
        },
        _ => Err(invalid(&value)),
      },
      OptionKind::Numeric => match value {
        OptionValue::Unset | OptionValue::Integer(_) | OptionValue::Float(_) => Ok(value),
        OptionValue::String(ref s) => {
          let text = s.trim();
          if let Ok(n) = text.parse::<i64>() {
            Ok(OptionValue::Integer(n))
          } else if let Some(f) = text.parse::<f64>().ok().filter(|f| f.is_finite()) {
            Ok(OptionValue::Float(f))
          } else {
            Err(invalid(&value))
          }
        }
        OptionValue::Boolean(_) => Err(invalid(&value)),
      },
    }
  }
}

impl fmt::Display for OptionKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// The value held by an option.
///
/// Serializes untagged, so `describe()` output renders as plain JSON scalars
/// with `Unset` as `null`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
  #[default]
  Unset,
  Boolean(bool),
  Integer(i64),
  Float(f64),
  String(String),
}

impl OptionValue {
  pub fn is_unset(&self) -> bool {
    matches!(self, OptionValue::Unset)
  }
}

impl fmt::Display for OptionValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      OptionValue::Unset => Ok(()),
      OptionValue::Boolean(b) => write!(f, "{}", b),
      OptionValue::Integer(n) => write!(f, "{}", n),
      OptionValue::Float(x) => write!(f, "{}", x),
      OptionValue::String(s) => f.write_str(s),
    }
  }
}

impl From<&str> for OptionValue {
  fn from(value: &str) -> Self {
    OptionValue::String(value.to_string())
  }
}

impl From<String> for OptionValue {
  fn from(value: String) -> Self {
    OptionValue::String(value)
  }
}

impl From<bool> for OptionValue {
  fn from(value: bool) -> Self {
    OptionValue::Boolean(value)
  }
}

impl From<i64> for OptionValue {
  fn from(value: i64) -> Self {
    OptionValue::Integer(value)
  }
}

impl From<i32> for OptionValue {
  fn from(value: i32) -> Self {
    OptionValue::Integer(value.into())
  }
}

impl From<u32> for OptionValue {
  fn from(value: u32) -> Self {
    OptionValue::Integer(value.into())
  }
}

impl From<f64> for OptionValue {
  fn from(value: f64) -> Self {
    OptionValue::Float(value)
  }
}

impl<T: Into<OptionValue>> From<Option<T>> for OptionValue {
  fn from(value: Option<T>) -> Self {
    value.map(Into::into).unwrap_or_default()
  }
}

/// A named configuration option declared by a repository or module.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigOption {
  name: String,
  description: String,
  kind: OptionKind,
  default: OptionValue,
  value: OptionValue,
}

impl ConfigOption {
  /// Create an option whose current value starts out as its (coerced) default.
  pub fn with_kind(
    kind: OptionKind,
    name: impl Into<String>,
    description: impl Into<String>,
    default: impl Into<OptionValue>,
  ) -> Result<Self> {
    let name = name.into();
    if name.contains(KEY_SEPARATOR) {
      return Err(ConfigError::InvalidOptionName { name });
    }

    let default = kind.coerce(&name, default.into())?;
    Ok(Self {
      name,
      description: description.into(),
      kind,
      value: default.clone(),
      default,
    })
  }

  pub fn generic(
    name: impl Into<String>,
    description: impl Into<String>,
    default: impl Into<OptionValue>,
  ) -> Result<Self> {
    Self::with_kind(OptionKind::Generic, name, description, default)
  }

  pub fn boolean(
    name: impl Into<String>,
    description: impl Into<String>,
    default: impl Into<OptionValue>,
  ) -> Result<Self> {
    Self::with_kind(OptionKind::Boolean, name, description, default)
  }

  pub fn numeric(
    name: impl Into<String>,
    description: impl Into<String>,
    default: impl Into<OptionValue>,
  ) -> Result<Self> {
    Self::with_kind(OptionKind::Numeric, name, description, default)
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn description(&self) -> &str {
    &self.description
  }

  pub fn kind(&self) -> OptionKind {
    self.kind
  }

  pub fn default_value(&self) -> &OptionValue {
    &self.default
  }

  pub fn value(&self) -> &OptionValue {
    &self.value
  }

  /// Assign a new value, coercing it according to the option's kind.
  ///
  /// On error the current value is left as it was.
  pub fn set_value(&mut self, value: impl Into<OptionValue>) -> Result<()> {
    self.value = self.kind.coerce(&self.name, value.into())?;
    Ok(())
  }

  /// Restore the declared default.
  pub fn reset(&mut self) {
    self.value = self.default.clone();
  }
}

/// Options keyed by name.
///
/// Scope-local maps are keyed by bare option names. Maps handed to resolvers
/// are keyed by qualified names (`repo:option` or `repo:module:option`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct OptionMap(BTreeMap<String, ConfigOption>);

impl OptionMap {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn contains_key(&self, key: &str) -> bool {
    self.0.contains_key(key)
  }

  pub fn get(&self, key: &str) -> Option<&ConfigOption> {
    self.0.get(key)
  }

  pub fn get_mut(&mut self, key: &str) -> Option<&mut ConfigOption> {
    self.0.get_mut(key)
  }

  pub fn insert(&mut self, key: impl Into<String>, option: ConfigOption) -> Option<ConfigOption> {
    self.0.insert(key.into(), option)
  }

  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.0.keys().map(String::as_str)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigOption)> {
    self.0.iter().map(|(k, v)| (k.as_str(), v))
  }

  /// Copy every entry of `other` into this map, replacing entries with the
  /// same key.
  pub fn overlay(&mut self, other: &OptionMap) {
    self.0.extend(other.0.iter().map(|(k, v)| (k.clone(), v.clone())));
  }

  /// Current value of every entry, for display.
  pub fn values(&self) -> BTreeMap<String, OptionValue> {
    self.0.iter().map(|(k, v)| (k.clone(), v.value().clone())).collect()
  }

  /// Assign a new value to the option stored under `key`.
  pub fn set_value(&mut self, key: &str, value: impl Into<OptionValue>) -> Result<()> {
    let option = self.0.get_mut(key).ok_or_else(|| ConfigError::UnknownOption {
      key: key.to_string(),
    })?;
    option.set_value(value)
  }

  /// Declare a new option in a scope-local map.
  ///
  /// The name is checked for duplicates before the option is constructed, so
  /// a failed declaration never modifies the map.
  pub(crate) fn declare(
    &mut self,
    scope: &str,
    kind: OptionKind,
    name: &str,
    description: &str,
    default: OptionValue,
  ) -> Result<()> {
    if self.0.contains_key(name) {
      return Err(ConfigError::DuplicateOption {
        scope: scope.to_string(),
        name: name.to_string(),
      });
    }

    let option = ConfigOption::with_kind(kind, name, description, default)?;
    debug!(scope = %scope, option = %name, kind = %kind, "declared option");
    self.0.insert(name.to_string(), option);
    Ok(())
  }
}

impl FromIterator<(String, ConfigOption)> for OptionMap {
  fn from_iter<I: IntoIterator<Item = (String, ConfigOption)>>(iter: I) -> Self {
    Self(iter.into_iter().collect())
  }
}

impl Extend<(String, ConfigOption)> for OptionMap {
  fn extend<I: IntoIterator<Item = (String, ConfigOption)>>(&mut self, iter: I) {
    self.0.extend(iter);
  }
}
