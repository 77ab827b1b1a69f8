//! Lua conversions for option values.
//!
//! Declaration scripts pass defaults and overrides as plain Lua scalars; `nil`
//! maps to [`OptionValue::Unset`].

use mlua::prelude::*;

use super::OptionValue;

impl FromLua for OptionValue {
  fn from_lua(value: LuaValue, _lua: &Lua) -> LuaResult<Self> {
    match value {
      LuaValue::Nil => Ok(OptionValue::Unset),
      LuaValue::Boolean(b) => Ok(OptionValue::Boolean(b)),
      LuaValue::Integer(n) => Ok(OptionValue::Integer(n)),
      LuaValue::Number(n) => Ok(OptionValue::Float(n)),
      LuaValue::String(s) => Ok(OptionValue::String(s.to_str()?.to_string())),
      _ => Err(LuaError::FromLuaConversionError {
        from: value.type_name(),
        to: "OptionValue".to_string(),
        message: Some("expected nil, boolean, number, or string".to_string()),
      }),
    }
  }
}

impl IntoLua for OptionValue {
  fn into_lua(self, lua: &Lua) -> LuaResult<LuaValue> {
    match self {
      OptionValue::Unset => Ok(LuaValue::Nil),
      OptionValue::Boolean(b) => Ok(LuaValue::Boolean(b)),
      OptionValue::Integer(n) => Ok(LuaValue::Integer(n)),
      OptionValue::Float(n) => Ok(LuaValue::Number(n)),
      OptionValue::String(s) => Ok(LuaValue::String(lua.create_string(&s)?)),
    }
  }
}
