//! Resolvers as Lua userdata.
//!
//! Module functions receive a resolver and query it from Lua:
//!
//! ```lua
//! local arch = options:lookup(":arch")
//! local baud = options:lookup("::baudrate")
//! print(#options, tostring(options))
//! ```

use mlua::prelude::*;

use super::{ModuleResolver, OptionResolver, RepositoryResolver};

fn add_resolver_methods<R, M>(methods: &mut M)
where
  R: OptionResolver + 'static,
  M: LuaUserDataMethods<R>,
{
  methods.add_method("lookup", |_, this, key: String| {
    this.lookup(&key).cloned().map_err(LuaError::external)
  });

  methods.add_method("size", |_, this, ()| Ok(this.size()));

  // Plain table of current values; unset options are absent.
  methods.add_method("describe", |lua, this, ()| {
    let table = lua.create_table()?;
    for (key, value) in this.describe().values() {
      table.set(key, value)?;
    }
    Ok(table)
  });

  methods.add_meta_method(LuaMetaMethod::Len, |_, this, ()| Ok(this.size()));

  methods.add_meta_method(LuaMetaMethod::ToString, |_, this, ()| {
    this.describe_json().map_err(LuaError::external)
  });
}

impl LuaUserData for RepositoryResolver {
  fn add_fields<F: LuaUserDataFields<Self>>(fields: &mut F) {
    fields.add_field_method_get("repository", |_, this| Ok(this.repository_name().to_string()));
  }

  fn add_methods<M: LuaUserDataMethods<Self>>(methods: &mut M) {
    add_resolver_methods(methods);
  }
}

impl LuaUserData for ModuleResolver {
  fn add_fields<F: LuaUserDataFields<Self>>(fields: &mut F) {
    fields.add_field_method_get("repository", |_, this| Ok(this.repository_name().to_string()));
    fields.add_field_method_get("module", |_, this| Ok(this.module_name().to_string()));
  }

  fn add_methods<M: LuaUserDataMethods<Self>>(methods: &mut M) {
    add_resolver_methods(methods);
  }
}
