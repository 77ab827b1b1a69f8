use std::fs;
use std::path::Path;

use modcfg_lib::{ModuleBuilder, Repository, RepositoryBuilder, Result};
use tempfile::TempDir;

/// Temporary repository directory with an empty `module.lb` in each of `modules`.
pub fn module_tree(modules: &[&str]) -> TempDir {
  let dir = TempDir::new().unwrap();
  for module in modules {
    let module_dir = dir.path().join(module);
    fs::create_dir_all(&module_dir).unwrap();
    fs::write(module_dir.join("module.lb"), "").unwrap();
  }
  dir
}

/// Declare the `core` repository rooted at `root`:
///
/// - repository option `arch` = "avr"
/// - module `core:uart` with `baudrate` = 9600, depending on `core:gpio`
/// - module `core:gpio` without options
pub fn core_repository(root: &Path) -> Result<Repository> {
  let mut builder = RepositoryBuilder::new(root);
  builder.set_name("core");
  builder.add_option("arch", "Target architecture", "avr")?;
  builder.find_modules("")?;

  let mut repository = builder.finalize()?;

  let mut uart = ModuleBuilder::new(&repository, root.join("uart/module.lb"));
  uart.set_name("uart");
  uart.set_description("Serial port");
  uart.add_numeric_option("baudrate", "Line speed", 9600)?;
  uart.depends("core:gpio")?;
  repository.publish_module(uart.finalize()?)?;

  let mut gpio = ModuleBuilder::new(&repository, root.join("gpio/module.lb"));
  gpio.set_name("gpio");
  repository.publish_module(gpio.finalize()?)?;

  Ok(repository)
}
