//! Declaring repositories and modules from files on disk.

use std::path::Path;

use modcfg_lib::{ConfigError, ModuleBuilder, OptionKind, OptionValue, RepositoryBuilder};

use super::common::{core_repository, module_tree};

mod repository {
  use super::*;

  #[test]
  fn discovered_files_wait_for_their_modules() {
    let dir = module_tree(&["uart", "gpio", "drivers/lcd"]);
    let mut builder = RepositoryBuilder::new(dir.path());
    builder.set_name("core");
    assert_eq!(builder.find_modules("").unwrap(), 3);

    let repository = builder.finalize().unwrap();
    assert_eq!(repository.pending_modules().count(), 3);
    assert_eq!(repository.modules().count(), 0);
  }

  #[test]
  fn full_declaration_publishes_every_module() {
    let dir = module_tree(&["uart", "gpio"]);
    let repository = core_repository(dir.path()).unwrap();

    assert_eq!(repository.pending_modules().count(), 0);
    let names: Vec<&str> = repository.modules().map(|m| m.full_name()).collect();
    assert_eq!(names, vec!["core:gpio", "core:uart"]);

    let uart = repository.module("uart").unwrap();
    assert_eq!(uart.dependencies(), ["core:gpio"]);
    assert_eq!(uart.path(), dir.path().join("uart"));
    assert_eq!(uart.option("baudrate").unwrap().kind(), OptionKind::Numeric);
  }

  #[test]
  fn module_outside_registered_files_is_rejected() {
    let dir = module_tree(&["uart"]);
    let mut builder = RepositoryBuilder::new(dir.path());
    builder.set_name("core");
    builder.add_modules("uart/module.lb").unwrap();
    let mut repository = builder.finalize().unwrap();

    let mut stray = ModuleBuilder::new(&repository, dir.path().join("spi/module.lb"));
    stray.set_name("spi");
    let err = repository.publish_module(stray.finalize().unwrap()).unwrap_err();
    assert!(matches!(err, ConfigError::UnregisteredModuleFile { .. }));
  }

  #[test]
  fn module_declared_by_relative_filename_fills_its_slot() {
    let dir = module_tree(&["uart"]);
    let mut builder = RepositoryBuilder::new(dir.path());
    builder.set_name("core");
    builder.add_modules("uart/module.lb").unwrap();
    let mut repository = builder.finalize().unwrap();

    let mut uart = ModuleBuilder::new(&repository, "uart/module.lb");
    uart.set_name("uart");
    repository.publish_module(uart.finalize().unwrap()).unwrap();

    assert_eq!(repository.pending_modules().count(), 0);
    assert_eq!(repository.module("uart").unwrap().filename(), dir.path().join("uart/module.lb"));
  }

  #[test]
  fn missing_module_file_names_the_path() {
    let dir = module_tree(&["uart"]);
    let mut builder = RepositoryBuilder::new(dir.path());

    let err = builder.add_modules(["uart/module.lb", "spi/module.lb"]).unwrap_err();
    assert!(err.to_string().contains("spi"), "{}", err);
    assert_eq!(builder.module_files().count(), 0);
  }

  #[test]
  fn glob_then_register() {
    let dir = module_tree(&["uart", "gpio", "docs"]);
    let mut builder = RepositoryBuilder::new(dir.path());
    builder.set_name("core");

    let files = builder.glob("*/module.lb").unwrap();
    assert_eq!(files.len(), 3);
    builder.add_modules(files).unwrap();
    assert_eq!(builder.module_files().count(), 3);
  }
}

mod options {
  use super::*;

  #[test]
  fn overwrite_after_declaration() {
    let dir = module_tree(&["uart", "gpio"]);
    let mut repository = core_repository(dir.path()).unwrap();

    repository.set_option_value("arch", "arm").unwrap();
    let uart = repository.module_mut("uart").unwrap();
    uart.set_option_value("baudrate", "115200").unwrap();

    assert_eq!(repository.option("arch").unwrap().value(), &OptionValue::from("arm"));
    assert_eq!(
      repository.module("uart").unwrap().option("baudrate").unwrap().value(),
      &OptionValue::Integer(115200)
    );
  }

  #[test]
  fn invalid_overwrite_keeps_value() {
    let dir = module_tree(&["uart", "gpio"]);
    let mut repository = core_repository(dir.path()).unwrap();

    let uart = repository.module_mut("uart").unwrap();
    let err = uart.set_option_value("baudrate", "fast").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { kind: OptionKind::Numeric, .. }));
    assert_eq!(uart.option("baudrate").unwrap().value(), &OptionValue::Integer(9600));
  }

  #[test]
  fn colon_in_option_name_is_rejected() {
    let mut builder = RepositoryBuilder::new(Path::new("/repo"));
    builder.set_name("core");
    let err = builder.add_option("core:arch", "", "avr").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidOptionName { .. }));
    assert!(builder.options().is_empty());
  }
}
