//! Declaration steps leave a debug trail; resolution leaves a trace trail.

use modcfg_lib::{ModuleBuilder, Namespace, OptionResolver, RepositoryBuilder};
use tracing_test::traced_test;

use super::common::{core_repository, module_tree};

#[test]
#[traced_test]
fn declarations_are_logged() {
  let dir = module_tree(&["uart", "gpio"]);
  core_repository(dir.path()).unwrap();

  assert!(logs_contain("declared option"));
  assert!(logs_contain("option=baudrate"));
  assert!(logs_contain("declared dependencies"));
  assert!(logs_contain("found module file"));
  assert!(logs_contain("published module"));
}

#[test]
#[traced_test]
fn rejected_declarations_are_not_logged_as_declared() {
  let mut builder = RepositoryBuilder::new("/repo");
  builder.set_name("core");
  let repository = builder.finalize().unwrap();

  let mut module = ModuleBuilder::new(&repository, "/repo/uart/module.lb");
  module.set_name("uart");
  assert!(module.depends("gpio").is_err());
  assert!(module.add_option("bad:name", "", 1).is_err());

  assert!(!logs_contain("declared dependencies"));
  assert!(!logs_contain("declared option"));
}

#[test]
#[traced_test]
fn lookups_are_traced() {
  let dir = module_tree(&["uart", "gpio"]);
  let core = core_repository(dir.path()).unwrap();
  let namespace = Namespace::from_repositories([&core]);

  namespace.repository_resolver(&core).lookup(":arch").unwrap();
  assert!(logs_contain("resolved option"));
  assert!(logs_contain("core:arch"));
}
