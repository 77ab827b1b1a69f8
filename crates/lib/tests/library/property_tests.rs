//! Properties that hold for any names and values.

use modcfg_lib::name::verify_module_name;
use modcfg_lib::{
  ConfigError, ConfigOption, ModuleBuilder, ModuleResolver, OptionMap, OptionResolver, OptionValue, Repository,
  RepositoryBuilder, RepositoryResolver,
};
use proptest::prelude::*;

fn repository(name: &str) -> Repository {
  let mut builder = RepositoryBuilder::new("/repo");
  builder.set_name(name);
  builder.finalize().unwrap()
}

fn numbered(prefix: &str, count: usize) -> OptionMap {
  (0..count)
    .map(|i| {
      let name = format!("o{}", i);
      let option = ConfigOption::generic(name.as_str(), "", OptionValue::Integer(i as i64)).unwrap();
      (format!("{}:{}", prefix, name), option)
    })
    .collect()
}

proptest! {
  #[test]
  fn duplicate_option_keeps_first_value(
    name in "[a-z_][a-z0-9_]{0,11}",
    first in any::<i64>(),
    second in any::<i64>()
  ) {
    let mut builder = RepositoryBuilder::new("/repo");
    builder.set_name("core");
    builder.add_option(&name, "", first).unwrap();

    let err = builder.add_option(&name, "", second).unwrap_err();
    let is_duplicate = matches!(err, ConfigError::DuplicateOption { .. });
    prop_assert!(is_duplicate);
    prop_assert_eq!(builder.options().get(&name).unwrap().value(), &OptionValue::Integer(first));
  }

  #[test]
  fn module_name_needs_exactly_one_colon(name in "[a-z:]{0,12}") {
    let colons = name.matches(':').count();
    prop_assert_eq!(verify_module_name(&name).is_ok(), colons == 1);

    let core = repository("core");
    let mut module = ModuleBuilder::new(&core, "/repo/uart/module.lb");
    module.set_name("uart");
    match module.depends(name.as_str()) {
      Ok(()) => {
        prop_assert_eq!(module.dependencies(), &[name.clone()][..]);
      }
      Err(err) => {
        let is_malformed = matches!(err, ConfigError::MalformedModuleName { .. });
        prop_assert!(is_malformed);
        prop_assert!(module.dependencies().is_empty());
      }
    }
  }

  #[test]
  fn empty_repository_segment_is_own_repository(
    repo in "[a-z]{1,8}",
    option in "[a-z]{1,8}",
    value in any::<i64>()
  ) {
    let owner = repository(&repo);
    let mut options = OptionMap::new();
    options.insert(
      format!("{}:{}", repo, option),
      ConfigOption::generic(option.as_str(), "", value).unwrap(),
    );
    let resolver = RepositoryResolver::new(&owner, options);

    let short = resolver.lookup(&format!(":{}", option)).unwrap();
    let full = resolver.lookup(&format!("{}:{}", repo, option)).unwrap();
    prop_assert_eq!(short, full);
    prop_assert_eq!(short, &OptionValue::Integer(value));
  }

  #[test]
  fn module_resolver_size_is_a_sum(repo_count in 0usize..16, module_count in 0usize..16) {
    let core = repository("core");
    let mut builder = ModuleBuilder::new(&core, "/repo/uart/module.lb");
    builder.set_name("uart");
    let uart = builder.finalize().unwrap();

    // Same key strings in both maps still count twice.
    let resolver = ModuleResolver::new(&core, &uart, numbered("x", repo_count), numbered("x", module_count));
    prop_assert_eq!(resolver.size(), repo_count + module_count);
  }

  #[test]
  fn wrong_segment_count_is_a_format_error(segments in proptest::collection::vec("[a-z]{0,4}", 4..7)) {
    let core = repository("core");
    let mut builder = ModuleBuilder::new(&core, "/repo/uart/module.lb");
    builder.set_name("uart");
    let uart = builder.finalize().unwrap();
    let resolver = ModuleResolver::new(&core, &uart, OptionMap::new(), OptionMap::new());

    let key = segments.join(":");
    prop_assert!(resolver.lookup(&key).unwrap_err().is_format_error());
  }
}
