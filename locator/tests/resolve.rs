mod common;

use common::CountingResolver;
use fibre_locator::{
  must, name, resolve_named_with, resolve_with, Container, Dependency, Error, Instance, Key,
};
use pretty_assertions::assert_eq;
use std::any::type_name;
use std::sync::Arc;

#[derive(Debug, Default, PartialEq)]
struct MyDependency {
  count: u32,
}

#[derive(Debug, thiserror::Error)]
#[error("something went wrong")]
struct SomethingWentWrong;

fn wrong_type() -> Dependency {
  Dependency::new(name::<MyDependency>(), |_| {
    Ok(Instance::new("notTheExpectedType"))
  })
}

#[test]
fn test_resolves_registered_type() {
  let container = Container::new([Dependency::of(|_| Ok(MyDependency::default()))]);

  let first = resolve_with::<MyDependency, _>(&container).unwrap();
  let second = resolve_with::<MyDependency, _>(&container).unwrap();

  assert_eq!(*first, MyDependency { count: 0 });
  assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_missing_type_is_factory_not_found() {
  let container = Container::default();

  let err = resolve_with::<MyDependency, _>(&container).unwrap_err();

  assert!(err.is_factory_not_found());
  assert_eq!(err.key(), &name::<MyDependency>());
}

#[test]
fn test_factory_error_propagates_unchanged() {
  let container = Container::new([Dependency::of::<MyDependency, _>(|_| {
    Err(SomethingWentWrong.into())
  })]);

  let err = resolve_with::<MyDependency, _>(&container).unwrap_err();

  assert!(matches!(err, Error::Factory { .. }));
  assert!(err.find_cause::<SomethingWentWrong>().is_some());
}

#[test]
fn test_wrong_type_is_type_conversion() {
  let container = Container::new([wrong_type()]);

  let err = resolve_with::<MyDependency, _>(&container).unwrap_err();

  match &err {
    Error::TypeConversion {
      key,
      expected,
      actual,
    } => {
      assert_eq!(key, &name::<MyDependency>());
      assert_eq!(*expected, type_name::<MyDependency>());
      assert_eq!(*actual, type_name::<&str>());
    }
    other => panic!("expected a type conversion error, got {other:?}"),
  }
  assert!(err.is_type_conversion());
  assert!(!err.is_missing_dependency());

  // The wrongly typed value is still what the container cached.
  assert!(container.is_resolved(&name::<MyDependency>()));
}

#[test]
fn test_named_resolution() {
  let container = Container::new([
    Dependency::named("primary", |_| Ok(MyDependency { count: 1 })),
    Dependency::named("replica", |_| Ok(MyDependency { count: 2 })),
  ]);

  let primary = resolve_named_with::<MyDependency, _>(&container, &Key::from("primary")).unwrap();
  let replica = resolve_named_with::<MyDependency, _>(&container, &Key::from("replica")).unwrap();

  assert_eq!(primary.count, 1);
  assert_eq!(replica.count, 2);
  assert!(resolve_with::<MyDependency, _>(&container)
    .unwrap_err()
    .is_factory_not_found());
}

#[test]
fn test_works_with_any_resolver() {
  let resolver = CountingResolver::new(Container::new([Dependency::instance(3i64)]));

  let value = resolve_with::<i64, _>(&resolver).unwrap();

  assert_eq!(*value, 3);
  assert_eq!(resolver.lookups(), 1);
}

#[test]
fn test_must_returns_value() {
  let container = Container::new([Dependency::instance(String::from("ok"))]);

  assert_eq!(*must(resolve_with::<String, _>(&container)), "ok");
}

#[test]
#[should_panic(expected = "missing dependency: factory not found")]
fn test_must_panics_on_missing() {
  let container = Container::default();
  must(resolve_with::<MyDependency, _>(&container));
}

#[test]
#[should_panic(expected = "failed to convert type")]
#[allow(deprecated)]
fn test_must_resolve_with_panics_on_wrong_type() {
  let container = Container::new([wrong_type()]);
  fibre_locator::must_resolve_with::<MyDependency, _>(&container);
}
