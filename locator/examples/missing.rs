use fibre_locator::{resolve, start, Container, Dependency};
use std::panic;

struct UnregisteredService;
struct Config;

fn main() {
  let container = Container::new([Dependency::of(|_| Ok(Config))]);

  // --- Using the fallible `get()` method ---
  match container.get::<UnregisteredService>() {
    Ok(_) => panic!("Should not have found the service!"),
    Err(err) => {
      assert!(err.is_missing_dependency());
      println!("Correctly received an error: {err}");
    }
  }

  // --- Using a chain, which stops at the first failure ---
  let chain = start::<Config, _>(&container)
    .then::<UnregisteredService, _>(&container)
    .then::<Config, _>(&container);
  println!("Chain ended with: {}", chain.error().expect("second link fails"));

  // --- Using the panicking `resolve!` macro ---
  let result = panic::catch_unwind(|| {
    let _service = resolve!(UnregisteredService, in Container::default());
  });
  assert!(result.is_err(), "resolve! should have panicked.");
  println!("Successfully caught the expected panic from resolve!.");
}
