use fibre_locator::{set_standard, standard, Container, Dependency};

// A function that runs some logic against whichever container it is given.
// By accepting a `&Container`, it can be tested with a controlled environment.
fn process_data(container: &Container) -> String {
  let data = container.get::<String>().expect("Data not found in container");
  format!("Processed: {}", data.to_uppercase())
}

fn main() {
  // --- Install the standard container once at startup ---
  set_standard(Container::new([Dependency::instance(String::from("live data"))]));

  // --- Run against a local container ---
  let test_container = Container::new([Dependency::instance(String::from("test data"))]);
  let result = process_data(&test_container);
  println!("Result: {}", result);
  assert_eq!(result, "Processed: TEST DATA");

  // --- Run against the standard container ---
  let result = process_data(&standard());
  println!("Result: {}", result);
  assert_eq!(result, "Processed: LIVE DATA");

  println!("\nVerified that local containers are isolated from the standard one.");
}
