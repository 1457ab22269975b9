use fibre_locator::{resolve_named_with, Container, Dependency, Key};

struct DatabaseConnection {
  url: String,
}

fn main() {
  // Two values of the same type, told apart by their keys.
  let container = Container::new([
    Dependency::named("primary_db", |_| {
      Ok(DatabaseConnection {
        url: "postgres://primary".to_string(),
      })
    }),
    Dependency::named("replica_db", |_| {
      Ok(DatabaseConnection {
        url: "postgres://replica".to_string(),
      })
    }),
  ]);

  let primary = resolve_named_with::<DatabaseConnection, _>(&container, &Key::from("primary_db"))
    .expect("primary is registered");
  let replica = resolve_named_with::<DatabaseConnection, _>(&container, &Key::from("replica_db"))
    .expect("replica is registered");

  println!("Primary DB URL: {}", primary.url);
  println!("Replica DB URL: {}", replica.url);
  assert_eq!(primary.url, "postgres://primary");
  assert_eq!(replica.url, "postgres://replica");
}
