use fibre_locator::{Container, Dependency};
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};

// A simple service that gets a unique ID upon creation.
struct RequestTracker {
  id: usize,
}

// A thread-safe counter to generate unique IDs.
static ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn main() {
  // This factory is only called on first resolution.
  let container = Container::new([Dependency::of(|_| {
    println!("Creating RequestTracker...");
    Ok(RequestTracker {
      id: ID_COUNTER.fetch_add(1, Ordering::SeqCst),
    })
  })]);

  let t1 = container.get::<RequestTracker>().expect("tracker is registered");
  let t2 = container.get::<RequestTracker>().expect("tracker is registered");
  println!("Tracker 1 ID: {}, Tracker 2 ID: {}", t1.id, t2.id);

  assert_eq!(t1.id, 0);
  assert!(Arc::ptr_eq(&t1, &t2), "Resolved instances should be identical");
  assert_eq!(ID_COUNTER.load(Ordering::SeqCst), 1);
  println!("Both lookups returned the same cached instance.");
}
