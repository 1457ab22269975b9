#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use fibre_locator::{Container, Dependency, Instance, Key, Resolver, Result};
use tracing_subscriber::EnvFilter;

pub const THREADS: usize = 20;

/// Routes library events to the test output. Set `RUST_LOG=fibre_locator=trace` to see them.
pub fn init_tracing() {
  let _ = tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_test_writer()
    .try_init();
}

#[derive(Debug, PartialEq, Eq)]
pub struct Counted {
  pub call: usize,
}

/// A typed dependency for `Counted` whose factory bumps `calls` on every invocation.
pub fn counted(calls: &Arc<AtomicUsize>) -> Dependency {
  let calls = Arc::clone(calls);
  Dependency::of(move |_| {
    let call = calls.fetch_add(1, Ordering::SeqCst) + 1;
    Ok(Counted { call })
  })
}

/// A resolver that counts how often it is asked for anything.
pub struct CountingResolver {
  pub inner: Container,
  pub lookups: AtomicUsize,
}

impl CountingResolver {
  pub fn new(inner: Container) -> Self {
    Self {
      inner,
      lookups: AtomicUsize::new(0),
    }
  }

  pub fn lookups(&self) -> usize {
    self.lookups.load(Ordering::SeqCst)
  }
}

impl Resolver for CountingResolver {
  fn resolve(&self, key: &Key) -> Result<Instance> {
    self.lookups.fetch_add(1, Ordering::SeqCst);
    self.inner.resolve(key)
  }
}
