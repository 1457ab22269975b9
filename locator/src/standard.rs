//! The standard, process-wide container and its free functions.
//!
//! Prefer passing a [`Container`] to the components that need it. The
//! standard container is a convenience for small programs; it can be swapped
//! as a whole with [`set_standard`], typically once during startup.

use crate::container::Container;
use crate::core::Dependency;
use crate::error::Result;
use crate::resolve::{must, resolve_with};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::any::Any;
use std::sync::Arc;

// Created on first access. Holders of a previous `Arc` keep it alive after a swap.
static STANDARD: Lazy<RwLock<Arc<Container>>> = Lazy::new(|| RwLock::new(Arc::default()));

/// Returns the currently installed standard container.
///
/// # Examples
///
/// ```
/// use fibre_locator::{standard, Dependency};
///
/// standard().register(Dependency::instance(String::from("Hello from standard!")));
/// assert_eq!(*standard().get::<String>().unwrap(), "Hello from standard!");
/// ```
pub fn standard() -> Arc<Container> {
  Arc::clone(&STANDARD.read())
}

/// Installs `container` as the standard container and returns the previous one.
pub fn set_standard(container: impl Into<Arc<Container>>) -> Arc<Container> {
  let container = container.into();
  tracing::debug!(container = ?container, "installed standard container");
  std::mem::replace(&mut *STANDARD.write(), container)
}

/// Registers a dependency on the standard container.
pub fn register(dependency: Dependency) {
  standard().register(dependency);
}

pub fn register_all(dependencies: impl IntoIterator<Item = Dependency>) {
  standard().register_all(dependencies);
}

/// Resolves `T` from the standard container.
pub fn resolve<T: Any + Send + Sync>() -> Result<Arc<T>> {
  let container = standard();
  resolve_with::<T, Container>(&container)
}

/// Resolves `T` from the standard container and panics on failure.
#[deprecated(note = "use `must(standard::resolve::<T>())` instead")]
#[track_caller]
pub fn must_resolve<T: Any + Send + Sync>() -> Arc<T> {
  must(resolve::<T>())
}
