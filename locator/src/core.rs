//! Core data structures shared by the container and the typed resolvers.

use crate::container::Container;
use crate::error::{BoxError, Result};
use crate::key::{name, Key};
use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;

pub(crate) type FactoryFn = dyn Fn(&Container) -> Result<Instance, BoxError> + Send + Sync;

/// A resolved value stored in a container, tagged with its concrete type name.
///
/// Values of unrelated types share one table, so they are kept behind
/// `dyn Any` and recovered with a checked downcast at the typed boundary.
#[derive(Clone)]
pub struct Instance {
  value: Arc<dyn Any + Send + Sync>,
  type_name: &'static str,
}

impl Instance {
  pub fn new<T: Any + Send + Sync>(value: T) -> Self {
    Self::from_arc(Arc::new(value))
  }

  pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
    Self {
      value,
      type_name: type_name::<T>(),
    }
  }

  /// The name of the concrete type this instance was created from.
  pub fn type_name(&self) -> &'static str {
    self.type_name
  }

  pub fn is<T: Any>(&self) -> bool {
    self.value.is::<T>()
  }

  /// Returns a shared handle to the value if it is exactly a `T`.
  pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
    Arc::clone(&self.value).downcast::<T>().ok()
  }

  /// True when both instances point at the same allocation.
  pub fn ptr_eq(&self, other: &Instance) -> bool {
    Arc::ptr_eq(&self.value, &other.value)
  }
}

impl fmt::Debug for Instance {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Instance")
      .field("type", &self.type_name)
      .finish_non_exhaustive()
  }
}

/// A key paired with the factory that produces the value for it.
///
/// This is the unit handed to [`Container::new`], [`Container::register`] and
/// the standard container's `register`.
#[derive(Clone)]
pub struct Dependency {
  pub(crate) key: Key,
  pub(crate) factory: Arc<FactoryFn>,
}

impl Dependency {
  /// An untyped dependency whose factory produces any [`Instance`].
  pub fn new<F>(key: impl Into<Key>, factory: F) -> Self
  where
    F: Fn(&Container) -> Result<Instance, BoxError> + Send + Sync + 'static,
  {
    Self {
      key: key.into(),
      factory: Arc::new(factory),
    }
  }

  /// A dependency keyed by `T`'s own name.
  pub fn of<T, F>(factory: F) -> Self
  where
    T: Any + Send + Sync,
    F: Fn(&Container) -> Result<T, BoxError> + Send + Sync + 'static,
  {
    Self::named(name::<T>(), factory)
  }

  /// A typed dependency registered under an explicit key.
  pub fn named<T, F>(key: impl Into<Key>, factory: F) -> Self
  where
    T: Any + Send + Sync,
    F: Fn(&Container) -> Result<T, BoxError> + Send + Sync + 'static,
  {
    Self::new(key, move |container| factory(container).map(Instance::new))
  }

  /// A dependency that always yields the given, already built value.
  pub fn instance<T: Any + Send + Sync>(value: T) -> Self {
    let value = Arc::new(value);
    Self::new(name::<T>(), move |_| Ok(Instance::from_arc(Arc::clone(&value))))
  }

  pub fn key(&self) -> &Key {
    &self.key
  }
}

impl fmt::Debug for Dependency {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Dependency")
      .field("key", &self.key)
      .finish_non_exhaustive()
  }
}

/// Capability to add factories.
pub trait Registrar {
  fn register(&self, dependency: Dependency);

  fn register_all<I>(&self, dependencies: I)
  where
    I: IntoIterator<Item = Dependency>,
    Self: Sized,
  {
    for dependency in dependencies {
      self.register(dependency);
    }
  }
}

/// Capability to resolve a key into an untyped instance.
pub trait Resolver {
  fn resolve(&self, key: &Key) -> Result<Instance>;
}

impl<R: Resolver + ?Sized> Resolver for &R {
  fn resolve(&self, key: &Key) -> Result<Instance> {
    (**self).resolve(key)
  }
}

impl<R: Resolver + ?Sized> Resolver for Arc<R> {
  fn resolve(&self, key: &Key) -> Result<Instance> {
    (**self).resolve(key)
  }
}

impl<R: Registrar + ?Sized> Registrar for Arc<R> {
  fn register(&self, dependency: Dependency) {
    (**self).register(dependency)
  }
}
