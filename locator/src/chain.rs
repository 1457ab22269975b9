//! Short-circuiting chains of typed resolutions.
//!
//! ```
//! use fibre_locator::{start, Container, Dependency};
//!
//! struct Config;
//! struct Database;
//!
//! let container = Container::new([
//!   Dependency::of(|_| Ok(Config)),
//!   Dependency::of(|_| Ok(Database)),
//! ]);
//!
//! let config = start::<Config, _>(&container);
//! let database = config.then::<Database, _>(&container);
//! assert!(database.is_ok());
//! ```

use crate::core::Resolver;
use crate::error::{Error, Result, Step};
use crate::resolve::resolve_with;
use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;

/// The outcome of one link in a resolution chain.
///
/// Once a link fails, every following [`then`] passes the same error along
/// without touching the resolver.
pub struct Resolved<V> {
  result: Result<Arc<V>>,
}

impl<V> Resolved<V> {
  pub fn value(&self) -> Option<&Arc<V>> {
    self.result.as_ref().ok()
  }

  pub fn error(&self) -> Option<&Error> {
    self.result.as_ref().err()
  }

  pub fn is_ok(&self) -> bool {
    self.result.is_ok()
  }

  pub fn into_result(self) -> Result<Arc<V>> {
    self.result
  }

  /// Resolves the next link, see [`then`].
  pub fn then<O, R>(self, resolver: &R) -> Resolved<O>
  where
    O: Any + Send + Sync,
    R: Resolver + ?Sized,
  {
    then(resolver, self)
  }
}

impl<V> From<Resolved<V>> for Result<Arc<V>> {
  fn from(resolved: Resolved<V>) -> Self {
    resolved.result
  }
}

impl<V> fmt::Debug for Resolved<V> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Resolved")
      .field("type", &type_name::<V>())
      .field("error", &self.error())
      .finish_non_exhaustive()
  }
}

/// Shows the error that ended the chain, or the resolved type when every link
/// succeeded.
impl<V> fmt::Display for Resolved<V> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.result {
      Ok(_) => write!(f, "resolved {}", type_name::<V>()),
      Err(err) => fmt::Display::fmt(err, f),
    }
  }
}

/// Resolves the first link of a chain.
///
/// A failure is decorated with the type that was being resolved; the original
/// error stays reachable through [`Error::find_cause`] and the category
/// predicates.
pub fn start<V, R>(resolver: &R) -> Resolved<V>
where
  V: Any + Send + Sync,
  R: Resolver + ?Sized,
{
  link(resolver, Step::Initial)
}

/// Resolves the next link unless `previous` already failed.
pub fn then<O, I, R>(resolver: &R, previous: Resolved<I>) -> Resolved<O>
where
  O: Any + Send + Sync,
  R: Resolver + ?Sized,
{
  if let Err(err) = previous.result {
    return Resolved { result: Err(err) };
  }
  link(resolver, Step::Subsequent)
}

fn link<V, R>(resolver: &R, step: Step) -> Resolved<V>
where
  V: Any + Send + Sync,
  R: Resolver + ?Sized,
{
  let result = resolve_with::<V, R>(resolver).map_err(|source| Error::Chain {
    step,
    type_name: type_name::<V>(),
    source: source.into(),
  });
  Resolved { result }
}
