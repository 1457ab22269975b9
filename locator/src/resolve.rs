//! Typed resolution on top of any [`Resolver`].

use crate::core::Resolver;
use crate::error::{report, Error, Result};
use crate::key::{name, Key};
use std::any::{type_name, Any};
use std::error::Error as StdError;
use std::sync::Arc;

/// Resolves an instance of `T` from `resolver`, keyed by [`name::<T>()`](name).
///
/// Fails with the resolver's own error if the key cannot be resolved, or with
/// [`Error::TypeConversion`] when the stored value is not exactly a `T`.
pub fn resolve_with<T, R>(resolver: &R) -> Result<Arc<T>>
where
  T: Any + Send + Sync,
  R: Resolver + ?Sized,
{
  resolve_named_with::<T, R>(resolver, &name::<T>())
}

/// Like [`resolve_with`], but under an explicit key.
pub fn resolve_named_with<T, R>(resolver: &R, key: &Key) -> Result<Arc<T>>
where
  T: Any + Send + Sync,
  R: Resolver + ?Sized,
{
  let instance = resolver.resolve(key)?;
  instance.downcast::<T>().ok_or_else(|| Error::TypeConversion {
    key: key.clone(),
    expected: type_name::<T>(),
    actual: instance.type_name(),
  })
}

/// Resolves `T` and panics if that fails.
#[deprecated(note = "use `must(resolve_with::<T, _>(resolver))` instead")]
#[track_caller]
pub fn must_resolve_with<T, R>(resolver: &R) -> Arc<T>
where
  T: Any + Send + Sync,
  R: Resolver + ?Sized,
{
  must(resolve_with::<T, R>(resolver))
}

/// Unwraps a result, panicking with the full error chain on failure.
///
/// For call sites that treat a failed resolution as unrecoverable.
#[track_caller]
pub fn must<T, E>(result: Result<T, E>) -> T
where
  E: StdError + 'static,
{
  match result {
    Ok(value) => value,
    Err(err) => panic!("{}", report(&err)),
  }
}
