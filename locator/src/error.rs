//! Error taxonomy for registration, resolution and resolution chains.

use std::error::Error as StdError;
use std::fmt;
use std::ops::Deref;

use thiserror::Error;

use crate::key::Key;

/// The error type a factory may fail with.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Which link of a [`Resolved`](crate::Resolved) chain failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
  Initial,
  Subsequent,
}

impl fmt::Display for Step {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Step::Initial => f.write_str("initial"),
      Step::Subsequent => f.write_str("subsequent"),
    }
  }
}

/// The main error type for `fibre_locator` operations.
///
/// `FactoryNotFound` and `Factory` together form the "missing dependency"
/// category, see [`Error::is_missing_dependency`]. `TypeConversion` is reported
/// separately so callers can tell a wrongly typed registration apart from an
/// absent one.
#[derive(Debug, Error)]
pub enum Error {
  #[error("missing dependency: factory not found for {key}")]
  FactoryNotFound { key: Key },

  #[error("missing dependency: error from factory for {key}")]
  Factory {
    key: Key,
    #[source]
    source: BoxError,
  },

  #[error("failed to convert type for {key}: expected {expected}, found {actual}")]
  TypeConversion {
    key: Key,
    expected: &'static str,
    actual: &'static str,
  },

  #[error("failed to resolve {step} dependency ({type_name})")]
  Chain {
    step: Step,
    type_name: &'static str,
    #[source]
    source: ChainSource,
  },
}

/// The error wrapped by [`Error::Chain`].
///
/// Derefs to the inner [`Error`], so `source()` yields that error itself and
/// not the box around it.
#[derive(Debug)]
pub struct ChainSource(Box<Error>);

impl ChainSource {
  pub fn into_inner(self) -> Error {
    *self.0
  }
}

impl From<Error> for ChainSource {
  fn from(err: Error) -> Self {
    Self(Box::new(err))
  }
}

impl Deref for ChainSource {
  type Target = Error;

  fn deref(&self) -> &Error {
    &self.0
  }
}

/// A specialized `Result` type for `fibre_locator` operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
  /// The innermost error beneath any chain decoration.
  pub fn root(&self) -> &Error {
    match self {
      Error::Chain { source, .. } => source.root(),
      other => other,
    }
  }

  /// The key whose resolution failed.
  pub fn key(&self) -> &Key {
    match self {
      Error::FactoryNotFound { key }
      | Error::Factory { key, .. }
      | Error::TypeConversion { key, .. } => key,
      Error::Chain { source, .. } => source.key(),
    }
  }

  /// True when no factory was registered or the registered factory failed.
  pub fn is_missing_dependency(&self) -> bool {
    matches!(
      self.root(),
      Error::FactoryNotFound { .. } | Error::Factory { .. }
    )
  }

  pub fn is_factory_not_found(&self) -> bool {
    matches!(self.root(), Error::FactoryNotFound { .. })
  }

  pub fn is_type_conversion(&self) -> bool {
    matches!(self.root(), Error::TypeConversion { .. })
  }

  /// Walks the source chain and returns the first error of type `E`.
  ///
  /// This is how a caller checks for the exact error a factory returned, even
  /// when it is buried under nested resolutions and chain decorations.
  pub fn find_cause<E: StdError + 'static>(&self) -> Option<&E> {
    let mut current: Option<&(dyn StdError + 'static)> = Some(self);
    while let Some(err) = current {
      if let Some(found) = err.downcast_ref::<E>() {
        return Some(found);
      }
      current = err.source();
    }
    None
  }
}

/// Renders an error and all of its sources on one line, separated by `: `.
pub(crate) fn report(err: &(dyn StdError + 'static)) -> String {
  let mut message = err.to_string();
  let mut current = err.source();
  while let Some(cause) = current {
    message.push_str(": ");
    message.push_str(&cause.to_string());
    current = cause.source();
  }
  message
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Debug, Error)]
  #[error("disk on fire")]
  struct DiskOnFire;

  fn factory_failure() -> Error {
    Error::Factory {
      key: Key::from_static("db"),
      source: Box::new(DiskOnFire),
    }
  }

  #[test]
  fn categories_survive_chain_decoration() {
    let chained = Error::Chain {
      step: Step::Initial,
      type_name: "Db",
      source: factory_failure().into(),
    };

    assert!(chained.is_missing_dependency());
    assert!(!chained.is_factory_not_found());
    assert!(!chained.is_type_conversion());
    assert_eq!(chained.key().as_str(), "db");
    assert!(chained.find_cause::<DiskOnFire>().is_some());
  }

  #[test]
  fn type_conversion_is_not_a_missing_dependency() {
    let err = Error::TypeConversion {
      key: Key::from_static("db"),
      expected: "Db",
      actual: "alloc::string::String",
    };

    assert!(err.is_type_conversion());
    assert!(!err.is_missing_dependency());
    assert!(err.find_cause::<DiskOnFire>().is_none());
  }

  #[test]
  fn chain_source_is_the_inner_error() {
    let chained = Error::Chain {
      step: Step::Initial,
      type_name: "Db",
      source: Error::FactoryNotFound {
        key: Key::from_static("db"),
      }
      .into(),
    };

    let inner = chained
      .source()
      .and_then(|source| source.downcast_ref::<Error>())
      .unwrap();
    assert!(matches!(inner, Error::FactoryNotFound { .. }));
    assert!(inner.source().is_none());
    assert!(chained.is_factory_not_found());
  }

  #[test]
  fn find_cause_reaches_factory_error_under_nested_chains() {
    let nested = Error::Chain {
      step: Step::Subsequent,
      type_name: "Service",
      source: Error::Chain {
        step: Step::Initial,
        type_name: "Db",
        source: factory_failure().into(),
      }
      .into(),
    };

    assert!(nested.find_cause::<DiskOnFire>().is_some());
    assert_eq!(nested.key().as_str(), "db");
    assert!(matches!(nested.root(), Error::Factory { .. }));
  }

  #[test]
  fn report_joins_every_source() {
    let chained = Error::Chain {
      step: Step::Subsequent,
      type_name: "Db",
      source: factory_failure().into(),
    };

    assert_eq!(
      report(&chained),
      concat!(
        "failed to resolve subsequent dependency (Db): ",
        "missing dependency: error from factory for db: disk on fire"
      )
    );
  }
}
