//! Registry keys and their derivation from Rust types.

use std::any::type_name;
use std::borrow::Cow;
use std::fmt;

/// Identifies a dependency slot in a [`Container`](crate::Container).
///
/// Keys are opaque to the container. Typed registration and typed resolution
/// both go through [`name`], so they agree on the key for a type without any
/// coordination between the two call sites.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(Cow<'static, str>);

impl Key {
  /// Creates a key from any owned or static string.
  pub fn new(key: impl Into<Cow<'static, str>>) -> Self {
    Self(key.into())
  }

  /// Creates a key from a static string without allocating.
  pub const fn from_static(key: &'static str) -> Self {
    Self(Cow::Borrowed(key))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Debug for Key {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Key({})", self.0)
  }
}

impl fmt::Display for Key {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&'static str> for Key {
  fn from(key: &'static str) -> Self {
    Self::from_static(key)
  }
}

impl From<String> for Key {
  fn from(key: String) -> Self {
    Self::new(key)
  }
}

impl AsRef<str> for Key {
  fn as_ref(&self) -> &str {
    self.as_str()
  }
}

/// Returns the key for the type `T`.
///
/// The key is the fully-qualified type name reported by the compiler, so the
/// same type always maps to the same key within a build.
///
/// ```
/// use fibre_locator::name;
///
/// struct Database;
///
/// assert_eq!(name::<Database>(), name::<Database>());
/// assert_ne!(name::<Database>(), name::<String>());
/// ```
pub fn name<T: ?Sized + 'static>() -> Key {
  Key::from_static(type_name::<T>())
}

/// Returns the key for the type of `value`.
pub fn name_of_val<T: ?Sized + 'static>(_value: &T) -> Key {
  name::<T>()
}

#[cfg(test)]
mod tests {
  use super::*;

  mod inner {
    pub struct Service;
  }
  struct Service;

  #[test]
  fn same_type_yields_same_key() {
    assert_eq!(name::<Service>(), name::<Service>());
    assert_eq!(name::<Vec<u8>>(), name::<Vec<u8>>());
  }

  #[test]
  fn distinct_types_with_same_ident_yield_distinct_keys() {
    assert_ne!(name::<Service>(), name::<inner::Service>());
    assert!(name::<inner::Service>().as_str().ends_with("inner::Service"));
  }

  #[test]
  fn name_of_val_matches_type_key() {
    let value = inner::Service;
    assert_eq!(name_of_val(&value), name::<inner::Service>());
    assert_eq!(name_of_val(&42u32), name::<u32>());
  }

  #[test]
  fn static_and_owned_keys_compare_equal() {
    assert_eq!(Key::from_static("db"), Key::new(String::from("db")));
    assert_eq!(format!("{:?}", Key::from("db")), "Key(db)");
  }
}
