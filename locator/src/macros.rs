//! Public macros for ergonomic, panicking service resolution.

/// Resolves a service and panics if it cannot be resolved.
///
/// - `resolve!(T)` resolves `T` from the standard container.
/// - `resolve!(T, "key")` resolves `T` registered under an explicit key on the
///   standard container.
/// - `resolve!(T, in resolver)` resolves `T` from any [`Resolver`](crate::Resolver).
///
/// # Panics
///
/// Panics with the full error chain when the service is missing, its factory
/// fails, or the stored value is not a `T`. For a non-panicking version use
/// [`standard::resolve`](crate::standard::resolve) or
/// [`resolve_with`](crate::resolve_with).
///
/// # Examples
///
/// ```
/// use fibre_locator::{resolve, standard, Container, Dependency};
///
/// standard().register(Dependency::of(|_| Ok(String::from("hello"))));
/// let message = resolve!(String);
/// assert_eq!(*message, "hello");
///
/// let local = Container::new([Dependency::of(|_| Ok(7u32))]);
/// assert_eq!(*resolve!(u32, in local), 7);
/// ```
#[macro_export]
macro_rules! resolve {
  ($type:ty) => {
    $crate::must($crate::standard::resolve::<$type>())
  };

  ($type:ty, in $resolver:expr) => {
    $crate::must($crate::resolve_with::<$type, _>(&$resolver))
  };

  ($type:ty, $key:expr) => {
    $crate::must($crate::resolve_named_with::<$type, $crate::Container>(
      &$crate::standard(),
      &$crate::Key::from($key),
    ))
  };
}
