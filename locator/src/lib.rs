//! # Fibre Locator
//!
//! A thread-safe runtime service locator for Rust.
//!
//! Components ask a [`Container`] for their dependencies by type instead of
//! receiving them through constructor parameters. The container maps a
//! [`Key`] to a factory, invokes that factory lazily on first use, caches the
//! result and hands the same instance to every later caller.
//!
//! ## Core Concepts
//!
//! - **Container**: the registry of factories and memoized instances. Create as
//!   many as you need and pass them explicitly.
//! - **Key**: derived from a type with [`name`], so registration and resolution
//!   agree without coordination.
//! - **Typed resolution**: [`resolve_with`] looks up a type's key and performs a
//!   checked downcast, reporting a wrongly typed value as
//!   [`Error::TypeConversion`].
//! - **Chains**: [`start`] and [`then`] resolve several dependencies in a row,
//!   stopping at the first failure.
//! - **Standard container**: an optional process-wide instance, reached through
//!   [`standard()`] and the free functions in [`standard`](mod@standard).
//!
//! ## Quick Start
//!
//! ```
//! use fibre_locator::{Container, Dependency};
//!
//! struct Config {
//!   url: String,
//! }
//!
//! struct Database {
//!   url: String,
//! }
//!
//! let container = Container::new([
//!   Dependency::of(|_| {
//!     Ok(Config {
//!       url: "postgres://localhost".to_string(),
//!     })
//!   }),
//!   // Factories may resolve their own dependencies from the container.
//!   Dependency::of(|c: &Container| {
//!     let config = c.get::<Config>()?;
//!     Ok(Database {
//!       url: config.url.clone(),
//!     })
//!   }),
//! ]);
//!
//! let db = container.get::<Database>().unwrap();
//! assert_eq!(db.url, "postgres://localhost");
//! ```

mod chain;
mod container;
mod core;
pub mod error;
mod key;
mod macros;
mod resolve;
pub mod standard;

pub use chain::{start, then, Resolved};
pub use container::{Container, ContainerBuilder, ResolveMode};
pub use crate::core::{Dependency, Instance, Registrar, Resolver};
pub use error::{BoxError, ChainSource, Error, Result};
pub use key::{name, name_of_val, Key};
#[allow(deprecated)]
pub use resolve::must_resolve_with;
pub use resolve::{must, resolve_named_with, resolve_with};
pub use standard::{set_standard, standard};
