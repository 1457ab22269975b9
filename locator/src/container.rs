//! The main `Container` struct, its builder and resolution modes.

use crate::core::{Dependency, FactoryFn, Instance, Registrar, Resolver};
use crate::error::{Error, Result};
use crate::key::Key;
use crate::resolve::resolve_with;
use dashmap::DashMap;
use parking_lot::{Mutex, ReentrantMutex};
use std::any::Any;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// How a container behaves when several threads resolve the same key for the
/// first time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
  feature = "serde",
  derive(serde::Serialize, serde::Deserialize),
  serde(rename_all = "snake_case")
)]
pub enum ResolveMode {
  /// The factory runs outside any lock. Concurrent first use may run it more
  /// than once; the first value stored is kept and handed to every caller.
  #[default]
  BestEffort,
  /// "Check, invoke, store" is serialized per key, so each factory runs
  /// exactly once. The per-key lock is re-entrant, so a factory that resolves
  /// its own key on the same thread does not deadlock.
  SingleFlight,
}

#[derive(Default)]
struct Tables {
  factories: HashMap<Key, Arc<FactoryFn>>,
  instances: HashMap<Key, Instance>,
}

/// The service registry.
///
/// Holds the factory table and the cache of resolved instances. Every
/// operation takes `&self` and is safe to call from many threads at once.
/// Factories receive the container so they can resolve their own
/// dependencies; no lock is held while a factory runs.
#[derive(Default)]
pub struct Container {
  tables: Mutex<Tables>,
  mode: ResolveMode,
  in_flight: DashMap<Key, Arc<ReentrantMutex<()>>>,
}

impl Container {
  /// Creates a container seeded with the given dependencies.
  ///
  /// No factory is invoked here.
  pub fn new(dependencies: impl IntoIterator<Item = Dependency>) -> Self {
    Self::builder().dependencies(dependencies).build()
  }

  pub fn builder() -> ContainerBuilder {
    ContainerBuilder::default()
  }

  pub fn resolve_mode(&self) -> ResolveMode {
    self.mode
  }

  /// Adds or replaces the factory for the dependency's key.
  ///
  /// An instance that was already resolved for that key stays cached.
  pub fn register(&self, dependency: Dependency) {
    let Dependency { key, factory } = dependency;
    let replaced = self
      .tables
      .lock()
      .factories
      .insert(key.clone(), factory)
      .is_some();
    tracing::debug!(key = %key, replaced, "registered factory");
  }

  pub fn register_all(&self, dependencies: impl IntoIterator<Item = Dependency>) {
    for dependency in dependencies {
      self.register(dependency);
    }
  }

  /// Resolves a key, invoking its factory on first use and caching the value.
  pub fn resolve(&self, key: &Key) -> Result<Instance> {
    if let Some(instance) = self.cached(key) {
      tracing::trace!(key = %key, "resolved from cache");
      return Ok(instance);
    }

    match self.mode {
      ResolveMode::BestEffort => self.produce(key),
      ResolveMode::SingleFlight => {
        let gate = self
          .in_flight
          .entry(key.clone())
          .or_insert_with(|| Arc::new(ReentrantMutex::new(())))
          .clone();
        let result = {
          let _flight = gate.lock();
          match self.cached(key) {
            Some(instance) => {
              tracing::trace!(key = %key, "resolved from cache after waiting");
              Ok(instance)
            }
            None => self.produce(key),
          }
        };

        self.release_gate(key, gate);
        result
      }
    }
  }

  /// Resolves `T` by its type key and checks the stored value's type.
  pub fn get<T: Any + Send + Sync>(&self) -> Result<Arc<T>> {
    resolve_with::<T, _>(self)
  }

  pub fn contains_factory(&self, key: &Key) -> bool {
    self.tables.lock().factories.contains_key(key)
  }

  pub fn is_resolved(&self, key: &Key) -> bool {
    self.tables.lock().instances.contains_key(key)
  }

  // --- PRIVATE HELPERS ---

  fn cached(&self, key: &Key) -> Option<Instance> {
    self.tables.lock().instances.get(key).cloned()
  }

  /// Drops the single-flight gate for `key` once no other caller holds it,
  /// whether the resolution succeeded or not.
  fn release_gate(&self, key: &Key, gate: Arc<ReentrantMutex<()>>) {
    drop(gate);
    // Gates are cloned under the shard lock, so a count of one means only the
    // map still holds it and no caller is waiting.
    self
      .in_flight
      .remove_if(key, |_, current| Arc::strong_count(current) == 1);
  }

  fn produce(&self, key: &Key) -> Result<Instance> {
    let factory = self.tables.lock().factories.get(key).cloned();
    let Some(factory) = factory else {
      tracing::warn!(key = %key, "no factory registered");
      return Err(Error::FactoryNotFound { key: key.clone() });
    };

    tracing::debug!(key = %key, "invoking factory");
    let instance = (*factory)(self).map_err(|source| {
      tracing::warn!(key = %key, error = %source, "factory failed");
      Error::Factory {
        key: key.clone(),
        source,
      }
    })?;

    Ok(self.store(key, instance))
  }

  /// Caches `instance` unless another caller got there first, in which case
  /// the value already cached is returned instead.
  fn store(&self, key: &Key, instance: Instance) -> Instance {
    let mut tables = self.tables.lock();
    match tables.instances.entry(key.clone()) {
      Entry::Occupied(existing) => {
        tracing::debug!(key = %key, "lost race to cache instance, using existing");
        existing.get().clone()
      }
      Entry::Vacant(slot) => {
        tracing::debug!(key = %key, type_name = instance.type_name(), "cached instance");
        slot.insert(instance).clone()
      }
    }
  }
}

impl Registrar for Container {
  fn register(&self, dependency: Dependency) {
    Container::register(self, dependency)
  }
}

impl Resolver for Container {
  fn resolve(&self, key: &Key) -> Result<Instance> {
    Container::resolve(self, key)
  }
}

impl fmt::Debug for Container {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let tables = self.tables.lock();
    f.debug_struct("Container")
      .field("mode", &self.mode)
      .field("factories", &tables.factories.len())
      .field("instances", &tables.instances.len())
      .finish_non_exhaustive()
  }
}

/// A builder for creating `Container` instances.
#[derive(Default)]
pub struct ContainerBuilder {
  mode: ResolveMode,
  dependencies: Vec<Dependency>,
}

impl ContainerBuilder {
  pub fn resolve_mode(mut self, mode: ResolveMode) -> Self {
    self.mode = mode;
    self
  }

  pub fn dependency(mut self, dependency: Dependency) -> Self {
    self.dependencies.push(dependency);
    self
  }

  pub fn dependencies(mut self, dependencies: impl IntoIterator<Item = Dependency>) -> Self {
    self.dependencies.extend(dependencies);
    self
  }

  /// Builds the container. Later dependencies replace earlier ones with the
  /// same key.
  pub fn build(self) -> Container {
    let factories = self
      .dependencies
      .into_iter()
      .map(|dependency| (dependency.key, dependency.factory))
      .collect();

    Container {
      tables: Mutex::new(Tables {
        factories,
        instances: HashMap::new(),
      }),
      mode: self.mode,
      in_flight: DashMap::new(),
    }
  }
}

impl fmt::Debug for ContainerBuilder {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ContainerBuilder")
      .field("mode", &self.mode)
      .field("dependencies", &self.dependencies)
      .finish()
  }
}
