//! Service locator.
//!
//! Maps a capability (usually a trait object type such as
//! `dyn ExchangeRateConverter`) to one shared instance.
//!
//! Registrations live in a `DashMap`. Each `register` and `resolve` is atomic
//! for its capability and the last write wins: a concurrent `resolve` sees
//! either the previous instance or the new one.

use std::any::{Any, TypeId, type_name};
use std::sync::{Arc, OnceLock};

use dashmap::DashMap;

struct Registration {
    name: &'static str,
    instance: Box<dyn Any + Send + Sync>,
}

/// Capability → instance registry.
#[derive(Default)]
pub struct ServiceLocator {
    entries: DashMap<TypeId, Registration>,
}

impl ServiceLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide locator, created on first use.
    pub fn global() -> &'static ServiceLocator {
        static GLOBAL: OnceLock<ServiceLocator> = OnceLock::new();
        GLOBAL.get_or_init(ServiceLocator::new)
    }

    /// Registers `instance` for capability `T`, replacing any earlier one.
    pub fn register<T>(&self, instance: Arc<T>)
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let name = type_name::<T>();
        let previous = self.entries.insert(
            TypeId::of::<T>(),
            Registration {
                name,
                instance: Box::new(instance),
            },
        );
        if previous.is_some() {
            tracing::debug!("Replaced registration for {}", name);
        } else {
            tracing::debug!("Registered {}", name);
        }
    }

    /// The most recent registration for capability `T`.
    pub fn resolve<T>(&self) -> Option<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.entries
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.instance.downcast_ref::<Arc<T>>().cloned())
    }

    pub fn contains<T>(&self) -> bool
    where
        T: ?Sized + 'static,
    {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every registration.
    pub fn clear(&self) {
        self.entries.clear();
    }
}

impl std::fmt::Debug for ServiceLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.entries.iter().map(|entry| entry.name).collect();
        names.sort_unstable();
        f.debug_struct("ServiceLocator")
            .field("registrations", &names)
            .finish()
    }
}
