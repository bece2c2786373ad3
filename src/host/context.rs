use std::any::{Any, TypeId};
use std::sync::Arc;

use dashmap::DashMap;

/// Host-owned state container handed to plugin lifecycle hooks.
///
/// Acts as a small dependency injection map. Thread-safe; store `Arc<T>` for
/// shared state.
#[derive(Clone, Default)]
pub struct Context {
    storage: Arc<DashMap<TypeId, Box<dyn Any + Send + Sync>>>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a dependency or state value into the context.
    pub fn insert<T: 'static + Send + Sync>(&self, val: T) {
        self.storage.insert(TypeId::of::<T>(), Box::new(val));
    }

    /// Get a value from the context. `T` must be `Clone`; use `Arc<T>` for
    /// shared state.
    pub fn get<T: 'static + Send + Sync + Clone>(&self) -> Option<T> {
        self.storage
            .get(&TypeId::of::<T>())
            .and_then(|r| r.downcast_ref::<T>().cloned())
    }
}
