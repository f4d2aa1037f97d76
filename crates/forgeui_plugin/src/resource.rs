//! Typed resource storage.
//!
//! Plugins publish settings for each other as resources: one value per
//! Rust type, inserted during `build()` and read back by dependents in
//! `build()` or `ready()`.

use core::any::{Any, TypeId};
use hashbrown::HashMap;

/// A value that can be stored in the [`Registry`](crate::Registry).
///
/// Any type that is `Send + Sync + 'static` automatically implements `Resource`.
pub trait Resource: Send + Sync + 'static {
    /// Returns the type name for debugging purposes.
    fn type_name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

impl<T: Send + Sync + 'static> Resource for T {}

type BoxedResource = Box<dyn Any + Send + Sync>;

/// Type-keyed storage for [`Resource`] values.
#[derive(Default)]
pub struct Resources {
    entries: HashMap<TypeId, BoxedResource>,
}

impl Resources {
    /// Creates an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Inserts a resource, returning the previous value of the same type.
    pub fn insert<T: Resource>(&mut self, resource: T) -> Option<T> {
        self.entries
            .insert(TypeId::of::<T>(), Box::new(resource))
            .and_then(|old| old.downcast::<T>().ok())
            .map(|old| *old)
    }

    /// Returns true if a resource of type `T` exists.
    #[must_use]
    pub fn contains<T: Resource>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    /// Gets a shared reference to a resource.
    #[must_use]
    pub fn get<T: Resource>(&self) -> Option<&T> {
        self.entries
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
    }

    /// Gets a mutable reference to a resource.
    #[must_use]
    pub fn get_mut<T: Resource>(&mut self) -> Option<&mut T> {
        self.entries
            .get_mut(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_mut::<T>())
    }

    /// Removes a resource and returns it.
    pub fn remove<T: Resource>(&mut self) -> Option<T> {
        self.entries
            .remove(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast::<T>().ok())
            .map(|boxed| *boxed)
    }

    /// Returns the number of stored resources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no resources are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl core::fmt::Debug for Resources {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Resources")
            .field("len", &self.entries.len())
            .finish()
    }
}
