//! Registry errors.

use thiserror::Error;

/// Errors raised while assembling plugins into a [`Registry`](crate::Registry).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A unique plugin was added more than once.
    #[error(
        "plugin '{0}' is unique and was already added; return false from `is_unique()` to allow several instances"
    )]
    DuplicatePlugin(String),

    /// A plugin depends on a plugin that was never added.
    #[error("plugin '{plugin}' requires '{dependency}', which was not added")]
    MissingDependency {
        /// The plugin declaring the dependency.
        plugin: String,
        /// The missing dependency.
        dependency: String,
    },

    /// Plugin dependencies form a cycle.
    #[error("circular dependency detected among plugins: {0:?}")]
    CircularDependency(Vec<String>),

    /// [`Registry::finish`](crate::Registry::finish) was called twice.
    #[error("the registry was already built")]
    AlreadyBuilt,

    /// A plugin's `build()` or `ready()` failed during an earlier
    /// [`Registry::finish`](crate::Registry::finish) call.
    #[error("the registry failed to build and cannot be finished again")]
    BuildFailed,

    /// Output was requested before [`Registry::finish`](crate::Registry::finish).
    #[error("the registry has not been built; call `finish()` first")]
    NotBuilt,

    /// Two plugins registered an Alpine store with the same name.
    #[error("Alpine store '{0}' is already registered")]
    DuplicateStore(String),

    /// Two plugins registered a custom directive with the same name.
    #[error("Alpine directive 'x-{0}' is already registered")]
    DuplicateDirective(String),

    /// Two plugins registered a magic with the same name.
    #[error("Alpine magic '${0}' is already registered")]
    DuplicateMagic(String),

    /// Two plugins registered an `Alpine.data` component with the same name.
    #[error("Alpine component '{0}' is already registered")]
    DuplicateComponent(String),
}
