//! The access checker handle.

use std::sync::Arc;

use crate::config::AccessConfig;
use crate::repository::AccessRepository;

/// Entry point for every access check.
///
/// Holds the injected repository and configuration. Checks are spread over
/// the `visibility`, `permissions`, `todo` and `guard` modules. Cloning is
/// cheap and clones share the repository.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use hub_access::{AccessControl, MemoryRepository};
///
/// let access = AccessControl::new(Arc::new(MemoryRepository::new()));
/// assert!(access.config().legacy_volunteers);
/// ```
pub struct AccessControl<R: AccessRepository + ?Sized> {
    pub(crate) repo: Arc<R>,
    pub(crate) config: AccessConfig,
}

impl<R: AccessRepository + ?Sized> AccessControl<R> {
    /// Create a checker with the default configuration.
    pub fn new(repo: Arc<R>) -> Self {
        Self::with_config(repo, AccessConfig::default())
    }

    /// Create a checker with an explicit configuration.
    pub fn with_config(repo: Arc<R>, config: AccessConfig) -> Self {
        Self { repo, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &AccessConfig {
        &self.config
    }

    /// The injected repository.
    pub fn repository(&self) -> &Arc<R> {
        &self.repo
    }
}

impl<R: AccessRepository + ?Sized> Clone for AccessControl<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            config: self.config.clone(),
        }
    }
}

impl<R: AccessRepository + ?Sized> std::fmt::Debug for AccessControl<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessControl")
            .field("config", &self.config)
            .finish()
    }
}
