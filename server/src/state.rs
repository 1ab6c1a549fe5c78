//! Application state

use std::sync::Arc;

use minijinja::Environment;
use tasker_core::task::MemoryTaskStore;

use crate::templates;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    task_store: MemoryTaskStore,
    templates: Environment<'static>,
}

impl AppState {
    /// Create a new AppState with an empty task store
    pub fn new() -> Result<Self, minijinja::Error> {
        Ok(Self {
            inner: Arc::new(AppStateInner {
                task_store: MemoryTaskStore::new(),
                templates: templates::environment()?,
            }),
        })
    }

    /// Get reference to the task store
    pub fn task_store(&self) -> &MemoryTaskStore {
        &self.inner.task_store
    }

    /// Get reference to the template environment
    pub fn templates(&self) -> &Environment<'static> {
        &self.inner.templates
    }
}
