use std::collections::HashSet;

use aw_core::ArticleCatalog;
use tokio::sync::RwLock;

/// Shared per-process state: the read-only article catalog plus the saved
/// item ids owned by the save endpoint. The set lives behind a lock instead
/// of a bare process-wide collection so concurrent handlers stay safe.
pub struct AppState {
    pub catalog: ArticleCatalog,
    pub saved: RwLock<HashSet<String>>,
}

impl AppState {
    pub fn new(catalog: ArticleCatalog) -> Self {
        Self {
            catalog,
            saved: RwLock::new(HashSet::new()),
        }
    }
}
