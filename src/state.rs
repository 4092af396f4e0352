//! Shared application state for all routes.

use crate::store::{FrameworkStore, MemoryStore, PgFrameworkStore};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn FrameworkStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn FrameworkStore>) -> Self {
        AppState { store }
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self::new(Arc::new(PgFrameworkStore::new(pool)))
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }
}
