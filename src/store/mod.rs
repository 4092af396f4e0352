//! Storage seam for frameworks and their versions.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgFrameworkStore;

use crate::error::AppError;
use crate::model::{Framework, FrameworkVersion, NewFramework, NewVersion};
use async_trait::async_trait;

#[async_trait]
pub trait FrameworkStore: Send + Sync {
    /// Frameworks in id order; with `name_contains`, only those whose name contains it (case-sensitive).
    async fn list_frameworks(&self, name_contains: Option<&str>) -> Result<Vec<Framework>, AppError>;

    async fn find_framework(&self, id: i64) -> Result<Option<Framework>, AppError>;

    /// Insert under a freshly generated id.
    async fn insert_framework(&self, framework: &NewFramework) -> Result<Framework, AppError>;

    /// Replace the framework's own columns, creating the row when `id` is unknown.
    /// Owned versions and the current-version pointer are left alone.
    async fn upsert_framework(&self, id: i64, framework: &NewFramework) -> Result<Framework, AppError>;

    /// Delete the framework and its versions. Returns false when nothing was deleted.
    async fn delete_framework(&self, id: i64) -> Result<bool, AppError>;

    /// Atomically insert a version owned by `framework_id` and make it the current one.
    /// Returns `None` when the framework does not exist.
    async fn add_current_version(
        &self,
        framework_id: i64,
        version: &NewVersion,
    ) -> Result<Option<FrameworkVersion>, AppError>;

    /// Versions owned by any of `framework_ids`, in id order.
    async fn versions_of(&self, framework_ids: &[i64]) -> Result<Vec<FrameworkVersion>, AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}
