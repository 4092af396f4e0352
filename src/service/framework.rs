//! Framework operations: validation, store calls and response assembly.

use crate::error::AppError;
use crate::model::{FrameworkPayload, FrameworkView, NestedVersionView, VersionPayload, VersionView};
use crate::service::RequestValidator;
use crate::store::FrameworkStore;
use std::collections::HashMap;

pub struct FrameworkService;

impl FrameworkService {
    /// All frameworks in id order, each with its versions embedded.
    pub async fn list(store: &dyn FrameworkStore) -> Result<Vec<FrameworkView>, AppError> {
        Self::with_versions(store, None).await
    }

    /// Frameworks whose name contains `needle` (case-sensitive).
    pub async fn search(store: &dyn FrameworkStore, needle: &str) -> Result<Vec<FrameworkView>, AppError> {
        Self::with_versions(store, Some(needle)).await
    }

    pub async fn create(store: &dyn FrameworkStore, payload: FrameworkPayload) -> Result<i64, AppError> {
        let framework = RequestValidator::framework(payload)?;
        let created = store.insert_framework(&framework).await?;
        tracing::info!(id = created.id, name = %created.name, "framework created");
        Ok(created.id)
    }

    /// Full replace under the path id. Unknown ids are created, not rejected.
    pub async fn update(store: &dyn FrameworkStore, id: i64, payload: FrameworkPayload) -> Result<(), AppError> {
        // the id generator must still have a value left after this id
        if id == i64::MAX {
            return Err(AppError::BadRequest(format!("framework id {} is out of range", id)));
        }
        let framework = RequestValidator::framework(payload)?;
        store.upsert_framework(id, &framework).await?;
        tracing::info!(id, "framework updated");
        Ok(())
    }

    pub async fn delete(store: &dyn FrameworkStore, id: i64) -> Result<(), AppError> {
        if !store.delete_framework(id).await? {
            return Err(AppError::FrameworkNotFound(id));
        }
        tracing::info!(id, "framework deleted");
        Ok(())
    }

    /// The framework must exist before the payload is even looked at.
    pub async fn set_version(
        store: &dyn FrameworkStore,
        id: i64,
        payload: VersionPayload,
    ) -> Result<VersionView, AppError> {
        if store.find_framework(id).await?.is_none() {
            return Err(AppError::FrameworkNotFound(id));
        }
        let version = RequestValidator::version(payload)?;
        // deleted between the check and the insert
        let row = store
            .add_current_version(id, &version)
            .await?
            .ok_or(AppError::FrameworkNotFound(id))?;
        tracing::info!(framework_id = id, version_id = row.id, version = row.version, "current version set");
        Ok(row.into())
    }

    pub async fn versions(store: &dyn FrameworkStore, id: i64) -> Result<Vec<VersionView>, AppError> {
        if store.find_framework(id).await?.is_none() {
            return Err(AppError::FrameworkNotFound(id));
        }
        let rows = store.versions_of(&[id]).await?;
        Ok(rows.into_iter().map(VersionView::from).collect())
    }

    async fn with_versions(
        store: &dyn FrameworkStore,
        needle: Option<&str>,
    ) -> Result<Vec<FrameworkView>, AppError> {
        let frameworks = store.list_frameworks(needle).await?;
        let ids: Vec<i64> = frameworks.iter().map(|f| f.id).collect();
        let mut by_owner: HashMap<i64, Vec<NestedVersionView>> = HashMap::new();
        for v in store.versions_of(&ids).await? {
            by_owner.entry(v.framework_id).or_default().push(v.into());
        }
        Ok(frameworks
            .into_iter()
            .map(|f| {
                let versions = by_owner.remove(&f.id).unwrap_or_default();
                FrameworkView::assemble(f, versions)
            })
            .collect())
    }
}
