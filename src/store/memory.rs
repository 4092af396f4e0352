//! In-process store used when no database is configured.

use super::FrameworkStore;
use crate::error::AppError;
use crate::model::{Framework, FrameworkVersion, NewFramework, NewVersion};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

pub struct MemoryStore {
    tables: RwLock<Tables>,
}

struct Tables {
    frameworks: BTreeMap<i64, Framework>,
    versions: BTreeMap<i64, FrameworkVersion>,
    next_framework_id: i64,
    next_version_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            tables: RwLock::new(Tables {
                frameworks: BTreeMap::new(),
                versions: BTreeMap::new(),
                next_framework_id: 1,
                next_version_id: 1,
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FrameworkStore for MemoryStore {
    async fn list_frameworks(&self, name_contains: Option<&str>) -> Result<Vec<Framework>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables
            .frameworks
            .values()
            .filter(|f| name_contains.map_or(true, |s| f.name.contains(s)))
            .cloned()
            .collect())
    }

    async fn find_framework(&self, id: i64) -> Result<Option<Framework>, AppError> {
        Ok(self.tables.read().await.frameworks.get(&id).cloned())
    }

    async fn insert_framework(&self, framework: &NewFramework) -> Result<Framework, AppError> {
        let mut tables = self.tables.write().await;
        let id = tables.next_framework_id;
        tables.next_framework_id = id
            .checked_add(1)
            .ok_or_else(|| AppError::BadRequest("framework ids exhausted".into()))?;
        let row = Framework {
            id,
            name: framework.name.clone(),
            hype_level: framework.hype_level,
            deprecation_date: framework.deprecation_date,
            current_version_id: None,
        };
        tables.frameworks.insert(id, row.clone());
        Ok(row)
    }

    async fn upsert_framework(&self, id: i64, framework: &NewFramework) -> Result<Framework, AppError> {
        let mut tables = self.tables.write().await;
        let current_version_id = tables.frameworks.get(&id).and_then(|f| f.current_version_id);
        let row = Framework {
            id,
            name: framework.name.clone(),
            hype_level: framework.hype_level,
            deprecation_date: framework.deprecation_date,
            current_version_id,
        };
        tables.frameworks.insert(id, row.clone());
        tables.next_framework_id = tables.next_framework_id.max(id.saturating_add(1));
        Ok(row)
    }

    async fn delete_framework(&self, id: i64) -> Result<bool, AppError> {
        let mut tables = self.tables.write().await;
        if tables.frameworks.remove(&id).is_none() {
            return Ok(false);
        }
        tables.versions.retain(|_, v| v.framework_id != id);
        Ok(true)
    }

    async fn add_current_version(
        &self,
        framework_id: i64,
        version: &NewVersion,
    ) -> Result<Option<FrameworkVersion>, AppError> {
        let mut tables = self.tables.write().await;
        if !tables.frameworks.contains_key(&framework_id) {
            return Ok(None);
        }
        let id = tables.next_version_id;
        tables.next_version_id += 1;
        let row = FrameworkVersion {
            id,
            version: version.version,
            description: version.description.clone(),
            framework_id,
        };
        tables.versions.insert(id, row.clone());
        if let Some(framework) = tables.frameworks.get_mut(&framework_id) {
            framework.current_version_id = Some(id);
        }
        Ok(Some(row))
    }

    async fn versions_of(&self, framework_ids: &[i64]) -> Result<Vec<FrameworkVersion>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables
            .versions
            .values()
            .filter(|v| framework_ids.contains(&v.framework_id))
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn version(v: f64) -> NewVersion {
        NewVersion {
            version: v,
            description: None,
        }
    }

    #[tokio::test]
    async fn ids_follow_insertion_order() {
        let store = MemoryStore::new();
        let react = store.insert_framework(&NewFramework::named("ReactJS")).await.unwrap();
        let vue = store.insert_framework(&NewFramework::named("Vue.js")).await.unwrap();
        assert_eq!((react.id, vue.id), (1, 2));

        let names: Vec<_> = store
            .list_frameworks(None)
            .await
            .unwrap()
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["ReactJS", "Vue.js"]);
    }

    #[tokio::test]
    async fn search_is_case_sensitive_substring() {
        let store = MemoryStore::new();
        store.insert_framework(&NewFramework::named("ReactJS")).await.unwrap();
        store.insert_framework(&NewFramework::named("Preact")).await.unwrap();

        let hits = store.list_frameworks(Some("act")).await.unwrap();
        assert_eq!(hits.len(), 2);
        let hits = store.list_frameworks(Some("Re")).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "ReactJS");
        assert!(store.list_frameworks(Some("react")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn upsert_unknown_id_creates_row_and_advances_ids() {
        let store = MemoryStore::new();
        store.upsert_framework(5, &NewFramework::named("Ember")).await.unwrap();
        let next = store.insert_framework(&NewFramework::named("Svelte")).await.unwrap();
        assert_eq!(next.id, 6);
    }

    #[tokio::test]
    async fn upsert_keeps_versions_and_pointer() {
        let store = MemoryStore::new();
        let fw = store.insert_framework(&NewFramework::named("ReactJS")).await.unwrap();
        let v = store.add_current_version(fw.id, &version(16.0)).await.unwrap().unwrap();

        let updated = store.upsert_framework(fw.id, &NewFramework::named("React")).await.unwrap();
        assert_eq!(updated.current_version_id, Some(v.id));
        assert_eq!(store.versions_of(&[fw.id]).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn versions_accumulate_and_pointer_moves() {
        let store = MemoryStore::new();
        let fw = store.insert_framework(&NewFramework::named("Angular")).await.unwrap();
        store.add_current_version(fw.id, &version(1.0)).await.unwrap();
        let second = store.add_current_version(fw.id, &version(2.0)).await.unwrap().unwrap();

        assert_eq!(store.versions_of(&[fw.id]).await.unwrap().len(), 2);
        let fw = store.find_framework(fw.id).await.unwrap().unwrap();
        assert_eq!(fw.current_version_id, Some(second.id));
        assert!(store.add_current_version(99, &version(1.0)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_cascades_to_versions() {
        let store = MemoryStore::new();
        let fw = store.insert_framework(&NewFramework::named("Knockout")).await.unwrap();
        store.add_current_version(fw.id, &version(3.5)).await.unwrap();

        assert!(store.delete_framework(fw.id).await.unwrap());
        assert!(store.versions_of(&[fw.id]).await.unwrap().is_empty());
        assert!(!store.delete_framework(fw.id).await.unwrap());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_versions_leave_pointer_on_last_commit() {
        let store = Arc::new(MemoryStore::new());
        let fw_id = store.insert_framework(&NewFramework::named("Svelte")).await.unwrap().id;

        let mut tasks = tokio::task::JoinSet::new();
        for i in 0..16 {
            let store = store.clone();
            tasks.spawn(async move {
                store
                    .add_current_version(fw_id, &version(1.0 + i as f64))
                    .await
                    .unwrap()
                    .unwrap()
                    .id
            });
        }
        let mut ids = HashSet::new();
        while let Some(id) = tasks.join_next().await {
            assert!(ids.insert(id.unwrap()));
        }

        assert_eq!(ids.len(), 16);
        assert_eq!(store.versions_of(&[fw_id]).await.unwrap().len(), 16);
        let fw = store.find_framework(fw_id).await.unwrap().unwrap();
        assert_eq!(fw.current_version_id, ids.iter().max().copied());
    }

    #[tokio::test]
    async fn upsert_at_top_of_id_range_does_not_overflow() {
        let store = MemoryStore::new();
        let row = store.upsert_framework(i64::MAX, &NewFramework::named("Edge")).await.unwrap();
        assert_eq!(row.id, i64::MAX);
    }
}
