//! PostgreSQL-backed store.

use super::FrameworkStore;
use crate::error::AppError;
use crate::model::{Framework, FrameworkVersion, NewFramework, NewVersion};
use async_trait::async_trait;
use sqlx::PgPool;

const FRAMEWORK_COLUMNS: &str = "id, name, hype_level, deprecation_date, current_version_id";
const VERSION_COLUMNS: &str = "id, version, description, framework_id";

#[derive(Clone)]
pub struct PgFrameworkStore {
    pool: PgPool,
}

impl PgFrameworkStore {
    pub fn new(pool: PgPool) -> Self {
        PgFrameworkStore { pool }
    }
}

#[async_trait]
impl FrameworkStore for PgFrameworkStore {
    async fn list_frameworks(&self, name_contains: Option<&str>) -> Result<Vec<Framework>, AppError> {
        let rows = match name_contains {
            Some(needle) => {
                // strpos keeps % and _ literal, unlike LIKE
                let sql = format!(
                    "SELECT {} FROM framework WHERE strpos(name, $1) > 0 ORDER BY id",
                    FRAMEWORK_COLUMNS
                );
                tracing::debug!(sql = %sql, needle, "query");
                sqlx::query_as::<_, Framework>(&sql)
                    .bind(needle)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                let sql = format!("SELECT {} FROM framework ORDER BY id", FRAMEWORK_COLUMNS);
                tracing::debug!(sql = %sql, "query");
                sqlx::query_as::<_, Framework>(&sql).fetch_all(&self.pool).await?
            }
        };
        Ok(rows)
    }

    async fn find_framework(&self, id: i64) -> Result<Option<Framework>, AppError> {
        let sql = format!("SELECT {} FROM framework WHERE id = $1", FRAMEWORK_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Framework>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert_framework(&self, framework: &NewFramework) -> Result<Framework, AppError> {
        let sql = format!(
            "INSERT INTO framework (name, hype_level, deprecation_date) VALUES ($1, $2, $3) RETURNING {}",
            FRAMEWORK_COLUMNS
        );
        tracing::debug!(sql = %sql, name = %framework.name, "query");
        let row = sqlx::query_as::<_, Framework>(&sql)
            .bind(&framework.name)
            .bind(framework.hype_level)
            .bind(framework.deprecation_date)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn upsert_framework(&self, id: i64, framework: &NewFramework) -> Result<Framework, AppError> {
        let sql = format!(
            r#"
            INSERT INTO framework (id, name, hype_level, deprecation_date) VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                hype_level = EXCLUDED.hype_level,
                deprecation_date = EXCLUDED.deprecation_date
            RETURNING {}
            "#,
            FRAMEWORK_COLUMNS
        );
        tracing::debug!(sql = %sql, id, name = %framework.name, "query (tx)");
        let mut tx = self.pool.begin().await?;
        let row = sqlx::query_as::<_, Framework>(&sql)
            .bind(id)
            .bind(&framework.name)
            .bind(framework.hype_level)
            .bind(framework.deprecation_date)
            .fetch_one(&mut *tx)
            .await?;
        // An explicit id bypasses the sequence; advance it so later inserts don't collide.
        sqlx::query(
            "SELECT setval('framework_id_seq', $1) FROM framework_id_seq WHERE $1 > 0 AND (last_value < $1 OR NOT is_called)",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(row)
    }

    async fn delete_framework(&self, id: i64) -> Result<bool, AppError> {
        tracing::debug!(id, "delete framework");
        let result = sqlx::query("DELETE FROM framework WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn add_current_version(
        &self,
        framework_id: i64,
        version: &NewVersion,
    ) -> Result<Option<FrameworkVersion>, AppError> {
        let mut tx = self.pool.begin().await?;
        // Row lock serializes concurrent setversion calls on the same framework.
        let owner: Option<(i64,)> = sqlx::query_as("SELECT id FROM framework WHERE id = $1 FOR UPDATE")
            .bind(framework_id)
            .fetch_optional(&mut *tx)
            .await?;
        if owner.is_none() {
            tx.rollback().await?;
            return Ok(None);
        }

        let sql = format!(
            "INSERT INTO framework_version (version, description, framework_id) VALUES ($1, $2, $3) RETURNING {}",
            VERSION_COLUMNS
        );
        tracing::debug!(sql = %sql, framework_id, version = version.version, "query (tx)");
        let row = sqlx::query_as::<_, FrameworkVersion>(&sql)
            .bind(version.version)
            .bind(&version.description)
            .bind(framework_id)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("UPDATE framework SET current_version_id = $1 WHERE id = $2")
            .bind(row.id)
            .bind(framework_id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(Some(row))
    }

    async fn versions_of(&self, framework_ids: &[i64]) -> Result<Vec<FrameworkVersion>, AppError> {
        if framework_ids.is_empty() {
            return Ok(Vec::new());
        }
        let sql = format!(
            "SELECT {} FROM framework_version WHERE framework_id = ANY($1) ORDER BY id",
            VERSION_COLUMNS
        );
        tracing::debug!(sql = %sql, count = framework_ids.len(), "query");
        let rows = sqlx::query_as::<_, FrameworkVersion>(&sql)
            .bind(framework_ids)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
