use crate::{DbError, ReplicaStore, Result as DbErrorResult};

use hd_core::{DEFAULT_ROLE, ErrorLocation, IdentityReplica, ReplicaUpdate};

use std::panic::Location;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const REPLICA_COLUMNS: &str =
    "id, employee_code, email, first_name, last_name, role, is_active, created_at, updated_at";

// Single-statement insert-or-update. A NULL employee_code keeps the stored one and
// the trailing flag decides whether role is overwritten.
const UPSERT_SQL: &str = r#"
    INSERT INTO identity_replicas
        (id, employee_code, email, first_name, last_name, role, is_active, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?, COALESCE(?, ?), ?, ?, ?)
    ON CONFLICT(id) DO UPDATE SET
        employee_code = COALESCE(excluded.employee_code, identity_replicas.employee_code),
        email = excluded.email,
        first_name = excluded.first_name,
        last_name = excluded.last_name,
        role = CASE WHEN ? THEN excluded.role ELSE identity_replicas.role END,
        is_active = excluded.is_active,
        updated_at = excluded.updated_at
    RETURNING id, employee_code, email, first_name, last_name, role, is_active, created_at, updated_at
"#;

#[derive(Clone)]
pub struct IdentityReplicaRepository {
    pool: SqlitePool,
}

impl IdentityReplicaRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<IdentityReplica>> {
        let sql = format!("SELECT {REPLICA_COLUMNS} FROM identity_replicas WHERE email = ?");

        let row = sqlx::query(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(replica_from_row).transpose()
    }

    /// Mark a replica inactive. Replicas are never hard-deleted.
    pub async fn deactivate(&self, id: Uuid) -> DbErrorResult<bool> {
        let id_str = id.to_string();
        let now = Utc::now().timestamp();

        let result = sqlx::query(
            "UPDATE identity_replicas SET is_active = 0, updated_at = ? WHERE id = ?",
        )
        .bind(now)
        .bind(&id_str)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM identity_replicas")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl ReplicaStore for IdentityReplicaRepository {
    async fn upsert(&self, id: Uuid, update: &ReplicaUpdate) -> DbErrorResult<IdentityReplica> {
        let id_str = id.to_string();
        let now = Utc::now().timestamp();

        let row = sqlx::query(UPSERT_SQL)
            .bind(&id_str)
            .bind(update.employee_code.as_deref())
            .bind(&update.email)
            .bind(&update.first_name)
            .bind(&update.last_name)
            .bind(update.role.as_deref())
            .bind(DEFAULT_ROLE)
            .bind(update.is_active)
            .bind(now)
            .bind(now)
            .bind(update.role.is_some())
            .fetch_one(&self.pool)
            .await?;

        replica_from_row(&row)
    }

    async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<IdentityReplica>> {
        let id_str = id.to_string();
        let sql = format!("SELECT {REPLICA_COLUMNS} FROM identity_replicas WHERE id = ?");

        let row = sqlx::query(&sql)
            .bind(&id_str)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(replica_from_row).transpose()
    }
}

fn replica_from_row(row: &SqliteRow) -> DbErrorResult<IdentityReplica> {
    let id: String = row.try_get("id")?;

    Ok(IdentityReplica {
        id: Uuid::parse_str(&id).map_err(|e| DbError::Initialization {
            message: format!("Invalid UUID in identity_replicas.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        employee_code: row.try_get("employee_code")?,
        email: row.try_get("email")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        role: row.try_get("role")?,
        is_active: row.try_get("is_active")?,
        created_at: timestamp(row.try_get("created_at")?, "created_at")?,
        updated_at: timestamp(row.try_get("updated_at")?, "updated_at")?,
    })
}

fn timestamp(seconds: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(seconds, 0).ok_or_else(|| DbError::Initialization {
        message: format!("Invalid timestamp in identity_replicas.{}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}
