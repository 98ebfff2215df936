use addrbook_core::error::{AddrbookError, Result};
use addrbook_core::models::{CoordinateInput, LocationRecord, NewRecord, RecordId, RecordPatch};
use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::Row;

use super::PostgresStore;
use crate::ports::RecordStore;

fn storage_error(action: &str, err: sqlx::Error) -> AddrbookError {
    AddrbookError::Storage(format!("Failed to {}: {}", action, err))
}

fn row_to_record(row: &PgRow) -> Result<LocationRecord> {
    let decode = |e| storage_error("decode address row", e);

    Ok(LocationRecord {
        id: RecordId(row.try_get("id").map_err(decode)?),
        name: row.try_get("name").map_err(decode)?,
        latitude: CoordinateInput::Text(row.try_get("latitude").map_err(decode)?),
        longitude: CoordinateInput::Text(row.try_get("longitude").map_err(decode)?),
    })
}

fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[async_trait]
impl RecordStore for PostgresStore {
    async fn create(&self, record: &NewRecord) -> Result<LocationRecord> {
        record.validate()?;

        let row = sqlx::query(
            r#"
            INSERT INTO addresses (name, latitude, longitude)
            VALUES ($1, $2, $3)
            RETURNING id, name, latitude, longitude
            "#,
        )
        .bind(&record.name)
        .bind(record.latitude.to_raw_string())
        .bind(record.longitude.to_raw_string())
        .fetch_one(self.pool())
        .await
        .map_err(|e| storage_error("create address", e))?;

        row_to_record(&row)
    }

    async fn get(&self, id: RecordId) -> Result<Option<LocationRecord>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, latitude, longitude
            FROM addresses
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| storage_error("get address", e))?;

        row.as_ref().map(row_to_record).transpose()
    }

    async fn list(&self, skip: usize, limit: usize) -> Result<Vec<LocationRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, latitude, longitude
            FROM addresses
            ORDER BY id
            OFFSET $1
            LIMIT $2
            "#,
        )
        .bind(to_i64(skip))
        .bind(to_i64(limit))
        .fetch_all(self.pool())
        .await
        .map_err(|e| storage_error("list addresses", e))?;

        rows.iter().map(row_to_record).collect()
    }

    async fn update(&self, id: RecordId, patch: &RecordPatch) -> Result<Option<LocationRecord>> {
        patch.validate()?;

        let row = sqlx::query(
            r#"
            UPDATE addresses
            SET name = COALESCE($2, name),
                latitude = COALESCE($3, latitude),
                longitude = COALESCE($4, longitude),
                updated_at = now()
            WHERE id = $1
            RETURNING id, name, latitude, longitude
            "#,
        )
        .bind(id.0)
        .bind(patch.name.as_deref())
        .bind(patch.latitude.as_ref().map(CoordinateInput::to_raw_string))
        .bind(patch.longitude.as_ref().map(CoordinateInput::to_raw_string))
        .fetch_optional(self.pool())
        .await
        .map_err(|e| storage_error("update address", e))?;

        row.as_ref().map(row_to_record).transpose()
    }

    async fn delete(&self, id: RecordId) -> Result<Option<LocationRecord>> {
        let row = sqlx::query(
            r#"
            DELETE FROM addresses
            WHERE id = $1
            RETURNING id, name, latitude, longitude
            "#,
        )
        .bind(id.0)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| storage_error("delete address", e))?;

        row.as_ref().map(row_to_record).transpose()
    }

    async fn all(&self) -> Result<Vec<LocationRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, latitude, longitude
            FROM addresses
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool())
        .await
        .map_err(|e| storage_error("load addresses", e))?;

        tracing::debug!(count = rows.len(), "Loaded address snapshot");

        rows.iter().map(row_to_record).collect()
    }
}
