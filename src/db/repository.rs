//! Database repository for flavor CRUD operations.
//!
//! Uses prepared statements; every write rides SQLite's implicit
//! single-statement transaction.

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::errors::{AppError, FLAVOR_NOT_FOUND};
use crate::models::{CreateFlavorRequest, Flavor, UpdateFlavorRequest};

/// Database repository for all flavor operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all flavors, ascending by scoop id.
    pub async fn list_flavors(&self) -> Result<Vec<Flavor>, AppError> {
        let rows = sqlx::query(
            "SELECT scoop_id, flavor, churned_at, best_before FROM flavors ORDER BY scoop_id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(flavor_from_row).collect())
    }

    /// Get a flavor by scoop id.
    pub async fn get_flavor(&self, scoop_id: i64) -> Result<Option<Flavor>, AppError> {
        let row = sqlx::query(
            "SELECT scoop_id, flavor, churned_at, best_before FROM flavors WHERE scoop_id = ?",
        )
        .bind(scoop_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(flavor_from_row))
    }

    /// Create a new flavor. The store assigns the scoop id.
    pub async fn create_flavor(&self, request: &CreateFlavorRequest) -> Result<Flavor, AppError> {
        let now = Utc::now();

        let result =
            sqlx::query("INSERT INTO flavors (flavor, churned_at, best_before) VALUES (?, ?, ?)")
                .bind(&request.flavor)
                .bind(request.churned_at)
                .bind(now)
                .execute(&self.pool)
                .await?;

        Ok(Flavor {
            scoop_id: result.last_insert_rowid(),
            flavor: request.flavor.clone(),
            churned_at: request.churned_at,
            best_before: now,
        })
    }

    /// Partially update a flavor. Only fields present in the request change;
    /// `best_before` is refreshed unconditionally.
    pub async fn update_flavor(
        &self,
        scoop_id: i64,
        request: &UpdateFlavorRequest,
    ) -> Result<Flavor, AppError> {
        let existing = self
            .get_flavor(scoop_id)
            .await?
            .ok_or_else(|| AppError::NotFound(FLAVOR_NOT_FOUND.to_string()))?;

        let now = Utc::now();
        let flavor = request.flavor.as_ref().unwrap_or(&existing.flavor);
        let churned_at = request.churned_at.or(existing.churned_at);

        sqlx::query(
            "UPDATE flavors SET flavor = ?, churned_at = ?, best_before = ? WHERE scoop_id = ?",
        )
        .bind(flavor)
        .bind(churned_at)
        .bind(now)
        .bind(scoop_id)
        .execute(&self.pool)
        .await?;

        Ok(Flavor {
            scoop_id,
            flavor: flavor.clone(),
            churned_at,
            best_before: now,
        })
    }

    /// Delete a flavor.
    pub async fn delete_flavor(&self, scoop_id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM flavors WHERE scoop_id = ?")
            .bind(scoop_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(FLAVOR_NOT_FOUND.to_string()));
        }

        Ok(())
    }
}

/// Map a database row to a Flavor.
fn flavor_from_row(row: &SqliteRow) -> Flavor {
    Flavor {
        scoop_id: row.get("scoop_id"),
        flavor: row.get("flavor"),
        churned_at: row.get::<Option<DateTime<Utc>>, _>("churned_at"),
        best_before: row.get::<DateTime<Utc>, _>("best_before"),
    }
}
