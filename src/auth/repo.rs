use anyhow::Context;
use sqlx::SqlitePool;

use crate::auth::repo_types::{Farmer, NewFarmer};

impl Farmer {
    /// Find a farmer by (normalized) email.
    pub async fn find_by_email(db: &SqlitePool, email: &str) -> anyhow::Result<Option<Farmer>> {
        let farmer = sqlx::query_as::<_, Farmer>(
            r#"
            SELECT id, name, email, village, password AS password_hash, created_at
            FROM farmers
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
        .context("find farmer by email")?;
        Ok(farmer)
    }

    /// Insert a new account. Fails on a duplicate email, see [`is_duplicate_email`].
    pub async fn create(db: &SqlitePool, new: &NewFarmer<'_>) -> anyhow::Result<Farmer> {
        let farmer = sqlx::query_as::<_, Farmer>(
            r#"
            INSERT INTO farmers (name, email, village, password)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, email, village, password AS password_hash, created_at
            "#,
        )
        .bind(new.name)
        .bind(new.email)
        .bind(new.village)
        .bind(new.password_hash)
        .fetch_one(db)
        .await
        .context("insert farmer")?;
        Ok(farmer)
    }

    pub async fn count(db: &SqlitePool) -> anyhow::Result<i64> {
        let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM farmers")
            .fetch_one(db)
            .await
            .context("count farmers")?;
        Ok(n)
    }
}

/// True when `err` comes from the UNIQUE constraint on `farmers.email`.
pub fn is_duplicate_email(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<sqlx::Error>()
            .and_then(|e| e.as_database_error())
            .is_some_and(|db| db.is_unique_violation())
    })
}
