use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct User {
    pub telegram_id: i64,
    pub name: String,
}

impl User {
    /// Inserts the user unless the account id is already known.
    ///
    /// Returns the stored row and whether it was created by this call. An existing user keeps
    /// the name it registered with.
    pub async fn get_or_create(
        pool: &sqlx::SqlitePool,
        telegram_id: i64,
        name: &str,
    ) -> Result<(Self, bool), sqlx::Error> {
        let inserted = sqlx::query("INSERT OR IGNORE INTO users (telegram_id, name) VALUES (?, ?)")
            .bind(telegram_id)
            .bind(name)
            .execute(pool)
            .await?
            .rows_affected();

        let user = Self::find_by_telegram_id(pool, telegram_id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;

        Ok((user, inserted > 0))
    }

    pub async fn find_by_telegram_id(
        pool: &sqlx::SqlitePool,
        telegram_id: i64,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT telegram_id, name FROM users WHERE telegram_id = ?")
            .bind(telegram_id)
            .fetch_optional(pool)
            .await
    }

    /// All users, ordered by account id
    pub async fn list(pool: &sqlx::SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT telegram_id, name FROM users ORDER BY telegram_id")
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &sqlx::SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await
    }
}
