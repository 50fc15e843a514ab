use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::{is_unique_violation, FestivalError};

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Festival {
    pub id: i64,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub link: Option<String>,
}

/// Field values of a festival that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFestival {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub link: Option<String>,
}

const FESTIVAL_COLUMNS: &str = "id, name, start_date, end_date, link";

impl Festival {
    /// Returns the festival matching every field of `new`, inserting it when there is none.
    ///
    /// A stored festival with the same name (case-insensitive) or link but different other
    /// fields is reported as [`FestivalError::Conflict`] and left untouched.
    pub async fn get_or_create(
        pool: &sqlx::SqlitePool,
        new: &NewFestival,
    ) -> Result<(Self, bool), FestivalError> {
        let existing = sqlx::query_as::<_, Festival>(&format!(
            "SELECT {FESTIVAL_COLUMNS} FROM festivals WHERE name = ? AND start_date = ? AND end_date = ? AND link IS ?"
        ))
        .bind(&new.name)
        .bind(new.start_date)
        .bind(new.end_date)
        .bind(&new.link)
        .fetch_optional(pool)
        .await?;

        if let Some(festival) = existing {
            return Ok((festival, false));
        }

        let result = sqlx::query(
            "INSERT INTO festivals (name, start_date, end_date, link) VALUES (?, ?, ?, ?)"
        )
        .bind(&new.name)
        .bind(new.start_date)
        .bind(new.end_date)
        .bind(&new.link)
        .execute(pool)
        .await;

        let id = match result {
            Ok(done) => done.last_insert_rowid(),
            Err(e) if is_unique_violation(&e) => {
                return Err(FestivalError::Conflict {
                    name: new.name.clone(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        let festival = Self::find_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;

        Ok((festival, true))
    }

    pub async fn find_by_id(
        pool: &sqlx::SqlitePool,
        id: i64,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Festival>(&format!(
            "SELECT {FESTIVAL_COLUMNS} FROM festivals WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Festivals whose name contains `query`, ignoring case.
    ///
    /// Names are compared as `str::to_lowercase` keys, so non-ASCII letters fold too. `%` and
    /// `_` in the query match literally.
    pub async fn search(
        pool: &sqlx::SqlitePool,
        query: &str,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let needle = query.to_lowercase();
        let festivals = Self::list(pool).await?;

        Ok(festivals
            .into_iter()
            .filter(|festival| festival.name.to_lowercase().contains(&needle))
            .collect())
    }

    /// All festivals ordered by start date
    pub async fn list(pool: &sqlx::SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Festival>(&format!(
            "SELECT {FESTIVAL_COLUMNS} FROM festivals ORDER BY start_date, name"
        ))
        .fetch_all(pool)
        .await
    }

    pub async fn count(pool: &sqlx::SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM festivals")
            .fetch_one(pool)
            .await
    }
}
