use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

use super::festival::Festival;

/// How sure a user is about going to a festival. The ordinal is what gets stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type, Serialize, Deserialize)]
#[repr(i32)]
pub enum AttendanceStatus {
    NotAttending = 0,
    Maybe = 1,
    Attending = 2,
    HasTicket = 3,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::NotAttending => "not attending",
            AttendanceStatus::Maybe => "maybe",
            AttendanceStatus::Attending => "attending",
            AttendanceStatus::HasTicket => "has ticket",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            AttendanceStatus::NotAttending => "❌",
            AttendanceStatus::Maybe => "❓",
            AttendanceStatus::Attending => "✅",
            AttendanceStatus::HasTicket => "🎟️",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Attendee {
    pub id: i64,
    pub festival_id: i64,
    pub user_id: i64,
    pub status: AttendanceStatus,
}

/// One festival a user has an attendance row for
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct UserAttendance {
    pub festival_id: i64,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub link: Option<String>,
    pub status: AttendanceStatus,
}

impl UserAttendance {
    pub fn festival(&self) -> Festival {
        Festival {
            id: self.festival_id,
            name: self.name.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            link: self.link.clone(),
        }
    }
}

/// One user with an attendance row for a festival
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct FestivalAttendance {
    pub user_id: i64,
    pub name: String,
    pub status: AttendanceStatus,
}

impl Attendee {
    pub async fn find(
        pool: &sqlx::SqlitePool,
        festival_id: i64,
        user_id: i64,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Attendee>(
            "SELECT id, festival_id, user_id, status FROM attendees WHERE festival_id = ? AND user_id = ?"
        )
        .bind(festival_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }

    pub async fn create(
        pool: &sqlx::SqlitePool,
        festival_id: i64,
        user_id: i64,
        status: AttendanceStatus,
    ) -> Result<Self, sqlx::Error> {
        let id = sqlx::query(
            "INSERT INTO attendees (festival_id, user_id, status) VALUES (?, ?, ?)"
        )
        .bind(festival_id)
        .bind(user_id)
        .bind(status)
        .execute(pool)
        .await?
        .last_insert_rowid();

        Ok(Attendee {
            id,
            festival_id,
            user_id,
            status,
        })
    }

    pub async fn update_status(
        pool: &sqlx::SqlitePool,
        id: i64,
        status: AttendanceStatus,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE attendees SET status = ? WHERE id = ?")
            .bind(status)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Removes the row for this pair and returns how many rows were deleted (0 or 1)
    pub async fn delete(
        pool: &sqlx::SqlitePool,
        festival_id: i64,
        user_id: i64,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM attendees WHERE festival_id = ? AND user_id = ?")
            .bind(festival_id)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn for_user(
        pool: &sqlx::SqlitePool,
        user_id: i64,
    ) -> Result<Vec<UserAttendance>, sqlx::Error> {
        sqlx::query_as::<_, UserAttendance>(
            "SELECT f.id AS festival_id, f.name, f.start_date, f.end_date, f.link, a.status
             FROM attendees a
             JOIN festivals f ON f.id = a.festival_id
             WHERE a.user_id = ?
             ORDER BY f.start_date, f.name"
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    pub async fn for_festival(
        pool: &sqlx::SqlitePool,
        festival_id: i64,
    ) -> Result<Vec<FestivalAttendance>, sqlx::Error> {
        sqlx::query_as::<_, FestivalAttendance>(
            "SELECT u.telegram_id AS user_id, u.name, a.status
             FROM attendees a
             JOIN users u ON u.telegram_id = a.user_id
             WHERE a.festival_id = ?
             ORDER BY a.status DESC, a.id"
        )
        .bind(festival_id)
        .fetch_all(pool)
        .await
    }
}
