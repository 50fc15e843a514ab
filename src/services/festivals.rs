//! Festival bot operations.
//!
//! Every operation takes the pool explicitly and returns a [`FestivalResult`]; the chat handlers
//! decide how outcomes and errors are presented.

use sqlx::SqlitePool;

use crate::database::models::{AttendanceStatus, Attendee, Festival, NewFestival, User};
use crate::error::{FestivalError, FestivalResult};
use crate::utils::format;
use crate::utils::logging::log_database_operation;
use crate::utils::validation::{
    validate_date_range, validate_festival_name, validate_festival_query, validate_link,
};

/// The Telegram account a command came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: i64,
    pub name: String,
}

impl Account {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

/// What an attendance command did to the (user, festival) row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceChange {
    /// A new row was inserted
    Created { status: AttendanceStatus },
    /// The existing row got a different status
    Updated {
        previous: AttendanceStatus,
        status: AttendanceStatus,
    },
    /// The row already had the requested status
    Unchanged { status: AttendanceStatus },
    /// The row was deleted
    Removed { previous: AttendanceStatus },
    /// "Not attending" was requested and there was no row to delete
    NotAttending,
}

pub async fn login(pool: &SqlitePool, account: &Account) -> FestivalResult<(User, bool)> {
    log_database_operation("GET_OR_CREATE", "users", Some(&format!("telegram_id={}", account.id)));
    let (user, created) = User::get_or_create(pool, account.id, &account.name).await?;
    Ok((user, created))
}

/// Validates and stores a festival, returning the stored row and whether it is new
pub async fn add_festival(pool: &SqlitePool, new: NewFestival) -> FestivalResult<(Festival, bool)> {
    let name = new.name.trim().to_string();
    validate_festival_name(&name).map_err(|e| FestivalError::invalid_input(e.to_string()))?;
    validate_date_range(new.start_date, new.end_date)
        .map_err(|e| FestivalError::invalid_input(e.to_string()))?;

    let link = match new.link.as_deref().map(str::trim) {
        Some("") | None => None,
        Some(link) => {
            validate_link(link).map_err(|e| FestivalError::invalid_input(e.to_string()))?;
            Some(link.to_string())
        }
    };

    let new = NewFestival { name, link, ..new };
    log_database_operation("GET_OR_CREATE", "festivals", Some(&new.name));
    Festival::get_or_create(pool, &new).await
}

/// Resolves a free-text query to exactly one festival.
///
/// The query matches case-insensitively anywhere in the name. When several names match, the
/// one equal to the query wins; otherwise the result is an [`FestivalError::Ambiguous`] error
/// carrying every candidate name.
pub async fn find_festival(pool: &SqlitePool, query: &str) -> FestivalResult<Festival> {
    validate_festival_query(query).map_err(|e| FestivalError::invalid_input(e.to_string()))?;
    let query = query.trim();

    log_database_operation("SEARCH", "festivals", Some(query));
    let mut matches = Festival::search(pool, query).await?;

    match matches.len() {
        0 => Err(FestivalError::NotFound {
            query: query.to_string(),
        }),
        1 => Ok(matches.remove(0)),
        _ => {
            let key = query.to_lowercase();
            let exact: Vec<usize> = matches
                .iter()
                .enumerate()
                .filter(|(_, festival)| festival.name.to_lowercase() == key)
                .map(|(index, _)| index)
                .collect();

            match exact.as_slice() {
                [index] => Ok(matches.swap_remove(*index)),
                _ => Err(FestivalError::Ambiguous {
                    query: query.to_string(),
                    candidates: matches.into_iter().map(|festival| festival.name).collect(),
                }),
            }
        }
    }
}

/// Moves the account's attendance for a festival to `status`.
///
/// The account is registered on the fly when a row has to be created. Setting
/// [`AttendanceStatus::NotAttending`] deletes the row and never registers anyone; every other
/// status creates or updates it, so a pair never has more than one row.
pub async fn set_attendance(
    pool: &SqlitePool,
    account: &Account,
    festival_id: i64,
    status: AttendanceStatus,
) -> FestivalResult<AttendanceChange> {
    let existing = Attendee::find(pool, festival_id, account.id).await?;

    if status == AttendanceStatus::NotAttending {
        log_database_operation(
            "DELETE",
            "attendees",
            Some(&format!("festival_id={} user_id={}", festival_id, account.id)),
        );
        let deleted = Attendee::delete(pool, festival_id, account.id).await?;
        return Ok(match existing {
            Some(attendee) if deleted > 0 => AttendanceChange::Removed {
                previous: attendee.status,
            },
            _ => AttendanceChange::NotAttending,
        });
    }

    match existing {
        None => {
            User::get_or_create(pool, account.id, &account.name).await?;
            log_database_operation(
                "INSERT",
                "attendees",
                Some(&format!("festival_id={} user_id={} status={}", festival_id, account.id, status)),
            );
            Attendee::create(pool, festival_id, account.id, status).await?;
            Ok(AttendanceChange::Created { status })
        }
        Some(attendee) if attendee.status == status => Ok(AttendanceChange::Unchanged { status }),
        Some(attendee) => {
            log_database_operation(
                "UPDATE",
                "attendees",
                Some(&format!("id={} status={}", attendee.id, status)),
            );
            Attendee::update_status(pool, attendee.id, status).await?;
            Ok(AttendanceChange::Updated {
                previous: attendee.status,
                status,
            })
        }
    }
}

pub async fn list_users(pool: &SqlitePool) -> FestivalResult<String> {
    let users = User::list(pool).await?;
    Ok(format::users_message(&users))
}

pub async fn list_festivals(pool: &SqlitePool) -> FestivalResult<String> {
    let festivals = Festival::list(pool).await?;
    Ok(format::festivals_message(&festivals))
}

pub async fn attendance_for_user(pool: &SqlitePool, user_id: i64) -> FestivalResult<String> {
    let attendance = Attendee::for_user(pool, user_id).await?;
    Ok(format::user_attendance_message(&attendance))
}

pub async fn attendees_for_festival(pool: &SqlitePool, festival: &Festival) -> FestivalResult<String> {
    let attendees = Attendee::for_festival(pool, festival.id).await?;
    Ok(format::festival_attendees_message(festival, &attendees))
}
