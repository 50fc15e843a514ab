//! Renders festival data and operation outcomes as MarkdownV2 reply text.

use crate::database::models::{Festival, FestivalAttendance, User, UserAttendance};
use crate::error::FestivalError;
use crate::services::festivals::AttendanceChange;
use crate::utils::datetime::format_day_month;
use crate::utils::markdown::{escape_markdown, markdown_link};

pub const NO_USERS: &str = "There are no users yet";
pub const NO_FESTIVALS: &str = "There are no festivals yet";
pub const NO_ATTENDANCE: &str = "You're not attending any festivals yet";

pub const ADD_USAGE: &str = "/add takes 3 or 4 arguments on separate lines:
{festival name}
{start date (day.month)}
{end date (day.month)}
[{link}]";

/// `[name](link) (DD.MM - DD.MM)`, or just the name when there is no link
pub fn festival_markdown(festival: &Festival) -> String {
    let name = match &festival.link {
        Some(link) => markdown_link(&festival.name, link),
        None => escape_markdown(&festival.name),
    };

    format!(
        "{} {}",
        name,
        escape_markdown(&format!(
            "({} - {})",
            format_day_month(&festival.start_date),
            format_day_month(&festival.end_date)
        ))
    )
}

pub fn users_message(users: &[User]) -> String {
    if users.is_empty() {
        return escape_markdown(NO_USERS);
    }

    users
        .iter()
        .map(|user| escape_markdown(&user.name))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn festivals_message(festivals: &[Festival]) -> String {
    if festivals.is_empty() {
        return escape_markdown(NO_FESTIVALS);
    }

    festivals
        .iter()
        .map(festival_markdown)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn user_attendance_message(attendance: &[UserAttendance]) -> String {
    if attendance.is_empty() {
        return escape_markdown(NO_ATTENDANCE);
    }

    let mut message = escape_markdown("Your festivals:");
    for entry in attendance {
        message.push('\n');
        message.push_str(&format!(
            "{} {} {}",
            entry.status.emoji(),
            festival_markdown(&entry.festival()),
            escape_markdown(&format!("- {}", entry.status))
        ));
    }
    message
}

pub fn festival_attendees_message(festival: &Festival, attendees: &[FestivalAttendance]) -> String {
    if attendees.is_empty() {
        return format!(
            "{} {} {}",
            escape_markdown("Nobody is attending"),
            festival_markdown(festival),
            escape_markdown("yet")
        );
    }

    let mut message = format!("{}:", festival_markdown(festival));
    for attendee in attendees {
        message.push('\n');
        message.push_str(&format!(
            "{} {}",
            attendee.status.emoji(),
            escape_markdown(&format!("{} - {}", attendee.name, attendee.status))
        ));
    }
    message
}

pub fn login_message(user: &User, created: bool) -> String {
    if created {
        escape_markdown(&format!("Successfully logged into festival bot {}", user.name))
    } else {
        escape_markdown("You've already been logged in")
    }
}

pub fn festival_added_message(festival: &Festival, created: bool) -> String {
    let suffix = if created { "has been added" } else { "already exists" };
    format!("{} {}", festival_markdown(festival), escape_markdown(suffix))
}

pub fn attendance_change_message(festival: &Festival, change: &AttendanceChange) -> String {
    let festival = festival_markdown(festival);
    match change {
        AttendanceChange::Created { status } => format!(
            "{} {} {}",
            escape_markdown("Your status for"),
            festival,
            escape_markdown(&format!("is now: {status}"))
        ),
        AttendanceChange::Updated { previous, status } => format!(
            "{} {} {}",
            escape_markdown("Your status for"),
            festival,
            escape_markdown(&format!("changed from {previous} to {status}"))
        ),
        AttendanceChange::Unchanged { status } => format!(
            "{} {} {}",
            escape_markdown("Your status for"),
            festival,
            escape_markdown(&format!("already is: {status}"))
        ),
        AttendanceChange::Removed { .. } => {
            format!("{} {}", escape_markdown("You're no longer attending"), festival)
        }
        AttendanceChange::NotAttending => {
            format!("{} {}", escape_markdown("You weren't attending"), festival)
        }
    }
}

/// Reply for a failed operation. `command` is the command name without the slash.
pub fn error_message(error: &FestivalError, command: &str) -> String {
    match error {
        FestivalError::InvalidInput(message) => escape_markdown(message),
        FestivalError::NotFound { query } => format!(
            "{} `/festivals` {}",
            escape_markdown(&format!("{query} was not found in festivals (execute")),
            escape_markdown("to list available festivals)")
        ),
        FestivalError::Ambiguous { query, candidates } => {
            let mut message = escape_markdown(&format!(
                "{query} matches multiple festivals, please be more specific:"
            ));
            for candidate in candidates {
                message.push('\n');
                message.push_str(&escape_markdown(&format!("• {candidate}")));
            }
            message.push('\n');
            message.push_str(&escape_markdown(&format!("(e.g. /{command} {})", longest(candidates))));
            message
        }
        FestivalError::Conflict { .. } => format!(
            "{} `/festivals` {}",
            escape_markdown(&format!("Could not add the festival: {error}. Check")),
            escape_markdown("for the stored version")
        ),
        FestivalError::Database(_) => escape_markdown("Something went wrong, please try again later"),
    }
}

fn longest(candidates: &[String]) -> &str {
    candidates
        .iter()
        .max_by_key(|candidate| candidate.chars().count())
        .map(String::as_str)
        .unwrap_or_default()
}
