pub mod attendance;
pub mod festivals;
pub mod login;

use teloxide::types::Message;
use teloxide::utils::command::BotCommands;

use crate::database::models::{AttendanceStatus, NewFestival};
use crate::error::{FestivalError, FestivalResult};
use crate::services::festivals::Account;
use crate::utils::datetime::parse_day_month;
use crate::utils::format::ADD_USAGE;
use crate::utils::logging::CommandContext;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Festival bot commands:")]
pub enum Command {
    #[command(description = "Display this help message")]
    Help,
    #[command(description = "Start the bot")]
    Start,
    #[command(description = "Register with the festival bot")]
    Login,
    #[command(description = "List all registered users")]
    Users,
    #[command(description = "List all festivals ordered by start date")]
    Festivals,
    #[command(description = "Add a festival: name, start (day.month), end (day.month) and an optional link, each on its own line")]
    Add(String),
    #[command(description = "Attend a festival: /attend {festival name}")]
    Attend(String),
    #[command(description = "Stop attending a festival: /unattend {festival name}")]
    Unattend(String),
    #[command(description = "Maybe attend a festival: /maybe {festival name}")]
    Maybe(String),
    #[command(description = "Tell everyone you have a ticket: /ticket {festival name}")]
    Ticket(String),
    #[command(description = "List the festivals you are attending")]
    Attendance,
    #[command(description = "List who attends a festival: /attendees {festival name}")]
    Attendees(String),
}

impl Command {
    /// Command name as typed by the user, without the slash
    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Start => "start",
            Command::Login => "login",
            Command::Users => "users",
            Command::Festivals => "festivals",
            Command::Add(_) => "add",
            Command::Attend(_) => "attend",
            Command::Unattend(_) => "unattend",
            Command::Maybe(_) => "maybe",
            Command::Ticket(_) => "ticket",
            Command::Attendance => "attendance",
            Command::Attendees(_) => "attendees",
        }
    }

    /// Target status for the attendance commands, `None` for everything else
    pub fn attendance_status(&self) -> Option<AttendanceStatus> {
        match self {
            Command::Attend(_) => Some(AttendanceStatus::Attending),
            Command::Unattend(_) => Some(AttendanceStatus::NotAttending),
            Command::Maybe(_) => Some(AttendanceStatus::Maybe),
            Command::Ticket(_) => Some(AttendanceStatus::HasTicket),
            _ => None,
        }
    }
}

/// Parses a chat message into a [`Command`].
///
/// The command name is matched case-insensitively and may be followed by any whitespace
/// (including the newline `/add` uses) before its arguments. `@botname` suffixes naming
/// another bot are rejected.
pub fn parse_command(text: &str, bot_name: &str) -> Option<Command> {
    let text = text.trim();
    if !text.starts_with('/') {
        return None;
    }

    let (head, rest) = match text.find(char::is_whitespace) {
        Some(index) => text.split_at(index),
        None => (text, ""),
    };
    let (name, mention) = match head.find('@') {
        Some(index) => head.split_at(index),
        None => (head, ""),
    };

    let rest = rest.trim_start();
    let normalized = if rest.is_empty() {
        format!("{}{}", name.to_lowercase(), mention)
    } else {
        format!("{}{} {}", name.to_lowercase(), mention, rest)
    };

    Command::parse(&normalized, bot_name).ok()
}

/// Splits the lines after `/add` into a festival.
///
/// Expects 3 or 4 non-blank lines: name, start date, end date and an optional link.
pub fn parse_add_arguments(args: &str, default_year: i32) -> FestivalResult<NewFestival> {
    let lines: Vec<&str> = args
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let (name, start, end, link) = match lines.as_slice() {
        [name, start, end] => (*name, *start, *end, None),
        [name, start, end, link] => (*name, *start, *end, Some(*link)),
        _ => return Err(FestivalError::invalid_input(ADD_USAGE)),
    };

    let start_date = parse_day_month(start, default_year)
        .map_err(|e| FestivalError::invalid_input(format!("Invalid start date: {e}")))?;
    let end_date = parse_day_month(end, default_year)
        .map_err(|e| FestivalError::invalid_input(format!("Invalid end date: {e}")))?;

    Ok(NewFestival {
        name: name.to_string(),
        start_date,
        end_date,
        link: link.map(str::to_string),
    })
}

/// The sender of a message, if it has one (channel posts do not)
pub fn account_of(msg: &Message) -> Option<Account> {
    msg.from()
        .map(|user| Account::new(user.id.0 as i64, user.full_name()))
}

/// Logging context for a command, falling back to an anonymous sender
pub fn command_context(command: &'static str, msg: &Message) -> CommandContext {
    match account_of(msg) {
        Some(account) => CommandContext::new(command, account.name, account.id, msg.chat.id.0),
        None => CommandContext::new(command, "unknown", 0, msg.chat.id.0),
    }
}
