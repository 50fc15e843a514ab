use teloxide::prelude::*;

use crate::bot::commands::{account_of, command_context};
use crate::bot::handlers::HandlerResult;
use crate::database::connection::DatabaseManager;
use crate::database::models::AttendanceStatus;
use crate::error::FestivalError;
use crate::services::festivals::{self, AttendanceChange};
use crate::utils::feedback::{CommandFeedback, FeedbackType};
use crate::utils::format::{attendance_change_message, error_message};
use crate::utils::logging::CommandContext;

/// Shared handler of `/attend`, `/unattend`, `/maybe` and `/ticket`
pub async fn handle_attendance_change(
    bot: Bot,
    msg: Message,
    command: &'static str,
    query: String,
    status: AttendanceStatus,
    db: &DatabaseManager,
) -> HandlerResult {
    let feedback = CommandFeedback::new(bot, msg.chat.id);

    let Some(account) = account_of(&msg) else {
        feedback.error("Only users can attend festivals").await?;
        return Ok(());
    };

    let context = CommandContext::new(command, account.name.clone(), account.id, msg.chat.id.0);
    context.start(Some(&format!("query '{}' status {}", query, status)));

    let festival = match festivals::find_festival(&db.pool, &query).await {
        Ok(festival) => festival,
        Err(e @ FestivalError::InvalidInput(_)) => {
            context.validation_error(&query, &e.to_string());
            let suggestion = format!("Pass the festival name as an argument (/{command} {{festival name}})");
            feedback.validation_error(&error_message(&e, command), &suggestion).await?;
            return Ok(());
        }
        Err(e) => {
            report_error(&feedback, &context, &query, &e, command).await?;
            return Ok(());
        }
    };

    match festivals::set_attendance(&db.pool, &account, festival.id, status).await {
        Ok(change) => {
            context.success(Some(&format!("{} -> {:?}", festival.name, change)));
            let feedback_type = match change {
                AttendanceChange::Unchanged { .. } | AttendanceChange::NotAttending => FeedbackType::Info,
                _ => FeedbackType::Success,
            };
            feedback
                .send_markdown(feedback_type, &attendance_change_message(&festival, &change))
                .await?;
        }
        Err(e) => report_error(&feedback, &context, &query, &e, command).await?,
    }

    Ok(())
}

pub async fn handle_attendance(bot: Bot, msg: Message, db: &DatabaseManager) -> HandlerResult {
    let feedback = CommandFeedback::new(bot, msg.chat.id);

    let Some(account) = account_of(&msg) else {
        feedback.error("Only users have an attendance list").await?;
        return Ok(());
    };

    let context = CommandContext::new("attendance", account.name.clone(), account.id, msg.chat.id.0);
    context.start(None);

    match festivals::attendance_for_user(&db.pool, account.id).await {
        Ok(listing) => {
            context.success(None);
            feedback.reply(listing).await?;
        }
        Err(e) => report_error(&feedback, &context, "", &e, "attendance").await?,
    }

    Ok(())
}

pub async fn handle_attendees(
    bot: Bot,
    msg: Message,
    query: String,
    db: &DatabaseManager,
) -> HandlerResult {
    let feedback = CommandFeedback::new(bot, msg.chat.id);
    let context = command_context("attendees", &msg);
    context.start(Some(&query));

    let result = match festivals::find_festival(&db.pool, &query).await {
        Ok(festival) => festivals::attendees_for_festival(&db.pool, &festival).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(listing) => {
            context.success(None);
            feedback.reply(listing).await?;
        }
        Err(e @ FestivalError::InvalidInput(_)) => {
            context.validation_error(&query, &e.to_string());
            feedback
                .validation_error(
                    &error_message(&e, "attendees"),
                    "Pass the festival name as an argument (/attendees {festival name})",
                )
                .await?;
        }
        Err(e) => report_error(&feedback, &context, &query, &e, "attendees").await?,
    }

    Ok(())
}

async fn report_error(
    feedback: &CommandFeedback,
    context: &CommandContext,
    input: &str,
    error: &FestivalError,
    command: &str,
) -> ResponseResult<()> {
    if error.is_user_error() {
        context.validation_error(input, &error.to_string());
    } else {
        context.error(&error.to_string());
    }
    feedback
        .send_markdown(FeedbackType::Error, &error_message(error, command))
        .await?;
    Ok(())
}
