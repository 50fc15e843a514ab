use teloxide::prelude::*;

use crate::bot::commands::{command_context, parse_add_arguments};
use crate::bot::handlers::HandlerResult;
use crate::database::connection::DatabaseManager;
use crate::error::FestivalError;
use crate::services::festivals;
use crate::utils::feedback::{CommandFeedback, FeedbackType};
use crate::utils::format::{error_message, festival_added_message};

pub async fn handle_users(bot: Bot, msg: Message, db: &DatabaseManager) -> HandlerResult {
    let feedback = CommandFeedback::new(bot, msg.chat.id);
    let context = command_context("users", &msg);
    context.start(None);

    match festivals::list_users(&db.pool).await {
        Ok(listing) => {
            context.success(None);
            feedback.reply(listing).await?;
        }
        Err(e) => {
            context.error(&e.to_string());
            feedback.send_markdown(FeedbackType::Error, &error_message(&e, "users")).await?;
        }
    }

    Ok(())
}

pub async fn handle_festivals(bot: Bot, msg: Message, db: &DatabaseManager) -> HandlerResult {
    let feedback = CommandFeedback::new(bot, msg.chat.id);
    let context = command_context("festivals", &msg);
    context.start(None);

    match festivals::list_festivals(&db.pool).await {
        Ok(listing) => {
            context.success(None);
            feedback.reply(listing).await?;
        }
        Err(e) => {
            context.error(&e.to_string());
            feedback.send_markdown(FeedbackType::Error, &error_message(&e, "festivals")).await?;
        }
    }

    Ok(())
}

pub async fn handle_add(
    bot: Bot,
    msg: Message,
    args: String,
    db: &DatabaseManager,
    default_year: i32,
) -> HandlerResult {
    let feedback = CommandFeedback::new(bot, msg.chat.id);
    let context = command_context("add", &msg);
    context.start(Some(&args.replace('\n', " | ")));

    let result = match parse_add_arguments(&args, default_year) {
        Ok(new_festival) => festivals::add_festival(&db.pool, new_festival).await,
        Err(e) => Err(e),
    };

    match result {
        Ok((festival, created)) => {
            context.success(Some(&format!(
                "{} festival {} ({})",
                if created { "added" } else { "existing" },
                festival.name,
                festival.id
            )));
            let feedback_type = if created { FeedbackType::Success } else { FeedbackType::Info };
            feedback
                .send_markdown(feedback_type, &festival_added_message(&festival, created))
                .await?;
        }
        Err(e @ FestivalError::InvalidInput(_)) => {
            context.validation_error(&args, &e.to_string());
            feedback
                .validation_error(
                    &error_message(&e, "add"),
                    "Put the name, start date, end date and optional link on separate lines, e.g.\n/add\nWacken\n2.8\n5.8\nhttps://www.wacken.com",
                )
                .await?;
        }
        Err(e) => {
            if e.is_user_error() {
                context.validation_error(&args, &e.to_string());
            } else {
                context.error(&e.to_string());
            }
            feedback.send_markdown(FeedbackType::Error, &error_message(&e, "add")).await?;
        }
    }

    Ok(())
}
