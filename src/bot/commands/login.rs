use teloxide::prelude::*;

use crate::bot::commands::account_of;
use crate::bot::handlers::HandlerResult;
use crate::database::connection::DatabaseManager;
use crate::services::festivals;
use crate::utils::feedback::{CommandFeedback, FeedbackType};
use crate::utils::format::{error_message, login_message};
use crate::utils::logging::CommandContext;

pub async fn handle_login(bot: Bot, msg: Message, db: &DatabaseManager) -> HandlerResult {
    let feedback = CommandFeedback::new(bot, msg.chat.id);

    let Some(account) = account_of(&msg) else {
        feedback.error("Only users can log in").await?;
        return Ok(());
    };

    let context = CommandContext::new("login", account.name.clone(), account.id, msg.chat.id.0);
    context.start(None);

    match festivals::login(&db.pool, &account).await {
        Ok((user, created)) => {
            context.success(Some(if created { "new user" } else { "already registered" }));
            let feedback_type = if created { FeedbackType::Success } else { FeedbackType::Info };
            feedback.send_markdown(feedback_type, &login_message(&user, created)).await?;
        }
        Err(e) => {
            context.error(&e.to_string());
            feedback.send_markdown(FeedbackType::Error, &error_message(&e, "login")).await?;
        }
    }

    Ok(())
}
