use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use crate::bot::commands::{attendance, festivals, login, Command};
use crate::bot::handlers::HandlerResult;
use crate::database::connection::DatabaseManager;

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    db: &DatabaseManager,
    default_year: i32,
) -> HandlerResult {
    let status = cmd.attendance_status();
    let name = cmd.name();

    match cmd {
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string()).await?;
        }
        Command::Start => {
            bot.send_message(
                msg.chat.id,
                "🎪 Welcome to the festival bot!\n\nUse /login to register, /festivals to see what's coming up and /attend {festival name} to let everyone know you're going.\nUse /help to see all commands.",
            ).await?;
        }
        Command::Login => login::handle_login(bot, msg, db).await?,
        Command::Users => festivals::handle_users(bot, msg, db).await?,
        Command::Festivals => festivals::handle_festivals(bot, msg, db).await?,
        Command::Add(args) => festivals::handle_add(bot, msg, args, db, default_year).await?,
        Command::Attend(query)
        | Command::Unattend(query)
        | Command::Maybe(query)
        | Command::Ticket(query) => {
            if let Some(status) = status {
                attendance::handle_attendance_change(bot, msg, name, query, status, db).await?;
            }
        }
        Command::Attendance => attendance::handle_attendance(bot, msg, db).await?,
        Command::Attendees(query) => attendance::handle_attendees(bot, msg, query, db).await?,
    }
    Ok(())
}
