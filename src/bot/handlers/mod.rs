pub mod general_message;
pub mod message;

use teloxide::{dispatching::UpdateHandler, prelude::*, types::Me};
use crate::bot::commands::{parse_command, Command};
use crate::database::connection::DatabaseManager;

pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>;

pub struct BotHandler {
    pub db: DatabaseManager,
    /// Year for `/add` dates given without one
    pub default_year: i32,
}

impl BotHandler {
    pub fn new(db: DatabaseManager, default_year: i32) -> Self {
        Self { db, default_year }
    }

    /// Commands go to [`message::command_handler`]; every other message ends up in
    /// [`general_message::handle_general_message`].
    pub fn schema(&self) -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
        let db = self.db.clone();
        let default_year = self.default_year;

        Update::filter_message()
            .branch(
                dptree::filter_map(|msg: Message, me: Me| {
                    msg.text().and_then(|text| parse_command(text, me.username()))
                })
                .endpoint(move |bot: Bot, msg: Message, cmd: Command| {
                    let db = db.clone();
                    async move { message::command_handler(bot, msg, cmd, &db, default_year).await }
                }),
            )
            .branch(dptree::endpoint(general_message::handle_general_message))
    }
}
