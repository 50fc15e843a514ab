use teloxide::prelude::*;
use teloxide::types::ParseMode;
use crate::utils::markdown::escape_markdown;

/// Feedback types for different command outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackType {
    Success,
    Error,
    Info,
}

impl FeedbackType {
    fn emoji(&self) -> &'static str {
        match self {
            FeedbackType::Success => "✅",
            FeedbackType::Error => "❌",
            FeedbackType::Info => "ℹ️",
        }
    }
}

/// Prefixes already rendered MarkdownV2 with the feedback emoji
pub fn compose(feedback_type: FeedbackType, markdown: &str) -> String {
    format!("{} {}", feedback_type.emoji(), markdown)
}

/// Error text followed by a hint on how to fix the command
pub fn compose_validation_error(error_markdown: &str, suggestion: &str) -> String {
    compose(
        FeedbackType::Error,
        &format!("{}\n\n💡 *Suggestion:* {}", error_markdown, escape_markdown(suggestion)),
    )
}

/// Sends replies to the chat a command came from.
///
/// All replies use MarkdownV2 with link previews disabled, since festival listings contain
/// links.
pub struct CommandFeedback {
    bot: Bot,
    chat_id: ChatId,
}

impl CommandFeedback {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }

    /// Sends MarkdownV2 text as is
    pub async fn reply(&self, markdown: String) -> ResponseResult<Message> {
        self.bot
            .send_message(self.chat_id, markdown)
            .parse_mode(ParseMode::MarkdownV2)
            .disable_web_page_preview(true)
            .await
    }

    /// Sends rendered MarkdownV2 with the emoji of `feedback_type` in front
    pub async fn send_markdown(&self, feedback_type: FeedbackType, markdown: &str) -> ResponseResult<Message> {
        self.reply(compose(feedback_type, markdown)).await
    }

    /// Escapes plain text and sends it with the emoji of `feedback_type` in front
    pub async fn send(&self, feedback_type: FeedbackType, message: &str) -> ResponseResult<Message> {
        self.send_markdown(feedback_type, &escape_markdown(message)).await
    }

    pub async fn error(&self, message: &str) -> ResponseResult<Message> {
        self.send(FeedbackType::Error, message).await
    }

    pub async fn info(&self, message: &str) -> ResponseResult<Message> {
        self.send(FeedbackType::Info, message).await
    }

    /// Send validation error with helpful suggestion
    pub async fn validation_error(&self, error_markdown: &str, suggestion: &str) -> ResponseResult<Message> {
        self.reply(compose_validation_error(error_markdown, suggestion)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_type_emojis() {
        assert_eq!(FeedbackType::Success.emoji(), "✅");
        assert_eq!(FeedbackType::Error.emoji(), "❌");
        assert_eq!(FeedbackType::Info.emoji(), "ℹ️");
    }

    #[test]
    fn test_validation_error_escapes_suggestion_only() {
        let message = compose_validation_error("Bad date \\(31\\.2\\)", "Use day.month, e.g. 2.8");
        assert_eq!(
            message,
            "❌ Bad date \\(31\\.2\\)\n\n💡 *Suggestion:* Use day\\.month, e\\.g\\. 2\\.8"
        );
    }
}
