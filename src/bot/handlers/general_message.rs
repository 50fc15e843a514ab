use teloxide::prelude::*;
use teloxide::types::Me;
use crate::bot::handlers::HandlerResult;
use crate::utils::feedback::CommandFeedback;

/// Handles messages that did not parse as a command
pub async fn handle_general_message(
    bot: Bot,
    msg: Message,
    me: Me,
) -> HandlerResult {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    if let Some(command) = unknown_command(text, me.username()) {
        tracing::debug!("Unknown command '{}' in chat {}", command, msg.chat.id);
        let feedback = CommandFeedback::new(bot, msg.chat.id);
        feedback
            .info(&format!("Unknown command or unexpected arguments: {command}\n\nUse /help to see all available commands."))
            .await?;
    }
    // For other messages, we don't respond to avoid spam

    Ok(())
}

/// The command word of a message that looks like a command meant for this bot
pub fn unknown_command<'a>(text: &'a str, bot_name: &str) -> Option<&'a str> {
    let word = text.trim_start().split_whitespace().next()?;
    if !word.starts_with('/') || word.len() < 2 {
        return None;
    }

    match word.split_once('@') {
        Some((_, mention)) if !mention.eq_ignore_ascii_case(bot_name) => None,
        _ => Some(word),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_command_detection() {
        assert_eq!(unknown_command("/foo", "festival_bot"), Some("/foo"));
        assert_eq!(unknown_command("/foo bar", "festival_bot"), Some("/foo"));
        assert_eq!(unknown_command("/foo@festival_bot", "festival_bot"), Some("/foo@festival_bot"));
        assert_eq!(unknown_command("/foo@other_bot", "festival_bot"), None);
        assert_eq!(unknown_command("hello there", "festival_bot"), None);
        assert_eq!(unknown_command("/", "festival_bot"), None);
        assert_eq!(unknown_command("", "festival_bot"), None);
    }
}
