use tracing::{debug, error, info, warn};

/// Who ran which command where, so every log line of a command carries the same prefix
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub command: &'static str,
    pub user: String,
    pub user_id: i64,
    pub chat_id: i64,
}

impl CommandContext {
    pub fn new(command: &'static str, user: impl Into<String>, user_id: i64, chat_id: i64) -> Self {
        Self {
            command,
            user: user.into(),
            user_id,
            chat_id,
        }
    }

    /// Logs command start with consistent format
    pub fn start(&self, details: Option<&str>) {
        match details {
            Some(d) => info!(
                "CMD_START: /{} by {}({}) in chat {} - {}",
                self.command, self.user, self.user_id, self.chat_id, d
            ),
            None => info!(
                "CMD_START: /{} by {}({}) in chat {}",
                self.command, self.user, self.user_id, self.chat_id
            ),
        }
    }

    /// Logs command completion with consistent format
    pub fn success(&self, details: Option<&str>) {
        match details {
            Some(d) => info!(
                "CMD_SUCCESS: /{} by {}({}) in chat {} - {}",
                self.command, self.user, self.user_id, self.chat_id, d
            ),
            None => info!(
                "CMD_SUCCESS: /{} by {}({}) in chat {}",
                self.command, self.user, self.user_id, self.chat_id
            ),
        }
    }

    pub fn error(&self, error: &str) {
        error!(
            "CMD_ERROR: /{} by {}({}) in chat {} - {}",
            self.command, self.user, self.user_id, self.chat_id, error
        );
    }

    /// Logs rejected user input; not an error on our side
    pub fn validation_error(&self, value: &str, error: &str) {
        warn!(
            "VALIDATION_ERROR: /{} - input '{}' rejected: {} - user {}({}) in chat {}",
            self.command, value, error, self.user, self.user_id, self.chat_id
        );
    }
}

/// Logs database operations with consistent format
pub fn log_database_operation(operation: &str, table: &str, details: Option<&str>) {
    match details {
        Some(d) => debug!("DB_OP: {} on {} - {}", operation, table, d),
        None => debug!("DB_OP: {} on {}", operation, table),
    }
}

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
