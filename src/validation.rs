//! Input validation module
//!
//! Checks mood reports, chat messages and account records before they reach
//! the classifiers or the state container.

use crate::error::{AppError, AppResult};
use crate::models::{MoodInput, UserAccount};
use tracing::{debug, warn};
use validator::{Validate, ValidationErrors};

/// Mood form constraints
pub struct MoodConstraints;

impl MoodConstraints {
    /// Stress slider range
    pub const STRESS_MIN: u8 = 1;
    pub const STRESS_MAX: u8 = 5;

    /// Longest chat message accepted for classification
    pub const CHAT_MAX_CHARS: usize = 2000;
}

/// Flatten field errors into a single readable message
fn describe(validation_errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = validation_errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let msgs: Vec<&str> = errors
                .iter()
                .filter_map(|e| e.message.as_ref().map(|c| c.as_ref()))
                .collect();
            format!("{}: {}", field, msgs.join(", "))
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

/// Validate a mood report from the mood form
pub fn validate_mood_input(input: &MoodInput) -> AppResult<()> {
    if let Err(validation_errors) = input.validate() {
        let message = describe(&validation_errors);
        warn!(errors = %message, "Mood input validation failed");
        return Err(AppError::ValidationError(message));
    }

    debug!("Mood input validation passed");
    Ok(())
}

/// Validate free text from the chat surface
pub fn validate_chat_text(text: &str) -> AppResult<()> {
    if text.trim().is_empty() {
        return Err(AppError::ValidationError(
            "Message must not be empty".to_string(),
        ));
    }

    let chars = text.chars().count();
    if chars > MoodConstraints::CHAT_MAX_CHARS {
        warn!(chars, "Chat message too long");
        return Err(AppError::ValidationError(format!(
            "Message is {} characters, limit is {}",
            chars,
            MoodConstraints::CHAT_MAX_CHARS
        )));
    }

    Ok(())
}

/// Validate an account before it is signed in and persisted
pub fn validate_account(account: &UserAccount) -> AppResult<()> {
    account
        .validate()
        .map_err(|e| AppError::ValidationError(describe(&e)))
}
