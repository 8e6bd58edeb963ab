//! Input rules for setup and password reset
//!
//! The manager itself does not enforce these; callers check input before
//! handing it over, the same way the setup and recovery screens did.

use crate::error::{JournalError, JournalResult};

pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 100;
pub const ANSWER_MIN_LEN: usize = 3;
pub const ANSWER_MAX_LEN: usize = 100;

/// Password must be 8 to 100 characters
pub fn validate_password(password: &str) -> JournalResult<()> {
    let len = password.chars().count();
    if len < PASSWORD_MIN_LEN {
        return Err(JournalError::Validation(format!(
            "Password must be at least {} characters",
            PASSWORD_MIN_LEN
        )));
    }
    if len > PASSWORD_MAX_LEN {
        return Err(JournalError::Validation("Password is too long".into()));
    }
    Ok(())
}

/// Recovery answer must be 3 to 100 characters
pub fn validate_recovery_answer(answer: &str) -> JournalResult<()> {
    let len = answer.chars().count();
    if len < ANSWER_MIN_LEN {
        return Err(JournalError::Validation(format!(
            "Answer must be at least {} characters",
            ANSWER_MIN_LEN
        )));
    }
    if len > ANSWER_MAX_LEN {
        return Err(JournalError::Validation("Answer is too long".into()));
    }
    Ok(())
}

pub fn validate_recovery_question(question: &str) -> JournalResult<()> {
    if question.trim().is_empty() {
        return Err(JournalError::Validation(
            "Recovery question cannot be empty".into(),
        ));
    }
    Ok(())
}

/// Check all setup inputs at once
pub fn validate_setup(password: &str, question: &str, answer: &str) -> JournalResult<()> {
    validate_password(password)?;
    validate_recovery_question(question)?;
    validate_recovery_answer(answer)
}
