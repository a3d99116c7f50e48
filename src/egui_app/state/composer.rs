use crate::api::EmailInput;

/// Editable buffers backing the email composer form.
#[derive(Clone, Debug, Default)]
pub struct ComposerState {
    pub subject: String,
    pub message: String,
}

impl ComposerState {
    /// Snapshot the current form contents as an immutable submission.
    pub fn email(&self) -> EmailInput {
        EmailInput {
            subject: self.subject.clone(),
            message: self.message.clone(),
        }
    }

    /// At least one field must be non-empty after trimming.
    pub fn is_valid(&self) -> bool {
        !self.email().is_blank()
    }
}
