//! Command error mapping and process exit codes.

use sr_app::usecases::settings::SettingsUseCaseError;
use sr_app::usecases::targets::TargetUseCaseError;
use sr_app::FormErrors;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    Validation(FormErrors),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CommandError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandError::Validation(_) => 2,
            CommandError::NotFound(_) => 3,
            CommandError::Other(_) => 1,
        }
    }

    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        let mut errors = FormErrors::new();
        errors.add(field, message);
        CommandError::Validation(errors)
    }
}

impl From<TargetUseCaseError> for CommandError {
    fn from(err: TargetUseCaseError) -> Self {
        match err {
            TargetUseCaseError::NotFound(id) => {
                CommandError::NotFound(format!("Target {id} not found."))
            }
            TargetUseCaseError::Storage(e) => CommandError::Other(e),
        }
    }
}

impl From<SettingsUseCaseError> for CommandError {
    fn from(err: SettingsUseCaseError) -> Self {
        match err {
            SettingsUseCaseError::Validation(errors) => CommandError::Validation(errors),
            SettingsUseCaseError::Path(e) => CommandError::invalid("path", e.to_string()),
            SettingsUseCaseError::Storage(e) => CommandError::Other(e),
        }
    }
}

pub type CommandResult = Result<String, CommandError>;

#[cfg(test)]
mod tests {
    use super::*;
    use sr_core::TargetId;

    #[test]
    fn exit_codes_follow_error_kind() {
        assert_eq!(CommandError::invalid("selector", "x").exit_code(), 2);
        assert_eq!(
            CommandError::from(TargetUseCaseError::NotFound(TargetId::new(1))).exit_code(),
            3
        );
        assert_eq!(CommandError::Other(anyhow::anyhow!("io")).exit_code(), 1);
    }
}
