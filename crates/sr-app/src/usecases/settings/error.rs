use thiserror::Error;

use crate::form::FormErrors;

#[derive(Debug, Error)]
pub enum SettingsUseCaseError {
    #[error("invalid settings: {0}")]
    Validation(FormErrors),

    #[error("settings path error: {0}")]
    Path(#[from] sr_core::settings::SettingsPathError),

    #[error("storage error: {0}")]
    Storage(#[from] anyhow::Error),
}
