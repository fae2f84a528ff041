use formulate_i18n_core::{CoreError, Rule};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("locale already registered: {0}")]
    DuplicateLocale(String),
    #[error("missing locale: {0}")]
    MissingLocale(String),
    #[error("missing message for rule {rule} in locale {locale}")]
    MissingMessage { locale: String, rule: Rule },
}

pub type RuntimeResult<T> = Result<T, RuntimeError>;
