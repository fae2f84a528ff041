use formulate_i18n_runtime::RuntimeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    #[error("unknown locale in config: {0}")]
    UnknownLocale(String),
    #[error("default locale {0} is not enabled")]
    DefaultNotEnabled(String),
}
