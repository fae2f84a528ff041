use std::path::PathBuf;

use thiserror::Error;

use crate::config::load_config_or_default;
use crate::error::CliError;

#[derive(Debug, Error)]
pub enum LocalesCommandError {
    #[error("config error: {0}")]
    Config(#[from] CliError),
}

#[derive(Debug, Clone)]
pub struct LocalesOptions {
    pub config_path: PathBuf,
}

/// Tags registered for the current config, in normalized sorted order.
pub fn run_locales(options: &LocalesOptions) -> Result<Vec<String>, LocalesCommandError> {
    let config = load_config_or_default(&options.config_path)?;
    let registry = config.registry()?;
    Ok(registry.locales().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::{LocalesOptions, run_locales};
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        path.push(format!("formulate_i18n_{name}_{nanos}.toml"));
        path
    }

    #[test]
    fn lists_configured_locales() {
        let path = temp_path("locales");
        fs::write(&path, "default_locale = \"sl\"\nlocales = [\"yo\", \"sl\"]\n").expect("write");
        let tags = run_locales(&LocalesOptions {
            config_path: path.clone(),
        })
        .expect("locales");
        assert_eq!(tags, ["sl", "yo"]);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn lists_everything_without_config() {
        let tags = run_locales(&LocalesOptions {
            config_path: temp_path("absent"),
        })
        .expect("locales");
        assert_eq!(tags.len(), 12);
        assert!(tags.iter().any(|tag| tag == "az"));
    }
}
