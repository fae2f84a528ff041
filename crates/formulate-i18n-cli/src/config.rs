use std::fs;
use std::path::Path;

use formulate_i18n_core::LanguageTag;
use formulate_i18n_locales as locales;
use formulate_i18n_runtime::Registry;
use serde::Deserialize;
use tracing::debug;

use crate::error::CliError;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub default_locale: String,
    pub reference_locale: String,
    /// Locales to register. `None` enables every shipped locale.
    pub locales: Option<Vec<String>>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".to_string(),
            reference_locale: locales::REFERENCE_LOCALE.to_string(),
            locales: None,
        }
    }
}

impl CliConfig {
    /// Shipped tags selected by this config, sorted and deduplicated.
    pub fn enabled_locales(&self) -> Result<Vec<&'static str>, CliError> {
        let Some(requested) = &self.locales else {
            return Ok(locales::tags().collect());
        };
        let mut enabled = Vec::new();
        for tag in requested {
            let shipped = shipped_tag(tag).ok_or_else(|| CliError::UnknownLocale(tag.clone()))?;
            if !enabled.contains(&shipped) {
                enabled.push(shipped);
            }
        }
        enabled.sort_unstable();
        Ok(enabled)
    }

    /// A registry holding the enabled locales.
    pub fn registry(&self) -> Result<Registry, CliError> {
        let enabled = self.enabled_locales()?;
        let mut registry = Registry::new(&self.default_locale)?;
        if !enabled
            .iter()
            .any(|tag| Some(*tag) == shipped_tag(&self.default_locale))
        {
            return Err(CliError::DefaultNotEnabled(self.default_locale.clone()));
        }
        for tag in enabled {
            if let Some(register) = locales::registrar(tag) {
                register(&mut registry);
            }
        }
        Ok(registry)
    }
}

fn shipped_tag(tag: &str) -> Option<&'static str> {
    let parsed = LanguageTag::parse(tag).ok()?;
    locales::tags().find(|shipped| *shipped == parsed.normalized())
}

pub fn load_config(path: &Path) -> Result<CliConfig, CliError> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

pub fn load_config_or_default(path: &Path) -> Result<CliConfig, CliError> {
    if path.exists() {
        load_config(path)
    } else {
        debug!(path = %path.display(), "config file not found, using defaults");
        Ok(CliConfig::default())
    }
}
