use std::path::PathBuf;

use formulate_i18n_core::{Rule, ValidationContext};
use formulate_i18n_runtime::RuntimeError;
use thiserror::Error;

use crate::config::load_config_or_default;
use crate::error::CliError;
use crate::value_arg::{ValueArgError, parse_value};

#[derive(Debug, Error)]
pub enum RenderCommandError {
    #[error("config error: {0}")]
    Config(#[from] CliError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    #[error("unknown rule: {0}")]
    UnknownRule(String),
    #[error("invalid --value: {0}")]
    Value(#[from] ValueArgError),
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub locale: String,
    pub rule: String,
    pub name: String,
    pub value: Option<String>,
    pub args: Vec<String>,
    pub config_path: PathBuf,
}

pub fn run_render(options: &RenderOptions) -> Result<String, RenderCommandError> {
    let config = load_config_or_default(&options.config_path)?;
    let registry = config.registry()?;

    let rule = Rule::parse(&options.rule)
        .map_err(|_| RenderCommandError::UnknownRule(options.rule.clone()))?;
    let mut ctx =
        ValidationContext::new(options.name.as_str()).with_args(options.args.iter().cloned());
    if let Some(value) = &options.value {
        ctx = ctx.with_value(parse_value(value)?);
    }

    Ok(registry.format(&options.locale, rule, &ctx)?)
}

#[cfg(test)]
mod tests {
    use super::{RenderCommandError, RenderOptions, run_render};
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_dir(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        path.push(format!("formulate_i18n_{name}_{nanos}"));
        fs::create_dir_all(&path).expect("dir");
        path
    }

    fn options(locale: &str, rule: &str, name: &str) -> RenderOptions {
        RenderOptions {
            locale: locale.to_string(),
            rule: rule.to_string(),
            name: name.to_string(),
            value: None,
            args: Vec::new(),
            config_path: PathBuf::from("does-not-exist/formulate-i18n.toml"),
        }
    }

    #[test]
    fn renders_selection_max() {
        let mut options = options("en", "max", "Tags");
        options.value = Some(r#"["a","b","c"]"#.to_string());
        options.args = vec!["2".to_string()];
        let out = run_render(&options).expect("render");
        assert_eq!(out, "You may only select 2 Tags.");
    }

    #[test]
    fn renders_plain_text_value() {
        let mut options = options("en", "email", "email");
        options.value = Some("jon@example".to_string());
        let out = run_render(&options).expect("render");
        assert_eq!(out, "“jon@example” is not a valid email address.");
    }

    #[test]
    fn unknown_rule_is_reported() {
        let err = run_render(&options("en", "zipCode", "zip")).expect_err("unknown rule");
        assert!(matches!(err, RenderCommandError::UnknownRule(rule) if rule == "zipCode"));
    }

    #[test]
    fn config_default_locale_is_used_for_unknown_locale() {
        let root = temp_dir("render");
        let config_path = root.join("formulate-i18n.toml");
        fs::write(&config_path, "default_locale = \"uk\"\nlocales = [\"uk\"]\n").expect("write");
        let mut options = options("de", "required", "ім'я");
        options.config_path = config_path;
        let out = run_render(&options).expect("render");
        assert!(out.starts_with("Ім'я"));
        fs::remove_dir_all(&root).ok();
    }
}
