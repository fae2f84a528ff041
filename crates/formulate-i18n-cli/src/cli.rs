use std::path::PathBuf;

use thiserror::Error;

use crate::command_coverage::{CoverageCommandError, CoverageOptions, run_coverage};
use crate::command_locales::{LocalesCommandError, LocalesOptions, run_locales};
use crate::command_render::{RenderCommandError, RenderOptions, run_render};

const DEFAULT_CONFIG: &str = "formulate-i18n.toml";

#[derive(Debug, Error)]
pub enum CliAppError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Locales(#[from] LocalesCommandError),
    #[error(transparent)]
    Render(#[from] RenderCommandError),
    #[error(transparent)]
    Coverage(#[from] CoverageCommandError),
}

pub fn run() -> Result<(), CliAppError> {
    let mut args = std::env::args().skip(1);
    let command = args.next().ok_or_else(|| CliAppError::Usage(usage()))?;
    match command.as_str() {
        "locales" => {
            let options = parse_locales_options(args.collect())?;
            for tag in run_locales(&options)? {
                println!("{tag}");
            }
            Ok(())
        }
        "render" => {
            let options = parse_render_options(args.collect())?;
            println!("{}", run_render(&options)?);
            Ok(())
        }
        "coverage" => {
            let options = parse_coverage_options(args.collect())?;
            run_coverage(&options)?;
            Ok(())
        }
        _ => Err(CliAppError::Usage(usage())),
    }
}

fn next_value(flag: &str, iter: &mut impl Iterator<Item = String>) -> Result<String, CliAppError> {
    iter.next()
        .ok_or_else(|| CliAppError::Usage(format!("{flag} requires a value\n\n{}", usage())))
}

fn usage() -> String {
    "usage: formulate-i18n locales [--config <path>]\n       formulate-i18n render --locale <tag> --rule <id> --name <text> [--value <json|text>] [--arg <text>...] [--config <path>]\n       formulate-i18n coverage [--reference <tag>] [--out <path>] [--config <path>]".to_string()
}

fn parse_locales_options(args: Vec<String>) -> Result<LocalesOptions, CliAppError> {
    let mut config_path = PathBuf::from(DEFAULT_CONFIG);
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => config_path = PathBuf::from(next_value("--config", &mut iter)?),
            "--help" | "-h" => return Err(CliAppError::Usage(usage())),
            _ => return Err(CliAppError::Usage(usage())),
        }
    }
    Ok(LocalesOptions { config_path })
}

fn parse_render_options(args: Vec<String>) -> Result<RenderOptions, CliAppError> {
    let mut locale = None;
    let mut rule = None;
    let mut name = None;
    let mut value = None;
    let mut rule_args = Vec::new();
    let mut config_path = PathBuf::from(DEFAULT_CONFIG);
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--locale" => locale = Some(next_value("--locale", &mut iter)?),
            "--rule" => rule = Some(next_value("--rule", &mut iter)?),
            "--name" => name = Some(next_value("--name", &mut iter)?),
            "--value" => value = Some(next_value("--value", &mut iter)?),
            "--arg" => rule_args.push(next_value("--arg", &mut iter)?),
            "--config" => config_path = PathBuf::from(next_value("--config", &mut iter)?),
            "--help" | "-h" => return Err(CliAppError::Usage(usage())),
            _ => return Err(CliAppError::Usage(usage())),
        }
    }
    let locale = locale.ok_or_else(|| CliAppError::Usage(usage()))?;
    let rule = rule.ok_or_else(|| CliAppError::Usage(usage()))?;
    let name = name.ok_or_else(|| CliAppError::Usage(usage()))?;
    Ok(RenderOptions {
        locale,
        rule,
        name,
        value,
        args: rule_args,
        config_path,
    })
}

fn parse_coverage_options(args: Vec<String>) -> Result<CoverageOptions, CliAppError> {
    let mut reference = None;
    let mut out_path = PathBuf::from("coverage.json");
    let mut config_path = PathBuf::from(DEFAULT_CONFIG);
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--reference" => reference = Some(next_value("--reference", &mut iter)?),
            "--out" => out_path = PathBuf::from(next_value("--out", &mut iter)?),
            "--config" => config_path = PathBuf::from(next_value("--config", &mut iter)?),
            "--help" | "-h" => return Err(CliAppError::Usage(usage())),
            _ => return Err(CliAppError::Usage(usage())),
        }
    }
    Ok(CoverageOptions {
        reference,
        out_path,
        config_path,
    })
}

#[cfg(test)]
mod tests {
    use super::{CliAppError, parse_coverage_options, parse_locales_options, parse_render_options};

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn parses_locales_options() {
        let options =
            parse_locales_options(strings(&["--config", "i18n.toml"])).expect("options");
        assert!(options.config_path.ends_with("i18n.toml"));
    }

    #[test]
    fn parses_render_options() {
        let args = strings(&[
            "--locale", "ru", "--rule", "between", "--name", "age", "--value", "15", "--arg",
            "10", "--arg", "20",
        ]);
        let options = parse_render_options(args).expect("options");
        assert_eq!(options.locale, "ru");
        assert_eq!(options.rule, "between");
        assert_eq!(options.value.as_deref(), Some("15"));
        assert_eq!(options.args, ["10", "20"]);
        assert!(options.config_path.ends_with("formulate-i18n.toml"));
    }

    #[test]
    fn render_requires_name() {
        let args = strings(&["--locale", "en", "--rule", "required"]);
        let err = parse_render_options(args).expect_err("missing name");
        assert!(matches!(err, CliAppError::Usage(_)));
    }

    #[test]
    fn flag_without_value_mentions_flag() {
        let err = parse_render_options(strings(&["--locale"])).expect_err("missing value");
        match err {
            CliAppError::Usage(message) => assert!(message.starts_with("--locale requires a value")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parses_coverage_options() {
        let options = parse_coverage_options(strings(&["--reference", "ru"])).expect("options");
        assert_eq!(options.reference.as_deref(), Some("ru"));
        assert!(options.out_path.ends_with("coverage.json"));
    }
}
