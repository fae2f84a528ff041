use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use formulate_i18n_locales as locales;
use formulate_i18n_runtime::Registry;
use serde::Serialize;
use thiserror::Error;

use crate::config::load_config_or_default;
use crate::error::CliError;

#[derive(Debug, Error)]
pub enum CoverageCommandError {
    #[error("config error: {0}")]
    Config(#[from] CliError),
    #[error("unknown reference locale: {0}")]
    UnknownReference(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct CoverageOptions {
    pub reference: Option<String>,
    pub out_path: PathBuf,
    pub config_path: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct CoverageReport {
    pub reference: String,
    pub total_rules: usize,
    pub locales: BTreeMap<String, LocaleCoverage>,
}

#[derive(Debug, Serialize)]
pub struct LocaleCoverage {
    pub present: usize,
    pub missing: usize,
    pub extra: usize,
    pub percent: f64,
    pub missing_rules: Vec<String>,
}

/// Compares every registered locale with the reference locale's rule set.
///
/// The reference does not need to be registered as long as it ships.
pub fn coverage_report(
    registry: &Registry,
    reference: &str,
) -> Result<CoverageReport, CoverageCommandError> {
    let shipped;
    let reference_dictionary = match registry.dictionary(reference) {
        Some(dictionary) => dictionary,
        None => {
            shipped = locales::dictionary(reference)
                .ok_or_else(|| CoverageCommandError::UnknownReference(reference.to_string()))?;
            &shipped
        }
    };

    let total = reference_dictionary.len();
    let mut report_locales = BTreeMap::new();
    for tag in registry.locales() {
        let Some(dictionary) = registry.dictionary(tag) else {
            continue;
        };
        let missing: Vec<String> = dictionary
            .missing_rules(reference_dictionary)
            .into_iter()
            .map(|rule| rule.as_str().to_string())
            .collect();
        let present = total - missing.len();
        let extra = reference_dictionary.missing_rules(dictionary).len();
        let percent = if total == 0 {
            100.0
        } else {
            (present as f64 / total as f64) * 100.0
        };
        report_locales.insert(
            tag.to_string(),
            LocaleCoverage {
                present,
                missing: missing.len(),
                extra,
                percent,
                missing_rules: missing,
            },
        );
    }

    Ok(CoverageReport {
        reference: reference.to_string(),
        total_rules: total,
        locales: report_locales,
    })
}

pub fn run_coverage(options: &CoverageOptions) -> Result<(), CoverageCommandError> {
    let config = load_config_or_default(&options.config_path)?;
    let registry = config.registry()?;
    let reference = options
        .reference
        .as_deref()
        .unwrap_or(config.reference_locale.as_str());
    let report = coverage_report(&registry, reference)?;
    let json = serde_json::to_string_pretty(&report)?;
    fs::write(&options.out_path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{CoverageCommandError, CoverageOptions, coverage_report, run_coverage};
    use formulate_i18n_core::{Dictionary, Extension, Rule, ValidationContext};
    use formulate_i18n_runtime::Registry;
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

    fn required(_ctx: &ValidationContext) -> String {
        "required".to_string()
    }

    #[test]
    fn shipped_locales_are_complete() {
        let mut registry = Registry::new("en").expect("registry");
        formulate_i18n_locales::register_all(&mut registry);
        let report = coverage_report(&registry, "en").expect("report");
        assert_eq!(report.total_rules, Rule::ALL.len());
        assert_eq!(report.locales.len(), 12);
        for coverage in report.locales.values() {
            assert_eq!(coverage.missing, 0);
            assert_eq!(coverage.percent, 100.0);
        }
    }

    #[test]
    fn partial_locale_lists_missing_rules() {
        let mut registry = Registry::new("en").expect("registry");
        registry
            .try_extend(Extension::locale(
                "xx",
                Dictionary::new().with(Rule::Required, required),
            ))
            .expect("extend");
        let report = coverage_report(&registry, "en").expect("report");
        let coverage = report.locales.get("xx").expect("xx");
        assert_eq!(coverage.present, 1);
        assert_eq!(coverage.missing, Rule::ALL.len() - 1);
        assert!(coverage.missing_rules.contains(&"endsWith".to_string()));
        assert!(!coverage.missing_rules.contains(&"required".to_string()));
    }

    #[test]
    fn rules_beyond_reference_count_as_extra() {
        let mut registry = Registry::new("xx").expect("registry");
        registry
            .try_extend(
                Extension::new()
                    .with_locale("xx", Dictionary::new().with(Rule::Required, required))
                    .with_locale(
                        "yy",
                        Dictionary::new()
                            .with(Rule::Required, required)
                            .with(Rule::Url, required),
                    ),
            )
            .expect("extend");
        let report = coverage_report(&registry, "xx").expect("report");
        assert_eq!(report.total_rules, 1);
        let coverage = report.locales.get("yy").expect("yy");
        assert_eq!(coverage.present, 1);
        assert_eq!(coverage.missing, 0);
        assert_eq!(coverage.extra, 1);
        assert_eq!(coverage.percent, 100.0);
    }

    #[test]
    fn unknown_reference_is_an_error() {
        let registry = Registry::new("en").expect("registry");
        let err = coverage_report(&registry, "de").expect_err("unknown");
        assert!(matches!(err, CoverageCommandError::UnknownReference(_)));
    }

    #[test]
    fn writes_coverage_report() {
        let root = temp_dir("coverage");
        let config_path = root.join("formulate-i18n.toml");
        fs::write(&config_path, "locales = [\"en\", \"ru\"]\n").expect("write config");
        let out_path = root.join("coverage.json");
        let options = CoverageOptions {
            reference: None,
            out_path: out_path.clone(),
            config_path,
        };
        run_coverage(&options).expect("run");
        let contents = fs::read_to_string(&out_path).expect("read");
        assert!(contents.contains("\"total_rules\": 21"));
        assert!(contents.contains("\"ru\""));
        assert!(!contents.contains("\"sl\""));
        fs::remove_dir_all(&root).ok();
    }
}
