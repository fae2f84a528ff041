use std::collections::BTreeMap;

use formulate_i18n_core::{
    Dictionary, Extension, ExtensionHost, LanguageTag, NegotiationResult, Rule,
    ValidationContext, negotiate_lookup, negotiate_lookup_with_trace,
};
use tracing::{Level, debug, enabled, warn};

use crate::error::{RuntimeError, RuntimeResult};

/// Host-side store of locale dictionaries.
///
/// Registrars hand their dictionaries over through [`ExtensionHost`]; a
/// locale, once registered, is never replaced. Lookups negotiate the
/// requested tag against the registered ones and fall back to the default
/// locale.
#[derive(Debug)]
pub struct Registry {
    default_locale: LanguageTag,
    dictionaries: BTreeMap<String, Dictionary>,
    supported: Vec<LanguageTag>,
}

impl Registry {
    pub fn new(default_locale: &str) -> RuntimeResult<Self> {
        Ok(Self {
            default_locale: LanguageTag::parse(default_locale)?,
            dictionaries: BTreeMap::new(),
            supported: Vec::new(),
        })
    }

    pub fn default_locale(&self) -> &LanguageTag {
        &self.default_locale
    }

    /// Registers every locale in `extension`, or none of them.
    pub fn try_extend(&mut self, extension: Extension) -> RuntimeResult<()> {
        let mut staged: Vec<(LanguageTag, Dictionary)> = Vec::new();
        for (tag, dictionary) in extension.into_locales() {
            let tag = LanguageTag::parse(&tag)?;
            let taken = self.dictionaries.contains_key(tag.normalized())
                || staged
                    .iter()
                    .any(|(other, _)| other.normalized() == tag.normalized());
            if taken {
                return Err(RuntimeError::DuplicateLocale(tag.normalized().to_string()));
            }
            staged.push((tag, dictionary));
        }

        for (tag, dictionary) in staged {
            debug!(locale = %tag, rules = dictionary.len(), "registered locale");
            self.dictionaries
                .insert(tag.normalized().to_string(), dictionary);
            self.supported.push(tag);
        }
        Ok(())
    }

    pub fn contains(&self, locale: &str) -> bool {
        LanguageTag::parse(locale)
            .map(|tag| self.dictionaries.contains_key(tag.normalized()))
            .unwrap_or(false)
    }

    /// Registered tags in normalized form, sorted.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.dictionaries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.dictionaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dictionaries.is_empty()
    }

    /// The dictionary registered under exactly this tag, without negotiation.
    pub fn dictionary(&self, locale: &str) -> Option<&Dictionary> {
        let tag = LanguageTag::parse(locale).ok()?;
        self.dictionaries.get(tag.normalized())
    }

    pub fn resolve(&self, requested: &str) -> RuntimeResult<NegotiationResult> {
        let requested = [LanguageTag::parse(requested)?];
        // attempts are collected only while debug logging is on
        let negotiation = if enabled!(Level::DEBUG) {
            negotiate_lookup_with_trace(&requested, &self.supported, &self.default_locale)
        } else {
            negotiate_lookup(&requested, &self.supported, &self.default_locale)
        };
        if let Some(trace) = &negotiation.trace {
            debug!(
                requested = %negotiation.requested,
                selected = %negotiation.selected,
                attempts = ?trace.attempts,
                "negotiated locale"
            );
        }
        if negotiation.fell_back {
            debug!(
                requested = %negotiation.requested,
                selected = %negotiation.selected,
                "no registered locale matched, using default"
            );
        }
        Ok(negotiation)
    }

    /// Renders `rule` for the locale negotiated from `locale`.
    ///
    /// A rule the dictionary lacks is rendered with its `default` message.
    pub fn format(
        &self,
        locale: &str,
        rule: Rule,
        ctx: &ValidationContext,
    ) -> RuntimeResult<String> {
        let negotiation = self.resolve(locale)?;
        let selected = negotiation.selected.normalized();
        let dictionary = self
            .dictionaries
            .get(selected)
            .ok_or_else(|| RuntimeError::MissingLocale(selected.to_string()))?;

        if let Some(message) = dictionary.render(rule, ctx) {
            return Ok(message);
        }
        debug!(locale = selected, %rule, "rule missing, using default message");
        dictionary
            .render(Rule::Default, ctx)
            .ok_or_else(|| RuntimeError::MissingMessage {
                locale: selected.to_string(),
                rule,
            })
    }
}

impl ExtensionHost for Registry {
    fn extend(&mut self, extension: Extension) {
        let tags: Vec<String> = extension.locales().keys().cloned().collect();
        if let Err(err) = self.try_extend(extension) {
            warn!(locales = ?tags, error = %err, "rejected locale extension");
        }
    }
}

#[cfg(test)]
mod tests {
    use formulate_i18n_core::{
        Dictionary, Extension, ExtensionHost, Rule, ValidationContext,
    };
    use formulate_i18n_locales as locales;

    use super::Registry;
    use crate::error::RuntimeError;

    fn shouting(ctx: &ValidationContext) -> String {
        format!("{} IS REQUIRED", ctx.name())
    }

    fn plain_default(_ctx: &ValidationContext) -> String {
        "nope".to_string()
    }

    fn full_registry(default_locale: &str) -> Registry {
        let mut registry = Registry::new(default_locale).expect("registry");
        locales::register_all(&mut registry);
        registry
    }

    #[test]
    fn registers_every_shipped_locale() {
        let registry = full_registry("en");
        let tags: Vec<&str> = registry.locales().collect();
        let shipped: Vec<&str> = locales::tags().collect();
        assert_eq!(tags, shipped);
    }

    #[test]
    fn formats_required_in_english() {
        let registry = full_registry("en");
        let ctx = ValidationContext::new("Email");
        let out = registry.format("en", Rule::Required, &ctx).expect("format");
        assert_eq!(out, "Email is required.");
    }

    #[test]
    fn duplicate_is_rejected_without_overwrite() {
        let mut registry = full_registry("en");
        let replacement = Dictionary::new().with(Rule::Required, shouting);
        let err = registry
            .try_extend(Extension::locale("EN", replacement))
            .expect_err("duplicate");
        assert!(matches!(err, RuntimeError::DuplicateLocale(tag) if tag == "en"));

        let ctx = ValidationContext::new("name");
        let out = registry.format("en", Rule::Required, &ctx).expect("format");
        assert_eq!(out, "Name is required.");
    }

    #[test]
    fn host_extend_drops_rejected_extension() {
        let mut registry = Registry::new("en").expect("registry");
        locales::en::register(&mut registry);
        registry.extend(Extension::locale(
            "en",
            Dictionary::new().with(Rule::Required, shouting),
        ));
        assert_eq!(registry.len(), 1);
        let dictionary = registry.dictionary("en").expect("en");
        assert_eq!(dictionary.len(), Rule::ALL.len());
    }

    #[test]
    fn invalid_tag_rejects_whole_extension() {
        let mut registry = Registry::new("en").expect("registry");
        let extension = Extension::new()
            .with_locale("aa", Dictionary::new())
            .with_locale("zz_", Dictionary::new());
        let err = registry.try_extend(extension).expect_err("invalid tag");
        assert!(matches!(err, RuntimeError::Core(_)));
        assert!(registry.is_empty());
        assert!(!registry.contains("aa"));
    }

    #[test]
    fn invalid_default_locale_is_rejected() {
        assert!(Registry::new("").is_err());
    }

    #[test]
    fn region_falls_back_to_language() {
        let registry = full_registry("sl");
        let negotiation = registry.resolve("en-GB").expect("resolve");
        assert_eq!(negotiation.selected.normalized(), "en");
        assert!(!negotiation.fell_back);
    }

    #[test]
    fn script_and_region_truncate_to_language() {
        let registry = full_registry("en");
        let negotiation = registry.resolve("az-Latn-AZ").expect("resolve");
        assert_eq!(negotiation.selected.normalized(), "az");
        assert_eq!(negotiation.requested.normalized(), "az-Latn-AZ");
        assert!(!negotiation.fell_back);
        if let Some(trace) = negotiation.trace {
            assert_eq!(trace.attempts.last().map(String::as_str), Some("az"));
        }
    }

    #[test]
    fn unknown_locale_uses_default() {
        let registry = full_registry("sl");
        let ctx = ValidationContext::new("ime");
        let out = registry.format("de-AT", Rule::Required, &ctx).expect("format");
        assert_eq!(out, "Ime je obvezno.");
    }

    #[test]
    fn missing_rule_uses_default_message() {
        let mut registry = Registry::new("xx").expect("registry");
        registry
            .try_extend(Extension::locale(
                "xx",
                Dictionary::new().with(Rule::Default, plain_default),
            ))
            .expect("extend");
        let ctx = ValidationContext::new("name");
        let out = registry.format("xx", Rule::Email, &ctx).expect("format");
        assert_eq!(out, "nope");
    }

    #[test]
    fn missing_rule_without_default_is_an_error() {
        let mut registry = Registry::new("xx").expect("registry");
        registry
            .try_extend(Extension::locale("xx", Dictionary::new()))
            .expect("extend");
        let err = registry
            .format("xx", Rule::Email, &ValidationContext::default())
            .expect_err("missing");
        assert!(matches!(
            err,
            RuntimeError::MissingMessage { rule: Rule::Email, .. }
        ));
    }

    #[test]
    fn unregistered_default_is_missing_locale() {
        let registry = Registry::new("en").expect("registry");
        let err = registry
            .format("fr", Rule::Required, &ValidationContext::default())
            .expect_err("missing");
        assert!(matches!(err, RuntimeError::MissingLocale(tag) if tag == "en"));
    }
}
