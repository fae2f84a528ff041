use alloc::string::String;
use alloc::vec::Vec;

use crate::LanguageTag;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NegotiationResult {
    pub selected: LanguageTag,
    pub requested: LanguageTag,
    pub fell_back: bool,
    pub trace: Option<NegotiationTrace>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NegotiationTrace {
    pub attempts: Vec<String>,
}

/// Picks the first supported tag for the requested locales, truncating each
/// requested tag subtag by subtag before moving on, and falling back to
/// `default_locale` when nothing matches.
pub fn negotiate_lookup(
    requested: &[LanguageTag],
    supported: &[LanguageTag],
    default_locale: &LanguageTag,
) -> NegotiationResult {
    negotiate(requested, supported, default_locale, false)
}

pub fn negotiate_lookup_with_trace(
    requested: &[LanguageTag],
    supported: &[LanguageTag],
    default_locale: &LanguageTag,
) -> NegotiationResult {
    negotiate(requested, supported, default_locale, true)
}

fn negotiate(
    requested: &[LanguageTag],
    supported: &[LanguageTag],
    default_locale: &LanguageTag,
    with_trace: bool,
) -> NegotiationResult {
    let mut trace = with_trace.then(|| NegotiationTrace {
        attempts: Vec::new(),
    });

    for requested_tag in requested {
        for attempt in candidates(requested_tag) {
            if let Some(trace) = trace.as_mut() {
                trace.attempts.push(attempt.clone());
            }
            let found = supported
                .iter()
                .find(|candidate| candidate.normalized() == attempt);
            if let Some(selected) = found {
                return NegotiationResult {
                    selected: selected.clone(),
                    requested: requested_tag.clone(),
                    fell_back: false,
                    trace,
                };
            }
        }
    }

    NegotiationResult {
        selected: default_locale.clone(),
        requested: requested
            .first()
            .cloned()
            .unwrap_or_else(|| default_locale.clone()),
        fell_back: true,
        trace,
    }
}

fn candidates(tag: &LanguageTag) -> Vec<String> {
    let mut tried = Vec::new();
    tried.push(String::from(tag.normalized()));

    let mut parts = tag.match_subtags().to_vec();
    let full = parts.join("-");
    if full != tag.normalized() {
        tried.push(full);
    }
    while parts.len() > 1 {
        parts.pop();
        tried.push(parts.join("-"));
    }
    tried
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;

    use super::{negotiate_lookup, negotiate_lookup_with_trace};
    use crate::LanguageTag;

    fn tag(value: &str) -> LanguageTag {
        LanguageTag::parse(value).expect("valid tag")
    }

    #[test]
    fn exact_match_wins() {
        let supported = vec![tag("ru"), tag("uk")];
        let result = negotiate_lookup(&[tag("uk")], &supported, &tag("ru"));
        assert_eq!(result.selected.normalized(), "uk");
        assert!(!result.fell_back);
    }

    #[test]
    fn region_is_truncated() {
        let supported = vec![tag("en"), tag("sl")];
        let result = negotiate_lookup(&[tag("en-GB")], &supported, &tag("sl"));
        assert_eq!(result.selected.normalized(), "en");
        assert_eq!(result.requested.normalized(), "en-GB");
    }

    #[test]
    fn later_requests_are_tried_in_order() {
        let supported = vec![tag("fi"), tag("el")];
        let result = negotiate_lookup(&[tag("sv-FI"), tag("el-GR")], &supported, &tag("fi"));
        assert_eq!(result.selected.normalized(), "el");
    }

    #[test]
    fn unmatched_request_uses_default() {
        let supported = vec![tag("en")];
        let result = negotiate_lookup(&[tag("ja-JP")], &supported, &tag("en"));
        assert_eq!(result.selected.normalized(), "en");
        assert!(result.fell_back);
    }

    #[test]
    fn trace_records_each_attempt() {
        let supported = vec![tag("az")];
        let result = negotiate_lookup_with_trace(&[tag("az-Latn-AZ")], &supported, &tag("en"));
        let trace = result.trace.expect("trace should be present");
        assert_eq!(
            trace.attempts,
            vec![
                String::from("az-Latn-AZ"),
                String::from("az-Latn"),
                String::from("az"),
            ]
        );
    }
}
