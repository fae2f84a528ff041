use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::{CoreError, CoreResult};

/// A locale tag such as `en`, `en-GB` or `zh-Hant-TW`.
///
/// Parsing keeps the trimmed input and a normalized form (lowercase
/// language, titlecase script, uppercase region). The subtags up to the
/// first singleton (`-u-`, `-x-`, ...) are kept for lookup negotiation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LanguageTag {
    original: String,
    normalized: String,
    match_subtags: Vec<String>,
}

impl LanguageTag {
    pub fn parse(input: &str) -> CoreResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CoreError::InvalidInput("locale tag is empty"));
        }

        let mut normalized_parts = Vec::new();
        let mut match_parts = Vec::new();
        let mut script_seen = false;
        let mut region_seen = false;
        let mut in_extension = false;

        for (idx, part) in trimmed.split(['-', '_']).enumerate() {
            if part.is_empty() {
                return Err(CoreError::InvalidInput("locale tag has empty subtag"));
            }
            if !part.chars().all(|ch| ch.is_ascii_alphanumeric()) {
                return Err(CoreError::InvalidInput("locale tag has invalid characters"));
            }

            if idx == 0 {
                if !is_alpha(part) || !(2..=8).contains(&part.len()) {
                    return Err(CoreError::InvalidInput("invalid language subtag"));
                }
                let language = part.to_ascii_lowercase();
                normalized_parts.push(language.clone());
                match_parts.push(language);
                continue;
            }

            if part.len() == 1 {
                in_extension = true;
                normalized_parts.push(part.to_ascii_lowercase());
                continue;
            }

            let normalized = if in_extension {
                part.to_ascii_lowercase()
            } else if !script_seen && !region_seen && part.len() == 4 && is_alpha(part) {
                script_seen = true;
                titlecase(part)
            } else if !region_seen && is_region(part) {
                region_seen = true;
                part.to_ascii_uppercase()
            } else {
                part.to_ascii_lowercase()
            };

            if !in_extension {
                match_parts.push(normalized.clone());
            }
            normalized_parts.push(normalized);
        }

        Ok(Self {
            original: trimmed.to_string(),
            normalized: normalized_parts.join("-"),
            match_subtags: match_parts,
        })
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn match_subtags(&self) -> &[String] {
        &self.match_subtags
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

impl FromStr for LanguageTag {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        LanguageTag::parse(value)
    }
}

fn is_alpha(value: &str) -> bool {
    value.chars().all(|ch| ch.is_ascii_alphabetic())
}

fn is_region(value: &str) -> bool {
    (value.len() == 2 && is_alpha(value))
        || (value.len() == 3 && value.chars().all(|ch| ch.is_ascii_digit()))
}

fn titlecase(value: &str) -> String {
    let mut output = String::with_capacity(value.len());
    for (idx, ch) in value.chars().enumerate() {
        if idx == 0 {
            output.push(ch.to_ascii_uppercase());
        } else {
            output.push(ch.to_ascii_lowercase());
        }
    }
    output
}
