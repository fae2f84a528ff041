#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod casing;
mod context;
mod dictionary;
mod error;
mod extension;
mod language_tag;
mod negotiation;
mod plural;
mod rule;
mod value;

pub use casing::{CaseRule, sentence, sentence_with};
pub use context::{Measure, ValidationContext};
pub use dictionary::{Dictionary, Formatter};
pub use error::{CoreError, CoreResult};
pub use extension::{Extension, ExtensionHost};
pub use language_tag::LanguageTag;
pub use negotiation::{
    NegotiationResult, NegotiationTrace, negotiate_lookup, negotiate_lookup_with_trace,
};
pub use plural::{PluralCategory, parse_count, plural_category};
pub use rule::Rule;
pub use value::Value;
