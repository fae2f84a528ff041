#![forbid(unsafe_code)]

//! Validation-message dictionaries, one module per locale.
//!
//! Each module exposes `TAG`, `dictionary()` and `register(host)`. The
//! functions below index them by tag.

use std::collections::BTreeMap;

use formulate_i18n_core::{Dictionary, ExtensionHost};

pub mod az;
pub mod el;
pub mod en;
pub mod fa;
pub mod fi;
pub mod ha;
pub mod id;
pub mod ig;
pub mod ru;
pub mod sl;
pub mod uk;
pub mod yo;

/// Installs one locale into a host.
pub type Registrar = fn(&mut dyn ExtensionHost);

/// The locale every other dictionary is measured against.
pub const REFERENCE_LOCALE: &str = en::TAG;

const LOCALES: [(&str, Registrar, fn() -> Dictionary); 12] = [
    (az::TAG, az::register, az::dictionary),
    (el::TAG, el::register, el::dictionary),
    (en::TAG, en::register, en::dictionary),
    (fa::TAG, fa::register, fa::dictionary),
    (fi::TAG, fi::register, fi::dictionary),
    (ha::TAG, ha::register, ha::dictionary),
    (id::TAG, id::register, id::dictionary),
    (ig::TAG, ig::register, ig::dictionary),
    (ru::TAG, ru::register, ru::dictionary),
    (sl::TAG, sl::register, sl::dictionary),
    (uk::TAG, uk::register, uk::dictionary),
    (yo::TAG, yo::register, yo::dictionary),
];

/// Every shipped tag, sorted.
pub fn tags() -> impl Iterator<Item = &'static str> {
    LOCALES.iter().map(|(tag, _, _)| *tag)
}

pub fn registrars() -> BTreeMap<&'static str, Registrar> {
    LOCALES
        .iter()
        .map(|(tag, registrar, _)| (*tag, *registrar))
        .collect()
}

pub fn registrar(tag: &str) -> Option<Registrar> {
    LOCALES
        .iter()
        .find(|(candidate, _, _)| *candidate == tag)
        .map(|(_, registrar, _)| *registrar)
}

/// Calls every registrar once, in tag order.
pub fn register_all(host: &mut dyn ExtensionHost) {
    for (_, registrar, _) in &LOCALES {
        registrar(&mut *host);
    }
}

pub fn dictionary(tag: &str) -> Option<Dictionary> {
    LOCALES
        .iter()
        .find(|(candidate, _, _)| *candidate == tag)
        .map(|(_, _, build)| build())
}
