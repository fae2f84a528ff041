use alloc::collections::BTreeMap;
use alloc::string::String;

use crate::Dictionary;

/// What a registrar hands to the host: dictionaries keyed by locale tag.
#[derive(Clone, Debug, Default)]
pub struct Extension {
    locales: BTreeMap<String, Dictionary>,
}

impl Extension {
    pub fn new() -> Self {
        Self::default()
    }

    /// An extension carrying a single locale.
    pub fn locale(tag: impl Into<String>, dictionary: Dictionary) -> Self {
        Self::new().with_locale(tag, dictionary)
    }

    pub fn with_locale(mut self, tag: impl Into<String>, dictionary: Dictionary) -> Self {
        self.locales.insert(tag.into(), dictionary);
        self
    }

    pub fn locales(&self) -> &BTreeMap<String, Dictionary> {
        &self.locales
    }

    pub fn into_locales(self) -> BTreeMap<String, Dictionary> {
        self.locales
    }
}

/// A plugin instance that accepts extensions.
///
/// Implemented by the host. Registrars call [`ExtensionHost::extend`] once
/// and never look at the outcome.
pub trait ExtensionHost {
    fn extend(&mut self, extension: Extension);
}
