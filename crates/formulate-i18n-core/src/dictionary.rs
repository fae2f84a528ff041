use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::{Rule, ValidationContext};

/// Renders the message for one rule in one locale.
pub type Formatter = fn(&ValidationContext) -> String;

/// The formatters of a single locale, keyed by rule.
#[derive(Clone, Default)]
pub struct Dictionary {
    entries: BTreeMap<Rule, Formatter>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, rule: Rule, formatter: Formatter) -> Self {
        self.entries.insert(rule, formatter);
        self
    }

    pub fn insert(&mut self, rule: Rule, formatter: Formatter) -> Option<Formatter> {
        self.entries.insert(rule, formatter)
    }

    pub fn get(&self, rule: Rule) -> Option<Formatter> {
        self.entries.get(&rule).copied()
    }

    pub fn contains(&self, rule: Rule) -> bool {
        self.entries.contains_key(&rule)
    }

    pub fn render(&self, rule: Rule, ctx: &ValidationContext) -> Option<String> {
        self.get(rule).map(|formatter| formatter(ctx))
    }

    pub fn rules(&self) -> impl Iterator<Item = Rule> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rules `reference` formats that this dictionary does not, in rule order.
    pub fn missing_rules(&self, reference: &Dictionary) -> Vec<Rule> {
        reference
            .rules()
            .filter(|rule| !self.contains(*rule))
            .collect()
    }
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.rules()).finish()
    }
}
