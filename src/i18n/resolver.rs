//! Language resolver: the single active locale for one visitor session.
//!
//! The resolver is an explicit handle rather than a process global. The server
//! builds one per request from the visitor's `locale` cookie, wraps it in an
//! `Arc`, and hands clones to everything that renders text for that request.
//! Tests build their own isolated instances.

use crate::i18n::Locale;
use std::sync::atomic::{AtomicU8, Ordering};
use tracing::info;

/// A pair of strings, one per locale, supplied at the call site.
///
/// Pairs are never stored by the resolver; each is resolved on demand
/// against whatever locale is active at that moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedPair<'a> {
    pub pt: &'a str,
    pub en: &'a str,
}

impl<'a> LocalizedPair<'a> {
    pub const fn new(pt: &'a str, en: &'a str) -> Self {
        Self { pt, en }
    }

    /// Select the string for a given locale.
    pub fn get(&self, locale: Locale) -> &'a str {
        match locale {
            Locale::Pt => self.pt,
            Locale::En => self.en,
        }
    }
}

/// Holds the active locale and resolves localized pairs against it.
///
/// Reads and writes go through a single atomic byte, so any number of
/// callers may resolve concurrently. The last toggle wins.
#[derive(Debug)]
pub struct LanguageResolver {
    active: AtomicU8,
}

impl LanguageResolver {
    /// Create a resolver starting at the given locale.
    pub fn new(initial: Locale) -> Self {
        Self {
            active: AtomicU8::new(initial.to_bits()),
        }
    }

    /// The locale every resolution currently uses.
    pub fn active_locale(&self) -> Locale {
        Locale::from_bits(self.active.load(Ordering::Acquire))
    }

    /// Flip `pt ⇄ en` and return the new active locale.
    pub fn toggle_locale(&self) -> Locale {
        let previous = Locale::from_bits(self.active.fetch_xor(1, Ordering::AcqRel));
        let current = previous.toggled();
        info!("Locale toggled: {} -> {}", previous, current);
        current
    }

    /// Resolve a pair against the active locale.
    pub fn resolve<'a>(&self, pair: LocalizedPair<'a>) -> &'a str {
        pair.get(self.active_locale())
    }

    /// Shorthand for resolving an inline pair: `resolver.t("Olá", "Hello")`.
    pub fn t<'a>(&self, pt: &'a str, en: &'a str) -> &'a str {
        self.resolve(LocalizedPair::new(pt, en))
    }
}

impl Default for LanguageResolver {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}
