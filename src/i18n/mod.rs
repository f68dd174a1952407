//! Internationalization (i18n) module for the bilingual site.
//!
//! Every visible string is written twice, once in Portuguese and once in
//! English, and picked at render time from the active locale.
//!
//! # Architecture
//!
//! - `locale`: The `Locale` enum and its metadata
//! - `resolver`: `LanguageResolver`, the shared active-locale handle, and `LocalizedPair`
//! - `strings`: Catalogue of localized strings used by the form and page
//!
//! # Example
//!
//! ```rust,ignore
//! use site_ti::i18n::{LanguageResolver, LocalizedPair};
//!
//! let resolver = LanguageResolver::default();
//! assert_eq!(resolver.resolve(LocalizedPair::new("Olá", "Hello")), "Olá");
//!
//! resolver.toggle_locale();
//! assert_eq!(resolver.t("Olá", "Hello"), "Hello");
//! ```

mod locale;
mod resolver;
pub mod strings;

pub use locale::{Locale, LocaleError};
pub use resolver::{LanguageResolver, LocalizedPair};
