//! Validation rule table for the contact form.
//!
//! Rules are plain data: an ordered list of `(field, predicate, message)`.
//! Validation runs every rule against the trimmed input and reports all
//! failing fields at once. When a field breaks more than one rule, the
//! message of the first rule listed for it wins.

use crate::contact::fields::{ContactFormFields, Field, FieldErrors, Lead};
use crate::i18n::{strings, LanguageResolver, LocalizedPair};
use regex::Regex;
use std::sync::OnceLock;

/// Predicate applied to a trimmed field value.
#[derive(Debug, Clone, Copy)]
pub enum Check {
    /// At least this many characters.
    MinChars(usize),
    /// At most this many characters.
    MaxChars(usize),
    Email,
    Custom(fn(&str) -> bool),
}

impl Check {
    pub fn passes(&self, value: &str) -> bool {
        match self {
            Check::MinChars(min) => value.chars().count() >= *min,
            Check::MaxChars(max) => value.chars().count() <= *max,
            Check::Email => is_valid_email(value),
            Check::Custom(predicate) => predicate(value),
        }
    }
}

/// A single check against one field's trimmed value.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: Field,
    pub check: Check,
    pub message: LocalizedPair<'static>,
}

impl FieldRule {
    pub fn passes(&self, value: &str) -> bool {
        self.check.passes(value)
    }
}

/// Outcome of a full validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid(Lead),
    Invalid(FieldErrors),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid(_))
    }
}

/// Email syntax check.
///
/// Local part: letters, digits and `_ ' + - .`, not starting with a dot, no
/// consecutive dots, and not ending in `'` or `.`. Domain: dot-separated
/// labels ending in an alphabetic TLD of two or more letters.
pub fn is_valid_email(value: &str) -> bool {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL_RE.get_or_init(|| {
        Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
            .expect("email pattern is a valid regex")
    });

    !value.starts_with('.') && !value.contains("..") && re.is_match(value)
}

/// The contact form rules, in evaluation order.
pub const RULES: &[FieldRule] = &[
    FieldRule {
        field: Field::Name,
        check: Check::MinChars(2),
        message: strings::NAME_TOO_SHORT,
    },
    FieldRule {
        field: Field::Name,
        check: Check::MaxChars(100),
        message: strings::NAME_TOO_LONG,
    },
    FieldRule {
        field: Field::Email,
        check: Check::Email,
        message: strings::EMAIL_INVALID,
    },
    FieldRule {
        field: Field::Email,
        check: Check::MaxChars(255),
        message: strings::EMAIL_TOO_LONG,
    },
    FieldRule {
        field: Field::Phone,
        check: Check::MinChars(10),
        message: strings::PHONE_INVALID,
    },
    FieldRule {
        field: Field::Phone,
        check: Check::MaxChars(20),
        message: strings::PHONE_TOO_LONG,
    },
    FieldRule {
        field: Field::Message,
        check: Check::MinChars(10),
        message: strings::MESSAGE_TOO_SHORT,
    },
    FieldRule {
        field: Field::Message,
        check: Check::MaxChars(1000),
        message: strings::MESSAGE_TOO_LONG,
    },
];

/// Validate the form against `RULES`, localizing messages with `resolver`.
pub fn validate(fields: &ContactFormFields, resolver: &LanguageResolver) -> Validation {
    validate_with(RULES, fields, resolver)
}

/// Validate against an arbitrary rule table.
pub fn validate_with(
    rules: &[FieldRule],
    fields: &ContactFormFields,
    resolver: &LanguageResolver,
) -> Validation {
    let mut errors = FieldErrors::new();

    for rule in rules {
        if errors.contains(rule.field) {
            continue;
        }
        if !rule.passes(fields.get(rule.field).trim()) {
            errors.insert_first(rule.field, resolver.resolve(rule.message));
        }
    }

    if errors.is_empty() {
        Validation::Valid(Lead {
            name: fields.name.trim().to_string(),
            email: fields.email.trim().to_string(),
            phone: fields.phone.trim().to_string(),
            message: fields.message.trim().to_string(),
        })
    } else {
        Validation::Invalid(errors)
    }
}
