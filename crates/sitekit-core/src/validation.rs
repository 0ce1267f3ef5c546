//! Declarative field validation for forms.
//!
//! This module provides:
//! - Built-in validators (required, min length, email)
//! - Per-field validator chains
//! - Form-level validation that reports every failing field at once

use std::fmt;

/// Outcome of checking one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// The value is acceptable
    Valid,
    /// The value was rejected; carries the text shown to the visitor
    Invalid(String),
}

impl ValidationResult {
    /// True when the value was accepted.
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// True when the value was rejected.
    pub const fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Rejection text, if any.
    pub fn error(&self) -> Option<&str> {
        if let Self::Invalid(text) = self {
            Some(text.as_str())
        } else {
            None
        }
    }
}

/// A single rule applied to a field value.
pub trait Validator: Send + Sync {
    /// Check `value` against the rule.
    fn validate(&self, value: &str) -> ValidationResult;

    /// Short rule identifier, used in debug output.
    fn name(&self) -> &str;
}

/// Rejects empty or whitespace-only values.
#[derive(Debug, Clone)]
pub struct Required {
    message: String,
}

impl Required {
    /// Rule with the given rejection text.
    pub fn with_message(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}

impl Validator for Required {
    fn validate(&self, value: &str) -> ValidationResult {
        reject_unless(!value.trim().is_empty(), &self.message)
    }

    fn name(&self) -> &'static str {
        "required"
    }
}

/// Minimum length validator, counted in characters.
#[derive(Debug, Clone)]
pub struct MinLength {
    min: usize,
    message: String,
}

impl MinLength {
    /// Rule requiring at least `min` characters, rejected with `message`.
    pub fn with_message(min: usize, message: &str) -> Self {
        Self {
            min,
            message: message.to_owned(),
        }
    }
}

impl Validator for MinLength {
    fn validate(&self, value: &str) -> ValidationResult {
        reject_unless(value.chars().count() >= self.min, &self.message)
    }

    fn name(&self) -> &'static str {
        "minLength"
    }
}

/// Email address validator.
///
/// Accepts `local@domain.tld` where no part is empty and no part contains
/// whitespace or a second `@`. Dots are allowed anywhere in the domain as long
/// as at least one has a character on each side. An empty value is invalid.
#[derive(Debug, Clone)]
pub struct Email {
    message: String,
}

impl Email {
    /// Rule with the given rejection text.
    pub fn with_message(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }

    /// Check whether `value` is shaped like an email address.
    pub fn matches(value: &str) -> bool {
        if value.chars().any(is_pattern_space) {
            return false;
        }
        let Some((local, domain)) = value.split_once('@') else {
            return false;
        };
        if local.is_empty() || domain.contains('@') {
            return false;
        }
        domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
    }
}

impl Validator for Email {
    fn validate(&self, value: &str) -> ValidationResult {
        reject_unless(Self::matches(value), &self.message)
    }

    fn name(&self) -> &'static str {
        "email"
    }
}

/// Whitespace as matched by `\s` in browser regular expressions.
///
/// Unicode `White_Space` without U+0085 (NEL), plus U+FEFF (BOM).
fn is_pattern_space(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

fn reject_unless(ok: bool, message: &str) -> ValidationResult {
    if ok {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid(message.to_owned())
    }
}

/// Validator chain for one field. The first failing validator wins.
#[derive(Default)]
pub struct FieldConfig {
    validators: Vec<Box<dyn Validator>>,
}

impl fmt::Debug for FieldConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldConfig")
            .field(
                "validators",
                &self.validators.iter().map(|v| v.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl FieldConfig {
    /// Empty chain; accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append any rule.
    pub fn rule<V: Validator + 'static>(mut self, validator: V) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Append a [`Required`] rule.
    pub fn required(self, message: &str) -> Self {
        self.rule(Required::with_message(message))
    }

    /// Append a [`MinLength`] rule.
    pub fn min_length(self, min: usize, message: &str) -> Self {
        self.rule(MinLength::with_message(min, message))
    }

    /// Append an [`Email`] rule.
    pub fn email(self, message: &str) -> Self {
        self.rule(Email::with_message(message))
    }

    /// Run the chain on a value.
    pub fn validate(&self, value: &str) -> ValidationResult {
        self.validators
            .iter()
            .map(|v| v.validate(value))
            .find(ValidationResult::is_invalid)
            .unwrap_or(ValidationResult::Valid)
    }
}

/// Error messages keyed by field name, in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(String, String)>,
}

impl FieldErrors {
    /// Create an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for a field, replacing any previous one.
    pub fn insert(&mut self, field: &str, message: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|(f, _)| f == field) {
            message.clone_into(&mut entry.1);
        } else {
            self.entries.push((field.to_string(), message.to_string()));
        }
    }

    /// Error for a field, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, m)| m.as_str())
    }

    /// Check whether no field failed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over `(field, message)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(f, m)| (f.as_str(), m.as_str()))
    }
}

/// Form-level validator: every field is checked on every pass, so all
/// failures surface together.
#[derive(Debug, Default)]
pub struct FormValidator {
    fields: Vec<(String, FieldConfig)>,
}

impl FormValidator {
    /// Validator with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, or replace the rules of an existing one.
    pub fn register(&mut self, name: &str, config: FieldConfig) {
        if let Some(entry) = self.fields.iter_mut().find(|(n, _)| n == name) {
            entry.1 = config;
        } else {
            self.fields.push((name.to_string(), config));
        }
    }

    /// Builder form of [`FormValidator::register`].
    pub fn field(mut self, name: &str, config: FieldConfig) -> Self {
        self.register(name, config);
        self
    }

    /// Validate every field, looking values up with `value_of`.
    pub fn validate<'a, F>(&self, value_of: F) -> FieldErrors
    where
        F: Fn(&str) -> &'a str,
    {
        let mut errors = FieldErrors::new();
        for (name, config) in &self.fields {
            if let ValidationResult::Invalid(msg) = config.validate(value_of(name)) {
                errors.insert(name, &msg);
            }
        }
        errors
    }
}
