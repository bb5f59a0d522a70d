//! Field validation.
//!
//! Each payload checks its fields in declaration order and collects one
//! message per invalid field. An absent field always reports [`NOT_NULL`];
//! the remaining rules for that field only run once a value is present.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Message for a required field that is absent or `null`.
pub const NOT_NULL: &str = "must not be null";

/// Message for a present email that cannot be an address.
pub const WELL_FORMED_EMAIL: &str = "must be a well-formed email address";

/// A payload that can be checked and turned into a validated value.
pub trait Validate {
    type Output;

    fn validate(&self) -> Result<Self::Output, FieldErrors>;
}

/// A constraint on a present string value, with the message it reports.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// At least one non-whitespace character.
    NotBlank(&'static str),
    /// At most this many characters.
    MaxChars(usize, &'static str),
    /// Shaped like `local@domain`.
    Email(&'static str),
}

impl Rule {
    fn check(self, value: &str) -> Result<(), &'static str> {
        let ok = match self {
            Rule::NotBlank(_) => !value.trim().is_empty(),
            Rule::MaxChars(max, _) => value.chars().count() <= max,
            Rule::Email(_) => is_email(value),
        };
        if ok { Ok(()) } else { Err(self.message()) }
    }

    fn message(self) -> &'static str {
        match self {
            Rule::NotBlank(msg) | Rule::MaxChars(_, msg) | Rule::Email(msg) => msg,
        }
    }
}

fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}

/// Field name to message, in the order the fields were checked.
///
/// Serializes as a JSON object that keeps that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(&'static str, &'static str)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check `value` for `field` and return an owned copy when it passes.
    ///
    /// Records at most one message per field: [`NOT_NULL`] when the value is
    /// absent, otherwise the message of the first failing rule.
    pub fn check(&mut self, field: &'static str, value: Option<&str>, rules: &[Rule]) -> Option<String> {
        let Some(value) = value else {
            self.add(field, NOT_NULL);
            return None;
        };
        match rules.iter().try_for_each(|rule| rule.check(value)) {
            Ok(()) => Some(value.to_string()),
            Err(message) => {
                self.add(field, message);
                None
            }
        }
    }

    pub fn add(&mut self, field: &'static str, message: &'static str) {
        self.entries.push((field, message));
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, message)| *message)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, message) in &self.entries {
            map.serialize_entry(field, message)?;
        }
        map.end()
    }
}
