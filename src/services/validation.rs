use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::ContactDetails;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters.";
pub const EMAIL_INVALID: &str = "Please enter a valid email address.";

/// Raw contact form as submitted from the details step.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
}

/// Per-field messages, at most one per field.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<ContactField, String>);

impl FieldErrors {
    pub fn get(&self, field: ContactField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn insert(&mut self, field: ContactField, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = self.0.values().map(String::as_str).collect();
        write!(f, "{}", messages.join(" "))
    }
}

pub fn validate_contact(form: &ContactForm) -> Result<ContactDetails, FieldErrors> {
    let mut errors = FieldErrors::default();

    if form.name.chars().count() < NAME_MIN_CHARS {
        errors.insert(ContactField::Name, NAME_TOO_SHORT);
    }

    let email = form.email.trim();
    if !is_valid_email(email) {
        errors.insert(ContactField::Email, EMAIL_INVALID);
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let phone = form
        .phone
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string);

    Ok(ContactDetails {
        name: form.name.clone(),
        email: email.to_string(),
        phone,
    })
}

fn is_valid_email(email: &str) -> bool {
    if !email_address::EmailAddress::is_valid(email) {
        return false;
    }
    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };
    // Plain dot-atom local parts only: no quoted strings
    if !local.chars().all(is_local_char) {
        return false;
    }
    // Hostname domains with an alphabetic TLD: no IP literals
    match domain.rsplit_once('.') {
        Some((host, tld)) => {
            !host.is_empty()
                && !domain.starts_with('[')
                && tld.len() >= 2
                && tld.chars().all(|c| c.is_ascii_alphabetic())
        }
        None => false,
    }
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '\'' | '+' | '-' | '.')
}
