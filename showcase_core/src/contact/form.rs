//! Contact form fields and validation.

use crate::api::TemplateParams;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Shortest accepted message, counted in characters after trimming.
pub const MIN_MESSAGE_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Your Email",
            Field::Subject => "Subject",
            Field::Message => "Your Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "John Doe",
            Field::Email => "john@example.com",
            Field::Subject => "Project Inquiry",
            Field::Message => "Tell me about your project...",
        }
    }
}

/// Per-field validation messages, ordered by [`Field`].
pub type FieldErrors = BTreeMap<Field, &'static str>;

/// Raw text of the four inputs, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Trimmed values of a form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ValidSubmission {
    pub fn into_params(self, timestamp: String) -> TemplateParams {
        TemplateParams {
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            timestamp,
        }
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

impl ContactForm {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_blank(&self) -> bool {
        Field::ALL.iter().all(|f| self.field(*f).trim().is_empty())
    }

    /// Checks every field and returns either the trimmed submission or the
    /// full set of messages. All fields are checked even after the first
    /// failure.
    pub fn validate(&self) -> Result<ValidSubmission, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = self.name.trim();
        let email = self.email.trim();
        let subject = self.subject.trim();
        let message = self.message.trim();

        if name.is_empty() {
            errors.insert(Field::Name, "Name is required");
        }
        if email.is_empty() {
            errors.insert(Field::Email, "Email is required");
        } else if !email_pattern().is_match(email) {
            errors.insert(Field::Email, "Please enter a valid email");
        }
        if subject.is_empty() {
            errors.insert(Field::Subject, "Subject is required");
        }
        if message.is_empty() {
            errors.insert(Field::Message, "Message is required");
        } else if message.chars().count() < MIN_MESSAGE_CHARS {
            errors.insert(Field::Message, "Message must be at least 10 characters");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ValidSubmission {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> ContactForm {
        ContactForm {
            name: "  Ada Lovelace ".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Engines".to_string(),
            message: "Let us build an analytical engine.".to_string(),
        }
    }

    #[test]
    fn test_valid_form_is_trimmed() {
        let submission = filled().validate().unwrap();
        assert_eq!(submission.name, "Ada Lovelace");
        assert_eq!(submission.email, "ada@example.com");
    }

    #[test]
    fn test_blank_form_reports_every_field() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(errors.keys().copied().collect::<Vec<_>>(), Field::ALL.to_vec());
        assert_eq!(errors[&Field::Name], "Name is required");
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let mut form = filled();
        form.subject = "   \t".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&Field::Subject], "Subject is required");
    }

    #[test]
    fn test_email_shapes() {
        for bad in ["ada", "ada@", "ada@example", "a da@example.com", "@example.com", "ada@@x.io"] {
            let mut form = filled();
            form.email = bad.to_string();
            let errors = form.validate().unwrap_err();
            assert_eq!(errors[&Field::Email], "Please enter a valid email", "{bad}");
        }
        for good in ["a@b.co", "first.last+tag@sub.example.org"] {
            let mut form = filled();
            form.email = good.to_string();
            assert!(form.validate().is_ok(), "{good}");
        }
    }

    #[test]
    fn test_message_length_boundary() {
        let mut form = filled();
        form.message = "  123456789  ".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors[&Field::Message], "Message must be at least 10 characters");

        form.message = "1234567890".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_message_length_counts_characters_not_bytes() {
        let mut form = filled();
        form.message = "héllo wörl".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_set_field_and_clear() {
        let mut form = ContactForm::default();
        form.set_field(Field::Email, "x@y.z");
        assert_eq!(form.field(Field::Email), "x@y.z");
        assert!(!form.is_blank());
        form.clear();
        assert!(form.is_blank());
    }
}
