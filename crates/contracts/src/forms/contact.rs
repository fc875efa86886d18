//! The contact-page inquiry draft.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{FieldErrors, FieldSchema, FormSchema, Rule};

/// Subjects offered by the inquiry form's select control.
pub const SUBJECT_OPTIONS: [&str; 5] = [
    "General Inquiry",
    "Admissions",
    "Academic Programs",
    "Student Services",
    "Other",
];

/// A general inquiry sent from the contact page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInquiry {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

static SCHEMA: Lazy<FormSchema> = Lazy::new(|| {
    FormSchema::new(vec![
        FieldSchema::new(
            "fullName",
            vec![Rule::MinLength { min: 2, message: "Full name must be at least 2 characters" }],
        ),
        FieldSchema::new(
            "email",
            vec![Rule::EmailShape { message: "Please enter a valid email address" }],
        ),
        FieldSchema::new(
            "phone",
            vec![Rule::MinLength { min: 10, message: "Please enter a valid phone number" }],
        ),
        FieldSchema::new(
            "subject",
            vec![Rule::Required { message: "Please select a subject" }],
        ),
        FieldSchema::new(
            "message",
            vec![Rule::MinLength { min: 10, message: "Message must be at least 10 characters" }],
        ),
    ])
});

impl ContactInquiry {
    pub fn schema() -> &'static FormSchema {
        &SCHEMA
    }

    fn values(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("fullName", &self.full_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("subject", &self.subject),
            ("message", &self.message),
        ]
    }

    pub fn field_errors(&self) -> FieldErrors {
        Self::schema().validate(&self.values())
    }

    pub fn is_valid(&self) -> bool {
        self.field_errors().is_empty()
    }

    pub fn validate(self) -> Result<Self, FieldErrors> {
        let errors = self.field_errors();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_inquiry_passes() {
        let inquiry = ContactInquiry {
            full_name: "Sara Ali".into(),
            email: "sara.ali@example.com".into(),
            phone: "+92 321 9876543".into(),
            subject: "Admissions".into(),
            message: "When does the next admission cycle open?".into(),
        };
        assert!(inquiry.is_valid());
    }

    #[test]
    fn short_message_is_rejected() {
        let inquiry = ContactInquiry {
            full_name: "Sara Ali".into(),
            email: "sara.ali@example.com".into(),
            phone: "+92 321 9876543".into(),
            subject: "Other".into(),
            message: "Hi".into(),
        };
        assert_eq!(
            inquiry.field_errors().get("message"),
            Some(&"Message must be at least 10 characters")
        );
    }
}
