//! Parent-portal drafts: account registration and sign-in.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{CrossFieldRule, FieldErrors, FieldSchema, FormSchema, Rule};

/// Draft for creating a parent-portal account.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParentRegistration {
    pub student_id: String,
    pub registration_code: String,
    pub parent_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

static REGISTRATION_SCHEMA: Lazy<FormSchema> = Lazy::new(|| {
    FormSchema::new(vec![
        FieldSchema::new(
            "studentId",
            vec![Rule::Required { message: "Student ID is required" }],
        ),
        FieldSchema::new(
            "registrationCode",
            vec![Rule::MinLength {
                min: 6,
                message: "Registration code must be at least 6 characters",
            }],
        ),
        FieldSchema::new(
            "parentName",
            vec![Rule::MinLength { min: 2, message: "Parent name must be at least 2 characters" }],
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
            "password",
            vec![Rule::MinLength { min: 8, message: "Password must be at least 8 characters" }],
        ),
        FieldSchema::new(
            "confirmPassword",
            vec![Rule::MinLength { min: 8, message: "Please confirm your password" }],
        ),
    ])
    .with_cross_field(CrossFieldRule {
        field: "confirmPassword",
        must_match: "password",
        message: "Passwords don't match",
    })
});

impl ParentRegistration {
    pub fn schema() -> &'static FormSchema {
        &REGISTRATION_SCHEMA
    }

    fn values(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("studentId", &self.student_id),
            ("registrationCode", &self.registration_code),
            ("parentName", &self.parent_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("password", &self.password),
            ("confirmPassword", &self.confirm_password),
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

/// Sign-in draft. Shape checks only; whether the pair is accepted is the
/// session module's concern.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignInCredentials {
    pub student_id: String,
    pub password: String,
}

static SIGN_IN_SCHEMA: Lazy<FormSchema> = Lazy::new(|| {
    FormSchema::new(vec![
        FieldSchema::new(
            "studentId",
            vec![Rule::Required { message: "Student ID is required" }],
        ),
        FieldSchema::new(
            "password",
            vec![Rule::Required { message: "Password is required" }],
        ),
    ])
});

impl SignInCredentials {
    pub fn schema() -> &'static FormSchema {
        &SIGN_IN_SCHEMA
    }

    fn values(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("studentId", &self.student_id),
            ("password", &self.password),
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

    fn complete_registration() -> ParentRegistration {
        ParentRegistration {
            student_id: "22G149".into(),
            registration_code: "REG-2024".into(),
            parent_name: "Ahmed Khan".into(),
            email: "ahmed.khan@example.com".into(),
            phone: "+92 300 1234567".into(),
            password: "abcdefgh".into(),
            confirm_password: "abcdefgh".into(),
        }
    }

    #[test]
    fn complete_registration_passes() {
        assert!(complete_registration().is_valid());
    }

    #[test]
    fn password_mismatch_lands_on_confirmation_only() {
        let mut draft = complete_registration();
        draft.password = "abcdefgh".into();
        draft.confirm_password = "abcdefgi".into();
        let errors = draft.field_errors();
        assert_eq!(errors.get("confirmPassword"), Some(&"Passwords don't match"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn short_registration_code_is_rejected() {
        let mut draft = complete_registration();
        draft.registration_code = "12345".into();
        assert_eq!(
            draft.field_errors().get("registrationCode"),
            Some(&"Registration code must be at least 6 characters")
        );
    }

    #[test]
    fn mismatch_is_hidden_while_password_is_too_short() {
        let mut draft = complete_registration();
        draft.password = "short".into();
        draft.confirm_password = "different1".into();
        let errors = draft.field_errors();
        assert_eq!(
            errors.get("password"),
            Some(&"Password must be at least 8 characters")
        );
        // The cross-field message waits for the per-field pass.
        assert_eq!(errors.get("confirmPassword"), None);
    }

    #[test]
    fn sign_in_requires_both_fields() {
        let errors = SignInCredentials::default().field_errors();
        assert_eq!(errors.get("studentId"), Some(&"Student ID is required"));
        assert_eq!(errors.get("password"), Some(&"Password is required"));

        let filled = SignInCredentials {
            student_id: "22G149".into(),
            password: "anything".into(),
        };
        assert!(filled.is_valid());
    }
}
