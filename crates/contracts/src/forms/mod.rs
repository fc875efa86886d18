//! Declarative field validation for the site's forms.
//!
//! Each form declares named fields with an ordered rule list. Validation is
//! synchronous and pure: the same input always yields the same error map,
//! so the frontend can re-run it on every keystroke for live feedback.
//!
//! Reporting policy:
//! - per field, only the first declared failing rule contributes a message;
//! - cross-field rules run only once the per-field pass is clean, and attach
//!   their message to the dependent field (e.g. the confirmation input).

use std::collections::BTreeMap;

pub mod admission;
pub mod contact;
pub mod parent_portal;

pub use admission::AdmissionApplication;
pub use contact::ContactInquiry;
pub use parent_portal::{ParentRegistration, SignInCredentials};

/// Field name → message for every field that failed validation.
/// Empty means the form is valid.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

/// A single constraint on one field, with its user-facing message.
#[derive(Debug, Clone)]
pub enum Rule {
    /// The field must not be empty.
    Required { message: &'static str },
    /// The field must contain at least `min` characters.
    MinLength { min: usize, message: &'static str },
    /// The field must look like an email address. Fails on empty input,
    /// so it doubles as a required check.
    EmailShape { message: &'static str },
}

impl Rule {
    fn check(&self, value: &str) -> Option<&'static str> {
        match self {
            Rule::Required { message } => value.is_empty().then_some(*message),
            Rule::MinLength { min, message } => {
                (value.chars().count() < *min).then_some(*message)
            }
            Rule::EmailShape { message } => (!is_email_shaped(value)).then_some(*message),
        }
    }
}

/// One named field and its ordered rules. An empty rule list makes the
/// field optional and unconstrained.
#[derive(Debug, Clone)]
pub struct FieldSchema {
    pub name: &'static str,
    pub rules: Vec<Rule>,
}

impl FieldSchema {
    pub fn new(name: &'static str, rules: Vec<Rule>) -> Self {
        Self { name, rules }
    }

    pub fn optional(name: &'static str) -> Self {
        Self::new(name, Vec::new())
    }
}

/// A rule whose truth depends on two fields: `field` must equal `must_match`.
/// The error attaches to `field`, the dependent side.
#[derive(Debug, Clone)]
pub struct CrossFieldRule {
    pub field: &'static str,
    pub must_match: &'static str,
    pub message: &'static str,
}

/// The full declarative schema of one form.
#[derive(Debug, Clone)]
pub struct FormSchema {
    pub fields: Vec<FieldSchema>,
    pub cross_field: Vec<CrossFieldRule>,
}

impl FormSchema {
    pub fn new(fields: Vec<FieldSchema>) -> Self {
        Self {
            fields,
            cross_field: Vec::new(),
        }
    }

    pub fn with_cross_field(mut self, rule: CrossFieldRule) -> Self {
        self.cross_field.push(rule);
        self
    }

    /// Validates a `(field name, value)` snapshot of the form.
    ///
    /// Fields missing from `values` are treated as empty.
    pub fn validate(&self, values: &[(&'static str, &str)]) -> FieldErrors {
        let value_of = |name: &str| {
            values
                .iter()
                .find(|(field, _)| *field == name)
                .map(|(_, value)| *value)
                .unwrap_or("")
        };

        let mut errors = FieldErrors::new();
        for field in &self.fields {
            let value = value_of(field.name);
            if let Some(message) = field.rules.iter().find_map(|rule| rule.check(value)) {
                errors.insert(field.name, message);
            }
        }

        // Cross-field rules only fire on an otherwise clean form.
        if errors.is_empty() {
            for rule in &self.cross_field {
                if value_of(rule.field) != value_of(rule.must_match) {
                    errors.insert(rule.field, rule.message);
                }
            }
        }

        errors
    }
}

/// Minimal email shape check: one `@`, non-empty local part, and a domain
/// with at least one dot separating non-empty labels. No whitespace.
fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> FormSchema {
        FormSchema::new(vec![
            FieldSchema::new(
                "name",
                vec![
                    Rule::Required { message: "Name is required" },
                    Rule::MinLength { min: 2, message: "Name is too short" },
                ],
            ),
            FieldSchema::new(
                "email",
                vec![Rule::EmailShape { message: "Please enter a valid email address" }],
            ),
            FieldSchema::optional("note"),
        ])
    }

    #[test]
    fn first_declared_failing_rule_wins() {
        let errors = schema().validate(&[("name", ""), ("email", "a@b.co")]);
        // Empty input fails both rules on "name"; only the first reports.
        assert_eq!(errors.get("name"), Some(&"Name is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn missing_fields_are_treated_as_empty() {
        let errors = schema().validate(&[("email", "a@b.co")]);
        assert_eq!(errors.get("name"), Some(&"Name is required"));
    }

    #[test]
    fn optional_fields_never_error() {
        let errors = schema().validate(&[("name", "Jo"), ("email", "a@b.co"), ("note", "")]);
        assert!(errors.is_empty());
    }

    #[test]
    fn validation_is_idempotent() {
        let values = [("name", "J"), ("email", "not-an-email")];
        let schema = schema();
        assert_eq!(schema.validate(&values), schema.validate(&values));
    }

    #[test]
    fn cross_field_waits_for_clean_per_field_pass() {
        let schema = FormSchema::new(vec![
            FieldSchema::new(
                "password",
                vec![Rule::MinLength { min: 8, message: "Too short" }],
            ),
            FieldSchema::new(
                "confirmPassword",
                vec![Rule::MinLength { min: 8, message: "Please confirm" }],
            ),
        ])
        .with_cross_field(CrossFieldRule {
            field: "confirmPassword",
            must_match: "password",
            message: "Passwords don't match",
        });

        // Per-field failure suppresses the cross-field check entirely.
        let errors = schema.validate(&[("password", "short"), ("confirmPassword", "different1")]);
        assert_eq!(errors.get("password"), Some(&"Too short"));
        assert_eq!(errors.get("confirmPassword"), None);

        // Clean per-field pass lets the mismatch surface, on the dependent field.
        let errors = schema.validate(&[("password", "abcdefgh"), ("confirmPassword", "abcdefgi")]);
        assert_eq!(errors.get("confirmPassword"), Some(&"Passwords don't match"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn email_shape_acceptance() {
        assert!(is_email_shaped("parent@example.com"));
        assert!(is_email_shaped("a@b.co"));
        assert!(!is_email_shaped(""));
        assert!(!is_email_shaped("plainaddress"));
        assert!(!is_email_shaped("@example.com"));
        assert!(!is_email_shaped("user@"));
        assert!(!is_email_shaped("user@domain"));
        assert!(!is_email_shaped("user@.com"));
        assert!(!is_email_shaped("user@domain."));
        assert!(!is_email_shaped("user name@example.com"));
        assert!(!is_email_shaped("user@b@c.com"));
    }
}
