//! The admission application draft and its schema.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{FieldErrors, FieldSchema, FormSchema, Rule};

/// One in-progress admission application. All fields are free text as the
/// applicant typed them; [`AdmissionApplication::validate`] is the only
/// gate between a draft and a submission.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdmissionApplication {
    // Student information
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub gender: String,
    pub nationality: String,

    // Contact information
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub country: String,

    // Parent/guardian information
    pub parent_name: String,
    pub parent_email: String,
    pub parent_phone: String,
    pub parent_occupation: String,

    // Academic information
    pub previous_school: String,
    pub grade_applying: String,
    pub previous_gpa: String,

    // Additional information
    pub extracurricular: String,
    pub special_needs: String,
    pub motivation: String,
}

static SCHEMA: Lazy<FormSchema> = Lazy::new(|| {
    FormSchema::new(vec![
        FieldSchema::new(
            "firstName",
            vec![Rule::MinLength { min: 2, message: "First name must be at least 2 characters" }],
        ),
        FieldSchema::new(
            "lastName",
            vec![Rule::MinLength { min: 2, message: "Last name must be at least 2 characters" }],
        ),
        FieldSchema::new(
            "dateOfBirth",
            vec![Rule::Required { message: "Date of birth is required" }],
        ),
        FieldSchema::new("gender", vec![Rule::Required { message: "Please select gender" }]),
        FieldSchema::new(
            "nationality",
            vec![Rule::MinLength { min: 2, message: "Nationality is required" }],
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
            "address",
            vec![Rule::MinLength { min: 10, message: "Please enter complete address" }],
        ),
        FieldSchema::new("city", vec![Rule::MinLength { min: 2, message: "City is required" }]),
        FieldSchema::new(
            "country",
            vec![Rule::MinLength { min: 2, message: "Country is required" }],
        ),
        FieldSchema::new(
            "parentName",
            vec![Rule::MinLength { min: 2, message: "Parent/Guardian name is required" }],
        ),
        FieldSchema::new(
            "parentEmail",
            vec![Rule::EmailShape { message: "Please enter a valid parent email" }],
        ),
        FieldSchema::new(
            "parentPhone",
            vec![Rule::MinLength { min: 10, message: "Please enter valid parent phone number" }],
        ),
        FieldSchema::new(
            "parentOccupation",
            vec![Rule::MinLength { min: 2, message: "Parent occupation is required" }],
        ),
        FieldSchema::new(
            "previousSchool",
            vec![Rule::MinLength { min: 2, message: "Previous school name is required" }],
        ),
        FieldSchema::new(
            "gradeApplying",
            vec![Rule::Required { message: "Please select grade applying for" }],
        ),
        FieldSchema::optional("previousGPA"),
        FieldSchema::optional("extracurricular"),
        FieldSchema::optional("specialNeeds"),
        FieldSchema::new(
            "motivation",
            vec![Rule::MinLength {
                min: 50,
                message: "Please provide at least 50 characters explaining your motivation",
            }],
        ),
    ])
});

impl AdmissionApplication {
    pub fn schema() -> &'static FormSchema {
        &SCHEMA
    }

    fn values(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("dateOfBirth", &self.date_of_birth),
            ("gender", &self.gender),
            ("nationality", &self.nationality),
            ("email", &self.email),
            ("phone", &self.phone),
            ("address", &self.address),
            ("city", &self.city),
            ("country", &self.country),
            ("parentName", &self.parent_name),
            ("parentEmail", &self.parent_email),
            ("parentPhone", &self.parent_phone),
            ("parentOccupation", &self.parent_occupation),
            ("previousSchool", &self.previous_school),
            ("gradeApplying", &self.grade_applying),
            ("previousGPA", &self.previous_gpa),
            ("extracurricular", &self.extracurricular),
            ("specialNeeds", &self.special_needs),
            ("motivation", &self.motivation),
        ]
    }

    /// Current error map; empty when the draft would be accepted.
    pub fn field_errors(&self) -> FieldErrors {
        Self::schema().validate(&self.values())
    }

    pub fn is_valid(&self) -> bool {
        self.field_errors().is_empty()
    }

    /// Consumes the draft: either the validated application or its errors.
    pub fn validate(self) -> Result<Self, FieldErrors> {
        let errors = self.field_errors();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(errors)
        }
    }
}

/// Grade levels offered by the admission form, as `(value, label)` pairs.
pub const GRADE_OPTIONS: [(&str, &str); 12] = [
    ("grade-1", "Grade 1"),
    ("grade-2", "Grade 2"),
    ("grade-3", "Grade 3"),
    ("grade-4", "Grade 4"),
    ("grade-5", "Grade 5"),
    ("grade-6", "Grade 6"),
    ("grade-7", "Grade 7"),
    ("grade-8", "Grade 8"),
    ("grade-9", "Grade 9"),
    ("grade-10", "Grade 10"),
    ("grade-11", "Grade 11"),
    ("grade-12", "Grade 12"),
];

/// Gender choices offered by the admission form.
pub const GENDER_OPTIONS: [(&str, &str); 3] =
    [("male", "Male"), ("female", "Female"), ("other", "Other")];

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_application() -> AdmissionApplication {
        AdmissionApplication {
            first_name: "Hassaan".into(),
            last_name: "Khan".into(),
            date_of_birth: "2007-03-15".into(),
            gender: "male".into(),
            nationality: "Pakistani".into(),
            email: "hassaan@example.com".into(),
            phone: "+92 300 1234567".into(),
            address: "House 12, Street 4, Sector G-10/4, Islamabad".into(),
            city: "Islamabad".into(),
            country: "Pakistan".into(),
            parent_name: "Ahmed Khan".into(),
            parent_email: "ahmed.khan@example.com".into(),
            parent_phone: "+92 300 7654321".into(),
            parent_occupation: "Engineer".into(),
            previous_school: "City Grammar School".into(),
            grade_applying: "grade-11".into(),
            previous_gpa: String::new(),
            extracurricular: String::new(),
            special_needs: String::new(),
            motivation: "I want to join because of the strong science programme \
                         and the robotics club I have followed for years."
                .into(),
        }
    }

    #[test]
    fn complete_application_passes() {
        let draft = complete_application();
        assert!(draft.field_errors().is_empty());
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn short_first_name_flags_only_that_field() {
        let mut draft = complete_application();
        draft.first_name = "H".into();
        let errors = draft.field_errors();
        assert_eq!(
            errors.get("firstName"),
            Some(&"First name must be at least 2 characters")
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn optional_fields_accept_any_content() {
        let mut draft = complete_application();
        draft.previous_gpa = "3.9".into();
        draft.extracurricular = "Robotics, football".into();
        draft.special_needs = "None".into();
        assert!(draft.is_valid());
    }

    #[test]
    fn motivation_must_reach_fifty_characters() {
        let mut draft = complete_application();
        draft.motivation = "Too short to count".into();
        let errors = draft.field_errors();
        assert_eq!(
            errors.get("motivation"),
            Some(&"Please provide at least 50 characters explaining your motivation")
        );
    }

    #[test]
    fn empty_draft_reports_every_required_field() {
        let errors = AdmissionApplication::default().field_errors();
        // 20 fields, 3 of them optional.
        assert_eq!(errors.len(), 17);
        assert!(!errors.contains_key("previousGPA"));
        assert!(!errors.contains_key("extracurricular"));
        assert!(!errors.contains_key("specialNeeds"));
    }

    #[test]
    fn validate_is_idempotent() {
        let mut draft = complete_application();
        draft.email = "broken".into();
        assert_eq!(draft.field_errors(), draft.field_errors());
    }
}
