//! Admissions-page content: the application timeline, the document
//! checklist, and the scholarship tiers.

use once_cell::sync::Lazy;
use serde::Serialize;

/// One step of the application timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdmissionStep {
    pub title: &'static str,
    pub description: &'static str,
    pub timeline: &'static str,
    pub icon: &'static str,
}

/// One entry of the document checklist. `completed` mirrors the sample
/// checklist state shown on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequirementItem {
    pub text: &'static str,
    pub completed: bool,
}

/// One scholarship tier; `coverage_percent` is the tuition share covered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scholarship {
    pub title: &'static str,
    pub coverage_percent: u8,
    pub description: &'static str,
    pub icon: &'static str,
}

static ADMISSION_STEPS: Lazy<Vec<AdmissionStep>> = Lazy::new(|| {
    vec![
        AdmissionStep {
            title: "Application Form",
            description: "Complete our streamlined online application with intelligent form assistance.",
            timeline: "Day 1",
            icon: "file-text",
        },
        AdmissionStep {
            title: "Schedule Interview",
            description: "Book your personalized interview slot through our smart scheduling system.",
            timeline: "Day 3-5",
            icon: "calendar",
        },
        AdmissionStep {
            title: "Assessment Day",
            description: "Experience our holistic evaluation including academic and personality assessment.",
            timeline: "Day 7-10",
            icon: "users",
        },
        AdmissionStep {
            title: "Decision",
            description: "Receive your admission decision with detailed feedback and next steps.",
            timeline: "Day 14",
            icon: "check-circle",
        },
    ]
});

static REQUIREMENTS: Lazy<Vec<RequirementItem>> = Lazy::new(|| {
    vec![
        RequirementItem { text: "Previous academic transcripts", completed: true },
        RequirementItem { text: "Birth certificate", completed: true },
        RequirementItem { text: "Passport-sized photographs", completed: false },
        RequirementItem { text: "Medical records", completed: false },
        RequirementItem { text: "Character reference letter", completed: false },
        RequirementItem { text: "English proficiency certificate (if applicable)", completed: false },
    ]
});

static SCHOLARSHIPS: Lazy<Vec<Scholarship>> = Lazy::new(|| {
    vec![
        Scholarship {
            title: "Merit Excellence",
            coverage_percent: 50,
            description: "Outstanding academic achievement recognition",
            icon: "award",
        },
        Scholarship {
            title: "Need-Based Support",
            coverage_percent: 40,
            description: "Financial assistance for deserving families",
            icon: "users",
        },
        Scholarship {
            title: "Talent Recognition",
            coverage_percent: 30,
            description: "Special skills in arts, sports, or leadership",
            icon: "target",
        },
    ]
});

/// Timeline steps in application order.
pub fn admission_steps() -> &'static [AdmissionStep] {
    &ADMISSION_STEPS
}

pub fn requirements() -> &'static [RequirementItem] {
    &REQUIREMENTS
}

pub fn scholarships() -> &'static [Scholarship] {
    &SCHOLARSHIPS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeline_starts_on_day_one_and_ends_on_decision() {
        let steps = admission_steps();
        assert_eq!(steps.first().map(|s| s.timeline), Some("Day 1"));
        assert_eq!(steps.last().map(|s| s.title), Some("Decision"));
    }

    #[test]
    fn checklist_has_six_documents() {
        assert_eq!(requirements().len(), 6);
    }
}
