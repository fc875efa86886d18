//! Credit-system content: earning categories, program benefits, and the
//! recognition milestone ladder.

use once_cell::sync::Lazy;
use serde::Serialize;

/// One way students earn credits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreditCategory {
    pub title: &'static str,
    pub description: &'static str,
    pub points: &'static str,
    pub activities: &'static [&'static str],
    pub icon: &'static str,
}

/// One benefit of participating in the program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreditBenefit {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// One recognition level, reached at `credits` accumulated points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreditMilestone {
    pub credits: u32,
    pub title: &'static str,
    pub description: &'static str,
}

static CATEGORIES: Lazy<Vec<CreditCategory>> = Lazy::new(|| {
    vec![
        CreditCategory {
            title: "Academic Excellence",
            description: "Earn credits for outstanding academic performance and achievements",
            points: "10-50 credits",
            activities: &["High grades", "Academic competitions", "Research projects", "Honor roll"],
            icon: "book-open",
        },
        CreditCategory {
            title: "Community Service",
            description: "Contribute to society and earn credits for volunteer work",
            points: "5-30 credits",
            activities: &[
                "Volunteer hours",
                "Charity events",
                "Community projects",
                "Environmental initiatives",
            ],
            icon: "users",
        },
        CreditCategory {
            title: "Leadership & Activities",
            description: "Develop leadership skills through various school activities",
            points: "15-40 credits",
            activities: &[
                "Student council",
                "Club leadership",
                "Event organization",
                "Peer mentoring",
            ],
            icon: "trophy",
        },
        CreditCategory {
            title: "Special Achievements",
            description: "Recognition for exceptional accomplishments and talents",
            points: "20-100 credits",
            activities: &[
                "Awards & medals",
                "International competitions",
                "Published work",
                "Innovation projects",
            ],
            icon: "star",
        },
    ]
});

static BENEFITS: Lazy<Vec<CreditBenefit>> = Lazy::new(|| {
    vec![
        CreditBenefit {
            title: "University Applications",
            description: "Strengthen college applications with documented achievements",
            icon: "award",
        },
        CreditBenefit {
            title: "Recognition Ceremonies",
            description: "Special recognition at school events and graduation",
            icon: "trophy",
        },
        CreditBenefit {
            title: "Scholarship Opportunities",
            description: "Priority consideration for merit-based scholarships",
            icon: "target",
        },
        CreditBenefit {
            title: "Personal Development",
            description: "Track growth and development throughout your academic journey",
            icon: "trending-up",
        },
    ]
});

// Ascending by threshold.
static MILESTONES: Lazy<Vec<CreditMilestone>> = Lazy::new(|| {
    vec![
        CreditMilestone {
            credits: 100,
            title: "Bronze Level",
            description: "Active participant in school community",
        },
        CreditMilestone {
            credits: 250,
            title: "Silver Level",
            description: "Dedicated contributor to school excellence",
        },
        CreditMilestone {
            credits: 500,
            title: "Gold Level",
            description: "Outstanding leader and role model",
        },
        CreditMilestone {
            credits: 1000,
            title: "Platinum Level",
            description: "Exceptional achiever and community leader",
        },
    ]
});

pub fn credit_categories() -> &'static [CreditCategory] {
    &CATEGORIES
}

pub fn credit_benefits() -> &'static [CreditBenefit] {
    &BENEFITS
}

/// Milestones, ascending by credit threshold.
pub fn credit_milestones() -> &'static [CreditMilestone] {
    &MILESTONES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn milestones_ascend_by_threshold() {
        let milestones = credit_milestones();
        assert_eq!(milestones.len(), 4);
        assert!(milestones.windows(2).all(|pair| pair[0].credits < pair[1].credits));
    }

    #[test]
    fn ladder_runs_bronze_to_platinum() {
        let milestones = credit_milestones();
        assert_eq!(milestones.first().map(|m| m.title), Some("Bronze Level"));
        assert_eq!(milestones.last().map(|m| m.title), Some("Platinum Level"));
    }
}
