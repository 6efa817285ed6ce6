use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Portfolio project shown on the public site and managed from the admin panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
    pub github: String,
    pub demo: String,
    pub case_study: CaseStudy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub challenge: String,
    pub solution: String,
    pub outcome: String,
    pub tech_stack: Vec<String>,
}

// Work-in-progress project with progress tracking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OngoingProject {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
    /// Percent complete, 0-100 inclusive.
    pub progress: u8,
    /// ISO date string, YYYY-MM-DD.
    pub start_date: String,
    /// ISO date string, YYYY-MM-DD.
    pub estimated_completion: String,
    pub milestones: Vec<Milestone>,
}

/// Position-ordered checkpoint inside an [`OngoingProject`]. Milestones carry
/// no id of their own; they are addressed by index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub title: String,
    pub completed: bool,
}

impl OngoingProject {
    /// Days until `estimated_completion`, floored at zero. Derived on every
    /// read, never stored. Returns `None` when the date does not parse.
    pub fn days_remaining_from(&self, today: NaiveDate) -> Option<i64> {
        let target = NaiveDate::parse_from_str(&self.estimated_completion, "%Y-%m-%d").ok()?;
        Some((target - today).num_days().max(0))
    }

    pub fn days_remaining(&self) -> Option<i64> {
        self.days_remaining_from(chrono::Local::now().date_naive())
    }

    pub fn completed_milestones(&self) -> usize {
        self.milestones.iter().filter(|m| m.completed).count()
    }
}

// Client review / testimonial
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub company: Option<String>,
    pub image: String,
    /// Star rating, 1-5 inclusive.
    pub rating: u8,
    pub text: String,
    /// Display date, free text (e.g. "March 2025").
    pub date: String,
    /// Featured reviews appear in the curated subset on the public site.
    pub featured: bool,
}

// Aggregate counts for the admin dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_projects: usize,
    pub total_ongoing: usize,
    pub total_reviews: usize,
    pub total_featured: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentState {
    Empty,
    Partial,
    Complete,
}

/// Fill level of one public site section, shown on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionStatus {
    pub has_content: bool,
    pub status: ContentState,
    /// Rough completion percentage, 0-100.
    pub progress: u8,
}

impl SectionStatus {
    pub fn empty() -> Self {
        Self {
            has_content: false,
            status: ContentState::Empty,
            progress: 0,
        }
    }

    /// Grade a collection by how close it is to `target` entries.
    pub fn from_count(count: usize, target: usize) -> Self {
        let target = target.max(1);
        if count == 0 {
            return Self::empty();
        }
        if count >= target {
            return Self {
                has_content: true,
                status: ContentState::Complete,
                progress: 100,
            };
        }
        Self {
            has_content: true,
            status: ContentState::Partial,
            progress: ((count * 100) / target) as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ongoing(estimated_completion: &str) -> OngoingProject {
        OngoingProject {
            id: 1,
            title: "NGO Landing Page".to_string(),
            description: "Responsive site".to_string(),
            image: String::new(),
            tags: vec![],
            progress: 65,
            start_date: "2025-01-15".to_string(),
            estimated_completion: estimated_completion.to_string(),
            milestones: vec![],
        }
    }

    #[test]
    fn days_remaining_counts_up_to_the_target_date() {
        let project = ongoing("2025-04-30");
        let today = NaiveDate::from_ymd_opt(2025, 4, 20).unwrap();
        assert_eq!(project.days_remaining_from(today), Some(10));
    }

    #[test]
    fn days_remaining_floors_at_zero_once_overdue() {
        let project = ongoing("2025-04-30");
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(project.days_remaining_from(today), Some(0));
    }

    #[test]
    fn days_remaining_is_none_for_unparseable_dates() {
        let project = ongoing("soon");
        let today = NaiveDate::from_ymd_opt(2025, 4, 20).unwrap();
        assert_eq!(project.days_remaining_from(today), None);
    }

    #[test]
    fn section_status_grades_by_count() {
        assert_eq!(SectionStatus::from_count(0, 4).status, ContentState::Empty);
        let partial = SectionStatus::from_count(1, 4);
        assert_eq!(partial.status, ContentState::Partial);
        assert_eq!(partial.progress, 25);
        assert_eq!(
            SectionStatus::from_count(6, 4).status,
            ContentState::Complete
        );
    }
}
