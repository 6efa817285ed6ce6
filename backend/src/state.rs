use portfolio_shared::{
    seed, DashboardStats, Latency, OngoingProject, Project, ResourceStore, Review, SectionStatus,
};

/// Shared application state: the three seeded resource stores plus the admin
/// token. Cloning is cheap; all clones share the same collections.
#[derive(Clone)]
pub struct AppState {
    projects: ResourceStore<Project>,
    ongoing_projects: ResourceStore<OngoingProject>,
    reviews: ResourceStore<Review>,
    admin_token: String,
}

impl AppState {
    pub fn new(admin_token: String) -> Self {
        Self::with_latency(admin_token, Latency::simulated())
    }

    pub fn with_latency(admin_token: String, latency: Latency) -> Self {
        Self {
            projects: ResourceStore::with_latency(seed::seed_projects(), latency),
            ongoing_projects: ResourceStore::with_latency(seed::seed_ongoing_projects(), latency),
            reviews: ResourceStore::with_latency(seed::seed_reviews(), latency),
            admin_token,
        }
    }

    pub fn projects(&self) -> &ResourceStore<Project> {
        &self.projects
    }

    pub fn ongoing_projects(&self) -> &ResourceStore<OngoingProject> {
        &self.ongoing_projects
    }

    pub fn reviews(&self) -> &ResourceStore<Review> {
        &self.reviews
    }

    pub fn is_admin_token(&self, candidate: &str) -> bool {
        !self.admin_token.is_empty() && candidate == self.admin_token
    }

    pub fn dashboard_stats(&self) -> DashboardStats {
        let featured = self
            .reviews
            .snapshot()
            .iter()
            .filter(|r| r.featured)
            .count();
        DashboardStats {
            total_projects: self.projects.count(),
            total_ongoing: self.ongoing_projects.count(),
            total_reviews: self.reviews.count(),
            total_featured: featured,
        }
    }

    /// Fill level of one public section, keyed by the section ids the
    /// frontend uses.
    pub fn section_status(&self, section_id: &str) -> SectionStatus {
        match section_id {
            "projects" => SectionStatus::from_count(self.projects.count(), 4),
            "ongoing-projects" => SectionStatus::from_count(self.ongoing_projects.count(), 2),
            "reviews" => SectionStatus::from_count(self.reviews.count(), 4),
            "featured-work" => {
                let featured = self
                    .reviews
                    .snapshot()
                    .iter()
                    .filter(|r| r.featured)
                    .count();
                SectionStatus::from_count(featured, 3)
            },
            _ => SectionStatus::empty(),
        }
    }
}
