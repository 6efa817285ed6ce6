//! Free-text filtering for the admin list views. Case-insensitive substring
//! match over a resource-specific subset of fields, recomputed per keystroke;
//! the underlying collection is never touched.

use portfolio_shared::{OngoingProject, Project, Review};

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

pub fn project_matches(project: &Project, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    contains(&project.title, &query)
        || contains(&project.description, &query)
        || project.tags.iter().any(|tag| contains(tag, &query))
}

pub fn ongoing_project_matches(project: &OngoingProject, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    contains(&project.title, &query)
        || contains(&project.description, &query)
        || project.tags.iter().any(|tag| contains(tag, &query))
}

pub fn review_matches(review: &Review, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    contains(&review.name, &query)
        || contains(&review.role, &query)
        || review
            .company
            .as_deref()
            .is_some_and(|company| contains(company, &query))
        || contains(&review.text, &query)
}

#[cfg(test)]
mod tests {
    use portfolio_shared::seed;

    use super::*;

    #[test]
    fn empty_query_matches_everything() {
        let projects = seed::seed_projects();
        assert!(projects.iter().all(|p| project_matches(p, "")));
        assert!(projects.iter().all(|p| project_matches(p, "   ")));
    }

    #[test]
    fn project_query_is_case_insensitive_and_covers_tags() {
        let projects = seed::seed_projects();
        let hits: Vec<_> = projects
            .iter()
            .filter(|p| project_matches(p, "BLOCKCHAIN"))
            .collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Food Supply Chain Tracker");
    }

    #[test]
    fn unmatched_query_yields_an_empty_view_without_touching_the_collection() {
        let projects = seed::seed_projects();
        let filtered: Vec<_> = projects
            .iter()
            .filter(|p| project_matches(p, "no such project"))
            .collect();
        assert!(filtered.is_empty());
        assert_eq!(projects.len(), 4);
    }

    #[test]
    fn review_query_covers_name_role_company_and_text() {
        let reviews = seed::seed_reviews();
        assert!(reviews.iter().any(|r| review_matches(r, "sarah")));
        assert!(reviews.iter().any(|r| review_matches(r, "farmer")));
        assert!(reviews.iter().any(|r| review_matches(r, "un environment")));
        assert!(reviews.iter().any(|r| review_matches(r, "dashboard")));
        assert!(!reviews.iter().any(|r| review_matches(r, "zzzz")));
    }

    #[test]
    fn ongoing_query_matches_title_and_tags() {
        let ongoing = seed::seed_ongoing_projects();
        assert!(ongoing.iter().any(|p| ongoing_project_matches(p, "ngo")));
        assert!(ongoing
            .iter()
            .any(|p| ongoing_project_matches(p, "cashflow")));
    }
}
