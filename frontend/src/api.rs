#[cfg(not(feature = "mock"))]
use gloo_net::http::{Request, RequestBuilder};
#[cfg(not(feature = "mock"))]
use js_sys::Date;
#[cfg(not(feature = "mock"))]
use serde::Deserialize;

use portfolio_shared::{DashboardStats, OngoingProject, Project, Review, SectionStatus};

#[cfg(not(feature = "mock"))]
use crate::auth;

// API base URL - read from the environment at compile time, defaulting to the
// local development backend.
#[cfg(not(feature = "mock"))]
pub const API_BASE: &str = match option_env!("PORTFOLIO_API_BASE") {
    Some(url) => url,
    None => "http://localhost:3000/api",
};

/// Header carrying the admin token on gated calls. Must match the backend.
#[cfg(not(feature = "mock"))]
const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

#[cfg(not(feature = "mock"))]
#[derive(Debug, Deserialize)]
struct ProjectListResponse {
    projects: Vec<Project>,
    #[allow(dead_code, reason = "total mirrors the list length")]
    total: usize,
}

#[cfg(not(feature = "mock"))]
#[derive(Debug, Deserialize)]
struct OngoingProjectListResponse {
    projects: Vec<OngoingProject>,
    #[allow(dead_code, reason = "total mirrors the list length")]
    total: usize,
}

#[cfg(not(feature = "mock"))]
#[derive(Debug, Deserialize)]
struct ReviewListResponse {
    reviews: Vec<Review>,
    #[allow(dead_code, reason = "total mirrors the list length")]
    total: usize,
}

// In-process stores for `--features mock`: every browser tab owns its own
// collections, exactly like the mock layer the admin screens were built
// against. The simulated store latency still applies.
#[cfg(feature = "mock")]
mod mock {
    use portfolio_shared::{seed, OngoingProject, Project, ResourceStore, Review};

    thread_local! {
        static PROJECTS: ResourceStore<Project> =
            ResourceStore::new(seed::seed_projects());
        static ONGOING: ResourceStore<OngoingProject> =
            ResourceStore::new(seed::seed_ongoing_projects());
        static REVIEWS: ResourceStore<Review> =
            ResourceStore::new(seed::seed_reviews());
    }

    pub fn projects() -> ResourceStore<Project> {
        PROJECTS.with(Clone::clone)
    }

    pub fn ongoing_projects() -> ResourceStore<OngoingProject> {
        ONGOING.with(Clone::clone)
    }

    pub fn reviews() -> ResourceStore<Review> {
        REVIEWS.with(Clone::clone)
    }
}

#[cfg(not(feature = "mock"))]
fn with_admin_token(builder: RequestBuilder) -> RequestBuilder {
    match auth::stored_token() {
        Some(token) => builder.header(ADMIN_TOKEN_HEADER, &token),
        None => builder,
    }
}

// ---------- projects ----------

pub async fn fetch_projects() -> Result<Vec<Project>, String> {
    #[cfg(feature = "mock")]
    {
        return Ok(mock::projects().fetch_all().await);
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/projects?_ts={}", API_BASE, Date::now() as u64);
        let response = Request::get(&url)
            .header("Cache-Control", "no-cache, no-store, max-age=0")
            .send()
            .await
            .map_err(|e| format!("Network error: {:?}", e))?;

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        let list: ProjectListResponse = response
            .json()
            .await
            .map_err(|e| format!("Parse error: {:?}", e))?;
        Ok(list.projects)
    }
}

pub async fn create_project(draft: Project) -> Result<Project, String> {
    #[cfg(feature = "mock")]
    {
        return mock::projects()
            .create(draft)
            .await
            .map_err(|e| e.to_string());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/admin/projects", API_BASE);
        post_json(&url, &draft).await
    }
}

pub async fn update_project(project: Project) -> Result<Project, String> {
    #[cfg(feature = "mock")]
    {
        return mock::projects()
            .update(project)
            .await
            .map_err(|e| e.to_string());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/admin/projects", API_BASE);
        put_json(&url, &project).await
    }
}

pub async fn delete_project(id: u32) -> Result<(), String> {
    #[cfg(feature = "mock")]
    {
        return mock::projects().remove(id).await.map_err(|e| e.to_string());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/admin/projects/{}", API_BASE, id);
        delete_entity(&url).await
    }
}

// ---------- ongoing projects ----------

pub async fn fetch_ongoing_projects() -> Result<Vec<OngoingProject>, String> {
    #[cfg(feature = "mock")]
    {
        return Ok(mock::ongoing_projects().fetch_all().await);
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/ongoing-projects?_ts={}", API_BASE, Date::now() as u64);
        let response = Request::get(&url)
            .header("Cache-Control", "no-cache, no-store, max-age=0")
            .send()
            .await
            .map_err(|e| format!("Network error: {:?}", e))?;

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        let list: OngoingProjectListResponse = response
            .json()
            .await
            .map_err(|e| format!("Parse error: {:?}", e))?;
        Ok(list.projects)
    }
}

pub async fn create_ongoing_project(draft: OngoingProject) -> Result<OngoingProject, String> {
    #[cfg(feature = "mock")]
    {
        return mock::ongoing_projects()
            .create(draft)
            .await
            .map_err(|e| e.to_string());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/admin/ongoing-projects", API_BASE);
        post_json(&url, &draft).await
    }
}

pub async fn update_ongoing_project(project: OngoingProject) -> Result<OngoingProject, String> {
    #[cfg(feature = "mock")]
    {
        return mock::ongoing_projects()
            .update(project)
            .await
            .map_err(|e| e.to_string());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/admin/ongoing-projects", API_BASE);
        put_json(&url, &project).await
    }
}

pub async fn delete_ongoing_project(id: u32) -> Result<(), String> {
    #[cfg(feature = "mock")]
    {
        return mock::ongoing_projects()
            .remove(id)
            .await
            .map_err(|e| e.to_string());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/admin/ongoing-projects/{}", API_BASE, id);
        delete_entity(&url).await
    }
}

// ---------- reviews ----------

pub async fn fetch_reviews() -> Result<Vec<Review>, String> {
    #[cfg(feature = "mock")]
    {
        return Ok(mock::reviews().fetch_all().await);
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/reviews?_ts={}", API_BASE, Date::now() as u64);
        let response = Request::get(&url)
            .header("Cache-Control", "no-cache, no-store, max-age=0")
            .send()
            .await
            .map_err(|e| format!("Network error: {:?}", e))?;

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        let list: ReviewListResponse = response
            .json()
            .await
            .map_err(|e| format!("Parse error: {:?}", e))?;
        Ok(list.reviews)
    }
}

pub async fn create_review(draft: Review) -> Result<Review, String> {
    #[cfg(feature = "mock")]
    {
        return mock::reviews().create(draft).await.map_err(|e| e.to_string());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/admin/reviews", API_BASE);
        post_json(&url, &draft).await
    }
}

pub async fn update_review(review: Review) -> Result<Review, String> {
    #[cfg(feature = "mock")]
    {
        return mock::reviews()
            .update(review)
            .await
            .map_err(|e| e.to_string());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/admin/reviews", API_BASE);
        put_json(&url, &review).await
    }
}

pub async fn delete_review(id: u32) -> Result<(), String> {
    #[cfg(feature = "mock")]
    {
        return mock::reviews().remove(id).await.map_err(|e| e.to_string());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/admin/reviews/{}", API_BASE, id);
        delete_entity(&url).await
    }
}

// ---------- auth + dashboard ----------

/// Verify a candidate admin token. `Ok(false)` means the token was rejected;
/// `Err` means the check itself could not be performed.
pub async fn check_auth(token: &str) -> Result<bool, String> {
    #[cfg(feature = "mock")]
    {
        // The mock accepts any non-empty token.
        return Ok(!token.trim().is_empty());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/admin/auth/check", API_BASE);
        let response = Request::get(&url)
            .header(ADMIN_TOKEN_HEADER, token)
            .send()
            .await
            .map_err(|e| format!("Network error: {:?}", e))?;

        match response.status() {
            204 => Ok(true),
            401 => Ok(false),
            status => Err(format!("HTTP error: {}", status)),
        }
    }
}

pub async fn fetch_dashboard_stats() -> Result<DashboardStats, String> {
    #[cfg(feature = "mock")]
    {
        let reviews = mock::reviews().fetch_all().await;
        return Ok(DashboardStats {
            total_projects: mock::projects().count(),
            total_ongoing: mock::ongoing_projects().count(),
            total_reviews: reviews.len(),
            total_featured: reviews.iter().filter(|r| r.featured).count(),
        });
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/admin/stats", API_BASE);
        let response = with_admin_token(Request::get(&url))
            .send()
            .await
            .map_err(|e| format!("Network error: {:?}", e))?;

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        response
            .json()
            .await
            .map_err(|e| format!("Parse error: {:?}", e))
    }
}

pub async fn fetch_section_status(section_id: &str) -> Result<SectionStatus, String> {
    #[cfg(feature = "mock")]
    {
        let count = match section_id {
            "projects" => mock::projects().count(),
            "ongoing-projects" => mock::ongoing_projects().count(),
            "reviews" => mock::reviews().count(),
            "featured-work" => {
                let reviews = mock::reviews().fetch_all().await;
                return Ok(SectionStatus::from_count(
                    reviews.iter().filter(|r| r.featured).count(),
                    3,
                ));
            },
            _ => return Ok(SectionStatus::empty()),
        };
        let target = match section_id {
            "ongoing-projects" => 2,
            _ => 4,
        };
        return Ok(SectionStatus::from_count(count, target));
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/sections/{}/status", API_BASE, section_id);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {:?}", e))?;

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        response
            .json()
            .await
            .map_err(|e| format!("Parse error: {:?}", e))
    }
}

// ---------- request helpers ----------

#[cfg(not(feature = "mock"))]
async fn post_json<T>(url: &str, body: &T) -> Result<T, String>
where
    T: serde::Serialize + serde::de::DeserializeOwned,
{
    let response = with_admin_token(Request::post(url))
        .json(body)
        .map_err(|e| format!("Serialize error: {:?}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {:?}", e))
}

#[cfg(not(feature = "mock"))]
async fn put_json<T>(url: &str, body: &T) -> Result<T, String>
where
    T: serde::Serialize + serde::de::DeserializeOwned,
{
    let response = with_admin_token(Request::put(url))
        .json(body)
        .map_err(|e| format!("Serialize error: {:?}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {:?}", e))
}

#[cfg(not(feature = "mock"))]
async fn delete_entity(url: &str) -> Result<(), String> {
    let response = with_admin_token(Request::delete(url))
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    Ok(())
}
