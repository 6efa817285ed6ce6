use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::Json,
};
use portfolio_shared::{
    DashboardStats, OngoingProject, Project, Review, SectionStatus, StoreError,
};
use serde::Serialize;

use crate::state::AppState;

/// Header carrying the admin token on gated routes.
pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub projects: Vec<Project>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct OngoingProjectListResponse {
    pub projects: Vec<OngoingProject>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct ReviewListResponse {
    pub reviews: Vec<Review>,
    pub total: usize,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

// ---------- public read surface ----------

pub async fn list_projects(State(state): State<AppState>) -> Json<ProjectListResponse> {
    let projects = state.projects().fetch_all().await;
    let total = projects.len();
    Json(ProjectListResponse { projects, total })
}

pub async fn list_ongoing_projects(
    State(state): State<AppState>,
) -> Json<OngoingProjectListResponse> {
    let projects = state.ongoing_projects().fetch_all().await;
    let total = projects.len();
    Json(OngoingProjectListResponse { projects, total })
}

pub async fn list_reviews(State(state): State<AppState>) -> Json<ReviewListResponse> {
    let reviews = state.reviews().fetch_all().await;
    let total = reviews.len();
    Json(ReviewListResponse { reviews, total })
}

pub async fn section_status(
    State(state): State<AppState>,
    Path(section_id): Path<String>,
) -> Json<SectionStatus> {
    Json(state.section_status(&section_id))
}

// ---------- admin: auth + dashboard ----------

pub async fn auth_check(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, HandlerError> {
    require_admin(&state, &headers)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn dashboard_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<DashboardStats>, HandlerError> {
    require_admin(&state, &headers)?;
    Ok(Json(state.dashboard_stats()))
}

// ---------- admin: projects ----------

pub async fn create_project(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(draft): Json<Project>,
) -> Result<Json<Project>, HandlerError> {
    require_admin(&state, &headers)?;
    let stored = state
        .projects()
        .create(draft)
        .await
        .map_err(store_error)?;
    Ok(Json(stored))
}

pub async fn update_project(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(project): Json<Project>,
) -> Result<Json<Project>, HandlerError> {
    require_admin(&state, &headers)?;
    let stored = state
        .projects()
        .update(project)
        .await
        .map_err(store_error)?;
    Ok(Json(stored))
}

pub async fn delete_project(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<u32>,
) -> Result<StatusCode, HandlerError> {
    require_admin(&state, &headers)?;
    state.projects().remove(id).await.map_err(store_error)?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------- admin: ongoing projects ----------

pub async fn create_ongoing_project(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(draft): Json<OngoingProject>,
) -> Result<Json<OngoingProject>, HandlerError> {
    require_admin(&state, &headers)?;
    let stored = state
        .ongoing_projects()
        .create(draft)
        .await
        .map_err(store_error)?;
    Ok(Json(stored))
}

pub async fn update_ongoing_project(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(project): Json<OngoingProject>,
) -> Result<Json<OngoingProject>, HandlerError> {
    require_admin(&state, &headers)?;
    let stored = state
        .ongoing_projects()
        .update(project)
        .await
        .map_err(store_error)?;
    Ok(Json(stored))
}

pub async fn delete_ongoing_project(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<u32>,
) -> Result<StatusCode, HandlerError> {
    require_admin(&state, &headers)?;
    state
        .ongoing_projects()
        .remove(id)
        .await
        .map_err(store_error)?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------- admin: reviews ----------

pub async fn create_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(draft): Json<Review>,
) -> Result<Json<Review>, HandlerError> {
    require_admin(&state, &headers)?;
    let stored = state.reviews().create(draft).await.map_err(store_error)?;
    Ok(Json(stored))
}

pub async fn update_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(review): Json<Review>,
) -> Result<Json<Review>, HandlerError> {
    require_admin(&state, &headers)?;
    let stored = state.reviews().update(review).await.map_err(store_error)?;
    Ok(Json(stored))
}

pub async fn delete_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<u32>,
) -> Result<StatusCode, HandlerError> {
    require_admin(&state, &headers)?;
    state.reviews().remove(id).await.map_err(store_error)?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------- helpers ----------

fn require_admin(state: &AppState, headers: &HeaderMap) -> Result<(), HandlerError> {
    let token = headers
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    if state.is_admin_token(token) {
        return Ok(());
    }
    tracing::warn!("rejected admin request with missing or bad token");
    Err((
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse {
            error: "Missing or invalid admin token".to_string(),
            code: 401,
        }),
    ))
}

fn store_error(err: StoreError) -> HandlerError {
    let status = match err {
        StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
        StoreError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
            code: status.as_u16(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use portfolio_shared::{seed, Latency, Project, Review};
    use tower::ServiceExt;

    use super::*;
    use crate::routes::create_router;

    const TOKEN: &str = "test-token";

    fn test_router() -> Router {
        create_router(AppState::with_latency(TOKEN.to_string(), Latency::none()))
    }

    fn json_request(method: &str, uri: &str, token: Option<&str>, body: Body) -> Request<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        if let Some(token) = token {
            builder = builder.header(ADMIN_TOKEN_HEADER, token);
        }
        builder.body(body).expect("request")
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("parse body")
    }

    #[tokio::test]
    async fn public_project_list_returns_the_seed() {
        let response = test_router()
            .oneshot(json_request("GET", "/api/projects", None, Body::empty()))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = body_json(response).await;
        assert_eq!(body["total"], 4);
        assert_eq!(body["projects"][0]["title"], "Kenyan Rangelands Restoration");
    }

    #[tokio::test]
    async fn admin_create_requires_a_token() {
        let draft = serde_json::to_vec(&seed::seed_projects()[0]).expect("serialize");
        let response = test_router()
            .oneshot(json_request(
                "POST",
                "/api/admin/projects",
                None,
                Body::from(draft),
            ))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn admin_create_assigns_the_next_id() {
        let router = test_router();
        let mut draft = seed::seed_projects()[0].clone();
        draft.id = 0;
        draft.title = "Brand New Project".to_string();

        let response = router
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/admin/projects",
                Some(TOKEN),
                Body::from(serde_json::to_vec(&draft).expect("serialize")),
            ))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let stored: Project = body_json(response).await;
        assert_eq!(stored.id, 5);

        let response = router
            .oneshot(json_request("GET", "/api/projects", None, Body::empty()))
            .await
            .expect("response");
        let body: serde_json::Value = body_json(response).await;
        assert_eq!(body["total"], 5);
    }

    #[tokio::test]
    async fn updating_an_unknown_id_is_a_404() {
        let mut ghost = seed::seed_projects()[0].clone();
        ghost.id = 999;
        let response = test_router()
            .oneshot(json_request(
                "PUT",
                "/api/admin/projects",
                Some(TOKEN),
                Body::from(serde_json::to_vec(&ghost).expect("serialize")),
            ))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn invalid_rating_is_rejected_at_the_store_boundary() {
        let mut review: Review = seed::seed_reviews()[0].clone();
        review.id = 0;
        review.rating = 6;
        let response = test_router()
            .oneshot(json_request(
                "POST",
                "/api/admin/reviews",
                Some(TOKEN),
                Body::from(serde_json::to_vec(&review).expect("serialize")),
            ))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn deleting_a_review_shrinks_the_collection() {
        let router = test_router();
        let response = router
            .clone()
            .oneshot(json_request(
                "DELETE",
                "/api/admin/reviews/3",
                Some(TOKEN),
                Body::empty(),
            ))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = router
            .oneshot(json_request("GET", "/api/reviews", None, Body::empty()))
            .await
            .expect("response");
        let body: serde_json::Value = body_json(response).await;
        assert_eq!(body["total"], 5);
    }

    #[tokio::test]
    async fn auth_check_distinguishes_good_and_bad_tokens() {
        let router = test_router();
        let ok = router
            .clone()
            .oneshot(json_request(
                "GET",
                "/api/admin/auth/check",
                Some(TOKEN),
                Body::empty(),
            ))
            .await
            .expect("response");
        assert_eq!(ok.status(), StatusCode::NO_CONTENT);

        let bad = router
            .oneshot(json_request(
                "GET",
                "/api/admin/auth/check",
                Some("wrong"),
                Body::empty(),
            ))
            .await
            .expect("response");
        assert_eq!(bad.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn dashboard_stats_count_the_seed_collections() {
        let response = test_router()
            .oneshot(json_request(
                "GET",
                "/api/admin/stats",
                Some(TOKEN),
                Body::empty(),
            ))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let stats: DashboardStats = body_json(response).await;
        assert_eq!(stats.total_projects, 4);
        assert_eq!(stats.total_ongoing, 2);
        assert_eq!(stats.total_reviews, 6);
        assert_eq!(stats.total_featured, 3);
    }
}
