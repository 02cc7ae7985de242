//! Content and contact API handlers

use axum::{
    extract::{ConnectInfo, Path, Query, State},
    http::{header, HeaderMap},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;

use super::extract::JsonOrForm;
use super::response::{ApiError, ApiResponse};
use super::ServerState;
use crate::contact::{ClientInfo, NewSubmission, Submission, SubmissionStatus};
use crate::content::{ExperienceEntry, ExpertiseProfile, Profile, Testimonial};
use crate::sections::render_page;

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy", "service": "portfolio-api" }))
}

pub async fn api_info(State(state): State<Arc<ServerState>>) -> Json<Value> {
    let title = state.site.read().await.config.title.clone();
    Json(json!({
        "message": format!("{} API", title),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// The rendered page, always from the current content
pub async fn index(State(state): State<Arc<ServerState>>) -> Html<String> {
    let content = state.content().await;
    let site = state.site.read().await;
    Html(render_page(&site.config, &content))
}

#[derive(Debug, Serialize)]
pub struct ProfileData {
    pub personal: Profile,
}

pub async fn profile(State(state): State<Arc<ServerState>>) -> Json<ApiResponse<ProfileData>> {
    let content = state.content().await;
    Json(ApiResponse::success(
        ProfileData {
            personal: content.profile.clone(),
        },
        "Profile data retrieved successfully",
    ))
}

pub async fn experience(
    State(state): State<Arc<ServerState>>,
) -> Json<ApiResponse<Vec<ExperienceEntry>>> {
    let content = state.content().await;
    Json(ApiResponse::success(
        content.experience.clone(),
        "Experience data retrieved successfully",
    ))
}

pub async fn testimonials(
    State(state): State<Arc<ServerState>>,
) -> Json<ApiResponse<Vec<Testimonial>>> {
    let content = state.content().await;
    Json(ApiResponse::success(
        content.testimonials.clone(),
        "Testimonials retrieved successfully",
    ))
}

pub async fn expertise(
    State(state): State<Arc<ServerState>>,
) -> Json<ApiResponse<ExpertiseProfile>> {
    let content = state.content().await;
    Json(ApiResponse::success(
        content.expertise.clone(),
        "Expertise data retrieved successfully",
    ))
}

#[derive(Debug, Serialize)]
pub struct SubmissionId {
    pub id: String,
}

pub async fn submit_contact(
    State(state): State<Arc<ServerState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    JsonOrForm(form): JsonOrForm<NewSubmission>,
) -> Result<Json<ApiResponse<SubmissionId>>, ApiError> {
    let client = ClientInfo {
        ip: Some(addr.ip().to_string()),
        user_agent: headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    };

    let submission = state.inbox.lock().await.submit(form, client)?;

    Ok(Json(ApiResponse::success(
        SubmissionId { id: submission.id },
        "Thank you for your message! I'll get back to you within 24 hours.",
    )))
}

pub async fn list_contact(State(state): State<Arc<ServerState>>) -> Json<Vec<Submission>> {
    Json(state.inbox.lock().await.list())
}

#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub status: SubmissionStatus,
}

pub async fn update_contact_status(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.inbox.lock().await.update_status(&id, query.status)?;
    Ok(Json(ApiResponse::message("Status updated successfully")))
}
