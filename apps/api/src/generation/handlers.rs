//! Axum route handlers for the Generation API.

use anyhow::anyhow;
use axum::{body::Bytes, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::generation::generator::generate_post;
use crate::generation::platform::Platform;
use crate::generation::tone::Tone;
use crate::models::post::{GeneratedPost, GenerationRequest};

pub const TOPIC_REQUIRED: &str = "Topic is required";

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct PlatformInfo {
    pub id: &'static str,
    pub max_length: usize,
    pub style: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ToneInfo {
    pub id: &'static str,
    pub hashtag_count: usize,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub platforms: Vec<PlatformInfo>,
    pub tones: Vec<ToneInfo>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/generate
///
/// Validates the topic and returns `{platform, content, hashtags}`.
/// The body is parsed as JSON whatever its `Content-Type`. A body that cannot be
/// read as a request, or a truthy topic that is not text, is a generation failure.
pub async fn handle_generate(body: Bytes) -> Result<Json<GeneratedPost>, AppError> {
    let request: GenerationRequest =
        serde_json::from_slice(&body).map_err(|e| anyhow!("unreadable request body: {e}"))?;

    let topic = request
        .present_topic()
        .ok_or_else(|| AppError::Validation(TOPIC_REQUIRED.to_string()))?
        .as_str()
        .ok_or_else(|| anyhow!("topic is not a string"))?;

    let post = generate_post(topic, request.platform.as_deref(), request.tone.as_deref());

    Ok(Json(post))
}

/// GET /api/platforms
///
/// Lists supported platforms and tones in declaration order.
pub async fn handle_catalog() -> Json<CatalogResponse> {
    let platforms = Platform::ALL
        .into_iter()
        .map(|p| {
            let profile = p.profile();
            PlatformInfo {
                id: p.label(),
                max_length: profile.max_length,
                style: profile.style,
            }
        })
        .collect();

    let tones = Tone::ALL
        .into_iter()
        .map(|t| ToneInfo {
            id: t.label(),
            hashtag_count: t.hashtag_count(),
        })
        .collect();

    Json(CatalogResponse { platforms, tones })
}
