//! Axum route handlers for the workflow stages.
//!
//! Every stage has the same shape: deserialize the request record (serde
//! fills the declared defaults), assemble the stage prompt, make exactly one
//! gateway call, and relay the generated text verbatim. Beyond schema-level
//! type checking there is no validation — empty text fields flow straight
//! into the templates, which render their own placeholders.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::stages::prompts;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

fn default_scope() -> String {
    "최근 5년".to_string()
}

fn default_paper_type() -> String {
    "원저".to_string()
}

fn default_language() -> String {
    "한국어".to_string()
}

fn default_word_count() -> u32 {
    250
}

fn default_index_type() -> String {
    "SCI/SCIE".to_string()
}

#[derive(Debug, Deserialize)]
pub struct TopicRequest {
    pub topic: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub purpose: String,
}

#[derive(Debug, Deserialize)]
pub struct LitReviewRequest {
    pub topic: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default = "default_scope")]
    pub scope: String,
    #[serde(default)]
    pub known_papers: String,
}

#[derive(Debug, Deserialize)]
pub struct StructureRequest {
    pub topic: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default = "default_paper_type")]
    pub paper_type: String,
    #[serde(default)]
    pub methodology: String,
}

#[derive(Debug, Deserialize)]
pub struct IntroRequest {
    pub topic: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Debug, Deserialize)]
pub struct AbstractRequest {
    pub topic: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default = "default_word_count")]
    pub word_count: u32,
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Debug, Deserialize)]
pub struct JournalRequest {
    pub topic: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default = "default_index_type")]
    pub index_type: String,
}

#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub topic: String,
    pub reviewer_comment: String,
    #[serde(default = "default_language")]
    pub language: String,
}

/// Body returned by every stage endpoint on success.
#[derive(Debug, Serialize)]
pub struct StageResponse {
    pub status: &'static str,
    pub result: String,
}

impl StageResponse {
    fn ok(result: String) -> Self {
        Self {
            status: "ok",
            result,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/topic
///
/// Stage 0: N2B analysis of the research topic.
pub async fn handle_topic(
    State(state): State<AppState>,
    Json(request): Json<TopicRequest>,
) -> Result<Json<StageResponse>, AppError> {
    let prompt = prompts::build_topic_prompt(&request);
    let result = state.gateway.generate(&prompt).await?;
    Ok(Json(StageResponse::ok(result)))
}

/// POST /api/literature
///
/// Stage 1: generation-by-generation literature-review map.
pub async fn handle_literature(
    State(state): State<AppState>,
    Json(request): Json<LitReviewRequest>,
) -> Result<Json<StageResponse>, AppError> {
    let prompt = prompts::build_literature_prompt(&request);
    let result = state.gateway.generate(&prompt).await?;
    Ok(Json(StageResponse::ok(result)))
}

/// POST /api/structure
///
/// Stage 2: paper-structure design with N2B section mapping.
pub async fn handle_structure(
    State(state): State<AppState>,
    Json(request): Json<StructureRequest>,
) -> Result<Json<StageResponse>, AppError> {
    let prompt = prompts::build_structure_prompt(&request);
    let result = state.gateway.generate(&prompt).await?;
    Ok(Json(StageResponse::ok(result)))
}

/// POST /api/introduction
///
/// Stage 3: four-paragraph introduction draft.
pub async fn handle_introduction(
    State(state): State<AppState>,
    Json(request): Json<IntroRequest>,
) -> Result<Json<StageResponse>, AppError> {
    let prompt = prompts::build_introduction_prompt(&request);
    let result = state.gateway.generate(&prompt).await?;
    Ok(Json(StageResponse::ok(result)))
}

/// POST /api/abstract
///
/// Stage 4: abstract generation with a target word count.
pub async fn handle_abstract(
    State(state): State<AppState>,
    Json(request): Json<AbstractRequest>,
) -> Result<Json<StageResponse>, AppError> {
    let prompt = prompts::build_abstract_prompt(&request);
    let result = state.gateway.generate(&prompt).await?;
    Ok(Json(StageResponse::ok(result)))
}

/// POST /api/journal
///
/// Stage 5: journal recommendations for the target index.
pub async fn handle_journal(
    State(state): State<AppState>,
    Json(request): Json<JournalRequest>,
) -> Result<Json<StageResponse>, AppError> {
    let prompt = prompts::build_journal_prompt(&request);
    let result = state.gateway.generate(&prompt).await?;
    Ok(Json(StageResponse::ok(result)))
}

/// POST /api/review-response
///
/// Stage 6: reviewer-response draft for a single reviewer comment.
pub async fn handle_review_response(
    State(state): State<AppState>,
    Json(request): Json<ReviewRequest>,
) -> Result<Json<StageResponse>, AppError> {
    let prompt = prompts::build_review_prompt(&request);
    let result = state.gateway.generate(&prompt).await?;
    Ok(Json(StageResponse::ok(result)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_topic_request_optionals_default_to_empty() {
        let req: TopicRequest = serde_json::from_value(json!({"topic": "t"})).unwrap();
        assert_eq!(req.topic, "t");
        assert_eq!(req.field, "");
        assert_eq!(req.keywords, "");
        assert_eq!(req.purpose, "");
    }

    #[test]
    fn test_topic_request_missing_topic_is_rejected() {
        let result = serde_json::from_value::<TopicRequest>(json!({"field": "간호학"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_literature_request_scope_defaults_to_recent_five_years() {
        let req: LitReviewRequest = serde_json::from_value(json!({"topic": "t"})).unwrap();
        assert_eq!(req.scope, "최근 5년");
        assert_eq!(req.known_papers, "");
    }

    #[test]
    fn test_structure_request_paper_type_defaults_to_original_research() {
        let req: StructureRequest = serde_json::from_value(json!({"topic": "t"})).unwrap();
        assert_eq!(req.paper_type, "원저");
    }

    #[test]
    fn test_intro_request_language_defaults_to_korean() {
        let req: IntroRequest = serde_json::from_value(json!({"topic": "t"})).unwrap();
        assert_eq!(req.language, "한국어");
    }

    #[test]
    fn test_abstract_request_word_count_defaults_to_250() {
        let req: AbstractRequest = serde_json::from_value(json!({"topic": "t"})).unwrap();
        assert_eq!(req.word_count, 250);
        assert_eq!(req.language, "한국어");
    }

    #[test]
    fn test_abstract_request_word_count_overrides() {
        let req: AbstractRequest =
            serde_json::from_value(json!({"topic": "t", "word_count": 150})).unwrap();
        assert_eq!(req.word_count, 150);
    }

    #[test]
    fn test_journal_request_index_defaults_to_sci_scie() {
        let req: JournalRequest = serde_json::from_value(json!({"topic": "t"})).unwrap();
        assert_eq!(req.index_type, "SCI/SCIE");
    }

    #[test]
    fn test_review_request_requires_reviewer_comment() {
        let result = serde_json::from_value::<ReviewRequest>(json!({"topic": "t"}));
        assert!(result.is_err());

        let req: ReviewRequest =
            serde_json::from_value(json!({"topic": "t", "reviewer_comment": "c"})).unwrap();
        assert_eq!(req.language, "한국어");
    }

    #[test]
    fn test_stage_response_serializes_to_wire_shape() {
        let body = serde_json::to_value(StageResponse::ok("X".to_string())).unwrap();
        assert_eq!(body, json!({"status": "ok", "result": "X"}));
    }
}
