//! Website assistant chat

use axum::Json;
use shared::assistant::{AssistantReply, AssistantRequest, respond};
use shared::error::AppError;

use super::super::ApiResult;

/// POST /api/assistant
pub async fn ask(Json(req): Json<AssistantRequest>) -> ApiResult<AssistantReply> {
    let reply = respond(&req.message).ok_or_else(|| AppError::required("message"))?;
    Ok(Json(AssistantReply {
        reply: reply.to_string(),
        timestamp: shared::util::now_millis(),
    }))
}
