//! `POST /inquiry`: validate and persist a customer inquiry.

use crate::error::AppError;
use crate::models::{Inquiry, Record, INQUIRY_COLLECTION};
use crate::service::DocumentService;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Serialize)]
pub struct InquiryCreated {
    pub status: &'static str,
    pub id: String,
}

fn body_to_map(value: Value) -> Result<Map<String, Value>, AppError> {
    match value {
        Value::Object(m) => Ok(m),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}

pub async fn create_inquiry(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<InquiryCreated>, AppError> {
    let Json(body) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let inquiry = Inquiry::from_raw(body_to_map(body)?)?;
    let store = state.store()?;
    let id = DocumentService::create_document(store, INQUIRY_COLLECTION, &inquiry).await?;
    tracing::info!(id = %id, guests = ?inquiry.guests, "inquiry received");
    Ok(Json(InquiryCreated { status: "ok", id }))
}
