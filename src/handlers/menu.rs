//! `GET /menu`: list menu items with optional category / drive-thru filters.

use crate::error::{AppError, Constraint, StorageError, ValidationError};
use crate::models::{MenuItem, Record, MENU_COLLECTION};
use crate::service::{parse_bool, DocumentService};
use crate::state::AppState;
use crate::store::ID_FIELD;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

/// Fixed cap on a menu listing; there is no continuation.
pub const MENU_LIMIT: u32 = 200;

#[derive(Debug, Default, Deserialize)]
pub struct MenuQuery {
    pub category: Option<String>,
    pub drive_thru_only: Option<String>,
}

impl MenuQuery {
    /// Equality filter for the store. An empty category is treated as absent.
    pub fn filter(&self) -> Result<Vec<(String, Value)>, ValidationError> {
        let drive_thru_only = match self.drive_thru_only.as_deref() {
            None => false,
            Some(s) => parse_bool(s).ok_or_else(|| {
                ValidationError::single(
                    "drive_thru_only",
                    Constraint::WrongType { expected: "boolean" },
                    format!("drive_thru_only must be of type boolean, got {:?}", s),
                )
            })?,
        };
        let mut filter = Vec::new();
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            filter.push(("category".to_string(), Value::String(category.to_string())));
        }
        if drive_thru_only {
            filter.push(("is_drive_thru_friendly".to_string(), Value::Bool(true)));
        }
        Ok(filter)
    }
}

pub async fn list_menu(
    State(state): State<AppState>,
    query: Result<Query<MenuQuery>, QueryRejection>,
) -> Result<Json<Vec<MenuItem>>, AppError> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let filter = query.filter()?;
    let store = state.store()?;
    let docs = DocumentService::get_documents(store, MENU_COLLECTION, &filter, MENU_LIMIT).await?;
    let items = docs
        .into_iter()
        .map(|mut doc| {
            doc.remove(ID_FIELD);
            MenuItem::from_raw(doc).map_err(|e| StorageError::Corrupt {
                collection: MENU_COLLECTION.to_string(),
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(items))
}
