//! `GET /test`: database diagnostic. Never fails; every degraded state is reported as text.

use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

/// Collections listed by the connectivity probe.
pub const PROBE_COLLECTION_LIMIT: usize = 10;
const MAX_ERROR_CHARS: usize = 50;

#[derive(Debug, Serialize)]
pub struct DiagnosticReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

fn truncate(e: impl ToString) -> String {
    e.to_string().chars().take(MAX_ERROR_CHARS).collect()
}

fn set_or_not(present: bool) -> String {
    let s = if present { "✅ Set" } else { "❌ Not Set" };
    s.to_string()
}

pub async fn database_diagnostic(State(state): State<AppState>) -> Json<DiagnosticReport> {
    let mut report = DiagnosticReport {
        backend: "✅ Running".into(),
        database: "❌ Not Available".into(),
        database_url: set_or_not(state.settings.database_url.is_some()),
        database_name: set_or_not(state.settings.database_name.is_some()),
        connection_status: "Not Connected".into(),
        collections: Vec::new(),
    };

    match &state.store {
        Some(store) => {
            report.database = "✅ Available".into();
            report.connection_status = "Connected".into();
            match store.list_collection_names().await {
                Ok(mut names) => {
                    names.truncate(PROBE_COLLECTION_LIMIT);
                    report.collections = names;
                    report.database = "✅ Connected & Working".into();
                }
                Err(e) => {
                    tracing::warn!(error = %e, store = store.name(), "diagnostic probe failed");
                    report.database = format!("⚠️  Connected but Error: {}", truncate(e));
                }
            }
        }
        // Missing configuration shows up in `database_url` / `database_name`.
        None => {
            report.database = "⚠️  Available but not initialized".into();
        }
    }

    Json(report)
}
