//! `GET /schema`: declarative field rules of each persisted entity.

use crate::models::{Inquiry, MenuItem, Record, INQUIRY_COLLECTION, MENU_COLLECTION};
use crate::service::FieldRule;
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct EntitySchema {
    pub collection: &'static str,
    pub fields: &'static [FieldRule],
}

pub async fn entity_schemas() -> Json<Vec<EntitySchema>> {
    Json(vec![
        EntitySchema {
            collection: MENU_COLLECTION,
            fields: MenuItem::rules(),
        },
        EntitySchema {
            collection: INQUIRY_COLLECTION,
            fields: Inquiry::rules(),
        },
    ])
}
