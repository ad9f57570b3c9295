//! Typed records persisted in (or served alongside) the document store.

mod inquiry;
mod location;
mod menu_item;

pub use inquiry::{Inquiry, INQUIRY_COLLECTION};
pub use location::{Location, Locations, BRAND, LOCATIONS};
pub use menu_item::{MenuItem, MENU_COLLECTION};

use crate::error::{Constraint, FieldViolation, ValidationError};
use crate::service::{FieldRule, RecordValidator};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

/// A strongly-typed entity with declarative field rules.
pub trait Record: Serialize + DeserializeOwned + Sized {
    fn rules() -> &'static [FieldRule];

    /// Turn a raw field map into a typed record, or report every violated rule.
    fn from_raw(mut raw: Map<String, Value>) -> Result<Self, ValidationError> {
        RecordValidator::validate(&mut raw, Self::rules())?;
        raw.retain(|_, v| !v.is_null());
        // Rules cover every declared field, so this only fails on a rule/struct mismatch.
        serde_json::from_value(Value::Object(raw)).map_err(|e| ValidationError {
            violations: vec![FieldViolation {
                field: String::new(),
                constraint: Constraint::WrongType { expected: "record" },
                message: e.to_string(),
            }],
        })
    }
}
