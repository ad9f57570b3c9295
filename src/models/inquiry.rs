use super::Record;
use crate::service::{FieldKind, FieldRule};
use serde::{Deserialize, Serialize};

pub const INQUIRY_COLLECTION: &str = "inquiry";

/// Contact or booking inquiry submitted from the website.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub guests: Option<i64>,
}

const RULES: &[FieldRule] = &[
    FieldRule::required("name", FieldKind::Text, "Customer name").non_empty(),
    FieldRule::required("email", FieldKind::Text, "Customer email").non_empty(),
    FieldRule::required("message", FieldKind::Text, "Inquiry details").non_empty(),
    FieldRule::optional("location", FieldKind::Text, "Preferred city/location"),
    FieldRule::optional(
        "guests",
        FieldKind::Integer,
        "Guests for reservation if applicable",
    )
    .at_least(1.0),
];

impl Record for Inquiry {
    fn rules() -> &'static [FieldRule] {
        RULES
    }
}
