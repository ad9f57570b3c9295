use super::Record;
use crate::service::{FieldKind, FieldRule};
use serde::{Deserialize, Serialize};

pub const MENU_COLLECTION: &str = "menuitem";

/// A dish on the Flavor Factory menu.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    #[serde(default = "default_drive_thru")]
    pub is_drive_thru_friendly: bool,
    #[serde(default)]
    pub image: Option<String>,
}

fn default_drive_thru() -> bool {
    true
}

const RULES: &[FieldRule] = &[
    FieldRule::required("name", FieldKind::Text, "Dish name").non_empty(),
    FieldRule::optional("description", FieldKind::Text, "Short description of the dish"),
    FieldRule::required("price", FieldKind::Number, "Price in local currency").at_least(0.0),
    FieldRule::required(
        "category",
        FieldKind::Text,
        "e.g., Burgers, Mains, Sides, Drinks, Dessert",
    )
    .non_empty(),
    FieldRule::optional(
        "is_drive_thru_friendly",
        FieldKind::Boolean,
        "Suitable for quick drive-thru service",
    )
    .defaults_to(true),
    FieldRule::optional("image", FieldKind::Text, "Image URL"),
];

impl Record for MenuItem {
    fn rules() -> &'static [FieldRule] {
        RULES
    }
}
