//! HTTP handlers for the menu, inquiries, entity schemas and the database diagnostic.

pub mod diagnostics;
pub mod inquiry;
pub mod menu;
pub mod schema;
pub use diagnostics::*;
pub use inquiry::*;
pub use menu::*;
pub use schema::*;
