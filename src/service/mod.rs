//! DocumentService: the two generic store primitives, plus rule-driven record validation.

mod documents;
mod validation;
pub use documents::DocumentService;
pub use validation::{parse_bool, FieldKind, FieldRule, RecordValidator};
