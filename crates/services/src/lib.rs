#![forbid(unsafe_code)]

pub mod error;
pub mod evaluation;
pub mod export;
pub mod suggestions;

pub use error::ExportError;
pub use evaluation::EvaluationService;
pub use export::ResultExporter;
pub use suggestions::{SuggestionFilter, SuggestionService, VISIBLE_LIMIT};
