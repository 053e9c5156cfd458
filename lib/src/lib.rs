pub mod config;
pub mod error;
pub mod html;
pub mod import_export;
pub mod models;
pub mod scalar;
pub mod timestamp;
pub mod utils;

// Re-export error types for convenience
pub use error::BmError;
pub use import_export::{parse, parse_document, render};
pub use models::errors::{FieldError, ParseError, StructuralError};
pub use models::tree::{Folder, Link, Node, Tree};
