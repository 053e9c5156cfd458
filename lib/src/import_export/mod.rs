pub mod browser;
pub mod export;
pub mod import;

// Re-export main functions for convenience
pub use browser::{detect_browsers, BrowserProfile, BrowserType};
pub use export::{export_tree, render, render_titled, ExportFormat, TreeExporter};
pub use import::{import_bookmarks, parse, parse_document};
