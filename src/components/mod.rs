//! UI Components
//!
//! Leptos components mounted into server-rendered pages.

mod file_preview;

pub use file_preview::{FilePreview, PreviewEntry, PreviewState};
