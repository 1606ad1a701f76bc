//! Read-only export of saved journal entries.
//!
//! Two renderers: plain share text and paginated A4 PDF. Both operate
//! over already-saved entries, so a failed export never touches
//! persisted journal data.

pub mod pdf;
pub mod text;

pub use pdf::{export_all_to_pdf, export_entry_to_pdf};
pub use text::{format_entry, format_journal, format_thought_pair};
