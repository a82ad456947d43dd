/*
[INPUT]:  Public API exports for taskbuilder-report crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod flatten;
pub mod table;

// Re-export main types for convenience
pub use flatten::{ComponentRow, flatten_document};
pub use table::{escape_html, render_table};
