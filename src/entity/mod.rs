//! Entity extraction, removal, and reinsertion
//!
//! The round trip: [`EntityExtractor`] pulls person and location entities
//! out of a text into an [`crate::core::EntityRecord`] (optionally deleting
//! them), and [`reinsert`] appends their canonical forms back after the
//! text has been through the destructive preprocessing filters.

pub mod extractor;
pub mod reinsert;

pub use extractor::{EntityExtractor, ExtractionOptions};
pub use reinsert::{reinsert, reinsert_legacy, NameStyle, ReinsertOptions};
