//! Root fragment builders: the bridge from a [`crate::content::ContentModel`]
//! to the `$metadata`/`$book_metadata`/`$document_data`/`$format_capabilities`
//! root fragments and the `$font`/`$bcRawFont` pairs (§4.G).

pub mod document_data;
pub mod font;
pub mod format_capabilities;
pub mod metadata;

pub use document_data::build_document_data;
pub use font::FontBuilder;
pub use format_capabilities::{build_format_capabilities, default_capabilities, Capability};
pub use metadata::{build_book_metadata, build_metadata};
