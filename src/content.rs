//! External input shapes this crate consumes from its collaborators (§6).
//!
//! FB2 parsing, CSS tokenizing, and font binary packaging live outside
//! this crate; these types are the handoff shape those collaborators are
//! expected to already have produced.

use std::collections::BTreeMap;

use crate::style::Property;
use crate::value::Value;

/// Book metadata and structure handed to the fragment builders (§6
/// "content model").
#[derive(Debug, Clone, Default)]
pub struct ContentModel {
    pub title: String,
    pub author_parts: Vec<String>,
    pub language: String,
    pub publisher: Option<String>,
    pub isbn: Option<String>,
    pub reading_orders: Vec<ReadingOrder>,
    pub footnote_index: BTreeMap<String, String>,
    pub resources: Vec<ExternalResource>,
}

/// One named reading order and the ordered section symbols it visits
/// (§4.G `$document_data`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingOrder {
    pub name: String,
    pub sections: Vec<String>,
}

impl ReadingOrder {
    pub fn new(name: impl Into<String>, sections: Vec<String>) -> Self {
        Self {
            name: name.into(),
            sections,
        }
    }
}

/// A resource referenced by original CSS/document URL, with its MIME type
/// and raw bytes (§6).
#[derive(Debug, Clone)]
pub struct ExternalResource {
    pub url: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// A parsed CSS rule: a selector and its already-resolved KFX property map
/// (CSS tokenizing/parsing itself is out of scope — §1).
#[derive(Debug, Clone)]
pub struct CssRule {
    pub selector: String,
    pub declarations: BTreeMap<Property, Value>,
}

/// A parsed `@font-face` descriptor (§6).
#[derive(Debug, Clone)]
pub struct FontFaceDescriptor {
    pub family: String,
    pub src_url: String,
    pub weight: Option<u16>,
    pub style: Option<String>,
}

/// A parsed stylesheet: rules plus `@font-face` descriptors (§6).
#[derive(Debug, Clone, Default)]
pub struct CssStylesheet {
    pub rules: Vec<CssRule>,
    pub font_faces: Vec<FontFaceDescriptor>,
}

/// A raw font file keyed by its original CSS URL (§6).
#[derive(Debug, Clone)]
pub struct FontFile {
    pub url: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// CSS generic font families, which are never `nav-`-prefixed (§4.G,
/// SPEC_FULL B "Font-family prefixing rule detail").
pub const CSS_GENERIC_FONT_FAMILIES: &[&str] =
    &["serif", "sans-serif", "monospace", "cursive", "fantasy", "system-ui"];

/// Build-time options recognized from the configuration object (§6, SPEC_FULL A.3).
///
/// Derives `Serialize`/`Deserialize` so an external collaborator can load
/// this from whatever config file format it uses; parsing that file is
/// explicitly out of scope here.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct BuildConfig {
    pub title_template: Option<String>,
    pub creator_name_template: Option<String>,
    pub transliterate: bool,
}
