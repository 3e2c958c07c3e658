//! `$font`/`$bcRawFont` fragment pairs built from parsed `@font-face`
//! descriptors and their packaged bytes (§4.G, SPEC_FULL B "Font-family
//! prefixing rule detail").

use std::collections::HashMap;

use crate::content::{FontFaceDescriptor, FontFile, CSS_GENERIC_FONT_FAMILIES};
use crate::fragment::Fragment;
use crate::value::{Struct, Value};

pub const FTYPE_FONT: u64 = 600;
pub const FTYPE_RAW_FONT: u64 = 601;

const SYM_FONT_FAMILY: u64 = 11;
const SYM_FONT_STYLE: u64 = 12;
const SYM_FONT_WEIGHT: u64 = 13;
const SYM_RESOURCE: u64 = 164;

/// Assigns stable fragment ids and deduplicates by source URL: the same
/// font file referenced by multiple `@font-face` rules is only emitted
/// once (§4.G "duplicate URLs are deduplicated").
#[derive(Debug, Default)]
pub struct FontBuilder {
    seen_urls: HashMap<String, u64>,
    next_id: u64,
}

impl FontBuilder {
    pub fn new(start_id: u64) -> Self {
        Self {
            seen_urls: HashMap::new(),
            next_id: start_id,
        }
    }

    /// Builds the `($font, $bcRawFont)` pair for `file`'s url, or `None` if
    /// that url was already built by an earlier call.
    pub fn build(&mut self, descriptor: &FontFaceDescriptor, file: &FontFile) -> Option<(Fragment, Fragment)> {
        if self.seen_urls.contains_key(&file.url) {
            return None;
        }
        let raw_fid = self.next_id;
        self.next_id += 1;
        let font_fid = self.next_id;
        self.next_id += 1;
        self.seen_urls.insert(file.url.clone(), raw_fid);

        let raw_fragment = Fragment::raw(FTYPE_RAW_FONT, raw_fid, file.bytes.clone());

        let mut value = Struct::new()
            .set(SYM_FONT_FAMILY, Value::String(prefixed_family(&descriptor.family)))
            .set(SYM_RESOURCE, Value::SymbolById(raw_fid));
        if let Some(weight) = descriptor.weight {
            value = value.set(SYM_FONT_WEIGHT, Value::Int(weight as i64));
        }
        if let Some(style) = &descriptor.style {
            value = value.set(SYM_FONT_STYLE, Value::String(style.clone()));
        }
        let font_fragment = Fragment::new(FTYPE_FONT, font_fid, Value::Struct(value));
        Some((font_fragment, raw_fragment))
    }

    pub fn raw_id_for(&self, url: &str) -> Option<u64> {
        self.seen_urls.get(url).copied()
    }
}

/// `nav-`-prefixes a font family name unless it's a CSS generic family
/// (`serif`, `sans-serif`, ...), which readers must resolve to their own
/// built-in fonts rather than a packaged one.
fn prefixed_family(family: &str) -> String {
    if CSS_GENERIC_FONT_FAMILIES.contains(&family) {
        family.to_string()
    } else {
        format!("nav-{family}")
    }
}
