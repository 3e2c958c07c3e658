//! Named style definitions, CSS ingestion, inheritance flattening,
//! resolved-style dedup, usage tracking, and fragment emission (§4.E).

use std::collections::hash_map::DefaultHasher;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::{Hash, Hasher};

use crate::error::Diagnostics;
use crate::fragment::Fragment;
use crate::style::definition::StyleDefinition;
use crate::style::merge::{merge_property, MergeContext};
use crate::style::properties::Property;
use crate::symbol::SymbolTable;
use crate::value::{Struct, Value};

/// Fragment type symbol for `$style` (§4.G naming conventions).
pub const FTYPE_STYLE: u64 = 157;

/// How a resolved style is used — only used-marked styles produce
/// fragments (§4.E `MarkUsage`/`BuildFragments`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UsageTag {
    Text,
    Container,
    Wrapper,
}

/// `{before, after}` pseudo-element text for a CSS class (§4.E, SPEC_FULL
/// B.1 "Pseudo-content registration API").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PseudoContent {
    pub before: Option<String>,
    pub after: Option<String>,
}

/// Named style definitions plus everything needed to flatten, dedup, and
/// emit them (§4.E).
#[derive(Debug, Default)]
pub struct StyleRegistry {
    definitions: HashMap<String, StyleDefinition>,
    resolved_by_digest: HashMap<u64, (String, BTreeMap<Property, Value>)>,
    resolved_name_seq: u64,
    usage: HashMap<String, HashSet<UsageTag>>,
    pseudo_content: HashMap<String, PseudoContent>,
    external_links: HashMap<String, String>,
    external_link_seq: u64,
    diagnostics: Diagnostics,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }

    /// Adds `def`, merging onto any previously registered definition of the
    /// same name property-by-property (§4.E `Register`).
    pub fn register(&mut self, def: StyleDefinition) {
        match self.definitions.remove(&def.name) {
            None => {
                self.definitions.insert(def.name.clone(), def);
            }
            Some(existing) => {
                let mut merged = StyleDefinition::new(def.name.clone(), def.provenance);
                if let Some(parent) = def.parent.clone().or_else(|| existing.parent.clone()) {
                    merged = merged.with_parent(parent);
                }
                let mut properties = BTreeMap::new();
                for (property, value) in existing.iter() {
                    properties.insert(property, value.clone());
                }
                for (property, incoming) in def.iter() {
                    let current = properties.get(&property).cloned();
                    let result = merge_property(
                        property,
                        current.as_ref(),
                        incoming,
                        MergeContext::default(),
                        &mut self.diagnostics,
                    );
                    properties.insert(property, result);
                }
                for (property, value) in properties {
                    merged = merged.set(property, value);
                }
                self.definitions.insert(merged.name.clone(), merged);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&StyleDefinition> {
        self.definitions.get(name)
    }

    /// Flattens the inheritance chain rooted at `name`, canonicalizes the
    /// property map, and returns a content-addressed `s`-prefixed base36
    /// name. Two distinct input names with identical resolved property
    /// maps share the same resolved name (§4.E, §8 property 5).
    pub fn resolve_style(&mut self, name: &str) -> String {
        let flattened = self.flatten(name, &mut HashSet::new());
        self.resolve_properties(flattened)
    }

    /// Dedup/naming half of `ResolveStyle`, usable directly on an already-
    /// composed property map (used by [`crate::style::context::StyleContext::resolve`],
    /// which composes inherited + element + class properties before calling
    /// this rather than going through a named definition).
    pub fn resolve_properties(&mut self, properties: BTreeMap<Property, Value>) -> String {
        let digest = canonical_digest(&properties);
        if let Some((existing_name, _)) = self.resolved_by_digest.get(&digest) {
            return existing_name.clone();
        }
        let assigned = format!("s{}", to_base36(self.resolved_name_seq));
        self.resolved_name_seq += 1;
        self.resolved_by_digest
            .insert(digest, (assigned.clone(), properties));
        assigned
    }

    pub(crate) fn flatten(&mut self, name: &str, visiting: &mut HashSet<String>) -> BTreeMap<Property, Value> {
        if !visiting.insert(name.to_string()) {
            self.diagnostics
                .warn(format!("cyclic style inheritance detected at '{name}', truncating"));
            return BTreeMap::new();
        }
        let Some(def) = self.definitions.get(name).cloned() else {
            return BTreeMap::new();
        };
        let mut properties = match &def.parent {
            Some(parent) => self.flatten(parent, visiting),
            None => BTreeMap::new(),
        };
        for (property, incoming) in def.iter() {
            let current = properties.get(&property).cloned();
            let merged = merge_property(
                property,
                current.as_ref(),
                incoming,
                MergeContext::container(),
                &mut self.diagnostics,
            );
            properties.insert(property, merged);
        }
        properties
    }

    /// Resolved property map for an already-resolved name, used by
    /// `build_fragments` and the debug formatters.
    pub fn resolved_properties(&self, resolved_name: &str) -> Option<&BTreeMap<Property, Value>> {
        self.resolved_by_digest
            .values()
            .find(|(name, _)| name == resolved_name)
            .map(|(_, props)| props)
    }

    pub fn mark_usage(&mut self, resolved_name: &str, tag: UsageTag) {
        self.usage.entry(resolved_name.to_string()).or_default().insert(tag);
    }

    pub fn is_used(&self, resolved_name: &str) -> bool {
        self.usage.get(resolved_name).is_some_and(|tags| !tags.is_empty())
    }

    /// Emits one `$style` root-typed fragment per used resolved style
    /// (§4.E `BuildFragments`).
    pub fn build_fragments(&self, symbols: &mut SymbolTable) -> Vec<Fragment> {
        let mut fragments = Vec::new();
        let mut used: Vec<&String> = self.usage.keys().collect();
        used.sort();
        for resolved_name in used {
            if !self.is_used(resolved_name) {
                continue;
            }
            let Some(properties) = self.resolved_properties(resolved_name) else {
                continue;
            };
            let mut value = Struct::new();
            for (property, prop_value) in properties {
                value = value.set(property.symbol_id(), prop_value.clone());
            }
            let fid = symbols.intern(resolved_name);
            fragments.push(Fragment::new(FTYPE_STYLE, fid, Value::Struct(value)));
        }
        fragments
    }

    /// Given a hyphenated style name, finds a registered style matching
    /// the suffix after the last hyphen (`poem-subtitle` -> `subtitle`);
    /// falls back to `kfx-unknown` when none exists (§4.E).
    pub fn infer_parent_style(&self, name: &str) -> String {
        match name.rsplit_once('-') {
            Some((_, suffix)) if self.definitions.contains_key(suffix) => suffix.to_string(),
            _ => "kfx-unknown".to_string(),
        }
    }

    pub fn register_pseudo_content(&mut self, class: impl Into<String>, before: Option<String>, after: Option<String>) {
        self.pseudo_content
            .insert(class.into(), PseudoContent { before, after });
    }

    pub fn get_pseudo_content_for_class(&self, class: &str) -> Option<&PseudoContent> {
        self.pseudo_content.get(class)
    }

    /// Returns a stable, deduplicating anchor id for `url` (§4.E, §8 S8).
    pub fn register_external_link(&mut self, url: &str) -> String {
        if let Some(existing) = self.external_links.get(url) {
            return existing.clone();
        }
        let id = format!("e{}", self.external_link_seq);
        self.external_link_seq += 1;
        self.external_links.insert(url.to_string(), id.clone());
        id
    }
}

fn canonical_digest(properties: &BTreeMap<Property, Value>) -> u64 {
    let mut hasher = DefaultHasher::new();
    for (property, value) in properties {
        property.hash(&mut hasher);
        format!("{value:?}").hash(&mut hasher);
    }
    hasher.finish()
}

const BASE36_DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36_DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).expect("base36 alphabet is ASCII")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::definition::Provenance;
    use crate::style::dimension::{Dimension, Unit};

    fn dim(value: f64, unit: Unit) -> Value {
        Dimension::new(value, unit).to_value()
    }

    #[test]
    fn s1_inheritance_chain_flattens() {
        let mut registry = StyleRegistry::new();
        registry.register(
            StyleDefinition::new("p", Provenance::Css)
                .set(Property::LineHeight, dim(1.2, Unit::Ratio))
                .set(Property::TextIndent, dim(1.5, Unit::Em))
                .set(Property::TextAlign, Value::SymbolById(321)), // $justify
        );
        registry.register(
            StyleDefinition::new("subtitle", Provenance::Css)
                .with_parent("p")
                .set(Property::FontWeight, Value::SymbolById(361)) // $bold
                .set(Property::TextAlign, Value::SymbolById(320)), // $center
        );
        registry.register(
            StyleDefinition::new("poem-subtitle", Provenance::Css)
                .with_parent("subtitle")
                .set(Property::MarginLeft, dim(2.0, Unit::Em)),
        );
        let resolved = registry.resolve_style("poem-subtitle");
        let properties = registry.resolved_properties(&resolved).unwrap();
        assert_eq!(properties.get(&Property::TextAlign), Some(&Value::SymbolById(320)));
        assert!(properties.contains_key(&Property::LineHeight));
        assert!(properties.contains_key(&Property::TextIndent));
        assert!(properties.contains_key(&Property::FontWeight));
        assert!(properties.contains_key(&Property::MarginLeft));
        assert_eq!(properties.len(), 5);
    }

    #[test]
    fn resolve_style_is_pure_and_dedupes() {
        let mut registry = StyleRegistry::new();
        registry.register(StyleDefinition::new("a", Provenance::Css).set(Property::TextAlign, Value::SymbolById(320)));
        registry.register(StyleDefinition::new("b", Provenance::Css).set(Property::TextAlign, Value::SymbolById(320)));
        let first = registry.resolve_style("a");
        let second = registry.resolve_style("a");
        let third = registry.resolve_style("b");
        assert_eq!(first, second);
        assert_eq!(first, third, "identical property maps must share a resolved name");
    }

    #[test]
    fn unused_styles_produce_no_fragments() {
        let mut registry = StyleRegistry::new();
        registry.register(StyleDefinition::new("a", Provenance::Css).set(Property::TextAlign, Value::SymbolById(320)));
        let resolved = registry.resolve_style("a");
        let mut symbols = SymbolTable::new();
        assert!(registry.build_fragments(&mut symbols).is_empty());
        registry.mark_usage(&resolved, UsageTag::Text);
        assert_eq!(registry.build_fragments(&mut symbols).len(), 1);
    }

    #[test]
    fn infer_parent_style_matches_suffix_or_falls_back() {
        let mut registry = StyleRegistry::new();
        registry.register(StyleDefinition::new("subtitle", Provenance::Css));
        assert_eq!(registry.infer_parent_style("poem-subtitle"), "subtitle");
        assert_eq!(registry.infer_parent_style("poem-unknown-thing"), "kfx-unknown");
    }

    #[test]
    fn s8_external_link_registration_dedupes() {
        let mut registry = StyleRegistry::new();
        let first = registry.register_external_link("https://example.com/page");
        assert!(!first.is_empty());
        let second = registry.register_external_link("https://example.com/page");
        assert_eq!(first, second);
        let other = registry.register_external_link("https://example.com/other");
        assert_ne!(first, other);
    }

    #[test]
    fn pseudo_content_round_trips() {
        let mut registry = StyleRegistry::new();
        registry.register_pseudo_content("quote", Some("\u{201c}".to_string()), Some("\u{201d}".to_string()));
        let content = registry.get_pseudo_content_for_class("quote").unwrap();
        assert_eq!(content.before.as_deref(), Some("\u{201c}"));
        assert_eq!(content.after.as_deref(), Some("\u{201d}"));
        assert!(registry.get_pseudo_content_for_class("missing").is_none());
    }

    #[test]
    fn cyclic_inheritance_warns_instead_of_looping() {
        let mut registry = StyleRegistry::new();
        registry.register(StyleDefinition::new("a", Provenance::Css).with_parent("b"));
        registry.register(StyleDefinition::new("b", Provenance::Css).with_parent("a"));
        let _ = registry.resolve_style("a");
        assert!(!registry.diagnostics().is_empty());
    }

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_resolve_properties_is_pure_and_content_addressed(include_align in any::<bool>(), include_weight in any::<bool>()) {
            let mut props = BTreeMap::new();
            if include_align {
                props.insert(Property::TextAlign, Value::SymbolById(320));
            }
            if include_weight {
                props.insert(Property::FontWeight, Value::SymbolById(361));
            }

            let mut registry_a = StyleRegistry::new();
            let mut registry_b = StyleRegistry::new();
            let name_a = registry_a.resolve_properties(props.clone());
            let name_b = registry_b.resolve_properties(props.clone());
            prop_assert_eq!(&name_a, &name_b, "identical property maps in independent registries must share a resolved name");

            let name_a_again = registry_a.resolve_properties(props);
            prop_assert_eq!(name_a, name_a_again, "resolve_properties must be pure for a fixed property map");
        }
    }
}
