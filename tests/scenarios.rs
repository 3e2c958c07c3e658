//! End-to-end scenarios wiring the symbol table, style engine, fragment
//! builders, and fragment list together, the way an orchestrator would
//! drive this crate for a single document build.

use std::collections::HashSet;

use kfx_style_core::builders::{build_book_metadata, build_document_data, build_format_capabilities, build_metadata, default_capabilities};
use kfx_style_core::content::{BuildConfig, ContentModel, ReadingOrder};
use kfx_style_core::error::Diagnostics;
use kfx_style_core::style::{context::StyleContext, definition::{Provenance, StyleDefinition}, dimension::{Dimension, Unit}, Property, StyleRegistry};
use kfx_style_core::value::Value;
use kfx_style_core::{Fragment, FragmentList, SymbolTable};

fn dim(value: f64, unit: Unit) -> Value {
    Dimension::new(value, unit).to_value()
}

/// S1: a three-level inheritance chain resolves to one style carrying all
/// four ancestor properties plus its own, with the most specific override
/// winning.
#[test]
fn s1_inheritance_resolves_through_context() {
    let mut registry = StyleRegistry::new();
    registry.register(
        StyleDefinition::new("p", Provenance::Css)
            .set(Property::LineHeight, dim(1.2, Unit::Ratio))
            .set(Property::TextIndent, dim(1.5, Unit::Em))
            .set(Property::TextAlign, Value::SymbolById(321)),
    );
    registry.register(
        StyleDefinition::new("subtitle", Provenance::Css)
            .with_parent("p")
            .set(Property::FontWeight, Value::SymbolById(361))
            .set(Property::TextAlign, Value::SymbolById(320)),
    );
    registry.register(
        StyleDefinition::new("poem-subtitle", Provenance::Css)
            .with_parent("subtitle")
            .set(Property::MarginLeft, dim(2.0, Unit::Em)),
    );

    let ctx = StyleContext::root();
    let resolved_name = ctx.resolve("poem-subtitle", None, &mut registry);
    registry.mark_usage(&resolved_name, kfx_style_core::style::UsageTag::Text);

    let properties = registry.resolved_properties(&resolved_name).unwrap();
    assert_eq!(properties.get(&Property::TextAlign), Some(&Value::SymbolById(320)));
    assert!(properties.contains_key(&Property::MarginLeft));
    assert_eq!(properties.len(), 5);

    let mut symbols = SymbolTable::new();
    let fragments = registry.build_fragments(&mut symbols);
    assert_eq!(fragments.len(), 1);
}

/// A full root-fragment build: metadata, book metadata, document data,
/// and format capabilities land in one list without key collisions, and
/// `sorted_by_type` reports them in ascending-ftype order.
#[test]
fn full_root_fragment_set_builds_without_collisions() {
    let content = ContentModel {
        title: "The Captain's Daughter".to_string(),
        author_parts: vec!["Alexander".to_string(), "Pushkin".to_string()],
        language: "ru".to_string(),
        publisher: Some("Example Press".to_string()),
        isbn: Some("978-0-00-000000-0".to_string()),
        reading_orders: vec![ReadingOrder::new("default", vec!["chapter-one".to_string(), "chapter-two".to_string()])],
        ..Default::default()
    };
    let config = BuildConfig::default();
    let mut diagnostics = Diagnostics::new();

    let mut fragments = FragmentList::new();
    fragments.add(build_metadata(&content, &config, &mut diagnostics)).unwrap();
    fragments.add(build_book_metadata(&content)).unwrap();
    fragments.add(build_document_data(&content)).unwrap();
    fragments.add(build_format_capabilities(&default_capabilities())).unwrap();

    assert_eq!(fragments.len(), 4);
    assert!(diagnostics.is_empty());

    let symbols = SymbolTable::new();
    let ordered = fragments.sorted_by_type(&symbols);
    let types: Vec<u64> = ordered.iter().map(|f| f.ftype).collect();
    let mut sorted_types = types.clone();
    sorted_types.sort_unstable();
    assert_eq!(types, sorted_types);
    assert!(ordered.iter().all(|f| f.is_root()));
}

/// A style build and a symbol table build compose cleanly: interning a
/// section name used by `$document_data`'s deferred symbol references
/// does not collide with anything the style registry assigned.
#[test]
fn symbols_and_styles_compose_without_interference() {
    let mut symbols = SymbolTable::new();
    let mut registry = StyleRegistry::new();
    registry.register(StyleDefinition::new("p", Provenance::Css).set(Property::TextAlign, Value::SymbolById(321)));

    let ctx = StyleContext::root();
    let resolved = ctx.resolve("p", None, &mut registry);
    registry.mark_usage(&resolved, kfx_style_core::style::UsageTag::Text);
    let style_fragments = registry.build_fragments(&mut symbols);
    assert_eq!(style_fragments.len(), 1);

    let section_id = symbols.intern("chapter-one");
    assert_eq!(section_id, symbols.local_min_id());

    let mut seen_ids: HashSet<u64> = HashSet::new();
    for fragment in &style_fragments {
        if let kfx_style_core::FragmentId::Id(id) = &fragment.id {
            assert!(seen_ids.insert(*id));
        }
    }
}

/// S8 exercised through the registry's public API directly, confirming
/// the dedup contract survives being driven by an external caller rather
/// than an internal test helper.
#[test]
fn s8_external_link_registration_is_idempotent_for_repeat_urls() {
    let mut registry = StyleRegistry::new();
    let first = registry.register_external_link("https://example.com/page");
    let second = registry.register_external_link("https://example.com/page");
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

/// A raw fragment (`$bcRawFont`) and a structured root fragment can
/// coexist in one list and both round-trip through `get`.
#[test]
fn raw_and_structured_fragments_coexist() {
    let mut fragments = FragmentList::new();
    fragments.add(Fragment::raw(601, 900, vec![0xDE, 0xAD])).unwrap();
    fragments
        .add(Fragment::singleton(258, Value::Null))
        .unwrap();
    assert_eq!(fragments.len(), 2);
    assert!(fragments.get_root(258).unwrap().is_root());
    let font = fragments.get(601, &kfx_style_core::FragmentId::Id(900)).unwrap();
    assert!(font.is_raw_type());
}
