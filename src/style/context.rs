//! The tree-walk style context: immutable path stack, CSS-inheritable
//! property accumulation, block vs. inline scope (§4.F).

use std::collections::{BTreeMap, HashSet};

use crate::style::merge::{merge_property, MergeContext};
use crate::style::properties::Property;
use crate::style::registry::StyleRegistry;
use crate::value::Value;

/// One (tag, class) frame on the path from the document root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub tag: String,
    pub class: Option<String>,
}

/// An immutable value: `Push`/`PushBlock` always return a new context,
/// never mutate the receiver (§4.F invariant, §8 property 6).
#[derive(Debug, Clone, Default)]
pub struct StyleContext {
    path: Vec<Frame>,
    inherited: BTreeMap<Property, Value>,
}

impl StyleContext {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn path(&self) -> &[Frame] {
        &self.path
    }

    pub fn inherited(&self) -> &BTreeMap<Property, Value> {
        &self.inherited
    }

    /// Enters a scope inheriting CSS-inheritable properties (text-align,
    /// line-height, font-*, color, ...) from the named style — *not*
    /// margins/paddings (§4.F).
    pub fn push(&self, tag: impl Into<String>, class: Option<String>, registry: &mut StyleRegistry) -> StyleContext {
        self.push_scope(tag, class, registry, false)
    }

    /// As `push`, but also propagates margins/paddings, so structural
    /// containers (`poem`, `stanza`) pass their indentation down into
    /// child paragraph styles (§4.F).
    pub fn push_block(&self, tag: impl Into<String>, class: Option<String>, registry: &mut StyleRegistry) -> StyleContext {
        self.push_scope(tag, class, registry, true)
    }

    fn push_scope(
        &self,
        tag: impl Into<String>,
        class: Option<String>,
        registry: &mut StyleRegistry,
        include_margins: bool,
    ) -> StyleContext {
        let tag = tag.into();
        let mut inherited = self.inherited.clone();
        let style_name = class.clone().unwrap_or_else(|| tag.clone());
        let own = registry.flatten(&style_name, &mut HashSet::new());
        for (property, value) in own {
            let carries = property.is_css_inheritable() || (include_margins && property.is_margin_or_padding());
            if !carries {
                continue;
            }
            let current = inherited.get(&property).cloned();
            let merged = merge_property(
                property,
                current.as_ref(),
                &value,
                MergeContext::container(),
                registry.diagnostics_mut(),
            );
            inherited.insert(property, merged);
        }
        let mut path = self.path.clone();
        path.push(Frame { tag, class });
        StyleContext { path, inherited }
    }

    /// Composes the accumulated inherited properties with the element's
    /// own style and the class's own style, registers the result, and
    /// returns its resolved name. Pure: identical `(ctx, tag, class)`
    /// against the same registry state returns the same name (§4.F, §8
    /// property 5 applied to contexts).
    pub fn resolve(&self, element_tag: &str, class: Option<&str>, registry: &mut StyleRegistry) -> String {
        let mut properties = self.inherited.clone();
        let element_own = registry.flatten(element_tag, &mut HashSet::new());
        merge_all(&mut properties, element_own, MergeContext::inline(), registry);
        if let Some(class) = class {
            let class_own = registry.flatten(class, &mut HashSet::new());
            merge_all(&mut properties, class_own, MergeContext::inline(), registry);
        }
        registry.resolve_properties(properties)
    }
}

fn merge_all(
    target: &mut BTreeMap<Property, Value>,
    incoming: BTreeMap<Property, Value>,
    ctx: MergeContext,
    registry: &mut StyleRegistry,
) {
    for (property, value) in incoming {
        let current = target.get(&property).cloned();
        let merged = merge_property(property, current.as_ref(), &value, ctx, registry.diagnostics_mut());
        target.insert(property, merged);
    }
}
