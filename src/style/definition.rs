//! Named style definitions and where they came from (§3 "Style
//! definition").

use std::collections::BTreeMap;

use crate::style::properties::Property;
use crate::value::Value;

/// Where a style definition's properties came from — carried for
/// debugging and for `inferParentStyle` fallbacks (§4.E), not used in
/// merge decisions itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Css,
    Default,
    HtmlTag,
}

/// A name, a property map, an optional parent for inheritance, and
/// provenance (§3).
#[derive(Debug, Clone, PartialEq)]
pub struct StyleDefinition {
    pub name: String,
    pub parent: Option<String>,
    pub provenance: Provenance,
    properties: BTreeMap<Property, Value>,
}

impl StyleDefinition {
    pub fn new(name: impl Into<String>, provenance: Provenance) -> Self {
        Self {
            name: name.into(),
            parent: None,
            provenance,
            properties: BTreeMap::new(),
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn set(mut self, property: Property, value: Value) -> Self {
        self.properties.insert(property, value);
        self
    }

    pub fn get(&self, property: Property) -> Option<&Value> {
        self.properties.get(&property)
    }

    /// Properties in ascending `Property` order — already the stable
    /// ordering canonicalization needs (§9 "Canonicalization sorts keys by
    /// symbol ID"; `Property`'s `Ord` mirrors symbol-ID order by
    /// construction of `ALL_PROPERTIES`).
    pub fn iter(&self) -> impl Iterator<Item = (Property, &Value)> {
        self.properties.iter().map(|(&p, v)| (p, v))
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_round_trip() {
        let def = StyleDefinition::new("p", Provenance::Css).set(Property::TextAlign, Value::Int(1));
        assert_eq!(def.get(Property::TextAlign), Some(&Value::Int(1)));
        assert_eq!(def.get(Property::FontWeight), None);
    }

    #[test]
    fn with_parent_sets_inheritance_link() {
        let def = StyleDefinition::new("subtitle", Provenance::Css).with_parent("p");
        assert_eq!(def.parent.as_deref(), Some("p"));
    }
}
