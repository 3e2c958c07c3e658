//! Resolved-style-to-CSS rendering: property name translation, dimension
//! and color formatting (§4.H).

use std::collections::BTreeMap;

use crate::style::dimension::Dimension;
use crate::style::Property;
use crate::symbol::SymbolTable;
use crate::value::Value;

/// Renders a resolved style's property map as CSS declarations, one per
/// line, property names translated via [`Property::css_name`].
pub fn render_declarations(properties: &BTreeMap<Property, Value>, symbols: &SymbolTable) -> String {
    properties
        .iter()
        .map(|(property, value)| format!("{}: {};", property.css_name(), render_value(*property, value, symbols)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_value(property: Property, value: &Value, symbols: &SymbolTable) -> String {
    if let Some(dim) = Dimension::from_value(value) {
        return dim.to_css();
    }
    match value {
        Value::Int(n) if matches!(property, Property::TextColor | Property::BackgroundColor) => {
            color_to_css(*n as u32)
        }
        Value::SymbolById(id) => symbols.format_symbol(*id).trim_start_matches('$').to_string(),
        Value::SymbolByName(name) => name.trim_start_matches('$').to_string(),
        Value::String(s) => s.clone(),
        other => other.render(symbols),
    }
}

/// `#AARRGGBB` (§4.H); unit `ratio` dimensions are unitless and handled by
/// [`Dimension::to_css`] directly.
pub fn color_to_css(argb: u32) -> String {
    format!("#{argb:08X}")
}
