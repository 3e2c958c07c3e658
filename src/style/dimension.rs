//! CSS length/ratio values as first-class KFX values (§3 "Dimension").

use crate::value::{Struct, Value};

/// Symbol ID of the `$value` field in a dimension struct.
pub const SYM_VALUE: u64 = 307;
/// Symbol ID of the `$unit` field in a dimension struct.
pub const SYM_UNIT: u64 = 306;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    Ratio,
    Percent,
    Em,
    Rem,
    Lh,
    Px,
    Pt,
    Ex,
    Cm,
    Mm,
    In,
}

impl Unit {
    pub fn symbol_id(self) -> u64 {
        match self {
            Unit::Ratio => 310,
            Unit::Percent => 314,
            Unit::Em => 308,
            Unit::Rem => 309,
            Unit::Lh => 311,
            Unit::Px => 318,
            Unit::Pt => 312,
            Unit::Ex => 313,
            Unit::Cm => 315,
            Unit::Mm => 316,
            Unit::In => 317,
        }
    }

    pub fn from_symbol_id(id: u64) -> Option<Unit> {
        Some(match id {
            310 => Unit::Ratio,
            314 => Unit::Percent,
            308 => Unit::Em,
            309 => Unit::Rem,
            311 => Unit::Lh,
            318 => Unit::Px,
            312 => Unit::Pt,
            313 => Unit::Ex,
            315 => Unit::Cm,
            316 => Unit::Mm,
            317 => Unit::In,
            _ => return None,
        })
    }

    /// CSS unit suffix for the `to_css` debug renderer (§4.H); `ratio` is
    /// unitless.
    pub fn css_suffix(self) -> &'static str {
        match self {
            Unit::Ratio => "",
            Unit::Percent => "%",
            Unit::Em => "em",
            Unit::Rem => "rem",
            Unit::Lh => "lh",
            Unit::Px => "px",
            Unit::Pt => "pt",
            Unit::Ex => "ex",
            Unit::Cm => "cm",
            Unit::Mm => "mm",
            Unit::In => "in",
        }
    }

    pub fn from_css_suffix(suffix: &str) -> Option<Unit> {
        Some(match suffix {
            "" => Unit::Ratio,
            "%" => Unit::Percent,
            "em" => Unit::Em,
            "rem" => Unit::Rem,
            "lh" => Unit::Lh,
            "px" => Unit::Px,
            "pt" => Unit::Pt,
            "ex" => Unit::Ex,
            "cm" => Unit::Cm,
            "mm" => Unit::Mm,
            "in" => Unit::In,
            _ => return None,
        })
    }

    /// Whether this unit scales relative to an inherited value rather than
    /// standing alone — drives the `relative` merge rule (§4.E).
    pub fn is_relative(self) -> bool {
        matches!(self, Unit::Em | Unit::Percent)
    }

    /// The multiplier this unit's value represents when used relatively:
    /// `1em` is a 1.0 ratio, `140%` is a 1.4 ratio.
    pub fn relative_ratio(self, value: f64) -> f64 {
        match self {
            Unit::Percent => value / 100.0,
            _ => value,
        }
    }
}

/// `{$307: value, $306: unit}` (§3).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimension {
    pub value: f64,
    pub unit: Unit,
}

impl Dimension {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub fn to_value(self) -> Value {
        Value::Struct(
            Struct::new()
                .set(SYM_VALUE, Value::Float(self.value))
                .set(SYM_UNIT, Value::SymbolById(self.unit.symbol_id())),
        )
    }

    /// Parses a dimension struct back out of a [`Value`]. `None` on a
    /// missing field or unrecognized unit — callers treat that as
    /// `InvalidDimension` (§7): recoverable, "treat as identity in merge,
    /// warn".
    pub fn from_value(value: &Value) -> Option<Dimension> {
        let s = value.as_struct()?;
        let raw_value = match s.get(SYM_VALUE)? {
            Value::Float(n) => *n,
            Value::Int(n) => *n as f64,
            _ => return None,
        };
        let unit_id = match s.get(SYM_UNIT)? {
            Value::SymbolById(id) => *id,
            _ => return None,
        };
        let unit = Unit::from_symbol_id(unit_id)?;
        Some(Dimension::new(raw_value, unit))
    }

    /// CSS rendering used by the debug formatter (§4.H): `3.125%`, `1.2em`.
    pub fn to_css(self) -> String {
        format!("{}{}", format_number(self.value), self.unit.css_suffix())
    }
}

fn format_number(n: f64) -> String {
    if n == n.trunc() && n.abs() < 1e15 {
        format!("{n:.0}")
    } else {
        let rounded = (n * 1e6).round() / 1e6;
        format!("{rounded}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_value() {
        let dim = Dimension::new(1.5, Unit::Em);
        let value = dim.to_value();
        let back = Dimension::from_value(&value).unwrap();
        assert_eq!(back, dim);
    }

    #[test]
    fn from_value_rejects_missing_unit() {
        let value = Value::Struct(crate::value::Struct::new().set(SYM_VALUE, Value::Float(1.0)));
        assert!(Dimension::from_value(&value).is_none());
    }

    #[test]
    fn css_rendering_matches_examples() {
        assert_eq!(Dimension::new(3.125, Unit::Percent).to_css(), "3.125%");
        assert_eq!(Dimension::new(1.2, Unit::Em).to_css(), "1.2em");
        assert_eq!(Dimension::new(1.0, Unit::Ratio).to_css(), "1");
    }

    #[test]
    fn relative_ratio_normalizes_percent_and_em() {
        assert_eq!(Unit::Percent.relative_ratio(140.0), 1.4);
        assert_eq!(Unit::Em.relative_ratio(1.4), 1.4);
    }
}
