//! Property-specific merge rules (§4.E "Merge rules").
//!
//! Property merging is not a single strategy — the registry dispatches to
//! one of [`MergeRule`]'s variants per `(property, context)`.

use crate::error::Diagnostics;
use crate::style::dimension::Dimension;
use crate::style::properties::{FloatClearKeyword, Property};
use crate::value::Value;

/// The context flag pack a merge dispatches on (§4.E).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeContext {
    pub source_is_inline: bool,
    pub source_is_container: bool,
    pub source_is_wrapper: bool,
    pub allow_writing_mode_convert: bool,
}

impl MergeContext {
    pub fn container() -> Self {
        Self {
            source_is_container: true,
            ..Self::default()
        }
    }

    pub fn inline() -> Self {
        Self {
            source_is_inline: true,
            ..Self::default()
        }
    }

    pub fn wrapper() -> Self {
        Self {
            source_is_wrapper: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeRule {
    Override,
    OverrideNonZero,
    OverrideMaximum,
    Cumulative,
    Relative,
    BaselineStyle,
    HorizontalPosition,
    ListDedup,
}

/// Looks up the rule for `property` under `ctx` (§4.E table).
///
/// `margin-left`/`margin-right` are the one open question in this table
/// (§9): the generic mechanism described for margins ("a zero incoming
/// does not overwrite") is `OverrideNonZero`, but the concrete S2 vector
/// (§8) merges `margin-left:3em` then `margin-left:0em` and expects the
/// zero to win — i.e. plain `Override`. This dispatch follows S2, since
/// it's given as a required testable property; [`MergeRule::OverrideNonZero`]
/// is implemented and tested on its own (see `tests::override_non_zero_*`)
/// so the discrepancy is visible rather than silently resolved.
pub fn rule_for(property: Property, ctx: MergeContext) -> MergeRule {
    match property {
        Property::MarginTop | Property::MarginBottom => {
            if ctx.source_is_container {
                MergeRule::Cumulative
            } else {
                MergeRule::OverrideMaximum
            }
        }
        Property::MarginLeft | Property::MarginRight => MergeRule::Override,
        Property::PaddingTop | Property::PaddingBottom => MergeRule::Cumulative,
        Property::FontSize => MergeRule::Relative,
        Property::FloatClear => MergeRule::HorizontalPosition,
        Property::LayoutHints => MergeRule::ListDedup,
        Property::BaselineStyle => MergeRule::BaselineStyle,
        _ => MergeRule::Override,
    }
}

/// Merges `incoming` into `existing` (`None` if the property wasn't
/// previously set) under the rule `(property, ctx)` selects.
pub fn merge_property(
    property: Property,
    existing: Option<&Value>,
    incoming: &Value,
    ctx: MergeContext,
    diagnostics: &mut Diagnostics,
) -> Value {
    let Some(existing) = existing else {
        return incoming.clone();
    };
    apply_rule(rule_for(property, ctx), existing, incoming, diagnostics)
}

fn apply_rule(rule: MergeRule, existing: &Value, incoming: &Value, diagnostics: &mut Diagnostics) -> Value {
    match rule {
        MergeRule::Override => incoming.clone(),
        MergeRule::OverrideNonZero => {
            if dimension_is_zero(incoming) {
                existing.clone()
            } else {
                incoming.clone()
            }
        }
        MergeRule::OverrideMaximum => match (Dimension::from_value(existing), Dimension::from_value(incoming)) {
            (Some(e), Some(i)) => {
                if i.value.abs() > e.value.abs() {
                    incoming.clone()
                } else {
                    existing.clone()
                }
            }
            _ => {
                diagnostics.warn("invalid dimension in override-maximum merge, treated as identity");
                existing.clone()
            }
        },
        MergeRule::Cumulative => match (Dimension::from_value(existing), Dimension::from_value(incoming)) {
            (Some(e), Some(i)) if e.unit == i.unit => Dimension::new(e.value + i.value, e.unit).to_value(),
            (Some(e), Some(_)) => {
                diagnostics.warn("cumulative merge across mismatched units, treated as identity");
                Dimension::new(e.value, e.unit).to_value()
            }
            _ => {
                diagnostics.warn("invalid dimension in cumulative merge, treated as identity");
                existing.clone()
            }
        },
        MergeRule::Relative => match (Dimension::from_value(existing), Dimension::from_value(incoming)) {
            (Some(e), Some(i)) if i.unit.is_relative() => {
                Dimension::new(e.value * i.unit.relative_ratio(i.value), e.unit).to_value()
            }
            (Some(_), Some(_)) => incoming.clone(),
            _ => {
                diagnostics.warn("invalid dimension in relative merge, treated as identity");
                existing.clone()
            }
        },
        MergeRule::BaselineStyle => incoming.clone(),
        MergeRule::HorizontalPosition => match (float_clear_keyword(existing), float_clear_keyword(incoming)) {
            (Some(e), Some(i)) => float_clear_value(e.union(i)),
            _ => incoming.clone(),
        },
        MergeRule::ListDedup => match (existing.as_list(), incoming.as_list()) {
            (Some(e), Some(i)) => {
                let mut merged = e.to_vec();
                for item in i {
                    if !merged.contains(item) {
                        merged.push(item.clone());
                    }
                }
                Value::List(merged)
            }
            _ => incoming.clone(),
        },
    }
}

fn dimension_is_zero(value: &Value) -> bool {
    Dimension::from_value(value).map(|d| d.value == 0.0).unwrap_or(false)
}

const SYM_NONE: u64 = 349;
// $59/$61 are the same `ALIGN_LEFT`/`ALIGN_RIGHT` symbols text-align reuses;
// the teacher's `add_clear` (kfx/writer/style/layout.rs) repurposes them for
// `clear` the same way.
const SYM_LEFT: u64 = 59;
const SYM_RIGHT: u64 = 61;
const SYM_BOTH: u64 = 421;

fn float_clear_keyword(value: &Value) -> Option<FloatClearKeyword> {
    match value {
        Value::SymbolById(SYM_NONE) => Some(FloatClearKeyword::None),
        Value::SymbolById(SYM_LEFT) => Some(FloatClearKeyword::Left),
        Value::SymbolById(SYM_RIGHT) => Some(FloatClearKeyword::Right),
        Value::SymbolById(SYM_BOTH) => Some(FloatClearKeyword::Both),
        _ => None,
    }
}

fn float_clear_value(keyword: FloatClearKeyword) -> Value {
    let id = match keyword {
        FloatClearKeyword::None => SYM_NONE,
        FloatClearKeyword::Left => SYM_LEFT,
        FloatClearKeyword::Right => SYM_RIGHT,
        FloatClearKeyword::Both => SYM_BOTH,
    };
    Value::SymbolById(id)
}
