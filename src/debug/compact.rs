//! One-line canonical formatter — debug level 2 (§4.H).
//!
//! [`Value::render`] already produces the canonical, deterministic
//! single-line form (sorted struct keys, ordered lists); this module names
//! that entry point as the debug-facing API rather than duplicating it.

use crate::symbol::SymbolTable;
use crate::value::Value;

pub fn render_compact(value: &Value, symbols: &SymbolTable) -> String {
    value.render(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Struct;

    #[test]
    fn compact_matches_value_render() {
        let symbols = SymbolTable::new();
        let value = Value::Struct(Struct::new().set(307, Value::Int(1)));
        assert_eq!(render_compact(&value, &symbols), value.render(&symbols));
    }

    #[test]
    fn compact_is_a_single_line() {
        let symbols = SymbolTable::new();
        let value = Value::List(vec![Value::Int(1), Value::Int(2)]);
        assert!(!render_compact(&value, &symbols).contains('\n'));
    }
}
