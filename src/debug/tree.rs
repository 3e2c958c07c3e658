//! Multi-line indented tree formatter — debug level 1 (§4.H).

use crate::symbol::SymbolTable;
use crate::value::Value;

/// Lists at or under this length, containing only non-container values,
/// render inline (`[a, b, c]`) rather than index-annotated (§4.H).
const SHORT_LIST_THRESHOLD: usize = 4;

pub fn render_tree(value: &Value, symbols: &SymbolTable) -> String {
    let mut out = String::new();
    write_node(value, symbols, 0, &mut out);
    out
}

fn write_node(value: &Value, symbols: &SymbolTable, depth: usize, out: &mut String) {
    match value {
        Value::Struct(s) => {
            if s.is_empty() {
                out.push_str("{}");
                return;
            }
            out.push_str("{\n");
            for (key, v) in s.iter_sorted() {
                push_indent(out, depth + 1);
                out.push_str(&symbols.format_symbol(key));
                out.push_str(": ");
                write_node(v, symbols, depth + 1, out);
                out.push('\n');
            }
            push_indent(out, depth);
            out.push('}');
        }
        Value::List(items) => {
            if items.is_empty() {
                out.push_str("[]");
            } else if items.len() <= SHORT_LIST_THRESHOLD && is_all_simple(items) {
                let rendered: Vec<String> = items.iter().map(|v| v.render(symbols)).collect();
                out.push('[');
                out.push_str(&rendered.join(", "));
                out.push(']');
            } else {
                out.push_str("[\n");
                for (i, item) in items.iter().enumerate() {
                    push_indent(out, depth + 1);
                    out.push_str(&format!("{i}: "));
                    write_node(item, symbols, depth + 1, out);
                    out.push('\n');
                }
                push_indent(out, depth);
                out.push(']');
            }
        }
        other => out.push_str(&other.render(symbols)),
    }
}

fn is_all_simple(items: &[Value]) -> bool {
    items.iter().all(|v| !matches!(v, Value::Struct(_) | Value::List(_)))
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}
