//! Debug/CSS formatters: tree, compact, and stats-only renderings, plus a
//! symbol-table summary dump (§4.H, SPEC_FULL B.1).

pub mod compact;
pub mod css;
pub mod tree;

pub use compact::render_compact;
pub use css::render_declarations;
pub use tree::render_tree;

use crate::fragment::FragmentList;
use crate::symbol::SymbolTable;

/// Level-3 stats-only summary: counts only, no values (§4.H).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FragmentListStats {
    pub fragment_count: usize,
    pub type_count: usize,
    pub root_count: usize,
}

pub fn stats(fragments: &FragmentList) -> FragmentListStats {
    let root_count = fragments.all().iter().filter(|f| f.is_root()).count();
    FragmentListStats {
        fragment_count: fragments.len(),
        type_count: fragments.types().len(),
        root_count,
    }
}

/// A one-line human summary of a symbol table's tier boundaries (SPEC_FULL
/// B.1 "SymbolTable debug dump").
pub fn symbol_table_summary_line(symbols: &SymbolTable) -> String {
    let summary = symbols.summarize();
    let imports: Vec<String> = summary
        .imports
        .iter()
        .map(|i| format!("{}@{} [{}-{}]", i.name, i.version, i.first_id, i.max_id))
        .collect();
    format!(
        "imports: {} | locals: {} | max_id: {}",
        imports.join(", "),
        summary.local_count,
        summary.max_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::Fragment;
    use crate::value::Value;

    #[test]
    fn stats_counts_fragments_types_and_roots() {
        let mut fragments = FragmentList::new();
        fragments.add(Fragment::singleton(258, Value::Null)).unwrap();
        fragments.add(Fragment::new(260, 1, Value::Null)).unwrap();
        fragments.add(Fragment::new(260, 2, Value::Null)).unwrap();
        let s = stats(&fragments);
        assert_eq!(s.fragment_count, 3);
        assert_eq!(s.type_count, 2);
        assert_eq!(s.root_count, 1);
    }

    #[test]
    fn symbol_table_summary_line_names_both_imports() {
        let symbols = SymbolTable::new();
        let line = symbol_table_summary_line(&symbols);
        assert!(line.contains("$ion@"));
        assert!(line.contains("YJ_symbols@"));
        assert!(line.contains("locals: 0"));
    }
}
