//! Three-tier symbol resolution: system, import (`YJ_symbols`), local (§3, §4.A).

pub mod yj;

use std::collections::HashMap;

/// Ion system symbols, IDs 1–9, fixed by the Ion specification.
pub const SYSTEM_SYMBOLS: &[(u64, &str)] = &[
    (1, "$ion"),
    (2, "$ion_1_0"),
    (3, "$ion_symbol_table"),
    (4, "name"),
    (5, "version"),
    (6, "imports"),
    (7, "symbols"),
    (8, "max_id"),
    (9, "$ion_shared_symbol_table"),
];

/// Describes one tier contributing a contiguous ID range, for ordering and
/// for the debug dump ("imports are listed first, always in the order
/// `[$ion, YJ_symbols, ...other]`", §4.A).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportDescriptor {
    pub name: &'static str,
    pub version: u32,
    pub first_id: u64,
    pub max_id: u64,
}

/// A summary used by the debug formatter (no full name dump).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTableSummary {
    pub imports: Vec<ImportDescriptor>,
    pub local_count: usize,
    pub max_id: u64,
}

/// Returns `true` if `s` is the ID-placeholder shorthand `$N` (all-digit
/// suffix) rather than a registered mnemonic name such as `$metadata`.
///
/// Per §3: "names beginning with `$` that do not decode to a known ID are
/// treated as placeholders (never as user-visible names)" — the decoding
/// rule applies only to the pure-digit form, since YJ_symbols itself
/// registers mnemonic names that also begin with `$`.
pub fn is_id_placeholder(s: &str) -> bool {
    match s.strip_prefix('$') {
        Some(rest) => !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

/// The three-tier symbol table for one build session.
///
/// Owned by the caller (§9: "must be parameters to the build, not
/// process-level singletons").
#[derive(Debug, Clone)]
pub struct SymbolTable {
    names_by_id: HashMap<u64, String>,
    ids_by_name: HashMap<String, u64>,
    local_next_id: u64,
    local_ids: Vec<u64>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    pub fn new() -> Self {
        let mut names_by_id = HashMap::new();
        let mut ids_by_name = HashMap::new();
        for &(id, name) in SYSTEM_SYMBOLS {
            names_by_id.insert(id, name.to_string());
            ids_by_name.insert(name.to_string(), id);
        }
        for &(id, name) in yj::SYMBOLS {
            names_by_id.insert(id, name.to_string());
            ids_by_name.insert(name.to_string(), id);
        }
        let local_next_id = yj::max_id() + 1;
        Self {
            names_by_id,
            ids_by_name,
            local_next_id,
            local_ids: Vec::new(),
        }
    }

    /// Name → ID, searching imports then locals (§4.A).
    pub fn find_id(&self, name: &str) -> Option<u64> {
        self.ids_by_name.get(name).copied()
    }

    /// ID → name; `None` for unknown IDs — callers render `$N` themselves
    /// via [`SymbolTable::format_symbol`].
    pub fn find_name(&self, id: u64) -> Option<&str> {
        self.names_by_id.get(&id).map(String::as_str)
    }

    /// Returns the existing ID for `name` if interned, otherwise appends it
    /// to the local tier and returns the freshly assigned ID.
    pub fn intern(&mut self, name: &str) -> u64 {
        if let Some(&id) = self.ids_by_name.get(name) {
            return id;
        }
        let id = self.local_next_id;
        self.local_next_id += 1;
        self.names_by_id.insert(id, name.to_string());
        self.ids_by_name.insert(name.to_string(), id);
        self.local_ids.push(id);
        id
    }

    /// Highest ID assigned so far (import max, or the last local symbol).
    pub fn max_id(&self) -> u64 {
        self.local_next_id.saturating_sub(1)
    }

    /// Lowest ID a local symbol may take — one past the YJ_symbols range.
    pub fn local_min_id(&self) -> u64 {
        yj::max_id() + 1
    }

    /// Local symbols in assignment order, the shape a caller serializes
    /// as the document's own symbol table (§6 Outputs).
    pub fn local_symbols(&self) -> Vec<(u64, &str)> {
        self.local_ids
            .iter()
            .map(|&id| (id, self.names_by_id[&id].as_str()))
            .collect()
    }

    /// Registered name, or the `$N` placeholder for an unknown ID (§4.A).
    pub fn format_symbol(&self, id: u64) -> String {
        match self.find_name(id) {
            Some(name) => name.to_string(),
            None => format!("${id}"),
        }
    }

    /// The import tiers, in emission order: `$ion` (system), then
    /// `YJ_symbols`. This crate carries no "other" imports, but the order
    /// invariant from §4.A is preserved for callers that append more.
    pub fn imports(&self) -> Vec<ImportDescriptor> {
        vec![
            ImportDescriptor {
                name: "$ion",
                version: 1,
                first_id: 1,
                max_id: 9,
            },
            ImportDescriptor {
                name: yj::NAME,
                version: yj::VERSION,
                first_id: yj::FIRST_ID,
                max_id: yj::max_id(),
            },
        ]
    }

    pub fn summarize(&self) -> SymbolTableSummary {
        SymbolTableSummary {
            imports: self.imports(),
            local_count: self.local_ids.len(),
            max_id: self.max_id(),
        }
    }
}
