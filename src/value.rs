//! The KFX value universe (§3, §4.B): a tagged sum type every fragment,
//! struct field, and style property value is built from.

use crate::symbol::SymbolTable;

/// An arbitrary-precision decimal, carried verbatim (Ion binary encoding of
/// decimals is out of scope here — see `error.rs` doc comment on scope).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decimal(String);

impl Decimal {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Decimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A symbol-ID-keyed struct (§3: "struct keys are symbol IDs; ... insertion
/// order irrelevant"). Stored as a vector rather than a `BTreeMap` so that
/// [`Struct::set`] can preserve first-insertion tie-breaking while
/// [`Struct::keys_sorted`] still reports ascending order for formatters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Struct {
    entries: Vec<(u64, Value)>,
}

impl Struct {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`, replacing any existing entry, and returns `self` for
    /// chaining (§4.B: "mutation returns the struct for chaining").
    pub fn set(mut self, key: u64, value: Value) -> Self {
        self.set_mut(key, value);
        self
    }

    pub fn set_mut(&mut self, key: u64, value: Value) -> &mut Self {
        if let Some(existing) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            existing.1 = value;
        } else {
            self.entries.push((key, value));
        }
        self
    }

    pub fn get(&self, key: u64) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn remove(&mut self, key: u64) -> Option<Value> {
        let idx = self.entries.iter().position(|(k, _)| *k == key)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn contains_key(&self, key: u64) -> bool {
        self.entries.iter().any(|(k, _)| *k == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in ascending symbol-ID order, the order every formatter iterates
    /// struct fields in (§4.B, §4.H, §9).
    pub fn keys_sorted(&self) -> Vec<u64> {
        let mut keys: Vec<u64> = self.entries.iter().map(|(k, _)| *k).collect();
        keys.sort_unstable();
        keys
    }

    pub fn iter_sorted(&self) -> impl Iterator<Item = (u64, &Value)> {
        self.keys_sorted()
            .into_iter()
            .map(move |k| (k, self.get(k).expect("key came from keys_sorted")))
    }

    /// Typed accessor returning `(value, ok)` (§4.B).
    pub fn get_int(&self, key: u64) -> (i64, bool) {
        match self.get(key) {
            Some(Value::Int(n)) => (*n, true),
            _ => (0, false),
        }
    }

    pub fn get_str(&self, key: u64) -> (&str, bool) {
        match self.get(key) {
            Some(Value::String(s)) => (s.as_str(), true),
            _ => ("", false),
        }
    }

    pub fn get_bool(&self, key: u64) -> (bool, bool) {
        match self.get(key) {
            Some(Value::Bool(b)) => (*b, true),
            _ => (false, false),
        }
    }

    pub fn get_float(&self, key: u64) -> (f64, bool) {
        match self.get(key) {
            Some(Value::Float(n)) => (*n, true),
            _ => (0.0, false),
        }
    }
}

/// The tagged value universe (§3). One variant per case named there.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Decimal(Decimal),
    String(String),
    Blob(Vec<u8>),
    /// A resolved numeric symbol reference.
    SymbolById(u64),
    /// An unresolved write-time reference, resolved against the local
    /// symbol table at finalization (§9 "Symbol-by-name deferred
    /// resolution").
    SymbolByName(String),
    /// A decoded name carrying no ID (e.g. from externally-parsed input
    /// that only has a string).
    ReadSymbol(String),
    Struct(Struct),
    List(Vec<Value>),
    /// An opaque payload carried verbatim, used by raw fragment types.
    Raw(Vec<u8>),
}

impl Value {
    pub fn as_struct(&self) -> Option<&Struct> {
        match self {
            Value::Struct(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Deterministic string rendering (§4.B), resolving symbol names
    /// through `symbols`. Unknown symbol IDs render as `$N`; struct keys
    /// are visited in ascending-ID order.
    pub fn render(&self, symbols: &SymbolTable) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(n) => format!("int({n})"),
            Value::Float(n) => format!("float({})", render_float(*n)),
            Value::Decimal(d) => d.to_string(),
            Value::String(s) => format!("{s:?}"),
            Value::Blob(bytes) => format!("<blob {} bytes>", bytes.len()),
            Value::SymbolById(id) => format!("symbol({})", symbols.format_symbol(*id)),
            Value::SymbolByName(name) => format!("symbol({name})"),
            Value::ReadSymbol(name) => format!("symbol({name})"),
            Value::Raw(bytes) => format!("raw({} bytes)", bytes.len()),
            Value::Struct(s) => {
                let fields: Vec<String> = s
                    .iter_sorted()
                    .map(|(key, value)| {
                        format!("{}: {}", symbols.format_symbol(key), value.render(symbols))
                    })
                    .collect();
                format!("{{{}}}", fields.join(", "))
            }
            Value::List(items) => {
                let rendered: Vec<String> = items.iter().map(|v| v.render(symbols)).collect();
                format!("[{}]", rendered.join(", "))
            }
        }
    }
}

/// Minimum-precision float formatting (§4.B: "floats as `float(G)` with
/// minimum-precision formatting"), matching Go's `%g`-style shortest
/// round-trippable representation without trailing zeroes.
fn render_float(n: f64) -> String {
    if n == n.trunc() && n.abs() < 1e15 {
        format!("{n:.0}")
    } else {
        let s = format!("{n}");
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols() -> SymbolTable {
        SymbolTable::new()
    }

    #[test]
    fn struct_set_replaces_existing_key() {
        let s = Struct::new().set(1, Value::Int(1)).set(1, Value::Int(2));
        assert_eq!(s.len(), 1);
        assert_eq!(s.get_int(1), (2, true));
    }

    #[test]
    fn struct_keys_sorted_ascending() {
        let s = Struct::new()
            .set(307, Value::Int(1))
            .set(306, Value::Int(2))
            .set(1, Value::Int(3));
        assert_eq!(s.keys_sorted(), vec![1, 306, 307]);
    }

    #[test]
    fn render_int_float_string_blob_raw() {
        let t = symbols();
        assert_eq!(Value::Int(42).render(&t), "int(42)");
        assert_eq!(Value::Float(1.5).render(&t), "float(1.5)");
        assert_eq!(Value::Float(2.0).render(&t), "float(2)");
        assert_eq!(Value::String("hi".into()).render(&t), "\"hi\"");
        assert_eq!(Value::Blob(vec![0; 4]).render(&t), "<blob 4 bytes>");
        assert_eq!(Value::Raw(vec![0; 3]).render(&t), "raw(3 bytes)");
    }

    #[test]
    fn render_symbol_known_and_unknown() {
        let t = symbols();
        assert_eq!(Value::SymbolById(258).render(&t), "symbol($metadata)");
        assert_eq!(Value::SymbolById(999_999).render(&t), "symbol($999999)");
    }

    #[test]
    fn render_struct_sorts_by_symbol_id() {
        let t = symbols();
        let s = Struct::new()
            .set(307, Value::Int(2))
            .set(306, Value::SymbolById(308));
        let rendered = Value::Struct(s).render(&t);
        assert_eq!(rendered, "{$unit: symbol($em), $value: int(2)}");
    }

    #[test]
    fn render_list_preserves_order() {
        let t = symbols();
        let rendered = Value::List(vec![Value::Int(1), Value::Int(2)]).render(&t);
        assert_eq!(rendered, "[int(1), int(2)]");
    }
}
