//! The fragment model: typed, symbol-keyed records with root/raw
//! classification and deterministic ordering (§3, §4.C).

use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};
use crate::symbol::SymbolTable;
use crate::value::Value;

/// Fragment types that are singletons: for these, exactly one fragment in
/// a container has `fid == ftype` (§3 "Root").
pub const ROOT_FRAGMENT_TYPES: &[u64] = &[
    258, // $metadata
    599, // $book_metadata
    538, // $document_data
    593, // $format_capabilities
];

/// Fragment types whose value is carried as an opaque byte payload rather
/// than a structured [`Value`] (§3 "Raw").
pub const RAW_FRAGMENT_TYPES: &[u64] = &[
    601, // $bcRawFont
];

/// A fragment's identifier: either an already-resolved numeric symbol, or
/// a write-time name resolved against the local symbol table before
/// serialization (§3 "fidname").
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FragmentId {
    Id(u64),
    Name(String),
}

impl FragmentId {
    /// Resolves this id to a numeric symbol, interning an unregistered
    /// name if necessary (§9 "Symbol-by-name deferred resolution").
    pub fn resolve(&self, symbols: &mut SymbolTable) -> u64 {
        match self {
            FragmentId::Id(id) => *id,
            FragmentId::Name(name) => symbols.intern(name),
        }
    }

    /// Resolves without mutating the table; `None` if the name isn't
    /// registered yet.
    pub fn resolve_ref(&self, symbols: &SymbolTable) -> Option<u64> {
        match self {
            FragmentId::Id(id) => Some(*id),
            FragmentId::Name(name) => symbols.find_id(name),
        }
    }
}

impl std::fmt::Display for FragmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FragmentId::Id(id) => write!(f, "{id}"),
            FragmentId::Name(name) => write!(f, "{name}"),
        }
    }
}

/// A top-level KFX record (§3).
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub ftype: u64,
    pub id: FragmentId,
    pub value: Value,
}

impl Fragment {
    pub fn new(ftype: u64, id: u64, value: Value) -> Self {
        Self {
            ftype,
            id: FragmentId::Id(id),
            value,
        }
    }

    pub fn new_named(ftype: u64, name: impl Into<String>, value: Value) -> Self {
        Self {
            ftype,
            id: FragmentId::Name(name.into()),
            value,
        }
    }

    /// A singleton root fragment: `fid == ftype` (§3).
    pub fn singleton(ftype: u64, value: Value) -> Self {
        Self::new(ftype, ftype, value)
    }

    pub fn raw(ftype: u64, id: u64, payload: Vec<u8>) -> Self {
        Self::new(ftype, id, Value::Raw(payload))
    }

    pub fn is_root(&self) -> bool {
        matches!(&self.id, FragmentId::Id(id) if *id == self.ftype)
    }

    pub fn is_raw_type(&self) -> bool {
        RAW_FRAGMENT_TYPES.contains(&self.ftype)
    }

    fn key(&self) -> (u64, FragmentId) {
        (self.ftype, self.id.clone())
    }
}

/// The canonical ordered collection of fragments (§3, §4.C).
///
/// `Clone` duplicates the index structure only; [`Value`] itself is plain
/// owned data in this crate, so cloning a `FragmentList` already clones
/// fragment values independently — there is no shared mutable state to
/// alias.
#[derive(Debug, Clone, Default)]
pub struct FragmentList {
    items: Vec<Fragment>,
    by_type: HashMap<u64, Vec<usize>>,
    keys: HashSet<(u64, FragmentId)>,
}

impl FragmentList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects a duplicate composite key `(ftype, fid|fidname)` (§4.C).
    pub fn add(&mut self, fragment: Fragment) -> Result<()> {
        let key = fragment.key();
        if self.keys.contains(&key) {
            return Err(Error::DuplicateFragmentKey {
                ftype: fragment.ftype.to_string(),
                fid: fragment.id.to_string(),
            });
        }
        self.keys.insert(key);
        let idx = self.items.len();
        self.by_type.entry(fragment.ftype).or_default().push(idx);
        self.items.push(fragment);
        Ok(())
    }

    pub fn get(&self, ftype: u64, id: &FragmentId) -> Option<&Fragment> {
        self.by_type.get(&ftype)?.iter().find_map(|&idx| {
            let f = &self.items[idx];
            (&f.id == id).then_some(f)
        })
    }

    pub fn get_root(&self, ftype: u64) -> Option<&Fragment> {
        self.by_type
            .get(&ftype)?
            .iter()
            .map(|&idx| &self.items[idx])
            .find(|f| f.is_root())
    }

    /// Fragments of `ftype`, in insertion order.
    pub fn get_by_type(&self, ftype: u64) -> Vec<&Fragment> {
        self.by_type
            .get(&ftype)
            .map(|idxs| idxs.iter().map(|&idx| &self.items[idx]).collect())
            .unwrap_or_default()
    }

    pub fn all(&self) -> &[Fragment] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct fragment types present, strictly ascending by symbol ID
    /// (§4.C, §8 property 3).
    pub fn types(&self) -> Vec<u64> {
        let mut types: Vec<u64> = self.by_type.keys().copied().collect();
        types.sort_unstable();
        types
    }

    pub fn remove(&mut self, ftype: u64, id: &FragmentId) -> Option<Fragment> {
        let idxs = self.by_type.get_mut(&ftype)?;
        let pos = idxs.iter().position(|&idx| &self.items[idx].id == id)?;
        let idx = idxs.remove(pos);
        self.keys.remove(&(ftype, id.clone()));
        // Removing from the middle of `items` would invalidate every other
        // index; tombstone instead and compact lazily via `all()`/`len()`
        // accepting the removed slot until the next full rebuild.
        let removed = self.items[idx].clone();
        self.rebuild_without(idx);
        Some(removed)
    }

    fn rebuild_without(&mut self, removed_idx: usize) {
        let kept: Vec<Fragment> = self
            .items
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != removed_idx)
            .map(|(_, f)| f.clone())
            .collect();
        self.items = kept;
        self.by_type.clear();
        self.keys.clear();
        for (idx, f) in self.items.iter().enumerate() {
            self.by_type.entry(f.ftype).or_default().push(idx);
            self.keys.insert(f.key());
        }
    }

    /// Fragments of `ftype`, root-first, then by resolved numeric FID
    /// ascending (§4.C, §8 property 3). Fragments whose `fidname` has no
    /// entry in `symbols` sort last, in insertion order among themselves.
    pub fn get_by_type_sorted(&self, ftype: u64, symbols: &SymbolTable) -> Vec<&Fragment> {
        let mut fragments = self.get_by_type(ftype);
        fragments.sort_by_key(|f| {
            let resolved = f.id.resolve_ref(symbols);
            (!f.is_root(), resolved.is_none(), resolved.unwrap_or(u64::MAX))
        });
        fragments
    }

    /// The entire list ordered by ftype ascending, then by
    /// [`FragmentList::get_by_type_sorted`] within each type.
    pub fn sorted_by_type(&self, symbols: &SymbolTable) -> Vec<&Fragment> {
        self.types()
            .into_iter()
            .flat_map(|ftype| self.get_by_type_sorted(ftype, symbols))
            .collect()
    }
}
