//! KFX fragment, symbol, and style-resolution core.
//!
//! This crate owns the parts of a KFX container build that are pure,
//! in-memory, and synchronous: the three-tier symbol table, the tagged
//! [`value::Value`] universe, the [`fragment::FragmentList`] model, the
//! rune-accurate inline-text normalizer, the CSS-to-KFX style merge and
//! inheritance engine, the root fragment builders, and the debug/CSS
//! formatters. Parsing FB2/CSS, packaging fonts, and Ion binary encoding
//! are the responsibility of external collaborators (§1, §6).

pub mod builders;
pub mod content;
pub mod debug;
pub mod error;
pub mod fragment;
pub mod style;
pub mod symbol;
pub mod text;
pub mod value;

pub use error::{Diagnostic, Diagnostics, Error, Result, Severity};
pub use fragment::{Fragment, FragmentId, FragmentList};
pub use symbol::SymbolTable;
pub use text::NormalizingWriter;
pub use value::{Decimal, Struct, Value};
