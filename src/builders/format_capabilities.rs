//! `$format_capabilities` root fragment: the feature/version table readers
//! consult to decide whether they can render this container (§4.G).

use crate::fragment::Fragment;
use crate::value::{Struct, Value};

pub const FTYPE_FORMAT_CAPABILITIES: u64 = 593;

const SYM_CAPABILITIES: u64 = 590;
const SYM_CAPABILITY_NAME: u64 = 586;
const SYM_CAPABILITY_VERSION: u64 = 589;

/// One `{key, version}` capability entry. Keys are literal feature
/// identifier strings (`kfxgen.textBlock`), not symbol-table concepts —
/// readers match them textually against their own supported-feature list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capability {
    pub key: String,
    pub version: u32,
}

impl Capability {
    pub fn new(key: impl Into<String>, version: u32) -> Self {
        Self {
            key: key.into(),
            version,
        }
    }
}

/// The baseline capability set every container built here declares.
pub const DEFAULT_CAPABILITIES: &[(&str, u32)] = &[
    ("kfxgen.textBlock", 1),
    ("kfxgen.positionMaps", 1),
    ("kfxgen.pidMapWithOffset", 1),
];

pub fn default_capabilities() -> Vec<Capability> {
    DEFAULT_CAPABILITIES
        .iter()
        .map(|&(key, version)| Capability::new(key, version))
        .collect()
}

pub fn build_format_capabilities(capabilities: &[Capability]) -> Fragment {
    let entries: Vec<Value> = capabilities
        .iter()
        .map(|c| {
            Value::Struct(
                Struct::new()
                    .set(SYM_CAPABILITY_NAME, Value::String(c.key.clone()))
                    .set(SYM_CAPABILITY_VERSION, Value::Int(c.version as i64)),
            )
        })
        .collect();
    let value = Struct::new().set(SYM_CAPABILITIES, Value::List(entries));
    Fragment::singleton(FTYPE_FORMAT_CAPABILITIES, Value::Struct(value))
}
