//! The CSS-to-KFX style inheritance and merging engine (§4.E, §4.F).

pub mod context;
pub mod definition;
pub mod dimension;
pub mod merge;
pub mod properties;
pub mod registry;

pub use context::StyleContext;
pub use definition::{Provenance, StyleDefinition};
pub use dimension::{Dimension, Unit};
pub use merge::{merge_property, MergeContext, MergeRule};
pub use properties::Property;
pub use registry::{StyleRegistry, UsageTag};
