//! Static SMAW reference knowledge.
//!
//! The knowledge base is a read-only set of lookup tables loaded from TOML:
//! electrode classifications, size/amperage charts, welding positions,
//! thickness bands, joint types, technique-dimension levels, and observable
//! puddle states. It is fixed once loaded and shared read-only; every
//! lookup returns `Option` rather than panicking on an unknown key.

mod tables;
mod types;
mod validation;

pub use tables::{default_knowledge, load_knowledge};
pub use types::*;
pub use validation::{validate_knowledge, ValidationWarning};
