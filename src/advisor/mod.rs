//! Technique advisor for stick welding.
//!
//! Derives a recommendation record from a snapshot of the welding setup
//! (electrode, size, position, thickness, joint, machine) plus optional
//! live puddle observations.
//!
//! # Architecture
//!
//! - **Knowledge**: static reference tables resolved through [`crate::knowledge`]
//! - **Derivation**: snapshot -> amperage/rod angle/travel speed/arc gap/motion patterns
//! - **Adjustments**: corrective messages appended in priority order
//!   (heat, puddle spread, edge tie-in, arc stability)
//! - **Fail-soft**: unknown keys leave result fields unset, never error
//!
//! # Example
//!
//! ```
//! use arcmate::advisor::{ParameterSnapshot, RecommendationEngine};
//! use arcmate::knowledge::default_knowledge;
//!
//! let engine = RecommendationEngine::new(default_knowledge());
//!
//! let snapshot = ParameterSnapshot {
//!     electrode: "E6010".to_string(),
//!     electrode_size: "1/8\"".to_string(),
//!     position: "Flat".to_string(),
//!     thickness: "Medium (1/8\"-3/16\")".to_string(),
//!     joint_type: "Butt".to_string(),
//!     machine_type: "DC+".to_string(),
//!     ..Default::default()
//! };
//!
//! let result = engine.recommend(&snapshot);
//! assert_eq!(result.amperage.as_deref(), Some("75-130A"));
//! ```

mod engine;
mod types;

pub use engine::RecommendationEngine;
pub use types::*;
