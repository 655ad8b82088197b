//! arcmate: a stick-welding (SMAW) technique advisor.
//!
//! Encodes SMAW reference knowledge (electrode charts, position and joint
//! guidance, technique effects) and derives machine settings and technique
//! recommendations from a snapshot of the welding setup plus optional live
//! puddle observations. The advisor is a pure, synchronous computation;
//! callers may invoke it concurrently against a shared knowledge base.

pub mod advisor;
mod error;
pub mod knowledge;

pub use error::KnowledgeError;
