use super::types::{AmperageRange, KnowledgeBase};
use serde::Serialize;

/// A warning produced by knowledge table validation.
/// Warnings indicate an authoring mistake in the tables, not a runtime
/// error; the advisor treats bad entries as missing data either way.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationWarning {
    /// Dotted path of the offending entry (e.g. "sizes.1/8\".amperage.E6010")
    pub field: String,
    /// Human-readable warning message
    pub message: String,
    /// The offending value
    pub value: String,
}

/// Validate the cross-references and range entries in a knowledge base.
/// Returns a list of warnings for entries a table author should fix.
pub fn validate_knowledge(kb: &KnowledgeBase) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Every amperage entry must name a known electrode and parse as a
    // well-ordered "min-max" range.
    for (diameter, size) in &kb.sizes {
        for (classification, entry) in &size.amperage {
            let field = format!("sizes.{}.amperage.{}", diameter, classification);

            if !kb.electrodes.contains_key(classification) {
                warnings.push(ValidationWarning {
                    field: field.clone(),
                    message: format!("Unknown electrode classification {}", classification),
                    value: classification.clone(),
                });
            }

            match AmperageRange::parse(entry) {
                None => warnings.push(ValidationWarning {
                    field,
                    message: "Amperage entry is not a min-max integer range".to_string(),
                    value: entry.clone(),
                }),
                Some(range) if range.min > range.max => warnings.push(ValidationWarning {
                    field,
                    message: format!("Amperage min {} exceeds max {}", range.min, range.max),
                    value: entry.clone(),
                }),
                Some(_) => {}
            }
        }
    }

    // Electrode position and motion-pattern references must resolve.
    for (classification, spec) in &kb.electrodes {
        for position in &spec.positions {
            if !kb.positions.contains_key(position) {
                warnings.push(ValidationWarning {
                    field: format!("electrodes.{}.positions", classification),
                    message: format!("References unknown position {:?}", position),
                    value: position.clone(),
                });
            }
        }
        for pattern in &spec.motion_patterns {
            if !kb.technique.motion_pattern.contains_key(pattern) {
                warnings.push(ValidationWarning {
                    field: format!("electrodes.{}.motion_patterns", classification),
                    message: format!("References unknown motion pattern {:?}", pattern),
                    value: pattern.clone(),
                });
            }
        }
    }

    warnings
}
