//! Type definitions for the SMAW knowledge base.
//!
//! These types support TOML deserialization (for loading the reference
//! tables) and JSON serialization (for handing records to a front end).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// REFERENCE TABLES (loaded from TOML)
// =============================================================================

/// Root of the knowledge base, loaded from knowledge.toml.
#[derive(Debug, Clone, Deserialize)]
pub struct KnowledgeBase {
    /// Electrode specs keyed by AWS classification (e.g. "E6010")
    pub electrodes: HashMap<String, ElectrodeSpec>,
    /// Size specs keyed by diameter label (e.g. "1/8\"")
    pub sizes: HashMap<String, ElectrodeSizeSpec>,
    /// Position specs keyed by position name (e.g. "Vertical Up")
    pub positions: HashMap<String, PositionSpec>,
    /// Thickness specs keyed by band label (e.g. "Thin (up to 1/8\")")
    pub thicknesses: HashMap<String, MetalThicknessSpec>,
    /// Joint specs keyed by joint name (e.g. "Butt")
    pub joints: HashMap<String, JointTypeSpec>,
    /// Technique-dimension level descriptions
    pub technique: TechniqueGuide,
    /// Observable puddle/arc states and their diagnoses
    pub observations: ObservationGuide,
}

/// Properties of one electrode classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElectrodeSpec {
    /// Supported machine current (e.g. "DC+ (DCEP) only", "AC or DC+")
    pub current: String,
    /// Penetration depth: Shallow, Moderate, or Deep
    pub penetration: String,
    /// Slag character and removal behavior
    pub slag: String,
    /// Position names this rod runs in
    pub positions: Vec<String>,
    /// What the rod is best used for
    pub best_for: String,
    /// Minimum tensile strength of deposited metal
    pub tensile_strength: String,
    /// Arc force character (digging vs soft)
    pub arc_force: String,
    /// How readable the puddle is under the slag
    pub puddle_visibility: String,
    /// Default motion patterns for this rod
    pub motion_patterns: Vec<String>,
}

/// Properties of one electrode diameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElectrodeSizeSpec {
    /// Amperage range per electrode classification, as "min-max" strings
    pub amperage: HashMap<String, String>,
    /// How controllable this size is
    pub control: String,
    /// Qualitative deposition rate
    pub deposition: String,
    /// What the size is best used for
    pub best_for: String,
}

/// Properties of one welding position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionSpec {
    /// How gravity acts on the puddle in this position
    pub gravity: String,
    /// Where in the electrode's range to set the machine
    pub amperage: String,
    /// Technique guidance
    pub technique: String,
    /// What makes this position hard
    pub challenge: String,
    /// Default rod-angle guidance
    pub rod_angle: String,
}

/// Guidance for one metal thickness band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetalThicknessSpec {
    pub amperage: String,
    pub penetration: String,
    pub technique: String,
    pub rod_angle: String,
}

/// Guidance for one joint type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JointTypeSpec {
    pub amperage: String,
    pub penetration: String,
    pub technique: String,
    pub rod_angle: String,
}

/// Level descriptions for the four technique dimensions.
#[derive(Debug, Clone, Deserialize)]
pub struct TechniqueGuide {
    /// Arc gap levels (Short, Medium, Long)
    pub arc_gap: HashMap<String, TechniqueLevel>,
    /// Travel speed levels (Slow, Medium, Fast)
    pub travel_speed: HashMap<String, TechniqueLevel>,
    /// Rod angle levels (Perpendicular, Drag, Push)
    pub rod_angle: HashMap<String, TechniqueLevel>,
    /// Motion patterns (Straight, Circular, Zigzag, ...)
    pub motion_pattern: HashMap<String, TechniqueLevel>,
}

/// What one level of a technique dimension does.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechniqueLevel {
    /// Effect on the weld
    pub effect: String,
    /// How the puddle behaves at this level
    pub puddle: String,
    /// Where the level is appropriate
    pub suited_for: String,
    /// What the finished bead looks like
    pub appearance: String,
}

/// State descriptions for the four observable dimensions.
#[derive(Debug, Clone, Deserialize)]
pub struct ObservationGuide {
    pub puddle_fluidity: HashMap<String, ObservableState>,
    pub puddle_spread: HashMap<String, ObservableState>,
    pub edge_tie: HashMap<String, ObservableState>,
    pub arc_stability: HashMap<String, ObservableState>,
}

/// Diagnosis record for one observed state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservableState {
    /// What the observation means
    pub diagnosis: String,
    /// Plausible causes, most likely first
    pub causes: Vec<String>,
    /// Suggested corrective adjustments
    pub adjustments: Vec<String>,
}

// =============================================================================
// PARSED VALUES
// =============================================================================

/// An amperage range parsed from a "min-max" table entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmperageRange {
    pub min: f64,
    pub max: f64,
}

impl AmperageRange {
    /// Parse a "min-max" string (e.g. "75-130") into a range.
    ///
    /// Returns `None` for anything that is not two integers joined by a
    /// dash. Malformed entries are a table-authoring problem, not a runtime
    /// error; callers treat `None` as "no amperage data".
    pub fn parse(entry: &str) -> Option<AmperageRange> {
        let (min, max) = entry.split_once('-')?;
        let min: i32 = min.trim().parse().ok()?;
        let max: i32 = max.trim().parse().ok()?;
        Some(AmperageRange {
            min: min as f64,
            max: max as f64,
        })
    }

    /// Format as the display string shown to the welder, e.g. "75-130A".
    /// Bounds are rounded to the nearest whole amp.
    pub fn display(&self) -> String {
        format!("{}-{}A", self.min.round() as i64, self.max.round() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amperage_range_parses_plain_entry() {
        let range = AmperageRange::parse("75-130").unwrap();
        assert_eq!(range.min, 75.0);
        assert_eq!(range.max, 130.0);
    }

    #[test]
    fn test_amperage_range_tolerates_whitespace() {
        let range = AmperageRange::parse(" 40 - 85 ").unwrap();
        assert_eq!(range.min, 40.0);
        assert_eq!(range.max, 85.0);
    }

    #[test]
    fn test_amperage_range_rejects_malformed_entries() {
        assert!(AmperageRange::parse("").is_none());
        assert!(AmperageRange::parse("130").is_none());
        assert!(AmperageRange::parse("low-high").is_none());
        assert!(AmperageRange::parse("75-").is_none());
    }

    #[test]
    fn test_amperage_display_rounds_to_whole_amps() {
        let range = AmperageRange { min: 75.0, max: 97.0 };
        assert_eq!(range.display(), "75-97A");

        let range = AmperageRange { min: 102.4, max: 149.6 };
        assert_eq!(range.display(), "102-150A");
    }

    #[test]
    fn test_observable_state_serializes_for_frontend() {
        let state = ObservableState {
            diagnosis: "Puddle is running cold".to_string(),
            causes: vec!["Amperage set too low".to_string()],
            adjustments: vec!["Raise amperage".to_string()],
        };
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("diagnosis"));
        assert!(json.contains("Raise amperage"));
    }
}
