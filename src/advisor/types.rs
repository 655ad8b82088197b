//! Type definitions for the technique advisor.
//!
//! The snapshot is JSON-friendly for front ends: setup fields are free
//! text matching the knowledge table keys, observation fields are enums
//! that default to the nominal "weld is going fine" state when omitted.

use serde::{Deserialize, Serialize};

// =============================================================================
// INPUT (one snapshot per invocation, caller-constructed)
// =============================================================================

/// A snapshot of the welding setup plus optional live puddle observations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParameterSnapshot {
    /// Electrode classification (e.g. "E6010")
    pub electrode: String,
    /// Electrode diameter label (e.g. "1/8\"")
    pub electrode_size: String,
    /// Welding position (e.g. "Vertical Up")
    pub position: String,
    /// Metal thickness band label (e.g. "Medium (1/8\"-3/16\")")
    pub thickness: String,
    /// Joint type (e.g. "Butt")
    pub joint_type: String,
    /// Machine output (e.g. "DC+", "AC")
    pub machine_type: String,

    // === Live observations, nominal when omitted ===
    #[serde(default)]
    pub puddle_fluidity: PuddleFluidity,
    #[serde(default)]
    pub puddle_spread: PuddleSpread,
    #[serde(default)]
    pub edge_tie: EdgeTie,
    #[serde(default)]
    pub arc_stability: ArcStability,
}

/// Observed fluidity of the weld puddle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PuddleFluidity {
    Stiff,
    #[default]
    Moderate,
    #[serde(rename = "Very Fluid")]
    VeryFluid,
}

/// Observed width of the puddle relative to the joint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PuddleSpread {
    Narrow,
    #[default]
    Moderate,
    Wide,
}

/// Observed fusion quality at the bead toes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EdgeTie {
    Poor,
    #[default]
    Adequate,
}

/// Observed arc behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ArcStability {
    Unstable,
    #[default]
    Stable,
}

// =============================================================================
// OUTPUT (engine-constructed, immutable once returned)
// =============================================================================

/// Complete recommendation for one snapshot.
///
/// Any field may be absent when the snapshot names keys the knowledge base
/// does not know; a partial recommendation is still useful.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecommendationResult {
    /// Machine setting as "min-maxA", narrowed for thickness and position
    pub amperage: Option<String>,
    /// Arc gap level to hold
    pub arc_gap: Option<String>,
    /// Rod angle guidance
    pub rod_angle: Option<String>,
    /// Travel speed guidance
    pub travel_speed: Option<String>,
    /// Suggested motion patterns, preferred first
    pub motion_patterns: Vec<String>,
    /// Corrective adjustments in priority order: heat, spread, tie-in, arc
    pub adjustments: Vec<String>,
}

// =============================================================================
// LABEL CLASSIFIERS
// =============================================================================
// Snapshot setup fields stay free text so they can double as table keys;
// the engine classifies them into these enums for branching. Unknown labels
// fall through to `Other` and take the fail-soft path.

/// Welding position, classified from a snapshot label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Position {
    Flat,
    Horizontal,
    VerticalUp,
    VerticalDown,
    Overhead,
    Other(String),
}

impl Position {
    /// Classify a position label using case-insensitive substring matching.
    /// "Vertical" without a direction is treated as vertical up, the usual
    /// meaning on a weld procedure.
    pub fn from_label(input: &str) -> Position {
        let lower = input.to_lowercase();

        if lower.contains("vertical") && lower.contains("down") {
            Position::VerticalDown
        } else if lower.contains("vertical") {
            Position::VerticalUp
        } else if lower.contains("overhead") {
            Position::Overhead
        } else if lower.contains("horizontal") {
            Position::Horizontal
        } else if lower.contains("flat") {
            Position::Flat
        } else {
            Position::Other(input.to_string())
        }
    }
}

/// Joint geometry, classified from a snapshot label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JointKind {
    Butt,
    Lap,
    Tee,
    Corner,
    Edge,
    Other(String),
}

impl JointKind {
    /// Classify a joint label. "T", "Tee", and "T-joint" all mean a tee;
    /// corner is checked before edge so "outside corner edge prep" reads
    /// as a corner joint.
    pub fn from_label(input: &str) -> JointKind {
        let lower = input.to_lowercase();
        let trimmed = lower.trim();

        if trimmed.contains("butt") {
            JointKind::Butt
        } else if trimmed.contains("lap") {
            JointKind::Lap
        } else if trimmed == "t" || trimmed.contains("tee") || trimmed.starts_with("t-") {
            JointKind::Tee
        } else if trimmed.contains("corner") {
            JointKind::Corner
        } else if trimmed.contains("edge") {
            JointKind::Edge
        } else {
            JointKind::Other(input.to_string())
        }
    }
}

/// Metal thickness band, classified from a snapshot label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThicknessBand {
    Thin,
    Medium,
    Thick,
    Other(String),
}

impl ThicknessBand {
    /// Classify a thickness label. Order matters: "thick" is checked after
    /// "thin" but both before "medium" so band labels with fraction
    /// annotations classify off their leading word.
    pub fn from_label(input: &str) -> ThicknessBand {
        let lower = input.to_lowercase();

        if lower.contains("thin") {
            ThicknessBand::Thin
        } else if lower.contains("thick") {
            ThicknessBand::Thick
        } else if lower.contains("medium") {
            ThicknessBand::Medium
        } else {
            ThicknessBand::Other(input.to_string())
        }
    }
}

/// Machine output current, classified from a snapshot label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MachineCurrent {
    Ac,
    DcPositive,
    DcNegative,
    Other(String),
}

impl MachineCurrent {
    /// Classify a machine label. DC spellings are checked before AC so
    /// "DC+ (DCEP)" never matches the stray "C" heuristics for AC.
    pub fn from_label(input: &str) -> MachineCurrent {
        let upper = input.to_uppercase();

        if upper.contains("DCEP") || upper.contains("DC+") {
            MachineCurrent::DcPositive
        } else if upper.contains("DCEN") || upper.contains("DC-") {
            MachineCurrent::DcNegative
        } else if upper.contains("AC") {
            MachineCurrent::Ac
        } else {
            MachineCurrent::Other(input.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_observations_default_to_nominal() {
        let json = r#"{
            "electrode": "E6010",
            "electrode_size": "1/8\"",
            "position": "Flat",
            "thickness": "Medium (1/8\"-3/16\")",
            "joint_type": "Butt",
            "machine_type": "DC+"
        }"#;
        let snapshot: ParameterSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.puddle_fluidity, PuddleFluidity::Moderate);
        assert_eq!(snapshot.puddle_spread, PuddleSpread::Moderate);
        assert_eq!(snapshot.edge_tie, EdgeTie::Adequate);
        assert_eq!(snapshot.arc_stability, ArcStability::Stable);
    }

    #[test]
    fn test_very_fluid_uses_spaced_spelling() {
        let json = r#""Very Fluid""#;
        let fluidity: PuddleFluidity = serde_json::from_str(json).unwrap();
        assert_eq!(fluidity, PuddleFluidity::VeryFluid);
    }

    #[test]
    fn test_position_classification() {
        assert_eq!(Position::from_label("Flat"), Position::Flat);
        assert_eq!(Position::from_label("Vertical Up"), Position::VerticalUp);
        assert_eq!(Position::from_label("vertical down"), Position::VerticalDown);
        assert_eq!(Position::from_label("Vertical"), Position::VerticalUp);
        assert_eq!(Position::from_label("Overhead"), Position::Overhead);
        assert_eq!(
            Position::from_label("Orbital"),
            Position::Other("Orbital".to_string())
        );
    }

    #[test]
    fn test_joint_classification() {
        assert_eq!(JointKind::from_label("Butt"), JointKind::Butt);
        assert_eq!(JointKind::from_label("T"), JointKind::Tee);
        assert_eq!(JointKind::from_label("T-joint"), JointKind::Tee);
        assert_eq!(JointKind::from_label("Lap"), JointKind::Lap);
        assert_eq!(JointKind::from_label("Outside corner"), JointKind::Corner);
        assert_eq!(JointKind::from_label("Edge"), JointKind::Edge);
        assert_eq!(
            JointKind::from_label("Plug"),
            JointKind::Other("Plug".to_string())
        );
    }

    #[test]
    fn test_thickness_classification_reads_band_labels() {
        assert_eq!(
            ThicknessBand::from_label("Thin (up to 1/8\")"),
            ThicknessBand::Thin
        );
        assert_eq!(
            ThicknessBand::from_label("Medium (1/8\"-3/16\")"),
            ThicknessBand::Medium
        );
        assert_eq!(
            ThicknessBand::from_label("Thick (1/4\" and up)"),
            ThicknessBand::Thick
        );
    }

    #[test]
    fn test_machine_classification_checks_dc_first() {
        assert_eq!(MachineCurrent::from_label("AC"), MachineCurrent::Ac);
        assert_eq!(MachineCurrent::from_label("DC+"), MachineCurrent::DcPositive);
        assert_eq!(
            MachineCurrent::from_label("DC+ (DCEP)"),
            MachineCurrent::DcPositive
        );
        assert_eq!(MachineCurrent::from_label("DCEN"), MachineCurrent::DcNegative);
    }

    #[test]
    fn test_result_serializes_for_frontend() {
        let result = RecommendationResult {
            amperage: Some("75-130A".to_string()),
            arc_gap: Some("Medium".to_string()),
            rod_angle: Some("Perpendicular".to_string()),
            travel_speed: None,
            motion_patterns: vec!["Circular".to_string()],
            adjustments: vec![],
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("75-130A"));
        assert!(json.contains("motion_patterns"));
    }
}
