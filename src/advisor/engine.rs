//! Recommendation derivation for a welding parameter snapshot.
//!
//! The `RecommendationEngine` resolves a snapshot against the knowledge
//! tables and applies the adjustment rules, producing a complete (possibly
//! partial) `RecommendationResult`. The computation is pure: no state is
//! carried between invocations and nothing here errors — unknown keys
//! leave the corresponding result fields unset.

use tracing::debug;

use crate::knowledge::KnowledgeBase;

use super::types::*;

/// The technique advisor.
///
/// Resolves a `ParameterSnapshot` through six ordered steps: amperage
/// narrowing, rod angle, travel speed, motion-pattern seeding, electrode
/// augmentation, and observation-driven adjustments.
pub struct RecommendationEngine {
    knowledge: KnowledgeBase,
}

impl RecommendationEngine {
    /// Create an engine over the given knowledge tables
    /// (typically from `default_knowledge()` or `load_knowledge()`).
    pub fn new(knowledge: KnowledgeBase) -> Self {
        Self { knowledge }
    }

    /// The knowledge tables this engine resolves against.
    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Derive a recommendation for one snapshot.
    ///
    /// Every field of the result may be absent when the snapshot names
    /// keys outside the tables; partial input yields a partial, still
    /// useful recommendation rather than an error.
    pub fn recommend(&self, snapshot: &ParameterSnapshot) -> RecommendationResult {
        let position = Position::from_label(&snapshot.position);
        let joint = JointKind::from_label(&snapshot.joint_type);
        let thickness = ThicknessBand::from_label(&snapshot.thickness);

        let mut result = RecommendationResult {
            amperage: self.resolve_amperage(snapshot, &thickness, &position),
            rod_angle: self.resolve_rod_angle(&joint, &position),
            travel_speed: self.resolve_travel_speed(&position),
            motion_patterns: self.seed_motion_patterns(&snapshot.electrode, &position),
            ..Default::default()
        };

        self.apply_electrode_technique(&snapshot.electrode, &mut result);
        self.apply_observations(snapshot, &mut result);

        debug!(
            electrode = %snapshot.electrode,
            position = %snapshot.position,
            amperage = ?result.amperage,
            adjustments = result.adjustments.len(),
            "derived recommendation"
        );
        result
    }

    /// Step 1: look up the amperage range and narrow it for thickness,
    /// then trim for position. The trims operate on the already-narrowed
    /// range; both touch `max`, so the order is load-bearing.
    fn resolve_amperage(
        &self,
        snapshot: &ParameterSnapshot,
        thickness: &ThicknessBand,
        position: &Position,
    ) -> Option<String> {
        let Some(mut range) = self
            .knowledge
            .amperage_range(&snapshot.electrode, &snapshot.electrode_size)
        else {
            debug!(
                electrode = %snapshot.electrode,
                size = %snapshot.electrode_size,
                "no amperage entry, leaving amperage unset"
            );
            return None;
        };

        let span = range.max - range.min;
        match thickness {
            // Thin stock: bias toward the low end of the range
            ThicknessBand::Thin => range.max = range.min + 0.4 * span,
            // Thick stock: bias toward the high end
            ThicknessBand::Thick => range.min = range.min + 0.6 * span,
            ThicknessBand::Medium | ThicknessBand::Other(_) => {}
        }

        match position {
            Position::VerticalUp => range.max -= 5.0,
            Position::Overhead => range.max -= 3.0,
            _ => {}
        }

        Some(range.display())
    }

    /// Step 2: rod angle from joint geometry, with the position overrides
    /// applied last. Vertical down and horizontal replace whatever the
    /// joint derived — position wins over joint geometry there, which is
    /// intentional: holding the puddle against gravity matters more than
    /// the joint's preferred angle.
    fn resolve_rod_angle(&self, joint: &JointKind, position: &Position) -> Option<String> {
        let mut angle = match joint {
            JointKind::Butt => Some(match position {
                Position::Flat => "Perpendicular",
                Position::VerticalUp => "45° angled up slightly",
                Position::Overhead => "Nearly perpendicular",
                _ => "45°",
            }),
            JointKind::Lap | JointKind::Tee => Some("45° into corner"),
            JointKind::Corner => Some("Bisect the corner angle"),
            JointKind::Edge | JointKind::Other(_) => None,
        };

        match position {
            Position::VerticalDown => angle = Some("Angle up slightly to hold puddle"),
            Position::Horizontal => angle = Some("Angle up slightly to control puddle"),
            _ => {}
        }

        angle.map(str::to_string)
    }

    /// Step 3: travel speed is driven by position alone and may stay unset.
    fn resolve_travel_speed(&self, position: &Position) -> Option<String> {
        let speed = match position {
            Position::VerticalDown => "Fast",
            Position::VerticalUp => "Medium-slow, steady",
            Position::Horizontal => "Medium-fast to prevent sagging",
            _ => return None,
        };
        Some(speed.to_string())
    }

    /// Step 4: vertical up needs position-specific patterns; everywhere
    /// else the list starts empty and step 5 fills it.
    fn seed_motion_patterns(&self, electrode: &str, position: &Position) -> Vec<String> {
        if *position != Position::VerticalUp {
            return Vec::new();
        }
        match electrode {
            "E7018" => vec!["Side-to-side".to_string()],
            "E6010" | "E6011" => {
                vec!["Step/Whip".to_string(), "Circular".to_string()]
            }
            _ => Vec::new(),
        }
    }

    /// Step 5: electrode-specific arc gap and fallback motion patterns.
    /// Motion patterns are only filled when step 4 left them empty —
    /// except E7024, which appends unconditionally. That asymmetry is
    /// long-standing observed behavior and is kept as-is.
    fn apply_electrode_technique(&self, electrode: &str, result: &mut RecommendationResult) {
        match electrode {
            "E6010" | "E6011" => {
                result.arc_gap = Some("Medium".to_string());
                if result.motion_patterns.is_empty() {
                    result.motion_patterns = vec![
                        "Circular".to_string(),
                        "Zigzag".to_string(),
                        "Whip/Step".to_string(),
                    ];
                }
            }
            "E6013" => {
                result.arc_gap = Some("Short to medium".to_string());
                if result.motion_patterns.is_empty() {
                    result.motion_patterns = vec![
                        "Straight".to_string(),
                        "Slight side-to-side".to_string(),
                    ];
                }
            }
            "E7018" => {
                result.arc_gap = Some("Short".to_string());
                result
                    .adjustments
                    .push("Keep arc in puddle, don't let slag get ahead".to_string());
                if result.motion_patterns.is_empty() {
                    result.motion_patterns =
                        vec!["Straight".to_string(), "Side-to-side".to_string()];
                }
            }
            "E7024" => {
                result.arc_gap = Some("Short".to_string());
                result.motion_patterns.push("Straight".to_string());
            }
            _ => {}
        }
    }

    /// Step 6: corrective adjustments from the live observations, appended
    /// in priority order: heat first, then spread, tie-in, arc stability.
    fn apply_observations(&self, snapshot: &ParameterSnapshot, result: &mut RecommendationResult) {
        match snapshot.puddle_fluidity {
            PuddleFluidity::Stiff => result
                .adjustments
                .push("Increase heat: try higher amperage or slower travel".to_string()),
            PuddleFluidity::VeryFluid => result
                .adjustments
                .push("Reduce heat: try lower amperage or faster travel".to_string()),
            PuddleFluidity::Moderate => {}
        }

        match snapshot.puddle_spread {
            PuddleSpread::Narrow => result
                .adjustments
                .push("Widen puddle: slow down slightly or increase amperage".to_string()),
            PuddleSpread::Wide => result
                .adjustments
                .push("Narrow puddle: speed up slightly or decrease amperage".to_string()),
            PuddleSpread::Moderate => {}
        }

        if snapshot.edge_tie == EdgeTie::Poor {
            result
                .adjustments
                .push("Improve edge tie-in: direct more heat to edges, adjust angle".to_string());
        }

        if snapshot.arc_stability == ArcStability::Unstable {
            let machine = MachineCurrent::from_label(&snapshot.machine_type);
            if snapshot.electrode == "E6010" && machine == MachineCurrent::Ac {
                result
                    .adjustments
                    .push("E6010 requires DC+, switch to E6011 for AC".to_string());
            } else {
                result
                    .adjustments
                    .push("Maintain consistent arc length, check machine settings".to_string());
            }
        }
    }
}
