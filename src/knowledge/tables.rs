//! Knowledge table loading and lookup.
//!
//! Provides two loading methods:
//! - `default_knowledge()` - Loads the reference tables compiled into the binary
//! - `load_knowledge(path)` - Loads custom tables from a file path
//!
//! Lookups are total: an unknown key returns `None`, never panics. The
//! tables are fixed once loaded; nothing here mutates them.

use std::path::Path;

use crate::error::KnowledgeError;

use super::types::*;

/// Default tables embedded in the binary at compile time.
/// These are loaded from `config/knowledge.toml`.
const DEFAULT_TABLES: &str = include_str!("../../config/knowledge.toml");

/// Load knowledge tables from a TOML file at the given path.
///
/// Intended for shops that maintain their own amperage charts; the schema
/// matches the embedded `knowledge.toml`.
pub fn load_knowledge(path: &Path) -> Result<KnowledgeBase, KnowledgeError> {
    let content = std::fs::read_to_string(path)?;
    let kb: KnowledgeBase = toml::from_str(&content)?;
    Ok(kb)
}

/// Get the default knowledge tables embedded in the binary.
///
/// Covers the five common stick electrodes (E6010, E6011, E6013, E7018,
/// E7024) in three sizes, the five welding positions, thickness bands,
/// joint types, technique-dimension levels, and observable puddle states.
///
/// # Panics
/// Panics if the embedded TOML is invalid (this would be a compile-time bug).
pub fn default_knowledge() -> KnowledgeBase {
    toml::from_str(DEFAULT_TABLES).expect("embedded knowledge.toml must be valid TOML")
}

impl KnowledgeBase {
    /// Look up an electrode by AWS classification (e.g. "E6010").
    pub fn electrode(&self, classification: &str) -> Option<&ElectrodeSpec> {
        self.electrodes.get(classification)
    }

    /// Look up a size by diameter label (e.g. "1/8\"").
    pub fn size(&self, diameter: &str) -> Option<&ElectrodeSizeSpec> {
        self.sizes.get(diameter)
    }

    /// Look up a position by name (e.g. "Vertical Up").
    pub fn position(&self, name: &str) -> Option<&PositionSpec> {
        self.positions.get(name)
    }

    /// Look up a thickness band by label.
    pub fn thickness(&self, band: &str) -> Option<&MetalThicknessSpec> {
        self.thicknesses.get(band)
    }

    /// Look up a joint type by name (e.g. "Butt").
    pub fn joint(&self, name: &str) -> Option<&JointTypeSpec> {
        self.joints.get(name)
    }

    /// Amperage range for an (electrode, size) pair, parsed from the table.
    /// `None` if either key is unknown or the entry is malformed.
    pub fn amperage_range(&self, classification: &str, diameter: &str) -> Option<AmperageRange> {
        let entry = self.size(diameter)?.amperage.get(classification)?;
        AmperageRange::parse(entry)
    }

    /// Look up an arc-gap level description (e.g. "Short").
    pub fn arc_gap_level(&self, level: &str) -> Option<&TechniqueLevel> {
        self.technique.arc_gap.get(level)
    }

    /// Look up a travel-speed level description.
    pub fn travel_speed_level(&self, level: &str) -> Option<&TechniqueLevel> {
        self.technique.travel_speed.get(level)
    }

    /// Look up a rod-angle level description.
    pub fn rod_angle_level(&self, level: &str) -> Option<&TechniqueLevel> {
        self.technique.rod_angle.get(level)
    }

    /// Look up a motion-pattern description (e.g. "Whip/Step").
    pub fn motion_pattern(&self, pattern: &str) -> Option<&TechniqueLevel> {
        self.technique.motion_pattern.get(pattern)
    }

    /// Look up the diagnosis record for an observed puddle-fluidity state.
    pub fn fluidity_state(&self, state: &str) -> Option<&ObservableState> {
        self.observations.puddle_fluidity.get(state)
    }

    /// Look up the diagnosis record for an observed puddle-spread state.
    pub fn spread_state(&self, state: &str) -> Option<&ObservableState> {
        self.observations.puddle_spread.get(state)
    }

    /// Look up the diagnosis record for an observed edge tie-in state.
    pub fn edge_tie_state(&self, state: &str) -> Option<&ObservableState> {
        self.observations.edge_tie.get(state)
    }

    /// Look up the diagnosis record for an observed arc-stability state.
    pub fn arc_stability_state(&self, state: &str) -> Option<&ObservableState> {
        self.observations.arc_stability.get(state)
    }

    /// List all known electrode classifications.
    pub fn known_electrodes(&self) -> Vec<&str> {
        self.electrodes.keys().map(|s| s.as_str()).collect()
    }

    /// List all known size labels.
    pub fn known_sizes(&self) -> Vec<&str> {
        self.sizes.keys().map(|s| s.as_str()).collect()
    }
}
