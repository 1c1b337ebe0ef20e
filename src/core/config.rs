//! Planner configuration with documented constants
//!
//! All placement and validation thresholds live here. Most of them are
//! tuning values picked to keep interactive placement forgiving, not
//! physical limits, so they can be overridden from a TOML file.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::{PlannerError, Result};
use crate::core::types::WallSide;

/// Configuration for placement and triangle validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    // === COLLISION ===
    /// Added to the summed half-extents before the per-axis overlap test
    ///
    /// Negative, so items may sit almost touching or slightly overlapping
    /// without being considered candidates for a collision at all.
    pub collision_buffer: f32,

    /// Overlap depth (meters) required on both axes before a collision is
    /// reported
    pub collision_report_depth: f32,

    // === FILL ===
    /// Gap kept between a filled cabinet and the room wall
    pub wall_margin: f32,

    /// Gap kept between a filled cabinet and a neighbouring item
    pub neighbor_buffer: f32,

    /// Items whose centers differ by less than this on the perpendicular axis
    /// count as sharing a row for fill computation
    pub fill_row_alignment: f32,

    /// Smallest width a fill may produce
    pub min_fill_width: f32,

    /// Largest width a fill may produce
    pub max_fill_width: f32,

    // === BOUNDARY ===
    /// How far an item may poke past a wall before it is even considered
    pub boundary_tolerance: f32,

    /// Overflow past the tolerance that is still ignored as noise
    pub boundary_overflow_allowance: f32,

    // === RESIZE ===
    /// Width changes larger than this are treated as a fill and re-center the
    /// cabinet in its gap
    pub fill_resize_threshold: f32,

    /// Row alignment used when looking for neighbours during a resize
    pub resize_row_alignment: f32,

    /// Gap kept from neighbour edges when re-centering a resized cabinet
    pub resize_neighbor_margin: f32,

    // === TRIANGLE ===
    /// Distances at or below this are too cramped
    pub triangle_min_distance: f32,

    /// Distances at or above this are too spread out
    pub triangle_max_distance: f32,

    // === INVENTORY ===
    /// Maximum number of countertop cabinets placed at once
    pub max_placed_countertops: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            // Collision
            collision_buffer: -0.30,
            collision_report_depth: 0.20,

            // Fill
            wall_margin: 0.01,
            neighbor_buffer: 0.005,
            fill_row_alignment: 0.4,
            min_fill_width: 0.10,
            max_fill_width: 4.0,

            // Boundary
            boundary_tolerance: 0.15,
            boundary_overflow_allowance: 0.01,

            // Resize
            fill_resize_threshold: 0.10,
            resize_row_alignment: 0.5,
            resize_neighbor_margin: 0.01,

            // Triangle (open interval)
            triangle_min_distance: 1.2,
            triangle_max_distance: 5.0,

            // Inventory
            max_placed_countertops: 10,
        }
    }
}

impl PlannerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        for (name, value) in self.thresholds() {
            if !value.is_finite() {
                return Err(format!("{} must be a finite number (got {})", name, value));
            }
        }

        if self.min_fill_width >= self.max_fill_width {
            return Err(format!(
                "min_fill_width ({}) should be < max_fill_width ({})",
                self.min_fill_width, self.max_fill_width
            ));
        }

        if self.triangle_min_distance >= self.triangle_max_distance {
            return Err(format!(
                "triangle_min_distance ({}) should be < triangle_max_distance ({})",
                self.triangle_min_distance, self.triangle_max_distance
            ));
        }

        if self.collision_report_depth < 0.0 {
            return Err("collision_report_depth must not be negative".into());
        }

        if self.wall_margin < 0.0 || self.neighbor_buffer < 0.0 {
            return Err("Fill margins must not be negative".into());
        }

        if self.fill_row_alignment <= 0.0 || self.resize_row_alignment <= 0.0 {
            return Err("Row alignment must be positive".into());
        }

        Ok(())
    }

    /// Every floating-point threshold with its field name
    fn thresholds(&self) -> [(&'static str, f32); 14] {
        [
            ("collision_buffer", self.collision_buffer),
            ("collision_report_depth", self.collision_report_depth),
            ("wall_margin", self.wall_margin),
            ("neighbor_buffer", self.neighbor_buffer),
            ("fill_row_alignment", self.fill_row_alignment),
            ("min_fill_width", self.min_fill_width),
            ("max_fill_width", self.max_fill_width),
            ("boundary_tolerance", self.boundary_tolerance),
            ("boundary_overflow_allowance", self.boundary_overflow_allowance),
            ("fill_resize_threshold", self.fill_resize_threshold),
            ("resize_row_alignment", self.resize_row_alignment),
            ("resize_neighbor_margin", self.resize_neighbor_margin),
            ("triangle_min_distance", self.triangle_min_distance),
            ("triangle_max_distance", self.triangle_max_distance),
        ]
    }

    /// Parse a config from TOML, filling missing fields with defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: PlannerConfig = toml::from_str(content)?;
        config.validate().map_err(PlannerError::InvalidConfig)?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

/// The rectangular room, centered on the origin
///
/// x runs across the room's width and z along its length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomConfig {
    pub width: f32,
    pub length: f32,
    pub height: f32,
    /// Wall holding the window
    pub window_wall: WallSide,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            width: 4.0,
            length: 4.0,
            height: 2.6,
            window_wall: WallSide::North,
        }
    }
}

impl RoomConfig {
    pub fn new(width: f32, length: f32) -> Self {
        Self {
            width,
            length,
            ..Self::default()
        }
    }

    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    pub fn half_length(&self) -> f32 {
        self.length / 2.0
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !(positive(self.width) && positive(self.length) && positive(self.height)) {
            return Err(format!(
                "Room dimensions must be positive (got {} x {} x {})",
                self.width, self.length, self.height
            ));
        }
        Ok(())
    }
}
