//! Golden-triangle validation over the placed items
//!
//! The triangle joins the sink, stove and refrigerator. Each side must be
//! strictly longer than the minimum and strictly shorter than the maximum
//! configured distance. Extra sinks are measured against the stove and the
//! refrigerator too; those pairs count towards validity but are not sides of
//! the triangle.

use serde::{Deserialize, Serialize};

use crate::core::config::PlannerConfig;
use crate::core::types::{ItemId, ItemType};
use crate::kitchen::item::KitchenItem;
use crate::spatial::distance;

/// How a single distance compares with the allowed range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceVerdict {
    TooClose,
    InRange,
    TooFar,
}

impl DistanceVerdict {
    pub fn is_ok(&self) -> bool {
        matches!(self, DistanceVerdict::InRange)
    }
}

/// Classify a distance against the open interval (min, max)
pub fn check_distance(distance: f32, config: &PlannerConfig) -> DistanceVerdict {
    if distance <= config.triangle_min_distance {
        DistanceVerdict::TooClose
    } else if distance >= config.triangle_max_distance {
        DistanceVerdict::TooFar
    } else {
        DistanceVerdict::InRange
    }
}

/// The three sides of the triangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangleSides {
    pub sink_stove: f32,
    pub sink_refrigerator: f32,
    pub stove_refrigerator: f32,
}

/// Distance between one pair of placed items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairDistance {
    pub from: ItemId,
    pub to: ItemId,
    pub distance: f32,
}

/// Result of validating the work triangle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangleReport {
    /// Sink, stove and refrigerator are all placed
    pub is_complete: bool,
    /// Complete and every measured pair is in range
    pub is_valid: bool,
    /// Triangle sides, measured from the first sink
    pub sides: Option<TriangleSides>,
    /// Pairs involving sinks after the first
    pub supplementary: Vec<PairDistance>,
    /// One message per pair out of range
    pub violations: Vec<String>,
}

impl TriangleReport {
    /// Report for a kitchen missing at least one work center
    pub fn incomplete() -> Self {
        Self {
            is_complete: false,
            is_valid: false,
            sides: None,
            supplementary: Vec::new(),
            violations: Vec::new(),
        }
    }
}

impl Default for TriangleReport {
    fn default() -> Self {
        Self::incomplete()
    }
}

/// Validate the triangle formed by the placed items
pub fn validate_triangle(items: &[KitchenItem], config: &PlannerConfig) -> TriangleReport {
    let placed = || items.iter().filter(|item| item.placed);

    let sinks: Vec<&KitchenItem> = placed()
        .filter(|item| item.item_type == ItemType::Sink)
        .collect();
    let stove = placed().find(|item| item.item_type == ItemType::Stove);
    let fridge = placed().find(|item| item.item_type == ItemType::Refrigerator);

    let (sink, stove, fridge) = match (sinks.first(), stove, fridge) {
        (Some(sink), Some(stove), Some(fridge)) => (*sink, stove, fridge),
        _ => return TriangleReport::incomplete(),
    };

    let sides = TriangleSides {
        sink_stove: distance(sink.position, stove.position),
        sink_refrigerator: distance(sink.position, fridge.position),
        stove_refrigerator: distance(stove.position, fridge.position),
    };

    let mut violations = Vec::new();
    let mut note = |a: &KitchenItem, b: &KitchenItem, d: f32| {
        if let Some(message) = violation_message(a, b, d, config) {
            violations.push(message);
        }
    };

    note(sink, stove, sides.sink_stove);
    note(sink, fridge, sides.sink_refrigerator);
    note(stove, fridge, sides.stove_refrigerator);

    let mut supplementary = Vec::new();
    for extra in sinks.iter().skip(1).copied() {
        for partner in [stove, fridge] {
            let d = distance(extra.position, partner.position);
            note(extra, partner, d);
            supplementary.push(PairDistance {
                from: extra.id,
                to: partner.id,
                distance: d,
            });
        }
    }

    TriangleReport {
        is_complete: true,
        is_valid: violations.is_empty(),
        sides: Some(sides),
        supplementary,
        violations,
    }
}

fn violation_message(
    a: &KitchenItem,
    b: &KitchenItem,
    distance: f32,
    config: &PlannerConfig,
) -> Option<String> {
    match check_distance(distance, config) {
        DistanceVerdict::InRange => None,
        DistanceVerdict::TooClose => Some(format!(
            "{} to {}: {:.2}m is too close (must be more than {:.1}m)",
            a.name, b.name, distance, config.triangle_min_distance
        )),
        DistanceVerdict::TooFar => Some(format!(
            "{} to {}: {:.2}m is too far (must be less than {:.1}m)",
            a.name, b.name, distance, config.triangle_max_distance
        )),
    }
}
