//! Planar geometry helpers: distances, rotated extents and fill axes
//!
//! Items live on the floor plane, so all measurements here use the x and z
//! components of a position. The y component only carries stacking height.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_4, PI};

use crate::core::config::RoomConfig;
use crate::core::types::Dimensions;

/// Project a world position onto the floor plane
#[inline]
pub fn planar(position: Vec3) -> Vec2 {
    Vec2::new(position.x, position.z)
}

/// Euclidean distance between two positions on the floor plane
#[inline]
pub fn distance(a: Vec3, b: Vec3) -> f32 {
    planar(a).distance(planar(b))
}

/// Axis-aligned footprint of an item on the floor plane
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Extent {
    /// Size along world x
    pub width: f32,
    /// Size along world z
    pub depth: f32,
}

impl Extent {
    pub fn new(width: f32, depth: f32) -> Self {
        Self { width, depth }
    }

    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    pub fn half_depth(&self) -> f32 {
        self.depth / 2.0
    }
}

/// Axis-aligned bounding extent of a rotated rectangle
///
/// Uses `|cos θ|·w + |sin θ|·d` for the effective width and
/// `|sin θ|·w + |cos θ|·d` for the effective depth. This is exact for
/// multiples of 90° and an over-estimate for anything in between; it is not
/// an oriented bounding box test.
pub fn rotated_extent(dimensions: Dimensions, rotation: f32) -> Extent {
    let (sin, cos) = rotation.sin_cos();
    let (sin, cos) = (sin.abs(), cos.abs());
    Extent {
        width: cos * dimensions.width + sin * dimensions.depth,
        depth: sin * dimensions.width + cos * dimensions.depth,
    }
}

/// True when the rotation turns an item roughly perpendicular (45°..=135°,
/// modulo a half turn)
pub fn is_rotated(rotation: f32) -> bool {
    let normalized = rotation.rem_euclid(PI);
    (FRAC_PI_4..=3.0 * FRAC_PI_4).contains(&normalized)
}

/// Footprint with width and depth swapped for perpendicular items
pub fn aligned_footprint(width: f32, depth: f32, rotation: f32) -> Extent {
    if is_rotated(rotation) {
        Extent::new(depth, width)
    } else {
        Extent::new(width, depth)
    }
}

/// Overlap of two centered intervals (negative when they are apart)
#[inline]
pub fn overlap_depth(center_a: f32, half_a: f32, center_b: f32, half_b: f32) -> f32 {
    half_a + half_b - (center_a - center_b).abs()
}

/// The world axis a row of cabinets runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FillAxis {
    /// Row runs across the room's width
    X,
    /// Row runs along the room's length
    Z,
}

impl FillAxis {
    /// Axis a row runs along for an item with this rotation
    pub fn for_rotation(rotation: f32) -> Self {
        if is_rotated(rotation) {
            FillAxis::Z
        } else {
            FillAxis::X
        }
    }

    /// Coordinate along the row
    #[inline]
    pub fn along(&self, position: Vec3) -> f32 {
        match self {
            FillAxis::X => position.x,
            FillAxis::Z => position.z,
        }
    }

    /// Coordinate across the row
    #[inline]
    pub fn across(&self, position: Vec3) -> f32 {
        match self {
            FillAxis::X => position.z,
            FillAxis::Z => position.x,
        }
    }

    /// Copy of `position` moved to `value` along the row
    pub fn with_along(&self, position: Vec3, value: f32) -> Vec3 {
        match self {
            FillAxis::X => Vec3::new(value, position.y, position.z),
            FillAxis::Z => Vec3::new(position.x, position.y, value),
        }
    }

    /// Size of an extent along the row
    pub fn extent_along(&self, extent: Extent) -> f32 {
        match self {
            FillAxis::X => extent.width,
            FillAxis::Z => extent.depth,
        }
    }

    /// Wall-to-wall interval of the room along the row
    pub fn room_span(&self, room: &RoomConfig) -> Interval {
        let half = match self {
            FillAxis::X => room.half_width(),
            FillAxis::Z => room.half_length(),
        };
        Interval::new(-half, half)
    }
}

/// Closed interval on one axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn len(&self) -> f32 {
        self.max - self.min
    }

    pub fn center(&self) -> f32 {
        (self.min + self.max) / 2.0
    }

    /// Pull both ends inwards by `margin`
    pub fn inset(&self, margin: f32) -> Self {
        Self::new(self.min + margin, self.max - margin)
    }

    /// Raise the lower end to `value` if that tightens the interval
    pub fn clip_min(&mut self, value: f32) {
        self.min = self.min.max(value);
    }

    /// Lower the upper end to `value` if that tightens the interval
    pub fn clip_max(&mut self, value: f32) {
        self.max = self.max.min(value);
    }
}
