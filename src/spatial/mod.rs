//! Spatial helpers for the floor plan

pub mod extent;

pub use extent::{
    aligned_footprint, distance, is_rotated, overlap_depth, planar, rotated_extent, Extent,
    FillAxis, Interval,
};
