//! Plane-anchor measurements
//!
//! A plane anchor is the host tracking system's estimate of a detected
//! real-world planar region. The estimate is refined over time: the same
//! anchor id is re-delivered with updated center and extents.

use crate::foundation::math::{Vec2, Vec3};

/// Identifier of a detected plane, stable across measurement refinements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnchorId(pub u64);

impl std::fmt::Display for AnchorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "anchor#{}", self.0)
    }
}

/// One measurement of a detected planar region
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneAnchor {
    /// Identifier of the detected plane
    pub id: AnchorId,

    /// Center of the region in world space
    pub center: Vec3,

    /// Half of the measured extent along the plane's two in-plane axes
    /// (x = width axis, y = length axis)
    pub half_extents: Vec2,
}

impl PlaneAnchor {
    /// Create a plane measurement from a center and half-extents
    pub fn new(id: AnchorId, center: Vec3, half_extents: Vec2) -> Self {
        Self {
            id,
            center,
            half_extents,
        }
    }

    /// The full measured extent of the region (twice the half-extents)
    pub fn extent(&self) -> Vec2 {
        self.half_extents * 2.0
    }
}
