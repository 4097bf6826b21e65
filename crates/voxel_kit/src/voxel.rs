//! Voxel nodes
//!
//! A voxel is a fixed-size cubic placeholder sitting on one grid cell of a
//! platform surface. Voxels materialized onto a surface are immutable by
//! default; standalone voxels start out mutable.

use crate::foundation::math::Vec3;

/// One of the six faces of a voxel cube
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoxelFace {
    /// Face toward +z (out of the surface)
    Front,
    /// Face toward -z
    Back,
    /// Face toward -x
    Left,
    /// Face toward +x
    Right,
    /// Face toward +y
    Top,
    /// Face toward -y
    Bottom,
}

impl VoxelFace {
    /// All six faces, in a fixed order
    pub const ALL: [Self; 6] = [
        Self::Front,
        Self::Back,
        Self::Left,
        Self::Right,
        Self::Top,
        Self::Bottom,
    ];

    /// Outward unit normal of this face
    pub fn normal(&self) -> Vec3 {
        match self {
            Self::Front => Vec3::new(0.0, 0.0, 1.0),
            Self::Back => Vec3::new(0.0, 0.0, -1.0),
            Self::Left => Vec3::new(-1.0, 0.0, 0.0),
            Self::Right => Vec3::new(1.0, 0.0, 0.0),
            Self::Top => Vec3::new(0.0, 1.0, 0.0),
            Self::Bottom => Vec3::new(0.0, -1.0, 0.0),
        }
    }
}

/// A cubic placeholder node positioned on a surface grid cell
#[derive(Debug, Clone, PartialEq)]
pub struct VoxelNode {
    /// Center position in surface-local space
    pub position: Vec3,

    /// Edge length of the cube
    pub side_length: f32,

    /// Whether external code may edit or remove this voxel
    pub mutable: bool,
}

impl VoxelNode {
    /// Create a mutable voxel at the given position
    pub fn new(position: Vec3, side_length: f32) -> Self {
        Self {
            position,
            side_length,
            mutable: true,
        }
    }

    /// Set the mutability flag
    pub fn with_mutable(mut self, mutable: bool) -> Self {
        self.mutable = mutable;
        self
    }

    /// World-space center of a face of this voxel, in surface-local space
    pub fn face_center(&self, face: VoxelFace) -> Vec3 {
        self.position + face.normal() * (self.side_length / 2.0)
    }
}
