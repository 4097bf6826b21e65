//! Math utilities and types
//!
//! Provides the fundamental math types used for surface and voxel geometry.

pub use nalgebra::{Vector2, Vector3};

/// 2D vector type (in-plane extents, surface sizes)
pub type Vec2 = Vector2<f32>;

/// 3D vector type (positions, offsets)
pub type Vec3 = Vector3<f32>;

/// Math utility functions
pub mod utils {
    /// Linear interpolation
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }
}
