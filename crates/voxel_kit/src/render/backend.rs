//! Backend abstraction trait for the host renderer
//!
//! This module defines the trait a host rendering engine implements to
//! display surfaces and voxels. The scene manager pushes geometry changes
//! through it and otherwise knows nothing about how drawing happens.

use thiserror::Error;

use crate::foundation::math::{Vec2, Vec3};
use crate::session::AnchorId;
use crate::voxel::VoxelNode;

/// Result type for backend operations
pub type BackendResult<T> = Result<T, RenderError>;

/// Errors reported by a host renderer
#[derive(Error, Debug)]
pub enum RenderError {
    /// A host-side resource could not be created or found
    #[error("Host resource unavailable: {0}")]
    ResourceUnavailable(String),

    /// The host rejected the requested operation
    #[error("Operation rejected by host renderer: {0}")]
    Rejected(String),
}

/// Handle to a surface node owned by the host renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceHandle(pub u64);

/// Handle to a voxel node owned by the host renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoxelHandle(pub u64);

/// Rendering backend trait
///
/// Implementations wrap the host engine's scene-graph node types; the
/// toolkit's plain geometry flows in, host-owned drawables come out as
/// opaque handles.
pub trait RenderBackend {
    /// Create or update the drawable for a surface
    fn upsert_surface(
        &mut self,
        anchor: AnchorId,
        size: Vec2,
        position: Vec3,
    ) -> BackendResult<SurfaceHandle>;

    /// Remove the drawable for a surface and all its voxels
    fn remove_surface(&mut self, anchor: AnchorId) -> BackendResult<()>;

    /// Create the drawable for a newly materialized voxel, parented to its
    /// surface
    fn spawn_voxel(&mut self, anchor: AnchorId, voxel: &VoxelNode) -> BackendResult<VoxelHandle>;

    /// Remove every drawable owned by the toolkit
    fn clear(&mut self) -> BackendResult<()>;
}

/// No-op backend
///
/// Stock implementation for embedders that drive the toolkit headless (or
/// pull all geometry themselves via the scene manager's accessors). Hands
/// out sequential handles and draws nothing.
#[derive(Debug, Default)]
pub struct NullRenderBackend {
    next_handle: u64,
}

impl NullRenderBackend {
    /// Create a no-op backend
    pub fn new() -> Self {
        Self::default()
    }

    fn next(&mut self) -> u64 {
        self.next_handle += 1;
        self.next_handle
    }
}

impl RenderBackend for NullRenderBackend {
    fn upsert_surface(
        &mut self,
        _anchor: AnchorId,
        _size: Vec2,
        _position: Vec3,
    ) -> BackendResult<SurfaceHandle> {
        Ok(SurfaceHandle(self.next()))
    }

    fn remove_surface(&mut self, _anchor: AnchorId) -> BackendResult<()> {
        Ok(())
    }

    fn spawn_voxel(&mut self, _anchor: AnchorId, _voxel: &VoxelNode) -> BackendResult<VoxelHandle> {
        Ok(VoxelHandle(self.next()))
    }

    fn clear(&mut self) -> BackendResult<()> {
        Ok(())
    }
}
