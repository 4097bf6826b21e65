//! Scene delegate contract
//!
//! The delegate is the embedder's side of the scene manager: it supplies
//! the voxel size, may veto session resets, receives tracking and focus
//! notifications, and serves persisted voxels back when the manager asks
//! for them. Every hook has a default, so an embedder implements only what
//! it cares about; [`DefaultSceneDelegate`] is the all-defaults
//! implementation for when no custom behavior is needed at all.

use crate::config::constants;
use crate::session::{AnchorId, TrackingState};
use crate::voxel::{VoxelFace, VoxelNode};

/// Embedder-side hooks consumed by the scene manager
pub trait SceneDelegate {
    /// Edge length to use for voxel cells, in meters
    fn voxel_side_length(&self) -> f32 {
        constants::VOXEL_SIDE_LENGTH
    }

    /// Whether the session may be reset for the given tracking state.
    ///
    /// Returning `false` keeps all surfaces alive through the outage.
    fn should_reset_session(&self, _state: &TrackingState) -> bool {
        true
    }

    /// Called when the host session's tracking quality changes
    fn tracking_state_changed(&mut self, _state: &TrackingState) {}

    /// Called when a voxel gains focus (e.g. the user aims at it)
    fn voxel_focused(&mut self, _anchor: AnchorId, _index: usize, _face: VoxelFace) {}

    /// Called when focus is lost; the previously focused surface is given
    /// when one was focused
    fn voxel_defocused(&mut self, _anchor: Option<AnchorId>) {}

    /// Number of persisted voxels the embedder can serve for restoration
    fn voxel_count(&self) -> usize {
        0
    }

    /// Persisted voxel at `index`, pulled during restoration
    fn voxel_for(&self, _index: usize) -> Option<VoxelNode> {
        None
    }
}

/// Delegate with every hook left at its default
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSceneDelegate;

impl SceneDelegate for DefaultSceneDelegate {}
