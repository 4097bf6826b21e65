//! Scene management
//!
//! The scene manager is the hub between the host AR session, the embedder's
//! delegate, and the host renderer. It keeps one platform surface per
//! detected plane, advances every time-based process from the single
//! cooperative `update` call, and pushes resulting geometry through the
//! render backend.

mod delegate;

pub use delegate::{DefaultSceneDelegate, SceneDelegate};

use std::collections::HashMap;

use thiserror::Error;

use crate::config::VoxelKitConfig;
use crate::render::RenderBackend;
use crate::session::{AnchorId, PlaneAnchor, TrackingState};
use crate::surface::PlatformSurface;
use crate::voxel::{VoxelFace, VoxelNode};

/// Scene-level errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SceneError {
    /// The referenced plane is not registered with the scene
    #[error("Unknown {0}")]
    UnknownAnchor(AnchorId),

    /// Rebuilding a scene from an archived snapshot is not supported
    #[error("Scene restoration from archived snapshots is not supported")]
    SnapshotUnsupported,
}

/// The voxel the user is currently aiming at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusTarget {
    /// Surface owning the voxel
    pub anchor: AnchorId,
    /// Index of the voxel on its surface
    pub index: usize,
    /// Face being aimed at
    pub face: VoxelFace,
}

/// Coordinates surfaces, delegate notifications, and the render backend
pub struct SceneManager {
    config: VoxelKitConfig,
    backend: Box<dyn RenderBackend>,
    surfaces: HashMap<AnchorId, PlatformSurface>,
    focus: Option<FocusTarget>,
    tracking: TrackingState,
}

impl SceneManager {
    /// Create a scene manager pushing geometry through `backend`
    pub fn new(config: VoxelKitConfig, backend: Box<dyn RenderBackend>) -> Self {
        Self {
            config,
            backend,
            surfaces: HashMap::new(),
            focus: None,
            tracking: TrackingState::Normal,
        }
    }

    /// Create a scene manager with the no-op backend
    pub fn with_default_backend(config: VoxelKitConfig) -> Self {
        Self::new(config, Box::new(crate::render::NullRenderBackend::new()))
    }

    /// Rebuild a scene manager from an archived snapshot.
    ///
    /// Not supported; always returns [`SceneError::SnapshotUnsupported`].
    pub fn from_snapshot(_snapshot: &[u8]) -> Result<Self, SceneError> {
        Err(SceneError::SnapshotUnsupported)
    }

    /// Register a newly detected plane.
    ///
    /// The delegate supplies the voxel side length for the new surface; the
    /// surface starts animating toward the measurement's fitted size.
    pub fn anchor_added(&mut self, anchor: PlaneAnchor, delegate: &dyn SceneDelegate) {
        let config = self
            .config
            .clone()
            .with_voxel_side_length(delegate.voxel_side_length());

        let surface = PlatformSurface::new(&anchor, &config);
        log::info!("{}: surface registered", anchor.id);

        if let Err(e) = self
            .backend
            .upsert_surface(anchor.id, surface.size(), surface.position())
        {
            log::error!("{}: backend rejected surface: {}", anchor.id, e);
        }

        self.surfaces.insert(anchor.id, surface);
    }

    /// Apply a refined measurement for a known plane.
    ///
    /// Unknown anchors are ignored with a debug log; the host may keep
    /// reporting planes the embedder never registered.
    pub fn anchor_updated(&mut self, anchor: &PlaneAnchor) {
        match self.surfaces.get_mut(&anchor.id) {
            Some(surface) => surface.apply_measurement(anchor, true),
            None => log::debug!("{}: measurement for unregistered plane", anchor.id),
        }
    }

    /// Drop the surface for a removed plane.
    ///
    /// A materialization still running on that surface stops silently.
    pub fn anchor_removed(&mut self, id: AnchorId) {
        if self.surfaces.remove(&id).is_some() {
            log::info!("{}: surface removed", id);
            if let Err(e) = self.backend.remove_surface(id) {
                log::error!("{}: backend failed to remove surface: {}", id, e);
            }
            if self.focus.map(|f| f.anchor) == Some(id) {
                self.focus = None;
            }
        }
    }

    /// Freeze a surface and start its paced voxel materialization
    pub fn begin_materialization(&mut self, id: AnchorId) -> Result<(), SceneError> {
        let surface = self
            .surfaces
            .get_mut(&id)
            .ok_or(SceneError::UnknownAnchor(id))?;

        surface.begin_materialization();
        Ok(())
    }

    /// Advance the scene by `dt` seconds.
    ///
    /// This is the single cooperative tick: size animations progress,
    /// pending voxels materialize, and all resulting geometry is pushed to
    /// the backend. Backend failures are logged and skipped; they never
    /// corrupt the registry.
    pub fn update(&mut self, dt: f32) {
        for (id, surface) in &mut self.surfaces {
            let spawned = surface.advance(dt);

            if let Err(e) = self
                .backend
                .upsert_surface(*id, surface.size(), surface.position())
            {
                log::error!("{}: backend rejected surface update: {}", id, e);
            }

            for voxel in &spawned {
                if let Err(e) = self.backend.spawn_voxel(*id, voxel) {
                    log::error!("{}: backend rejected voxel: {}", id, e);
                }
            }
        }
    }

    /// Change the focused voxel, notifying the delegate on transitions.
    ///
    /// Re-asserting the current focus is a no-op; a change defocuses the
    /// old target (if any) before focusing the new one.
    pub fn set_focus(&mut self, target: Option<FocusTarget>, delegate: &mut dyn SceneDelegate) {
        if self.focus == target {
            return;
        }

        let previous = self.focus.take();
        match target {
            Some(t) => {
                if previous.is_some() {
                    delegate.voxel_defocused(previous.map(|p| p.anchor));
                }
                delegate.voxel_focused(t.anchor, t.index, t.face);
            }
            None => delegate.voxel_defocused(previous.map(|p| p.anchor)),
        }

        self.focus = target;
    }

    /// Forward a tracking-state change from the host session.
    ///
    /// The delegate is notified first; if the new state warrants a session
    /// reset the delegate may veto it, otherwise all surfaces are dropped.
    pub fn tracking_state_changed(
        &mut self,
        state: TrackingState,
        delegate: &mut dyn SceneDelegate,
    ) {
        self.tracking = state;
        delegate.tracking_state_changed(&self.tracking);

        if self.tracking.warrants_reset() && delegate.should_reset_session(&self.tracking) {
            self.reset_session();
        }
    }

    /// Drop every surface and clear the backend
    pub fn reset_session(&mut self) {
        log::info!("Resetting scene: dropping {} surface(s)", self.surfaces.len());

        self.surfaces.clear();
        self.focus = None;

        if let Err(e) = self.backend.clear() {
            log::error!("Backend failed to clear on session reset: {}", e);
        }
    }

    /// Re-attach persisted voxels to a surface, pulling them one by one
    /// from the delegate.
    ///
    /// The surface freezes as if materialization had completed. Returns the
    /// number of voxels restored.
    pub fn restore_voxels(
        &mut self,
        id: AnchorId,
        delegate: &dyn SceneDelegate,
    ) -> Result<usize, SceneError> {
        let surface = self
            .surfaces
            .get_mut(&id)
            .ok_or(SceneError::UnknownAnchor(id))?;

        let count = delegate.voxel_count();
        let mut restored = Vec::with_capacity(count);

        for index in 0..count {
            match delegate.voxel_for(index) {
                Some(voxel) => restored.push(voxel),
                None => log::warn!("{}: delegate had no voxel at index {}", id, index),
            }
        }

        for voxel in &restored {
            if let Err(e) = self.backend.spawn_voxel(id, voxel) {
                log::error!("{}: backend rejected restored voxel: {}", id, e);
            }
        }

        let restored_count = restored.len();
        surface.restore_voxels(restored);
        log::info!("{}: restored {} voxel(s)", id, restored_count);

        Ok(restored_count)
    }

    /// Number of registered surfaces
    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    /// Surface for a plane, if registered
    pub fn surface(&self, id: AnchorId) -> Option<&PlatformSurface> {
        self.surfaces.get(&id)
    }

    /// Number of materialized voxels on a surface (0 for unknown planes)
    pub fn voxel_count(&self, id: AnchorId) -> usize {
        self.surfaces.get(&id).map_or(0, PlatformSurface::voxel_count)
    }

    /// Materialized voxel at `index` on a surface
    pub fn voxel(&self, id: AnchorId, index: usize) -> Option<&VoxelNode> {
        self.surfaces.get(&id).and_then(|s| s.voxel(index))
    }

    /// Currently focused voxel, if any
    pub fn focus(&self) -> Option<FocusTarget> {
        self.focus
    }

    /// Last tracking state forwarded from the host session
    pub fn tracking_state(&self) -> TrackingState {
        self.tracking
    }
}
