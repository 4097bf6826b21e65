//! # Voxel Kit
//!
//! An augmented-reality voxel-placement toolkit. The host AR session feeds
//! plane-anchor measurements into a [`scene::SceneManager`], which maintains a
//! grid-aligned [`surface::PlatformSurface`] per detected plane and, on
//! request, populates it with cubic [`voxel::VoxelNode`]s one tick at a time.
//!
//! ## Features
//!
//! - **Grid-Fitted Surfaces**: plane measurements are snapped to the voxel
//!   lattice and clamped to configurable maxima
//! - **Animated Resizing**: measurement refinements animate the surface over
//!   a short duration, with overlapping requests dropped
//! - **Paced Materialization**: voxels appear one per tick for a build-up
//!   effect, then the surface freezes permanently
//! - **Host-Agnostic**: rendering stays behind the [`render::RenderBackend`]
//!   adapter; the toolkit never draws
//!
//! ## Quick Start
//!
//! ```rust
//! use voxel_kit::prelude::*;
//!
//! let config = VoxelKitConfig::default();
//! let delegate = DefaultSceneDelegate;
//! let mut scene = SceneManager::with_default_backend(config);
//!
//! let anchor = PlaneAnchor::new(AnchorId(1), Vec3::new(0.0, 0.0, 0.0), Vec2::new(0.5, 0.5));
//! scene.anchor_added(anchor, &delegate);
//!
//! scene.begin_materialization(AnchorId(1)).unwrap();
//! for _ in 0..600 {
//!     scene.update(1.0 / 60.0);
//! }
//! assert!(scene.voxel_count(AnchorId(1)) > 0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod foundation;
pub mod render;
pub mod scene;
pub mod session;
pub mod surface;
pub mod voxel;

/// Common imports for toolkit users
pub mod prelude {
    pub use crate::{
        config::{constants, VoxelKitConfig},
        foundation::math::{Vec2, Vec3},
        render::{NullRenderBackend, RenderBackend, RenderError},
        scene::{DefaultSceneDelegate, FocusTarget, SceneDelegate, SceneError, SceneManager},
        session::{AnchorId, PlaneAnchor, TrackingLimitation, TrackingState},
        surface::{PlatformSurface, VoxelGrid},
        voxel::{VoxelFace, VoxelNode},
    };
}
