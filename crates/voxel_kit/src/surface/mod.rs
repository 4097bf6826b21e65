//! Platform surfaces
//!
//! A platform surface is the rectangular stand-in for one detected
//! real-world plane. While measurements keep arriving the surface grows (or
//! shrinks) toward the grid-fitted, clamped size of the latest measurement,
//! animating each change over a short duration. Once voxel materialization
//! begins the dimensions freeze permanently; only the position keeps
//! following the anchor.

mod grid;
mod materializer;

pub use grid::VoxelGrid;
pub use materializer::Materializer;

use crate::config::VoxelKitConfig;
use crate::foundation::math::{utils, Vec2, Vec3};
use crate::session::{AnchorId, PlaneAnchor};
use crate::voxel::VoxelNode;

/// Fit a measured extent onto the voxel lattice: the largest multiple of
/// `side_length` that does not exceed the extent nor `max`.
///
/// Degenerate inputs (non-positive side length or extent) yield zero.
pub fn fit_to_grid(extent: f32, side_length: f32, max: f32) -> f32 {
    if side_length <= 0.0 {
        return 0.0;
    }

    ((extent / side_length).floor() * side_length)
        .min(max)
        .max(0.0)
}

/// An in-flight animated size change
#[derive(Debug, Clone)]
struct SizeAnimation {
    from: Vec2,
    to: Vec2,
    elapsed: f32,
    duration: f32,
}

impl SizeAnimation {
    fn sample(&self) -> Vec2 {
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        Vec2::new(
            utils::lerp(self.from.x, self.to.x, t),
            utils::lerp(self.from.y, self.to.y, t),
        )
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Size-change state machine. At most one change is in flight; measurement
/// updates arriving while `Animating` are dropped.
#[derive(Debug, Clone)]
enum Sizing {
    Idle,
    Animating(SizeAnimation),
}

/// Grid-aligned placeholder surface for one detected plane
#[derive(Debug, Clone)]
pub struct PlatformSurface {
    anchor_id: AnchorId,
    position: Vec3,
    size: Vec2,
    sizing: Sizing,
    voxels_prepared: bool,
    voxel_side_length: f32,
    max_size: Vec2,
    resize_duration: f32,
    materialize_interval: f32,
    voxels: Vec<VoxelNode>,
    materializer: Option<Materializer>,
}

impl PlatformSurface {
    /// Create a surface for a newly detected plane.
    ///
    /// The surface starts at zero size and animates toward the first
    /// measurement's fitted size.
    pub fn new(anchor: &PlaneAnchor, config: &VoxelKitConfig) -> Self {
        let mut surface = Self {
            anchor_id: anchor.id,
            position: Vec3::zeros(),
            size: Vec2::zeros(),
            sizing: Sizing::Idle,
            voxels_prepared: false,
            voxel_side_length: config.voxel_side_length,
            max_size: Vec2::new(config.max_surface_width, config.max_surface_length),
            resize_duration: config.resize_duration,
            materialize_interval: config.materialize_interval,
            voxels: Vec::new(),
            materializer: None,
        };

        surface.apply_measurement(anchor, true);
        surface
    }

    /// Apply a refined plane measurement.
    ///
    /// If a size change is still animating the whole update is dropped.
    /// Otherwise the surface position snaps to the anchor center projected
    /// onto the plane and, until voxels have been materialized, the size
    /// heads toward the fitted extent: immediately when `animated` is false,
    /// over the configured resize duration when true.
    pub fn apply_measurement(&mut self, anchor: &PlaneAnchor, animated: bool) {
        if self.is_animating() {
            log::debug!("{}: measurement dropped, resize in flight", self.anchor_id);
            return;
        }

        self.position = Vec3::new(anchor.center.x, 0.0, anchor.center.z);

        let target = if self.voxels_prepared {
            self.size
        } else {
            let extent = anchor.extent();
            Vec2::new(
                fit_to_grid(extent.x, self.voxel_side_length, self.max_size.x),
                fit_to_grid(extent.y, self.voxel_side_length, self.max_size.y),
            )
        };

        if !animated || self.resize_duration <= 0.0 {
            self.size = target;
        } else {
            self.sizing = Sizing::Animating(SizeAnimation {
                from: self.size,
                to: target,
                elapsed: 0.0,
                duration: self.resize_duration,
            });
        }
    }

    /// Advance animations and materialization by `dt` seconds.
    ///
    /// Returns the voxels that materialized during this step (already
    /// recorded as children of the surface).
    pub fn advance(&mut self, dt: f32) -> Vec<VoxelNode> {
        let mut completed = false;
        if let Sizing::Animating(animation) = &mut self.sizing {
            animation.elapsed += dt;
            self.size = animation.sample();
            if animation.is_complete() {
                self.size = animation.to;
                completed = true;
            }
        }
        if completed {
            self.sizing = Sizing::Idle;
        }

        let mut spawned = Vec::new();
        if let Some(materializer) = &mut self.materializer {
            spawned = materializer.advance(dt);
            self.voxels.extend(spawned.iter().cloned());
            if materializer.is_finished() {
                self.materializer = None;
            }
        }

        spawned
    }

    /// Freeze the surface and start paced voxel materialization.
    ///
    /// An in-flight size animation is completed at its target first so the
    /// grid is computed from settled dimensions. Calling this on an already
    /// frozen surface is a no-op.
    pub fn begin_materialization(&mut self) {
        if self.voxels_prepared {
            return;
        }

        if let Sizing::Animating(animation) = &self.sizing {
            self.size = animation.to;
            self.sizing = Sizing::Idle;
        }

        self.voxels_prepared = true;

        let grid = VoxelGrid::new(self.size.x, self.size.y, self.voxel_side_length);
        log::info!(
            "{}: materializing {} voxel(s) on {:.2}x{:.2} surface",
            self.anchor_id,
            grid.len(),
            self.size.x,
            self.size.y
        );

        self.materializer = Some(Materializer::new(
            grid.positions(),
            self.voxel_side_length,
            self.materialize_interval,
        ));
    }

    /// Attach externally persisted voxels, freezing the surface.
    ///
    /// Used when a previous session's voxels are pulled back from the
    /// embedder; the surface behaves as if materialization had completed.
    pub fn restore_voxels<I: IntoIterator<Item = VoxelNode>>(&mut self, voxels: I) {
        self.voxels_prepared = true;
        self.materializer = None;
        self.voxels.extend(voxels);
    }

    /// Identifier of the plane this surface follows
    pub fn anchor_id(&self) -> AnchorId {
        self.anchor_id
    }

    /// Current surface size (width, length)
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Current surface width
    pub fn width(&self) -> f32 {
        self.size.x
    }

    /// Current surface length
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Current surface position (anchor center projected onto the plane)
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Whether a size change is in flight
    pub fn is_animating(&self) -> bool {
        matches!(self.sizing, Sizing::Animating(_))
    }

    /// Whether the dimensions have frozen (voxels prepared)
    pub fn is_frozen(&self) -> bool {
        self.voxels_prepared
    }

    /// Whether paced materialization is still running
    pub fn is_materializing(&self) -> bool {
        self.materializer.is_some()
    }

    /// Number of materialized voxels
    pub fn voxel_count(&self) -> usize {
        self.voxels.len()
    }

    /// Materialized voxel at `index`, in materialization order
    pub fn voxel(&self, index: usize) -> Option<&VoxelNode> {
        self.voxels.get(index)
    }

    /// All materialized voxels, in materialization order
    pub fn voxels(&self) -> &[VoxelNode] {
        &self.voxels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::AnchorId;
    use approx::assert_relative_eq;

    fn test_config() -> VoxelKitConfig {
        VoxelKitConfig::new()
            .with_voxel_side_length(0.5)
            .with_surface_maxima(2.0, 2.0)
            .with_resize_duration(0.1)
            .with_materialize_interval(0.01)
    }

    fn anchor(half_width: f32, half_length: f32) -> PlaneAnchor {
        PlaneAnchor::new(
            AnchorId(1),
            Vec3::new(0.0, 0.0, 0.0),
            Vec2::new(half_width, half_length),
        )
    }

    #[test]
    fn test_fit_to_grid_floors_to_multiple() {
        assert_relative_eq!(fit_to_grid(0.7, 0.5, 2.0), 0.5);
        assert_relative_eq!(fit_to_grid(1.0, 0.5, 2.0), 1.0);
        assert_relative_eq!(fit_to_grid(0.3, 0.5, 2.0), 0.0);
    }

    #[test]
    fn test_fit_to_grid_clamps_to_max() {
        assert_relative_eq!(fit_to_grid(5.0, 0.5, 2.0), 2.0);
    }

    #[test]
    fn test_fit_to_grid_degenerate_inputs() {
        assert_relative_eq!(fit_to_grid(1.0, 0.0, 2.0), 0.0);
        assert_relative_eq!(fit_to_grid(-1.0, 0.5, 2.0), 0.0);
    }

    #[test]
    fn test_new_surface_animates_to_first_measurement() {
        let mut surface = PlatformSurface::new(&anchor(0.5, 0.5), &test_config());

        assert!(surface.is_animating());
        assert_relative_eq!(surface.width(), 0.0);

        surface.advance(0.1);

        assert!(!surface.is_animating());
        assert_relative_eq!(surface.width(), 1.0);
        assert_relative_eq!(surface.height(), 1.0);
    }

    #[test]
    fn test_overlapping_size_change_is_dropped() {
        let mut surface = PlatformSurface::new(&anchor(0.5, 0.5), &test_config());

        // Still animating toward 1.0 x 1.0; this update must be dropped.
        surface.apply_measurement(&anchor(1.0, 1.0), true);
        surface.advance(0.1);

        assert_relative_eq!(surface.width(), 1.0);
        assert_relative_eq!(surface.height(), 1.0);

        // Once idle, the next measurement is honored again.
        surface.apply_measurement(&anchor(1.0, 1.0), true);
        surface.advance(0.1);
        assert_relative_eq!(surface.width(), 2.0);
    }

    #[test]
    fn test_size_interpolates_during_animation() {
        let mut surface = PlatformSurface::new(&anchor(0.5, 0.5), &test_config());

        surface.advance(0.05);
        assert!(surface.is_animating());
        assert_relative_eq!(surface.width(), 0.5, epsilon = 1e-5);
    }

    #[test]
    fn test_non_animated_apply_snaps() {
        let mut surface = PlatformSurface::new(&anchor(0.5, 0.5), &test_config());
        surface.advance(0.1);

        surface.apply_measurement(&anchor(1.0, 0.35), false);

        assert!(!surface.is_animating());
        assert_relative_eq!(surface.width(), 2.0);
        assert_relative_eq!(surface.height(), 0.5);
    }

    #[test]
    fn test_position_follows_anchor_center_on_plane() {
        let mut surface = PlatformSurface::new(&anchor(0.5, 0.5), &test_config());
        surface.advance(0.1);

        let moved = PlaneAnchor::new(
            AnchorId(1),
            Vec3::new(0.3, 0.8, -0.2),
            Vec2::new(0.5, 0.5),
        );
        surface.apply_measurement(&moved, false);

        assert_relative_eq!(surface.position().x, 0.3);
        assert_relative_eq!(surface.position().y, 0.0);
        assert_relative_eq!(surface.position().z, -0.2);
    }

    #[test]
    fn test_dimensions_freeze_after_materialization() {
        let mut surface = PlatformSurface::new(&anchor(0.5, 0.5), &test_config());
        surface.advance(0.1);

        surface.begin_materialization();
        assert!(surface.is_frozen());

        surface.apply_measurement(&anchor(1.0, 1.0), false);
        assert_relative_eq!(surface.width(), 1.0);
        assert_relative_eq!(surface.height(), 1.0);

        // Position still follows the anchor.
        let moved = PlaneAnchor::new(AnchorId(1), Vec3::new(0.7, 0.0, 0.1), Vec2::new(1.0, 1.0));
        surface.apply_measurement(&moved, false);
        assert_relative_eq!(surface.position().x, 0.7);
        assert_relative_eq!(surface.width(), 1.0);
    }

    #[test]
    fn test_materialization_settles_in_flight_animation() {
        let mut surface = PlatformSurface::new(&anchor(0.5, 0.5), &test_config());

        // Animation toward 1.0 x 1.0 still running.
        surface.begin_materialization();

        assert!(!surface.is_animating());
        assert_relative_eq!(surface.width(), 1.0);
        assert_relative_eq!(surface.height(), 1.0);
    }

    #[test]
    fn test_materialization_spawns_full_grid_over_time() {
        let mut surface = PlatformSurface::new(&anchor(0.5, 0.5), &test_config());
        surface.advance(0.1);
        surface.begin_materialization();

        // 1.0 x 1.0 at side 0.5 -> 4 voxels, one per 10ms tick.
        let mut total = 0;
        for _ in 0..10 {
            total += surface.advance(0.01).len();
        }

        assert_eq!(total, 4);
        assert_eq!(surface.voxel_count(), 4);
        assert!(!surface.is_materializing());
        assert!(surface.voxels().iter().all(|v| !v.mutable));
    }

    #[test]
    fn test_repeated_materialization_request_is_noop() {
        let mut surface = PlatformSurface::new(&anchor(0.5, 0.5), &test_config());
        surface.advance(0.1);

        surface.begin_materialization();
        surface.begin_materialization();

        let mut total = 0;
        for _ in 0..20 {
            total += surface.advance(0.01).len();
        }
        assert_eq!(total, 4);
    }

    #[test]
    fn test_restore_voxels_freezes_surface() {
        let mut surface = PlatformSurface::new(&anchor(0.5, 0.5), &test_config());
        surface.advance(0.1);

        surface.restore_voxels(vec![
            VoxelNode::new(Vec3::new(0.25, 0.25, 0.25), 0.5).with_mutable(false),
        ]);

        assert!(surface.is_frozen());
        assert_eq!(surface.voxel_count(), 1);

        surface.apply_measurement(&anchor(1.0, 1.0), false);
        assert_relative_eq!(surface.width(), 1.0);
    }
}
