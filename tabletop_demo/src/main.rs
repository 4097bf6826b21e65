//! Tabletop demo application
//!
//! Drives the toolkit through a scripted plane-detection session: a
//! tabletop-sized plane is detected, refined over a few frames, then
//! populated with voxels. Rendering is a logging backend, so the whole
//! session runs headless and prints what a host engine would draw.

use voxel_kit::prelude::*;

/// Frame duration of the simulated host render loop (60 Hz)
const FRAME_DT: f32 = 1.0 / 60.0;

/// Backend standing in for a host renderer: logs every operation
struct LoggingBackend {
    next_handle: u64,
    spawned: usize,
}

impl LoggingBackend {
    fn new() -> Self {
        Self {
            next_handle: 0,
            spawned: 0,
        }
    }

    fn next(&mut self) -> u64 {
        self.next_handle += 1;
        self.next_handle
    }
}

impl RenderBackend for LoggingBackend {
    fn upsert_surface(
        &mut self,
        anchor: AnchorId,
        size: Vec2,
        position: Vec3,
    ) -> Result<voxel_kit::render::SurfaceHandle, RenderError> {
        log::debug!(
            "draw {}: {:.2}x{:.2} at ({:.2}, {:.2}, {:.2})",
            anchor,
            size.x,
            size.y,
            position.x,
            position.y,
            position.z
        );
        Ok(voxel_kit::render::SurfaceHandle(self.next()))
    }

    fn remove_surface(&mut self, anchor: AnchorId) -> Result<(), RenderError> {
        log::info!("remove {}", anchor);
        Ok(())
    }

    fn spawn_voxel(
        &mut self,
        anchor: AnchorId,
        voxel: &VoxelNode,
    ) -> Result<voxel_kit::render::VoxelHandle, RenderError> {
        self.spawned += 1;
        log::info!(
            "voxel #{} on {} at ({:.2}, {:.2}, {:.2})",
            self.spawned,
            anchor,
            voxel.position.x,
            voxel.position.y,
            voxel.position.z
        );
        Ok(voxel_kit::render::VoxelHandle(self.next()))
    }

    fn clear(&mut self) -> Result<(), RenderError> {
        log::info!("clear all drawables");
        Ok(())
    }
}

/// Demo delegate: logs focus changes, uses a chunky voxel size so the
/// build-up is easy to follow in the output
struct DemoDelegate;

impl SceneDelegate for DemoDelegate {
    fn voxel_side_length(&self) -> f32 {
        0.1
    }

    fn tracking_state_changed(&mut self, state: &TrackingState) {
        log::info!("tracking state: {:?}", state);
    }

    fn voxel_focused(&mut self, anchor: AnchorId, index: usize, face: VoxelFace) {
        log::info!("focused voxel {} on {} ({:?} face)", index, anchor, face);
    }

    fn voxel_defocused(&mut self, anchor: Option<AnchorId>) {
        log::info!("defocused (was on {:?})", anchor);
    }
}

fn run_frames(scene: &mut SceneManager, frames: usize) {
    for _ in 0..frames {
        scene.update(FRAME_DT);
    }
}

fn main() {
    env_logger::init();

    log::info!("Starting tabletop demo...");

    let config = VoxelKitConfig::default();
    if let Err(e) = config.validate() {
        log::error!("Invalid configuration: {}", e);
        return;
    }

    let mut delegate = DemoDelegate;
    let mut scene = SceneManager::new(config, Box::new(LoggingBackend::new()));
    let table = AnchorId(1);

    // The session warms up, then finds the tabletop.
    scene.tracking_state_changed(
        TrackingState::Limited(TrackingLimitation::Initializing),
        &mut delegate,
    );
    scene.tracking_state_changed(TrackingState::Normal, &mut delegate);

    scene.anchor_added(
        PlaneAnchor::new(table, Vec3::new(0.1, 0.0, -0.4), Vec2::new(0.18, 0.12)),
        &delegate,
    );
    run_frames(&mut scene, 10);

    // Tracking refines the plane estimate a few times.
    let refinements = [
        PlaneAnchor::new(table, Vec3::new(0.12, 0.0, -0.42), Vec2::new(0.24, 0.18)),
        PlaneAnchor::new(table, Vec3::new(0.11, 0.0, -0.41), Vec2::new(0.31, 0.22)),
        PlaneAnchor::new(table, Vec3::new(0.11, 0.0, -0.40), Vec2::new(0.33, 0.24)),
    ];
    for anchor in &refinements {
        scene.anchor_updated(anchor);
        run_frames(&mut scene, 10);
    }

    let surface = scene.surface(table).expect("surface was registered");
    log::info!(
        "surface settled at {:.2}x{:.2}",
        surface.width(),
        surface.height()
    );

    // The user taps the surface: freeze it and build the voxels up.
    scene
        .begin_materialization(table)
        .expect("surface was registered");
    while scene
        .surface(table)
        .is_some_and(PlatformSurface::is_materializing)
    {
        run_frames(&mut scene, 1);
    }

    log::info!("materialized {} voxel(s)", scene.voxel_count(table));

    // Aim at one voxel, then look away.
    scene.set_focus(
        Some(FocusTarget {
            anchor: table,
            index: 0,
            face: VoxelFace::Front,
        }),
        &mut delegate,
    );
    scene.set_focus(None, &mut delegate);

    // Further measurements no longer resize the frozen surface.
    scene.anchor_updated(&PlaneAnchor::new(
        table,
        Vec3::new(0.2, 0.0, -0.38),
        Vec2::new(0.5, 0.5),
    ));
    run_frames(&mut scene, 10);

    let surface = scene.surface(table).expect("surface was registered");
    log::info!(
        "after late refinement: {:.2}x{:.2} at ({:.2}, _, {:.2})",
        surface.width(),
        surface.height(),
        surface.position().x,
        surface.position().z
    );

    log::info!("Tabletop demo complete");
}
