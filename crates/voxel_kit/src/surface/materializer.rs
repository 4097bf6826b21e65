//! Paced voxel materialization
//!
//! Once a surface freezes, its voxels are not spawned all at once: one voxel
//! appears per tick at a fixed short interval, giving a visual build-up.
//! Positions are consumed from the end of the computed sequence backward, so
//! the last-computed position appears first. The sequence runs exactly once
//! per position; dropping the materializer (with its surface) silently stops
//! the remaining ticks.

use crate::foundation::math::Vec3;
use crate::foundation::time::TickTimer;
use crate::voxel::VoxelNode;

/// Paced spawner for a surface's voxels
#[derive(Debug, Clone)]
pub struct Materializer {
    pending: Vec<Vec3>,
    side_length: f32,
    timer: TickTimer,
}

impl Materializer {
    /// Create a materializer for the given cell positions.
    ///
    /// `interval` is the delay between consecutive spawns, in seconds.
    pub fn new(positions: Vec<Vec3>, side_length: f32, interval: f32) -> Self {
        Self {
            pending: positions,
            side_length,
            timer: TickTimer::new(interval),
        }
    }

    /// Advance by `dt` seconds, returning the voxels that materialized.
    ///
    /// At most one voxel materializes per elapsed tick; a delta spanning
    /// several intervals yields several voxels. Materialized voxels are
    /// immutable.
    pub fn advance(&mut self, dt: f32) -> Vec<VoxelNode> {
        if self.pending.is_empty() {
            return Vec::new();
        }

        let ticks = self.timer.advance(dt);
        let count = (ticks as usize).min(self.pending.len());

        let mut spawned = Vec::with_capacity(count);
        for _ in 0..count {
            if let Some(position) = self.pending.pop() {
                spawned.push(VoxelNode::new(position, self.side_length).with_mutable(false));
            }
        }

        spawned
    }

    /// Number of positions not yet materialized
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    /// Whether every position has materialized
    pub fn is_finished(&self) -> bool {
        self.pending.is_empty()
    }
}
