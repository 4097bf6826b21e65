//! Voxel grid placement
//!
//! Subdivides a rectangular surface into a lattice of cubic cells and
//! produces the center position of every cell. Cell centers sit half a
//! voxel in from the surface edges with lattice spacing equal to the voxel
//! side length, and half a voxel in front of the surface plane. When a
//! dimension is not an exact multiple of the side length the last row or
//! column still gets a full cell, so the grid may overhang the nominal
//! bounds by part of one cell; this is accepted, not corrected.

use crate::foundation::math::Vec3;

/// Grid of voxel cells covering a rectangular surface
#[derive(Debug, Clone, PartialEq)]
pub struct VoxelGrid {
    width: f32,
    height: f32,
    side_length: f32,
    rows: usize,
    columns: usize,
}

impl VoxelGrid {
    /// Compute the grid covering a `width` x `height` surface with cells of
    /// edge `side_length`.
    ///
    /// Degenerate inputs (non-positive dimensions or side length) yield an
    /// empty grid.
    pub fn new(width: f32, height: f32, side_length: f32) -> Self {
        let (rows, columns) = if side_length > 0.0 && width > 0.0 && height > 0.0 {
            (
                (height / side_length).ceil() as usize,
                (width / side_length).ceil() as usize,
            )
        } else {
            (0, 0)
        };

        Self {
            width,
            height,
            side_length,
            rows,
            columns,
        }
    }

    /// Number of rows (`ceil(height / side_length)`)
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (`ceil(width / side_length)`)
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.rows * self.columns
    }

    /// Whether the grid has no cells
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cell-center positions in row-major order.
    ///
    /// For row `r` and column `c`:
    /// `x = -width/2 + side/2 + c * side`,
    /// `y = -height/2 + side/2 + r * side`,
    /// `z = side/2`.
    pub fn positions(&self) -> Vec<Vec3> {
        let margin = self.side_length / 2.0;
        let z = margin;

        let mut result = Vec::with_capacity(self.len());

        for row in 0..self.rows {
            let y = -self.height / 2.0 + margin + row as f32 * self.side_length;
            for column in 0..self.columns {
                let x = -self.width / 2.0 + margin + column as f32 * self.side_length;
                result.push(Vec3::new(x, y, z));
            }
        }

        result
    }
}
