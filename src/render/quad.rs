//! Quad Instance Staging
//!
//! Maps grid coordinates to one quad per live cell in normalized device
//! coordinates, packed as plain-old-data instances that a GPU backend can
//! upload with a single buffer write and draw with a single instanced call.
//!
//! Layout: column 0 is the left edge (x = -1) and row 0 is the top edge
//! (y = 1). Each cell spans `2 / columns` horizontally and `2 / rows`
//! vertically, so a full row of quads tiles `[-1, 1]` exactly.

use bytemuck::{Pod, Zeroable};
use cgmath::{Vector2, Vector4, VectorSpace};

use super::Renderer;
use crate::automaton::Grid;

/// Instance data for a single live cell
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CellQuad {
    /// Center and half extents [x, y, half_width, half_height]
    pub center_half_extent: [f32; 4],
    /// Color [r, g, b, a]
    pub color: [f32; 4],
}

impl CellQuad {
    pub fn new(center: Vector2<f32>, half_extent: Vector2<f32>, color: Vector4<f32>) -> Self {
        Self {
            center_half_extent: [center.x, center.y, half_extent.x, half_extent.y],
            color: color.into(),
        }
    }

    pub fn center(&self) -> Vector2<f32> {
        Vector2::new(self.center_half_extent[0], self.center_half_extent[1])
    }

    /// Bottom-left corner
    pub fn min(&self) -> Vector2<f32> {
        let [x, y, hw, hh] = self.center_half_extent;
        Vector2::new(x - hw, y - hh)
    }

    /// Top-right corner
    pub fn max(&self) -> Vector2<f32> {
        let [x, y, hw, hh] = self.center_half_extent;
        Vector2::new(x + hw, y + hh)
    }
}

/// Grid-to-screen mapping for a fixed grid size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadLayout {
    rows: usize,
    columns: usize,
    /// Fraction of the cell each quad covers; below 1.0 leaves a gap
    cell_scale: f32,
}

impl QuadLayout {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cell_scale: 1.0,
        }
    }

    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.rows(), grid.columns())
    }

    pub fn with_cell_scale(mut self, scale: f32) -> Self {
        self.cell_scale = scale.clamp(0.0, 1.0);
        self
    }

    /// Width and height of one cell in normalized device coordinates
    pub fn cell_size(&self) -> Vector2<f32> {
        Vector2::new(2.0 / self.columns as f32, 2.0 / self.rows as f32)
    }

    pub fn cell_center(&self, row: usize, col: usize) -> Vector2<f32> {
        let size = self.cell_size();
        Vector2::new(
            -1.0 + (col as f32 + 0.5) * size.x,
            1.0 - (row as f32 + 0.5) * size.y,
        )
    }

    pub fn quad(&self, row: usize, col: usize, color: Vector4<f32>) -> CellQuad {
        let half_extent = self.cell_size() * (0.5 * self.cell_scale);
        CellQuad::new(self.cell_center(row, col), half_extent, color)
    }
}

/// Age-based cell shading
///
/// Newborn cells use `young`, and the color moves linearly toward `old`
/// until `mature_age` generations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgePalette {
    pub young: Vector4<f32>,
    pub old: Vector4<f32>,
    pub mature_age: u32,
}

impl Default for AgePalette {
    fn default() -> Self {
        Self {
            young: Vector4::new(0.55, 1.0, 0.45, 1.0),
            old: Vector4::new(0.1, 0.35, 0.8, 1.0),
            mature_age: 32,
        }
    }
}

impl AgePalette {
    /// Single color regardless of age
    pub fn flat(color: Vector4<f32>) -> Self {
        Self {
            young: color,
            old: color,
            mature_age: 1,
        }
    }

    pub fn color(&self, age: u32) -> Vector4<f32> {
        if self.mature_age == 0 {
            return self.old;
        }
        let t = age.min(self.mature_age) as f32 / self.mature_age as f32;
        self.young.lerp(self.old, t)
    }
}

/// Renderer that stages one [`CellQuad`] per live cell each frame
///
/// The staged instances are rebuilt on every [`draw`](Renderer::draw) and
/// can be handed to a graphics backend through [`QuadBatch::as_bytes`].
#[derive(Debug, Clone)]
pub struct QuadBatch {
    palette: AgePalette,
    cell_scale: f32,
    instances: Vec<CellQuad>,
    layout: Option<QuadLayout>,
}

impl Default for QuadBatch {
    fn default() -> Self {
        Self::new()
    }
}

impl QuadBatch {
    pub fn new() -> Self {
        Self {
            palette: AgePalette::default(),
            cell_scale: 1.0,
            instances: Vec::new(),
            layout: None,
        }
    }

    pub fn with_palette(mut self, palette: AgePalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_cell_scale(mut self, scale: f32) -> Self {
        self.cell_scale = scale;
        self
    }

    pub fn instances(&self) -> &[CellQuad] {
        &self.instances
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// Raw instance bytes, ready for a vertex buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Layout used for the last drawn frame
    pub fn layout(&self) -> Option<&QuadLayout> {
        self.layout.as_ref()
    }
}

impl Renderer for QuadBatch {
    fn draw(&mut self, grid: &Grid) -> anyhow::Result<()> {
        let layout = QuadLayout::for_grid(grid).with_cell_scale(self.cell_scale);
        let columns = grid.columns();
        let palette = self.palette;

        self.instances.clear();
        self.instances.extend(
            grid.cells()
                .iter()
                .enumerate()
                .filter(|(_, cell)| cell.alive)
                .map(|(index, cell)| {
                    layout.quad(index / columns, index % columns, palette.color(cell.age))
                }),
        );
        self.layout = Some(layout);
        Ok(())
    }

    fn name(&self) -> &str {
        "quad-batch"
    }
}
