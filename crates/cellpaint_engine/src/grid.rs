use serde::{Deserialize, Serialize};

use crate::{Color, Position, Size};

/// Cell arrangement of the grid. Dispatch is a plain `match` on the tag so
/// both variants stay visible in one place.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridType {
    #[default]
    Square,
    Hex,
}

impl std::fmt::Display for GridType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridType::Square => write!(f, "square"),
            GridType::Hex => write!(f, "hex"),
        }
    }
}

/// Pixel placement of a cell. Fractional because odd hex rows are shifted by
/// half a cell width.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PixelPosition {
    pub x: f32,
    pub y: f32,
}

impl PixelPosition {
    pub const fn new(x: f32, y: f32) -> Self {
        PixelPosition { x, y }
    }
}

impl std::fmt::Display for PixelPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(x: {}, y: {})", self.x, self.y)
    }
}

/// Default per-cell style descriptor handed to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct CellStyle {
    pub spacing: f32,
    pub border_color: Color,
    pub border_width: f32,
    pub show_border: bool,
    pub cell_padding: f32,
}

impl Default for CellStyle {
    fn default() -> Self {
        CellStyle {
            spacing: 0.0,
            border_color: Color::new(0xCC, 0xCC, 0xCC),
            border_width: 1.0,
            show_border: true,
            cell_padding: 0.0,
        }
    }
}

/// Pure geometry over a rectangular logical grid of `size` cells, each
/// `cell_size` pixels. Cheap to construct, carries no state beyond its
/// parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    grid_type: GridType,
    size: Size,
    cell_size: Size,
}

impl Grid {
    pub fn new(grid_type: GridType, size: impl Into<Size>, cell_size: impl Into<Size>) -> Self {
        Grid {
            grid_type,
            size: size.into(),
            cell_size: cell_size.into(),
        }
    }

    pub fn get_grid_type(&self) -> GridType {
        self.grid_type
    }

    pub fn get_size(&self) -> Size {
        self.size
    }

    pub fn get_cell_size(&self) -> Size {
        self.cell_size
    }

    pub fn get_width(&self) -> i32 {
        self.size.width
    }

    pub fn get_height(&self) -> i32 {
        self.size.height
    }

    /// All valid coordinates in row-major order (y outer, x inner).
    /// Recomputed on every call; empty for degenerate dimensions.
    pub fn coordinates(&self) -> impl Iterator<Item = Position> {
        let width = self.size.width.max(0);
        let height = self.size.height.max(0);
        (0..height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }

    /// Pixel position of cell `(x, y)`. Not bounds-checked: any integer
    /// input is valid and maps through the same arithmetic.
    pub fn cell_position(&self, x: i32, y: i32) -> PixelPosition {
        let cw = self.cell_size.width as f32;
        let ch = self.cell_size.height as f32;
        match self.grid_type {
            GridType::Square => PixelPosition::new(x as f32 * cw, y as f32 * ch),
            GridType::Hex => {
                // Staggered brick layout: odd rows shift right by half a cell.
                let offset = if y % 2 == 0 { 0.0 } else { cw / 2.0 };
                PixelPosition::new(x as f32 * cw + offset, y as f32 * ch)
            }
        }
    }

    /// Per-cell style. Both variants share the default descriptor for now;
    /// the dispatch stays so they can diverge.
    pub fn cell_style(&self) -> CellStyle {
        match self.grid_type {
            GridType::Square | GridType::Hex => CellStyle::default(),
        }
    }
}
