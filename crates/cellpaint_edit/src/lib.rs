#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]

mod editor;
pub use editor::*;

// Re-export the engine types the store surfaces in its API.
pub use cellpaint_engine::{
    BackgroundSize, Cell, CellStyle, Color, EngineError, Grid, GridStyleConfig, GridType, Layer, Palette, PixelPosition, Position, Result, Size,
    EDITOR_DEFAULT_PALETTE,
};
