use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::{Color, Result};

/// How a background image is fitted to the grid area.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundSize {
    #[default]
    Cover,
    Contain,
    Repeat,
}

/// Non-geometric presentation settings of the grid. Data only; the single
/// behavior is decoding the stored background image reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridStyleConfig {
    pub spacing: f32,
    pub border_color: Color,
    pub border_width: f32,
    pub show_border: bool,
    pub cell_padding: f32,
    pub grid_background: Color,
    /// Base64 blob reference, set from raw image bytes. `None` = no image.
    pub grid_background_image: Option<String>,
    pub grid_background_size: BackgroundSize,
    pub show_grid_background_image: bool,
    pub alternate_color: Color,
    pub use_alternate_color: bool,
    pub grid_pattern: String,
}

impl Default for GridStyleConfig {
    fn default() -> Self {
        GridStyleConfig {
            spacing: 0.0,
            border_color: Color::new(0xCC, 0xCC, 0xCC),
            border_width: 0.1,
            show_border: true,
            cell_padding: 0.0,
            grid_background: Color::new(0xFF, 0xFF, 0xFF),
            grid_background_image: None,
            grid_background_size: BackgroundSize::default(),
            show_grid_background_image: true,
            alternate_color: Color::new(0xF5, 0xF5, 0xF5),
            use_alternate_color: true,
            grid_pattern: "solid".to_string(),
        }
    }
}

impl GridStyleConfig {
    /// Stores `data` as the background image reference, or clears it.
    pub fn set_background_image(&mut self, data: Option<&[u8]>) {
        self.grid_background_image = data.map(|bytes| STANDARD.encode(bytes));
    }

    /// Decodes the stored background image reference back to raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EngineError::Base64Decode`] if the stored reference
    /// is not valid base64.
    pub fn background_image_bytes(&self) -> Result<Option<Vec<u8>>> {
        match &self.grid_background_image {
            Some(data) => Ok(Some(STANDARD.decode(data)?)),
            None => Ok(None),
        }
    }
}
