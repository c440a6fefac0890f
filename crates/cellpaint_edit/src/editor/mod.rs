mod history;
pub use history::*;

mod events;
pub use events::*;

mod layer_operations;
mod edit_operations;

use cellpaint_engine::{Grid, GridStyleConfig, GridType, Layer, Palette, Size};

/// Single source of truth for one editing session.
///
/// All mutations go through the action methods; each publishes exactly one
/// change event, and the snapshot-writing ones commit exactly one history
/// entry via [`EditState::save_state`]. Derived values (`active_layer`,
/// `grid`) are recomputed on access, never cached.
pub struct EditState {
    pub(crate) grid_type: GridType,
    pub(crate) grid_size: Size,
    pub(crate) cell_size: Size,
    pub(crate) layers: Vec<Layer>,
    pub(crate) active_layer_id: Option<String>,
    pub(crate) color_palette: Palette,
    pub(crate) selected_color: String,
    pub(crate) grid_style: GridStyleConfig,
    pub(crate) history: Vec<EditorSnapshot>,
    pub(crate) history_index: usize,
    pub(crate) next_layer_id: u64,
    pub(crate) listeners: Vec<Box<dyn Fn(&EditorEvent)>>,
}

impl Default for EditState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditState {
    /// A session over the default 12×5 square grid of 50×50 px cells,
    /// bootstrapped with one empty layer (and its history entry).
    pub fn new() -> Self {
        Self::with_grid(GridType::Square, Size::new(12, 5), Size::new(50, 50))
    }

    /// A session over a custom grid. Dimensions are fixed for the lifetime
    /// of the session; see [`EditState::update_grid_size`].
    pub fn with_grid(grid_type: GridType, grid_size: impl Into<Size>, cell_size: impl Into<Size>) -> Self {
        let mut state = Self {
            grid_type,
            grid_size: grid_size.into(),
            cell_size: cell_size.into(),
            layers: Vec::new(),
            active_layer_id: None,
            color_palette: Palette::default(),
            selected_color: "#FF0000".to_string(),
            grid_style: GridStyleConfig::default(),
            history: Vec::new(),
            history_index: 0,
            next_layer_id: 0,
            listeners: Vec::new(),
        };
        state.create_new_layer();
        state
    }

    pub fn get_grid_type(&self) -> GridType {
        self.grid_type
    }

    pub fn get_grid_size(&self) -> Size {
        self.grid_size
    }

    pub fn get_cell_size(&self) -> Size {
        self.cell_size
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn get_active_layer_id(&self) -> Option<&str> {
        self.active_layer_id.as_deref()
    }

    /// The layer `active_layer_id` points at. `None` when the id matches no
    /// layer — deleting the active layer leaves its id dangling.
    pub fn active_layer(&self) -> Option<&Layer> {
        let id = self.active_layer_id.as_deref()?;
        self.layers.iter().find(|layer| layer.id == id)
    }

    pub(crate) fn active_layer_mut(&mut self) -> Option<&mut Layer> {
        let id = self.active_layer_id.as_deref()?;
        self.layers.iter_mut().find(|layer| layer.id == id)
    }

    /// A fresh geometry object for the current grid parameters. Recomputed
    /// per call; construction is pure arithmetic setup.
    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_type, self.grid_size, self.cell_size)
    }

    pub fn color_palette(&self) -> &Palette {
        &self.color_palette
    }

    pub fn get_selected_color(&self) -> &str {
        &self.selected_color
    }

    pub fn grid_style(&self) -> &GridStyleConfig {
        &self.grid_style
    }
}
