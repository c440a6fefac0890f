use cellpaint_engine::GridType;

use super::{EditState, EditorEvent};

impl EditState {
    /// Paints one cell of the active layer, overwriting any previous color
    /// there. Does nothing without an active layer. Coordinates are not
    /// bounds-checked; cells outside the grid are stored like any other.
    pub fn set_cell_color(&mut self, x: i32, y: i32, color: impl Into<String>) {
        let Some(layer) = self.active_layer_mut() else {
            log::debug!("set_cell_color: no active layer");
            return;
        };
        layer.set_cell((x, y), color);
        self.save_state();
        self.notify(&EditorEvent::CellsChanged);
    }

    /// Fills every coordinate of the current grid in the active layer with
    /// `color`. Does nothing without an active layer. The whole fill is one
    /// history entry.
    pub fn color_all_cells_in_layer(&mut self, color: &str) {
        let grid = self.grid();
        let Some(layer) = self.active_layer_mut() else {
            log::debug!("color_all_cells_in_layer: no active layer");
            return;
        };
        for pos in grid.coordinates() {
            layer.set_cell(pos, color);
        }
        self.save_state();
        self.notify(&EditorEvent::CellsChanged);
    }

    /// Stores raw image bytes as the grid background reference (`None`
    /// clears it). Writes a history entry, though the image itself is not
    /// part of snapshots, so undo does not bring a replaced image back.
    pub fn set_grid_background_image(&mut self, image_data: Option<&[u8]>) {
        self.grid_style.set_background_image(image_data);
        self.save_state();
        self.notify(&EditorEvent::StyleChanged);
    }

    /// Sets the paint color used by the UI. Not layer data: no history
    /// entry, no event.
    pub fn set_selected_color(&mut self, color: impl Into<String>) {
        self.selected_color = color.into();
    }

    /// Switches between square and hex cell arrangement. Geometry follows on
    /// the next [`EditState::grid`] access; no history entry is written.
    pub fn set_grid_type(&mut self, grid_type: GridType) {
        self.grid_type = grid_type;
        self.notify(&EditorEvent::GridChanged);
    }

    pub fn update_grid_size(&mut self, _width: i32, _height: i32) {
        // TODO: resizing needs a policy for painted cells outside the new
        // bounds before it can be wired up
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{EditState, GridType, Size};

    #[test]
    fn test_set_cell_color() {
        let mut state = EditState::new();
        state.set_cell_color(3, 4, "#ABC");

        let cell = state.active_layer().unwrap().get_cell((3, 4)).unwrap();
        assert_eq!((3, 4), (cell.x, cell.y));
        assert_eq!("#ABC", cell.color);
    }

    #[test]
    fn test_set_cell_color_accepts_any_color_string() {
        let mut state = EditState::new();
        state.set_cell_color(0, 0, "red");
        state.set_cell_color(1, 0, "rgba(1, 2, 3, 0.5)");
        assert_eq!("red", state.active_layer().unwrap().get_cell((0, 0)).unwrap().color);
        assert_eq!(2, state.active_layer().unwrap().cell_count());
    }

    #[test]
    fn test_set_cell_color_without_active_layer_is_a_no_op() {
        let mut state = EditState::new();
        let id = state.get_active_layer_id().unwrap().to_string();
        state.delete_layer(&id);
        let history_len = state.history().len();

        state.set_cell_color(0, 0, "red");

        assert_eq!(history_len, state.history().len());
        assert!(state.layers().is_empty());
    }

    #[test]
    fn test_overwrite_keeps_single_cell_and_single_entry_per_paint() {
        let mut state = EditState::new();
        state.set_cell_color(0, 0, "red");
        state.set_cell_color(0, 0, "blue");

        assert_eq!(1, state.active_layer().unwrap().cell_count());
        // one entry per paint action, not per distinct cell
        assert_eq!(3, state.history().len());
    }

    #[test]
    fn test_color_all_cells_paints_whole_grid_in_one_entry() {
        let mut state = EditState::with_grid(GridType::Square, Size::new(2, 2), Size::new(50, 50));
        let history_len = state.history().len();

        state.color_all_cells_in_layer("#00FF00");

        let layer = state.active_layer().unwrap();
        assert_eq!(4, layer.cell_count());
        assert!(layer.cells().all(|cell| cell.color == "#00FF00"));
        assert_eq!(history_len + 1, state.history().len());
    }

    #[test]
    fn test_color_all_cells_overwrites_existing_cells() {
        let mut state = EditState::with_grid(GridType::Hex, Size::new(2, 2), Size::new(50, 50));
        state.set_cell_color(0, 0, "red");

        state.color_all_cells_in_layer("blue");

        let layer = state.active_layer().unwrap();
        assert_eq!(4, layer.cell_count());
        assert_eq!("blue", layer.get_cell((0, 0)).unwrap().color);
    }

    #[test]
    fn test_color_all_cells_on_empty_grid() {
        let mut state = EditState::with_grid(GridType::Square, Size::new(0, 0), Size::new(50, 50));
        state.color_all_cells_in_layer("red");
        assert_eq!(0, state.active_layer().unwrap().cell_count());
        // still exactly one entry for the bulk action
        assert_eq!(2, state.history().len());
    }

    #[test]
    fn test_set_grid_background_image() {
        let mut state = EditState::new();
        let history_len = state.history().len();

        state.set_grid_background_image(Some(b"\x89PNG\r\n".as_slice()));
        assert_eq!(Some(b"\x89PNG\r\n".to_vec()), state.grid_style().background_image_bytes().unwrap());
        assert_eq!(history_len + 1, state.history().len());

        state.set_grid_background_image(None);
        assert_eq!(None, state.grid_style().grid_background_image);
    }

    #[test]
    fn test_background_image_is_not_restored_by_undo() {
        let mut state = EditState::new();
        state.set_grid_background_image(Some(b"one".as_slice()));
        state.set_grid_background_image(Some(b"two".as_slice()));

        state.undo();

        // the cursor moved, but the image reference is not snapshotted
        assert_eq!(Some(b"two".to_vec()), state.grid_style().background_image_bytes().unwrap());
    }

    #[test]
    fn test_set_selected_color_touches_no_history() {
        let mut state = EditState::new();
        let history_len = state.history().len();
        state.set_selected_color("#00FFFF");
        assert_eq!("#00FFFF", state.get_selected_color());
        assert_eq!(history_len, state.history().len());
    }

    #[test]
    fn test_set_grid_type_changes_derived_grid() {
        let mut state = EditState::new();
        assert_eq!(GridType::Square, state.grid().get_grid_type());
        state.set_grid_type(GridType::Hex);
        assert_eq!(GridType::Hex, state.grid().get_grid_type());
    }

    #[test]
    fn test_update_grid_size_is_a_stub() {
        let mut state = EditState::new();
        state.update_grid_size(2, 2);
        assert_eq!(Size::new(12, 5), state.get_grid_size());
    }
}
