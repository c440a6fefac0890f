use cellpaint_engine::{GridType, Layer};
use serde::{Deserialize, Serialize};

use super::{EditState, EditorEvent};

/// Point-in-time capture of everything undo/redo restores. Layers are deep
/// copies; a snapshot never aliases live state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSnapshot {
    pub grid_type: GridType,
    pub layers: Vec<Layer>,
    pub active_layer_id: Option<String>,
}

impl EditState {
    /// Commits the current state to history: any entries beyond the cursor
    /// (the redo branch) are discarded, the new snapshot is appended, and
    /// the cursor moves to it. The only way entries enter history.
    pub fn save_state(&mut self) {
        self.history.truncate(self.history_index + 1);
        self.history.push(EditorSnapshot {
            grid_type: self.grid_type,
            layers: self.layers.clone(),
            active_layer_id: self.active_layer_id.clone(),
        });
        self.history_index = self.history.len() - 1;
    }

    pub fn can_undo(&self) -> bool {
        self.history_index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.history_index + 1 < self.history.len()
    }

    /// Moves the cursor one entry back and restores that snapshot. Does
    /// nothing at the oldest entry.
    pub fn undo(&mut self) {
        if self.history_index == 0 {
            log::debug!("undo: already at the oldest history entry");
            return;
        }
        self.history_index -= 1;
        self.apply_snapshot(self.history_index);
    }

    /// Moves the cursor one entry forward and restores that snapshot. Does
    /// nothing at the newest entry.
    pub fn redo(&mut self) {
        if self.history_index + 1 >= self.history.len() {
            log::debug!("redo: already at the newest history entry");
            return;
        }
        self.history_index += 1;
        self.apply_snapshot(self.history_index);
    }

    pub fn history(&self) -> &[EditorSnapshot] {
        &self.history
    }

    pub fn history_index(&self) -> usize {
        self.history_index
    }

    // Restores live state from history[index]. Layers are replaced by a
    // fresh deep copy, never mutated in place.
    fn apply_snapshot(&mut self, index: usize) {
        let snapshot = &self.history[index];
        self.grid_type = snapshot.grid_type;
        self.layers = snapshot.layers.clone();
        self.active_layer_id = snapshot.active_layer_id.clone();
        self.notify(&EditorEvent::HistoryChanged);
    }
}
