use cellpaint_engine::Layer;

use super::{EditState, EditorEvent};

impl EditState {
    /// Appends a new empty layer and makes it active. The id comes from a
    /// monotonic per-session counter and stays unique for the whole session;
    /// the display name is `Layer {count + 1}`, so numbers are reused after
    /// deletions.
    pub fn create_new_layer(&mut self) {
        self.next_layer_id += 1;
        let layer = Layer::new(format!("layer-{}", self.next_layer_id), format!("Layer {}", self.layers.len() + 1));
        self.active_layer_id = Some(layer.id.clone());
        self.layers.push(layer);
        self.save_state();
        self.notify(&EditorEvent::LayersChanged);
    }

    /// Removes the first layer matching `layer_id`, keeping the order of the
    /// rest; does nothing for an unknown id. The active layer id is left
    /// untouched even when it pointed at the removed layer, and no history
    /// entry is written.
    pub fn delete_layer(&mut self, layer_id: &str) {
        let Some(index) = self.layers.iter().position(|layer| layer.id == layer_id) else {
            log::debug!("delete_layer: no layer with id {layer_id}");
            return;
        };
        self.layers.remove(index);
        self.notify(&EditorEvent::LayersChanged);
    }

    /// Makes `layer_id` the paint target. The id is not checked against the
    /// layer list; a stale id simply leaves the session without an active
    /// layer.
    pub fn set_active_layer(&mut self, layer_id: impl Into<String>) {
        self.active_layer_id = Some(layer_id.into());
        self.notify(&EditorEvent::LayersChanged);
    }

    /// Toggles compositing visibility; does nothing for an unknown id.
    /// Visibility is layer data and travels with snapshots, but flipping it
    /// writes no history entry.
    pub fn set_layer_visible(&mut self, layer_id: &str, visible: bool) {
        let Some(layer) = self.layers.iter_mut().find(|layer| layer.id == layer_id) else {
            log::debug!("set_layer_visible: no layer with id {layer_id}");
            return;
        };
        layer.visible = visible;
        self.notify(&EditorEvent::LayersChanged);
    }
}
