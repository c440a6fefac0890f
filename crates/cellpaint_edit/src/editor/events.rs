use super::EditState;

/// Class of change published after a mutating action. The presentation layer
/// re-reads the affected state on receipt; restores (undo/redo) publish
/// [`EditorEvent::HistoryChanged`] and dependents re-read everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    /// Layer list or layer metadata changed (created, deleted, activated,
    /// visibility toggled).
    LayersChanged,
    /// Painted cell data changed in the active layer.
    CellsChanged,
    /// Grid geometry parameters changed.
    GridChanged,
    /// Grid style configuration changed.
    StyleChanged,
    /// The history cursor moved and live state was restored from a snapshot.
    HistoryChanged,
}

impl EditState {
    /// Registers a listener invoked synchronously after every published
    /// change, in subscription order. Listeners are session-scoped and
    /// survive undo/redo.
    pub fn subscribe(&mut self, listener: impl Fn(&EditorEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub(crate) fn notify(&self, event: &EditorEvent) {
        for listener in &self.listeners {
            listener(event);
        }
    }
}
