use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::Position;

/// A painted cell. The color is an opaque CSS color string; it is stored
/// verbatim, never parsed or validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
    pub color: String,
}

/// One layer of the editing session: an independently toggleable set of
/// painted cells. A coordinate missing from the map is unpainted.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub id: String,
    pub name: String,
    pub visible: bool,
    cells: HashMap<Position, Cell>,
}

impl Layer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Layer {
            id: id.into(),
            name: name.into(),
            visible: true,
            cells: HashMap::new(),
        }
    }

    pub fn get_cell(&self, pos: impl Into<Position>) -> Option<&Cell> {
        self.cells.get(&pos.into())
    }

    /// Paints `pos` with `color`, overwriting any previous cell there.
    pub fn set_cell(&mut self, pos: impl Into<Position>, color: impl Into<String>) {
        let pos = pos.into();
        self.cells.insert(
            pos,
            Cell {
                x: pos.x,
                y: pos.y,
                color: color.into(),
            },
        );
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
