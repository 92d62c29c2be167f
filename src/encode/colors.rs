use std::collections::HashMap;

use crate::foundation::core::Color;

/// Handle slot of the pen for color table index `index`.
pub const fn pen_handle(index: usize) -> u32 {
    (index as u32) * 2 + 1
}

/// Handle slot of the brush for color table index `index`.
pub const fn brush_handle(index: usize) -> u32 {
    (index as u32) * 2 + 2
}

/// Append-only color deduplication table built during the stats pass.
///
/// Indices follow discovery order: the first color observed gets index 0.
#[derive(Clone, Debug, Default)]
pub struct ColorRegistry {
    order: Vec<Color>,
    index: HashMap<Color, usize>,
}

impl ColorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of `color`, registering it when first seen.
    pub fn observe(&mut self, color: Color) -> usize {
        if let Some(&idx) = self.index.get(&color) {
            return idx;
        }
        let idx = self.order.len();
        self.order.push(color);
        self.index.insert(color, idx);
        idx
    }

    /// Number of distinct colors observed so far.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// `true` when no color has been observed.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Freeze the registry into the table used by the emission pass.
    pub fn finalize(self) -> ColorTable {
        ColorTable {
            order: self.order,
            index: self.index,
        }
    }
}

/// Frozen, read-only color table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorTable {
    order: Vec<Color>,
    index: HashMap<Color, usize>,
}

impl ColorTable {
    /// Index assigned to `color` during the stats pass.
    pub fn lookup(&self, color: Color) -> Option<usize> {
        self.index.get(&color).copied()
    }

    /// Colors in index order.
    pub fn colors(&self) -> &[Color] {
        &self.order
    }

    /// Number of colors.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// `true` when the table holds no color.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/colors.rs"]
mod tests;
