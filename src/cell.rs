//! Facelet-bearing cells and their colors.
//!
//! A cell is a single sticker: it has a fixed color, sits at a lattice
//! position (the piece it belongs to) and faces outward along a unit normal.
//! Edge pieces therefore carry two cells at the same position, corners three.

use crate::geometry::{nonzero_components, Coord, Rotation};

/// Sticker colors of a standard cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Yellow,
    Green,
    Blue,
    Orange,
    Red,
}

impl Color {
    /// One-letter code used by the text renderings.
    pub const fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Orange => 'O',
            Color::Red => 'R',
        }
    }
}

/// Stable identity of a cell, assigned once by whoever builds the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub u32);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    id: CellId,
    color: Color,
    position: Coord,
    normal: Coord,
    rotation: Rotation,
    highlighted: bool,
}

impl Cell {
    pub fn new(id: CellId, color: Color, position: Coord, normal: Coord, rotation: Rotation) -> Self {
        Self {
            id,
            color,
            position,
            normal,
            rotation,
            highlighted: false,
        }
    }

    pub fn id(&self) -> CellId {
        self.id
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn position(&self) -> Coord {
        self.position
    }

    pub fn normal(&self) -> Coord {
        self.normal
    }

    /// Latest rotation step and the orientation accumulated since construction.
    pub fn rotation(&self) -> &Rotation {
        &self.rotation
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Whether this sticker belongs to an edge piece.
    pub fn is_edge(&self) -> bool {
        nonzero_components(self.position) == 2
    }

    /// Whether this sticker is a face center.
    pub fn is_center(&self) -> bool {
        nonzero_components(self.position) == 1
    }

    pub(crate) fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    /// Moves the cell by one rotation step, exactly.
    pub(crate) fn rotate(&mut self, step: &Rotation) {
        self.position = step.transform.apply(self.position);
        self.normal = step.transform.apply(self.normal);
        self.rotation = self.rotation.compose(step);
    }
}
