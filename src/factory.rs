//! Construction of solved cubes.
//!
//! Every face starts from the same flat template: a 3x3 sheet of stickers on
//! the Front plane (z = 1) facing +Z. Each side's canonical transform carries
//! that sheet onto the side, and also becomes the cell's initial orientation
//! so renderers can draw the sticker from the template quad.

use crate::cell::{Cell, CellId, Color};
use crate::cube::Cube;
use crate::geometry::{Axis, Coord, Rotation, Side, Transform};

/// Solved-state color scheme: yellow up, white down, green front.
pub const COLOR_SCHEME: [(Side, Color); 6] = [
    (Side::Up, Color::Yellow),
    (Side::Down, Color::White),
    (Side::Right, Color::Orange),
    (Side::Left, Color::Red),
    (Side::Front, Color::Green),
    (Side::Back, Color::Blue),
];

/// Transform carrying the Front template onto `side`.
const fn canonical_transform(side: Side) -> Transform {
    match side {
        Side::Front => Transform::IDENTITY,
        Side::Back => Transform::about(Axis::Y, 180),
        Side::Right => Transform::about(Axis::Y, 90),
        Side::Left => Transform::about(Axis::Y, -90),
        Side::Up => Transform::about(Axis::X, -90),
        Side::Down => Transform::about(Axis::X, 90),
    }
}

/// Builds cubes and hands out cell ids.
///
/// The id counter belongs to the factory: cubes from one factory never share
/// an id, while independent factories number their cells identically.
#[derive(Debug, Default)]
pub struct CubeFactory {
    next_id: u32,
}

impl CubeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solved cube with freshly numbered cells.
    pub fn create_cube(&mut self) -> Cube {
        let mut cells = Vec::with_capacity(crate::cube::CELL_COUNT);
        for (side, color) in COLOR_SCHEME {
            self.create_face(side, color, &mut cells);
        }
        Cube::new(cells)
    }

    fn create_face(&mut self, side: Side, color: Color, cells: &mut Vec<Cell>) {
        let transform = canonical_transform(side);
        const TEMPLATE_NORMAL: Coord = (0, 0, 1);

        // rows top to bottom, columns left to right as seen from the front
        for y in [1, 0, -1] {
            for x in [-1, 0, 1] {
                let position = transform.apply((x, y, 1));
                let normal = transform.apply(TEMPLATE_NORMAL);
                cells.push(Cell::new(
                    self.allocate_id(),
                    color,
                    position,
                    normal,
                    Rotation::resting(transform),
                ));
            }
        }
    }

    fn allocate_id(&mut self) -> CellId {
        let id = CellId(self.next_id);
        self.next_id += 1;
        id
    }
}
