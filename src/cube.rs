//! The cube: 54 cells, a move log and a playback cursor.
//!
//! Enqueuing a move (`turn`, `rotate`, `push_move`) only appends to the log.
//! Cells change exclusively in `play_next_move`, and the cells a side move
//! affects are selected from their live positions at that moment. Several
//! queued moves therefore stay correct when they are played back in order.

use log::trace;
use rustc_hash::FxHashMap;

use crate::cell::{Cell, CellId, Color};
use crate::geometry::{component, Axis, Coord, Direction, Rotation, Side};

/// Number of stickers on a 3x3x3 cube.
pub const CELL_COUNT: usize = 54;

/// Number of stickers on one face.
pub const FACE_CELLS: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Solved,
    NotSolved,
}

/// A recorded command: a quarter or half turn of one side, or a
/// reorientation of the whole cube when `side` is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubeMove {
    side: Option<Side>,
    rotation: Rotation,
}

impl CubeMove {
    /// A quarter turn of `side`.
    pub const fn turn(side: Side, direction: Direction) -> Self {
        Self {
            side: Some(side),
            rotation: Rotation::new(side.axis(), side.angle(direction)),
        }
    }

    /// A reorientation of the whole cube.
    ///
    /// Panics on `Axis::None`.
    pub const fn whole(axis: Axis, angle: i32) -> Self {
        assert!(!matches!(axis, Axis::None), "a whole-cube move needs a real axis");
        Self {
            side: None,
            rotation: Rotation::new(axis, angle),
        }
    }

    /// The side this move is scoped to, or `None` for a whole-cube move.
    pub fn side(&self) -> Option<Side> {
        self.side
    }

    pub fn rotation(&self) -> &Rotation {
        &self.rotation
    }

    /// Turn direction of a side quarter turn; `None` for whole-cube moves.
    pub fn direction(&self) -> Option<Direction> {
        let side = self.side?;
        Direction::ALL
            .into_iter()
            .find(|&direction| side.angle(direction) == self.rotation.angle)
    }

    pub const fn inverse(&self) -> Self {
        Self {
            side: self.side,
            rotation: self.rotation.inverse(),
        }
    }

    /// Whether a cell at `position` is moved by this move.
    fn moves_position(&self, position: Coord) -> bool {
        match self.side {
            Some(side) => in_slice(position, side),
            None => true,
        }
    }
}

/// Whether `position` lies in the layer turned by `side`.
fn in_slice(position: Coord, side: Side) -> bool {
    component(position, side.axis()) == side.sign()
}

/// Read-only view of the nine cells facing one side.
pub struct Face<'a> {
    side: Side,
    cells: Vec<&'a Cell>,
}

impl<'a> Face<'a> {
    pub fn side(&self) -> Side {
        self.side
    }

    pub fn cells(&self) -> &[&'a Cell] {
        &self.cells
    }

    /// Solved when all nine stickers share one color.
    pub fn status(&self) -> Status {
        let mut colors = self.cells.iter().map(|cell| cell.color());
        let first = colors.next();
        if colors.all(|color| Some(color) == first) {
            Status::Solved
        } else {
            Status::NotSolved
        }
    }
}

#[derive(Debug)]
pub struct Cube {
    cells: Vec<Cell>,
    moves: Vec<CubeMove>,
    /// Number of log entries already applied to the cells.
    cursor: usize,
}

impl Cube {
    /// Wraps a full set of cells. The move log starts empty.
    ///
    /// Panics unless exactly `CELL_COUNT` cells with distinct ids are given.
    pub fn new(cells: Vec<Cell>) -> Self {
        assert_eq!(cells.len(), CELL_COUNT, "a cube has exactly {CELL_COUNT} cells");
        let mut ids: Vec<CellId> = cells.iter().map(Cell::id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), CELL_COUNT, "cell ids must be unique");

        Self {
            cells,
            moves: Vec::new(),
            cursor: 0,
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.iter().find(|cell| cell.id() == id)
    }

    /// The sticker at `position` facing along `normal`.
    pub fn cell_at(&self, position: Coord, normal: Coord) -> Option<&Cell> {
        self.cells
            .iter()
            .find(|cell| cell.position() == position && cell.normal() == normal)
    }

    /// The center sticker currently facing `side`.
    pub fn center(&self, side: Side) -> &Cell {
        self.cell_at(side.normal(), side.normal())
            .expect("every side has a center cell")
    }

    /// The center sticker of `color`.
    pub fn center_of(&self, color: Color) -> &Cell {
        self.cells
            .iter()
            .find(|cell| cell.is_center() && cell.color() == color)
            .expect("every color has a center cell")
    }

    pub fn face(&self, side: Side) -> Face<'_> {
        let normal = side.normal();
        let cells: Vec<&Cell> = self
            .cells
            .iter()
            .filter(|cell| cell.normal() == normal)
            .collect();
        debug_assert_eq!(cells.len(), FACE_CELLS);
        Face { side, cells }
    }

    /// Every cell in the layer that turns with `side`: its face plus the rim.
    pub fn slice(&self, side: Side) -> Vec<&Cell> {
        self.cells
            .iter()
            .filter(|cell| in_slice(cell.position(), side))
            .collect()
    }

    pub fn status(&self) -> Status {
        let all_solved = Side::ALL
            .into_iter()
            .all(|side| self.face(side).status() == Status::Solved);
        if all_solved {
            Status::Solved
        } else {
            Status::NotSolved
        }
    }

    /// Enqueues a reorientation of the whole cube.
    pub fn rotate(&mut self, axis: Axis, angle: i32) {
        self.push_move(CubeMove::whole(axis, angle));
    }

    /// Enqueues a quarter turn of `side`.
    pub fn turn(&mut self, side: Side, direction: Direction) {
        self.push_move(CubeMove::turn(side, direction));
    }

    /// Enqueues an already built move, e.g. one returned by a solver.
    pub fn push_move(&mut self, cube_move: CubeMove) {
        self.moves.push(cube_move);
    }

    pub fn has_next_move(&self) -> bool {
        self.cursor < self.moves.len()
    }

    /// Applies the next queued move and returns it, or `None` when the log
    /// is exhausted (in which case nothing changes).
    pub fn play_next_move(&mut self) -> Option<CubeMove> {
        let cube_move = *self.moves.get(self.cursor)?;
        self.cursor += 1;

        let rotation = *cube_move.rotation();
        for cell in &mut self.cells {
            if cube_move.moves_position(cell.position()) {
                cell.rotate(&rotation);
            }
        }

        trace!(
            "played move {}/{}: {}",
            self.cursor,
            self.moves.len(),
            cube_move
        );
        Some(cube_move)
    }

    /// Plays every queued move.
    pub fn play_all_moves(&mut self) {
        while self.play_next_move().is_some() {}
    }

    /// The whole log, played and pending.
    pub fn moves(&self) -> &[CubeMove] {
        &self.moves
    }

    /// Moves queued but not yet applied.
    pub fn pending_moves(&self) -> &[CubeMove] {
        &self.moves[self.cursor..]
    }

    /// Highlights the given cells, or clears every highlight when `None`.
    pub fn highlight(&mut self, cells: Option<&[CellId]>) {
        match cells {
            Some(ids) => {
                for cell in &mut self.cells {
                    if ids.contains(&cell.id()) {
                        cell.set_highlighted(true);
                    }
                }
            }
            None => {
                for cell in &mut self.cells {
                    cell.set_highlighted(false);
                }
            }
        }
    }

    /// Copies highlight flags from `other`, matching cells by id.
    ///
    /// Cells without a counterpart in `other` keep their flag.
    pub fn copy_highlights_from(&mut self, other: &Cube) {
        let flags: FxHashMap<CellId, bool> = other
            .cells
            .iter()
            .map(|cell| (cell.id(), cell.is_highlighted()))
            .collect();

        for cell in &mut self.cells {
            if let Some(&highlighted) = flags.get(&cell.id()) {
                cell.set_highlighted(highlighted);
            }
        }
    }
}

/// Cloning copies every cell (ids, geometry and accumulated rotation) but
/// starts a fresh move log, so the copy can be searched and mutated freely.
impl Clone for Cube {
    fn clone(&self) -> Self {
        Self {
            cells: self.cells.clone(),
            moves: Vec::new(),
            cursor: 0,
        }
    }
}
