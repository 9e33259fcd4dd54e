//! Rubik's Cube Engine and Solver Library
//!
//! Models a 3x3x3 cube as 54 stickers on an integer lattice, with a move log
//! that separates planning moves from applying them, and plans the first two
//! layer-by-layer stages: the daisy and the white cross.

pub mod cell;
pub mod cube;
pub mod factory;
pub mod geometry;
pub mod net;
pub mod notation;
pub mod shuffler;
pub mod solver;

pub use cell::{Cell, CellId, Color};
pub use cube::{Cube, CubeMove, Face, Status};
pub use factory::CubeFactory;
pub use geometry::{Axis, Direction, Rotation, Side};
pub use solver::{solve, Cfop, Solver};
