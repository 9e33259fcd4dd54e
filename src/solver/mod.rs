//! Stage-chained solver.
//!
//! Solving runs a fixed list of stages over a private clone of the cube. Each
//! stage enqueues turns on the clone and plays them as it goes, so it always
//! sees live positions; the clone's log is the plan handed back to the
//! caller, who replays it on the displayed cube at its own pace.

pub mod daisy;
pub mod playbook;
pub mod white_cross;

use log::debug;

use crate::cell::Cell;
use crate::cube::{Cube, CubeMove};
use crate::geometry::Side;

use daisy::Daisy;
use white_cross::WhiteCross;

/// One solving stage. It runs against the shared working cube until its own
/// exit condition holds; later stages rely on that condition.
pub trait Step {
    fn name(&self) -> &'static str;
    fn execute(&mut self, cube: &mut Cube);
}

/// Something that plans moves for a cube.
pub trait Solver {
    /// Returns the planned moves. Only highlight flags of `cube` change;
    /// its geometry and move log are left alone.
    fn solve(&self, cube: &mut Cube) -> Vec<CubeMove>;
}

/// Layer-by-layer solver; currently covers the daisy and the white cross.
#[derive(Debug, Default)]
pub struct Cfop;

impl Cfop {
    fn steps() -> Vec<Box<dyn Step>> {
        vec![Box::new(Daisy::new()), Box::new(WhiteCross::new())]
    }
}

impl Solver for Cfop {
    fn solve(&self, cube: &mut Cube) -> Vec<CubeMove> {
        if cube.has_next_move() {
            debug!(
                "solving from played state, {} queued moves are not taken into account",
                cube.pending_moves().len()
            );
        }

        let mut working = cube.clone();
        for mut step in Self::steps() {
            let before = working.moves().len();
            step.execute(&mut working);
            debug!(
                "{} stage queued {} moves",
                step.name(),
                working.moves().len() - before
            );
        }

        cube.copy_highlights_from(&working);
        working.moves().to_vec()
    }
}

/// Plans the daisy and white cross for `cube`. See [`Cfop`].
pub fn solve(cube: &mut Cube) -> Vec<CubeMove> {
    Cfop.solve(cube)
}

/// The four Up-cross edge stickers facing up, in Front, Right, Back, Left order.
pub(crate) fn up_cross(cube: &Cube) -> Vec<&Cell> {
    let up = Side::Up.normal();
    [Side::Front, Side::Right, Side::Back, Side::Left]
        .into_iter()
        .map(|side| {
            let (x, _, z) = side.normal();
            cube.cell_at((x, 1, z), up)
                .expect("the Up layer has four edge stickers facing up")
        })
        .collect()
}
