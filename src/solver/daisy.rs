//! Stage 1: the daisy.
//!
//! Puts the yellow center on Up and gathers the four white edge stickers
//! around it, facing up. A sticker sharing a slice with an open slot is
//! delivered with a playbook sequence; otherwise a single clockwise quarter
//! turn rearranges the cube until such a pair exists.

use log::{debug, warn};

use crate::cell::{Cell, Color};
use crate::cube::Cube;
use crate::geometry::{Axis, Direction, Side};

use super::playbook::{playbook, Playbook, PlaybookKey};
use super::{up_cross, Step};

/// Generous ceiling on converge iterations. Every petal needs at most a
/// handful of set-up turns, so reaching it means the search logic is broken.
const MAX_ITERATIONS: usize = 64;

#[derive(Debug, Default)]
pub struct Daisy;

impl Daisy {
    pub fn new() -> Self {
        Self
    }
}

impl Step for Daisy {
    fn name(&self) -> &'static str {
        "daisy"
    }

    fn execute(&mut self, cube: &mut Cube) {
        cube.highlight(None);
        put_yellow_on_top(cube);
        build_daisy(cube);
    }
}

/// Enqueues the one whole-cube rotation that brings the yellow center Up.
fn put_yellow_on_top(cube: &mut Cube) {
    cube.play_all_moves();
    let yellow = cube.center_of(Color::Yellow);
    let side = Side::from_normal(yellow.normal()).expect("center cells face along an axis");

    let (axis, angle) = match side {
        Side::Up => return,
        Side::Front => (Axis::X, -90),
        Side::Back => (Axis::X, 90),
        Side::Down => (Axis::X, 180),
        Side::Right => (Axis::Z, 90),
        Side::Left => (Axis::Z, -90),
    };
    debug!("yellow center faces {side:?}, rotating cube {angle} about {axis:?}");
    cube.rotate(axis, angle);
}

fn build_daisy(cube: &mut Cube) {
    for iteration in 0.. {
        cube.play_all_moves();

        let whites = loose_white_edges(cube);
        if whites.is_empty() {
            debug!("daisy complete after {iteration} iterations");
            return;
        }
        assert!(
            iteration < MAX_ITERATIONS,
            "daisy did not converge within {MAX_ITERATIONS} iterations"
        );

        let targets = open_slots(cube);
        match find_pair(&targets, &whites) {
            Some((target, white)) => {
                let key = PlaybookKey {
                    target: target.position(),
                    white: white.position(),
                    normal: white.normal(),
                };
                cube.highlight(None);
                cube.highlight(Some(&[target.id(), white.id()]));

                debug!("delivering {:?} into slot {:?}", white.id(), key.target);
                deliver(cube, &key, playbook());
            }
            None => {
                let side = pick_moving_side(cube, &whites);
                debug!("no deliverable pair, turning {side:?}");
                cube.turn(side, Direction::Clockwise);
            }
        }
    }
}

/// Enqueues the playbook sequence for `key`. A missing entry is recovered
/// with one clockwise Up turn so the loop can try again.
fn deliver(cube: &mut Cube, key: &PlaybookKey, book: &Playbook) {
    match book.get(key) {
        Some(sequence) => {
            for &(side, direction) in sequence.iter() {
                cube.turn(side, direction);
            }
        }
        None => {
            warn!("no playbook entry for {key:?}, turning Up");
            cube.turn(Side::Up, Direction::Clockwise);
        }
    }
}

/// Up-cross edge stickers that are not white yet, in slot order.
fn open_slots(cube: &Cube) -> Vec<Cell> {
    up_cross(cube)
        .into_iter()
        .filter(|cell| cell.color() != Color::White)
        .cloned()
        .collect()
}

/// White edge stickers that are not yet petals, in id order.
fn loose_white_edges(cube: &Cube) -> Vec<Cell> {
    cube.cells()
        .iter()
        .filter(|cell| cell.color() == Color::White && cell.is_edge())
        .filter(|cell| !is_petal(cell))
        .cloned()
        .collect()
}

fn is_petal(cell: &Cell) -> bool {
    cell.position().1 == 1 && cell.normal() == Side::Up.normal()
}

/// Finds an open slot and a white sticker that one turn of the slot's slice
/// carries into it facing up: same slice, and the sticker does not face
/// along the slice axis.
fn find_pair<'a>(targets: &'a [Cell], whites: &'a [Cell]) -> Option<(&'a Cell, &'a Cell)> {
    targets.iter().find_map(|target| {
        let (tx, _, tz) = target.position();
        whites
            .iter()
            .find(|white| {
                let (wx, _, wz) = white.position();
                let (nx, _, nz) = white.normal();
                if tx != 0 {
                    wx == tx && nx == 0
                } else {
                    wz == tz && nz == 0
                }
            })
            .map(|white| (target, white))
    })
}

/// Picks the side for one clockwise set-up turn when nothing is deliverable.
///
/// Works on the lowest-id loose white sticker:
/// - facing sideways on Up: turn its own face, which drops it into the
///   middle layer without touching any petal (the slot in that face is the
///   sticker's own piece);
/// - facing sideways on Down: turn its face the same way, unless that face's
///   Up slot holds a petal, in which case turn Up to move the petal aside;
/// - anywhere else (middle layer, or facing down) the slot it needs is taken,
///   so turn Up to bring an open slot around.
///
/// Up turns never disturb petals and the face turns above never touch one,
/// so the petal count never drops. Each clockwise turn is never the inverse
/// of the turn before it.
fn pick_moving_side(cube: &Cube, whites: &[Cell]) -> Side {
    let Some(white) = whites.first() else {
        return Side::Up;
    };
    let (_, y, _) = white.position();
    let facing_sideways = white.normal().1 == 0;

    if y == 0 || !facing_sideways {
        return Side::Up;
    }

    let side = Side::from_normal(white.normal()).expect("edge stickers face along an axis");
    if y == -1 && slot_holds_petal(cube, side) {
        return Side::Up;
    }
    side
}

/// Whether the Up-cross slot on `side` is white facing up.
fn slot_holds_petal(cube: &Cube, side: Side) -> bool {
    let (x, _, z) = side.normal();
    cube.cell_at((x, 1, z), Side::Up.normal())
        .is_some_and(|cell| cell.color() == Color::White)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::CubeMove;
    use crate::factory::CubeFactory;
    use crate::shuffler::Shuffler;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_daisy(cube: &Cube) {
        assert_eq!(cube.center(Side::Up).color(), Color::Yellow);
        for cell in up_cross(cube) {
            assert_eq!(cell.color(), Color::White, "slot {:?}", cell.position());
        }
    }

    #[test_log::test]
    fn test_orients_yellow_from_every_side() {
        let rotations = [
            (Axis::X, 0),
            (Axis::X, 90),
            (Axis::X, -90),
            (Axis::X, 180),
            (Axis::Z, 90),
            (Axis::Z, -90),
        ];
        for (axis, angle) in rotations {
            let mut cube = CubeFactory::new().create_cube();
            cube.rotate(axis, angle);
            cube.play_all_moves();

            let before = cube.moves().len();
            put_yellow_on_top(&mut cube);
            assert!(cube.moves().len() - before <= 1, "{axis:?} {angle}");
            cube.play_all_moves();
            assert_eq!(cube.center(Side::Up).color(), Color::Yellow, "{axis:?} {angle}");
        }
    }

    #[test_log::test]
    fn test_builds_daisy_from_solved() {
        let mut cube = CubeFactory::new().create_cube();
        Daisy::new().execute(&mut cube);
        cube.play_all_moves();
        assert_daisy(&cube);
    }

    #[test_log::test]
    fn test_builds_daisy_from_scrambles() {
        for seed in 0..40 {
            let mut cube = CubeFactory::new().create_cube();
            Shuffler::new(StdRng::seed_from_u64(seed)).shuffle(&mut cube);
            Daisy::new().execute(&mut cube);
            cube.play_all_moves();
            assert_daisy(&cube);
        }
    }

    #[test]
    fn test_pair_search_requires_shared_slice() {
        let mut cube = CubeFactory::new().create_cube();
        cube.turn(Side::Right, Direction::Clockwise);
        cube.play_all_moves();

        // R carries the white right edge from Down to the front-right edge, facing front
        let whites = loose_white_edges(&cube);
        assert_eq!(whites.len(), 4);
        let moved = whites
            .iter()
            .find(|cell| cell.position() == (1, 0, 1))
            .expect("white sticker on the front-right edge");
        assert_eq!(moved.normal(), (0, 0, 1));

        // the front slot is served first, by the untouched sticker below it
        let targets = open_slots(&cube);
        let (target, white) = find_pair(&targets, &whites).expect("deliverable pair");
        assert_eq!(target.position(), (0, 1, 1));
        assert_eq!(white.position(), (0, -1, 1));

        // the right slot shares a slice with the moved sticker
        let (target, white) = find_pair(&targets[1..2], &whites).expect("deliverable pair");
        assert_eq!(target.position(), (1, 1, 0));
        assert_eq!(white.id(), moved.id());
    }

    #[test]
    fn test_sideways_up_sticker_turns_its_own_face() {
        let mut cube = CubeFactory::new().create_cube();
        // F then L' lifts the white front-bottom edge onto the Up-left slot, facing left
        cube.turn(Side::Front, Direction::Clockwise);
        cube.turn(Side::Left, Direction::Counterclockwise);
        cube.play_all_moves();

        let whites = loose_white_edges(&cube);
        let first = &whites[0];
        assert_eq!(first.position(), (-1, 1, 0));
        assert_eq!(first.normal(), (-1, 0, 0));
        assert_eq!(pick_moving_side(&cube, &whites), Side::Left);
    }

    #[test]
    fn test_sideways_down_sticker_waits_for_open_slot() {
        let mut cube = CubeFactory::new().create_cube();
        // F L tips the white front-bottom edge under Left, facing left;
        // R2 U2 then parks a petal in the Left slot above it
        for (side, direction) in [
            (Side::Front, Direction::Clockwise),
            (Side::Left, Direction::Clockwise),
            (Side::Right, Direction::Clockwise),
            (Side::Right, Direction::Clockwise),
            (Side::Up, Direction::Clockwise),
            (Side::Up, Direction::Clockwise),
        ] {
            cube.turn(side, direction);
        }
        cube.play_all_moves();

        let whites = loose_white_edges(&cube);
        assert_eq!(whites[0].position(), (-1, -1, 0));
        assert_eq!(whites[0].normal(), (-1, 0, 0));
        assert!(slot_holds_petal(&cube, Side::Left));
        assert_eq!(pick_moving_side(&cube, &whites), Side::Up);
    }

    #[test]
    fn test_missing_playbook_entry_turns_up() {
        let mut cube = CubeFactory::new().create_cube();
        let key = PlaybookKey {
            target: (0, 1, 1),
            white: (0, -1, 1),
            normal: (0, -1, 0),
        };

        deliver(&mut cube, &key, &Playbook::default());
        assert_eq!(cube.pending_moves(), &[CubeMove::turn(Side::Up, Direction::Clockwise)]);

        cube.play_all_moves();
        deliver(&mut cube, &key, playbook());
        assert_eq!(cube.pending_moves().len(), 2);
    }
}
