//! Stage 2: fold the daisy petals down into the white cross.

use log::debug;

use crate::cell::{Cell, CellId, Color};
use crate::cube::Cube;
use crate::geometry::{cross, negate, Direction, Side};

use super::{up_cross, Step};

#[derive(Debug, Default)]
pub struct WhiteCross;

impl WhiteCross {
    pub fn new() -> Self {
        Self
    }
}

impl Step for WhiteCross {
    fn name(&self) -> &'static str {
        "white cross"
    }

    /// Expects the daisy: yellow Up and four white petals around it.
    fn execute(&mut self, cube: &mut Cube) {
        for _ in 0..4 {
            cube.play_all_moves();
            let Some(petal) = first_petal(cube) else {
                break;
            };
            cube.highlight(None);
            cube.highlight(Some(&[petal.id()]));

            let center_side = align(cube, &petal);
            debug!("folding {:?} down on {center_side:?}", petal.id());
            for _ in 0..2 {
                cube.turn(center_side, Direction::Clockwise);
                cube.play_all_moves();
            }
        }

        cube.highlight(None);
        let finished: Vec<CellId> = down_cross(cube).into_iter().map(Cell::id).collect();
        cube.highlight(Some(&finished));
    }
}

fn first_petal(cube: &Cube) -> Option<Cell> {
    up_cross(cube)
        .into_iter()
        .find(|cell| cell.color() == Color::White)
        .cloned()
}

/// Turns Up until `petal` sits above the center matching its side sticker,
/// draining after each turn. Returns the side of that center.
fn align(cube: &mut Cube, petal: &Cell) -> Side {
    let sticker = cube
        .cells()
        .iter()
        .find(|cell| cell.position() == petal.position() && cell.id() != petal.id())
        .expect("an edge piece carries two stickers");
    let facing = sticker.normal();
    let target = cube.center_of(sticker.color()).normal();
    let center_side = Side::from_normal(target).expect("center cells face along an axis");

    if facing == negate(target) {
        for _ in 0..2 {
            cube.turn(Side::Up, Direction::Clockwise);
            cube.play_all_moves();
        }
    } else if facing != target {
        // a clockwise Up turn carries `facing` to `target` exactly when
        // facing x target points down
        let direction = if cross(facing, target).1 == -1 {
            Direction::Clockwise
        } else {
            Direction::Counterclockwise
        };
        cube.turn(Side::Up, direction);
        cube.play_all_moves();
    }

    center_side
}

/// White stickers on the Down cross.
fn down_cross(cube: &Cube) -> Vec<&Cell> {
    let down = Side::Down.normal();
    [Side::Front, Side::Right, Side::Back, Side::Left]
        .into_iter()
        .filter_map(|side| {
            let (x, _, z) = side.normal();
            cube.cell_at((x, -1, z), down)
        })
        .filter(|cell| cell.color() == Color::White)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::CubeFactory;
    use crate::solver::daisy::Daisy;

    #[test_log::test]
    fn test_folds_daisy_into_matching_cross() {
        let mut cube = CubeFactory::new().create_cube();
        Daisy::new().execute(&mut cube);
        cube.play_all_moves();
        WhiteCross::new().execute(&mut cube);
        cube.play_all_moves();

        let cross_cells = down_cross(&cube);
        assert_eq!(cross_cells.len(), 4);
        for cell in cross_cells {
            assert!(cell.is_highlighted());
        }
        for side in [Side::Front, Side::Right, Side::Back, Side::Left] {
            let (x, _, z) = side.normal();
            let sticker = cube
                .cell_at((x, -1, z), side.normal())
                .expect("side sticker of a Down edge");
            assert_eq!(sticker.color(), cube.center(side).color(), "{side:?}");
        }
        assert!(up_cross(&cube).iter().all(|cell| cell.color() != Color::White));
    }

    #[test]
    fn test_align_picks_shortest_up_turn() {
        // F2 on a solved cube leaves a petal in the front slot whose side
        // sticker is green, which already sits above the green center
        let mut cube = CubeFactory::new().create_cube();
        cube.turn(Side::Front, Direction::Clockwise);
        cube.turn(Side::Front, Direction::Clockwise);
        cube.play_all_moves();

        let petal = first_petal(&cube).expect("petal in the front slot");
        assert_eq!(petal.position(), (0, 1, 1));
        let logged = cube.moves().len();
        assert_eq!(align(&mut cube, &petal), Side::Front);
        assert_eq!(cube.moves().len(), logged);

        // one clockwise Up turn moves it left, so the way back is counterclockwise
        cube.turn(Side::Up, Direction::Clockwise);
        cube.play_all_moves();
        let petal = first_petal(&cube).expect("petal in the left slot");
        assert_eq!(petal.position(), (-1, 1, 0));
        assert_eq!(align(&mut cube, &petal), Side::Front);
        assert_eq!(
            cube.moves().last().and_then(|last| last.direction()),
            Some(Direction::Counterclockwise)
        );
        assert_eq!(first_petal(&cube).map(|cell| cell.position()), Some((0, 1, 1)));

        // opposite the green center takes a half turn
        cube.turn(Side::Up, Direction::Clockwise);
        cube.turn(Side::Up, Direction::Clockwise);
        cube.play_all_moves();
        let petal = first_petal(&cube).expect("petal in the back slot");
        assert_eq!(petal.position(), (0, 1, -1));
        let logged = cube.moves().len();
        assert_eq!(align(&mut cube, &petal), Side::Front);
        assert_eq!(cube.moves().len(), logged + 2);
        assert_eq!(first_petal(&cube).map(|cell| cell.position()), Some((0, 1, 1)));
    }
}
