//! Text rendering of a cube as an unfolded net.
//!
//! ```text
//!     UUU
//!     UUU
//!     UUU
//! LLL FFF RRR BBB
//! LLL FFF RRR BBB
//! LLL FFF RRR BBB
//!     DDD
//!     DDD
//!     DDD
//! ```
//!
//! Every face is drawn as seen from outside, oriented so that neighbouring
//! faces in the net share their touching edge. Highlighted stickers are shown
//! in lower case.

use crate::cube::Cube;
use crate::geometry::{Coord, Side};

/// Letters of one face, indexed `[row][column]`.
type FaceGrid = [[char; 3]; 3];

/// Row and column of a sticker at `position` within the drawing of `side`.
fn grid_index(side: Side, (x, y, z): Coord) -> (usize, usize) {
    let (row, col) = match side {
        Side::Up => (z + 1, x + 1),
        Side::Down => (1 - z, x + 1),
        Side::Front => (1 - y, x + 1),
        Side::Back => (1 - y, 1 - x),
        Side::Right => (1 - y, 1 - z),
        Side::Left => (1 - y, z + 1),
    };
    (row as usize, col as usize)
}

fn face_grids(cube: &Cube) -> [FaceGrid; 6] {
    let mut grids = [[['.'; 3]; 3]; 6];

    for side in Side::ALL {
        for cell in cube.face(side).cells() {
            let (row, col) = grid_index(side, cell.position());
            let letter = cell.color().letter();
            grids[side.index()][row][col] = if cell.is_highlighted() {
                letter.to_ascii_lowercase()
            } else {
                letter
            };
        }
    }

    grids
}

/// Formats the cube's current (played) state as an unfolded net.
pub fn format_cube(cube: &Cube) -> String {
    let grids = face_grids(cube);
    let row_of = |side: Side, row: usize| -> String { grids[side.index()][row].iter().collect() };

    let mut output = String::new();
    for row in 0..3 {
        output.push_str("    ");
        output.push_str(&row_of(Side::Up, row));
        output.push('\n');
    }
    for row in 0..3 {
        let band: Vec<String> = [Side::Left, Side::Front, Side::Right, Side::Back]
            .into_iter()
            .map(|side| row_of(side, row))
            .collect();
        output.push_str(&band.join(" "));
        output.push('\n');
    }
    for row in 0..3 {
        output.push_str("    ");
        output.push_str(&row_of(Side::Down, row));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellId;
    use crate::factory::CubeFactory;
    use crate::geometry::Direction;

    #[test]
    fn test_solved_net_snapshot() {
        let cube = CubeFactory::new().create_cube();
        insta::assert_snapshot!(format_cube(&cube), @r"
            YYY
            YYY
            YYY
        RRR GGG OOO BBB
        RRR GGG OOO BBB
        RRR GGG OOO BBB
            WWW
            WWW
            WWW
        ");
    }

    #[test]
    fn test_up_turn_net_snapshot() {
        let mut cube = CubeFactory::new().create_cube();
        cube.turn(Side::Up, Direction::Clockwise);
        cube.play_all_moves();
        insta::assert_snapshot!(format_cube(&cube), @r"
            YYY
            YYY
            YYY
        GGG OOO BBB RRR
        RRR GGG OOO BBB
        RRR GGG OOO BBB
            WWW
            WWW
            WWW
        ");
    }

    #[test]
    fn test_front_turn_moves_up_row_onto_right_column() {
        let mut cube = CubeFactory::new().create_cube();
        cube.turn(Side::Front, Direction::Clockwise);
        cube.play_all_moves();

        let net = format_cube(&cube);
        let lines: Vec<&str> = net.lines().collect();
        // bottom row of Up now shows the red stickers from the Left face
        assert_eq!(lines[2], "    RRR");
        // left column of Right now shows yellow
        for line in &lines[3..6] {
            assert_eq!(&line[8..9], "Y", "{line}");
        }
        assert_eq!(lines[6], "    OOO");
    }

    #[test]
    fn test_highlight_renders_lower_case() {
        let mut cube = CubeFactory::new().create_cube();
        // cell 4 is the Up center: first face built, middle of the template
        cube.highlight(Some(&[CellId(4)]));
        let net = format_cube(&cube);
        assert_eq!(net.lines().nth(1), Some("    YyY"));
    }
}
