//! Lattice geometry for the 3x3x3 cube.
//!
//! The frame is right-handed: +X points Right, +Y points Up, +Z points Front.
//! Positions and normals are integer triples whose components are all in
//! {-1, 0, 1}. Quarter turns only permute and negate components, so a cell can
//! never drift off the lattice no matter how many rotations it goes through.

/// A lattice position or a unit normal.
pub type Coord = (i32, i32, i32);

/// Rotation axis. `None` stands for "no rotation" and maps to the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
    None,
}

/// One of the six outer layers of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Front,
    Back,
    Right,
    Left,
    Up,
    Down,
}

/// Turn direction as seen from outside the turned side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Clockwise,
    Counterclockwise,
}

impl Side {
    /// All sides, in the order used for indexing per-side tables.
    pub const ALL: [Side; 6] = [
        Side::Front,
        Side::Back,
        Side::Right,
        Side::Left,
        Side::Up,
        Side::Down,
    ];

    /// The axis this side sits on.
    pub const fn axis(self) -> Axis {
        match self {
            Side::Right | Side::Left => Axis::X,
            Side::Up | Side::Down => Axis::Y,
            Side::Front | Side::Back => Axis::Z,
        }
    }

    /// Which half of the axis this side sits on: +1 or -1.
    pub const fn sign(self) -> i32 {
        match self {
            Side::Front | Side::Right | Side::Up => 1,
            Side::Back | Side::Left | Side::Down => -1,
        }
    }

    /// Canonical outward normal.
    pub const fn normal(self) -> Coord {
        let s = self.sign();
        match self.axis() {
            Axis::X => (s, 0, 0),
            Axis::Y => (0, s, 0),
            _ => (0, 0, s),
        }
    }

    /// The side whose outward normal is `normal`, if it is a unit axis vector.
    pub fn from_normal(normal: Coord) -> Option<Side> {
        Side::ALL.into_iter().find(|side| side.normal() == normal)
    }

    pub const fn opposite(self) -> Side {
        match self {
            Side::Front => Side::Back,
            Side::Back => Side::Front,
            Side::Right => Side::Left,
            Side::Left => Side::Right,
            Side::Up => Side::Down,
            Side::Down => Side::Up,
        }
    }

    /// Signed angle (degrees, right-handed about the side's axis) that turns
    /// this side in `direction`.
    ///
    /// A clockwise turn seen from outside is a negative rotation about the
    /// outward normal, so opposite sides get opposite signs for the same
    /// direction.
    pub const fn angle(self, direction: Direction) -> i32 {
        let clockwise = -90 * self.sign();
        match direction {
            Direction::Clockwise => clockwise,
            Direction::Counterclockwise => -clockwise,
        }
    }

    /// Position index inside `Side::ALL`.
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Clockwise, Direction::Counterclockwise];

    pub const fn reverse(self) -> Direction {
        match self {
            Direction::Clockwise => Direction::Counterclockwise,
            Direction::Counterclockwise => Direction::Clockwise,
        }
    }
}

/// Component of `coord` along `axis`.
///
/// Panics on `Axis::None`: asking for it means a side or move was built wrong.
pub const fn component(coord: Coord, axis: Axis) -> i32 {
    match axis {
        Axis::X => coord.0,
        Axis::Y => coord.1,
        Axis::Z => coord.2,
        Axis::None => panic!("Axis::None has no coordinate component"),
    }
}

pub const fn negate(coord: Coord) -> Coord {
    (-coord.0, -coord.1, -coord.2)
}

pub const fn cross(a: Coord, b: Coord) -> Coord {
    (
        a.1 * b.2 - a.2 * b.1,
        a.2 * b.0 - a.0 * b.2,
        a.0 * b.1 - a.1 * b.0,
    )
}

/// Number of non-zero components: 1 for a face center, 2 for an edge, 3 for a corner.
pub const fn nonzero_components(coord: Coord) -> usize {
    (coord.0 != 0) as usize + (coord.1 != 0) as usize + (coord.2 != 0) as usize
}

/// Cosine and sine of 0, 90, 180 and 270 degrees.
const COS: [i32; 4] = [1, 0, -1, 0];
const SIN: [i32; 4] = [0, 1, 0, -1];

/// Exact integer rotation matrix acting on column vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transform([[i32; 3]; 3]);

impl Transform {
    pub const IDENTITY: Self = Self([[1, 0, 0], [0, 1, 0], [0, 0, 1]]);

    /// Right-handed rotation about `axis` by `angle` degrees.
    ///
    /// Panics if `angle` is not a multiple of 90.
    pub const fn about(axis: Axis, angle: i32) -> Self {
        assert!(angle % 90 == 0, "rotation angle must be a multiple of 90 degrees");
        let quarter = (angle / 90).rem_euclid(4) as usize;
        let (c, s) = (COS[quarter], SIN[quarter]);

        match axis {
            Axis::X => Self([[1, 0, 0], [0, c, -s], [0, s, c]]),
            Axis::Y => Self([[c, 0, s], [0, 1, 0], [-s, 0, c]]),
            Axis::Z => Self([[c, -s, 0], [s, c, 0], [0, 0, 1]]),
            Axis::None => Self::IDENTITY,
        }
    }

    /// Rotates a lattice coordinate.
    #[inline]
    pub fn apply(&self, (x, y, z): Coord) -> Coord {
        let m = &self.0;
        (
            m[0][0] * x + m[0][1] * y + m[0][2] * z,
            m[1][0] * x + m[1][1] * y + m[1][2] * z,
            m[2][0] * x + m[2][1] * y + m[2][2] * z,
        )
    }

    /// The transform that applies `self` first and `next` second.
    pub fn then(&self, next: &Transform) -> Transform {
        let mut out = [[0; 3]; 3];
        for (row, out_row) in out.iter_mut().enumerate() {
            for (col, value) in out_row.iter_mut().enumerate() {
                *value = (0..3).map(|k| next.0[row][k] * self.0[k][col]).sum();
            }
        }
        Transform(out)
    }

    /// Row-major matrix, for renderers that build their own model matrices.
    pub fn matrix(&self) -> [[i32; 3]; 3] {
        self.0
    }
}

/// One discrete rotation step plus the orientation accumulated so far.
///
/// `axis` and `angle` describe the latest step only, which is what an
/// animation needs to interpolate. `transform` is the total orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rotation {
    pub axis: Axis,
    pub angle: i32,
    pub transform: Transform,
}

impl Rotation {
    pub const IDENTITY: Self = Self {
        axis: Axis::None,
        angle: 0,
        transform: Transform::IDENTITY,
    };

    pub const fn new(axis: Axis, angle: i32) -> Self {
        Self {
            axis,
            angle,
            transform: Transform::about(axis, angle),
        }
    }

    /// A resting orientation with no pending step.
    pub const fn resting(transform: Transform) -> Self {
        Self {
            axis: Axis::None,
            angle: 0,
            transform,
        }
    }

    /// Stacks `step` on top of this orientation.
    pub fn compose(&self, step: &Rotation) -> Rotation {
        Rotation {
            axis: step.axis,
            angle: step.angle,
            transform: self.transform.then(&step.transform),
        }
    }

    pub const fn inverse(&self) -> Rotation {
        Rotation::new(self.axis, -self.angle)
    }
}
