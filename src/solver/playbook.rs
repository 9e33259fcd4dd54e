//! Fixed delivery sequences for the daisy stage.
//!
//! A key describes one open Up-cross slot together with a loose white edge
//! sticker that a single slice turn can bring into that slot facing up. The
//! value is the turn sequence that does it. Each sequence turns only the
//! slice that contains the target slot, so petals already in place stay put.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::geometry::{Coord, Direction, Side};

use Direction::{Clockwise as Cw, Counterclockwise as Ccw};

/// Geometric fingerprint of a deliverable configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaybookKey {
    /// Position of the open Up-cross slot.
    pub target: Coord,
    /// Position of the white sticker's piece.
    pub white: Coord,
    /// Direction the white sticker currently faces.
    pub normal: Coord,
}

pub type Playbook = FxHashMap<PlaybookKey, &'static [(Side, Direction)]>;

const fn key(target: Coord, white: Coord, normal: Coord) -> PlaybookKey {
    PlaybookKey {
        target,
        white,
        normal,
    }
}

/// Four slots times three source positions: straight below facing down, and
/// the two middle-layer edges of the slot's slice facing sideways.
const ENTRIES: [(PlaybookKey, &[(Side, Direction)]); 12] = [
    // front slot
    (key((0, 1, 1), (0, -1, 1), (0, -1, 0)), &[(Side::Front, Cw), (Side::Front, Cw)]),
    (key((0, 1, 1), (1, 0, 1), (1, 0, 0)), &[(Side::Front, Ccw)]),
    (key((0, 1, 1), (-1, 0, 1), (-1, 0, 0)), &[(Side::Front, Cw)]),
    // right slot
    (key((1, 1, 0), (1, -1, 0), (0, -1, 0)), &[(Side::Right, Cw), (Side::Right, Cw)]),
    (key((1, 1, 0), (1, 0, 1), (0, 0, 1)), &[(Side::Right, Cw)]),
    (key((1, 1, 0), (1, 0, -1), (0, 0, -1)), &[(Side::Right, Ccw)]),
    // back slot
    (key((0, 1, -1), (0, -1, -1), (0, -1, 0)), &[(Side::Back, Cw), (Side::Back, Cw)]),
    (key((0, 1, -1), (1, 0, -1), (1, 0, 0)), &[(Side::Back, Cw)]),
    (key((0, 1, -1), (-1, 0, -1), (-1, 0, 0)), &[(Side::Back, Ccw)]),
    // left slot
    (key((-1, 1, 0), (-1, -1, 0), (0, -1, 0)), &[(Side::Left, Cw), (Side::Left, Cw)]),
    (key((-1, 1, 0), (-1, 0, 1), (0, 0, 1)), &[(Side::Left, Ccw)]),
    (key((-1, 1, 0), (-1, 0, -1), (0, 0, -1)), &[(Side::Left, Cw)]),
];

static PLAYBOOK: LazyLock<Playbook> = LazyLock::new(|| ENTRIES.into_iter().collect());

/// The shared, read-only daisy playbook.
pub fn playbook() -> &'static Playbook {
    &PLAYBOOK
}
