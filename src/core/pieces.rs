//! Piece geometry and wall-kick data.
//!
//! Each kind stores a single rotation-0 bitmap inside a 4x4 box together
//! with its bounding size; rotated occupancy is computed on demand by
//! walking the queried cell back through the inverse coordinate transform.
//! Kick offsets are data, not logic: candidates are tried strictly in table
//! order and the first non-colliding offset wins.

use crate::types::{PieceKind, Rotation, BOARD_WIDTH};

/// Rotation-0 occupancy of a piece inside its bounding box.
///
/// `rows` are 4-bit masks read left to right (bit 3 = column 0). Only the
/// top-left `size`x`size` corner is meaningful.
struct Geometry {
    rows: [u8; 4],
    size: i8,
}

#[rustfmt::skip]
const GEOMETRY: [Geometry; 7] = [
    // I
    Geometry { rows: [0b0000, 0b1111, 0b0000, 0b0000], size: 4 },
    // O
    Geometry { rows: [0b1100, 0b1100, 0b0000, 0b0000], size: 2 },
    // T
    Geometry { rows: [0b0100, 0b1110, 0b0000, 0b0000], size: 3 },
    // S
    Geometry { rows: [0b0110, 0b1100, 0b0000, 0b0000], size: 3 },
    // Z
    Geometry { rows: [0b1100, 0b0110, 0b0000, 0b0000], size: 3 },
    // J
    Geometry { rows: [0b1000, 0b1110, 0b0000, 0b0000], size: 3 },
    // L
    Geometry { rows: [0b0010, 0b1110, 0b0000, 0b0000], size: 3 },
];

/// Bounding box edge length for a kind (2, 3 or 4).
pub fn grid_size(kind: PieceKind) -> i8 {
    GEOMETRY[kind as usize].size
}

/// Spawn column: rotation 0, centered horizontally on the board.
pub fn spawn_x(kind: PieceKind) -> i8 {
    (BOARD_WIDTH - grid_size(kind)) / 2
}

/// Whether local cell `(x, y)` of the piece's box is occupied at the given
/// rotation.
///
/// The queried coordinate is mapped back onto the rotation-0 bitmap by
/// applying `(tx, ty) <- (size-1-ty, tx)` once per quarter turn. Size-2
/// pieces have a single effective orientation and skip the transform.
/// Coordinates that leave `[0,4)` along the way read as unoccupied.
pub fn occupied(kind: PieceKind, rotation: Rotation, x: i8, y: i8) -> bool {
    let geo = &GEOMETRY[kind as usize];
    let (mut tx, mut ty) = (x, y);

    if geo.size > 2 {
        for _ in 0..rotation.index() {
            let prev_x = tx;
            tx = geo.size - 1 - ty;
            ty = prev_x;
        }
    }

    if !(0..4).contains(&tx) || !(0..4).contains(&ty) {
        return false;
    }
    geo.rows[ty as usize] >> (3 - tx) & 1 == 1
}

/// Kick offsets for one directed rotation transition, in try order.
pub type KickRow = [(i8, i8); 5];

/// Shared kick table for J, L, S, T and Z, in screen coordinates (y grows
/// downward). Indexed by [`kick_index`].
#[rustfmt::skip]
const KICKS_JLSTZ: [KickRow; 8] = [
    [(0, 0), (-1, 0), (-1, -1), ( 0,  2), (-1,  2)], // 0->1
    [(0, 0), ( 1, 0), ( 1,  1), ( 0, -2), ( 1, -2)], // 1->0
    [(0, 0), ( 1, 0), ( 1,  1), ( 0, -2), ( 1, -2)], // 1->2
    [(0, 0), (-1, 0), (-1, -1), ( 0,  2), (-1,  2)], // 2->1
    [(0, 0), ( 1, 0), ( 1, -1), ( 0,  2), ( 1,  2)], // 2->3
    [(0, 0), (-1, 0), (-1,  1), ( 0, -2), (-1, -2)], // 3->2
    [(0, 0), (-1, 0), (-1,  1), ( 0, -2), (-1, -2)], // 3->0
    [(0, 0), ( 1, 0), ( 1, -1), ( 0,  2), ( 1,  2)], // 0->3
];

/// Kick table for the I piece.
#[rustfmt::skip]
const KICKS_I: [KickRow; 8] = [
    [(0, 0), (-2, 0), ( 1, 0), (-2,  1), ( 1, -2)], // 0->1
    [(0, 0), ( 2, 0), (-1, 0), ( 2, -1), (-1,  2)], // 1->0
    [(0, 0), (-1, 0), ( 2, 0), (-1, -2), ( 2,  1)], // 1->2
    [(0, 0), ( 1, 0), (-2, 0), ( 1,  2), (-2, -1)], // 2->1
    [(0, 0), ( 2, 0), (-1, 0), ( 2, -1), (-1,  2)], // 2->3
    [(0, 0), (-2, 0), ( 1, 0), (-2,  1), ( 1, -2)], // 3->2
    [(0, 0), ( 1, 0), (-2, 0), ( 1,  2), (-2, -1)], // 3->0
    [(0, 0), (-1, 0), ( 2, 0), (-1, -2), ( 2,  1)], // 0->3
];

/// Row index for a directed transition. Only the eight +/-1 transitions are
/// reachable since rotation changes one step at a time.
fn kick_index(from: Rotation, to: Rotation) -> usize {
    match (from.index(), to.index()) {
        (0, 1) => 0,
        (1, 0) => 1,
        (1, 2) => 2,
        (2, 1) => 3,
        (2, 3) => 4,
        (3, 2) => 5,
        (3, 0) => 6,
        (0, 3) => 7,
        _ => 0,
    }
}

/// Candidate offsets for rotating `kind` from `from` to `to`, in try order.
///
/// The O piece never kicks: its only candidate is the identity offset.
pub fn kick_offsets(kind: PieceKind, from: Rotation, to: Rotation) -> &'static [(i8, i8)] {
    const NO_KICKS: [(i8, i8); 1] = [(0, 0)];
    match kind {
        PieceKind::O => &NO_KICKS,
        PieceKind::I => &KICKS_I[kick_index(from, to)],
        _ => &KICKS_JLSTZ[kick_index(from, to)],
    }
}
