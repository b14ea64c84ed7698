use blockfall::core::pieces::{grid_size, kick_offsets, occupied, spawn_x};
use blockfall::types::{PieceKind, Rotation};

const ROTATIONS: [Rotation; 4] = [
    Rotation::North,
    Rotation::East,
    Rotation::South,
    Rotation::West,
];

fn cells(kind: PieceKind, rotation: Rotation) -> Vec<(i8, i8)> {
    let size = grid_size(kind);
    let mut out = Vec::new();
    for y in 0..size {
        for x in 0..size {
            if occupied(kind, rotation, x, y) {
                out.push((x, y));
            }
        }
    }
    out
}

#[test]
fn every_rotation_has_four_cells() {
    for kind in PieceKind::ALL {
        for rotation in ROTATIONS {
            assert_eq!(
                cells(kind, rotation).len(),
                4,
                "{kind:?} {rotation:?} should occupy exactly 4 cells"
            );
        }
    }
}

#[test]
fn grid_sizes() {
    assert_eq!(grid_size(PieceKind::I), 4);
    assert_eq!(grid_size(PieceKind::O), 2);
    for kind in [PieceKind::T, PieceKind::S, PieceKind::Z, PieceKind::J, PieceKind::L] {
        assert_eq!(grid_size(kind), 3);
    }
}

#[test]
fn o_piece_is_rotation_invariant() {
    let base = cells(PieceKind::O, Rotation::North);
    assert_eq!(base, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    for rotation in ROTATIONS {
        assert_eq!(cells(PieceKind::O, rotation), base);
    }
}

#[test]
fn i_piece_spawn_is_horizontal() {
    // Second row of the 4x4 box.
    assert_eq!(
        cells(PieceKind::I, Rotation::North),
        vec![(0, 1), (1, 1), (2, 1), (3, 1)]
    );
}

#[test]
fn i_piece_east_is_vertical_column_one() {
    assert_eq!(
        cells(PieceKind::I, Rotation::East),
        vec![(1, 0), (1, 1), (1, 2), (1, 3)]
    );
}

#[test]
fn t_piece_rotations() {
    assert_eq!(
        cells(PieceKind::T, Rotation::North),
        vec![(1, 0), (0, 1), (1, 1), (2, 1)]
    );
    assert_eq!(
        cells(PieceKind::T, Rotation::East),
        vec![(1, 0), (0, 1), (1, 1), (1, 2)]
    );
}

#[test]
fn full_turn_returns_to_spawn_shape() {
    for kind in PieceKind::ALL {
        let mut rotation = Rotation::North;
        for _ in 0..4 {
            rotation = rotation.rotate_cw();
        }
        assert_eq!(rotation, Rotation::North);
        assert_eq!(cells(kind, rotation), cells(kind, Rotation::North));
    }
}

#[test]
fn out_of_box_reads_are_unoccupied() {
    for kind in PieceKind::ALL {
        for rotation in ROTATIONS {
            assert!(!occupied(kind, rotation, -1, 0));
            assert!(!occupied(kind, rotation, 0, -1));
            assert!(!occupied(kind, rotation, 4, 0));
            assert!(!occupied(kind, rotation, 0, 4));
        }
    }
}

#[test]
fn spawn_columns_center_the_box() {
    assert_eq!(spawn_x(PieceKind::I), 3);
    assert_eq!(spawn_x(PieceKind::O), 4);
    assert_eq!(spawn_x(PieceKind::T), 3);
    assert_eq!(spawn_x(PieceKind::L), 3);
}

#[test]
fn kick_tables_start_with_the_identity_offset() {
    for kind in PieceKind::ALL {
        for from in ROTATIONS {
            for to in [from.rotate_cw(), from.rotate_ccw()] {
                let offsets = kick_offsets(kind, from, to);
                assert_eq!(offsets[0], (0, 0), "{kind:?} {from:?}->{to:?}");
            }
        }
    }
}

#[test]
fn o_piece_never_kicks() {
    let offsets = kick_offsets(PieceKind::O, Rotation::North, Rotation::East);
    assert_eq!(offsets, &[(0, 0)]);
}

#[test]
fn kick_rows_are_direction_specific() {
    // Reversing a transition uses a different candidate list, not the same
    // row replayed.
    let cw = kick_offsets(PieceKind::T, Rotation::North, Rotation::East);
    let back = kick_offsets(PieceKind::T, Rotation::East, Rotation::North);
    assert_ne!(cw[1], back[1]);

    let i_cw = kick_offsets(PieceKind::I, Rotation::North, Rotation::East);
    let i_back = kick_offsets(PieceKind::I, Rotation::East, Rotation::North);
    assert_ne!(i_cw[1], i_back[1]);
}
