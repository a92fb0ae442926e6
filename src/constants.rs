use crate::facelet::Color;
use crate::moves::Move::{self, *};

/// Number of the 18 face moves U, U2, U', R, ..., B'.
pub const N_MOVE: usize = 18;

/// 3^7 possible corner orientations.
pub const N_TWIST: usize = 2187;
/// 2^11 possible edge orientations.
pub const N_FLIP: usize = 2048;
/// 12 choose 4 positions of the FR, FL, BL and BR edges, order ignored.
pub const N_SLICE1: usize = 495;
/// 4! permutations of the slice edges inside the slice in phase 2.
pub const N_SLICE2: usize = 24;
/// Corner permutation parity.
pub const N_PARITY: usize = 2;
/// 12!/8! positions and order of the FR, FL, BL and BR edges.
pub const N_FRTOBR: usize = 11880;
/// 8!/2! positions and order of the URF, UFL, ULB, UBR, DFR and DLF corners.
pub const N_URFTODLF: usize = 20160;
/// 8!/2! positions and order of the UR, UF, UL, UB, DR and DF edges in phase 2.
pub const N_URTODF: usize = 20160;
/// 12!/9! positions and order of the UR, UF and UL edges.
pub const N_URTOUL: usize = 1320;
/// 12!/9! positions and order of the UB, DR and DF edges.
pub const N_UBTODF: usize = 1320;
/// URtoUL and UBtoDF values occurring at the start of phase 2 are below 8!/5!.
pub const N_MERGE: usize = 336;

/// Solved value of the UBtoDF coordinate, every other coordinate is 0 when solved.
pub const UBTODF_SOLVED: u16 = 114;

/// Marks a merged URtoDF value that cannot occur because the two edge sets collide.
pub const INVALID: u16 = u16::MAX;

/// Default bound for the total length of a two-phase solution.
pub const DEFAULT_MAX_DEPTH: usize = 22;

pub const ALL_COLORS: [Color; 6] = [Color::U, Color::R, Color::F, Color::D, Color::L, Color::B];

#[rustfmt::skip]
pub const ALL_MOVES: [Move; N_MOVE] = [
    U, U2, U3,
    R, R2, R3,
    F, F2, F3,
    D, D2, D3,
    L, L2, L3,
    B, B2, B3,
];

/// Moves which keep the cube inside the subgroup <U, D, R2, F2, L2, B2>.
pub const PHASE2_MOVES: [Move; 10] = [U, U2, U3, R2, F2, D, D2, D3, L2, B2];
