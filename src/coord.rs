use std::fmt;

use log::debug;

use crate::constants::*;
use crate::cubie::{self, CubieCube};
use crate::moves::{Move, MoveTables};

/// The coordinates used by the two phase algorithm.
///
/// Every kind maps a projection of a [CubieCube] to `0..size()` and back.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Coord {
    /// Orientation of the corners.
    Twist,
    /// Orientation of the edges.
    Flip,
    /// Positions of the FR, FL, BL and BR edges, order ignored.
    Slice,
    /// Positions and order of the FR, FL, BL and BR edges.
    FRtoBR,
    /// Positions and order of the URF, UFL, ULB, UBR, DFR and DLF corners.
    URFtoDLF,
    /// Positions and order of the UR, UF, UL, UB, DR and DF edges, phase 2 only.
    URtoDF,
    /// Positions and order of the UR, UF and UL edges.
    URtoUL,
    /// Positions and order of the UB, DR and DF edges.
    UBtoDF,
    /// Corner permutation parity.
    Parity,
}

pub const ALL_COORDS: [Coord; 9] = [
    Coord::Twist,
    Coord::Flip,
    Coord::Slice,
    Coord::FRtoBR,
    Coord::URFtoDLF,
    Coord::URtoDF,
    Coord::URtoUL,
    Coord::UBtoDF,
    Coord::Parity,
];

impl Coord {
    pub fn size(self) -> usize {
        match self {
            Coord::Twist => N_TWIST,
            Coord::Flip => N_FLIP,
            Coord::Slice => N_SLICE1,
            Coord::FRtoBR => N_FRTOBR,
            Coord::URFtoDLF => N_URFTODLF,
            Coord::URtoDF => N_URTODF,
            Coord::URtoUL => N_URTOUL,
            Coord::UBtoDF => N_UBTODF,
            Coord::Parity => N_PARITY,
        }
    }

    /// Compute the coordinate of `cc`.
    pub fn get(self, cc: &CubieCube) -> usize {
        match self {
            Coord::Twist => cc.get_twist() as usize,
            Coord::Flip => cc.get_flip() as usize,
            Coord::Slice => cc.get_slice() as usize,
            Coord::FRtoBR => cc.get_fr_to_br() as usize,
            Coord::URFtoDLF => cc.get_urf_to_dlf() as usize,
            Coord::URtoDF => cc.get_ur_to_df() as usize,
            Coord::URtoUL => cc.get_ur_to_ul() as usize,
            Coord::UBtoDF => cc.get_ub_to_df() as usize,
            Coord::Parity => cc.corner_parity() as usize,
        }
    }

    /// Set the pieces of `cc` described by this coordinate to `idx`, the others to a neutral arrangement.
    pub fn set(self, cc: &mut CubieCube, idx: usize) {
        let idx = idx as u16;
        match self {
            Coord::Twist => cc.set_twist(idx),
            Coord::Flip => cc.set_flip(idx),
            Coord::Slice => cc.set_slice(idx),
            Coord::FRtoBR => cc.set_fr_to_br(idx),
            Coord::URFtoDLF => cc.set_urf_to_dlf(idx),
            Coord::URtoDF => cc.set_ur_to_df(idx),
            Coord::URtoUL => cc.set_ur_to_ul(idx),
            Coord::UBtoDF => cc.set_ub_to_df(idx),
            Coord::Parity => cc.set_corner_parity(idx),
        }
    }

    /// Corner coordinates only depend on `cp`/`co`, the others only on `ep`/`eo`.
    pub fn is_corner(self) -> bool {
        matches!(self, Coord::Twist | Coord::URFtoDLF | Coord::Parity)
    }

    /// True for coordinates whose values only stay in range under phase 2 moves.
    pub fn phase2_only(self) -> bool {
        self == Coord::URtoDF
    }

    /// Multiply the part of `a` this coordinate reads with `b`.
    pub fn multiply(self, a: &mut CubieCube, b: &CubieCube) {
        if self.is_corner() {
            a.corner_multiply(b);
        } else {
            a.edge_multiply(b);
        }
    }
}

/// Represent a cube on the coordinate level.
///
/// The search keeps one of these per depth. In phase 1 a state is determined by twist, flip and
/// slice. Phase 2 works on parity, fr_to_br (< 24), urf_to_dlf and ur_to_df, which are derived at the
/// end of phase 1.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct CoordCube {
    pub twist: u16,
    pub flip: u16,
    pub slice: u16,
    pub parity: u16,
    pub fr_to_br: u16,
    pub urf_to_dlf: u16,
    pub ur_to_ul: u16,
    pub ub_to_df: u16,
    pub ur_to_df: u16, // INVALID outside phase 2
}

impl fmt::Display for CoordCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(twist: {}, flip: {}, slice: {}, parity: {}, FRtoBR: {}, URFtoDLF: {}, URtoUL: {}, UBtoDF: {}, URtoDF: {})",
            self.twist,
            self.flip,
            self.slice,
            self.parity,
            self.fr_to_br,
            self.urf_to_dlf,
            self.ur_to_ul,
            self.ub_to_df,
            self.ur_to_df
        )
    }
}

impl From<&CubieCube> for CoordCube {
    fn from(cc: &CubieCube) -> Self {
        let ur_to_df = match cc.get_ur_to_df() {
            v if (v as usize) < N_URTODF => v as u16,
            _ => INVALID,
        };
        Self {
            twist: cc.get_twist(),
            flip: cc.get_flip(),
            slice: cc.get_slice(),
            parity: cc.corner_parity(),
            fr_to_br: cc.get_fr_to_br(),
            urf_to_dlf: cc.get_urf_to_dlf(),
            ur_to_ul: cc.get_ur_to_ul(),
            ub_to_df: cc.get_ub_to_df(),
            ur_to_df,
        }
    }
}

impl CoordCube {
    /// Update the phase 1 coordinates twist, flip and slice.
    pub fn phase1_move(&mut self, mt: &MoveTables, m: Move) {
        let m = m as usize;
        self.twist = mt.twist_move[N_MOVE * self.twist as usize + m];
        self.flip = mt.flip_move[N_MOVE * self.flip as usize + m];
        self.slice = mt.slice_move[N_MOVE * self.slice as usize + m];
    }

    /// Update the coordinates phase 2 needs to get started, valid for any move.
    pub fn carry_move(&mut self, mt: &MoveTables, m: Move) {
        let m = m as usize;
        self.parity = mt.parity_move[N_MOVE * self.parity as usize + m];
        self.fr_to_br = mt.fr_to_br_move[N_MOVE * self.fr_to_br as usize + m];
        self.urf_to_dlf = mt.urf_to_dlf_move[N_MOVE * self.urf_to_dlf as usize + m];
        self.ur_to_ul = mt.ur_to_ul_move[N_MOVE * self.ur_to_ul as usize + m];
        self.ub_to_df = mt.ub_to_df_move[N_MOVE * self.ub_to_df as usize + m];
    }

    /// Update the phase 2 coordinates, `m` must be a phase 2 move.
    pub fn phase2_move(&mut self, mt: &MoveTables, m: Move) {
        let m = m as usize;
        self.parity = mt.parity_move[N_MOVE * self.parity as usize + m];
        self.fr_to_br = mt.fr_to_br_move[N_MOVE * self.fr_to_br as usize + m];
        self.urf_to_dlf = mt.urf_to_dlf_move[N_MOVE * self.urf_to_dlf as usize + m];
        self.ur_to_df = mt.ur_to_df_move[N_MOVE * self.ur_to_df as usize + m];
    }

    /// True if the cube is in the subgroup phase 2 works in.
    pub fn in_phase2(&self) -> bool {
        self.twist == 0 && self.flip == 0 && self.slice == 0
    }
}

/// Table giving URtoDF from URtoUL and UBtoDF at the start of phase 2.
///
/// `merge[N_MERGE * ur_to_ul + ub_to_df]`, both coordinates below [N_MERGE], [INVALID] where the two
/// edge triples would share a slot.
pub fn build_merge_table() -> Vec<u16> {
    debug!("Creating merge table ({} entries)...", N_MERGE * N_MERGE);
    let mut a = CubieCube::default();
    let mut b = CubieCube::default();
    let mut table = vec![INVALID; N_MERGE * N_MERGE];
    for i in 0..N_MERGE {
        a.set_ur_to_ul(i as u16);
        for j in 0..N_MERGE {
            b.set_ub_to_df(j as u16);
            if let Some(v) = cubie::merge_ur_to_df(&a, &b) {
                table[N_MERGE * i + j] = v;
            }
        }
    }
    table
}

#[cfg(test)]
mod test {
    use rand::Rng;

    use crate::coord::*;
    use crate::moves::Move::*;

    fn check_bijection(coord: Coord, indices: impl Iterator<Item = usize>) {
        let mut cc = CubieCube::default();
        for i in indices {
            coord.set(&mut cc, i);
            assert_eq!(coord.get(&cc), i, "{:?} {}", coord, i);
        }
    }

    #[test]
    fn test_bijection_exhaustive() {
        for coord in [Coord::Parity, Coord::Slice, Coord::URtoUL, Coord::UBtoDF] {
            check_bijection(coord, 0..coord.size());
        }
    }

    #[test]
    fn test_bijection_sampled() {
        let mut rng = rand::thread_rng();
        for coord in [
            Coord::Twist,
            Coord::Flip,
            Coord::URFtoDLF,
            Coord::URtoDF,
            Coord::FRtoBR,
        ] {
            let n = coord.size();
            let samples = (0..500).map(|_| rng.gen_range(0..n)).chain([0, n - 1]);
            check_bijection(coord, samples);
        }
    }

    #[test]
    fn test_solved_coordcube() {
        let cdc = CoordCube::from(&CubieCube::default());
        assert_eq!(cdc.ub_to_df, UBTODF_SOLVED);
        assert_eq!(cdc.ur_to_df, 0);
        assert_eq!(cdc.fr_to_br, 0);
        assert!(cdc.in_phase2());
        for coord in ALL_COORDS {
            let solved = if coord == Coord::UBtoDF { UBTODF_SOLVED as usize } else { 0 };
            assert_eq!(coord.get(&CubieCube::default()), solved, "{:?}", coord);
        }
    }

    #[test]
    fn test_coordcube_moves() {
        let mt = MoveTables::new();
        let mut cc = CubieCube::default();
        cc.randomize();
        let mut cdc = CoordCube::from(&cc);
        for m in [R, U2, F3, B, L2, D3] {
            cdc.phase1_move(&mt, m);
            cdc.carry_move(&mt, m);
            cc.apply_move(m);
            let expected = CoordCube::from(&cc);
            assert_eq!(cdc.twist, expected.twist);
            assert_eq!(cdc.flip, expected.flip);
            assert_eq!(cdc.slice, expected.slice);
            assert_eq!(cdc.parity, expected.parity);
            assert_eq!(cdc.fr_to_br, expected.fr_to_br);
            assert_eq!(cdc.urf_to_dlf, expected.urf_to_dlf);
            assert_eq!(cdc.ur_to_ul, expected.ur_to_ul);
            assert_eq!(cdc.ub_to_df, expected.ub_to_df);
        }

        let mut cc = CubieCube::from(&vec![R2, U, F2, D3, L2, B2]);
        let mut cdc = CoordCube::from(&cc);
        assert!(cdc.in_phase2());
        for m in [U3, B2, D, R2] {
            cdc.phase2_move(&mt, m);
            cc.apply_move(m);
            let expected = CoordCube::from(&cc);
            assert_eq!(cdc.parity, expected.parity);
            assert_eq!(cdc.fr_to_br, expected.fr_to_br);
            assert_eq!(cdc.urf_to_dlf, expected.urf_to_dlf);
            assert_eq!(cdc.ur_to_df, expected.ur_to_df);
        }
    }

    #[test]
    fn test_merge_table() {
        let merge = build_merge_table();
        assert_eq!(merge.len(), N_MERGE * N_MERGE);
        let solved = CubieCube::default();
        let i = N_MERGE * solved.get_ur_to_ul() as usize + solved.get_ub_to_df() as usize;
        assert_eq!(merge[i], 0);
        // UR, UF, UL and UB, DR, DF both in the first three slots
        assert_eq!(merge[0], INVALID);

        let cc = CubieCube::from(&vec![U, R2, D3, F2, L2, U2, B2]);
        let i = N_MERGE * cc.get_ur_to_ul() as usize + cc.get_ub_to_df() as usize;
        assert_eq!(merge[i] as u32, cc.get_ur_to_df());
    }
}
