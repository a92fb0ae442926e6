use std::{fmt, str::FromStr};

use log::debug;
use serde::{Deserialize, Serialize};

use self::Move::*;
use crate::constants::*;
use crate::coord::Coord;
use crate::cubie::{Corner::*, CubieCube, Edge::*, SOLVED_CENTERS};
use crate::error::Error;
use crate::facelet::Color;

/// Layer moves, Up, Right, Front, Down, Left, Back.
///
/// $ clockwise, $2 double, $3 counter-clockwise.
#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Move {
    U, U2, U3,
    R, R2, R3,
    F, F2, F3,
    D, D2, D3,
    L, L2, L3,
    B, B2, B3,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.power() {
            1 => write!(f, "{}", self.face()),
            2 => write!(f, "{}2", self.face()),
            _ => write!(f, "{}'", self.face()),
        }
    }
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let face = chars
            .next()
            .and_then(|c| Color::try_from(c).ok())
            .ok_or_else(|| Error::InvalidMove(s.to_string()))?;
        let power = match chars.as_str() {
            "" => 1,
            "2" | "2'" => 2,
            "'" | "3" => 3,
            _ => return Err(Error::InvalidMove(s.to_string())),
        };
        Ok(ALL_MOVES[3 * face as usize + power - 1])
    }
}

impl Move {
    /// The face turned by this move.
    pub fn face(self) -> Color {
        ALL_COLORS[self as usize / 3]
    }

    /// Number of clockwise quarter turns, 1, 2 or 3.
    pub fn power(self) -> u8 {
        (self as u8) % 3 + 1
    }

    /// True if `other` turns the face opposite to the face of this move.
    pub fn is_opposite(&self, other: Move) -> bool {
        (self.face() as usize + 3) % 6 == other.face() as usize
    }

    pub fn is_same_layer(&self, other: Move) -> bool {
        self.face() == other.face()
    }

    /// True if `next` may follow this move in a search: never the same face twice, and of two
    /// opposite faces only U before D, R before L and F before B.
    pub fn may_precede(&self, next: Move) -> bool {
        !self.is_same_layer(next) && self.face() as usize != next.face() as usize + 3
    }

    pub fn is_phase2(&self) -> bool {
        PHASE2_MOVES.contains(self)
    }

    pub fn get_inverse(self) -> Self {
        ALL_MOVES[(self as usize / 3) * 3 + 2 - self as usize % 3]
    }

    /// The cubie cube of this move applied to the solved cube.
    pub fn cube(self) -> &'static CubieCube {
        &MOVE_CUBES[self as usize]
    }

    /// The move `rot * self * rot^-1`, i.e. this move seen from a cube turned by `rot`.
    pub fn conjugate(self, rot: &CubieCube) -> Option<Move> {
        let mut c = *rot;
        c.multiply(self.cube());
        c.multiply(&rot.inverse_cubie_cube());
        ALL_MOVES.into_iter().find(|m| *m.cube() == c)
    }
}

/// The basic six cube moves described by permutations and changes in orientation.
///
/// U_MOVE
pub const U_MOVE: CubieCube = CubieCube {
    center: SOLVED_CENTERS,
    cp: [UBR, URF, UFL, ULB, DFR, DLF, DBL, DRB],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [UB, UR, UF, UL, DR, DF, DL, DB, FR, FL, BL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

/// R_MOVE
pub const R_MOVE: CubieCube = CubieCube {
    center: SOLVED_CENTERS,
    cp: [DFR, UFL, ULB, URF, DRB, DLF, DBL, UBR], //permutation of the corners
    co: [2, 0, 0, 1, 1, 0, 0, 2],                 //changes of the orientations of the corners
    ep: [FR, UF, UL, UB, BR, DF, DL, DB, DR, FL, BL, UR], //permutation of the edges
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],     //changes of the orientations of the edges
};

/// F_MOVE
pub const F_MOVE: CubieCube = CubieCube {
    center: SOLVED_CENTERS,
    cp: [UFL, DLF, ULB, UBR, URF, DFR, DBL, DRB],
    co: [1, 2, 0, 0, 2, 1, 0, 0],
    ep: [UR, FL, UL, UB, DR, FR, DL, DB, UF, DF, BL, BR],
    eo: [0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0],
};

/// D_MOVE
pub const D_MOVE: CubieCube = CubieCube {
    center: SOLVED_CENTERS,
    cp: [URF, UFL, ULB, UBR, DLF, DBL, DRB, DFR],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [UR, UF, UL, UB, DF, DL, DB, DR, FR, FL, BL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

/// L_MOVE
pub const L_MOVE: CubieCube = CubieCube {
    center: SOLVED_CENTERS,
    cp: [URF, ULB, DBL, UBR, DFR, UFL, DLF, DRB],
    co: [0, 1, 2, 0, 0, 2, 1, 0],
    ep: [UR, UF, BL, UB, DR, DF, FL, DB, FR, UL, DL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

/// B_MOVE
pub const B_MOVE: CubieCube = CubieCube {
    center: SOLVED_CENTERS,
    cp: [URF, UFL, UBR, DRB, DFR, DLF, ULB, DBL],
    co: [0, 0, 1, 2, 0, 0, 2, 1],
    ep: [UR, UF, UL, BR, DR, DF, DL, BL, FR, FL, UB, DB],
    eo: [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1],
};

/// Whole cube rotation in the direction of R, made of R, M' and L'.
pub const X_ROT: CubieCube = CubieCube {
    center: [Color::F, Color::R, Color::D, Color::B, Color::L, Color::U],
    cp: [DFR, DLF, UFL, URF, DRB, DBL, ULB, UBR],
    co: [2, 1, 2, 1, 1, 2, 1, 2],
    ep: [FR, DF, FL, UF, BR, DB, BL, UB, DR, DL, UL, UR],
    eo: [0, 1, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0],
};

/// Whole cube rotation in the direction of U, made of U, E' and D'.
pub const Y_ROT: CubieCube = CubieCube {
    center: [Color::U, Color::B, Color::R, Color::D, Color::F, Color::L],
    cp: [UBR, URF, UFL, ULB, DRB, DFR, DLF, DBL],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [UB, UR, UF, UL, DB, DR, DF, DL, BR, FR, FL, BL],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1],
};

/// Whole cube rotation in the direction of F, made of F, S and B'.
pub const Z_ROT: CubieCube = CubieCube {
    center: [Color::L, Color::U, Color::F, Color::R, Color::D, Color::B],
    cp: [UFL, DLF, DBL, ULB, URF, DFR, DRB, UBR],
    co: [1, 2, 1, 2, 2, 1, 2, 1],
    ep: [UL, FL, DL, BL, UR, FR, DR, BR, UF, DF, DB, UB],
    eo: [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
};

pub fn basic_move_cubes() -> [CubieCube; 6] {
    [U_MOVE, R_MOVE, F_MOVE, D_MOVE, L_MOVE, B_MOVE]
}

lazy_static! {
    static ref MOVE_CUBES: [CubieCube; N_MOVE] = {
        let bmc = basic_move_cubes();
        let mut cubes = [CubieCube::default(); N_MOVE];
        for (i, cube) in cubes.iter_mut().enumerate() {
            for _ in 0..(i % 3 + 1) {
                cube.multiply(&bmc[i / 3]);
            }
        }
        cubes
    };

    static ref ROTATIONS: Vec<CubieCube> = {
        let mut all = vec![CubieCube::default()];
        let mut i = 0;
        while i < all.len() {
            for g in [X_ROT, Y_ROT] {
                let mut c = all[i];
                c.multiply(&g);
                if !all.contains(&c) {
                    all.push(c);
                }
            }
            i += 1;
        }
        all
    };
}

/// The 24 whole cube rotations, the identity first.
pub fn rotations() -> &'static [CubieCube] {
    &ROTATIONS
}

/// Whole cube rotations x, y and z, with the same suffixes as the face moves.
#[rustfmt::skip]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Rotation {
    X, X2, X3,
    Y, Y2, Y3,
    Z, Z2, Z3,
}

impl Rotation {
    pub fn cube(self) -> CubieCube {
        let basic = match self {
            Rotation::X | Rotation::X2 | Rotation::X3 => X_ROT,
            Rotation::Y | Rotation::Y2 | Rotation::Y3 => Y_ROT,
            Rotation::Z | Rotation::Z2 | Rotation::Z3 => Z_ROT,
        };
        let mut cc = CubieCube::default();
        for _ in 0..(self as usize % 3 + 1) {
            cc.multiply(&basic);
        }
        cc
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let axis = ["x", "y", "z"][*self as usize / 3];
        match *self as usize % 3 {
            0 => write!(f, "{}", axis),
            1 => write!(f, "{}2", axis),
            _ => write!(f, "{}'", axis),
        }
    }
}

impl FromStr for Rotation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use Rotation::*;
        match s {
            "x" => Ok(X),
            "x2" => Ok(X2),
            "x'" => Ok(X3),
            "y" => Ok(Y),
            "y2" => Ok(Y2),
            "y'" => Ok(Y3),
            "z" => Ok(Z),
            "z2" => Ok(Z2),
            "z'" => Ok(Z3),
            _ => Err(Error::InvalidMove(s.to_string())),
        }
    }
}

/// One token of an algorithm: a face move or a whole cube rotation.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Turn {
    Move(Move),
    Rotation(Rotation),
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Turn::Move(m) => write!(f, "{}", m),
            Turn::Rotation(r) => write!(f, "{}", r),
        }
    }
}

impl FromStr for Turn {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::from_str(s)
            .map(Turn::Move)
            .or_else(|_| Rotation::from_str(s).map(Turn::Rotation))
    }
}

/// Move tables for all coordinates, `table[N_MOVE * value + move]` is the coordinate value
/// after applying `move`.
pub struct MoveTables {
    pub twist_move: Vec<u16>,
    pub flip_move: Vec<u16>,
    pub slice_move: Vec<u16>,
    pub parity_move: Vec<u16>,
    pub fr_to_br_move: Vec<u16>,
    pub urf_to_dlf_move: Vec<u16>,
    pub ur_to_df_move: Vec<u16>,
    pub ur_to_ul_move: Vec<u16>,
    pub ub_to_df_move: Vec<u16>,
}

impl MoveTables {
    pub fn new() -> Self {
        Self {
            twist_move: build_move_table(Coord::Twist),
            flip_move: build_move_table(Coord::Flip),
            slice_move: build_move_table(Coord::Slice),
            parity_move: build_move_table(Coord::Parity),
            fr_to_br_move: build_move_table(Coord::FRtoBR),
            urf_to_dlf_move: build_move_table(Coord::URFtoDLF),
            ur_to_df_move: build_move_table(Coord::URtoDF),
            ur_to_ul_move: build_move_table(Coord::URtoUL),
            ub_to_df_move: build_move_table(Coord::UBtoDF),
        }
    }
}

impl Default for MoveTables {
    fn default() -> Self {
        Self::new()
    }
}

/// Move table for one coordinate.
///
/// Every value is set up on a scratch cube, then each face is turned four times, recording the
/// coordinate after the first three turns. The fourth turn restores the face. Coordinates only
/// defined in phase 2 get entries for phase 2 moves only, the others stay 0.
pub fn build_move_table(coord: Coord) -> Vec<u16> {
    let mut a = CubieCube::default();
    let bmc = basic_move_cubes();
    let n = coord.size();
    let mut table = vec![0; n * N_MOVE];
    debug!("Creating {:?} move table ({} entries)...", coord, n * N_MOVE);
    for i in 0..n {
        coord.set(&mut a, i);
        for j in ALL_COLORS {
            // six faces U, R, F, D, L, B
            for k in 0..3 {
                // three moves for each face, for example U, U2, U3 = U'
                coord.multiply(&mut a, &bmc[j as usize]);
                let m = ALL_MOVES[3 * j as usize + k];
                if coord.phase2_only() && !m.is_phase2() {
                    continue;
                }
                table[N_MOVE * i + m as usize] = coord.get(&a) as u16;
            }
            coord.multiply(&mut a, &bmc[j as usize]);
        }
    }
    table
}

#[cfg(test)]
mod test {
    use crate::moves::*;

    #[test]
    fn test_move_from_str() {
        assert_eq!("R".parse::<Move>().unwrap(), R);
        assert_eq!("R'".parse::<Move>().unwrap(), R3);
        assert_eq!("B2".parse::<Move>().unwrap(), B2);
        assert_eq!(
            "Q".parse::<Move>(),
            Err(Error::InvalidMove("Q".to_string()))
        );
        assert_eq!(
            "U''".parse::<Move>(),
            Err(Error::InvalidMove("U''".to_string()))
        );
    }

    #[test]
    fn test_move_display() {
        let names: Vec<String> = ALL_MOVES.iter().map(|m| m.to_string()).collect();
        assert_eq!(
            names.join(" "),
            "U U2 U' R R2 R' F F2 F' D D2 D' L L2 L' B B2 B'"
        );
    }

    #[test]
    fn test_get_inverse() {
        for m in ALL_MOVES {
            let mut cc = *m.cube();
            cc.multiply(m.get_inverse().cube());
            assert_eq!(cc, CubieCube::default());
        }
    }

    #[test]
    fn test_may_precede() {
        assert!(U.may_precede(D));
        assert!(!D.may_precede(U2));
        assert!(!R.may_precede(R3));
        assert!(R.may_precede(U));
        assert!(F2.may_precede(B3));
        assert!(!B.may_precede(F));
        assert!(U.is_opposite(D3));
        assert!(L2.is_opposite(R));
    }

    #[test]
    fn test_rotations() {
        assert_eq!(rotations().len(), 24);
        for r in rotations() {
            assert!(r.is_solved());
            assert!(r.verify().is_ok());
        }
        for r in [Rotation::X, Rotation::Y, Rotation::Z] {
            let cc = r.cube();
            assert_ne!(cc, CubieCube::default());
            let mut c = cc;
            for _ in 0..3 {
                c.multiply(&cc);
            }
            assert_eq!(c, CubieCube::default());
        }
    }

    #[test]
    fn test_rotation_matches_layer_moves() {
        // y turns U like U and D like D'
        let mut cc = Rotation::Y.cube();
        cc.multiply(&Rotation::Y3.cube());
        assert_eq!(cc, CubieCube::default());
        assert_eq!(U.conjugate(&Y_ROT), Some(U));
        assert_eq!(D2.conjugate(&Y_ROT), Some(D2));
        assert_eq!(R.conjugate(&X_ROT), Some(R));
        assert_eq!(F3.conjugate(&Z_ROT), Some(F3));
    }

    #[test]
    fn test_conjugate_moves_faces() {
        for r in rotations() {
            for m in ALL_MOVES {
                let c = m.conjugate(r).unwrap();
                assert_eq!(c.power(), m.power());
            }
        }
    }

    #[test]
    fn test_turn_from_str() {
        assert_eq!("x'".parse::<Turn>().unwrap(), Turn::Rotation(Rotation::X3));
        assert_eq!("F2".parse::<Turn>().unwrap(), Turn::Move(F2));
        assert!("M".parse::<Turn>().is_err());
    }

    #[test]
    fn test_move_twist() {
        let move_twist = build_move_table(Coord::Twist);
        assert_eq!(move_twist.len(), N_TWIST * N_MOVE);
        for m in ALL_MOVES {
            let twisted = move_twist[m as usize] != 0;
            assert_eq!(twisted, !matches!(m, U | U2 | U3 | D | D2 | D3 | R2 | F2 | L2 | B2));
        }
    }

    #[test]
    fn test_move_tables_agree_with_cubies() {
        let mt = MoveTables::new();
        let mut cc = CubieCube::default();
        cc.randomize();
        for m in ALL_MOVES {
            let next = cc.apply_moves(&[m]);
            let i = m as usize;
            assert_eq!(mt.twist_move[N_MOVE * cc.get_twist() as usize + i], next.get_twist());
            assert_eq!(mt.flip_move[N_MOVE * cc.get_flip() as usize + i], next.get_flip());
            assert_eq!(mt.slice_move[N_MOVE * cc.get_slice() as usize + i], next.get_slice());
            assert_eq!(
                mt.parity_move[N_MOVE * cc.corner_parity() as usize + i],
                next.corner_parity()
            );
            assert_eq!(
                mt.fr_to_br_move[N_MOVE * cc.get_fr_to_br() as usize + i],
                next.get_fr_to_br()
            );
            assert_eq!(
                mt.urf_to_dlf_move[N_MOVE * cc.get_urf_to_dlf() as usize + i],
                next.get_urf_to_dlf()
            );
            assert_eq!(
                mt.ur_to_ul_move[N_MOVE * cc.get_ur_to_ul() as usize + i],
                next.get_ur_to_ul()
            );
            assert_eq!(
                mt.ub_to_df_move[N_MOVE * cc.get_ub_to_df() as usize + i],
                next.get_ub_to_df()
            );
        }

        // phase 2 cube
        let cc = CubieCube::from(&vec![U, R2, D3, L2, F2, U2, B2, D]);
        for m in PHASE2_MOVES {
            let next = cc.apply_moves(&[m]);
            assert_eq!(
                mt.ur_to_df_move[N_MOVE * cc.get_ur_to_df() as usize + m as usize] as u32,
                next.get_ur_to_df()
            );
        }
    }
}
