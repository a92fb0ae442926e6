use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::ALL_COLORS;
use crate::cubie::CubieCube;
use crate::error::Error;

/// The six face colors, named after the face whose center carries them in the solved cube.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Color {
    U,
    R,
    F,
    D,
    L,
    B,
}

impl TryFrom<char> for Color {
    type Error = Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'U' => Ok(Color::U),
            'R' => Ok(Color::R),
            'F' => Ok(Color::F),
            'D' => Ok(Color::D),
            'L' => Ok(Color::L),
            'B' => Ok(Color::B),
            _ => Err(Error::InvalidFaceletString),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Facelet positions, `U1..U9`, `R1..R9`, `F1..F9`, `D1..D9`, `L1..L9`, `B1..B9`.
///
/// ```text
///              |************|
///              |*U1**U2**U3*|
///              |************|
///              |*U4**U5**U6*|
///              |************|
///              |*U7**U8**U9*|
///              |************|
/// |************|************|************|************|
/// |*L1**L2**L3*|*F1**F2**F3*|*R1**R2**R3*|*B1**B2**B3*|
/// |************|************|************|************|
/// |*L4**L5**L6*|*F4**F5**F6*|*R4**R5**R6*|*B4**B5**B6*|
/// |************|************|************|************|
/// |*L7**L8**L9*|*F7**F8**F9*|*R7**R8**R9*|*B7**B8**B9*|
/// |************|************|************|************|
///              |************|
///              |*D1**D2**D3*|
///              |************|
///              |*D4**D5**D6*|
///              |************|
///              |*D7**D8**D9*|
///              |************|
/// ```
///
/// A cube definition string lists the facelets in the order U1..U9, R1..R9, F1..F9, D1..D9, L1..L9, B1..B9.
#[rustfmt::skip]
pub mod pos {
    pub const U1: usize = 0;  pub const U2: usize = 1;  pub const U3: usize = 2;
    pub const U4: usize = 3;  pub const U6: usize = 5;
    pub const U7: usize = 6;  pub const U8: usize = 7;  pub const U9: usize = 8;
    pub const R1: usize = 9;  pub const R2: usize = 10; pub const R3: usize = 11;
    pub const R4: usize = 12; pub const R6: usize = 14;
    pub const R7: usize = 15; pub const R8: usize = 16; pub const R9: usize = 17;
    pub const F1: usize = 18; pub const F2: usize = 19; pub const F3: usize = 20;
    pub const F4: usize = 21; pub const F6: usize = 23;
    pub const F7: usize = 24; pub const F8: usize = 25; pub const F9: usize = 26;
    pub const D1: usize = 27; pub const D2: usize = 28; pub const D3: usize = 29;
    pub const D4: usize = 30; pub const D6: usize = 32;
    pub const D7: usize = 33; pub const D8: usize = 34; pub const D9: usize = 35;
    pub const L1: usize = 36; pub const L2: usize = 37; pub const L3: usize = 38;
    pub const L4: usize = 39; pub const L6: usize = 41;
    pub const L7: usize = 42; pub const L8: usize = 43; pub const L9: usize = 44;
    pub const B1: usize = 45; pub const B2: usize = 46; pub const B3: usize = 47;
    pub const B4: usize = 48; pub const B6: usize = 50;
    pub const B7: usize = 51; pub const B8: usize = 52; pub const B9: usize = 53;
}

use pos::*;

/// Map the corner positions to facelet positions, clockwise starting with the U/D facelet.
pub const CORNER_FACELET: [[usize; 3]; 8] = [
    [U9, R1, F3], // URF
    [U7, F1, L3], // UFL
    [U1, L1, B3], // ULB
    [U3, B1, R3], // UBR
    [D3, F9, R7], // DFR
    [D1, L9, F7], // DLF
    [D7, B9, L7], // DBL
    [D9, R9, B7], // DRB
];

/// Map the edge positions to facelet positions, starting with the U/D (or F/B for slice edges) facelet.
pub const EDGE_FACELET: [[usize; 2]; 12] = [
    [U6, R2], // UR
    [U8, F2], // UF
    [U4, L2], // UL
    [U2, B2], // UB
    [D6, R8], // DR
    [D2, F8], // DF
    [D4, L8], // DL
    [D8, B8], // DB
    [F6, R4], // FR
    [F4, L6], // FL
    [B6, L4], // BL
    [B4, R6], // BR
];

/// Map the corner pieces to their colors, in the same order as [CORNER_FACELET].
pub const CORNER_COLOR: [[Color; 3]; 8] = [
    [Color::U, Color::R, Color::F],
    [Color::U, Color::F, Color::L],
    [Color::U, Color::L, Color::B],
    [Color::U, Color::B, Color::R],
    [Color::D, Color::F, Color::R],
    [Color::D, Color::L, Color::F],
    [Color::D, Color::B, Color::L],
    [Color::D, Color::R, Color::B],
];

/// Map the edge pieces to their colors, in the same order as [EDGE_FACELET].
pub const EDGE_COLOR: [[Color; 2]; 12] = [
    [Color::U, Color::R],
    [Color::U, Color::F],
    [Color::U, Color::L],
    [Color::U, Color::B],
    [Color::D, Color::R],
    [Color::D, Color::F],
    [Color::D, Color::L],
    [Color::D, Color::B],
    [Color::F, Color::R],
    [Color::F, Color::L],
    [Color::B, Color::L],
    [Color::B, Color::R],
];

/// Index of the center facelet of each face.
pub const CENTER_FACELET: [usize; 6] = [4, 13, 22, 31, 40, 49];

/// Cube on the facelet level.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct FaceCube {
    pub f: [Color; 54],
}

impl Default for FaceCube {
    fn default() -> Self {
        let mut f = [Color::U; 54];
        for (i, c) in ALL_COLORS.iter().enumerate() {
            f[9 * i..9 * i + 9].fill(*c);
        }
        Self { f }
    }
}

impl fmt::Display for FaceCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.f {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Parse a cube definition string, e.g. `UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB`.
///
/// Every color has to appear exactly nine times.
impl TryFrom<&str> for FaceCube {
    type Error = Error;

    fn try_from(cube_string: &str) -> Result<Self, Self::Error> {
        let mut f = [Color::U; 54];
        let mut count = [0; 6];
        let mut len = 0;
        for (i, ch) in cube_string.chars().enumerate() {
            if i >= 54 {
                return Err(Error::InvalidFaceletString);
            }
            let c = Color::try_from(ch)?;
            f[i] = c;
            count[c as usize] += 1;
            len += 1;
        }
        if len != 54 || count.iter().any(|&n| n != 9) {
            return Err(Error::InvalidFaceletString);
        }
        Ok(Self { f })
    }
}

/// Facelet colors of a cubie cube.
///
/// Corners and edges carry absolute colors, so a cube whose centers were moved by a
/// whole cube rotation still paints every piece with the colors of its home faces.
impl From<&CubieCube> for FaceCube {
    fn from(cc: &CubieCube) -> Self {
        let mut f = [Color::U; 54];
        for (i, &c) in cc.center.iter().enumerate() {
            f[CENTER_FACELET[i]] = c;
        }
        for i in 0..8 {
            let j = cc.cp[i] as usize;
            let ori = cc.co[i] as usize;
            for k in 0..3 {
                f[CORNER_FACELET[i][(k + ori) % 3]] = CORNER_COLOR[j][k];
            }
        }
        for i in 0..12 {
            let j = cc.ep[i] as usize;
            let ori = cc.eo[i] as usize;
            for k in 0..2 {
                f[EDGE_FACELET[i][(k + ori) % 2]] = EDGE_COLOR[j][k];
            }
        }
        Self { f }
    }
}
