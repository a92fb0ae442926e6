use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use self::Corner::*;
use self::Edge::*;
use crate::constants::ALL_COLORS;
use crate::error::Error;
use crate::facelet::{
    Color, FaceCube, CENTER_FACELET, CORNER_COLOR, CORNER_FACELET, EDGE_COLOR, EDGE_FACELET,
};
use crate::moves::{self, Move, Rotation, Turn};

/// The names of the corner positions of the cube. Corner URF e.g. has an U(p), a R(ight) and a F(ront) facelet.
#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Corner {
    URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB,
}

/// The names of the edge positions of the cube. Edge UR e.g. has an U(p) and R(ight) facelet.
#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Edge {
    UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR,
}

pub const ALL_CORNERS: [Corner; 8] = [URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB];
pub const ALL_EDGES: [Edge; 12] = [UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR];

/// Binomial coefficient, 0 if k > n.
pub fn cnk(n: usize, k: usize) -> usize {
    if n < k {
        return 0;
    }
    let k = k.min(n - k);
    let mut s = 1;
    for i in 0..k {
        s = s * (n - i) / (i + 1);
    }
    s
}

fn factorial(n: usize) -> usize {
    (1..=n).product()
}

/// Rotate `arr[left..=right]` one step to the left.
pub fn rotate_left<T: Copy>(arr: &mut [T], left: usize, right: usize) {
    arr[left..=right].rotate_left(1);
}

/// Rotate `arr[left..=right]` one step to the right.
pub fn rotate_right<T: Copy>(arr: &mut [T], left: usize, right: usize) {
    arr[left..=right].rotate_right(1);
}

/// Rank the pieces `start..=end` of a permutation.
///
/// The result is `a * k! + b` where `a` is the rank of the set of slots the pieces occupy
/// and `b` is the rank of their relative order. Slots are counted from the front, or from
/// the back if `from_end` is set.
fn perm_index(perm: &[usize], start: usize, end: usize, from_end: bool) -> usize {
    let n = perm.len();
    let k = end - start + 1;
    let mut ours = [0; 6];
    let mut a = 0;
    let mut x = 0;
    if from_end {
        for j in (0..n).rev() {
            if (start..=end).contains(&perm[j]) {
                a += cnk(n - 1 - j, x + 1);
                ours[k - 1 - x] = perm[j];
                x += 1;
            }
        }
    } else {
        for (j, &p) in perm.iter().enumerate() {
            if (start..=end).contains(&p) {
                a += cnk(j, x + 1);
                ours[x] = p;
                x += 1;
            }
        }
    }
    let mut b = 0;
    for j in (1..k).rev() {
        let mut rot = 0;
        while ours[j] != start + j {
            rotate_left(&mut ours, 0, j);
            rot += 1;
        }
        b = (j + 1) * b + rot;
    }
    a * factorial(k) + b
}

/// Inverse of [perm_index]. Slots not taken by `start..=end` get the other pieces in ascending order.
fn set_perm_index(perm: &mut [usize], start: usize, end: usize, from_end: bool, idx: usize) {
    let n = perm.len();
    let k = end - start + 1;
    let mut ours = [0; 6];
    for (i, p) in ours.iter_mut().enumerate().take(k) {
        *p = start + i;
    }
    let mut b = idx % factorial(k);
    let mut a = idx / factorial(k);
    for j in 1..k {
        let rot = b % (j + 1);
        b /= j + 1;
        for _ in 0..rot {
            rotate_right(&mut ours, 0, j);
        }
    }

    let free = usize::MAX;
    perm.fill(free);
    let mut left = k;
    if from_end {
        for j in 0..n {
            if left == 0 {
                break;
            }
            let c = cnk(n - 1 - j, left);
            if a >= c {
                perm[j] = ours[k - left];
                a -= c;
                left -= 1;
            }
        }
    } else {
        for j in (0..n).rev() {
            if left == 0 {
                break;
            }
            let c = cnk(j, left);
            if a >= c {
                perm[j] = ours[left - 1];
                a -= c;
                left -= 1;
            }
        }
    }
    let mut others = (0..n).filter(|p| !(start..=end).contains(p));
    for slot in perm.iter_mut().filter(|p| **p == free) {
        *slot = others.next().unwrap_or(free);
    }
}

/// Parity of a permutation, 0 for even and 1 for odd.
fn parity<T: PartialOrd>(perm: &[T]) -> u16 {
    let mut s = 0;
    for i in (1..perm.len()).rev() {
        for j in (0..i).rev() {
            if perm[j] > perm[i] {
                s += 1;
            }
        }
    }
    s % 2
}

/// Centers of a cube in standard orientation.
pub const SOLVED_CENTERS: [Color; 6] = ALL_COLORS;

/// Represent a cube on the cubie level.
///
/// `cp[i]` is the corner sitting in position `i`, `co[i]` its twist. The same holds for the
/// edges with `ep` and `eo`. `center[i]` is the center sitting on face `i`, it only changes
/// under whole cube rotations.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct CubieCube {
    pub center: [Color; 6],
    pub cp: [Corner; 8],
    pub co: [u8; 8],
    pub ep: [Edge; 12],
    pub eo: [u8; 12],
}

impl Default for CubieCube {
    fn default() -> Self {
        Self {
            center: SOLVED_CENTERS,
            cp: ALL_CORNERS,
            co: [0; 8],
            ep: ALL_EDGES,
            eo: [0; 12],
        }
    }
}

impl fmt::Display for CubieCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", FaceCube::from(self))
    }
}

/// Build the cubie cube reached by applying `moves` to the solved cube.
impl From<&[Move]> for CubieCube {
    fn from(moves: &[Move]) -> Self {
        let mut cc = CubieCube::default();
        cc.multiply_moves(moves);
        cc
    }
}

impl From<&Vec<Move>> for CubieCube {
    fn from(moves: &Vec<Move>) -> Self {
        Self::from(moves.as_slice())
    }
}

/// Decode a facelet cube.
///
/// Each corner and edge position is matched against all candidate pieces. Fails with
/// [Error::InvalidFaceletString] if a position matches no piece or a piece shows up twice,
/// and with [Error::UnreachableCubeState] if the pieces are all there but twisted, flipped
/// or swapped in a way no sequence of moves produces.
impl TryFrom<&FaceCube> for CubieCube {
    type Error = Error;

    fn try_from(fc: &FaceCube) -> Result<Self, Self::Error> {
        let mut cc = CubieCube::default();
        for (i, c) in cc.center.iter_mut().enumerate() {
            *c = fc.f[CENTER_FACELET[i]];
        }

        for i in 0..8 {
            let fac = CORNER_FACELET[i];
            let ori = (0..3)
                .find(|&o| matches!(fc.f[fac[o]], Color::U | Color::D))
                .ok_or(Error::InvalidFaceletString)?;
            let col1 = fc.f[fac[(ori + 1) % 3]];
            let col2 = fc.f[fac[(ori + 2) % 3]];
            let j = (0..8)
                .find(|&j| CORNER_COLOR[j][1] == col1 && CORNER_COLOR[j][2] == col2)
                .ok_or(Error::InvalidFaceletString)?;
            cc.cp[i] = ALL_CORNERS[j];
            cc.co[i] = ori as u8;
        }

        for i in 0..12 {
            let fac = EDGE_FACELET[i];
            let (a, b) = (fc.f[fac[0]], fc.f[fac[1]]);
            let (j, ori) = (0..12)
                .find_map(|j| match EDGE_COLOR[j] {
                    [x, y] if x == a && y == b => Some((j, 0)),
                    [x, y] if x == b && y == a => Some((j, 1)),
                    _ => None,
                })
                .ok_or(Error::InvalidFaceletString)?;
            cc.ep[i] = ALL_EDGES[j];
            cc.eo[i] = ori;
        }

        if !cc.has_valid_pieces() {
            return Err(Error::InvalidFaceletString);
        }
        cc.verify()?;
        Ok(cc)
    }
}

impl CubieCube {
    /// Decode a 54 character cube definition string.
    pub fn from_facelets(cube_string: &str) -> Result<Self, Error> {
        let fc = FaceCube::try_from(cube_string)?;
        CubieCube::try_from(&fc)
    }

    /// Encode as a 54 character cube definition string.
    pub fn to_facelets(&self) -> String {
        FaceCube::from(self).to_string()
    }

    /// Multiply this cube with another cube b, restricted to the centers.
    pub fn center_multiply(&mut self, b: &CubieCube) {
        let a = self.center;
        for i in 0..6 {
            self.center[i] = a[b.center[i] as usize];
        }
    }

    /// Multiply this cube with another cube b, restricted to the corners.
    pub fn corner_multiply(&mut self, b: &CubieCube) {
        let (cp, co) = (self.cp, self.co);
        for c in 0..8 {
            let from = b.cp[c] as usize;
            self.cp[c] = cp[from];
            self.co[c] = (co[from] + b.co[c]) % 3;
        }
    }

    /// Multiply this cube with another cube b, restricted to the edges.
    pub fn edge_multiply(&mut self, b: &CubieCube) {
        let (ep, eo) = (self.ep, self.eo);
        for e in 0..12 {
            let from = b.ep[e] as usize;
            self.ep[e] = ep[from];
            self.eo[e] = (eo[from] + b.eo[e]) % 2;
        }
    }

    /// Multiply this cube with another cube b, i.e. apply b after this cube.
    pub fn multiply(&mut self, b: &CubieCube) {
        self.center_multiply(b);
        self.corner_multiply(b);
        self.edge_multiply(b);
    }

    pub fn apply_move(&mut self, m: Move) {
        self.multiply(m.cube());
    }

    pub fn multiply_moves(&mut self, moves: &[Move]) {
        for &m in moves {
            self.apply_move(m);
        }
    }

    /// Return a copy of this cube with `moves` applied.
    pub fn apply_moves(&self, moves: &[Move]) -> Self {
        let mut cc = *self;
        cc.multiply_moves(moves);
        cc
    }

    pub fn apply_rotation(&mut self, r: Rotation) {
        self.multiply(&r.cube());
    }

    pub fn apply_turns(&mut self, turns: &[Turn]) {
        for t in turns {
            match *t {
                Turn::Move(m) => self.apply_move(m),
                Turn::Rotation(r) => self.apply_rotation(r),
            }
        }
    }

    /// Return the inverse of this cube.
    pub fn inverse_cubie_cube(&self) -> Self {
        let mut inv = *self;
        for i in 0..6 {
            inv.center[self.center[i] as usize] = ALL_COLORS[i];
        }
        for c in 0..8 {
            inv.cp[self.cp[c] as usize] = ALL_CORNERS[c];
        }
        for c in 0..8 {
            inv.co[c] = (3 - self.co[inv.cp[c] as usize]) % 3;
        }
        for e in 0..12 {
            inv.ep[self.ep[e] as usize] = ALL_EDGES[e];
        }
        for e in 0..12 {
            inv.eo[e] = self.eo[inv.ep[e] as usize];
        }
        inv
    }

    /// The whole cube rotation which brings the centers of this cube back to standard orientation.
    ///
    /// None if the centers are in an arrangement no rotation produces.
    pub fn upright(&self) -> Option<CubieCube> {
        moves::rotations().iter().copied().find(|r| {
            let mut c = *self;
            c.center_multiply(r);
            c.center == SOLVED_CENTERS
        })
    }

    /// True if every face shows a single color, whatever the orientation of the whole cube.
    pub fn is_solved(&self) -> bool {
        match self.upright() {
            Some(r) => {
                let mut c = *self;
                c.multiply(&r);
                c == CubieCube::default()
            }
            None => false,
        }
    }

    pub fn corner_parity(&self) -> u16 {
        parity(&self.cp)
    }

    pub fn edge_parity(&self) -> u16 {
        parity(&self.ep)
    }

    /// Parity of the center permutation, odd after a quarter turn of the whole cube.
    pub fn center_parity(&self) -> u16 {
        parity(&self.center.map(|c| c as usize))
    }

    fn has_valid_pieces(&self) -> bool {
        let mut corners = [false; 8];
        let mut edges = [false; 12];
        let mut centers = [false; 6];
        for c in self.cp {
            corners[c as usize] = true;
        }
        for e in self.ep {
            edges[e as usize] = true;
        }
        for c in self.center {
            centers[c as usize] = true;
        }
        corners.iter().chain(edges.iter()).chain(centers.iter()).all(|&x| x)
    }

    /// Check that this cube can be reached from a whole cube rotation of the solved cube by moves.
    pub fn verify(&self) -> Result<(), Error> {
        if !self.has_valid_pieces() {
            return Err(Error::UnreachableCubeState("some pieces are missing"));
        }
        if self.co.iter().any(|&o| o > 2) || self.eo.iter().any(|&o| o > 1) {
            return Err(Error::UnreachableCubeState("orientation out of range"));
        }
        if self.co.iter().map(|&o| o as u32).sum::<u32>() % 3 != 0 {
            return Err(Error::UnreachableCubeState("a corner is twisted"));
        }
        if self.eo.iter().map(|&o| o as u32).sum::<u32>() % 2 != 0 {
            return Err(Error::UnreachableCubeState("an edge is flipped"));
        }
        if self.corner_parity() != (self.edge_parity() + self.center_parity()) % 2 {
            return Err(Error::UnreachableCubeState("two pieces are swapped"));
        }
        if self.upright().is_none() {
            return Err(Error::UnreachableCubeState("centers are not a rotation"));
        }
        Ok(())
    }

    pub fn is_solvable(&self) -> bool {
        self.verify().is_ok()
    }

    /// Turn this cube into a uniformly random reachable cube in standard orientation.
    pub fn randomize(&mut self) {
        let mut rng = rand::thread_rng();
        self.center = SOLVED_CENTERS;
        loop {
            self.cp.shuffle(&mut rng);
            self.ep.shuffle(&mut rng);
            if self.corner_parity() == self.edge_parity() {
                break;
            }
        }
        let mut twist = 0;
        for o in self.co.iter_mut().take(7) {
            *o = rng.gen_range(0..3);
            twist += *o;
        }
        self.co[7] = (3 - twist % 3) % 3;
        let mut flip = 0;
        for o in self.eo.iter_mut().take(11) {
            *o = rng.gen_range(0..2);
            flip += *o;
        }
        self.eo[11] = (2 - flip % 2) % 2;
    }

    /// The twist of the 8 corners, 0 <= twist < 3^7.
    pub fn get_twist(&self) -> u16 {
        self.co[..7].iter().fold(0, |acc, &o| 3 * acc + o as u16)
    }

    pub fn set_twist(&mut self, twist: u16) {
        let mut twist = twist;
        let mut parity = 0;
        for i in (0..7).rev() {
            self.co[i] = (twist % 3) as u8;
            parity += self.co[i];
            twist /= 3;
        }
        self.co[7] = (3 - parity % 3) % 3;
    }

    /// The flip of the 12 edges, 0 <= flip < 2^11.
    pub fn get_flip(&self) -> u16 {
        self.eo[..11].iter().fold(0, |acc, &o| 2 * acc + o as u16)
    }

    pub fn set_flip(&mut self, flip: u16) {
        let mut flip = flip;
        let mut parity = 0;
        for i in (0..11).rev() {
            self.eo[i] = (flip % 2) as u8;
            parity += self.eo[i];
            flip /= 2;
        }
        self.eo[11] = (2 - parity % 2) % 2;
    }

    /// Set the corner permutation parity, the corners are otherwise solved.
    pub fn set_corner_parity(&mut self, parity: u16) {
        self.cp = ALL_CORNERS;
        if parity % 2 == 1 {
            self.cp.swap(DBL as usize, DRB as usize);
        }
    }

    fn corner_indices(&self) -> [usize; 8] {
        self.cp.map(|c| c as usize)
    }

    fn edge_indices(&self) -> [usize; 12] {
        self.ep.map(|e| e as usize)
    }

    fn set_corner_indices(&mut self, perm: [usize; 8]) {
        self.cp = perm.map(|c| ALL_CORNERS[c]);
    }

    fn set_edge_indices(&mut self, perm: [usize; 12]) {
        self.ep = perm.map(|e| ALL_EDGES[e]);
    }

    fn get_edges(&self, start: Edge, end: Edge, from_end: bool) -> u16 {
        perm_index(&self.edge_indices(), start as usize, end as usize, from_end) as u16
    }

    fn set_edges(&mut self, start: Edge, end: Edge, from_end: bool, idx: u16) {
        let mut perm = [0; 12];
        set_perm_index(&mut perm, start as usize, end as usize, from_end, idx as usize);
        self.set_edge_indices(perm);
    }

    /// Positions and order of the FR, FL, BL and BR edges, 0 <= fr_to_br < 11880.
    ///
    /// The slots are counted from BR backwards so that the edges sitting in the UD-slice give fr_to_br < 24.
    pub fn get_fr_to_br(&self) -> u16 {
        self.get_edges(FR, BR, true)
    }

    pub fn set_fr_to_br(&mut self, idx: u16) {
        self.set_edges(FR, BR, true, idx)
    }

    /// Positions of the FR, FL, BL and BR edges regardless of their order, 0 <= slice < 495.
    pub fn get_slice(&self) -> u16 {
        self.get_fr_to_br() / 24
    }

    pub fn set_slice(&mut self, idx: u16) {
        self.set_fr_to_br(idx * 24)
    }

    /// Positions and order of the URF, UFL, ULB, UBR, DFR and DLF corners, 0 <= urf_to_dlf < 20160.
    pub fn get_urf_to_dlf(&self) -> u16 {
        perm_index(&self.corner_indices(), URF as usize, DLF as usize, false) as u16
    }

    pub fn set_urf_to_dlf(&mut self, idx: u16) {
        let mut perm = [0; 8];
        set_perm_index(&mut perm, URF as usize, DLF as usize, false, idx as usize);
        self.set_corner_indices(perm);
    }

    /// Positions and order of the UR, UF, UL, UB, DR and DF edges.
    ///
    /// Only meaningful in phase 2, where these edges stay in the U and D layers and 0 <= ur_to_df < 20160.
    pub fn get_ur_to_df(&self) -> u32 {
        perm_index(&self.edge_indices(), UR as usize, DF as usize, false) as u32
    }

    pub fn set_ur_to_df(&mut self, idx: u16) {
        self.set_edges(UR, DF, false, idx)
    }

    /// Positions and order of the UR, UF and UL edges, 0 <= ur_to_ul < 1320.
    pub fn get_ur_to_ul(&self) -> u16 {
        self.get_edges(UR, UL, false)
    }

    pub fn set_ur_to_ul(&mut self, idx: u16) {
        self.set_edges(UR, UL, false, idx)
    }

    /// Positions and order of the UB, DR and DF edges, 0 <= ub_to_df < 1320.
    pub fn get_ub_to_df(&self) -> u16 {
        self.get_edges(UB, DF, false)
    }

    pub fn set_ub_to_df(&mut self, idx: u16) {
        self.set_edges(UB, DF, false, idx)
    }
}

/// URtoDF of the cube made of the UR, UF, UL edges of `a` and the UB, DR, DF edges of `b`.
///
/// None if both cubes place one of their edges in the same slot.
pub fn merge_ur_to_df(a: &CubieCube, b: &CubieCube) -> Option<u16> {
    let mut perm = [usize::MAX; 12];
    for i in 0..8 {
        let from_a = a.ep[i] <= UL;
        let from_b = (UB..=DF).contains(&b.ep[i]);
        match (from_a, from_b) {
            (true, true) => return None,
            (true, false) => perm[i] = a.ep[i] as usize,
            (false, true) => perm[i] = b.ep[i] as usize,
            (false, false) => {}
        }
    }
    Some(perm_index(&perm, UR as usize, DF as usize, false) as u16)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants::*;
    use crate::moves::Move::*;

    #[test]
    fn test_cnk() {
        assert_eq!(cnk(12, 4), 495);
        assert_eq!(cnk(8, 3), 56);
        assert_eq!(cnk(3, 4), 0);
        assert_eq!(cnk(5, 0), 1);
    }

    #[test]
    fn test_rotate() {
        let mut a = [0, 1, 2, 3, 4];
        rotate_left(&mut a, 1, 3);
        assert_eq!(a, [0, 2, 3, 1, 4]);
        rotate_right(&mut a, 1, 3);
        assert_eq!(a, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_solved_coordinates() {
        let cc = CubieCube::default();
        assert_eq!(cc.get_twist(), 0);
        assert_eq!(cc.get_flip(), 0);
        assert_eq!(cc.get_slice(), 0);
        assert_eq!(cc.get_fr_to_br(), 0);
        assert_eq!(cc.get_urf_to_dlf(), 0);
        assert_eq!(cc.get_ur_to_df(), 0);
        assert_eq!(cc.get_ur_to_ul(), 0);
        assert_eq!(cc.get_ub_to_df(), UBTODF_SOLVED);
        assert_eq!(cc.corner_parity(), 0);
    }

    #[test]
    fn test_moves_have_order_four() {
        let mut cc = CubieCube::default();
        cc.randomize();
        for m in ALL_MOVES {
            let mut c = cc;
            for i in 1..=4 {
                c.apply_move(m);
                let back = c == cc;
                match (m.power(), i) {
                    (2, 2) | (_, 4) => assert!(back, "{} applied {} times", m, i),
                    _ => assert!(!back, "{} applied {} times", m, i),
                }
            }
        }
    }

    #[test]
    fn test_sexy_move_has_order_six() {
        let sexy = [R, U, R3, U3];
        let mut cc = CubieCube::default();
        for i in 1..=6 {
            cc.multiply_moves(&sexy);
            assert_eq!(cc == CubieCube::default(), i == 6);
        }
        assert!(cc.is_solved());
    }

    #[test]
    fn test_randomize_is_reachable() {
        let mut cc = CubieCube::default();
        for _ in 0..100 {
            cc.randomize();
            assert_eq!(cc.corner_parity(), cc.edge_parity());
            assert_eq!(cc.co.iter().map(|&o| o as u32).sum::<u32>() % 3, 0);
            assert_eq!(cc.eo.iter().map(|&o| o as u32).sum::<u32>() % 2, 0);
            assert!(cc.verify().is_ok());
        }
    }

    #[test]
    fn test_facelet_round_trip() {
        let mut cc = CubieCube::default();
        for _ in 0..50 {
            cc.randomize();
            let s = cc.to_facelets();
            assert_eq!(CubieCube::from_facelets(&s).unwrap(), cc);
        }
    }

    #[test]
    fn test_solved_facelets_decode_to_identity() {
        let cc = CubieCube::from_facelets("UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB")
            .unwrap();
        assert_eq!(cc, CubieCube::default());
        assert!(cc.is_solved());
    }

    #[test]
    fn test_from_facelets() {
        let cc = CubieCube::from_facelets("RLLBUFUUUBDURRBBUBRLRRFDFDDLLLUDFLRRDDFRLFDBUBFFLBBDUF")
            .unwrap();
        assert!(cc.verify().is_ok());
        assert_eq!(
            cc.to_facelets(),
            "RLLBUFUUUBDURRBBUBRLRRFDFDDLLLUDFLRRDDFRLFDBUBFFLBBDUF"
        );
    }

    #[test]
    fn test_from_facelets_unreachable() {
        // twist the URF corner in place
        let mut fc = FaceCube::default();
        let [u, r, f] = CORNER_FACELET[0];
        fc.f[u] = Color::F;
        fc.f[r] = Color::U;
        fc.f[f] = Color::R;
        assert_eq!(
            CubieCube::try_from(&fc),
            Err(Error::UnreachableCubeState("a corner is twisted"))
        );

        // flip the UR edge in place
        let mut fc = FaceCube::default();
        let [u, r] = EDGE_FACELET[0];
        fc.f.swap(u, r);
        assert_eq!(
            CubieCube::try_from(&fc),
            Err(Error::UnreachableCubeState("an edge is flipped"))
        );

        // swap the UR and UF edges
        let mut fc = FaceCube::default();
        let [_, ur_r] = EDGE_FACELET[0];
        let [_, uf_f] = EDGE_FACELET[1];
        fc.f.swap(ur_r, uf_f);
        assert_eq!(
            CubieCube::try_from(&fc),
            Err(Error::UnreachableCubeState("two pieces are swapped"))
        );
    }

    #[test]
    fn test_from_facelets_inconsistent() {
        // the UR edge shows U on both stickers
        let mut fc = FaceCube::default();
        let [_, r] = EDGE_FACELET[0];
        fc.f[r] = Color::U;
        assert_eq!(CubieCube::try_from(&fc), Err(Error::InvalidFaceletString));
    }

    #[test]
    fn test_inverse() {
        let mut cc = CubieCube::default();
        cc.randomize();
        let mut c = cc;
        c.multiply(&cc.inverse_cubie_cube());
        assert_eq!(c, CubieCube::default());
        let moves = [R, U2, F3, L, D, B2];
        let inv = CubieCube::from(&moves[..]).inverse_cubie_cube();
        let undo: Vec<Move> = moves.iter().rev().map(|m| m.get_inverse()).collect();
        assert_eq!(inv, CubieCube::from(&undo));
    }

    #[test]
    fn test_rotated_cube_is_solved() {
        let mut cc = CubieCube::default();
        cc.apply_rotation(Rotation::X);
        cc.apply_rotation(Rotation::Y);
        assert_ne!(cc, CubieCube::default());
        assert!(cc.is_solved());
        let s = cc.to_facelets();
        for face in 0..6 {
            let c = &s[9 * face..9 * face + 9];
            assert!(c.chars().all(|x| x == c.chars().nth(4).unwrap()));
        }
        assert_eq!(CubieCube::from_facelets(&s).unwrap(), cc);
    }

    #[test]
    fn test_merge_ur_to_df() {
        let cc = CubieCube::from(&vec![U, R2, D3, F2, L2, U2, B2]);
        let mut a = CubieCube::default();
        let mut b = CubieCube::default();
        a.set_ur_to_ul(cc.get_ur_to_ul());
        b.set_ub_to_df(cc.get_ub_to_df());
        assert_eq!(merge_ur_to_df(&a, &b), Some(cc.get_ur_to_df() as u16));

        // UR and UB both in slot UR
        a.set_ur_to_ul(0);
        b.set_ub_to_df(0);
        assert_eq!(merge_ur_to_df(&a, &b), None);
    }
}
