use std::str::FromStr;

use rand::Rng;

use crate::constants::ALL_MOVES;
use crate::cubie::CubieCube;
use crate::error::Error;
use crate::moves::{Move, Turn};

/// Parse a space separated move sequence such as `"R U R' U'"`.
pub fn scramble_from_str(s: &str) -> Result<Vec<Move>, Error> {
    s.split_whitespace()
        .map(|word| Move::from_str(word.trim()))
        .collect()
}

pub fn scramble_to_str(s: &[Move]) -> String {
    s.iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse an algorithm which may also contain whole cube rotations `x`, `y` and `z`.
pub fn turns_from_str(s: &str) -> Result<Vec<Turn>, Error> {
    s.split_whitespace().map(Turn::from_str).collect()
}

/// Random move sequence of `length` moves, never turning the same face twice in a row.
pub fn gen_scramble(length: usize) -> Vec<Move> {
    let mut rng = rand::thread_rng();
    let mut scramble: Vec<Move> = Vec::with_capacity(length);
    while scramble.len() < length {
        let m = ALL_MOVES[rng.gen_range(0..ALL_MOVES.len())];
        match scramble.last() {
            Some(last) if last.is_same_layer(m) => continue,
            _ => scramble.push(m),
        }
    }
    scramble
}

/// A uniformly random reachable cube.
pub fn random_state() -> CubieCube {
    let mut cc = CubieCube::default();
    cc.randomize();
    cc
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::moves::Move::*;
    use crate::moves::Rotation;

    #[test]
    fn test_scramble_from_str() {
        let m = vec![R, U, R3, U3, F, L3, D3, B2, R3, U3];
        assert_eq!(scramble_from_str("R U R' U' F L' D' B2 R' U'").unwrap(), m);
        assert_eq!(scramble_from_str("  R   U ").unwrap(), vec![R, U]);
        assert!(scramble_from_str("").unwrap().is_empty());
        assert!(scramble_from_str("R X").is_err());
    }

    #[test]
    fn test_scramble_to_str() {
        let m = vec![R, U, R3, U3, F, L3, D3, B2, R3, U3];
        assert_eq!(scramble_to_str(&m), "R U R' U' F L' D' B2 R' U'");
        assert_eq!(scramble_to_str(&[]), "");
    }

    #[test]
    fn test_turns_from_str() {
        let turns = turns_from_str("x R y2 U'").unwrap();
        assert_eq!(
            turns,
            vec![
                Turn::Rotation(Rotation::X),
                Turn::Move(R),
                Turn::Rotation(Rotation::Y2),
                Turn::Move(U3)
            ]
        );
    }

    #[test]
    fn test_gen_scramble() {
        let ss = gen_scramble(25);
        assert_eq!(ss.len(), 25);
        assert!(ss.windows(2).all(|w| !w[0].is_same_layer(w[1])));
    }

    #[test]
    fn test_random_state() {
        let cc = random_state();
        assert!(cc.verify().is_ok());
    }
}
