//! A crate for manipulating and solving the 3x3 Rubik's cube with [Kociemba's two phase algorithm](http://kociemba.org/cube.htm).
//!
//! ```rust
//! use twophase::cubie::CubieCube;
//! use twophase::scramble::scramble_from_str;
//! use twophase::solver::solve_cube;
//!
//! let scramble = scramble_from_str("R U R' U'").unwrap();
//! let cube = CubieCube::from(&scramble);
//! let solution = solve_cube(&cube, 22).unwrap();
//! assert!(cube.apply_moves(&solution.solution).is_solved());
//! ```

#[macro_use]
extern crate lazy_static;

/// Module containing functions for scrambling the cube.
pub mod scramble;

pub mod error;

/// Module containing 3x3 cube constants.
pub mod constants;
pub mod coord;
pub mod cubie;
pub mod facelet;
pub mod moves;
pub mod pruning;
pub mod solver;

pub use crate::cubie::CubieCube;
pub use crate::error::Error;
pub use crate::moves::Move;
pub use crate::solver::{Solution, Solver};
