use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid facelet string")]
    InvalidFaceletString,
    #[error("cube state is not reachable: {0}")]
    UnreachableCubeState(&'static str),
    #[error("invalid move: {0}")]
    InvalidMove(String),
    #[error("no solution found within {0} moves")]
    NoSolutionFound(usize),
    #[error("solver did not answer before the deadline")]
    SolverTimeout,
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UnreachableCubeState(a), Self::UnreachableCubeState(b)) => a == b,
            (Self::InvalidMove(a), Self::InvalidMove(b)) => a == b,
            (Self::NoSolutionFound(a), Self::NoSolutionFound(b)) => a == b,
            (Self::Io(a), Self::Io(b)) => a.kind() == b.kind(),
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}
