use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::coord::{self, CoordCube};
use crate::cubie::CubieCube;
use crate::error::Error;
use crate::moves::{Move, MoveTables};
use crate::pruning::PruningTables;

/// All data tables of the two phase algorithm.
///
/// Built once by [Solver::new] and only read afterwards, so one solver can be shared by any
/// number of searches.
pub struct Solver {
    mv: MoveTables,
    merge: Vec<u16>,
    pr: PruningTables,
}

/// Solution result:
/// * solution: the moves solving the cube.
/// * solve_time: time spent searching, table construction not included.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Solution {
    pub solution: Vec<Move>,
    pub solve_time: Duration,
}

impl Solution {
    pub fn len(&self) -> usize {
        self.solution.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solution.is_empty()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let moves: Vec<String> = self.solution.iter().map(|m| m.to_string()).collect();
        write!(f, "{}", moves.join(" "))
    }
}

/// Where a search stands.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SearchState {
    /// Looking for phase 1 maneuvers of this length.
    Phase1(usize),
    /// Looking for phase 2 maneuvers of this length after each phase 1 maneuver.
    Phase2(usize),
    Solved,
    Exhausted,
}

impl Solver {
    pub fn new() -> Self {
        let start = Instant::now();
        let mv = MoveTables::new();
        info!("move tables built in {:?}", start.elapsed());
        let merge = coord::build_merge_table();
        let pr = PruningTables::new(&mv);
        info!("solver tables built in {:?}", start.elapsed());
        Self { mv, merge, pr }
    }

    pub fn move_tables(&self) -> &MoveTables {
        &self.mv
    }

    pub fn pruning_tables(&self) -> &PruningTables {
        &self.pr
    }

    pub fn min_dist1(&self, c: &CoordCube) -> usize {
        self.pr.min_dist1(c) as usize
    }

    pub fn min_dist2(&self, c: &CoordCube) -> usize {
        self.pr.min_dist2(c) as usize
    }

    /// Solve `cube` with at most `max_depth` moves.
    ///
    /// The cube may be in any whole cube orientation, the moves returned turn the faces as they are
    /// seen on `cube`.
    pub fn solve(&self, cube: &CubieCube, max_depth: usize) -> Result<Solution, Error> {
        self.solve_cancellable(cube, max_depth, None)
    }

    fn solve_cancellable(
        &self,
        cube: &CubieCube,
        max_depth: usize,
        cancel: Option<&AtomicBool>,
    ) -> Result<Solution, Error> {
        let start = Instant::now();
        cube.verify()?;
        let rot = cube
            .upright()
            .ok_or(Error::UnreachableCubeState("centers are not a rotation"))?;
        let mut upright = *cube;
        upright.multiply(&rot);
        if upright == CubieCube::default() {
            return Ok(Solution::default());
        }

        let mut search = Search::new(self, &upright, max_depth, cancel);
        match search.run() {
            SearchState::Solved => {
                let mut solution = Vec::with_capacity(search.path.len());
                for &m in &search.path {
                    let m = m
                        .conjugate(&rot)
                        .unwrap_or_else(|| panic!("rotation does not map {} to a face turn", m));
                    solution.push(m);
                }
                let solve_time = start.elapsed();
                debug!("found {} moves in {:?}", solution.len(), solve_time);
                Ok(Solution {
                    solution,
                    solve_time,
                })
            }
            _ => Err(Error::NoSolutionFound(max_depth)),
        }
    }

    /// Solve `cube` on a worker thread, giving up after `timeout`.
    ///
    /// On timeout the worker is asked to stop and [Error::SolverTimeout] is returned; the
    /// solver can be used again right away.
    pub fn solve_timeout(
        solver: &Arc<Solver>,
        cube: &CubieCube,
        max_depth: usize,
        timeout: Duration,
    ) -> Result<Solution, Error> {
        let (tx, rx) = mpsc::channel();
        let cancel = Arc::new(AtomicBool::new(false));
        let worker = Arc::clone(solver);
        let flag = Arc::clone(&cancel);
        let cube = *cube;
        thread::spawn(move || {
            let result = worker.solve_cancellable(&cube, max_depth, Some(flag.as_ref()));
            // the receiver is gone after a timeout
            let _ = tx.send(result);
        });
        match rx.recv_timeout(timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => {
                cancel.store(true, Ordering::Relaxed);
                Err(Error::SolverTimeout)
            }
            Err(RecvTimeoutError::Disconnected) => panic!("solver worker exited without a result"),
        }
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

/// One run of the two phase algorithm on an upright cube.
///
/// `nodes[n]` holds the coordinates after the first `n` moves of `path`.
struct Search<'a> {
    solver: &'a Solver,
    cancel: Option<&'a AtomicBool>,
    max_depth: usize,
    nodes: Vec<CoordCube>,
    path: Vec<Move>,
    togo2: usize,
    phase1_leaves: usize,
    state: SearchState,
}

impl<'a> Search<'a> {
    fn new(
        solver: &'a Solver,
        cube: &CubieCube,
        max_depth: usize,
        cancel: Option<&'a AtomicBool>,
    ) -> Self {
        let mut nodes = vec![CoordCube::default(); max_depth + 1];
        nodes[0] = CoordCube::from(cube);
        Self {
            solver,
            cancel,
            max_depth,
            nodes,
            path: Vec::with_capacity(max_depth),
            togo2: 0,
            phase1_leaves: 0,
            state: SearchState::Phase1(0),
        }
    }

    fn cancelled(&self) -> bool {
        self.cancel.map_or(false, |c| c.load(Ordering::Relaxed))
    }

    /// Iterate phase 1 lengths, and for each the phase 2 lengths that still fit in `max_depth`.
    fn run(&mut self) -> SearchState {
        let dist1 = self.solver.min_dist1(&self.nodes[0]);
        for depth1 in dist1..=self.max_depth {
            self.state = SearchState::Phase1(depth1);
            self.phase1_leaves = 0;
            for depth2 in 0..=self.max_depth - depth1 {
                self.togo2 = depth2;
                self.path.clear();
                if self.phase1(0, depth1) {
                    self.state = SearchState::Solved;
                    return self.state;
                }
                if self.cancelled() {
                    debug!("search cancelled in {:?}", self.state);
                    self.state = SearchState::Exhausted;
                    return self.state;
                }
                if self.phase1_leaves == 0 {
                    break;
                }
            }
            debug!(
                "phase 1 depth {} done, {} maneuvers tried",
                depth1, self.phase1_leaves
            );
        }
        self.state = SearchState::Exhausted;
        self.state
    }

    fn phase1(&mut self, n: usize, togo: usize) -> bool {
        if self.cancelled() {
            return false;
        }
        let node = self.nodes[n];
        if togo == 0 {
            // phase 2 moves at the end belong to phase 2
            let last_ok = self.path.last().map_or(true, |m| !m.is_phase2());
            return last_ok && node.in_phase2() && self.start_phase2(n);
        }
        for m in ALL_MOVES {
            if let Some(last) = self.path.last() {
                if !last.may_precede(m) {
                    continue;
                }
            }
            let mut next = node;
            next.phase1_move(&self.solver.mv, m);
            if self.solver.min_dist1(&next) > togo - 1 {
                continue;
            }
            self.nodes[n + 1] = next;
            self.path.push(m);
            if self.phase1(n + 1, togo - 1) {
                return true;
            }
            self.path.pop();
        }
        false
    }

    /// Derive the phase 2 coordinates of a phase 1 maneuver and search phase 2.
    fn start_phase2(&mut self, n: usize) -> bool {
        self.phase1_leaves += 1;
        self.state = SearchState::Phase2(self.togo2);
        let mut node = self.nodes[0];
        for &m in &self.path {
            node.carry_move(&self.solver.mv, m);
        }
        node.twist = 0;
        node.flip = 0;
        node.slice = 0;
        let (ur_to_ul, ub_to_df) = (node.ur_to_ul as usize, node.ub_to_df as usize);
        assert!(
            ur_to_ul < N_MERGE && ub_to_df < N_MERGE,
            "U and D edges outside their layers after phase 1: {}",
            node
        );
        node.ur_to_df = self.solver.merge[N_MERGE * ur_to_ul + ub_to_df];
        assert_ne!(node.ur_to_df, INVALID, "edge merge collision: {}", node);
        self.nodes[n] = node;
        if self.solver.min_dist2(&node) > self.togo2 {
            return false;
        }
        self.phase2(n, self.togo2)
    }

    fn phase2(&mut self, n: usize, togo: usize) -> bool {
        if self.cancelled() {
            return false;
        }
        let node = self.nodes[n];
        if togo == 0 {
            return self.solver.min_dist2(&node) == 0;
        }
        for m in PHASE2_MOVES {
            if let Some(last) = self.path.last() {
                if !last.may_precede(m) {
                    continue;
                }
            }
            let mut next = node;
            next.phase2_move(&self.solver.mv, m);
            if self.solver.min_dist2(&next) > togo - 1 {
                continue;
            }
            self.nodes[n + 1] = next;
            self.path.push(m);
            if self.phase2(n + 1, togo - 1) {
                return true;
            }
            self.path.pop();
        }
        false
    }
}

lazy_static! {
    static ref SOLVER: Arc<Solver> = Arc::new(Solver::new());
}

/// The process wide solver, built on first use.
pub fn default_solver() -> &'static Arc<Solver> {
    &SOLVER
}

/// Solve a cube given as a facelet string.
///
/// # Parameters
/// * `cubestring`: 54 facelets, faces in the order U, R, F, D, L, B.
/// * `max_depth`: maximal solution length, [DEFAULT_MAX_DEPTH] always suffices.
///
/// # Examples
/// ```rust
/// use twophase::solver::solve;
///
/// let solution = solve("UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB", 22).unwrap();
/// assert_eq!(solution, "");
/// ```
pub fn solve(cubestring: &str, max_depth: usize) -> Result<String, Error> {
    let cc = CubieCube::from_facelets(cubestring)?;
    Ok(solve_cube(&cc, max_depth)?.to_string())
}

/// Solve a [CubieCube] with the process wide solver.
pub fn solve_cube(cube: &CubieCube, max_depth: usize) -> Result<Solution, Error> {
    SOLVER.solve(cube, max_depth)
}

#[cfg(test)]
mod test {
    use crate::moves::Move::*;
    use crate::solver::*;

    #[test]
    fn test_solve_facelet_cube() {
        let cube = "RLLBUFUUUBDURRBBUBRLRRFDFDDLLLUDFLRRDDFRLFDBUBFFLBBDUF";
        let cc = CubieCube::from_facelets(cube).unwrap();
        let result = solve_cube(&cc, DEFAULT_MAX_DEPTH).unwrap();
        assert!(result.len() <= DEFAULT_MAX_DEPTH);
        assert!(cc.apply_moves(&result.solution).is_solved());
    }

    #[test]
    fn test_single_move() {
        let cc = CubieCube::from(&vec![F]);
        let result = solve_cube(&cc, DEFAULT_MAX_DEPTH).unwrap();
        assert_eq!(result.solution, vec![F3]);
        assert_eq!(result.to_string(), "F'");
    }

    #[test]
    fn test_phase2_cube() {
        let scramble = vec![U, R2, D3, B2];
        let cc = CubieCube::from(&scramble);
        let result = solve_cube(&cc, DEFAULT_MAX_DEPTH).unwrap();
        assert_eq!(result.len(), 4);
        assert!(result.solution.iter().all(|m| m.is_phase2()));
        assert!(cc.apply_moves(&result.solution).is_solved());
    }

    #[test]
    fn test_solved() {
        let result = solve_cube(&CubieCube::default(), DEFAULT_MAX_DEPTH).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.to_string(), "");
    }

    #[test]
    fn test_depth_limit() {
        let cc = CubieCube::from(&vec![R, U, F, L, D, B]);
        assert_eq!(solve_cube(&cc, 3), Err(Error::NoSolutionFound(3)));
    }

    #[test]
    fn test_cancelled_search() {
        let cancel = AtomicBool::new(true);
        let cc = CubieCube::from(&vec![R, U, F]);
        let mut search = Search::new(default_solver(), &cc, DEFAULT_MAX_DEPTH, Some(&cancel));
        assert_eq!(search.run(), SearchState::Exhausted);
    }

    #[test]
    fn test_unreachable() {
        let mut cc = CubieCube::default();
        cc.co[0] = 1;
        assert!(matches!(
            solve_cube(&cc, DEFAULT_MAX_DEPTH),
            Err(Error::UnreachableCubeState(_))
        ));
    }
}
