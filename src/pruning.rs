use log::{debug, info};

use crate::constants::*;
use crate::coord::CoordCube;
use crate::moves::{Move, MoveTables};

/// Depth value of an entry not reached yet.
pub const UNKNOWN: u8 = 0xf;

/// Lower bounds for the number of moves to the goal of a phase, 4 bits per entry, 8 entries per word.
pub struct PruningTable {
    table: Vec<u32>,
    len: usize,
}

impl PruningTable {
    /// A table of `len` entries, all [UNKNOWN].
    pub fn new(len: usize) -> Self {
        Self {
            table: vec![0xffffffff; len / 8 + 1],
            len,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, ix: usize) -> u8 {
        ((self.table[ix / 8] >> ((ix % 8) * 4)) & 0xf) as u8
    }

    pub fn set(&mut self, ix: usize, value: u8) {
        let shift = (ix % 8) * 4;
        let base = ix / 8;
        self.table[base] &= !(0xf << shift);
        self.table[base] |= (value as u32 & 0xf) << shift;
    }
}

/// Fill a pruning table of `size` entries by breadth first search from index 0, the solved state.
///
/// `step(ix, m)` is the index reached from `ix` by move `m`. Every index must be reachable with
/// `moves`, a pass that adds nothing before the table is full panics.
pub fn build_pruning_table<F>(name: &str, size: usize, moves: &[Move], step: F) -> PruningTable
where
    F: Fn(usize, Move) -> usize,
{
    let mut pt = PruningTable::new(size);
    pt.set(0, 0);
    let mut done = 1;
    let mut depth = 0;
    while done < size {
        let mut reached = 0;
        for ix in 0..size {
            if pt.get(ix) != depth {
                continue;
            }
            for &m in moves {
                let ix1 = step(ix, m);
                if pt.get(ix1) == UNKNOWN {
                    pt.set(ix1, depth + 1);
                    reached += 1;
                }
            }
        }
        assert!(
            reached > 0,
            "{} pruning table stalled at depth {} with {}/{} entries",
            name,
            depth,
            done,
            size
        );
        done += reached;
        depth += 1;
        assert!(depth < UNKNOWN, "{} pruning table deeper than 14", name);
        debug!("{}: depth {} done {}/{}", name, depth, done, size);
    }
    info!("{} pruning table complete, max depth {}", name, depth);
    pt
}

/// The four pruning tables of the two phases.
///
/// * `slice_twist`: `N_SLICE1 * twist + slice`
/// * `slice_flip`: `N_SLICE1 * flip + slice`
/// * `slice_urf_to_dlf_parity`: `(N_SLICE2 * urf_to_dlf + fr_to_br) * 2 + parity`
/// * `slice_ur_to_df_parity`: `(N_SLICE2 * ur_to_df + fr_to_br) * 2 + parity`
pub struct PruningTables {
    pub slice_twist: PruningTable,
    pub slice_flip: PruningTable,
    pub slice_urf_to_dlf_parity: PruningTable,
    pub slice_ur_to_df_parity: PruningTable,
}

impl PruningTables {
    pub fn new(mt: &MoveTables) -> Self {
        let slice_twist = build_pruning_table("slice_twist", N_SLICE1 * N_TWIST, &ALL_MOVES, |ix, m| {
            let (twist, slice) = (ix / N_SLICE1, ix % N_SLICE1);
            let m = m as usize;
            let twist1 = mt.twist_move[N_MOVE * twist + m] as usize;
            let slice1 = mt.slice_move[N_MOVE * slice + m] as usize;
            N_SLICE1 * twist1 + slice1
        });
        let slice_flip = build_pruning_table("slice_flip", N_SLICE1 * N_FLIP, &ALL_MOVES, |ix, m| {
            let (flip, slice) = (ix / N_SLICE1, ix % N_SLICE1);
            let m = m as usize;
            let flip1 = mt.flip_move[N_MOVE * flip + m] as usize;
            let slice1 = mt.slice_move[N_MOVE * slice + m] as usize;
            N_SLICE1 * flip1 + slice1
        });
        let slice_urf_to_dlf_parity = build_pruning_table(
            "slice_urf_to_dlf_parity",
            N_SLICE2 * N_URFTODLF * N_PARITY,
            &PHASE2_MOVES,
            |ix, m| phase2_step(mt, &mt.urf_to_dlf_move, ix, m),
        );
        let slice_ur_to_df_parity = build_pruning_table(
            "slice_ur_to_df_parity",
            N_SLICE2 * N_URTODF * N_PARITY,
            &PHASE2_MOVES,
            |ix, m| phase2_step(mt, &mt.ur_to_df_move, ix, m),
        );
        Self {
            slice_twist,
            slice_flip,
            slice_urf_to_dlf_parity,
            slice_ur_to_df_parity,
        }
    }

    /// Lower bound for the number of moves to reach the phase 2 subgroup.
    pub fn min_dist1(&self, c: &CoordCube) -> u8 {
        let slice = c.slice as usize;
        let twist = self.slice_twist.get(N_SLICE1 * c.twist as usize + slice);
        let flip = self.slice_flip.get(N_SLICE1 * c.flip as usize + slice);
        twist.max(flip)
    }

    /// Lower bound for the number of phase 2 moves to solve the cube.
    pub fn min_dist2(&self, c: &CoordCube) -> u8 {
        let slice2 = c.fr_to_br as usize;
        let parity = c.parity as usize;
        let corners = self
            .slice_urf_to_dlf_parity
            .get((N_SLICE2 * c.urf_to_dlf as usize + slice2) * 2 + parity);
        let edges = self
            .slice_ur_to_df_parity
            .get((N_SLICE2 * c.ur_to_df as usize + slice2) * 2 + parity);
        corners.max(edges)
    }
}

fn phase2_step(mt: &MoveTables, perm_move: &[u16], ix: usize, m: Move) -> usize {
    let parity = ix % 2;
    let slice2 = (ix / 2) % N_SLICE2;
    let perm = ix / 2 / N_SLICE2;
    let m = m as usize;
    let parity1 = mt.parity_move[N_MOVE * parity + m] as usize;
    let slice1 = mt.fr_to_br_move[N_MOVE * slice2 + m] as usize;
    let perm1 = perm_move[N_MOVE * perm + m] as usize;
    (N_SLICE2 * perm1 + slice1) * 2 + parity1
}
