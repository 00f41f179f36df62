//! Enumeration of the positions reachable from the empty board

use std::collections::{HashSet, VecDeque};

use super::board::Board;

/// Collect every board reachable from the empty board by legal play, in
/// breadth-first order. Terminal boards are included but not expanded.
///
/// The standard 3×3 game has 5,478 such positions. Larger boards grow far
/// too quickly for this to be practical.
pub fn reachable_states<const N: usize>() -> Vec<Board<N>> {
    let root = Board::<N>::new();
    let mut visited = HashSet::from([root]);
    let mut queue = VecDeque::from([root]);
    let mut states = Vec::new();

    while let Some(state) = queue.pop_front() {
        states.push(state);
        if state.is_terminal() {
            continue;
        }

        let mark = state.turn().mark();
        for mv in state.legal_moves() {
            let next = state.with_mark(mv, mark);
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    states
}
