use std::collections::{HashSet, LinkedList};

use crate::KeySet;

use super::Cell;

/// Shortest path found from a landmark to a key, with keys of doors on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath {
    steps_n: usize,
    dest: usize,
    key: char,
    keys_needed: KeySet,
}

impl KeyPath {
    pub fn steps_n(&self) -> usize {
        self.steps_n
    }

    /// Index of the cell holding the key.
    pub fn dest(&self) -> usize {
        self.dest
    }

    pub fn key(&self) -> char {
        self.key
    }

    pub fn keys_needed(&self) -> KeySet {
        self.keys_needed
    }
}

// Doors don't stop the search here, their keys are only recorded as the requirement of path.
pub(super) fn bfs_for_keys(cells: &[Option<Cell>], from: usize) -> Vec<KeyPath> {
    let mut paths = Vec::new();
    let mut search_cells = LinkedList::from([(from, 0, KeySet::new())]);
    let mut searched_cells = HashSet::from([from]);
    while let Some((cur_ind, cur_steps_n, cur_keys_needed)) = search_cells.pop_front() {
        let Some(cur_cell) = cells.get(cur_ind).and_then(Option::as_ref) else {
            continue;
        };

        if cur_ind != from {
            if let Some(key) = cur_cell.tile.key() {
                paths.push(KeyPath {
                    steps_n: cur_steps_n,
                    dest: cur_ind,
                    key,
                    keys_needed: cur_keys_needed,
                });
            }
        }

        for &next_ind in &cur_cell.neighbors {
            if !searched_cells.insert(next_ind) {
                continue;
            }

            let keys_needed = match cells[next_ind].as_ref().and_then(|c| c.tile.key_of_door()) {
                Some(key) => cur_keys_needed.with(key),
                None => cur_keys_needed,
            };
            search_cells.push_back((next_ind, cur_steps_n + 1, keys_needed));
        }
    }

    paths
}
