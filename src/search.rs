use std::{collections::HashMap, fmt::Display};

use tracing::debug;

use crate::{Error, KeySet, Vault};

/// Landmark of each collector plus keys held, the collectors' order is fixed by entrances.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollectorState {
    positions: Vec<usize>,
    hold_keys: KeySet,
}

impl Display for CollectorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "collectors(at {:?}, have {})",
            self.positions, self.hold_keys
        )
    }
}

impl CollectorState {
    pub fn new(positions: Vec<usize>, hold_keys: KeySet) -> Self {
        Self {
            positions,
            hold_keys,
        }
    }

    /// Every collector at its entrance with no keys.
    pub fn initial(vault: &Vault) -> Self {
        Self::new(vault.entrances().to_vec(), KeySet::new())
    }

    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn hold_keys(&self) -> KeySet {
        self.hold_keys
    }

    /// States after one collector walks to a key it doesn't hold yet, along with the steps taken.
    pub fn moves<'a>(
        &'a self,
        vault: &'a Vault,
    ) -> impl Iterator<Item = (usize, CollectorState)> + 'a {
        self.positions
            .iter()
            .enumerate()
            .flat_map(move |(collector_ind, pos)| {
                vault
                    .paths_from(*pos)
                    .iter()
                    .map(move |path| (collector_ind, path))
            })
            .filter(move |(_, path)| {
                !self.hold_keys.contains(path.key())
                    && self.hold_keys.is_superset(&path.keys_needed())
            })
            .map(move |(collector_ind, path)| {
                let mut positions = self.positions.clone();
                positions[collector_ind] = path.dest();
                (
                    path.steps_n(),
                    CollectorState::new(positions, self.hold_keys.with(path.key())),
                )
            })
    }
}

/// Search for the fewest steps to collect all keys, remembering the result of each searched state.
#[derive(Debug)]
pub struct KeyCollector<'a> {
    vault: &'a Vault,
    min_steps_of_states: HashMap<CollectorState, Option<usize>>,
}

impl<'a> KeyCollector<'a> {
    pub fn new(vault: &'a Vault) -> Self {
        Self {
            vault,
            min_steps_of_states: HashMap::new(),
        }
    }

    /// Fewest steps to collect the remaining keys from given state, None if some keys can't be reached.
    pub fn min_steps_from(&mut self, state: &CollectorState) -> Option<usize> {
        if state.hold_keys == self.vault.all_keys() {
            return Some(0);
        }

        if let Some(min_steps_n) = self.min_steps_of_states.get(state) {
            return *min_steps_n;
        }

        let vault = self.vault;
        let mut min_steps_n = None;
        for (steps_n, next_state) in state.moves(vault) {
            if let Some(rest_steps_n) = self.min_steps_from(&next_state) {
                let total_steps_n = steps_n + rest_steps_n;
                if min_steps_n.map_or(true, |min_steps_n| total_steps_n < min_steps_n) {
                    min_steps_n = Some(total_steps_n);
                }
            }
        }

        self.min_steps_of_states.insert(state.clone(), min_steps_n);
        min_steps_n
    }

    pub fn searched_states_n(&self) -> usize {
        self.min_steps_of_states.len()
    }
}

/// Fewest steps for the collectors starting at entrances to collect every key in vault.
pub fn min_collect_steps_n(vault: &Vault) -> Result<usize, Error> {
    let mut collector = KeyCollector::new(vault);
    let min_steps_n = collector.min_steps_from(&CollectorState::initial(vault));
    debug!(
        "Searched {} state(s) of {} collector(s).",
        collector.searched_states_n(),
        vault.entrance_n()
    );

    min_steps_n.ok_or(Error::UnreachableKeys(vault.all_keys()))
}
