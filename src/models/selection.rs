//! Next-term selection policies.
//!
//! - `NoImmediateRepeat`: uniform pick among all terms except the one just shown.
//!   Cheap, but gives no long-run coverage guarantee.
//! - `ShuffleBag`: walk a shuffled permutation of every term, reshuffle when it runs out.
//!   Every term appears once per cycle; the term just shown is never first in a fresh bag.

use super::VocabularyStore;
use crate::error::StoreError;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    #[default]
    NoImmediateRepeat,
    ShuffleBag,
}

/// Selection state kept for one session. Only the shuffle bag needs any.
#[derive(Clone, Debug)]
pub enum Selector {
    NoImmediateRepeat,
    ShuffleBag { bag: Vec<usize> },
}

impl Selector {
    pub fn new(policy: SelectionPolicy) -> Self {
        match policy {
            SelectionPolicy::NoImmediateRepeat => Selector::NoImmediateRepeat,
            SelectionPolicy::ShuffleBag => Selector::ShuffleBag { bag: Vec::new() },
        }
    }

    pub fn policy(&self) -> SelectionPolicy {
        match self {
            Selector::NoImmediateRepeat => SelectionPolicy::NoImmediateRepeat,
            Selector::ShuffleBag { .. } => SelectionPolicy::ShuffleBag,
        }
    }

    /// Drops any pending bag so the next pick starts a fresh cycle.
    pub fn reset(&mut self) {
        if let Selector::ShuffleBag { bag } = self {
            bag.clear();
        }
    }

    /// Picks the index of the next entry. `exclude` is the term that must not
    /// come up again; it is ignored when the store has a single entry.
    pub fn pick<R: Rng>(
        &mut self,
        store: &VocabularyStore,
        exclude: Option<&str>,
        rng: &mut R,
    ) -> Result<usize, StoreError> {
        let entries = store.entries();
        if entries.is_empty() {
            return Err(StoreError::EmptyStore);
        }
        let exclude = exclude.filter(|_| entries.len() > 1);

        match self {
            Selector::NoImmediateRepeat => {
                let candidates: Vec<usize> = (0..entries.len())
                    .filter(|&i| Some(entries[i].term.as_str()) != exclude)
                    .collect();
                Ok(candidates[rng.random_range(0..candidates.len())])
            }
            Selector::ShuffleBag { bag } => {
                // A bag built for a different store size is stale.
                if bag.iter().any(|&i| i >= entries.len()) {
                    bag.clear();
                }
                if bag.is_empty() {
                    refill(bag, entries.len(), rng);
                    // The bag is popped from the back.
                    if let Some(last) = bag.last().copied() {
                        if Some(entries[last].term.as_str()) == exclude {
                            let other = rng.random_range(0..bag.len() - 1);
                            let end = bag.len() - 1;
                            bag.swap(other, end);
                        }
                    }
                }
                bag.pop().ok_or(StoreError::EmptyStore)
            }
        }
    }
}

fn refill<R: Rng>(bag: &mut Vec<usize>, len: usize, rng: &mut R) {
    bag.extend(0..len);
    bag.shuffle(rng);
}
