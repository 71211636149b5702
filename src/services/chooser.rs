//! Pluggable source of random picks.
//!
//! The pipeline picks uniformly three times: a search result, a root entry
//! of that repository, and one of the user's own repositories.

use rand::Rng;
use std::collections::VecDeque;

/// Picks an index in `0..len`. Callers never pass `len == 0`.
pub trait Chooser {
    fn pick(&mut self, len: usize) -> usize;
}

/// Pick one element of `items`, or `None` if it is empty.
pub fn choose<'a, T>(chooser: &mut dyn Chooser, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let index = chooser.pick(items.len()).min(items.len() - 1);
    items.get(index)
}

/// Uniform picks from the thread-local generator.
#[derive(Debug, Default)]
pub struct ThreadRngChooser;

impl Chooser for ThreadRngChooser {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Replays a fixed sequence of indices, then keeps returning 0.
///
/// Indices past the end of a slice are clamped to its last element.
#[derive(Debug, Default, Clone)]
pub struct ScriptedChooser {
    picks: VecDeque<usize>,
}

impl ScriptedChooser {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }

    /// Always pick the first element.
    pub fn first() -> Self {
        Self::default()
    }
}

impl Chooser for ScriptedChooser {
    fn pick(&mut self, len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0).min(len.saturating_sub(1))
    }
}
