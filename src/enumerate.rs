//! Backtracking enumeration of combinations.
//!
//! The search walks a binary tree of states `(index, remaining)` starting at `(0, target)`.
//! At each state the denomination at `index` is first taken again (if it fits) and then skipped
//! for good. A state with nothing remaining is a combination. A state past the last
//! denomination with something remaining is a dead end.
//!
//! Because a denomination is never revisited after it is skipped, every combination is found
//! exactly once. The walk uses an explicit stack so that large targets do not exhaust the call
//! stack, and it is driven lazily by [`Iterator::next`].

use std::iter::FusedIterator;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::combination::Combination;
use crate::error::InvalidArgument;
use crate::palette::Palette;

/// Enumerate every combination of `denominations` that adds up to `target`.
///
/// Returns Err if `target` is negative or any denomination is not positive.
/// Nothing is enumerated until the returned iterator is advanced.
pub fn enumerate(denominations: &[i64], target: i64) -> Result<Combinations, InvalidArgument> {
    if target < 0 {
        return Err(InvalidArgument::negative_target(target));
    }
    let palette = Palette::new(denominations)?;
    Ok(Combinations::new(palette, target as u64))
}

/// Lazy sequence of the combinations of a palette that add up to a target
#[derive(Debug)]
pub struct Combinations {
    palette: Palette,
    target: u64,
    /// counts of the combination being built
    counts: Vec<u64>,
    stack: Vec<Frame>,
    cancel: Option<Arc<AtomicBool>>,
    found: u64,
    finished: bool,
}

#[derive(Clone, Copy, Debug)]
enum Frame {
    Visit { index: usize, remaining: u64 },
    /// restore the count after a take has been fully explored
    Undo { index: usize },
}

impl Combinations {
    /// Start an enumeration over an already validated palette
    pub fn new(palette: Palette, target: u64) -> Self {
        debug!(
            "Enumerating combinations of [{}] adding up to {}",
            palette, target
        );
        let counts = vec![0; palette.len()];
        Self {
            palette,
            target,
            counts,
            stack: vec![Frame::Visit {
                index: 0,
                remaining: target,
            }],
            cancel: None,
            found: 0,
            finished: false,
        }
    }

    /// Stop the enumeration once `flag` is set.
    /// The flag is checked before each step of the search.
    pub fn cancel_on(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    #[allow(missing_docs)]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[allow(missing_docs)]
    pub fn target(&self) -> u64 {
        self.target
    }

    /// The number of combinations returned so far
    pub fn found(&self) -> u64 {
        self.found
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .map_or(false, |flag| flag.load(Ordering::Relaxed))
    }

    fn finish(&mut self) {
        if !self.finished {
            debug!("Enumeration finished, {} combinations", self.found);
            self.finished = true;
        }
    }

    fn partial_total(&self) -> u64 {
        self.palette
            .iter()
            .zip(&self.counts)
            .map(|(denomination, &count)| denomination * count)
            .sum()
    }
}

impl Iterator for Combinations {
    type Item = Combination;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.is_cancelled() {
                if !self.stack.is_empty() {
                    debug!("Enumeration cancelled after {} combinations", self.found);
                    self.stack.clear();
                }
                self.finished = true;
                return None;
            }
            let frame = match self.stack.pop() {
                Some(frame) => frame,
                None => {
                    self.finish();
                    return None;
                }
            };
            match frame {
                Frame::Undo { index } => self.counts[index] -= 1,
                Frame::Visit { index, remaining } => {
                    debug_assert_eq!(self.target, self.partial_total() + remaining);
                    if remaining == 0 {
                        self.found += 1;
                        let combination = Combination::new(self.counts.clone());
                        trace!("Combination #{}: {:?}", self.found, combination.counts());
                        return Some(combination);
                    }
                    if index == self.palette.len() {
                        continue;
                    }
                    let denomination = self.palette[index];
                    // pushed in reverse: take, undo the take, then skip
                    self.stack.push(Frame::Visit {
                        index: index + 1,
                        remaining,
                    });
                    if remaining >= denomination {
                        self.counts[index] += 1;
                        self.stack.push(Frame::Undo { index });
                        self.stack.push(Frame::Visit {
                            index,
                            remaining: remaining - denomination,
                        });
                    }
                }
            }
        }
    }
}

impl FusedIterator for Combinations {}
