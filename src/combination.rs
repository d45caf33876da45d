//! One way of reaching the target

use std::ops::Index;

use crate::palette::Palette;
use crate::report::CombinationDisplay;

/// How many of each denomination a combination uses.
/// `counts()[i]` corresponds to the i-th denomination of the palette it was enumerated from.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Combination {
    counts: Vec<u64>,
}

impl Combination {
    pub(crate) fn new(counts: Vec<u64>) -> Self {
        Self { counts }
    }

    /// Count per denomination index
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// The count of the denomination at `index`
    pub fn count(&self, index: usize) -> u64 {
        self.counts[index]
    }

    /// The total number of items picked
    pub fn pieces(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// The weighted sum of the combination
    pub fn total(&self, palette: &Palette) -> u64 {
        debug_assert_eq!(palette.len(), self.counts.len());
        palette
            .iter()
            .zip(&self.counts)
            .map(|(denomination, &count)| denomination * count)
            .sum()
    }

    /// Display the combination as "<count> x <denomination>c" for each denomination
    pub fn display<'a>(&'a self, palette: &'a Palette) -> CombinationDisplay<'a> {
        CombinationDisplay::new(self, palette)
    }

    #[allow(missing_docs)]
    pub fn into_counts(self) -> Vec<u64> {
        self.counts
    }
}

impl Index<usize> for Combination {
    type Output = u64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.counts[index]
    }
}
