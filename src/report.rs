//! Text output for combinations

use std::fmt;
use std::fmt::{Display, Formatter};
use std::time::Duration;

use itertools::Itertools;

use crate::combination::Combination;
use crate::palette::Palette;

/// Displays a combination as `"<count> x <denomination>c"` for every denomination, separated by spaces
#[derive(Clone, Copy, Debug)]
pub struct CombinationDisplay<'a> {
    combination: &'a Combination,
    palette: &'a Palette,
}

impl<'a> CombinationDisplay<'a> {
    pub(crate) fn new(combination: &'a Combination, palette: &'a Palette) -> Self {
        debug_assert_eq!(palette.len(), combination.counts().len());
        Self {
            combination,
            palette,
        }
    }
}

impl Display for CombinationDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let pieces = self
            .palette
            .iter()
            .zip(self.combination.counts())
            .format_with(" ", |(denomination, count), f| {
                f(&format_args!("{} x {}c", count, denomination))
            });
        write!(f, "{}", pieces)
    }
}

/// Line for the n-th (1 based) combination of an enumeration
pub fn numbered_line(n: usize, combination: &Combination, palette: &Palette) -> String {
    format!("{}: {}", n, combination.display(palette))
}

/// The closing line of an enumeration
#[derive(Clone, Copy, Debug)]
pub struct Summary {
    /// how many combinations were found
    pub count: u128,
    /// set if the output stopped at the limit
    pub truncated: bool,
    #[allow(missing_docs)]
    pub elapsed: Duration,
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let noun = if self.count == 1 {
            "combination"
        } else {
            "combinations"
        };
        write!(f, "Found {} {}", self.count, noun)?;
        if self.truncated {
            write!(f, " (limit reached)")?;
        }
        write!(f, " in {:?}", self.elapsed)
    }
}
