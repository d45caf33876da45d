//! The denominations available to build a combination from

use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::Index;
use std::str::FromStr;

use itertools::Itertools;

use crate::error::{InvalidArgument, ParsePaletteError};

/// An ordered list of positive denominations.
/// The order is the order in which the enumeration decides on each denomination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    denominations: Vec<u64>,
}

impl Palette {
    /// Returns Err if any denomination is zero or negative
    pub fn new(denominations: &[i64]) -> Result<Self, InvalidArgument> {
        let denominations = denominations
            .iter()
            .enumerate()
            .map(|(i, &d)| {
                if d <= 0 {
                    Err(InvalidArgument::non_positive_denomination(d, i))
                } else {
                    Ok(d as u64)
                }
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { denominations })
    }

    /// The denominations in enumeration order
    pub fn denominations(&self) -> &[u64] {
        &self.denominations
    }

    /// The number of denominations
    pub fn len(&self) -> usize {
        self.denominations.len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.denominations.is_empty()
    }

    #[allow(missing_docs)]
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.denominations.iter().copied()
    }
}

impl Index<usize> for Palette {
    type Output = u64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.denominations[index]
    }
}

/// Comma separated integers, e.g. "1,2,5,10"
impl FromStr for Palette {
    type Err = ParsePaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = parse_denominations(s)?;
        Ok(Self::new(&values)?)
    }
}

/// Parse comma separated integers without checking that they are valid denominations.
/// Blank input is an empty list.
pub fn parse_denominations(s: &str) -> Result<Vec<i64>, ParsePaletteError> {
    if s.trim().is_empty() {
        return Ok(Vec::new());
    }
    s.split(',')
        .map(str::trim)
        .enumerate()
        .map(|(index, token)| {
            token
                .parse::<i64>()
                .map_err(|source| ParsePaletteError::Token {
                    token: token.to_string(),
                    index,
                    source,
                })
        })
        .collect()
}

impl Display for Palette {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.denominations.iter().join(","))
    }
}
