//! Error types

use std::collections::TryReserveError;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::num::ParseIntError;

use thiserror::Error;

/// The inputs to an enumeration break its contract
#[derive(Debug, Error)]
#[cfg_attr(test, derive(PartialEq))]
pub struct InvalidArgument {
    error_type: InvalidArgumentType,
    value: i64,
    index: Option<usize>,
}

impl InvalidArgument {
    pub(crate) fn negative_target(value: i64) -> Self {
        Self {
            error_type: InvalidArgumentType::NegativeTarget,
            value,
            index: None,
        }
    }

    pub(crate) fn non_positive_denomination(value: i64, index: usize) -> Self {
        Self {
            error_type: InvalidArgumentType::NonPositiveDenomination,
            value,
            index: Some(index),
        }
    }

    /// What was wrong with the argument
    pub fn error_type(&self) -> InvalidArgumentType {
        self.error_type
    }

    /// The offending value
    pub fn value(&self) -> i64 {
        self.value
    }

    /// The position of the offending denomination, if a denomination was at fault
    pub fn index(&self) -> Option<usize> {
        self.index
    }
}

impl Display for InvalidArgument {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "invalid argument: {}: {}", self.error_type, self.value)?;
        if let Some(index) = self.index {
            write!(f, " at {}", index)?;
        }
        Ok(())
    }
}

#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidArgumentType {
    NegativeTarget,
    NonPositiveDenomination,
}

impl Display for InvalidArgumentType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            InvalidArgumentType::NegativeTarget => "target must not be negative",
            InvalidArgumentType::NonPositiveDenomination => "denomination must be positive",
        };
        write!(f, "{}", s)
    }
}

/// Error reading a palette from text
#[derive(Debug, Error)]
pub enum ParsePaletteError {
    #[allow(missing_docs)]
    #[error("invalid denomination \"{token}\" at {index}")]
    Token {
        token: String,
        index: usize,
        #[source]
        source: ParseIntError,
    },
    #[allow(missing_docs)]
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
}

/// Error counting combinations
#[derive(Debug, Error)]
pub enum CountError {
    #[allow(missing_docs)]
    #[error("target {target} is too large to count, the maximum is {max}")]
    TargetTooLarge { target: u64, max: u64 },
    #[allow(missing_docs)]
    #[error("could not allocate a table of {entries} entries")]
    Allocation {
        entries: usize,
        #[source]
        source: TryReserveError,
    },
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_negative_target() {
        let error = InvalidArgument::negative_target(-1);
        assert_eq!(
            "invalid argument: target must not be negative: -1",
            error.to_string()
        );
    }

    #[test]
    fn display_denomination() {
        let error = InvalidArgument::non_positive_denomination(0, 2);
        assert_eq!(
            "invalid argument: denomination must be positive: 0 at 2",
            error.to_string()
        );
        assert_eq!(Some(2), error.index());
    }
}
