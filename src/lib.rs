//! Enumerate the ways a set of denominations can add up to a target amount

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

#[macro_use]
extern crate log;

pub mod combination;
pub mod count;
pub mod enumerate;
pub mod error;
pub mod palette;
pub mod report;

pub use self::combination::Combination;
pub use self::count::count;
pub use self::enumerate::{enumerate, Combinations};
pub use self::error::{CountError, InvalidArgument, ParsePaletteError};
pub use self::palette::Palette;
