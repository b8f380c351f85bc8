use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

#[derive(Debug)]
pub struct EmptyOption;

impl Display for EmptyOption {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unwrap called on an empty Option!")
    }
}

impl Error for EmptyOption {}

#[derive(Debug)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

#[derive(Debug)]
pub struct StartAfterEnd {
    pub start: usize,
    pub end: usize,
}

impl Display for StartAfterEnd {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Slice start {} is greater than slice end {}!", self.start, self.end)
    }
}

impl Error for StartAfterEnd {}

#[derive(Debug)]
pub struct EndOutOfBounds {
    pub end: usize,
    pub len: usize,
}

impl Display for EndOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Slice end {} out of bounds for collection with {} elements!", self.end, self.len)
    }
}

impl Error for EndOutOfBounds {}

/// The single failure kind of this crate: a violated caller contract, raised as a panic at the
/// point of violation.
#[derive(Debug, Display, Error, From, TryInto, IsVariant)]
pub enum ContractViolation {
    EmptyOption(EmptyOption),
    IndexOutOfBounds(IndexOutOfBounds),
    StartAfterEnd(StartAfterEnd),
    EndOutOfBounds(EndOutOfBounds),
}
