//! Training data generation for neural transition-based dependency
//! parsers.
//!
//! This crate simulates the arc-standard transition system over
//! gold-annotated sentences and converts every parser state that the
//! oracle visits into a fixed-size embedding vector, paired with the
//! number of the gold transition.

extern crate enum_map;
#[macro_use]
extern crate failure;
extern crate finalfusion;
extern crate itertools;
extern crate ndarray;
extern crate serde;
#[macro_use]
extern crate serde_derive;

#[cfg(test)]
#[macro_use]
extern crate approx;

#[cfg(test)]
#[macro_use]
extern crate lazy_static;

macro_rules! ok_or_continue {
    ($expr:expr) => {
        match $expr {
            Some(val) => val,
            None => continue,
        }
    };
}

pub mod corpus;

pub mod features;

pub mod guide;

pub mod numberer;

pub mod system;

pub mod systems;

pub mod train;

pub type Result<T> = ::std::result::Result<T, failure::Error>;

#[cfg(test)]
pub(crate) mod test_util;
