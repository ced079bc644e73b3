//! Transition systems.

mod arc_standard;
pub use self::arc_standard::{ArcStandardOracle, ArcStandardSystem, ArcStandardTransition};
