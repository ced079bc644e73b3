//! Generation of training instances from gold-standard sentences.

use system::{ParserState, TransitionSystem};
use Result;

mod array;
pub use self::array::{ArrayCollector, Dataset};

mod builder;
pub use self::builder::{DatasetBuilder, DatasetStats, NonProjectivePolicy, StuckSentence};

mod trainer;
pub use self::trainer::{oracle_transitions, GreedyTrainer};

#[derive(Debug, Fail)]
pub enum TrainError {
    #[fail(
        display = "the oracle cannot derive sentence {} (projective: {})",
        sentence, projective
    )]
    OracleStuck { sentence: usize, projective: bool },

    #[fail(display = "transition with unknown label: {}", transition)]
    UnknownLabel { transition: String },
}

/// Collectors receive training instances.
///
/// Every instance is a parser state paired with the gold transition
/// in that state. The state is passed before the transition is applied.
pub trait InstanceCollector<T>
where
    T: TransitionSystem,
{
    fn collect(&mut self, t: &T::T, state: &ParserState) -> Result<()>;
}
