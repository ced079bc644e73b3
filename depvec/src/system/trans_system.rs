use std::fmt::Debug;
use std::hash::Hash;

use guide::Guide;
use system::{DependencySet, ParserState};

pub trait TransitionSystem {
    type T: Transition;
    type O: Guide<T = Self::T>;

    fn is_terminal(state: &ParserState) -> bool;
    fn oracle(gold_dependencies: &DependencySet) -> Self::O;

    /// Number of distinct transitions, i.e. the classifier's output size.
    fn n_transitions(&self) -> usize;

    /// Get the number of a transition, `None` if its label is unknown.
    fn transition_number(&self, transition: &Self::T) -> Option<usize>;

    /// Get the transition corresponding to a number.
    fn transition_value(&self, number: usize) -> Option<Self::T>;
}

pub trait Transition: Clone + Debug + Eq + Hash {
    type S: TransitionSystem;

    fn is_possible(&self, state: &ParserState) -> bool;
    fn apply(&self, state: &mut ParserState);
}
