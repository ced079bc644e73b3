use std::marker::PhantomData;

use guide::Guide;
use system::{DependencySet, ParserState, Transition, TransitionSystem};
use train::InstanceCollector;
use Result;

/// Get the oracle's transition sequence for a sentence.
///
/// The oracle is followed from `state` until a terminal state is
/// reached. Returns `None` when the oracle proposes a transition that
/// is not possible, which happens for gold trees that the transition
/// system cannot derive.
pub fn oracle_transitions<T>(
    gold_dependencies: &DependencySet,
    mut state: ParserState,
) -> Option<Vec<T::T>>
where
    T: TransitionSystem,
{
    let mut oracle = T::oracle(gold_dependencies);
    let mut transitions = Vec::new();

    while !T::is_terminal(&state) {
        let transition = oracle.best_transition(&state);
        if !transition.is_possible(&state) {
            return None;
        }

        transition.apply(&mut state);
        transitions.push(transition);
    }

    Some(transitions)
}

/// Trainer for greedy parsers.
///
/// The trainer follows the oracle and passes every state and the gold
/// transition in that state to a collector.
pub struct GreedyTrainer<T, C>
where
    T: TransitionSystem,
    C: InstanceCollector<T>,
{
    collector: C,
    phantom: PhantomData<T>,
}

impl<T, C> GreedyTrainer<T, C>
where
    T: TransitionSystem,
    C: InstanceCollector<T>,
{
    pub fn new(collector: C) -> Self {
        GreedyTrainer {
            collector,
            phantom: PhantomData,
        }
    }

    pub fn collector(&self) -> &C {
        &self.collector
    }

    pub fn into_collector(self) -> C {
        self.collector
    }

    /// Parse a sentence with the oracle, collecting training instances.
    ///
    /// Returns `false` if the oracle cannot derive the gold tree. Nothing
    /// is collected and `state` is left untouched in that case.
    pub fn parse_state(
        &mut self,
        gold_dependencies: &DependencySet,
        state: &mut ParserState,
    ) -> Result<bool> {
        let transitions = match oracle_transitions::<T>(gold_dependencies, state.clone()) {
            Some(transitions) => transitions,
            None => return Ok(false),
        };

        for transition in transitions {
            self.collector.collect(&transition, state)?;
            transition.apply(state);
        }

        Ok(true)
    }
}
