use guide::Guide;
use numberer::Numberer;
use system::{DependencySet, ParserState, Transition, TransitionSystem};

/// The arc-standard transition system (Nivre, 2004).
///
/// Transitions are numbered in three consecutive ranges: SHIFT is 0,
/// followed by one RIGHT-ARC per label and then one LEFT-ARC per label,
/// both in label order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ArcStandardSystem {
    labels: Numberer<String>,
}

impl ArcStandardSystem {
    pub fn new(labels: Numberer<String>) -> Self {
        ArcStandardSystem { labels }
    }

    fn label_id(&self, label: &str) -> Option<usize> {
        self.labels
            .number(&label.to_owned())
            .map(|number| number - self.labels.start_at())
    }

    fn label_value(&self, id: usize) -> Option<&String> {
        self.labels.value(id + self.labels.start_at())
    }
}

impl TransitionSystem for ArcStandardSystem {
    type T = ArcStandardTransition;
    type O = ArcStandardOracle;

    fn is_terminal(state: &ParserState) -> bool {
        state.buffer().is_empty() && state.stack().len() <= 1
    }

    fn oracle(gold_dependencies: &DependencySet) -> Self::O {
        ArcStandardOracle {
            gold_dependencies: gold_dependencies.clone(),
        }
    }

    fn n_transitions(&self) -> usize {
        2 * self.labels.len() + 1
    }

    fn transition_number(&self, transition: &Self::T) -> Option<usize> {
        match *transition {
            ArcStandardTransition::Shift => Some(0),
            ArcStandardTransition::RightArc(ref label) => self.label_id(label).map(|id| id + 1),
            ArcStandardTransition::LeftArc(ref label) => self
                .label_id(label)
                .map(|id| id + self.labels.len() + 1),
        }
    }

    fn transition_value(&self, number: usize) -> Option<Self::T> {
        let n_labels = self.labels.len();

        if number == 0 {
            Some(ArcStandardTransition::Shift)
        } else if number <= n_labels {
            self.label_value(number - 1)
                .cloned()
                .map(ArcStandardTransition::RightArc)
        } else {
            self.label_value(number - n_labels - 1)
                .cloned()
                .map(ArcStandardTransition::LeftArc)
        }
    }
}

#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum ArcStandardTransition {
    /// Attach the second token on the stack to the stack top.
    LeftArc(String),

    /// Attach the stack top to the second token on the stack.
    RightArc(String),

    /// Move the first token of the buffer to the stack.
    Shift,
}

impl Transition for ArcStandardTransition {
    type S = ArcStandardSystem;

    fn is_possible(&self, state: &ParserState) -> bool {
        match *self {
            ArcStandardTransition::LeftArc(_) => state
                .stack_top(1)
                .map(|s2| !state.token(s2).is_root())
                .unwrap_or(false),
            ArcStandardTransition::RightArc(_) => state.stack().len() >= 2,
            ArcStandardTransition::Shift => !state.buffer().is_empty(),
        }
    }

    fn apply(&self, state: &mut ParserState) {
        match *self {
            ArcStandardTransition::LeftArc(_) => {
                let stack_len = state.stack().len();
                let s1 = state.stack()[stack_len - 1];
                let s2 = state.stack_mut().remove(stack_len - 2);
                state.add_dependency(s1, s2);
            }
            ArcStandardTransition::RightArc(_) => {
                let s1 = state.stack_mut().pop().expect("Right arc on empty stack");
                let s2 = state.stack()[state.stack().len() - 1];
                state.add_dependency(s2, s1);
            }
            ArcStandardTransition::Shift => {
                let next = state
                    .buffer_mut()
                    .pop_front()
                    .expect("Shift with empty buffer");
                state.stack_mut().push(next);
            }
        }
    }
}

/// Static oracle for the arc-standard system.
///
/// RIGHT-ARC is preferred over LEFT-ARC, which is preferred over SHIFT.
/// The stack top is only attached to its head once it has collected
/// all of its own gold dependents. For non-projective trees the oracle
/// eventually proposes SHIFT on an empty buffer, which is not possible.
pub struct ArcStandardOracle {
    gold_dependencies: DependencySet,
}

impl Guide for ArcStandardOracle {
    type T = ArcStandardTransition;

    fn best_transition(&mut self, state: &ParserState) -> Self::T {
        if let (Some(s1), Some(s2)) = (state.stack_top(0), state.stack_top(1)) {
            if self.gold_dependencies.head(s1) == Some(s2)
                && state.dependents(s1).len() == self.gold_dependencies.n_dependents(s1)
            {
                return ArcStandardTransition::RightArc(state.token(s1).label().to_owned());
            }

            if self.gold_dependencies.head(s2) == Some(s1) {
                return ArcStandardTransition::LeftArc(state.token(s2).label().to_owned());
            }
        }

        ArcStandardTransition::Shift
    }
}
