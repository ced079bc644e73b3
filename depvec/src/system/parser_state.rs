use std::collections::VecDeque;

use corpus::{Sentence, Token};

/// Parser configuration.
///
/// The state refers to tokens by their position in the sentence. The
/// sentence itself is never modified; dependents that are attached
/// during parsing are recorded in the state, in order of attachment.
#[derive(Clone, Debug)]
pub struct ParserState<'a> {
    sentence: &'a Sentence,
    stack: Vec<usize>,
    buffer: VecDeque<usize>,
    dependents: Vec<Vec<usize>>,
    head: Vec<Option<usize>>,
}

impl<'a> ParserState<'a> {
    /// Construct the initial state for a sentence.
    ///
    /// The root and the first real token are placed on the stack, the
    /// remaining tokens form the buffer.
    pub fn new(sentence: &'a Sentence) -> Self {
        let mut buffer: VecDeque<_> = (0..sentence.len()).collect();
        let stack = buffer.drain(..sentence.len().min(2)).collect();

        ParserState {
            sentence,
            stack,
            buffer,
            dependents: vec![Vec::new(); sentence.len()],
            head: vec![None; sentence.len()],
        }
    }

    /// Attach `dependent` to `head`.
    ///
    /// This only records the dependency, removing the dependent from the
    /// stack is the responsibility of the transition.
    pub fn add_dependency(&mut self, head: usize, dependent: usize) {
        assert!(
            self.head[dependent].is_none(),
            "Token {} is already attached",
            dependent
        );

        self.head[dependent] = Some(head);
        self.dependents[head].push(dependent);
    }

    pub fn buffer(&self) -> &VecDeque<usize> {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut VecDeque<usize> {
        &mut self.buffer
    }

    /// Dependents of the token at `position`, in order of attachment.
    pub fn dependents(&self, position: usize) -> &[usize] {
        &self.dependents[position]
    }

    /// Head that was assigned to the token at `position`.
    pub fn head(&self, position: usize) -> Option<usize> {
        self.head[position]
    }

    /// The number of tokens that have been attached.
    pub fn n_attached(&self) -> usize {
        self.head.iter().filter(|head| head.is_some()).count()
    }

    pub fn stack(&self) -> &[usize] {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut Vec<usize> {
        &mut self.stack
    }

    /// Position of the `depth`-th token from the top of the stack.
    pub fn stack_top(&self, depth: usize) -> Option<usize> {
        self.stack
            .len()
            .checked_sub(depth + 1)
            .map(|idx| self.stack[idx])
    }

    pub fn token(&self, position: usize) -> &'a Token {
        &self.sentence[position]
    }
}
