use system::ParserState;

/// Guides choose the next transition in a parser state.
pub trait Guide {
    type T;

    fn best_transition(&mut self, state: &ParserState) -> Self::T;
}
