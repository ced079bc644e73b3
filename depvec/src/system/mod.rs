//! Parser states and transition system traits.

mod dependencies;
pub use self::dependencies::{sentence_to_dependencies, DependencySet};

mod parser_state;
pub use self::parser_state::ParserState;

mod trans_system;
pub use self::trans_system::{Transition, TransitionSystem};
