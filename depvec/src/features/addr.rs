use std::fmt;

use enum_map::Enum;
use itertools::Itertools;

use corpus::Token;
use system::ParserState;

/// Information layer of a token.
#[derive(Clone, Copy, Debug, Enum, Eq, Hash, PartialEq)]
pub enum Layer {
    Word,
    Tag,
    Label,
}

impl Layer {
    /// Get the value of this layer for a token.
    pub fn value<'a>(&self, token: &'a Token) -> &'a str {
        match *self {
            Layer::Word => token.word(),
            Layer::Tag => token.tag(),
            Layer::Label => token.label(),
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Layer::Word => "word",
            Layer::Tag => "tag",
            Layer::Label => "label",
        };

        f.write_str(name)
    }
}

/// A step in a token address.
///
/// An address starts at the stack or the buffer and can then move to
/// dependents of the token found so far. Dependents are counted in the
/// order in which they were attached.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Source {
    /// The n-th token of the buffer.
    Buffer(usize),

    /// The n-th token from the top of the stack.
    Stack(usize),

    /// The n-th dependent, counting from the first attached dependent.
    LDep(usize),

    /// The n-th dependent, counting from the last attached dependent.
    RDep(usize),
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Source::Buffer(n) => write!(f, "buffer {}", n),
            Source::Stack(n) => write!(f, "stack {}", n),
            Source::LDep(n) => write!(f, "ldep {}", n),
            Source::RDep(n) => write!(f, "rdep {}", n),
        }
    }
}

/// A layer value of the token found by following an address.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct AddressedValue {
    pub address: Vec<Source>,
    pub layer: Layer,
}

impl AddressedValue {
    pub fn new(address: Vec<Source>, layer: Layer) -> Self {
        AddressedValue { address, layer }
    }

    /// The feature template of Chen & Manning (2014).
    ///
    /// 18 word values, 18 tag values and 12 label values. Words and
    /// tags are extracted for the three topmost stack tokens, the first
    /// three buffer tokens and the dependents of the two topmost stack
    /// tokens. Labels are only extracted for the dependents, since
    /// tokens on the stack or buffer have not been attached yet.
    pub fn chen_manning() -> Vec<AddressedValue> {
        let neighbourhood = vec![
            vec![Source::Stack(0)],
            vec![Source::Stack(1)],
            vec![Source::Stack(2)],
            vec![Source::Buffer(0)],
            vec![Source::Buffer(1)],
            vec![Source::Buffer(2)],
        ];

        let mut dependents = Vec::new();
        for &stack in &[0, 1] {
            for &dep in &[
                Source::LDep(0),
                Source::LDep(1),
                Source::RDep(0),
                Source::RDep(1),
            ] {
                dependents.push(vec![Source::Stack(stack), dep]);
            }
        }
        for &stack in &[0, 1] {
            dependents.push(vec![Source::Stack(stack), Source::LDep(0), Source::LDep(0)]);
            dependents.push(vec![Source::Stack(stack), Source::RDep(0), Source::RDep(0)]);
        }

        let mut inputs = Vec::new();
        for &layer in &[Layer::Word, Layer::Tag] {
            inputs.extend(
                neighbourhood
                    .iter()
                    .chain(dependents.iter())
                    .map(|address| AddressedValue::new(address.clone(), layer)),
            );
        }
        inputs.extend(
            dependents
                .iter()
                .map(|address| AddressedValue::new(address.clone(), Layer::Label)),
        );

        inputs
    }

    /// Get the value, `None` if the address cannot be resolved.
    pub fn get<'a>(&self, state: &ParserState<'a>) -> Option<&'a str> {
        resolve(&self.address, state).map(|position| self.layer.value(state.token(position)))
    }
}

impl fmt::Display for AddressedValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}] {}", self.address.iter().join(", "), self.layer)
    }
}

fn resolve(address: &[Source], state: &ParserState) -> Option<usize> {
    let (first, rest) = address.split_first()?;

    let mut position = match *first {
        Source::Buffer(n) => state.buffer().get(n).cloned(),
        Source::Stack(n) => state.stack_top(n),
        Source::LDep(_) | Source::RDep(_) => None,
    }?;

    for source in rest {
        let dependents = state.dependents(position);
        position = match *source {
            Source::LDep(n) => dependents.get(n).cloned(),
            Source::RDep(n) => dependents
                .len()
                .checked_sub(n + 1)
                .map(|idx| dependents[idx]),
            Source::Buffer(_) | Source::Stack(_) => None,
        }?;
    }

    Some(position)
}

#[cfg(test)]
mod tests {
    use corpus::{Sentence, Token};
    use system::ParserState;

    use super::{AddressedValue, Layer, Source};

    lazy_static! {
        // She saw the man with the telescope
        static ref SENTENCE: Sentence = Sentence::new(vec![
            Token::new(1, "She", "PRP", "nsubj", 2),
            Token::new(2, "saw", "VBD", "root", 0),
            Token::new(3, "the", "DT", "det", 4),
            Token::new(4, "man", "NN", "obj", 2),
            Token::new(5, "with", "IN", "case", 7),
            Token::new(6, "the", "DT", "det", 7),
            Token::new(7, "telescope", "NN", "nmod", 4),
        ]);
    }

    /// State with stack [ROOT, saw, man] and buffer [with, the, telescope],
    /// `man` and `She` attached to `saw`, `the` attached to `man`.
    fn partial_state() -> ParserState<'static> {
        let mut state = ParserState::new(&SENTENCE);
        state.buffer_mut().drain(..3);
        state.stack_mut().clear();
        state.stack_mut().extend(&[0, 2, 4]);
        state.add_dependency(2, 1);
        state.add_dependency(4, 3);
        state
    }

    #[test]
    fn template_layout() {
        let template = AddressedValue::chen_manning();
        assert_eq!(template.len(), 48);
        assert_eq!(template.iter().filter(|v| v.layer == Layer::Word).count(), 18);
        assert_eq!(template.iter().filter(|v| v.layer == Layer::Tag).count(), 18);
        assert_eq!(template.iter().filter(|v| v.layer == Layer::Label).count(), 12);

        assert_eq!(template[0].to_string(), "[stack 0] word");
        assert_eq!(template[3].to_string(), "[buffer 0] word");
        assert_eq!(template[8].to_string(), "[stack 0, rdep 0] word");
        assert_eq!(template[17].to_string(), "[stack 1, rdep 0, rdep 0] word");
        assert_eq!(template[18].to_string(), "[stack 0] tag");
        assert_eq!(template[36].to_string(), "[stack 0, ldep 0] label");
        assert_eq!(template[47].to_string(), "[stack 1, rdep 0, rdep 0] label");
    }

    #[test]
    fn resolves_stack_and_buffer() {
        let state = partial_state();

        let value = |address, layer| AddressedValue::new(address, layer).get(&state);
        assert_eq!(value(vec![Source::Stack(0)], Layer::Word), Some("man"));
        assert_eq!(value(vec![Source::Stack(1)], Layer::Tag), Some("VBD"));
        assert_eq!(value(vec![Source::Stack(2)], Layer::Word), Some(""));
        assert_eq!(value(vec![Source::Stack(3)], Layer::Word), None);
        assert_eq!(value(vec![Source::Buffer(0)], Layer::Word), Some("with"));
        assert_eq!(value(vec![Source::Buffer(2)], Layer::Word), Some("telescope"));
        assert_eq!(value(vec![Source::Buffer(3)], Layer::Word), None);
    }

    #[test]
    fn resolves_dependents() {
        let mut state = partial_state();
        state.add_dependency(4, 7);

        let value = |address, layer| AddressedValue::new(address, layer).get(&state);
        assert_eq!(
            value(vec![Source::Stack(0), Source::LDep(0)], Layer::Label),
            Some("det")
        );
        assert_eq!(
            value(vec![Source::Stack(0), Source::RDep(0)], Layer::Label),
            Some("nmod")
        );
        assert_eq!(
            value(vec![Source::Stack(0), Source::RDep(1)], Layer::Word),
            Some("the")
        );
        assert_eq!(
            value(vec![Source::Stack(0), Source::LDep(2)], Layer::Word),
            None
        );
        assert_eq!(
            value(vec![Source::Stack(1), Source::LDep(1)], Layer::Word),
            None
        );
        assert_eq!(
            value(vec![Source::Stack(0), Source::RDep(0), Source::RDep(0)], Layer::Word),
            None
        );
        assert_eq!(value(vec![Source::LDep(0)], Layer::Word), None);
    }

    #[test]
    fn resolves_grandchildren() {
        let mut state = partial_state();
        state.add_dependency(7, 5);
        state.add_dependency(4, 7);

        let value = |address, layer| AddressedValue::new(address, layer).get(&state);
        assert_eq!(
            value(vec![Source::Stack(0), Source::RDep(0), Source::RDep(0)], Layer::Word),
            Some("with")
        );
        assert_eq!(
            value(vec![Source::Stack(0), Source::RDep(0), Source::RDep(0)], Layer::Label),
            Some("case")
        );
        assert_eq!(
            value(vec![Source::Stack(1), Source::LDep(0), Source::LDep(0)], Layer::Word),
            None
        );
        assert_eq!(
            value(vec![Source::Stack(0), Source::LDep(0), Source::LDep(0)], Layer::Tag),
            None
        );
    }
}
