use std::io::Cursor;

use corpus::{read_sentences, Sentence};

lazy_static! {
    /// Three projective sentences, followed by the empty sentence
    /// that the final blank line produces.
    pub static ref SENTENCES: Vec<Sentence> =
        read_sentences(Cursor::new(include_str!("../testdata/projective.conll")))
            .expect("Cannot read projective test data");

    /// A projective sentence, a non-projective sentence, and a
    /// projective sentence.
    pub static ref MIXED_SENTENCES: Vec<Sentence> =
        read_sentences(Cursor::new(include_str!("../testdata/nonprojective.conll")))
            .expect("Cannot read non-projective test data");
}
