//! Reader for dependency-annotated corpora.
//!
//! The corpus has one token per line with ten whitespace-separated
//! columns, of which the index, form, part-of-speech tag, head and
//! dependency relation columns are used. Sentences are separated by
//! blank lines.

use std::io::BufRead;
use std::ops::Deref;

use Result;

const N_COLUMNS: usize = 10;

const INDEX_COLUMN: usize = 0;
const WORD_COLUMN: usize = 1;
const TAG_COLUMN: usize = 3;
const PARENT_COLUMN: usize = 6;
const LABEL_COLUMN: usize = 7;

#[derive(Debug, Fail)]
pub enum CorpusError {
    #[fail(
        display = "line {}: expected {} columns, found {}",
        line, expected, found
    )]
    Format {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[fail(display = "line {}: {} column is not a number: {}", line, column, value)]
    Number {
        line: usize,
        column: &'static str,
        value: String,
    },
}

/// A token with its gold-standard annotation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    index: usize,
    word: String,
    tag: String,
    label: String,
    parent: Option<usize>,
}

impl Token {
    pub fn new(
        index: usize,
        word: impl Into<String>,
        tag: impl Into<String>,
        label: impl Into<String>,
        parent: usize,
    ) -> Self {
        Token {
            index,
            word: word.into(),
            tag: tag.into(),
            label: label.into(),
            parent: Some(parent),
        }
    }

    /// The artificial root token that heads every sentence.
    pub fn root() -> Self {
        Token {
            index: 0,
            word: String::new(),
            tag: String::new(),
            label: String::new(),
            parent: None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Dependency relation to the gold head.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Index of the gold head, `None` for the root token.
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn word(&self) -> &str {
        &self.word
    }
}

/// A sentence, always starting with the root token.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Sentence {
    tokens: Vec<Token>,
}

impl Sentence {
    /// Construct a sentence from its real tokens, prepending the root.
    pub fn new(tokens: impl IntoIterator<Item = Token>) -> Self {
        let mut sentence = Sentence::default();
        sentence.tokens.extend(tokens);
        sentence
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The number of tokens, excluding the root.
    pub fn n_real_tokens(&self) -> usize {
        self.tokens.len() - 1
    }

    fn push(&mut self, token: Token) {
        self.tokens.push(token)
    }
}

impl Default for Sentence {
    fn default() -> Self {
        Sentence {
            tokens: vec![Token::root()],
        }
    }
}

impl Deref for Sentence {
    type Target = [Token];

    fn deref(&self) -> &Self::Target {
        &self.tokens
    }
}

/// Corpus reader.
pub struct Reader<R> {
    read: R,
    line_no: usize,
    eof: bool,
}

impl<R> Reader<R>
where
    R: BufRead,
{
    pub fn new(read: R) -> Self {
        Reader {
            read,
            line_no: 0,
            eof: false,
        }
    }

    /// Read the next sentence.
    ///
    /// Returns `None` after the final sentence. Every blank line
    /// terminates a sentence, so consecutive blank lines result in
    /// sentences that only contain the root token.
    pub fn read_sentence(&mut self) -> Result<Option<Sentence>> {
        if self.eof {
            return Ok(None);
        }

        let mut sentence = Sentence::default();
        let mut line = String::new();

        loop {
            line.clear();
            if self.read.read_line(&mut line)? == 0 {
                self.eof = true;
                return Ok(Some(sentence));
            }

            self.line_no += 1;

            let columns: Vec<_> = line.split_whitespace().collect();
            if columns.is_empty() {
                return Ok(Some(sentence));
            }

            sentence.push(parse_token(self.line_no, &columns)?);
        }
    }

    pub fn sentences(self) -> Sentences<R> {
        Sentences { reader: self }
    }
}

/// Iterator over the sentences of a corpus.
pub struct Sentences<R> {
    reader: Reader<R>,
}

impl<R> Iterator for Sentences<R>
where
    R: BufRead,
{
    type Item = Result<Sentence>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_sentence() {
            Ok(Some(sentence)) => Some(Ok(sentence)),
            Ok(None) => None,
            Err(err) => {
                // Do not continue reading after an error.
                self.reader.eof = true;
                Some(Err(err))
            }
        }
    }
}

/// Read a complete corpus.
///
/// Fails on the first malformed line; no sentences are returned in
/// that case.
pub fn read_sentences<R>(read: R) -> Result<Vec<Sentence>>
where
    R: BufRead,
{
    Reader::new(read).sentences().collect()
}

fn parse_token(line: usize, columns: &[&str]) -> Result<Token> {
    if columns.len() != N_COLUMNS {
        return Err(CorpusError::Format {
            line,
            expected: N_COLUMNS,
            found: columns.len(),
        }
        .into());
    }

    Ok(Token::new(
        parse_number(line, "index", columns[INDEX_COLUMN])?,
        columns[WORD_COLUMN],
        columns[TAG_COLUMN],
        columns[LABEL_COLUMN],
        parse_number(line, "head", columns[PARENT_COLUMN])?,
    ))
}

fn parse_number(line: usize, column: &'static str, value: &str) -> Result<usize> {
    value.parse().map_err(|_| {
        CorpusError::Number {
            line,
            column,
            value: value.to_owned(),
        }
        .into()
    })
}
