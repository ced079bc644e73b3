//! Feature extraction.
//!
//! A parser state is converted into a vector by resolving a list of
//! addressed values (for example, the word of the leftmost dependent of
//! the stack top) and concatenating their embeddings.

mod addr;
pub use self::addr::{AddressedValue, Layer, Source};

mod embeddings;
pub use self::embeddings::{Embeddings, EmbeddingsError, LayerLookups};

mod vectorizer;
pub use self::vectorizer::InputVectorizer;
