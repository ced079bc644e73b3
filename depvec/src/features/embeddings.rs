use std::collections::HashMap;

use enum_map::EnumMap;
use finalfusion::embeddings::Embeddings as FinalfusionEmbeddings;
use finalfusion::storage::Storage;
use finalfusion::vocab::Vocab;

use features::Layer;
use Result;

#[derive(Debug, Fail)]
pub enum EmbeddingsError {
    #[fail(
        display = "embedding of '{}' has {} dimensions, expected {}",
        key, found, expected
    )]
    DimensionMismatch {
        key: String,
        expected: usize,
        found: usize,
    },
}

/// Embedding lookup table.
///
/// Maps keys to vectors of a fixed dimensionality. Keys are kept in
/// insertion order, so the order of an embedding file can be used as
/// a vocabulary.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Embeddings {
    dims: usize,
    indices: HashMap<String, usize>,
    words: Vec<String>,
    matrix: Vec<f32>,
}

impl Embeddings {
    /// Construct an empty table for vectors with `dims` components.
    pub fn new(dims: usize) -> Self {
        Embeddings {
            dims,
            ..Default::default()
        }
    }

    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Look up the embedding of a key.
    pub fn embedding(&self, key: &str) -> Option<&[f32]> {
        self.indices.get(key).map(|&idx| {
            let offset = idx * self.dims;
            &self.matrix[offset..offset + self.dims]
        })
    }

    /// Add an embedding.
    ///
    /// If the key is already present, its embedding is replaced.
    pub fn insert(&mut self, key: impl Into<String>, embedding: &[f32]) -> Result<()> {
        let key = key.into();

        if embedding.len() != self.dims {
            return Err(EmbeddingsError::DimensionMismatch {
                key,
                expected: self.dims,
                found: embedding.len(),
            }
            .into());
        }

        self.set(key, embedding);

        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Keys in insertion order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    fn set(&mut self, key: String, embedding: &[f32]) {
        match self.indices.get(&key).cloned() {
            Some(idx) => {
                let offset = idx * self.dims;
                self.matrix[offset..offset + self.dims].copy_from_slice(embedding);
            }
            None => {
                self.indices.insert(key.clone(), self.words.len());
                self.words.push(key);
                self.matrix.extend_from_slice(embedding);
            }
        }
    }
}

impl<V, S> From<FinalfusionEmbeddings<V, S>> for Embeddings
where
    V: Vocab,
    S: Storage,
{
    /// Convert finalfusion embeddings, keeping the vocabulary order.
    ///
    /// finalfusion stores l2-normalized vectors, the original vectors
    /// are restored using the stored norms.
    fn from(embeddings: FinalfusionEmbeddings<V, S>) -> Self {
        let mut converted = Embeddings::new(embeddings.dims());

        for (word, embedding) in embeddings.iter_with_norms() {
            let embedding = embedding.into_unnormalized().into_raw_vec();
            converted.set(word.to_owned(), &embedding);
        }

        converted
    }
}

/// Embedding tables for the word, tag, and label layers.
#[derive(Clone, Debug)]
pub struct LayerLookups(EnumMap<Layer, Embeddings>);

impl LayerLookups {
    pub fn new(word: Embeddings, tag: Embeddings, label: Embeddings) -> Self {
        let mut lookups: EnumMap<Layer, Embeddings> = EnumMap::default();
        lookups[Layer::Word] = word;
        lookups[Layer::Tag] = tag;
        lookups[Layer::Label] = label;
        LayerLookups(lookups)
    }

    /// Get the table for a layer.
    pub fn layer_lookup(&self, layer: Layer) -> &Embeddings {
        &self.0[layer]
    }
}

#[cfg(test)]
mod tests {
    use super::{Embeddings, EmbeddingsError, LayerLookups};
    use features::Layer;

    #[test]
    fn lookup() {
        let mut embeds = Embeddings::new(2);
        embeds.insert("dog", &[0.5, -1.0]).unwrap();
        embeds.insert("cat", &[1.5, 2.0]).unwrap();

        assert_eq!(embeds.len(), 2);
        assert_eq!(embeds.embedding("cat"), Some(&[1.5, 2.0][..]));
        assert_eq!(embeds.embedding("dog"), Some(&[0.5, -1.0][..]));
        assert_eq!(embeds.embedding("bird"), None);
        assert_eq!(embeds.words(), &["dog".to_owned(), "cat".to_owned()]);
    }

    #[test]
    fn insert_replaces() {
        let mut embeds = Embeddings::new(1);
        embeds.insert("a", &[1.0]).unwrap();
        embeds.insert("b", &[2.0]).unwrap();
        embeds.insert("a", &[3.0]).unwrap();

        assert_eq!(embeds.len(), 2);
        assert_relative_eq!(embeds.embedding("a").unwrap()[0], 3.0);
        assert_relative_eq!(embeds.embedding("b").unwrap()[0], 2.0);
    }

    #[test]
    fn insert_checks_dims() {
        let mut embeds = Embeddings::new(3);
        let err = embeds.insert("a", &[1.0, 2.0]).unwrap_err();
        match err.downcast::<EmbeddingsError>().unwrap() {
            EmbeddingsError::DimensionMismatch {
                key,
                expected,
                found,
            } => {
                assert_eq!(key, "a");
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
        }
        assert!(embeds.is_empty());
    }

    #[test]
    fn layer_tables() {
        let lookups = LayerLookups::new(Embeddings::new(300), Embeddings::new(100), Embeddings::new(50));
        assert_eq!(lookups.layer_lookup(Layer::Word).dims(), 300);
        assert_eq!(lookups.layer_lookup(Layer::Tag).dims(), 100);
        assert_eq!(lookups.layer_lookup(Layer::Label).dims(), 50);
    }
}
