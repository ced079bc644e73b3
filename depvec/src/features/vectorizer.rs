use enum_map::EnumMap;

use features::{AddressedValue, Layer, LayerLookups};
use system::ParserState;

/// Vectorizer for parser states.
///
/// An `InputVectorizer` converts a parser state into a vector of
/// embeddings. The vector is the concatenation of the embeddings of the
/// addressed values, in template order. Values that cannot be resolved
/// in a state, or that do not have an embedding, are represented by a
/// zero vector, so every state is vectorized to the same length.
pub struct InputVectorizer {
    layer_lookups: LayerLookups,
    inputs: Vec<AddressedValue>,
}

impl InputVectorizer {
    /// Construct an input vectorizer.
    ///
    /// The vectorizer is constructed from the embedding tables and the
    /// addressed values that should be vectorized.
    pub fn new(layer_lookups: LayerLookups, inputs: Vec<AddressedValue>) -> Self {
        InputVectorizer {
            layer_lookups,
            inputs,
        }
    }

    /// Length of a vectorized state.
    pub fn input_size(&self) -> usize {
        self.layer_sizes().values().sum()
    }

    /// Get the number of vector components that each layer contributes.
    pub fn layer_sizes(&self) -> EnumMap<Layer, usize> {
        let mut sizes = EnumMap::default();

        for input in &self.inputs {
            sizes[input.layer] += self.layer_lookups.layer_lookup(input.layer).dims();
        }

        sizes
    }

    /// Vectorize a parser state.
    pub fn realize(&self, state: &ParserState) -> Vec<f32> {
        let mut input = vec![0f32; self.input_size()];
        self.realize_into(state, &mut input);
        input
    }

    /// Vectorize a parser state into the given slice.
    ///
    /// The slice must have length `input_size()`.
    pub fn realize_into(&self, state: &ParserState, input: &mut [f32]) {
        assert_eq!(
            input.len(),
            self.input_size(),
            "Input slice has length {}, vectorized state has length {}",
            input.len(),
            self.input_size()
        );

        let mut offset = 0;
        for addressed_value in &self.inputs {
            let lookup = self.layer_lookups.layer_lookup(addressed_value.layer);
            let slot = &mut input[offset..offset + lookup.dims()];
            offset += lookup.dims();

            for v in slot.iter_mut() {
                *v = 0.;
            }

            let value = ok_or_continue!(addressed_value.get(state));
            let embedding = ok_or_continue!(lookup.embedding(value));
            slot.copy_from_slice(embedding);
        }
    }
}
