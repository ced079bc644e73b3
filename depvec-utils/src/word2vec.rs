//! Readers for embeddings in the word2vec formats.

use std::io::BufRead;

use depvec::features::Embeddings;
use finalfusion::compat::text::ReadTextDims;
use finalfusion::compat::word2vec::ReadWord2Vec;
use finalfusion::embeddings::Embeddings as FinalfusionEmbeddings;
use finalfusion::storage::NdArray;
use finalfusion::vocab::SimpleVocab;

use Result;

/// Read embeddings in the word2vec text format.
///
/// The file starts with a header line with the vocabulary size and the
/// dimensionality, followed by one line per word.
pub fn read_word2vec_text<R>(mut read: R) -> Result<Embeddings>
where
    R: BufRead,
{
    let embeddings: FinalfusionEmbeddings<SimpleVocab, NdArray> =
        FinalfusionEmbeddings::read_text_dims(&mut read)?;
    Ok(Embeddings::from(embeddings))
}

/// Read embeddings in the word2vec binary format.
pub fn read_word2vec_binary<R>(mut read: R) -> Result<Embeddings>
where
    R: BufRead,
{
    let embeddings: FinalfusionEmbeddings<SimpleVocab, NdArray> =
        FinalfusionEmbeddings::read_word2vec_binary(&mut read)?;
    Ok(Embeddings::from(embeddings))
}
