use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use depvec::features::{self, LayerLookups};
use depvec::numberer::Numberer;
use depvec::train::NonProjectivePolicy;

use word2vec::{read_word2vec_binary, read_word2vec_text};
use Result;

/// Vectorizer configuration.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub embeddings: Lookups,

    #[serde(default)]
    pub dataset: Dataset,
}

impl Config {
    /// Make configuration paths relative to the configuration file.
    pub fn relativize_paths<P>(&mut self, config_path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let config_path = config_path.as_ref();

        self.embeddings.word.filename = relativize_path(config_path, &self.embeddings.word.filename)?;
        self.embeddings.tag.filename = relativize_path(config_path, &self.embeddings.tag.filename)?;
        self.embeddings.label.filename =
            relativize_path(config_path, &self.embeddings.label.filename)?;

        if let Some(ref mut labels) = self.dataset.labels {
            *labels = relativize_path(config_path, labels)?;
        }

        Ok(())
    }
}

/// Embedding files of the three layers.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Lookups {
    pub word: Lookup,
    pub tag: Lookup,
    pub label: Lookup,
}

impl Lookups {
    pub fn load_lookups(&self) -> Result<LayerLookups> {
        Ok(LayerLookups::new(
            self.word.load_embeddings()?,
            self.tag.load_embeddings()?,
            self.label.load_embeddings()?,
        ))
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
pub enum EmbeddingFormat {
    #[serde(rename = "word2vec_binary")]
    Word2VecBinary,

    #[serde(rename = "word2vec_text")]
    Word2VecText,
}

impl Default for EmbeddingFormat {
    fn default() -> Self {
        EmbeddingFormat::Word2VecText
    }
}

/// An embedding file.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Lookup {
    pub filename: String,

    #[serde(default)]
    pub format: EmbeddingFormat,

    /// Expected dimensionality, checked against the file when present.
    pub dims: Option<usize>,
}

impl Lookup {
    pub fn load_embeddings(&self) -> Result<features::Embeddings> {
        let f = File::open(&self.filename)
            .map_err(|err| format_err!("cannot open {}: {}", self.filename, err))?;
        let reader = BufReader::new(f);

        let embeddings = match self.format {
            EmbeddingFormat::Word2VecBinary => read_word2vec_binary(reader)?,
            EmbeddingFormat::Word2VecText => read_word2vec_text(reader)?,
        };

        if let Some(dims) = self.dims {
            ensure!(
                embeddings.dims() == dims,
                "{} has {} dimensions, expected {}",
                self.filename,
                embeddings.dims(),
                dims
            );
        }

        Ok(embeddings)
    }
}

/// Dataset construction options.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Dataset {
    /// File with one dependency label per line. When absent, the
    /// order of the label embeddings is used.
    pub labels: Option<String>,

    #[serde(default)]
    pub non_projective: NonProjectivePolicy,
}

impl Dataset {
    /// Get the label set that numbers the arc transitions.
    pub fn load_labels(&self, label_embeddings: &features::Embeddings) -> Result<Numberer<String>> {
        let labels: Numberer<String> = match self.labels {
            Some(ref filename) => {
                let f = File::open(filename)
                    .map_err(|err| format_err!("cannot open {}: {}", filename, err))?;
                read_labels(BufReader::new(f))?
            }
            None => label_embeddings.words().iter().cloned().collect(),
        };

        ensure!(!labels.is_empty(), "the label set is empty");

        Ok(labels)
    }
}

fn read_labels<R>(read: R) -> Result<Numberer<String>>
where
    R: BufRead,
{
    let mut labels = Numberer::new(0);
    for line in read.lines() {
        let line = line?;
        let label = line.trim();
        if !label.is_empty() {
            labels.add(label.to_owned());
        }
    }

    Ok(labels)
}

fn relativize_path(config_path: &Path, filename: &str) -> Result<String> {
    if filename.is_empty() {
        return Ok(filename.to_owned());
    }

    let path = Path::new(&filename);

    // Don't touch absolute paths.
    if path.is_absolute() {
        return Ok(filename.to_owned());
    }

    let abs_config_path = config_path.canonicalize()?;
    Ok(abs_config_path
        .parent()
        .ok_or_else(|| {
            format_err!(
                "Cannot get parent path of the configuration file: {}",
                abs_config_path.to_string_lossy()
            )
        })?
        .join(path)
        .to_str()
        .ok_or_else(|| {
            format_err!(
                "Cannot convert parent path to string: {}",
                abs_config_path.to_string_lossy()
            )
        })?
        .to_owned())
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::fs;
    use std::io::Cursor;

    use depvec::features::Embeddings;

    use super::{read_labels, Dataset, EmbeddingFormat, Lookup};

    #[test]
    fn declared_dims_are_checked() {
        let path = env::temp_dir().join("depvec-config-dims-test.txt");
        fs::write(&path, "2 2\ndet 1 2\nnsubj 3 4\n").unwrap();

        let mut lookup = Lookup {
            filename: path.to_string_lossy().into_owned(),
            format: EmbeddingFormat::Word2VecText,
            dims: Some(2),
        };
        let embeds = lookup.load_embeddings().unwrap();
        assert_eq!(embeds.words(), &["det".to_owned(), "nsubj".to_owned()]);

        lookup.dims = Some(3);
        assert!(lookup.load_embeddings().is_err());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn labels_from_file_skip_blank_lines() {
        let labels = read_labels(Cursor::new("root\n\n nsubj \nobj\nroot\n")).unwrap();
        assert_eq!(
            labels.values(),
            &["root".to_owned(), "nsubj".to_owned(), "obj".to_owned()]
        );
    }

    #[test]
    fn labels_from_embedding_order() {
        let mut embeds = Embeddings::new(1);
        embeds.insert("punct", &[0.]).unwrap();
        embeds.insert("det", &[1.]).unwrap();

        let labels = Dataset::default().load_labels(&embeds).unwrap();
        assert_eq!(labels.number(&"punct".to_owned()), Some(0));
        assert_eq!(labels.number(&"det".to_owned()), Some(1));
    }

    #[test]
    fn empty_label_set_is_rejected() {
        assert!(Dataset::default().load_labels(&Embeddings::new(1)).is_err());
    }
}
