use std::io::Read;

use toml;

use config::Config;
use Result;

pub trait TomlRead
where
    Self: Sized,
{
    fn from_toml_read<R>(read: R) -> Result<Self>
    where
        R: Read;
}

impl TomlRead for Config {
    fn from_toml_read<R>(mut read: R) -> Result<Self>
    where
        R: Read,
    {
        let mut data = String::new();
        read.read_to_string(&mut data)?;
        Ok(toml::from_str(&data)?)
    }
}

#[cfg(test)]
mod tests {
    use depvec::train::NonProjectivePolicy;

    use super::TomlRead;
    use config::{Config, Dataset, EmbeddingFormat, Lookup, Lookups};

    static CONFIG: &str = r#"
[embeddings.word]
filename = "word2vec.bin"
format = "word2vec_binary"
dims = 300

[embeddings.tag]
filename = "tag2vec.txt"
dims = 100

[embeddings.label]
filename = "label2vec.txt"
format = "word2vec_text"

[dataset]
labels = "labels.txt"
non_projective = "fail"
"#;

    #[test]
    fn reads_config() {
        let config = Config::from_toml_read(CONFIG.as_bytes()).unwrap();

        assert_eq!(
            config,
            Config {
                embeddings: Lookups {
                    word: Lookup {
                        filename: "word2vec.bin".to_owned(),
                        format: EmbeddingFormat::Word2VecBinary,
                        dims: Some(300),
                    },
                    tag: Lookup {
                        filename: "tag2vec.txt".to_owned(),
                        format: EmbeddingFormat::Word2VecText,
                        dims: Some(100),
                    },
                    label: Lookup {
                        filename: "label2vec.txt".to_owned(),
                        format: EmbeddingFormat::Word2VecText,
                        dims: None,
                    },
                },
                dataset: Dataset {
                    labels: Some("labels.txt".to_owned()),
                    non_projective: NonProjectivePolicy::Fail,
                },
            }
        );
    }

    #[test]
    fn dataset_section_is_optional() {
        let config_str = CONFIG.split("[dataset]").next().unwrap();
        let config = Config::from_toml_read(config_str.as_bytes()).unwrap();
        assert_eq!(config.dataset, Dataset::default());
        assert_eq!(config.dataset.non_projective, NonProjectivePolicy::Skip);
    }

    #[test]
    fn rejects_unknown_format() {
        let config_str = CONFIG.replace("word2vec_binary", "fasttext");
        assert!(Config::from_toml_read(config_str.as_bytes()).is_err());
    }
}
