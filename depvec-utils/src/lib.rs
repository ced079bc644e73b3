extern crate colored;
extern crate depvec;
#[macro_use]
extern crate failure;
extern crate finalfusion;
extern crate indicatif;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate toml;

#[cfg(test)]
#[macro_use]
extern crate approx;

#[macro_export]
macro_rules! stderr(
    ($($arg:tt)*) => { {
        use std::io::Write;
        let _ = writeln!(&mut ::std::io::stderr(), $($arg)*);
    } }
);

mod config;
pub use config::{Config, Dataset, EmbeddingFormat, Lookup, Lookups};

mod progress;
pub use progress::FileProgress;

mod or_exit;
pub use or_exit::OrExit;

mod toml_read;
pub use toml_read::TomlRead;

mod word2vec;
pub use word2vec::{read_word2vec_binary, read_word2vec_text};

pub type Result<T> = ::std::result::Result<T, failure::Error>;
