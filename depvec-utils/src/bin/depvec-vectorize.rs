extern crate colored;
extern crate depvec;
#[macro_use]
extern crate depvec_utils;
extern crate getopts;
extern crate serde_cbor;
extern crate stdinout;

use std::env::args;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

use colored::Colorize;
use depvec::corpus::read_sentences;
use depvec::features::{AddressedValue, InputVectorizer, Layer};
use depvec::numberer::Numberer;
use depvec::systems::ArcStandardSystem;
use depvec::train::{DatasetBuilder, DatasetStats};
use depvec::Result;
use getopts::Options;
use stdinout::Output;

use depvec_utils::{Config, FileProgress, OrExit, TomlRead};

fn print_usage(program: &str, opts: Options) {
    let brief = format!("Usage: {} [options] CONFIG CORPUS [OUTPUT]", program);
    print!("{}", opts.usage(&brief));
}

fn main() {
    let args: Vec<String> = args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optflag("h", "help", "print this help menu");
    opts.optopt("l", "labels", "write the label numbering", "LABELS_OUT");
    let matches = opts.parse(&args[1..]).or_exit();

    if matches.opt_present("h") {
        print_usage(&program, opts);
        return;
    }

    if matches.free.len() < 2 || matches.free.len() > 3 {
        print_usage(&program, opts);
        return;
    }

    let config_file = File::open(&matches.free[0]).or_exit();
    let mut config = Config::from_toml_read(config_file).or_exit();
    config.relativize_paths(&matches.free[0]).or_exit();

    stderr!("Loading embeddings...");
    let lookups = config.embeddings.load_lookups().or_exit();
    let labels = config
        .dataset
        .load_labels(lookups.layer_lookup(Layer::Label))
        .or_exit();

    if let Some(labels_path) = matches.opt_str("l") {
        write_labels(&labels, &labels_path).or_exit();
    }

    stderr!("Reading corpus...");
    let corpus_file = File::open(&matches.free[1]).or_exit();
    let sentences = read_sentences(BufReader::new(FileProgress::new(corpus_file).or_exit()))
        .or_exit();

    stderr!("Vectorizing {} sentences...", sentences.len());
    let vectorizer = InputVectorizer::new(lookups, AddressedValue::chen_manning());
    let (dataset, stats) = DatasetBuilder::new(ArcStandardSystem::new(labels), vectorizer)
        .non_projective_policy(config.dataset.non_projective)
        .build(&sentences)
        .or_exit();

    report(&stats);

    let output = Output::from(matches.free.get(2));
    let mut writer = BufWriter::new(output.write().or_exit());
    serde_cbor::to_writer(&mut writer, &dataset).or_exit();
    writer.flush().or_exit();
}

fn report(stats: &DatasetStats) {
    stderr!(
        "{} sentences, {} empty, {} instances",
        stats.n_sentences,
        stats.n_empty,
        stats.n_instances
    );

    if stats.stuck.is_empty() {
        return;
    }

    let n_non_projective = stats.stuck.iter().filter(|s| !s.projective).count();
    stderr!(
        "{} skipped {} sentences the oracle could not derive ({} non-projective)",
        "warning:".yellow().bold(),
        stats.stuck.len(),
        n_non_projective
    );

    for stuck in &stats.stuck {
        stderr!(
            "  sentence {}{}",
            stuck.sentence,
            if stuck.projective { "" } else { " (non-projective)" }
        );
    }
}

fn write_labels(labels: &Numberer<String>, path: &str) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for label in labels.values() {
        writeln!(writer, "{}", label)?;
    }

    Ok(())
}
