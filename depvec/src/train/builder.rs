use corpus::Sentence;
use features::InputVectorizer;
use system::{sentence_to_dependencies, ParserState, TransitionSystem};
use train::{ArrayCollector, Dataset, GreedyTrainer, TrainError};
use Result;

/// Treatment of sentences that the oracle cannot derive.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NonProjectivePolicy {
    /// Leave out the sentence and record it in the statistics.
    Skip,

    /// Abort dataset construction.
    Fail,
}

impl Default for NonProjectivePolicy {
    fn default() -> Self {
        NonProjectivePolicy::Skip
    }
}

/// A sentence that was left out because the oracle got stuck.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StuckSentence {
    /// Position of the sentence in the corpus, starting at 0.
    pub sentence: usize,

    /// Whether the gold tree is projective. Projective trees only get
    /// stuck when they are malformed, e.g. when a head does not exist.
    pub projective: bool,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DatasetStats {
    pub n_sentences: usize,
    pub n_empty: usize,
    pub n_instances: usize,
    pub stuck: Vec<StuckSentence>,
}

/// Build a dataset from gold-standard sentences.
pub struct DatasetBuilder<T> {
    transition_system: T,
    vectorizer: InputVectorizer,
    non_projective: NonProjectivePolicy,
}

impl<T> DatasetBuilder<T>
where
    T: TransitionSystem,
{
    pub fn new(transition_system: T, vectorizer: InputVectorizer) -> Self {
        DatasetBuilder {
            transition_system,
            vectorizer,
            non_projective: NonProjectivePolicy::default(),
        }
    }

    pub fn non_projective_policy(mut self, policy: NonProjectivePolicy) -> Self {
        self.non_projective = policy;
        self
    }

    /// Vectorize the oracle derivations of the given sentences.
    ///
    /// Instances are stored in corpus order. Sentences without real
    /// tokens do not contribute instances.
    pub fn build<'a, I>(self, sentences: I) -> Result<(Dataset, DatasetStats)>
    where
        I: IntoIterator<Item = &'a Sentence>,
    {
        let collector = ArrayCollector::new(self.transition_system, self.vectorizer);
        let mut trainer: GreedyTrainer<T, _> = GreedyTrainer::new(collector);
        let mut stats = DatasetStats::default();

        for (idx, sentence) in sentences.into_iter().enumerate() {
            stats.n_sentences += 1;

            if sentence.n_real_tokens() == 0 {
                stats.n_empty += 1;
                continue;
            }

            let dependencies = sentence_to_dependencies(sentence);
            let mut state = ParserState::new(sentence);
            if trainer.parse_state(&dependencies, &mut state)? {
                continue;
            }

            let projective = dependencies.is_projective();
            match self.non_projective {
                NonProjectivePolicy::Skip => stats.stuck.push(StuckSentence {
                    sentence: idx,
                    projective,
                }),
                NonProjectivePolicy::Fail => {
                    return Err(TrainError::OracleStuck {
                        sentence: idx,
                        projective,
                    }
                    .into())
                }
            }
        }

        let dataset = trainer.into_collector().into_dataset()?;
        stats.n_instances = dataset.len();

        Ok((dataset, stats))
    }
}
