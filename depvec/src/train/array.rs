use ndarray::{Array1, Array2};

use features::InputVectorizer;
use system::{ParserState, TransitionSystem};
use train::{InstanceCollector, TrainError};
use Result;

/// Vectorized training data.
///
/// Row `i` of `inputs` is the vectorized parser state of instance `i`,
/// `labels[i]` the number of its gold transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub inputs: Array2<f32>,
    pub labels: Array1<usize>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Collector that stores instances in memory.
pub struct ArrayCollector<T> {
    transition_system: T,
    vectorizer: InputVectorizer,
    inputs: Vec<f32>,
    labels: Vec<usize>,
}

impl<T> ArrayCollector<T> {
    pub fn new(transition_system: T, vectorizer: InputVectorizer) -> Self {
        ArrayCollector {
            transition_system,
            vectorizer,
            inputs: Vec::new(),
            labels: Vec::new(),
        }
    }

    /// Convert the collected instances into a dataset.
    pub fn into_dataset(self) -> Result<Dataset> {
        let n_instances = self.labels.len();
        let inputs =
            Array2::from_shape_vec((n_instances, self.vectorizer.input_size()), self.inputs)?;

        Ok(Dataset {
            inputs,
            labels: Array1::from(self.labels),
        })
    }
}

impl<T> InstanceCollector<T> for ArrayCollector<T>
where
    T: TransitionSystem,
{
    fn collect(&mut self, t: &T::T, state: &ParserState) -> Result<()> {
        let label = self
            .transition_system
            .transition_number(t)
            .ok_or_else(|| TrainError::UnknownLabel {
                transition: format!("{:?}", t),
            })?;
        self.labels.push(label);

        let offset = self.inputs.len();
        self.inputs.resize(offset + self.vectorizer.input_size(), 0.);
        self.vectorizer.realize_into(state, &mut self.inputs[offset..]);

        Ok(())
    }
}
