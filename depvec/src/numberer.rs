use std::collections::HashMap;
use std::hash::Hash;

/// Bidirectional mapping between values and consecutive numbers.
///
/// Numbers are assigned in insertion order, starting at `start_at`.
/// Adding a value that is already known returns its existing number,
/// so the mapping is stable once constructed.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Numberer<T>
where
    T: Eq + Hash,
{
    values: Vec<T>,
    numbers: HashMap<T, usize>,
    start_at: usize,
}

impl<T> Numberer<T>
where
    T: Clone + Eq + Hash,
{
    pub fn new(start_at: usize) -> Self {
        Numberer {
            values: Vec::new(),
            numbers: HashMap::new(),
            start_at,
        }
    }

    /// Add a value, returning its number.
    pub fn add(&mut self, value: T) -> usize {
        let start_at = self.start_at;
        let values = &mut self.values;

        *self.numbers.entry(value.clone()).or_insert_with(|| {
            values.push(value);
            values.len() - 1 + start_at
        })
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Get the number of a value.
    pub fn number(&self, value: &T) -> Option<usize> {
        self.numbers.get(value).cloned()
    }

    pub fn start_at(&self) -> usize {
        self.start_at
    }

    /// Get the value corresponding to a number.
    pub fn value(&self, number: usize) -> Option<&T> {
        if number < self.start_at {
            return None;
        }

        self.values.get(number - self.start_at)
    }

    /// Values in number order.
    pub fn values(&self) -> &[T] {
        &self.values
    }
}

impl<T> ::std::iter::FromIterator<T> for Numberer<T>
where
    T: Clone + Eq + Hash,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut numberer = Numberer::new(0);
        for value in iter {
            numberer.add(value);
        }
        numberer
    }
}
