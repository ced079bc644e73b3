use std::collections::HashMap;

use corpus::Sentence;

/// Gold-standard dependencies of a sentence.
///
/// Tokens are identified by their position in the sentence (the root
/// is at position 0). Heads that refer to an index that does not occur
/// in the sentence are stored as `None`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DependencySet {
    heads: Vec<Option<usize>>,
    n_dependents: Vec<usize>,
}

impl DependencySet {
    /// Head position of the token at `position`.
    pub fn head(&self, position: usize) -> Option<usize> {
        self.heads[position]
    }

    /// Number of gold dependents of the token at `position`.
    pub fn n_dependents(&self, position: usize) -> usize {
        self.n_dependents[position]
    }

    pub fn len(&self) -> usize {
        self.heads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heads.is_empty()
    }

    /// Check whether the gold tree is projective.
    ///
    /// A tree is projective when no two arcs cross. Tokens with an
    /// unresolvable head are not part of any arc and are ignored.
    pub fn is_projective(&self) -> bool {
        let arcs: Vec<_> = self
            .heads
            .iter()
            .enumerate()
            .filter_map(|(dep, head)| head.map(|head| (head.min(dep), head.max(dep))))
            .collect();

        for (i, &(left, right)) in arcs.iter().enumerate() {
            for &(other_left, other_right) in &arcs[i + 1..] {
                let crosses = (left < other_left && other_left < right && right < other_right)
                    || (other_left < left && left < other_right && other_right < right);
                if crosses {
                    return false;
                }
            }
        }

        true
    }
}

/// Extract the gold dependencies from a sentence.
pub fn sentence_to_dependencies(sentence: &Sentence) -> DependencySet {
    let mut positions = HashMap::new();
    for (position, token) in sentence.iter().enumerate() {
        positions.entry(token.index()).or_insert(position);
    }

    let heads: Vec<_> = sentence
        .iter()
        .map(|token| {
            token
                .parent()
                .and_then(|parent| positions.get(&parent).cloned())
        }).collect();

    let mut n_dependents = vec![0; sentence.len()];
    for head in heads.iter().filter_map(|&head| head) {
        n_dependents[head] += 1;
    }

    DependencySet {
        heads,
        n_dependents,
    }
}

#[cfg(test)]
mod tests {
    use corpus::{Sentence, Token};

    use super::sentence_to_dependencies;

    #[test]
    fn counts_dependents() {
        let sentence = Sentence::new(vec![
            Token::new(1, "The", "DT", "det", 2),
            Token::new(2, "dog", "NN", "nsubj", 3),
            Token::new(3, "barks", "VBZ", "root", 0),
        ]);
        let deps = sentence_to_dependencies(&sentence);

        assert_eq!(deps.len(), 4);
        assert_eq!(deps.head(0), None);
        assert_eq!(deps.head(1), Some(2));
        assert_eq!(deps.head(3), Some(0));
        assert_eq!(deps.n_dependents(0), 1);
        assert_eq!(deps.n_dependents(1), 0);
        assert_eq!(deps.n_dependents(2), 1);
        assert_eq!(deps.n_dependents(3), 1);
        assert!(deps.is_projective());
    }

    #[test]
    fn unknown_head_is_unresolved() {
        let sentence = Sentence::new(vec![
            Token::new(1, "a", "X", "dep", 7),
            Token::new(2, "b", "X", "root", 0),
        ]);
        let deps = sentence_to_dependencies(&sentence);

        assert_eq!(deps.head(1), None);
        assert_eq!(deps.n_dependents(0), 1);
    }

    #[test]
    fn detects_crossing_arcs() {
        // 1 -> 3 crosses 2 -> 4.
        let sentence = Sentence::new(vec![
            Token::new(1, "a", "X", "root", 0),
            Token::new(2, "b", "X", "dep", 4),
            Token::new(3, "c", "X", "dep", 1),
            Token::new(4, "d", "X", "dep", 1),
        ]);
        assert!(!sentence_to_dependencies(&sentence).is_projective());
    }
}
