//! Reference dictionary of legal row and column words

use super::{GRID_SIZE, Word};
use rustc_hash::FxHashSet;

/// A set of `N`-letter words with membership tests and ordered iteration
///
/// Words are kept sorted and de-duplicated so that anything derived from
/// iteration order (the candidate pool, the board enumeration) is
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct Dictionary<const N: usize = GRID_SIZE> {
    words: Vec<Word<N>>,
    index: FxHashSet<Word<N>>,
}

impl<const N: usize> Dictionary<N> {
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word<N>>) -> Self {
        let mut words: Vec<Word<N>> = words.into_iter().collect();
        words.sort_unstable();
        words.dedup();
        let index = words.iter().copied().collect();
        Self { words, index }
    }

    /// Build a dictionary from raw strings, skipping anything that is not an
    /// `N`-letter word
    ///
    /// # Examples
    /// ```
    /// use bongo_solver::core::Dictionary;
    ///
    /// let dictionary = Dictionary::<2>::from_strs(&["ab", "BA", "abc", "a1"]);
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains_str("AB"));
    /// ```
    #[must_use]
    pub fn from_strs(words: &[&str]) -> Self {
        Self::new(words.iter().filter_map(|s| Word::new(s).ok()))
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word<N>) -> bool {
        self.index.contains(word)
    }

    /// Membership test for unparsed text; invalid words are never members
    #[must_use]
    pub fn contains_str(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|word| self.contains(&word))
    }

    /// Words in ascending alphabetical order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Word<N>> {
        self.words.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Word<N>] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<const N: usize> FromIterator<Word<N>> for Dictionary<N> {
    fn from_iter<I: IntoIterator<Item = Word<N>>>(iter: I) -> Self {
        Self::new(iter)
    }
}
