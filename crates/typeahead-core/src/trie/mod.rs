//! Character trie over a weighted vocabulary.
//!
//! Each indexed word ends at a terminal node carrying the word's accumulated
//! frequency. Children are kept in insertion order, so enumeration (and the
//! tie-breaking that depends on it) is reproducible across runs.

#[cfg(test)]
mod tests;

use indexmap::map::Entry;
use indexmap::IndexMap;
use tracing::{debug, debug_span};

use crate::topk::{ScoredWord, TopK};

/// Frequency used by [`Trie::insert_one`] and by vocabulary lines without a
/// frequency column.
pub const DEFAULT_FREQUENCY: u64 = 1;

#[derive(Debug, Default)]
pub struct TrieNode {
    children: IndexMap<char, TrieNode>,
    is_terminal: bool,
    frequency: u64,
}

impl TrieNode {
    pub fn child(&self, ch: char) -> Option<&TrieNode> {
        self.children.get(&ch)
    }

    /// Children in the order they were first created.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(&ch, node)| (ch, node))
    }

    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// Accumulated frequency, or `None` if no word ends here.
    pub fn frequency(&self) -> Option<u64> {
        self.is_terminal.then_some(self.frequency)
    }
}

#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    words: usize,
    nodes: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<S: AsRef<str>>(pairs: impl IntoIterator<Item = (S, u64)>) -> Self {
        let mut trie = Self::new();
        trie.extend(pairs);
        trie
    }

    /// Index `word`, adding `frequency` to whatever it has accumulated so far.
    pub fn insert(&mut self, word: &str, frequency: u64) {
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = match node.children.entry(ch) {
                Entry::Occupied(e) => e.into_mut(),
                Entry::Vacant(e) => {
                    self.nodes += 1;
                    e.insert(TrieNode::default())
                }
            };
        }
        if !node.is_terminal {
            node.is_terminal = true;
            self.words += 1;
        }
        node.frequency = node.frequency.saturating_add(frequency);
    }

    pub fn insert_one(&mut self, word: &str) {
        self.insert(word, DEFAULT_FREQUENCY);
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of distinct indexed words.
    pub fn word_count(&self) -> usize {
        self.words
    }

    /// Number of nodes below the root.
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    pub fn frequency(&self, word: &str) -> Option<u64> {
        self.find_node(word).and_then(TrieNode::frequency)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.frequency(word).is_some()
    }

    /// All indexed words with their frequencies, in traversal order.
    pub fn iter(&self) -> Words<'_> {
        self.words_with_prefix("")
    }

    /// Every indexed word starting with `prefix`, in pre-order with children
    /// visited in insertion order. Empty if `prefix` is not a path in the trie.
    pub fn words_with_prefix(&self, prefix: &str) -> Words<'_> {
        let stack = match self.find_node(prefix) {
            Some(node) => vec![(None, node, 0)],
            None => Vec::new(),
        };
        Words {
            prefix: prefix.to_string(),
            stack,
            path: Vec::new(),
        }
    }

    /// The `k` most frequent words starting with `prefix`, highest first.
    pub fn autocomplete(&self, prefix: &str, k: usize) -> Vec<String> {
        self.autocomplete_scored(prefix, k)
            .into_iter()
            .map(|s| s.word)
            .collect()
    }

    /// Like [`Trie::autocomplete`] but keeps the frequencies.
    pub fn autocomplete_scored(&self, prefix: &str, k: usize) -> Vec<ScoredWord> {
        let _span = debug_span!("autocomplete", prefix, k).entered();
        if k == 0 {
            return Vec::new();
        }

        let mut top = TopK::new(k);
        let mut visited = 0usize;
        for candidate in self.words_with_prefix(prefix) {
            visited += 1;
            top.offer(candidate);
        }

        let ranked = top.into_sorted_vec();
        debug!(visited, returned = ranked.len());
        ranked
    }

    fn find_node(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in prefix.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }
}

impl Drop for Trie {
    // Nested maps would otherwise drop one level per stack frame.
    fn drop(&mut self) {
        let mut pending: Vec<TrieNode> = std::mem::take(&mut self.root.children)
            .into_values()
            .collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

impl<S: AsRef<str>> Extend<(S, u64)> for Trie {
    fn extend<I: IntoIterator<Item = (S, u64)>>(&mut self, iter: I) {
        for (word, frequency) in iter {
            self.insert(word.as_ref(), frequency);
        }
    }
}

impl<S: AsRef<str>> FromIterator<(S, u64)> for Trie {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

/// Pre-order walk below a prefix node, driven by an explicit stack so deep
/// words cannot exhaust the call stack.
pub struct Words<'a> {
    prefix: String,
    /// (edge char, node, depth below the prefix node)
    stack: Vec<(Option<char>, &'a TrieNode, usize)>,
    path: Vec<char>,
}

impl Iterator for Words<'_> {
    type Item = ScoredWord;

    fn next(&mut self) -> Option<ScoredWord> {
        while let Some((edge, node, depth)) = self.stack.pop() {
            if let Some(ch) = edge {
                self.path.truncate(depth - 1);
                self.path.push(ch);
            }
            // Reversed so the first-created child is popped first.
            for (ch, child) in node.children().rev() {
                self.stack.push((Some(ch), child, depth + 1));
            }
            if node.is_terminal {
                let mut word = String::with_capacity(self.prefix.len() + self.path.len());
                word.push_str(&self.prefix);
                word.extend(self.path.iter());
                return Some(ScoredWord::new(word, node.frequency));
            }
        }
        None
    }
}
