//! Vocabulary ingestion: `(word, frequency)` pairs from text.
//!
//! One entry per line, `word<TAB>frequency`. A tab line with a third column is
//! skipped. Lines without a tab are split on whitespace and must have one or
//! two fields. Blank lines and lines starting
//! with `#` are ignored. A missing frequency column means
//! [`DEFAULT_FREQUENCY`]; a frequency column that is not a usable number
//! contributes 0.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::trie::{Trie, DEFAULT_FREQUENCY};

/// Seed vocabulary used by the demo and when no vocabulary file is given.
pub const REFERENCE_VOCABULARY: &[(&str, u64)] = &[
    ("apple", 10),
    ("application", 5),
    ("banana", 3),
    ("book", 8),
    ("binary", 1),
    ("bee", 7),
    ("bat", 4),
    ("ball", 2),
];

#[derive(Debug, thiserror::Error)]
pub enum VocabError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("no vocabulary entries found in {0}")]
    Empty(String),
}

/// Parsed vocabulary, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    pub entries: Vec<(String, u64)>,
    pub total_lines: usize,
    pub skipped: usize,
}

impl Vocabulary {
    pub fn reference() -> Self {
        Self {
            entries: REFERENCE_VOCABULARY
                .iter()
                .map(|&(w, f)| (w.to_string(), f))
                .collect(),
            total_lines: REFERENCE_VOCABULARY.len(),
            skipped: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_trie(self) -> Trie {
        Trie::from_pairs(self.entries)
    }
}

/// Coerce raw frequency text to a count.
///
/// Integers parse directly. Finite positive decimals (`"2.9"`, `"1e3"`) are
/// truncated. Anything else (negative, NaN, infinite, garbage, empty) is 0.
pub fn coerce_frequency(raw: &str) -> u64 {
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<u64>() {
        return n;
    }
    match raw.parse::<f64>() {
        Ok(f) if f.is_finite() && f > 0.0 => f.trunc() as u64,
        _ => 0,
    }
}

fn parse_line(line: &str) -> Option<(String, u64)> {
    if line.contains('\t') {
        let mut columns = line.split('\t');
        let word = columns.next().unwrap_or_default().trim();
        let freq = columns.next().unwrap_or_default();
        if word.is_empty() || columns.next().is_some() {
            return None;
        }
        return Some((word.to_string(), coerce_frequency(freq)));
    }

    let fields: Vec<&str> = line.split_whitespace().collect();
    match fields.as_slice() {
        [word] => Some((word.to_string(), DEFAULT_FREQUENCY)),
        [word, freq] => Some((word.to_string(), coerce_frequency(freq))),
        _ => None,
    }
}

pub fn parse_str(text: &str) -> Vocabulary {
    let mut vocab = Vocabulary::default();
    for line in text.lines() {
        vocab.total_lines += 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            vocab.skipped += 1;
            continue;
        }
        match parse_line(line) {
            Some(entry) => vocab.entries.push(entry),
            None => vocab.skipped += 1,
        }
    }
    vocab
}

pub fn load_file(path: &Path) -> Result<Vocabulary, VocabError> {
    let content = fs::read_to_string(path)?;
    let vocab = parse_str(&content);
    debug!(
        path = %path.display(),
        entries = vocab.len(),
        skipped = vocab.skipped,
        "loaded vocabulary"
    );
    if vocab.is_empty() {
        return Err(VocabError::Empty(path.display().to_string()));
    }
    Ok(vocab)
}
