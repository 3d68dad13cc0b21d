use std::process;

use typeahead_engine::typeahead_core::trie::Trie;
use typeahead_engine::typeahead_core::vocab::Vocabulary;

use super::complete_ops::format_scored;
use super::load_vocabulary;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn stats(vocab_file: Option<&str>, top: usize) {
    let vocab = die!(load_vocabulary(vocab_file), "Error loading vocabulary: {}");
    print!("{}", stats_report(vocab, top));
}

pub fn stats_report(vocab: Vocabulary, top: usize) -> String {
    let mut out = String::new();
    if vocab.total_lines > 0 {
        out.push_str(&format!(
            "lines:   {} ({} skipped)\n",
            vocab.total_lines, vocab.skipped
        ));
    }
    out.push_str(&format!("entries: {}\n", vocab.len()));

    let trie: Trie = vocab.into_trie();
    out.push_str(&format!("words:   {}\n", trie.word_count()));
    out.push_str(&format!("nodes:   {}\n", trie.node_count()));
    if top > 0 && !trie.is_empty() {
        out.push_str(&format!("top {top}:\n"));
        out.push_str(&format_scored(&trie.autocomplete_scored("", top)));
    }
    out
}
