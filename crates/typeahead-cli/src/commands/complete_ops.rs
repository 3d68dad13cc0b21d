use std::process;

use unicode_width::UnicodeWidthStr;

use typeahead_engine::typeahead_core::settings::settings;
use typeahead_engine::typeahead_core::ScoredWord;

use super::load_vocabulary;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn complete(vocab_file: Option<&str>, prefix: &str, k: Option<usize>, json: bool, scores: bool) {
    let vocab = die!(load_vocabulary(vocab_file), "Error loading vocabulary: {}");
    let trie = vocab.into_trie();
    let k = settings().autocomplete.resolve_k(k);
    let results = trie.autocomplete_scored(prefix, k);

    if json {
        let out = if scores {
            serde_json::to_string_pretty(&results)
        } else {
            let words: Vec<&str> = results.iter().map(|s| s.word.as_str()).collect();
            serde_json::to_string_pretty(&words)
        };
        println!("{}", die!(out, "Error serializing results: {}"));
        return;
    }

    if results.is_empty() {
        eprintln!("no completions for {prefix:?}");
        return;
    }
    if scores {
        print!("{}", format_scored(&results));
    } else {
        for s in &results {
            println!("{}", s.word);
        }
    }
}

/// Two-column `word  frequency` table, padded by display width so wide
/// characters line up.
pub fn format_scored(results: &[ScoredWord]) -> String {
    let width = results
        .iter()
        .map(|s| UnicodeWidthStr::width(s.word.as_str()))
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for s in results {
        let pad = width - UnicodeWidthStr::width(s.word.as_str());
        out.push_str(&format!("{}{}  {}\n", s.word, " ".repeat(pad), s.frequency));
    }
    out
}
