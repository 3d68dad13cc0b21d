use crate::topk::ScoredWord;
use crate::trie::Trie;
use crate::vocab::REFERENCE_VOCABULARY;

fn reference_trie() -> Trie {
    Trie::from_pairs(REFERENCE_VOCABULARY.iter().copied())
}

#[test]
fn test_autocomplete_app() {
    let trie = reference_trie();
    assert_eq!(trie.autocomplete("app", 5), vec!["apple", "application"]);
}

#[test]
fn test_autocomplete_b() {
    let trie = reference_trie();
    assert_eq!(
        trie.autocomplete("b", 5),
        vec!["book", "bee", "bat", "banana", "ball"]
    );
}

#[test]
fn test_autocomplete_missing_prefix() {
    let trie = reference_trie();
    assert!(trie.autocomplete("xyz", 5).is_empty());
    // Fails on the first absent char even when later chars exist somewhere.
    assert!(trie.autocomplete("zapple", 5).is_empty());
}

#[test]
fn test_autocomplete_k_zero() {
    let trie = reference_trie();
    assert!(trie.autocomplete("b", 0).is_empty());
    assert!(trie.autocomplete("", 0).is_empty());
}

#[test]
fn test_autocomplete_empty_prefix_is_global_top() {
    let trie = reference_trie();
    assert_eq!(trie.autocomplete("", 3), vec!["apple", "book", "bee"]);
}

#[test]
fn test_autocomplete_includes_prefix_itself() {
    let trie = Trie::from_pairs([("a", 10), ("app", 5), ("apple", 10)]);
    assert_eq!(trie.autocomplete("a", 5), vec!["a", "apple", "app"]);
    assert_eq!(trie.autocomplete("app", 5), vec!["apple", "app"]);
}

#[test]
fn test_autocomplete_ap_top_two() {
    let trie = Trie::from_pairs([("a", 10), ("app", 5), ("apple", 10), ("apt", 7)]);
    assert_eq!(trie.autocomplete("ap", 2), vec!["apple", "apt"]);
}

#[test]
fn test_tie_at_boundary_first_in_traversal_wins() {
    // Pre-order below "ap": app, apple, apply, apt.
    let trie = Trie::from_pairs([("apple", 10), ("app", 5), ("apply", 5), ("apt", 5)]);
    assert_eq!(trie.autocomplete("ap", 2), vec!["apple", "app"]);
}

#[test]
fn test_tie_order_follows_child_insertion_order() {
    let forward = Trie::from_pairs([("bx", 5), ("by", 9), ("bz", 5)]);
    assert_eq!(forward.autocomplete("b", 2), vec!["by", "bx"]);

    let reversed = Trie::from_pairs([("bz", 5), ("by", 9), ("bx", 5)]);
    assert_eq!(reversed.autocomplete("b", 2), vec!["by", "bz"]);
}

#[test]
fn test_autocomplete_scored_keeps_frequencies() {
    let trie = reference_trie();
    assert_eq!(
        trie.autocomplete_scored("ba", 5),
        vec![
            ScoredWord::new("bat", 4),
            ScoredWord::new("banana", 3),
            ScoredWord::new("ball", 2),
        ]
    );
}

#[test]
fn test_reinsertion_accumulates() {
    let mut trie = Trie::new();
    trie.insert("word", 3);
    trie.insert("word", 4);
    assert_eq!(trie.word_count(), 1);
    assert_eq!(trie.frequency("word"), Some(7));
    assert_eq!(trie.autocomplete("w", 5), vec!["word"]);
}

#[test]
fn test_insert_one_uses_default_frequency() {
    let mut trie = Trie::new();
    trie.insert_one("hello");
    trie.insert_one("hello");
    assert_eq!(trie.frequency("hello"), Some(2));
}

#[test]
fn test_frequency_saturates() {
    let mut trie = Trie::new();
    trie.insert("max", u64::MAX);
    trie.insert("max", 1);
    assert_eq!(trie.frequency("max"), Some(u64::MAX));
}

#[test]
fn test_zero_frequency_word_is_still_indexed() {
    let mut trie = Trie::new();
    trie.insert("ghost", 0);
    assert!(trie.contains("ghost"));
    assert_eq!(trie.autocomplete("gh", 5), vec!["ghost"]);
}

#[test]
fn test_prefix_nodes_are_not_words() {
    let trie = reference_trie();
    assert!(!trie.contains("app"));
    assert_eq!(trie.frequency("app"), None);
    assert_eq!(trie.frequency("apple"), Some(10));
    assert!(!trie.contains("nothing"));
}

#[test]
fn test_empty_string_word() {
    let mut trie = Trie::new();
    assert!(!trie.root().is_terminal());
    trie.insert("", 4);
    trie.insert("x", 1);
    assert!(trie.root().is_terminal());
    assert_eq!(trie.autocomplete("", 5), vec!["", "x"]);
}

#[test]
fn test_counts() {
    let trie = reference_trie();
    assert_eq!(trie.word_count(), 8);

    let mut prefixes = std::collections::HashSet::new();
    for (word, _) in REFERENCE_VOCABULARY {
        for (i, c) in word.char_indices() {
            prefixes.insert(&word[..i + c.len_utf8()]);
        }
    }
    assert_eq!(trie.node_count(), prefixes.len());
    assert!(!trie.is_empty());
    assert!(Trie::new().is_empty());
}

#[test]
fn test_multibyte_chars_are_atomic() {
    let trie = Trie::from_pairs([("かんじ", 3), ("かん", 5), ("かんじょう", 4), ("き", 9)]);
    assert_eq!(trie.autocomplete("かん", 5), vec!["かん", "かんじょう", "かんじ"]);
    assert_eq!(trie.node_count(), 6);
    assert!(trie.autocomplete("かx", 5).is_empty());
}

#[test]
fn test_iter_pre_order() {
    let trie = Trie::from_pairs([("b", 1), ("a", 2), ("ab", 3), ("ba", 4)]);
    let words: Vec<(String, u64)> = trie.iter().map(|s| (s.word, s.frequency)).collect();
    assert_eq!(
        words,
        vec![
            ("b".to_string(), 1),
            ("ba".to_string(), 4),
            ("a".to_string(), 2),
            ("ab".to_string(), 3),
        ]
    );
}

#[test]
fn test_words_with_prefix_missing() {
    let trie = reference_trie();
    assert_eq!(trie.words_with_prefix("q").count(), 0);
    assert_eq!(trie.words_with_prefix("b").count(), 6);
}

#[test]
fn test_deep_word_does_not_recurse() {
    let long: String = std::iter::repeat('z').take(50_000).collect();
    let mut trie = Trie::new();
    trie.insert(&long, 1);
    trie.insert("zz", 2);
    let result = trie.autocomplete("z", 2);
    assert_eq!(result.len(), 2);
    assert_eq!(result[0], "zz");
    assert_eq!(result[1].chars().count(), 50_000);
}

#[test]
fn test_node_accessors() {
    let trie = reference_trie();
    let a = trie.root().child('a').unwrap();
    assert!(!a.is_terminal());
    assert_eq!(a.frequency(), None);
    let roots: Vec<char> = trie.root().children().map(|(c, _)| c).collect();
    assert_eq!(roots, vec!['a', 'b']);
}

#[test]
fn test_collect_from_iterator() {
    let trie: Trie = vec![("one".to_string(), 1), ("two".to_string(), 2)]
        .into_iter()
        .collect();
    assert_eq!(trie.autocomplete("", 5), vec!["two", "one"]);
}
