use typeahead_engine::{AutocompleteRequest, Engine};

use super::serve_ops::format_completion;

/// Direct queries against the reference vocabulary, then four requests
/// pushed through the priority queue.
pub fn demo() {
    print!("{}", demo_output());
}

pub fn demo_output() -> String {
    let mut engine = Engine::default();
    let mut out = String::from("Direct autocomplete:\n");
    for prefix in ["app", "b"] {
        out.push_str(&format!(
            "{prefix:<3} -> [{}]\n",
            engine.autocomplete(prefix, Some(5)).join(", ")
        ));
    }

    for (prefix, priority) in [("b", 0.0), ("app", 0.0), ("bi", 1.0), ("ba", 0.0)] {
        engine.submit(AutocompleteRequest::new(prefix).with_k(5), Some(priority));
    }
    out.push_str("Queue, by priority:\n");
    engine.run(|c| {
        out.push_str(&format_completion(&c));
        out.push('\n');
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_output() {
        let expected = "\
Direct autocomplete:
app -> [apple, application]
b   -> [book, bee, bat, banana, ball]
Queue, by priority:
priority=1, prefix=\"bi\" -> [binary]
priority=0, prefix=\"b\" -> [book, bee, bat, banana, ball]
priority=0, prefix=\"app\" -> [apple, application]
priority=0, prefix=\"ba\" -> [bat, banana, ball]
";
        assert_eq!(demo_output(), expected);
    }
}
