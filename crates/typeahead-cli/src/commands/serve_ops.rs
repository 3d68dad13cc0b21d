use std::fs;
use std::process;
use std::sync::Arc;
use std::time::Duration;

use typeahead_engine::{parse_requests, AsyncWorker, Completion, Engine};

use super::load_vocabulary;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

const WORKER_TIMEOUT: Duration = Duration::from_secs(30);

pub fn serve(vocab_file: Option<&str>, requests_file: &str, json: bool, background: bool) {
    let text = die!(
        fs::read_to_string(requests_file),
        "Error reading {requests_file}: {}"
    );
    let requests = die!(parse_requests(&text), "Error in {requests_file}: {}");
    let vocab = die!(load_vocabulary(vocab_file), "Error loading vocabulary: {}");

    let print = |c: Completion| {
        if json {
            println!("{}", die!(serde_json::to_string(&c), "Error serializing: {}"));
        } else {
            println!("{}", format_completion(&c));
        }
    };

    if background {
        let worker = die!(
            AsyncWorker::with_global_settings(Arc::new(vocab.into_trie())),
            "Error starting worker: {}"
        );
        let n = requests.len();
        die!(
            worker.submit_batch(requests.into_iter().map(|(r, p)| (r, Some(p)))),
            "Error submitting requests: {}"
        );
        for _ in 0..n {
            match die!(worker.recv_timeout(WORKER_TIMEOUT), "Error receiving completion: {}") {
                Some(c) => print(c),
                None => {
                    eprintln!("Error: worker stopped responding");
                    process::exit(1);
                }
            }
        }
        return;
    }

    let mut engine = Engine::from_vocabulary(vocab);
    for (request, priority) in requests {
        engine.submit(request, Some(priority));
    }
    let served = engine.run(print);
    eprintln!("served {served} requests");
}

/// `priority=1, prefix="bi" -> [binary]`
pub fn format_completion(c: &Completion) -> String {
    format!(
        "priority={}, prefix={:?} -> [{}]",
        c.priority,
        c.request.prefix,
        c.words.join(", ")
    )
}
