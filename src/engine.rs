use serde::Serialize;
use tracing::{debug, debug_span};

use typeahead_core::settings::{settings, Settings};
use typeahead_core::trie::Trie;
use typeahead_core::vocab::Vocabulary;
use typeahead_core::StablePriorityQueue;

use crate::request::AutocompleteRequest;

/// A served request: what was asked, in which slot, and the answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Completion {
    pub ticket: u64,
    pub priority: f64,
    pub request: AutocompleteRequest,
    pub words: Vec<String>,
}

/// Owns a vocabulary trie and the queue of requests waiting to be served.
///
/// Requests go in with [`Engine::submit`] and come out of the dispatch loop
/// ([`Engine::run`], [`Engine::dispatch_all`]) in priority order, FIFO among
/// equal priorities.
pub struct Engine {
    trie: Trie,
    pending: StablePriorityQueue<AutocompleteRequest>,
    settings: Settings,
}

impl Engine {
    /// Engine using the global [`settings()`].
    pub fn new(trie: Trie) -> Self {
        Self::with_settings(trie, settings().clone())
    }

    pub fn with_settings(trie: Trie, settings: Settings) -> Self {
        Self {
            trie,
            pending: StablePriorityQueue::new(),
            settings,
        }
    }

    pub fn from_vocabulary(vocab: Vocabulary) -> Self {
        Self::new(vocab.into_trie())
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn insert(&mut self, word: &str, frequency: u64) {
        self.trie.insert(word, frequency);
    }

    /// Direct lookup, bypassing the queue. `k` of `None` uses the configured
    /// default; larger counts are clamped to the configured maximum.
    pub fn autocomplete(&self, prefix: &str, k: Option<usize>) -> Vec<String> {
        let k = self.settings.autocomplete.resolve_k(k);
        self.trie.autocomplete(prefix, k)
    }

    /// Queue a request. `priority` of `None` uses the configured default.
    /// Returns the ticket identifying the eventual [`Completion`].
    pub fn submit(&mut self, request: AutocompleteRequest, priority: Option<f64>) -> u64 {
        let priority = priority.unwrap_or(self.settings.queue.default_priority);
        self.pending.enqueue(request, priority)
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Serve the next request, if any.
    pub fn dispatch_next(&mut self) -> Option<Completion> {
        let entry = self.pending.dequeue()?;
        let words = self.autocomplete(&entry.request.prefix, entry.request.k);
        debug!(
            ticket = entry.sequence,
            priority = entry.priority,
            prefix = %entry.request.prefix,
            results = words.len(),
            "dispatched"
        );
        Some(Completion {
            ticket: entry.sequence,
            priority: entry.priority,
            request: entry.request,
            words,
        })
    }

    /// The dispatch loop: serve requests until the queue is empty, handing
    /// each completion to `deliver`. Returns how many were served.
    pub fn run(&mut self, mut deliver: impl FnMut(Completion)) -> usize {
        let _span = debug_span!("dispatch", pending = self.pending.len()).entered();
        let mut served = 0;
        while let Some(completion) = self.dispatch_next() {
            deliver(completion);
            served += 1;
        }
        served
    }

    pub fn dispatch_all(&mut self) -> Vec<Completion> {
        let mut out = Vec::with_capacity(self.pending.len());
        self.run(|c| out.push(c));
        out
    }
}

impl Default for Engine {
    /// Engine over the reference vocabulary.
    fn default() -> Self {
        Self::from_vocabulary(Vocabulary::reference())
    }
}
