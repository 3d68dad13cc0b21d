//! Request-level autocomplete on top of [`typeahead_core`].
//!
//! [`Engine`] owns a vocabulary trie and a stable priority queue of pending
//! requests and serves them in order. [`AsyncWorker`] does the same on a
//! background thread, with invalidation of stale requests.

pub mod async_worker;
pub mod engine;
pub mod request;
pub mod trace_init;

pub use typeahead_core;

pub use async_worker::{AsyncWorker, WorkerError};
pub use engine::{Completion, Engine};
pub use request::{parse_request_line, parse_requests, AutocompleteRequest, RequestParseError};
