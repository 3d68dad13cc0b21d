use std::io;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, debug_span};

use typeahead_core::settings::AutocompleteSettings;
use typeahead_core::trie::Trie;
use typeahead_core::StablePriorityQueue;

use crate::engine::Completion;
use crate::request::AutocompleteRequest;

// ---------------------------------------------------------------------------
// Work type
// ---------------------------------------------------------------------------

struct Work {
    request: AutocompleteRequest,
    generation: u64,
}

type SharedQueue = Arc<Mutex<StablePriorityQueue<Work>>>;

#[derive(Debug, thiserror::Error)]
pub enum WorkerError {
    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[from] io::Error),

    #[error("worker lock poisoned")]
    Poisoned,

    #[error("worker thread has stopped")]
    Disconnected,
}

// ---------------------------------------------------------------------------
// AsyncWorker
// ---------------------------------------------------------------------------

/// Serves autocomplete requests on a background thread.
///
/// The trie is shared read-only. Pending requests live in a mutex-guarded
/// [`StablePriorityQueue`]; the lock is held only for a single enqueue or
/// dequeue, never while a lookup runs. Completions arrive on a channel in
/// the order the queue released them.
pub struct AsyncWorker {
    queue: SharedQueue,
    wake_tx: Option<mpsc::Sender<()>>,
    result_rx: Mutex<mpsc::Receiver<Completion>>,
    generation: Arc<AtomicU64>,
    paused: Arc<AtomicBool>,
    default_priority: f64,
    handle: Option<JoinHandle<()>>,
}

impl AsyncWorker {
    pub fn new(
        trie: Arc<Trie>,
        autocomplete: AutocompleteSettings,
        default_priority: f64,
    ) -> Result<Self, WorkerError> {
        let queue: SharedQueue = Arc::new(Mutex::new(StablePriorityQueue::new()));
        let generation = Arc::new(AtomicU64::new(0));
        let paused = Arc::new(AtomicBool::new(false));

        let (wake_tx, wake_rx) = mpsc::channel::<()>();
        let (result_tx, result_rx) = mpsc::channel::<Completion>();
        let handle = {
            let queue = Arc::clone(&queue);
            let gen = Arc::clone(&generation);
            let paused = Arc::clone(&paused);
            thread::Builder::new()
                .name("typeahead-dispatch".into())
                .spawn(move || {
                    dispatch_worker(wake_rx, result_tx, queue, gen, paused, trie, autocomplete);
                })?
        };

        Ok(Self {
            queue,
            wake_tx: Some(wake_tx),
            result_rx: Mutex::new(result_rx),
            generation,
            paused,
            default_priority,
            handle: Some(handle),
        })
    }

    /// Worker configured from the global settings.
    pub fn with_global_settings(trie: Arc<Trie>) -> Result<Self, WorkerError> {
        let s = typeahead_core::settings::settings();
        Self::new(trie, s.autocomplete.clone(), s.queue.default_priority)
    }

    /// Queue one request and wake the worker. Returns its ticket.
    pub fn submit(
        &self,
        request: AutocompleteRequest,
        priority: Option<f64>,
    ) -> Result<u64, WorkerError> {
        let ticket = self.enqueue(request, priority)?;
        self.wake()?;
        Ok(ticket)
    }

    /// Queue several requests under one lock, so the worker sees them all
    /// before it picks the first.
    pub fn submit_batch(
        &self,
        requests: impl IntoIterator<Item = (AutocompleteRequest, Option<f64>)>,
    ) -> Result<Vec<u64>, WorkerError> {
        let generation = self.generation.load(Ordering::SeqCst);
        let tickets = {
            let mut queue = self.queue.lock().map_err(|_| WorkerError::Poisoned)?;
            requests
                .into_iter()
                .map(|(request, priority)| {
                    queue.enqueue(
                        Work {
                            request,
                            generation,
                        },
                        priority.unwrap_or(self.default_priority),
                    )
                })
                .collect()
        };
        self.wake()?;
        Ok(tickets)
    }

    /// Drop every request submitted so far that has not been served yet.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Stop serving until [`AsyncWorker::resume`]. Submissions still queue.
    pub fn pause(&self) {
        self.paused.store(true, Ordering::SeqCst);
    }

    pub fn resume(&self) -> Result<(), WorkerError> {
        self.paused.store(false, Ordering::SeqCst);
        self.wake()
    }

    pub fn pending(&self) -> Result<usize, WorkerError> {
        let queue = self.queue.lock().map_err(|_| WorkerError::Poisoned)?;
        Ok(queue.len())
    }

    /// Next completion if one is ready. `Ok(None)` means nothing yet.
    pub fn try_recv(&self) -> Result<Option<Completion>, WorkerError> {
        let rx = self.result_rx.lock().map_err(|_| WorkerError::Poisoned)?;
        match rx.try_recv() {
            Ok(c) => Ok(Some(c)),
            Err(mpsc::TryRecvError::Empty) => Ok(None),
            Err(mpsc::TryRecvError::Disconnected) => Err(WorkerError::Disconnected),
        }
    }

    /// Wait up to `timeout` for the next completion. `Ok(None)` on timeout.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<Completion>, WorkerError> {
        let rx = self.result_rx.lock().map_err(|_| WorkerError::Poisoned)?;
        match rx.recv_timeout(timeout) {
            Ok(c) => Ok(Some(c)),
            Err(mpsc::RecvTimeoutError::Timeout) => Ok(None),
            Err(mpsc::RecvTimeoutError::Disconnected) => Err(WorkerError::Disconnected),
        }
    }

    fn enqueue(
        &self,
        request: AutocompleteRequest,
        priority: Option<f64>,
    ) -> Result<u64, WorkerError> {
        let generation = self.generation.load(Ordering::SeqCst);
        let mut queue = self.queue.lock().map_err(|_| WorkerError::Poisoned)?;
        Ok(queue.enqueue(
            Work {
                request,
                generation,
            },
            priority.unwrap_or(self.default_priority),
        ))
    }

    fn wake(&self) -> Result<(), WorkerError> {
        self.wake_tx
            .as_ref()
            .ok_or(WorkerError::Disconnected)?
            .send(())
            .map_err(|_| WorkerError::Disconnected)
    }
}

impl Drop for AsyncWorker {
    fn drop(&mut self) {
        // Closing the wake channel ends the worker loop.
        self.wake_tx.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

// ---------------------------------------------------------------------------
// Worker thread
// ---------------------------------------------------------------------------

fn dispatch_worker(
    wake_rx: mpsc::Receiver<()>,
    tx: mpsc::Sender<Completion>,
    queue: SharedQueue,
    gen: Arc<AtomicU64>,
    paused: Arc<AtomicBool>,
    trie: Arc<Trie>,
    autocomplete: AutocompleteSettings,
) {
    while wake_rx.recv().is_ok() {
        // Coalesce wake-ups; one pass drains the whole queue.
        while wake_rx.try_recv().is_ok() {}

        loop {
            if paused.load(Ordering::SeqCst) {
                break;
            }
            let entry = match queue.lock() {
                Ok(mut q) => q.dequeue(),
                Err(_) => return,
            };
            let Some(entry) = entry else {
                break;
            };

            if entry.request.generation != gen.load(Ordering::SeqCst) {
                debug!(ticket = entry.sequence, "dropping stale request");
                continue;
            }

            let Work { request, .. } = entry.request;
            let _span = debug_span!("serve", ticket = entry.sequence).entered();
            let k = autocomplete.resolve_k(request.k);
            let words = trie.autocomplete(&request.prefix, k);

            let completion = Completion {
                ticket: entry.sequence,
                priority: entry.priority,
                request,
                words,
            };
            if tx.send(completion).is_err() {
                return;
            }
        }
    }
}
