use crate::controllers::ports::discovery::{DiscoveryOutcome, DiscoveryPort};
use crate::core::discovery::request::DiscoveryRequest;
use crate::core::discovery::search::ConfigurationSearch;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;
use tracing::{debug, warn};

struct SharedState {
    latest_request: Mutex<Option<DiscoveryRequest>>,
    wake: Condvar,
    shutdown: AtomicBool,
}

/// Runs configuration searches on a dedicated thread, one at a time.
///
/// Results come back over a channel and are collected with
/// [`DiscoveryPort::poll`], so the presentation thread never waits on a
/// search.
pub struct DiscoveryWorker {
    shared: Arc<SharedState>,
    results: Receiver<DiscoveryOutcome>,
    worker: Option<JoinHandle<()>>,
}

impl DiscoveryWorker {
    pub fn new<R>(search: ConfigurationSearch<R>) -> Self
    where
        R: Rng + Send + 'static,
    {
        let shared = Arc::new(SharedState {
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
        });
        let (sender, results) = mpsc::channel();

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared, search, &sender);
        });

        Self {
            shared,
            results,
            worker: Some(worker),
        }
    }

    /// Stops the thread once any search in progress has finished.
    pub fn shutdown(&mut self) {
        {
            // the worker checks the flag under this lock before waiting
            let _guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            self.shared.shutdown.store(true, Ordering::Release);
        }
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                warn!("discovery thread panicked");
            }
        }
    }

    fn worker_loop<R: Rng>(
        shared: &Arc<SharedState>,
        mut search: ConfigurationSearch<R>,
        sender: &Sender<DiscoveryOutcome>,
    ) {
        loop {
            let request = {
                let mut guard = shared
                    .latest_request
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(request) = guard.take() {
                        break request;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let start = Instant::now();
            let outcome = search.discover(&request);

            debug!(
                elapsed_ms = start.elapsed().as_millis() as u64,
                accepted = outcome.is_ok(),
                "discovery run finished"
            );

            if sender.send(outcome).is_err() {
                return;
            }
        }
    }
}

impl DiscoveryPort for DiscoveryWorker {
    fn request(&mut self, request: DiscoveryRequest) {
        {
            let mut guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *guard = Some(request);
        }

        self.shared.wake.notify_one();
    }

    fn poll(&mut self) -> Option<DiscoveryOutcome> {
        self.results.try_recv().ok()
    }
}

impl Drop for DiscoveryWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
